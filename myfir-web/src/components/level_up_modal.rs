use myfir_core::{LevelUpEvent, celebration_for};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const AUTO_DISMISS_MS: i32 = 4000;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub event: LevelUpEvent,
    pub on_dismiss: Callback<()>,
}

/// Celebration overlay for one level-up. Dismisses on tap, the close
/// button, the backdrop, or on its own after a few seconds.
#[function_component(LevelUpModal)]
pub fn level_up_modal(props: &Props) -> Html {
    let on_dismiss = props.on_dismiss.clone();

    {
        let on_dismiss = on_dismiss.clone();
        // Restart the timer whenever a different event takes the front of
        // the queue; cancel it if this modal unmounts first.
        use_effect_with(props.event.clone(), move |_| {
            let cancelled = Rc::new(Cell::new(false));
            let flag = cancelled.clone();
            spawn_local(async move {
                if crate::dom::sleep_ms(AUTO_DISMISS_MS).await.is_ok() && !flag.get() {
                    on_dismiss.emit(());
                }
            });
            move || cancelled.set(true)
        });
    }

    let celebration = celebration_for(props.event.level);
    let dismiss = {
        let on_dismiss = on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };
    let swallow = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="level-up-backdrop" onclick={dismiss.clone()}>
            <div
                class="level-up-modal"
                role="dialog"
                aria-modal="true"
                aria-label={format!("レベル {} に あがった", props.event.level)}
                onclick={swallow}
            >
                <button
                    class="level-up-modal__close"
                    aria-label="通知を閉じる"
                    onclick={dismiss.clone()}
                >
                    {"×"}
                </button>
                <div class="level-up-modal__emoji" aria-hidden="true">{ celebration.emoji }</div>
                <p class="level-up-modal__cheer">{ celebration.message }</p>
                <p class="level-up-modal__level">{ format!("レベル {}", props.event.level) }</p>
                <p class="level-up-modal__title">{ props.event.title.clone() }</p>
                <button class="level-up-modal__continue" onclick={dismiss}>
                    {"つづける！"}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn render(event: LevelUpEvent) -> String {
        let props = Props {
            event,
            on_dismiss: Callback::noop(),
        };
        block_on(LocalServerRenderer::<LevelUpModal>::with_props(props).render())
    }

    #[test]
    fn shows_the_new_level_and_title() {
        let html = render(LevelUpEvent {
            level: 3,
            title: String::from("すごい チャレンジャー"),
        });
        assert!(html.contains("level-up-modal"));
        assert!(html.contains("レベル 3"));
        assert!(html.contains("すごい チャレンジャー"));
        assert!(html.contains("つづける！"));
        assert!(html.contains("通知を閉じる"));
    }

    #[test]
    fn celebration_flair_cycles_with_the_level() {
        let html = render(LevelUpEvent {
            level: 2,
            title: String::from("t"),
        });
        assert!(html.contains("🏆"));
        assert!(html.contains("よくできました！"));
    }
}
