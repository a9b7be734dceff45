use crate::catalog::find_activity;
use myfir_core::ActivityKind;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub slug: String,
    pub on_complete: Callback<(String, ActivityKind)>,
    pub on_back: Callback<()>,
}

/// Frame around one activity: name, play area and the big finish button.
///
/// The mini-games themselves are placeholders for now; finishing one
/// reports a completion ID of `<slug>-1` with the activity's reward type.
#[function_component(PlayPage)]
pub fn play_page(props: &Props) -> Html {
    let back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    let Some(activity) = find_activity(&props.slug) else {
        return html! {
            <main class="play play--missing">
                <p>{"この あそび は みつからない よ"}</p>
                <button class="play__back" onclick={back}>{"もどる"}</button>
            </main>
        };
    };

    let complete = {
        let on_complete = props.on_complete.clone();
        let activity_id = format!("{}-1", activity.slug);
        let kind = activity.kind;
        Callback::from(move |_: MouseEvent| on_complete.emit((activity_id.clone(), kind)))
    };

    html! {
        <main class="play">
            <header class="play__header">
                <button class="play__back" aria-label="もどる" onclick={back}>{"←"}</button>
                <h1>
                    <span aria-hidden="true">{ activity.emoji }</span>
                    { activity.name }
                </h1>
            </header>
            <p class="play__lead">{ activity.lead }</p>
            <div class="play__stage">
                <p>{"じゅんび しているよ。もうすこし まってね！"}</p>
            </div>
            <button class="play__complete" onclick={complete}>{"できた！"}</button>
        </main>
    }
}
