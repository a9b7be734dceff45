use wasm_bindgen::JsCast;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_close: Callback<()>,
    pub on_reset: Callback<()>,
    pub on_export: Callback<()>,
    pub on_import: Callback<String>,
}

/// Parent-facing panel: copy a backup of the saved data, paste one back
/// in, or wipe the save. Reset asks for a second click before it fires.
#[function_component(BackupPanel)]
pub fn backup_panel(props: &Props) -> Html {
    let textarea_ref = use_node_ref();
    let reset_armed = use_state(|| false);

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let export = {
        let on_export = props.on_export.clone();
        Callback::from(move |_: MouseEvent| on_export.emit(()))
    };
    let import = {
        let on_import = props.on_import.clone();
        let textarea_ref = textarea_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(area) = textarea_ref
                .get()
                .and_then(|node| node.dyn_into::<HtmlTextAreaElement>().ok())
            else {
                return;
            };
            let text = area.value();
            if !text.trim().is_empty() {
                on_import.emit(text);
            }
        })
    };
    let reset = {
        let on_reset = props.on_reset.clone();
        let reset_armed = reset_armed.clone();
        Callback::from(move |_: MouseEvent| {
            if *reset_armed {
                reset_armed.set(false);
                on_reset.emit(());
            } else {
                reset_armed.set(true);
            }
        })
    };

    html! {
        <div class="backup-backdrop">
            <section class="backup-panel" role="dialog" aria-label="ほごしゃ メニュー">
                <header class="backup-panel__header">
                    <h2>{"ほごしゃ メニュー"}</h2>
                    <button class="backup-panel__close" aria-label="とじる" onclick={close}>
                        {"×"}
                    </button>
                </header>

                <div class="backup-panel__section">
                    <h3>{"バックアップ を コピー"}</h3>
                    <p>{"きろく を クリップボード に コピーします。"}</p>
                    <button class="backup-panel__export" onclick={export}>{"コピーする"}</button>
                </div>

                <div class="backup-panel__section">
                    <h3>{"バックアップ を よみこむ"}</h3>
                    <textarea
                        ref={textarea_ref}
                        class="backup-panel__input"
                        placeholder="ここ に はりつけて ください"
                        rows="5"
                    />
                    <button class="backup-panel__import" onclick={import}>{"よみこむ"}</button>
                </div>

                <div class="backup-panel__section backup-panel__section--danger">
                    <h3>{"さいしょ から"}</h3>
                    <button class="backup-panel__reset" onclick={reset}>
                        { if *reset_armed { "ほんとう に けす？" } else { "きろく を けす" } }
                    </button>
                </div>
            </section>
        </div>
    }
}
