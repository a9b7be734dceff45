use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_go_home: Callback<()>,
}

#[function_component(NotFound)]
pub fn not_found(props: &Props) -> Html {
    let go_home = {
        let on_go_home = props.on_go_home.clone();
        Callback::from(move |_: MouseEvent| on_go_home.emit(()))
    };
    html! {
        <main class="not-found">
            <p class="not-found__emoji" aria-hidden="true">{"🔍"}</p>
            <p>{"ページ が みつからない よ"}</p>
            <button class="not-found__home" onclick={go_home}>{"ホーム に もどる"}</button>
        </main>
    }
}
