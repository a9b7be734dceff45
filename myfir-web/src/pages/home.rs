use crate::catalog::ACTIVITIES;
use crate::components::player_level::PlayerLevel;
use myfir_core::PlayerProgress;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub progress: PlayerProgress,
    pub on_play: Callback<String>,
    pub on_open_backup: Callback<()>,
}

/// The hub: the player's level card and one big tile per activity.
#[function_component(HomePage)]
pub fn home_page(props: &Props) -> Html {
    let open_backup = {
        let on_open_backup = props.on_open_backup.clone();
        Callback::from(move |_: MouseEvent| on_open_backup.emit(()))
    };

    let tiles = ACTIVITIES.iter().map(|activity| {
        let on_play = props.on_play.clone();
        let slug = activity.slug;
        let onclick = Callback::from(move |_: MouseEvent| on_play.emit(slug.to_string()));
        let done = props.progress.has_completed(&format!("{slug}-1"));
        html! {
            <button key={slug} class="activity-tile" {onclick}>
                <span class="activity-tile__emoji" aria-hidden="true">{ activity.emoji }</span>
                <span class="activity-tile__name">{ activity.name }</span>
                <span class="activity-tile__lead">{ activity.lead }</span>
                if done {
                    <span class="activity-tile__done" aria-label="クリアずみ">{"✅"}</span>
                }
            </button>
        }
    });

    html! {
        <main class="home">
            <header class="home__header">
                <h1>{"マイファー"}</h1>
                <button
                    class="home__backup-button"
                    aria-label="ほごしゃ メニュー を ひらく"
                    onclick={open_backup}
                >
                    {"⚙️"}
                </button>
            </header>
            <PlayerLevel progress={props.progress.clone()} />
            <h2 class="home__prompt">{"きょう は なに で あそぶ？"}</h2>
            <div class="home__grid">
                { for tiles }
            </div>
        </main>
    }
}
