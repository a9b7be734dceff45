use myfir_core::PlayerProgress;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub progress: PlayerProgress,
    /// Small pill for page headers instead of the full card.
    #[prop_or_default]
    pub compact: bool,
}

/// The player's level, title and experience bar.
#[function_component(PlayerLevel)]
pub fn player_level(props: &Props) -> Html {
    let progress = &props.progress;
    let pct = progress.progress_percentage();
    let bar_style = format!("width: {pct}%");

    if props.compact {
        return html! {
            <div class="player-level player-level--compact" data-testid="player-level">
                <span class="player-level__star" aria-hidden="true">{"⭐"}</span>
                <span class="player-level__badge">{ format!("Lv.{}", progress.level) }</span>
                <div class="player-level__bar" role="presentation">
                    <div class="player-level__bar-fill" style={bar_style}></div>
                </div>
            </div>
        };
    }

    html! {
        <div class="player-level" data-testid="player-level">
            <div class="player-level__heading">
                <span class="player-level__star" aria-hidden="true">{"⭐"}</span>
                <span class="player-level__badge">{ format!("レベル {}", progress.level) }</span>
            </div>
            <p class="player-level__title">{ progress.title.clone() }</p>
            <div class="player-level__exp">
                <span>{"けいけんち"}</span>
                <span>{ format!("{} / {}", progress.experience, progress.next_level_exp) }</span>
            </div>
            <div
                class="player-level__bar"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow={pct.to_string()}
            >
                <div class="player-level__bar-fill" style={bar_style}></div>
            </div>
            <div class="player-level__footer">
                <span>{ format!("つぎまで: {}", progress.next_level_exp.saturating_sub(progress.experience)) }</span>
                <span>{ format!("がんばり: {pct}%") }</span>
            </div>
        </div>
    }
}
