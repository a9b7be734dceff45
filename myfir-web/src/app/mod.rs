#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

use yew::prelude::*;

pub mod handlers;
pub mod state;

use handlers::Handlers;
use state::AppState;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let app_state = state::use_app_state();
    let navigator = use_navigator();

    let play = {
        let navigator = navigator.clone();
        Callback::from(move |slug: String| {
            if let Some(nav) = navigator.as_ref() {
                nav.push(&Route::play(&slug));
            }
        })
    };
    let go_home = Callback::from(move |()| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::Home);
        }
    });

    let handlers = handlers::build_handlers(&app_state, play, go_home);
    let render = {
        let app_state = app_state.clone();
        let handlers = handlers.clone();
        move |route: Route| render_app(&app_state, &route, &handlers)
    };

    html! { <Switch<Route> render={render} /> }
}

/// Render the page for a route plus the overlays that sit above every page.
/// Kept free of router hooks so native tests can drive it directly.
pub fn render_app(state: &AppState, route: &crate::router::Route, handlers: &Handlers) -> Html {
    html! {
        <>
            { render_route(state, route, handlers) }
            { render_overlays(state, handlers) }
        </>
    }
}

fn render_route(state: &AppState, route: &crate::router::Route, handlers: &Handlers) -> Html {
    use crate::router::Route;
    match route {
        Route::Home => html! {
            <crate::pages::home::HomePage
                progress={(*state.progress).clone()}
                on_play={handlers.play.clone()}
                on_open_backup={handlers.open_backup.clone()}
            />
        },
        Route::Play { slug } => html! {
            <crate::pages::play::PlayPage
                slug={slug.clone()}
                on_complete={handlers.activity_complete.clone()}
                on_back={handlers.go_home.clone()}
            />
        },
        Route::NotFound => html! {
            <crate::pages::not_found::NotFound on_go_home={handlers.go_home.clone()} />
        },
    }
}

fn render_overlays(state: &AppState, handlers: &Handlers) -> Html {
    html! {
        <>
            // Live region for screen-reader announcements of level-ups.
            <div id="player-status" class="sr-only" aria-live="polite"></div>
            { state.level_ups.peek_front().map(|event| html! {
                <crate::components::level_up_modal::LevelUpModal
                    event={event.clone()}
                    on_dismiss={handlers.dismiss_level_up.clone()}
                />
            }) }
            { (*state.show_backup).then(|| html! {
                <crate::components::backup_panel::BackupPanel
                    on_close={handlers.close_backup.clone()}
                    on_reset={handlers.reset_progress.clone()}
                    on_export={handlers.export_backup.clone()}
                    on_import={handlers.import_backup.clone()}
                />
            }) }
        </>
    }
}
