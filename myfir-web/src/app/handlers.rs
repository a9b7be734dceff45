use crate::app::state::AppState;
use crate::storage::{self, export_backup, import_backup};
use myfir_core::{ActivityKind, ActivityOutcome, LevelUpEvent, NotificationQueue};
use yew::prelude::*;

/// The callbacks the pages and overlays are wired with.
#[derive(Clone, PartialEq)]
pub struct Handlers {
    pub play: Callback<String>,
    pub go_home: Callback<()>,
    pub activity_complete: Callback<(String, ActivityKind)>,
    pub dismiss_level_up: Callback<()>,
    pub open_backup: Callback<()>,
    pub close_backup: Callback<()>,
    pub reset_progress: Callback<()>,
    pub export_backup: Callback<()>,
    pub import_backup: Callback<String>,
}

/// Build the handler set. Navigation callbacks are passed in because only
/// the browser shell has a navigator; tests pass no-ops.
pub fn build_handlers(state: &AppState, play: Callback<String>, go_home: Callback<()>) -> Handlers {
    Handlers {
        play,
        go_home,
        activity_complete: build_activity_complete(state),
        dismiss_level_up: build_dismiss_level_up(state),
        open_backup: build_show_backup(state, true),
        close_backup: build_show_backup(state, false),
        reset_progress: build_reset(state),
        export_backup: build_export(),
        import_backup: build_import(state),
    }
}

/// Record a completed activity through the browser tracker: refresh the
/// shared record and queue a level-up announcement when the level rose.
pub fn complete_and_queue(
    state: &AppState,
    activity_id: &str,
    kind: ActivityKind,
) -> ActivityOutcome {
    let outcome = storage::progress_tracker().complete_activity(activity_id, kind);
    if let Some(event) = level_up_event(&outcome) {
        let mut queue = (*state.level_ups).clone();
        crate::a11y::set_status(&format!("レベル {} に あがったよ！", event.level));
        queue.enqueue(event);
        state.level_ups.set(queue);
    }
    state.progress.set(outcome.progress.clone());
    outcome
}

/// The announcement for an outcome, when the completion raised the level.
fn level_up_event(outcome: &ActivityOutcome) -> Option<LevelUpEvent> {
    outcome.leveled_up.then(|| LevelUpEvent {
        level: outcome.progress.level,
        title: outcome.progress.title.clone(),
    })
}

pub fn build_activity_complete(state: &AppState) -> Callback<(String, ActivityKind)> {
    let state = state.clone();
    Callback::from(move |(activity_id, kind): (String, ActivityKind)| {
        complete_and_queue(&state, &activity_id, kind);
    })
}

pub fn build_dismiss_level_up(state: &AppState) -> Callback<()> {
    let queue_handle = state.level_ups.clone();
    Callback::from(move |()| {
        let mut queue = (*queue_handle).clone();
        let _ = queue.dismiss_front();
        queue_handle.set(queue);
    })
}

fn build_show_backup(state: &AppState, show: bool) -> Callback<()> {
    let show_handle = state.show_backup.clone();
    Callback::from(move |()| show_handle.set(show))
}

pub fn build_reset(state: &AppState) -> Callback<()> {
    let progress_handle = state.progress.clone();
    let queue_handle = state.level_ups.clone();
    Callback::from(move |()| {
        let tracker = storage::progress_tracker();
        tracker.reset();
        progress_handle.set(tracker.progress());
        queue_handle.set(NotificationQueue::new());
    })
}

/// Copy the backup JSON to the clipboard for parents to stash somewhere.
pub fn build_export() -> Callback<()> {
    Callback::from(move |()| match export_backup() {
        Ok(text) => {
            if let Some(win) = crate::dom::window() {
                let _ = win.navigator().clipboard().write_text(&text);
            }
        }
        Err(e) => crate::dom::console_error(&format!("backup export failed: {e}")),
    })
}

pub fn build_import(state: &AppState) -> Callback<String> {
    let progress_handle = state.progress.clone();
    Callback::from(move |text: String| match import_backup(&text) {
        Ok(written) => {
            log::info!("backup import wrote {written} keys");
            progress_handle.set(storage::progress_tracker().progress());
        }
        Err(e) => log::warn!("backup import rejected: {e}"),
    })
}
