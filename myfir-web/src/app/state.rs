use myfir_core::{NotificationQueue, PlayerProgress};
use yew::prelude::*;

/// Shared UI state. The progress record mirrors what the tracker last
/// persisted; the level-up queue lives only here and dies with the page.
#[derive(Clone)]
pub struct AppState {
    pub progress: UseStateHandle<PlayerProgress>,
    pub level_ups: UseStateHandle<NotificationQueue>,
    pub show_backup: UseStateHandle<bool>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        progress: use_state(|| crate::storage::progress_tracker().progress()),
        level_ups: use_state(NotificationQueue::new),
        show_backup: use_state(|| false),
    }
}
