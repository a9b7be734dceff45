//! Pending level-up announcements.
//!
//! The queue is a plain value type held in UI shared state; it is never
//! persisted, so a reload drops undismissed announcements (the level itself
//! is already saved).
use std::collections::VecDeque;

/// A level increase awaiting presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelUpEvent {
    pub level: u32,
    pub title: String,
}

/// FIFO queue of level-up events, shown one at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationQueue {
    items: VecDeque<LevelUpEvent>,
}

impl NotificationQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, event: LevelUpEvent) {
        self.items.push_back(event);
    }

    /// The event currently due for display, if any.
    #[must_use]
    pub fn peek_front(&self) -> Option<&LevelUpEvent> {
        self.items.front()
    }

    /// Acknowledge the visible event, promoting the next one.
    pub fn dismiss_front(&mut self) -> Option<LevelUpEvent> {
        self.items.pop_front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Celebration flair shown with a level-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Celebration {
    pub emoji: &'static str,
    pub message: &'static str,
}

const CELEBRATIONS: [Celebration; 5] = [
    Celebration {
        emoji: "🎉",
        message: "レベルアップ！",
    },
    Celebration {
        emoji: "⭐",
        message: "すごいね！",
    },
    Celebration {
        emoji: "🏆",
        message: "よくできました！",
    },
    Celebration {
        emoji: "🌟",
        message: "すばらしい！",
    },
    Celebration {
        emoji: "🎊",
        message: "かんぺき！",
    },
];

/// Pick the celebration for a level; entries cycle every five levels.
#[must_use]
pub fn celebration_for(level: u32) -> Celebration {
    CELEBRATIONS[(level as usize) % CELEBRATIONS.len()]
}
