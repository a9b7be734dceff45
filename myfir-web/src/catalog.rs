//! The activity catalog: the mini-games shown on the hub and the reward
//! type each one reports on completion.
use myfir_core::ActivityKind;

/// A playable activity tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activity {
    /// URL slug, also the prefix of completion IDs (`"typing"` → `"typing-1"`).
    pub slug: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    /// What a child is practicing, shown under the tile name.
    pub lead: &'static str,
    pub kind: ActivityKind,
}

pub const ACTIVITIES: [Activity; 6] = [
    Activity {
        slug: "pc-basics",
        name: "パソコンの きほん",
        emoji: "🖥️",
        lead: "パソコンと なかよくなろう",
        kind: ActivityKind::PcBasicsComplete,
    },
    Activity {
        slug: "mouse-drawing",
        name: "マウスで おえかき",
        emoji: "🎨",
        lead: "マウスを うごかしてみよう",
        kind: ActivityKind::MouseDrawingComplete,
    },
    Activity {
        slug: "typing",
        name: "タイピング れんしゅう",
        emoji: "⌨️",
        lead: "キーボードを おしてみよう",
        kind: ActivityKind::TypingLessonComplete,
    },
    Activity {
        slug: "drag-drop",
        name: "おかたづけ ゲーム",
        emoji: "📦",
        lead: "ドラッグで おかたづけ",
        kind: ActivityKind::DragDropComplete,
    },
    Activity {
        slug: "click-game",
        name: "みつけて クリック",
        emoji: "🐾",
        lead: "どうぶつを さがそう",
        kind: ActivityKind::ClickGameComplete,
    },
    Activity {
        slug: "scroll-book",
        name: "スクロール えほん",
        emoji: "📖",
        lead: "えほんを めくってみよう",
        kind: ActivityKind::ScrollBookComplete,
    },
];

/// Look up an activity by its URL slug.
#[must_use]
pub fn find_activity(slug: &str) -> Option<&'static Activity> {
    ACTIVITIES.iter().find(|activity| activity.slug == slug)
}
