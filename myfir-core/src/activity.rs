//! Activity types and their wire identifiers.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Raised when an activity-type slug does not name a known activity.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown activity type: {0}")]
pub struct UnknownActivity(pub String);

/// The closed set of rewardable activity types.
///
/// Keeping this an enum (rather than an open string key) means an unknown
/// type is rejected at the boundary instead of feeding an undefined reward
/// into the experience total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityKind {
    TypingLessonComplete,
    TypingPerfectScore,
    MouseDrawingComplete,
    DragDropComplete,
    ClickGameComplete,
    ScrollBookComplete,
    PcBasicsComplete,
    CourseComplete,
}

impl ActivityKind {
    pub const ALL: [Self; 8] = [
        Self::TypingLessonComplete,
        Self::TypingPerfectScore,
        Self::MouseDrawingComplete,
        Self::DragDropComplete,
        Self::ClickGameComplete,
        Self::ScrollBookComplete,
        Self::PcBasicsComplete,
        Self::CourseComplete,
    ];

    /// Stable slug used in storage and by external tooling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TypingLessonComplete => "typing-lesson-complete",
            Self::TypingPerfectScore => "typing-perfect-score",
            Self::MouseDrawingComplete => "mouse-drawing-complete",
            Self::DragDropComplete => "drag-drop-complete",
            Self::ClickGameComplete => "click-game-complete",
            Self::ScrollBookComplete => "scroll-book-complete",
            Self::PcBasicsComplete => "pc-basics-complete",
            Self::CourseComplete => "course-complete",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityKind {
    type Err = UnknownActivity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownActivity(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip_for_every_kind() {
        for kind in ActivityKind::ALL {
            assert_eq!(kind.as_str().parse::<ActivityKind>(), Ok(kind));
        }
    }

    #[test]
    fn unknown_slug_is_rejected() {
        let err = "homework-complete".parse::<ActivityKind>().unwrap_err();
        assert_eq!(err, UnknownActivity(String::from("homework-complete")));
        assert_eq!(
            err.to_string(),
            "unknown activity type: homework-complete"
        );
    }

    #[test]
    fn serde_uses_kebab_case_slugs() {
        let json = serde_json::to_string(&ActivityKind::PcBasicsComplete).unwrap();
        assert_eq!(json, "\"pc-basics-complete\"");
        let parsed: ActivityKind = serde_json::from_str("\"drag-drop-complete\"").unwrap();
        assert_eq!(parsed, ActivityKind::DragDropComplete);
    }
}
