//! The persisted player-progress record.
use crate::config::LevelCurve;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A player's progress, persisted as a single JSON record.
///
/// `total_experience` is the source of truth; `level`, `experience`,
/// `next_level_exp` and `title` are derived from it through the level curve
/// and are stored only so external consumers can read them without
/// recomputing. Field names on the wire are fixed (external backup tooling
/// reads this exact shape).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProgress {
    pub level: u32,
    /// Experience accrued within the current level.
    pub experience: u32,
    /// Cumulative lifetime experience; never decreases.
    pub total_experience: u32,
    /// Experience span of the current level; 0 at the max level.
    pub next_level_exp: u32,
    pub title: String,
    /// Activity IDs that have already earned the first-time bonus.
    pub completed_activities: BTreeSet<String>,
    /// Timestamp of the most recent progress-affecting event.
    pub last_play_date: DateTime<Utc>,
}

impl PlayerProgress {
    /// Fresh record for a player who has never played.
    #[must_use]
    pub fn initial(curve: &LevelCurve, now: DateTime<Utc>) -> Self {
        let span = curve.threshold(2.min(curve.max_level())) - curve.threshold(1);
        Self {
            level: 1,
            experience: 0,
            total_experience: 0,
            next_level_exp: span,
            title: curve.title(1).to_string(),
            completed_activities: BTreeSet::new(),
            last_play_date: now,
        }
    }

    /// Whether `activity_id` has already earned its first-time bonus.
    #[must_use]
    pub fn has_completed(&self, activity_id: &str) -> bool {
        self.completed_activities.contains(activity_id)
    }

    /// Progress toward the next level as a whole percentage (0-100).
    ///
    /// Reports 100 at the max level, where `next_level_exp` is 0.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn progress_percentage(&self) -> u8 {
        if self.next_level_exp == 0 {
            return 100;
        }
        let pct = (f64::from(self.experience) / f64::from(self.next_level_exp) * 100.0).round();
        pct.min(100.0) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn initial_record_matches_level_one_defaults() {
        let curve = LevelCurve::default_config();
        let progress = PlayerProgress::initial(&curve, fixed_now());
        assert_eq!(progress.level, 1);
        assert_eq!(progress.experience, 0);
        assert_eq!(progress.total_experience, 0);
        assert_eq!(progress.next_level_exp, 50);
        assert_eq!(progress.title, "はじめて の たんけんか");
        assert!(progress.completed_activities.is_empty());
    }

    #[test]
    fn percentage_is_half_way_at_25_of_50() {
        let curve = LevelCurve::default_config();
        let progress = PlayerProgress {
            experience: 25,
            next_level_exp: 50,
            ..PlayerProgress::initial(&curve, fixed_now())
        };
        assert_eq!(progress.progress_percentage(), 50);
    }

    #[test]
    fn percentage_saturates_at_max_level() {
        let curve = LevelCurve::default_config();
        let progress = PlayerProgress {
            next_level_exp: 0,
            ..PlayerProgress::initial(&curve, fixed_now())
        };
        assert_eq!(progress.progress_percentage(), 100);
    }

    #[test]
    fn wire_shape_uses_the_documented_field_names() {
        let curve = LevelCurve::default_config();
        let mut progress = PlayerProgress::initial(&curve, fixed_now());
        progress.completed_activities.insert(String::from("lesson-1"));
        let value = serde_json::to_value(&progress).unwrap();
        for key in [
            "level",
            "experience",
            "totalExperience",
            "nextLevelExp",
            "title",
            "completedActivities",
            "lastPlayDate",
        ] {
            assert!(value.get(key).is_some(), "missing wire field {key}");
        }
        assert_eq!(value["completedActivities"][0], "lesson-1");
    }

    #[test]
    fn accepts_timestamps_written_by_the_previous_app() {
        // The old web app stored `new Date().toISOString()` strings.
        let json = r#"{
            "level": 1,
            "experience": 0,
            "totalExperience": 0,
            "nextLevelExp": 50,
            "title": "はじめて の たんけんか",
            "completedActivities": [],
            "lastPlayDate": "2025-06-01T09:00:00.000Z"
        }"#;
        let parsed: PlayerProgress = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.last_play_date, fixed_now());
    }
}
