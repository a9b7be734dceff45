//! Glue between the leveling engine and a progress store.
use crate::activity::ActivityKind;
use crate::config::ProgressionConfig;
use crate::leveling::{self, ActivityOutcome, ExperienceOutcome, ExperienceReward};
use crate::progress::PlayerProgress;
use crate::storage::ProgressStore;
use chrono::{DateTime, Utc};

/// The single writer of player progress: loads (healing as it goes), runs
/// the pure engine, persists the result.
///
/// Store failures are logged and swallowed; the in-memory record stays
/// authoritative for the session even when persistence is broken.
pub struct ProgressTracker<S: ProgressStore> {
    store: S,
    config: ProgressionConfig,
}

impl<S: ProgressStore> ProgressTracker<S> {
    /// Tracker over `store` with the shipped tables.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_config(store, ProgressionConfig::default_config())
    }

    /// Tracker with injected tables (tests use a shorter curve).
    #[must_use]
    pub const fn with_config(store: S, config: ProgressionConfig) -> Self {
        Self { store, config }
    }

    #[must_use]
    pub const fn config(&self) -> &ProgressionConfig {
        &self.config
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Current progress: the stored record with its derived fields rebuilt,
    /// or the default initial record when nothing valid is stored.
    #[must_use]
    pub fn progress(&self) -> PlayerProgress {
        self.progress_at(Utc::now())
    }

    /// Like [`Self::progress`] with an explicit clock, for tests.
    #[must_use]
    pub fn progress_at(&self, now: DateTime<Utc>) -> PlayerProgress {
        match self.store.load() {
            Ok(Some(record)) => leveling::recalculate(&record, &self.config.curve),
            Ok(None) => PlayerProgress::initial(&self.config.curve, now),
            Err(e) => {
                log::warn!("failed to load player progress: {e}");
                PlayerProgress::initial(&self.config.curve, now)
            }
        }
    }

    /// Add a reward to the current record and persist the result.
    pub fn add_experience(&self, reward: ExperienceReward) -> ExperienceOutcome {
        self.add_experience_at(reward, Utc::now())
    }

    pub fn add_experience_at(
        &self,
        reward: ExperienceReward,
        now: DateTime<Utc>,
    ) -> ExperienceOutcome {
        let current = self.progress_at(now);
        let outcome = leveling::add_experience(&current, reward, now, &self.config.curve);
        self.persist(&outcome.new_progress);
        outcome
    }

    /// Record an activity completion (base reward plus any first-time and
    /// daily bonuses) and persist the result in one write.
    pub fn complete_activity(&self, activity_id: &str, kind: ActivityKind) -> ActivityOutcome {
        self.complete_activity_at(activity_id, kind, Utc::now())
    }

    pub fn complete_activity_at(
        &self,
        activity_id: &str,
        kind: ActivityKind,
        now: DateTime<Utc>,
    ) -> ActivityOutcome {
        let current = self.progress_at(now);
        let outcome = leveling::complete_activity(&current, activity_id, kind, now, &self.config);
        self.persist(&outcome.progress);
        outcome
    }

    /// Remove the stored record; the next load starts over at level 1.
    pub fn reset(&self) {
        if let Err(e) = self.store.clear() {
            log::warn!("failed to reset player progress: {e}");
        }
    }

    fn persist(&self, progress: &PlayerProgress) {
        if let Err(e) = self.store.save(progress) {
            log::warn!("failed to save player progress: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LevelCurve, RewardTable};
    use crate::storage::MemoryStore;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap()
    }

    fn tiny_config() -> ProgressionConfig {
        // A three-level curve keeps level-up scenarios short.
        let curve = LevelCurve::new(
            vec![0, 10, 30],
            vec![
                String::from("first"),
                String::from("second"),
                String::from("third"),
            ],
        )
        .unwrap();
        ProgressionConfig {
            curve,
            rewards: RewardTable::default_config(),
        }
    }

    #[test]
    fn fresh_store_yields_the_initial_record() {
        let tracker = ProgressTracker::with_config(MemoryStore::new(), tiny_config());
        let progress = tracker.progress_at(fixed_now());
        assert_eq!(progress.level, 1);
        assert_eq!(progress.title, "first");
        assert_eq!(progress.next_level_exp, 10);
    }

    #[test]
    fn add_experience_persists_the_new_record() {
        let store = MemoryStore::new();
        let tracker = ProgressTracker::with_config(store.clone(), tiny_config());
        let outcome = tracker.add_experience_at(
            ExperienceReward {
                base_exp: 12,
                bonus_exp: 0,
            },
            fixed_now(),
        );
        assert!(outcome.leveled_up);
        assert_eq!(outcome.new_level, Some(2));

        let stored = store.load().unwrap().unwrap();
        assert_eq!(stored.total_experience, 12);
        assert_eq!(stored.level, 2);
    }

    #[test]
    fn completion_writes_activity_and_experience_together() {
        let store = MemoryStore::new();
        let tracker = ProgressTracker::with_config(store.clone(), tiny_config());
        tracker.complete_activity_at("lesson-1", ActivityKind::TypingLessonComplete, fixed_now());

        let stored = store.load().unwrap().unwrap();
        assert!(stored.has_completed("lesson-1"));
        assert_eq!(stored.total_experience, 45);
    }

    #[test]
    fn loading_heals_a_record_with_stale_derived_fields() {
        let store = MemoryStore::new();
        let config = tiny_config();
        let mut stale = PlayerProgress::initial(&config.curve, fixed_now());
        stale.total_experience = 31;
        stale.level = 1;
        stale.title = String::from("wrong");
        store.save(&stale).unwrap();

        let tracker = ProgressTracker::with_config(store, config);
        let healed = tracker.progress_at(fixed_now());
        assert_eq!(healed.level, 3);
        assert_eq!(healed.title, "third");
        assert_eq!(healed.experience, 1);
        assert_eq!(healed.next_level_exp, 0);
    }

    #[test]
    fn reset_returns_to_defaults() {
        let store = MemoryStore::new();
        let tracker = ProgressTracker::with_config(store, tiny_config());
        tracker.complete_activity_at("lesson-1", ActivityKind::TypingLessonComplete, fixed_now());
        tracker.reset();

        let progress = tracker.progress_at(fixed_now());
        assert_eq!(progress.level, 1);
        assert_eq!(progress.total_experience, 0);
        assert!(progress.completed_activities.is_empty());
    }
}
