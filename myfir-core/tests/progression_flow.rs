//! End-to-end progression scenarios through the tracker with an in-memory
//! store and pinned clocks.
use chrono::{DateTime, Duration, TimeZone, Utc};
use myfir_core::{
    ActivityKind, ExperienceReward, MemoryStore, ProgressStore, ProgressTracker,
};

fn day_one() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap()
}

#[test]
fn fresh_player_starts_at_level_one() {
    let tracker = ProgressTracker::new(MemoryStore::new());
    let progress = tracker.progress_at(day_one());
    assert_eq!(progress.level, 1);
    assert_eq!(progress.experience, 0);
    assert_eq!(progress.total_experience, 0);
    assert_eq!(progress.next_level_exp, 50);
    assert_eq!(progress.title, "はじめて の たんけんか");
}

#[test]
fn sixty_exp_levels_up_once_with_ten_spare() {
    let tracker = ProgressTracker::new(MemoryStore::new());
    let outcome = tracker.add_experience_at(
        ExperienceReward {
            base_exp: 60,
            bonus_exp: 0,
        },
        day_one(),
    );
    assert!(outcome.leveled_up);
    assert_eq!(outcome.new_progress.level, 2);
    assert_eq!(outcome.new_progress.experience, 10);
    assert_eq!(outcome.new_progress.title, "げんき な がくしゅうしゃ");
}

#[test]
fn lesson_completion_pays_the_first_time_bonus_once() {
    let tracker = ProgressTracker::new(MemoryStore::new());

    let first =
        tracker.complete_activity_at("lesson-1", ActivityKind::TypingLessonComplete, day_one());
    assert!(first.is_first_time);
    assert_eq!(first.exp_gained, 45);

    let again =
        tracker.complete_activity_at("lesson-1", ActivityKind::TypingLessonComplete, day_one());
    assert!(!again.is_first_time);
    assert_eq!(again.exp_gained, 15);
    assert_eq!(again.progress.total_experience, 60);
}

#[test]
fn returning_after_a_day_adds_the_daily_bonus() {
    let tracker = ProgressTracker::new(MemoryStore::new());
    tracker.complete_activity_at("lesson-1", ActivityKind::TypingLessonComplete, day_one());

    let next_day = day_one() + Duration::hours(25);
    let outcome =
        tracker.complete_activity_at("lesson-2", ActivityKind::TypingLessonComplete, next_day);
    assert!(outcome.is_first_time);
    assert_eq!(outcome.exp_gained, 15 + 30 + 10);
}

#[test]
fn one_big_reward_can_skip_to_level_three() {
    let tracker = ProgressTracker::new(MemoryStore::new());
    let outcome = tracker.add_experience_at(
        ExperienceReward {
            base_exp: 150,
            bonus_exp: 0,
        },
        day_one(),
    );
    assert!(outcome.leveled_up);
    assert_eq!(outcome.new_level, Some(3));
    assert_eq!(outcome.new_progress.title, "すごい チャレンジャー");
}

#[test]
fn reset_then_load_is_exactly_the_default_record() {
    let tracker = ProgressTracker::new(MemoryStore::new());
    tracker.complete_activity_at("lesson-1", ActivityKind::CourseComplete, day_one());
    tracker.reset();

    let after = tracker.progress_at(day_one());
    let mut fresh = tracker.progress_at(day_one());
    fresh.last_play_date = after.last_play_date;
    assert_eq!(after, fresh);
    assert_eq!(after.level, 1);
    assert!(after.completed_activities.is_empty());
}

#[test]
fn stored_wire_shape_matches_the_external_contract() {
    let store = MemoryStore::new();
    let tracker = ProgressTracker::new(store.clone());
    tracker.complete_activity_at("book-1", ActivityKind::ScrollBookComplete, day_one());

    let record = store.load().unwrap().unwrap();
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["totalExperience"], 44);
    assert_eq!(value["nextLevelExp"], 50);
    assert_eq!(value["completedActivities"][0], "book-1");
    assert!(value["lastPlayDate"].as_str().unwrap().starts_with("2025-06-01T09:00:00"));
}

#[test]
fn progress_survives_a_simulated_reload() {
    let store = MemoryStore::new();
    {
        let tracker = ProgressTracker::new(store.clone());
        tracker.complete_activity_at("click-1", ActivityKind::ClickGameComplete, day_one());
    }
    // A new tracker over the same backing store sees the same record.
    let tracker = ProgressTracker::new(store);
    let progress = tracker.progress_at(day_one() + Duration::hours(1));
    assert_eq!(progress.total_experience, 46);
    assert!(progress.has_completed("click-1"));
}
