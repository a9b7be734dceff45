//! Pure leveling computations: derivation, experience accrual and
//! activity-completion bookkeeping. No I/O happens here; persistence is the
//! tracker's job.
use crate::activity::ActivityKind;
use crate::config::{LevelCurve, ProgressionConfig};
use crate::progress::PlayerProgress;
use chrono::{DateTime, Duration, Utc};

/// Derived fields for a given cumulative experience total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelSnapshot {
    pub level: u32,
    pub experience: u32,
    pub next_level_exp: u32,
    pub title: String,
}

/// A reward to apply in one mutation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExperienceReward {
    pub base_exp: u32,
    pub bonus_exp: u32,
}

/// Result of adding experience to a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceOutcome {
    pub old_progress: PlayerProgress,
    pub new_progress: PlayerProgress,
    pub leveled_up: bool,
    /// The new level when `leveled_up` is true.
    pub new_level: Option<u32>,
}

/// Result of recording an activity completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityOutcome {
    pub progress: PlayerProgress,
    /// Base plus bonus experience applied by this completion.
    pub exp_gained: u32,
    pub leveled_up: bool,
    pub new_level: Option<u32>,
    pub is_first_time: bool,
}

/// Derive level, within-level experience, level span and title from a
/// cumulative experience total.
///
/// The level is the largest index whose threshold the total has reached;
/// totals beyond the last threshold clamp to the max level, whose span is 0.
#[must_use]
pub fn derive_level(total_experience: u32, curve: &LevelCurve) -> LevelSnapshot {
    let mut level = 1;
    for candidate in 2..=curve.max_level() {
        if total_experience >= curve.threshold(candidate) {
            level = candidate;
        } else {
            break;
        }
    }

    let floor = curve.threshold(level);
    let ceiling = curve.threshold((level + 1).min(curve.max_level()));
    LevelSnapshot {
        level,
        experience: total_experience - floor,
        next_level_exp: ceiling - floor,
        title: curve.title(level).to_string(),
    }
}

/// Rebuild the derived fields of a record from its `total_experience`.
///
/// Applied on every load so a record written against an older curve heals
/// itself; stored derived fields are never trusted.
#[must_use]
pub fn recalculate(progress: &PlayerProgress, curve: &LevelCurve) -> PlayerProgress {
    let snapshot = derive_level(progress.total_experience, curve);
    PlayerProgress {
        level: snapshot.level,
        experience: snapshot.experience,
        next_level_exp: snapshot.next_level_exp,
        title: snapshot.title,
        ..progress.clone()
    }
}

/// Apply a reward to a record, stamping `last_play_date` and re-deriving the
/// level. A single large reward may skip several levels; `leveled_up` is
/// still a plain flag and the notification layer decides how to present it.
#[must_use]
pub fn add_experience(
    progress: &PlayerProgress,
    reward: ExperienceReward,
    now: DateTime<Utc>,
    curve: &LevelCurve,
) -> ExperienceOutcome {
    let gained = reward.base_exp.saturating_add(reward.bonus_exp);
    let mut updated = progress.clone();
    updated.total_experience = updated.total_experience.saturating_add(gained);
    updated.last_play_date = now;
    let updated = recalculate(&updated, curve);

    let leveled_up = updated.level > progress.level;
    ExperienceOutcome {
        old_progress: progress.clone(),
        new_progress: updated.clone(),
        leveled_up,
        new_level: leveled_up.then_some(updated.level),
    }
}

/// Record a completed activity: base reward for its type, the first-time
/// bonus for a never-seen ID and the daily bonus when at least 24 hours have
/// elapsed since the last recorded play.
///
/// The experience gain and the completed-activities append land in the same
/// returned record, so one store write covers both.
#[must_use]
pub fn complete_activity(
    progress: &PlayerProgress,
    activity_id: &str,
    kind: ActivityKind,
    now: DateTime<Utc>,
    config: &ProgressionConfig,
) -> ActivityOutcome {
    let is_first_time = !progress.has_completed(activity_id);

    let mut bonus = 0;
    if is_first_time {
        bonus += config.rewards.first_time_bonus;
    }
    if now.signed_duration_since(progress.last_play_date) >= Duration::hours(24) {
        bonus += config.rewards.daily_play_bonus;
    }

    let reward = ExperienceReward {
        base_exp: config.rewards.base_exp(kind),
        bonus_exp: bonus,
    };
    let outcome = add_experience(progress, reward, now, &config.curve);

    let mut updated = outcome.new_progress;
    if is_first_time {
        updated.completed_activities.insert(activity_id.to_string());
    }

    ActivityOutcome {
        progress: updated,
        exp_gained: reward.base_exp + reward.bonus_exp,
        leveled_up: outcome.leveled_up,
        new_level: outcome.new_level,
        is_first_time,
    }
}
