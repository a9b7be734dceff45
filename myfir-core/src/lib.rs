//! myfir Progression Core
//!
//! Platform-agnostic leveling logic for the myfir computer-literacy app:
//! experience accrual, level derivation, activity-completion bookkeeping and
//! the persistence seam. No UI or browser dependencies live here.

pub mod activity;
pub mod config;
pub mod leveling;
pub mod notify;
pub mod progress;
pub mod storage;
pub mod tracker;

// Re-export commonly used types
pub use activity::{ActivityKind, UnknownActivity};
pub use config::{ConfigError, LevelCurve, ProgressionConfig, RewardTable};
pub use leveling::{
    ActivityOutcome, ExperienceOutcome, ExperienceReward, LevelSnapshot, add_experience,
    complete_activity, derive_level, recalculate,
};
pub use notify::{Celebration, LevelUpEvent, NotificationQueue, celebration_for};
pub use progress::PlayerProgress;
pub use storage::{MemoryStore, ProgressStore};
pub use tracker::ProgressTracker;
