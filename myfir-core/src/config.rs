//! Progression configuration: level curve, titles and reward amounts.
//!
//! The tables are injected into the engine rather than read from globals so
//! tests can substitute a smaller curve.
use crate::activity::ActivityKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while constructing a progression configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("level curve tables differ in length: {thresholds} thresholds vs {titles} titles")]
    TableLengthMismatch { thresholds: usize, titles: usize },
    #[error("level curve must define at least one level")]
    EmptyCurve,
    #[error("level thresholds must start at zero and strictly ascend")]
    NonAscendingThresholds,
}

/// Ordered experience thresholds with their matching level titles.
///
/// Index 0 corresponds to level 1 and must carry a threshold of zero; the
/// two tables are parallel and always the same length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelCurve {
    thresholds: Vec<u32>,
    titles: Vec<String>,
}

impl LevelCurve {
    /// Build a curve from parallel threshold and title tables.
    ///
    /// # Errors
    ///
    /// Returns an error when the tables are empty, differ in length, or the
    /// thresholds do not start at zero and strictly ascend.
    pub fn new(thresholds: Vec<u32>, titles: Vec<String>) -> Result<Self, ConfigError> {
        if thresholds.is_empty() || titles.is_empty() {
            return Err(ConfigError::EmptyCurve);
        }
        if thresholds.len() != titles.len() {
            return Err(ConfigError::TableLengthMismatch {
                thresholds: thresholds.len(),
                titles: titles.len(),
            });
        }
        if thresholds[0] != 0 || thresholds.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::NonAscendingThresholds);
        }
        Ok(Self { thresholds, titles })
    }

    /// The curve shipped with the app: a gentle ten-level ramp for small kids.
    #[must_use]
    pub fn default_config() -> Self {
        let thresholds = vec![0, 50, 120, 220, 350, 520, 730, 980, 1270, 1600];
        let titles = [
            "はじめて の たんけんか",
            "げんき な がくしゅうしゃ",
            "すごい チャレンジャー",
            "かしこい モンスター",
            "たのしい マスター",
            "すばらしい ヒーロー",
            "きらきら スター",
            "まほうつかい",
            "でんせつ の せんしゃ",
            "パソコン の おうじさま・おひめさま",
        ]
        .into_iter()
        .map(String::from)
        .collect();
        Self::new(thresholds, titles).unwrap_or_else(|_| unreachable!("built-in curve is valid"))
    }

    /// Highest level the curve defines.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn max_level(&self) -> u32 {
        self.thresholds.len() as u32
    }

    /// Cumulative experience required to reach `level`, clamped to the table.
    #[must_use]
    pub fn threshold(&self, level: u32) -> u32 {
        let idx = level.clamp(1, self.max_level()) as usize - 1;
        self.thresholds[idx]
    }

    /// Title for `level`, clamped to the last entry beyond the table.
    #[must_use]
    pub fn title(&self, level: u32) -> &str {
        let idx = level.clamp(1, self.max_level()) as usize - 1;
        &self.titles[idx]
    }
}

/// Base experience per activity type plus the two bonus amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardTable {
    pub typing_lesson_complete: u32,
    pub typing_perfect_score: u32,
    pub mouse_drawing_complete: u32,
    pub drag_drop_complete: u32,
    pub click_game_complete: u32,
    pub scroll_book_complete: u32,
    pub pc_basics_complete: u32,
    pub course_complete: u32,
    /// Granted the first time a distinct activity ID is completed.
    pub first_time_bonus: u32,
    /// Granted when at least 24 hours have elapsed since the last play.
    pub daily_play_bonus: u32,
}

impl RewardTable {
    /// Reward amounts shipped with the app.
    #[must_use]
    pub const fn default_config() -> Self {
        Self {
            typing_lesson_complete: 15,
            typing_perfect_score: 25,
            mouse_drawing_complete: 20,
            drag_drop_complete: 18,
            click_game_complete: 16,
            scroll_book_complete: 14,
            pc_basics_complete: 12,
            course_complete: 50,
            first_time_bonus: 30,
            daily_play_bonus: 10,
        }
    }

    /// Base experience for an activity type.
    #[must_use]
    pub const fn base_exp(&self, kind: ActivityKind) -> u32 {
        match kind {
            ActivityKind::TypingLessonComplete => self.typing_lesson_complete,
            ActivityKind::TypingPerfectScore => self.typing_perfect_score,
            ActivityKind::MouseDrawingComplete => self.mouse_drawing_complete,
            ActivityKind::DragDropComplete => self.drag_drop_complete,
            ActivityKind::ClickGameComplete => self.click_game_complete,
            ActivityKind::ScrollBookComplete => self.scroll_book_complete,
            ActivityKind::PcBasicsComplete => self.pc_basics_complete,
            ActivityKind::CourseComplete => self.course_complete,
        }
    }
}

/// Everything the progression engine needs, bundled for injection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionConfig {
    pub curve: LevelCurve,
    pub rewards: RewardTable,
}

impl ProgressionConfig {
    #[must_use]
    pub fn default_config() -> Self {
        Self {
            curve: LevelCurve::default_config(),
            rewards: RewardTable::default_config(),
        }
    }
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self::default_config()
    }
}
