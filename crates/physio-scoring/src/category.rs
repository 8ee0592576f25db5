use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Lowest score classified as moderate.
pub const MODERATE_THRESHOLD: u8 = 34;

/// Lowest score classified as pronounced.
pub const PRONOUNCED_THRESHOLD: u8 = 67;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreCategory {
    /// 0–33.
    Mild,
    /// 34–66.
    Moderate,
    /// 67–100.
    Pronounced,
}

impl ScoreCategory {
    pub fn from_score(score: u8) -> Self {
        if score < MODERATE_THRESHOLD {
            ScoreCategory::Mild
        } else if score < PRONOUNCED_THRESHOLD {
            ScoreCategory::Moderate
        } else {
            ScoreCategory::Pronounced
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            ScoreCategory::Mild => "mild",
            ScoreCategory::Moderate => "moderate",
            ScoreCategory::Pronounced => "pronounced",
        }
    }

    /// Wording used in the UI and in the assessment section of the note.
    pub fn label(&self) -> &'static str {
        match self {
            ScoreCategory::Mild => "milde Beschwerden",
            ScoreCategory::Moderate => "moderate Beschwerden",
            ScoreCategory::Pronounced => "ausgeprägte Beschwerden",
        }
    }

    /// CSS color for the category badge.
    pub fn color_hint(&self) -> &'static str {
        match self {
            ScoreCategory::Mild => "#9ae6b4",
            ScoreCategory::Moderate => "#faf089",
            ScoreCategory::Pronounced => "#feb2b2",
        }
    }
}

pub fn score_category(score: u8) -> ScoreCategory {
    ScoreCategory::from_score(score)
}
