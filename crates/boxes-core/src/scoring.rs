//! Initial score classification.
//!
//! Every captured box gets a score from a fixed three-tier table keyed on
//! its type. The match is exact and case-sensitive.

/// Box types scored [`HIGH_SCORE`].
pub const HIGH_VALUE_TYPES: &[&str] = &["Reflection", "Warning", "Pushback", "Assumption"];

/// Box types scored [`MEDIUM_SCORE`].
pub const MEDIUM_VALUE_TYPES: &[&str] = &[
    "Choice",
    "Completion",
    "Concern",
    "Confidence",
    "Decision",
];

/// Score for high-value types.
pub const HIGH_SCORE: i64 = 85;
/// Score for medium-value types.
pub const MEDIUM_SCORE: i64 = 60;
/// Score for everything else.
pub const DEFAULT_SCORE: i64 = 40;

/// Tier a box type falls in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreTier {
    /// See [`HIGH_VALUE_TYPES`].
    High,
    /// See [`MEDIUM_VALUE_TYPES`].
    Medium,
    /// Any other type.
    Default,
}

impl ScoreTier {
    /// Classify a box type.
    #[must_use]
    pub fn of(box_type: &str) -> Self {
        if HIGH_VALUE_TYPES.contains(&box_type) {
            Self::High
        } else if MEDIUM_VALUE_TYPES.contains(&box_type) {
            Self::Medium
        } else {
            Self::Default
        }
    }

    /// Score for the tier.
    #[must_use]
    pub const fn score(self) -> i64 {
        match self {
            Self::High => HIGH_SCORE,
            Self::Medium => MEDIUM_SCORE,
            Self::Default => DEFAULT_SCORE,
        }
    }
}

/// Initial score for a box type.
#[must_use]
pub fn initial_score(box_type: &str) -> i64 {
    ScoreTier::of(box_type).score()
}
