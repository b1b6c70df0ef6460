//! Intensity bucketing for heatmap cells.
//!
//! Maps a raw contribution count to one of five discrete levels using the
//! fixed thresholds the whole renderer shares. Both graph modes go through
//! [`bucket`]; nothing else in the crate hard-codes a threshold.

/// Visual intensity of a single day or cell, ordered weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IntensityLevel {
    None,
    Low,
    Medium,
    High,
    VeryHigh,
}

/// Lower bound of each non-empty bucket, strongest first. Counts below every
/// bound fall through to [`IntensityLevel::None`].
pub const THRESHOLDS: [(u32, IntensityLevel); 4] = [
    (20, IntensityLevel::VeryHigh),
    (10, IntensityLevel::High),
    (5, IntensityLevel::Medium),
    (1, IntensityLevel::Low),
];

/// Bucket a count against [`THRESHOLDS`].
pub fn bucket(count: u32) -> IntensityLevel {
    for (min, level) in THRESHOLDS {
        if count >= min {
            return level;
        }
    }
    IntensityLevel::None
}

impl IntensityLevel {
    /// Two-column block used for one cell in either graph mode.
    pub fn block(self) -> &'static str {
        match self {
            Self::None => "  ",
            Self::Low => "░░",
            Self::Medium => "▒▒",
            Self::High => "▓▓",
            Self::VeryHigh => "██",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::VeryHigh => "very high",
        }
    }
}
