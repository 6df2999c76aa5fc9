use crate::{FIRST_YEAR, LAST_YEAR, YEAR_STEP};
use serde::{Deserialize, Serialize};

/// An inclusive `[low, high]` year interval.
///
/// Construction always normalizes the pair so that `low <= high`; a reversed
/// pair coming from the UI is swapped rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct YearRange {
    low: i32,
    high: i32,
}

impl YearRange {
    /// Range selected when the dashboard first loads.
    pub const DEFAULT: YearRange = YearRange { low: 1987, high: 2007 };

    pub fn new(a: i32, b: i32) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// The whole span of the dataset.
    pub fn full() -> Self {
        Self::new(FIRST_YEAR, LAST_YEAR)
    }

    pub fn low(&self) -> i32 {
        self.low
    }

    pub fn high(&self) -> i32 {
        self.high
    }

    pub fn contains(&self, year: i32) -> bool {
        self.low <= year && year <= self.high
    }

    /// Replace the lower bound, keeping the range normalized.
    pub fn with_low(self, low: i32) -> Self {
        Self::new(low, self.high)
    }

    /// Replace the upper bound, keeping the range normalized.
    pub fn with_high(self, high: i32) -> Self {
        Self::new(self.low, high)
    }

    /// Slider marks: every [`YEAR_STEP`] years across the dataset span.
    pub fn marks() -> impl Iterator<Item = i32> {
        (FIRST_YEAR..=LAST_YEAR).step_by(YEAR_STEP as usize)
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<(i32, i32)> for YearRange {
    fn from((a, b): (i32, i32)) -> Self {
        Self::new(a, b)
    }
}

impl From<YearRange> for (i32, i32) {
    fn from(range: YearRange) -> Self {
        (range.low, range.high)
    }
}
