//! Confidence levels recognised by the sample-size formulas

use core::fmt;

use crate::error::{Result, StatsError};

/// Two-sided confidence level, restricted to the three levels with a tabled Z-score
///
/// Any other percentage is rejected rather than rounded to a neighbour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum ConfidenceLevel {
    /// 90%, Z = 1.645
    P90,
    /// 95%, Z = 1.96
    #[default]
    P95,
    /// 99%, Z = 2.576
    P99,
}

impl ConfidenceLevel {
    /// All recognised levels, lowest first
    pub const ALL: [ConfidenceLevel; 3] = [
        ConfidenceLevel::P90,
        ConfidenceLevel::P95,
        ConfidenceLevel::P99,
    ];

    /// Parse a whole-number percentage (90, 95 or 99)
    pub fn from_percent(percent: u32) -> Result<Self> {
        match percent {
            90 => Ok(ConfidenceLevel::P90),
            95 => Ok(ConfidenceLevel::P95),
            99 => Ok(ConfidenceLevel::P99),
            other => {
                log::debug!("rejected confidence level {}", other);
                Err(StatsError::invalid("confidence", other as f64))
            }
        }
    }

    /// The level as a whole-number percentage
    pub fn percent(self) -> u32 {
        match self {
            ConfidenceLevel::P90 => 90,
            ConfidenceLevel::P95 => 95,
            ConfidenceLevel::P99 => 99,
        }
    }

    /// Standard-normal quantile for this two-sided level
    pub fn z_score(self) -> f64 {
        match self {
            ConfidenceLevel::P90 => 1.645,
            ConfidenceLevel::P95 => 1.96,
            ConfidenceLevel::P99 => 2.576,
        }
    }
}

impl TryFrom<u32> for ConfidenceLevel {
    type Error = StatsError;

    fn try_from(percent: u32) -> Result<Self> {
        Self::from_percent(percent)
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ConfidenceLevel {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u32(self.percent())
    }
}
