//! Central tendency: mean, median and mode
//!
//! # Example
//!
//! ```
//! use descstats::central::{mean, median, mode, Mode};
//!
//! let kicks = [7.0, 3.0, 12.0, 3.0, 9.0];
//!
//! assert!((mean(&kicks).unwrap() - 6.8).abs() < 1e-12);
//! assert_eq!(median(&kicks).unwrap(), 7.0);
//! assert_eq!(mode(&kicks).unwrap(), Mode::Values(vec![3.0]));
//! ```

mod frequency;

pub use frequency::FrequencyTable;

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::error::{Result, StatsError};
use crate::position::sorted_copy;
use crate::validate;

/// Arithmetic mean
///
/// Accumulated incrementally (`m += (x - m) / k`) so a constant dataset
/// returns its value exactly, and the result never leaves `[min, max]`.
/// When that update overflows (observations near `±f64::MAX` of opposite
/// sign) the mean is recomputed as `Σ xᵢ/n`, whose terms cannot overflow.
///
/// # Errors
///
/// [`StatsError::EmptyDataset`](crate::StatsError::EmptyDataset) for an empty
/// slice, [`StatsError::NonFiniteValue`](crate::StatsError::NonFiniteValue)
/// for NaN or infinite observations.
pub fn mean(values: &[f64]) -> Result<f64> {
    validate::dataset(values)?;

    let mut mean = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for (i, &v) in values.iter().enumerate() {
        mean += (v - mean) / (i + 1) as f64;
        min = min.min(v);
        max = max.max(v);
    }

    if !mean.is_finite() {
        let n = values.len() as f64;
        log::trace!("incremental mean overflowed, summing x / {}", n);
        mean = values.iter().map(|v| v / n).sum();
    }
    if !mean.is_finite() {
        log::debug!("mean of {} observations overflowed", values.len());
        return Err(StatsError::Overflow("mean"));
    }

    Ok(mean.clamp(min, max))
}

/// Median of a sorted copy of `values`
///
/// Odd counts return the middle order statistic, even counts the average of
/// the two middle ones. The caller's slice is left untouched.
pub fn median(values: &[f64]) -> Result<f64> {
    let sorted = sorted_copy(values)?;
    Ok(median_of_sorted(&sorted))
}

/// Median of a slice already in ascending order. Must be non-empty.
pub(crate) fn median_of_sorted(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        sorted[mid - 1] / 2.0 + sorted[mid] / 2.0
    } else {
        sorted[mid]
    }
}

/// Outcome of [`mode`]
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// Every value occurs exactly once
    NoMode,
    /// All values sharing the highest frequency, ascending
    Values(Vec<f64>),
}

impl Mode {
    /// Modal values, empty for [`Mode::NoMode`]
    pub fn values(&self) -> &[f64] {
        match self {
            Mode::NoMode => &[],
            Mode::Values(v) => v,
        }
    }

    pub fn is_no_mode(&self) -> bool {
        matches!(self, Mode::NoMode)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Mode {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Mode::NoMode => serializer.serialize_none(),
            Mode::Values(v) => serializer.serialize_some(v),
        }
    }
}

/// Most frequent value(s)
///
/// A dataset where every value is unique has [`Mode::NoMode`]. Otherwise all
/// values tied at the highest frequency are returned in ascending order, even
/// when that tie covers every distinct value (`[1, 1, 2, 2]` has modes 1 and 2).
pub fn mode(values: &[f64]) -> Result<Mode> {
    validate::dataset(values)?;
    let table = FrequencyTable::from_values(values)?;
    Ok(mode_of_table(&table))
}

pub(crate) fn mode_of_table(table: &FrequencyTable) -> Mode {
    let max = table.max_frequency();
    if max <= 1 {
        return Mode::NoMode;
    }
    Mode::Values(table.values_with_frequency(max))
}
