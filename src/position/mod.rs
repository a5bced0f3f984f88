//! Position measures: quartiles and percentiles
//!
//! Both use the `(n + 1)` rank convention on an ascending copy of the data.
//! A fractional rank interpolates linearly between the two bracketing order
//! statistics. Ranks below 1 or above `n` clamp to the minimum or maximum.
//!
//! # Example
//!
//! ```
//! use descstats::position::{percentile, quartile};
//!
//! let data = [6.0, 47.0, 49.0, 15.0, 42.0, 41.0, 7.0, 39.0, 43.0, 40.0, 36.0];
//!
//! assert_eq!(quartile(&data, 1).unwrap(), 15.0);
//! assert_eq!(quartile(&data, 2).unwrap(), 40.0);
//! assert_eq!(quartile(&data, 3).unwrap(), 43.0);
//! assert_eq!(percentile(&data, 50.0).unwrap(), 40.0);
//! ```

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::dispersion;
use crate::error::Result;
use crate::math;
use crate::validate;

/// Ascending copy of `values`
///
/// Rejects empty and non-finite input, so the copy is totally ordered.
pub fn sorted_copy(values: &[f64]) -> Result<Vec<f64>> {
    validate::dataset(values)?;
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    Ok(sorted)
}

/// Value at 1-based `rank` of an ascending, non-empty slice
pub(crate) fn value_at_rank(sorted: &[f64], rank: f64) -> f64 {
    let n = sorted.len();
    if rank <= 1.0 {
        return sorted[0];
    }
    if rank >= n as f64 {
        return sorted[n - 1];
    }

    let lower = math::floor(rank);
    let frac = rank - lower;
    let i = lower as usize - 1;
    if frac == 0.0 {
        sorted[i]
    } else {
        // rounding must not carry the result past the upper order statistic
        (sorted[i] + frac * (sorted[i + 1] - sorted[i])).min(sorted[i + 1])
    }
}

/// `p`-th percentile of a sorted slice, `p` already validated
pub(crate) fn percentile_of_sorted(sorted: &[f64], p: f64) -> f64 {
    let rank = p * (sorted.len() + 1) as f64 / 100.0;
    value_at_rank(sorted, rank)
}

/// `p`-th percentile for `p` in [0, 100], at rank `p·(n+1)/100`
///
/// # Errors
///
/// [`StatsError::InvalidParameter`](crate::StatsError::InvalidParameter) when
/// `p` is outside [0, 100], plus the usual dataset errors.
pub fn percentile(values: &[f64], p: f64) -> Result<f64> {
    validate::param("percentile", p, (0.0..=100.0).contains(&p))?;
    let sorted = sorted_copy(values)?;
    Ok(percentile_of_sorted(&sorted, p))
}

/// `k`-th quartile for `k` in {1, 2, 3}, at rank `k·(n+1)/4`
///
/// Identical to `percentile(values, 25·k)`.
pub fn quartile(values: &[f64], k: u8) -> Result<f64> {
    validate::param("quartile", k as f64, (1..=3).contains(&k))?;
    percentile(values, 25.0 * k as f64)
}

/// Interquartile range `Q3 - Q1`
pub fn interquartile_range(values: &[f64]) -> Result<f64> {
    let sorted = sorted_copy(values)?;
    dispersion::spread(
        "interquartile_range",
        percentile_of_sorted(&sorted, 25.0),
        percentile_of_sorted(&sorted, 75.0),
    )
}
