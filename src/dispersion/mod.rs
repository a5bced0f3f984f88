//! Dispersion: range, variance, standard deviation, coefficient of variation
//!
//! Variances are computed in two passes (mean first, then squared deviations),
//! which keeps them non-negative by construction. The deviations are scaled
//! into [-1, 1] before they are squared, so finite data near `±f64::MAX`
//! yields a finite standard deviation even when its variance does not fit in
//! an `f64`, and data near the smallest normal values does not underflow.
//!
//! # Example
//!
//! ```
//! use descstats::dispersion::{population_variance, sample_variance, standard_deviation};
//!
//! let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
//!
//! let var = population_variance(&data).unwrap();
//! assert!((var - 4.0).abs() < 1e-12);
//! assert!((standard_deviation(var).unwrap() - 2.0).abs() < 1e-12);
//! assert!((sample_variance(&data).unwrap() - 32.0 / 7.0).abs() < 1e-12);
//! ```

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::central;
use crate::error::{Result, StatsError};
use crate::math;
use crate::validate;

/// `max - min`
pub fn range(values: &[f64]) -> Result<f64> {
    validate::dataset(values)?;
    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    spread("range", min, max)
}

/// `upper - lower`, failing when the difference of two finite values overflows
pub(crate) fn spread(what: &'static str, lower: f64, upper: f64) -> Result<f64> {
    let spread = upper - lower;
    if !spread.is_finite() {
        log::debug!("{} from {} to {} overflowed", what, lower, upper);
        return Err(StatsError::Overflow(what));
    }
    Ok(spread)
}

/// Deviations from the mean as `2 · scale · units[i]`
///
/// `scale` is the largest half-deviation `|xᵢ/2 - x̄/2|` and every unit lies in
/// [-1, 1], with at least one at exactly ±1 unless `scale` is zero. Halving
/// first keeps `xᵢ - x̄` from overflowing.
#[derive(Debug, Clone)]
pub(crate) struct Deviations {
    pub(crate) scale: f64,
    pub(crate) units: Vec<f64>,
}

impl Deviations {
    pub(crate) fn of(values: &[f64]) -> Result<Self> {
        let mean = central::mean(values)?;
        let half = |v: f64| v / 2.0 - mean / 2.0;

        let scale = values
            .iter()
            .fold(0.0_f64, |acc, &v| acc.max(math::abs(half(v))));
        let units = values
            .iter()
            .map(|&v| if scale == 0.0 { 0.0 } else { half(v) / scale })
            .collect();
        Ok(Self { scale, units })
    }

    /// `Σ unitsᵢ²`, at most `n`
    pub(crate) fn sum_squares(&self) -> f64 {
        self.units.iter().map(|u| u * u).sum()
    }

    /// `Σ (xᵢ - x̄)² / divisor`
    fn variance(&self, divisor: f64) -> Result<f64> {
        let variance = self.scale * (self.scale * (4.0 * self.sum_squares() / divisor));
        if !variance.is_finite() {
            log::debug!("variance overflowed at deviation scale {}", self.scale);
            return Err(StatsError::Overflow("variance"));
        }
        Ok(variance)
    }

    /// `sqrt(Σ (xᵢ - x̄)² / divisor)`
    fn std_dev(&self, divisor: f64) -> Result<f64> {
        let sd = self.scale * (2.0 * math::sqrt(self.sum_squares() / divisor));
        if !sd.is_finite() {
            log::debug!("standard deviation overflowed at deviation scale {}", self.scale);
            return Err(StatsError::Overflow("std_dev"));
        }
        Ok(sd)
    }
}

/// Mean squared deviation, dividing by `n`
///
/// # Errors
///
/// [`StatsError::Overflow`] when the variance of finite data exceeds
/// `f64::MAX`. [`population_std_dev`] may still succeed on the same data.
pub fn population_variance(values: &[f64]) -> Result<f64> {
    Deviations::of(values)?.variance(values.len() as f64)
}

/// Unbiased variance, dividing by `n - 1`
///
/// # Errors
///
/// [`StatsError::InsufficientData`] for a single observation and
/// [`StatsError::Overflow`] as for [`population_variance`].
pub fn sample_variance(values: &[f64]) -> Result<f64> {
    validate::at_least(values, 2)?;
    Deviations::of(values)?.variance((values.len() - 1) as f64)
}

/// Square root of a variance
///
/// A negative or non-finite variance is rejected: it cannot come out of this
/// crate's variance functions, so it signals a caller error.
pub fn standard_deviation(variance: f64) -> Result<f64> {
    validate::param(
        "variance",
        variance,
        variance.is_finite() && variance >= 0.0,
    )?;
    Ok(math::sqrt(variance))
}

/// Population standard deviation of `values`
///
/// Computed from the scaled deviations directly rather than through
/// [`population_variance`], so it does not fail when only the variance
/// overflows.
pub fn population_std_dev(values: &[f64]) -> Result<f64> {
    Deviations::of(values)?.std_dev(values.len() as f64)
}

/// Sample standard deviation of `values`
pub fn sample_std_dev(values: &[f64]) -> Result<f64> {
    validate::at_least(values, 2)?;
    Deviations::of(values)?.std_dev((values.len() - 1) as f64)
}

/// `std_dev / mean · 100`, as a percentage
///
/// # Errors
///
/// [`StatsError::DivisionByZero`] when `mean` is zero, [`StatsError::Overflow`]
/// when `mean` is so close to zero that the ratio is not finite.
pub fn coefficient_of_variation(std_dev: f64, mean: f64) -> Result<f64> {
    validate::param(
        "std_dev",
        std_dev,
        std_dev.is_finite() && std_dev >= 0.0,
    )?;
    let mean = validate::nonzero("mean", mean)?;
    let cv = std_dev / mean * 100.0;
    if !cv.is_finite() {
        log::debug!("coefficient of variation overflowed for mean {}", mean);
        return Err(StatsError::Overflow("coefficient_of_variation"));
    }
    Ok(cv)
}

/// Coefficient of variation of `values`, using the sample standard deviation
pub fn coefficient_of_variation_of(values: &[f64]) -> Result<f64> {
    let sd = sample_std_dev(values)?;
    coefficient_of_variation(sd, central::mean(values)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range() {
        assert_eq!(range(&[3.0, -2.0, 8.0, 1.0]).unwrap(), 10.0);
        assert_eq!(range(&[5.0]).unwrap(), 0.0);
        assert_eq!(range(&[]), Err(StatsError::EmptyDataset));
        assert_eq!(range(&[f64::MAX, -f64::MAX]), Err(StatsError::Overflow("range")));
    }

    #[test]
    fn test_population_variance() {
        assert!((population_variance(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap() - 2.0).abs() < 1e-12);
        assert_eq!(population_variance(&[7.0]).unwrap(), 0.0);
        assert_eq!(population_variance(&[]), Err(StatsError::EmptyDataset));
    }

    #[test]
    fn test_sample_variance() {
        assert!((sample_variance(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap() - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_sample_variance_single_observation() {
        assert_eq!(
            sample_variance(&[1.0]),
            Err(StatsError::InsufficientData { got: 1, min: 2 })
        );
    }

    #[test]
    fn test_constant_data_has_zero_variance() {
        let data = [3.3; 6];
        assert_eq!(population_variance(&data).unwrap(), 0.0);
        assert_eq!(sample_variance(&data).unwrap(), 0.0);
    }

    #[test]
    fn test_standard_deviation() {
        assert_eq!(standard_deviation(9.0).unwrap(), 3.0);
        assert_eq!(standard_deviation(0.0).unwrap(), 0.0);
        assert_eq!(
            standard_deviation(-1.0),
            Err(StatsError::invalid("variance", -1.0))
        );
    }

    #[test]
    fn test_coefficient_of_variation() {
        assert!((coefficient_of_variation(2.0, 5.0).unwrap() - 40.0).abs() < 1e-12);
        assert_eq!(
            coefficient_of_variation(2.0, 0.0),
            Err(StatsError::DivisionByZero("mean"))
        );
    }

    #[test]
    fn test_coefficient_of_variation_of_dataset() {
        // mean 3, sample sd sqrt(2.5)
        let cv = coefficient_of_variation_of(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert!((cv - math::sqrt(2.5) / 3.0 * 100.0).abs() < 1e-9);
        assert_eq!(
            coefficient_of_variation_of(&[-1.0, 1.0]),
            Err(StatsError::DivisionByZero("mean"))
        );
    }

    #[test]
    fn test_variance_overflow_keeps_std_dev() {
        let data = [1e200, -1e200, 0.0];
        assert_eq!(sample_variance(&data), Err(StatsError::Overflow("variance")));
        assert_eq!(population_variance(&data), Err(StatsError::Overflow("variance")));

        let sd = sample_std_dev(&data).unwrap();
        assert!((sd / 1e200 - 1.0).abs() < 1e-12, "sd: {}", sd);

        // sqrt(2/3) · 1e200
        let sd = population_std_dev(&data).unwrap();
        assert!((sd / (math::sqrt(2.0 / 3.0) * 1e200) - 1.0).abs() < 1e-12, "sd: {}", sd);
    }

    #[test]
    fn test_std_dev_near_f64_max() {
        // sqrt(2) · f64::MAX
        assert_eq!(
            sample_std_dev(&[f64::MAX, -f64::MAX]),
            Err(StatsError::Overflow("std_dev"))
        );
        // population sd of {MAX, -MAX} is MAX itself
        assert_eq!(population_std_dev(&[f64::MAX, -f64::MAX]).unwrap(), f64::MAX);
        assert_eq!(sample_std_dev(&[f64::MAX, f64::MAX]).unwrap(), 0.0);
    }

    #[test]
    fn test_tiny_values_do_not_underflow() {
        let data = [1e-170, 2e-170, 3e-170, 4e-170, 5e-170];
        let sd = sample_std_dev(&data).unwrap();
        assert!((sd / (math::sqrt(2.5) * 1e-170) - 1.0).abs() < 1e-12, "sd: {}", sd);

        let cv = coefficient_of_variation_of(&data).unwrap();
        assert!((cv - math::sqrt(2.5) / 3.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_coefficient_of_variation_overflow() {
        assert_eq!(
            coefficient_of_variation(1e300, 1e-300),
            Err(StatsError::Overflow("coefficient_of_variation"))
        );
    }
}
