//! Shape and association: Pearson skewness, covariance, correlation
//!
//! Sample (`n - 1`) standard deviations are used throughout, matching the
//! sample covariance so the correlation stays within [-1, 1]. Covariance and
//! correlation work on deviations scaled into [-1, 1], like the variances in
//! [`dispersion`], so extreme magnitudes neither overflow nor underflow.
//!
//! # Example
//!
//! ```
//! use descstats::shape::{covariance, pearson_correlation, PairedDataset};
//!
//! let hours = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let score = [52.0, 60.0, 61.0, 70.0, 77.0];
//! let data = PairedDataset::new(&hours, &score).unwrap();
//!
//! assert!((covariance(&data).unwrap() - 15.0).abs() < 1e-12);
//! assert!(pearson_correlation(&data).unwrap() > 0.97);
//! ```

use crate::central;
use crate::dispersion::{self, Deviations};
use crate::error::{Result, StatsError};
use crate::math;
use crate::validate;

/// Slack allowed beyond ±1 before a correlation is reported as malformed
pub const CORRELATION_TOLERANCE: f64 = 1e-9;

/// Two index-aligned datasets of equal length
///
/// Borrows the caller's slices for the duration of a computation only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairedDataset<'a> {
    x: &'a [f64],
    y: &'a [f64],
}

impl<'a> PairedDataset<'a> {
    /// Pair `x` with `y`
    ///
    /// # Errors
    ///
    /// [`StatsError::MismatchedLengths`] when the lengths differ, then the
    /// usual empty and non-finite checks on each half.
    pub fn new(x: &'a [f64], y: &'a [f64]) -> Result<Self> {
        if x.len() != y.len() {
            log::debug!("rejected paired dataset of lengths {} and {}", x.len(), y.len());
            return Err(StatsError::MismatchedLengths {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        validate::dataset(x)?;
        validate::dataset(y)?;
        Ok(Self { x, y })
    }

    pub fn x(&self) -> &'a [f64] {
        self.x
    }

    pub fn y(&self) -> &'a [f64] {
        self.y
    }

    /// Number of pairs
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always false: construction rejects empty halves
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// The same pairs with `x` and `y` exchanged
    pub fn swapped(&self) -> Self {
        Self {
            x: self.y,
            y: self.x,
        }
    }
}

/// Pearson's second skewness coefficient, `3·(mean - median) / s`
///
/// # Errors
///
/// [`StatsError::InsufficientData`] below two observations and
/// [`StatsError::DivisionByZero`] for a constant dataset.
pub fn pearson_skewness(values: &[f64]) -> Result<f64> {
    let sd = dispersion::sample_std_dev(values)?;
    let sd = validate::nonzero("std_dev", sd)?;
    let mean = central::mean(values)?;
    let median = central::median(values)?;
    Ok(3.0 * (mean - median) / sd)
}

/// Sample covariance, `Σ(xᵢ - x̄)(yᵢ - ȳ) / (n - 1)`
///
/// # Errors
///
/// [`StatsError::InsufficientData`] below two pairs and
/// [`StatsError::Overflow`] when the covariance of finite data exceeds
/// `f64::MAX`.
pub fn covariance(data: &PairedDataset<'_>) -> Result<f64> {
    validate::at_least(data.x, 2)?;
    let dx = Deviations::of(data.x)?;
    let dy = Deviations::of(data.y)?;

    let cov = dx.scale * (dy.scale * (4.0 * cross_sum(&dx, &dy) / (data.len() - 1) as f64));
    if !cov.is_finite() {
        log::debug!("covariance overflowed at scales {} and {}", dx.scale, dy.scale);
        return Err(StatsError::Overflow("covariance"));
    }
    Ok(cov)
}

/// Pearson correlation coefficient, `cov(X, Y) / (s_X · s_Y)`
///
/// The scale factors cancel, leaving `Σuᵢvᵢ / sqrt(Σuᵢ² · Σvᵢ²)` over the
/// scaled deviations, which depends only on the shape of the data.
///
/// # Errors
///
/// [`StatsError::DivisionByZero`] when either half is constant, and
/// [`StatsError::CorrelationOutOfRange`] when the result lands outside
/// [-1, 1] by more than [`CORRELATION_TOLERANCE`]. Results are never clamped.
pub fn pearson_correlation(data: &PairedDataset<'_>) -> Result<f64> {
    validate::at_least(data.x, 2)?;
    let dx = Deviations::of(data.x)?;
    let dy = Deviations::of(data.y)?;
    validate::nonzero("std_dev_x", dx.scale)?;
    validate::nonzero("std_dev_y", dy.scale)?;

    let r = cross_sum(&dx, &dy) / math::sqrt(dx.sum_squares() * dy.sum_squares());
    checked_correlation(r)
}

/// `Σ uᵢvᵢ` over paired scaled deviations
fn cross_sum(dx: &Deviations, dy: &Deviations) -> f64 {
    dx.units.iter().zip(&dy.units).map(|(u, v)| u * v).sum()
}

/// Accept `r` within [-1, 1] plus [`CORRELATION_TOLERANCE`], unclamped
///
/// Cauchy-Schwarz bounds the scaled form, so only rounding moves `r` past ±1;
/// anything further out means the inputs were not what they claimed to be.
pub(crate) fn checked_correlation(r: f64) -> Result<f64> {
    if !r.is_finite() || math::abs(r) > 1.0 + CORRELATION_TOLERANCE {
        log::debug!("correlation {} outside [-1, 1]", r);
        return Err(StatsError::CorrelationOutOfRange(r));
    }
    Ok(r)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paired_lengths_must_match() {
        assert_eq!(
            PairedDataset::new(&[1.0, 2.0], &[1.0]),
            Err(StatsError::MismatchedLengths { x_len: 2, y_len: 1 })
        );
        assert_eq!(PairedDataset::new(&[], &[]), Err(StatsError::EmptyDataset));
    }

    #[test]
    fn test_skewness_sign() {
        // Right tail pulls the mean above the median
        let right = [1.0, 2.0, 2.0, 3.0, 10.0];
        assert!(pearson_skewness(&right).unwrap() > 0.0);

        let left = [-10.0, -3.0, -2.0, -2.0, -1.0];
        assert!(pearson_skewness(&left).unwrap() < 0.0);

        let symmetric = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(pearson_skewness(&symmetric).unwrap(), 0.0);
    }

    #[test]
    fn test_skewness_value() {
        // mean 3.6, median 2, s = sqrt(13.3)
        let data = [1.0, 2.0, 2.0, 3.0, 10.0];
        let expected = 3.0 * (3.6 - 2.0) / math::sqrt(13.3);
        assert!((pearson_skewness(&data).unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_skewness_constant_dataset() {
        assert_eq!(
            pearson_skewness(&[4.0, 4.0, 4.0]),
            Err(StatsError::DivisionByZero("std_dev"))
        );
    }

    #[test]
    fn test_skewness_single_observation() {
        assert_eq!(
            pearson_skewness(&[4.0]),
            Err(StatsError::InsufficientData { got: 1, min: 2 })
        );
    }

    #[test]
    fn test_covariance() {
        let x = [2.0, 4.0, 6.0];
        let y = [1.0, 2.0, 3.0];
        let data = PairedDataset::new(&x, &y).unwrap();
        // deviations (-2, 0, 2) · (-1, 0, 1) = 4, / 2
        assert!((covariance(&data).unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_covariance_needs_two_pairs() {
        let data = PairedDataset::new(&[1.0], &[2.0]).unwrap();
        assert_eq!(
            covariance(&data),
            Err(StatsError::InsufficientData { got: 1, min: 2 })
        );
        assert!(pearson_correlation(&data).is_err());
    }

    #[test]
    fn test_perfect_correlation() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let up = [10.0, 20.0, 30.0, 40.0];
        let down = [8.0, 6.0, 4.0, 2.0];

        let r = pearson_correlation(&PairedDataset::new(&x, &up).unwrap()).unwrap();
        assert!((r - 1.0).abs() < 1e-12);

        let r = pearson_correlation(&PairedDataset::new(&x, &down).unwrap()).unwrap();
        assert!((r + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_correlation_constant_half() {
        let x = [1.0, 2.0, 3.0];
        let y = [5.0, 5.0, 5.0];
        assert_eq!(
            pearson_correlation(&PairedDataset::new(&x, &y).unwrap()),
            Err(StatsError::DivisionByZero("std_dev_y"))
        );
        assert_eq!(
            pearson_correlation(&PairedDataset::new(&y, &x).unwrap()),
            Err(StatsError::DivisionByZero("std_dev_x"))
        );
    }

    #[test]
    fn test_correlation_symmetric() {
        let x = [1.5, 3.7, 2.1, 8.9, 4.3];
        let y = [6.2, 7.4, 0.5, 9.1, 5.6];
        let data = PairedDataset::new(&x, &y).unwrap();

        assert_eq!(
            pearson_correlation(&data).unwrap(),
            pearson_correlation(&data.swapped()).unwrap()
        );
    }

    #[test]
    fn test_correlation_out_of_range_is_reported() {
        assert_eq!(checked_correlation(1.5), Err(StatsError::CorrelationOutOfRange(1.5)));
        assert_eq!(checked_correlation(-1.1), Err(StatsError::CorrelationOutOfRange(-1.1)));
        assert!(matches!(
            checked_correlation(f64::NAN),
            Err(StatsError::CorrelationOutOfRange(r)) if r.is_nan()
        ));

        // rounding slack is accepted as-is, not clamped
        assert_eq!(checked_correlation(1.0 + 1e-12), Ok(1.0 + 1e-12));
        assert_eq!(checked_correlation(-1.0), Ok(-1.0));
        assert_eq!(checked_correlation(0.25), Ok(0.25));
    }

    #[test]
    fn test_correlation_of_tiny_values() {
        let x = [1e-170, 2e-170, 3e-170, 4e-170];
        let y = [2e-170, 4e-170, 6e-170, 8e-170];
        let data = PairedDataset::new(&x, &y).unwrap();

        let r = pearson_correlation(&data).unwrap();
        assert!((r - 1.0).abs() < 1e-12, "r: {}", r);
        assert!(pearson_correlation(&PairedDataset::new(&x, &x).unwrap()).unwrap() > 1.0 - 1e-12);
    }

    #[test]
    fn test_correlation_of_huge_values() {
        let x = [1e300, -1e300, 5e299, 0.0];
        let y = [-2e300, 2e300, -1e300, 0.0];
        let data = PairedDataset::new(&x, &y).unwrap();

        let r = pearson_correlation(&data).unwrap();
        assert!((r + 1.0).abs() < 1e-12, "r: {}", r);
        assert_eq!(covariance(&data), Err(StatsError::Overflow("covariance")));
    }

    #[test]
    fn test_skewness_of_huge_values() {
        // sample variance overflows, sample sd ≈ 1.15e308 does not
        let right = [-1e308, -1e308, 1e308];
        let skew = pearson_skewness(&right).unwrap();
        assert!(skew > 0.0 && skew.is_finite(), "skew: {}", skew);
    }
}
