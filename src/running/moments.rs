//! Streaming mean, variance and extremes
//!
//! Welford's update keeps the variance numerically stable in one pass, and
//! Chan et al.'s pairwise formula combines two partial results.

use crate::dispersion;
use crate::error::{Result, StatsError};
use crate::traits::{Accumulator, MergeError};

/// Constant-memory accumulator of count, mean, variance, min and max
///
/// Non-finite observations are skipped, so a stray NaN cannot poison the
/// running values. Queries fail the same way the slice functions do: an
/// empty accumulator has no mean, one observation has no sample variance.
///
/// # Example
///
/// ```
/// use descstats::running::RunningStats;
///
/// let mut stats = RunningStats::new();
/// for value in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     stats.add(value);
/// }
///
/// assert!((stats.mean().unwrap() - 5.0).abs() < 1e-12);
/// assert!((stats.variance().unwrap() - 4.0).abs() < 1e-12);
/// assert_eq!(stats.range(), Some(7.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RunningStats {
    count: u64,
    mean: f64,
    /// Sum of squared deviations from the running mean
    m2: f64,
    min: f64,
    max: f64,
}

impl Default for RunningStats {
    fn default() -> Self {
        Self::new()
    }
}

impl RunningStats {
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Accumulator over every finite value of `values`
    pub fn from_values(values: &[f64]) -> Self {
        let mut stats = Self::new();
        stats.extend_from_slice(values);
        stats
    }

    /// Record `value`; NaN and infinities are skipped
    pub fn add(&mut self, value: f64) {
        if !value.is_finite() {
            log::trace!("skipping non-finite observation {}", value);
            return;
        }

        self.count += 1;
        self.min = self.min.min(value);
        self.max = self.max.max(value);

        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (value - self.mean);
    }

    pub fn len(&self) -> u64 {
        self.count
    }

    /// # Errors
    ///
    /// [`StatsError::Overflow`] once the running mean has overflowed, which
    /// takes observations near `±f64::MAX` of opposite sign.
    pub fn mean(&self) -> Result<f64> {
        if self.count == 0 {
            return Err(StatsError::EmptyDataset);
        }
        if !self.mean.is_finite() {
            return Err(StatsError::Overflow("mean"));
        }
        Ok(self.mean.clamp(self.min, self.max))
    }

    /// Population variance (divides by n)
    pub fn variance(&self) -> Result<f64> {
        if self.count == 0 {
            return Err(StatsError::EmptyDataset);
        }
        self.m2_over(self.count as f64)
    }

    /// Sample variance (divides by n - 1)
    pub fn sample_variance(&self) -> Result<f64> {
        match self.count {
            0 => Err(StatsError::EmptyDataset),
            1 => Err(StatsError::InsufficientData { got: 1, min: 2 }),
            n => self.m2_over((n - 1) as f64),
        }
    }

    fn m2_over(&self, divisor: f64) -> Result<f64> {
        // NaN.max(0.0) would hide an overflowed m2 as zero
        if !self.m2.is_finite() || !self.mean.is_finite() {
            log::debug!("running variance overflowed after {} observations", self.count);
            return Err(StatsError::Overflow("variance"));
        }
        Ok((self.m2 / divisor).max(0.0))
    }

    pub fn std_dev(&self) -> Result<f64> {
        dispersion::standard_deviation(self.variance()?)
    }

    pub fn sample_std_dev(&self) -> Result<f64> {
        dispersion::standard_deviation(self.sample_variance()?)
    }

    /// Coefficient of variation in percent, from the sample standard deviation
    pub fn coefficient_of_variation(&self) -> Result<f64> {
        dispersion::coefficient_of_variation(self.sample_std_dev()?, self.mean()?)
    }

    pub fn min(&self) -> Option<f64> {
        (self.count > 0).then_some(self.min)
    }

    pub fn max(&self) -> Option<f64> {
        (self.count > 0).then_some(self.max)
    }

    pub fn range(&self) -> Option<f64> {
        (self.count > 0).then(|| self.max - self.min)
    }

    pub fn sum(&self) -> f64 {
        self.mean * self.count as f64
    }

    fn combine(&mut self, other: &Self) {
        if other.count == 0 {
            return;
        }
        if self.count == 0 {
            *self = other.clone();
            return;
        }

        let total = self.count + other.count;
        let delta = other.mean - self.mean;
        let weight = self.count as f64 * other.count as f64 / total as f64;

        self.mean += delta * (other.count as f64 / total as f64);
        self.m2 += other.m2 + delta * delta * weight;
        self.count = total;
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }
}

impl Accumulator for RunningStats {
    fn update(&mut self, value: f64) {
        self.add(value);
    }

    fn merge(&mut self, other: &Self) -> core::result::Result<(), MergeError> {
        self.combine(other);
        Ok(())
    }

    fn clear(&mut self) {
        *self = Self::new();
    }

    fn count(&self) -> u64 {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::central;

    #[test]
    fn test_matches_slice_functions() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let stats = RunningStats::from_values(&data);

        assert_eq!(stats.len(), 8);
        assert!((stats.mean().unwrap() - central::mean(&data).unwrap()).abs() < 1e-12);
        assert!(
            (stats.variance().unwrap() - dispersion::population_variance(&data).unwrap()).abs()
                < 1e-12
        );
        assert!(
            (stats.sample_variance().unwrap() - dispersion::sample_variance(&data).unwrap()).abs()
                < 1e-12
        );
        assert!((stats.std_dev().unwrap() - 2.0).abs() < 1e-12);
        assert_eq!(stats.min(), Some(2.0));
        assert_eq!(stats.max(), Some(9.0));
        assert!((stats.sum() - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty() {
        let stats = RunningStats::new();
        assert!(stats.is_empty());
        assert_eq!(stats.mean(), Err(StatsError::EmptyDataset));
        assert_eq!(stats.variance(), Err(StatsError::EmptyDataset));
        assert_eq!(stats.min(), None);
        assert_eq!(stats.range(), None);
    }

    #[test]
    fn test_single_value() {
        let mut stats = RunningStats::new();
        stats.add(42.0);

        assert_eq!(stats.mean(), Ok(42.0));
        assert_eq!(stats.variance(), Ok(0.0));
        assert_eq!(
            stats.sample_variance(),
            Err(StatsError::InsufficientData { got: 1, min: 2 })
        );
    }

    #[test]
    fn test_non_finite_skipped() {
        let mut stats = RunningStats::new();
        for v in [1.0, f64::NAN, 2.0, f64::INFINITY, 3.0, f64::NEG_INFINITY] {
            stats.add(v);
        }

        assert_eq!(stats.len(), 3);
        assert!((stats.mean().unwrap() - 2.0).abs() < 1e-12);
        assert_eq!(stats.max(), Some(3.0));
    }

    #[test]
    fn test_merge_equals_sequential() {
        let a = [1.5, 3.7, 2.1, 8.9, 4.3];
        let b = [6.2, 7.4, 0.5, 9.1, 5.6];

        let mut merged = RunningStats::from_values(&a);
        merged.merge(&RunningStats::from_values(&b)).unwrap();

        let mut all = a.to_vec();
        all.extend_from_slice(&b);
        let sequential = RunningStats::from_values(&all);

        assert_eq!(merged.len(), 10);
        assert!((merged.mean().unwrap() - sequential.mean().unwrap()).abs() < 1e-10);
        assert!((merged.variance().unwrap() - sequential.variance().unwrap()).abs() < 1e-10);
        assert_eq!(merged.min(), sequential.min());
        assert_eq!(merged.max(), sequential.max());
    }

    #[test]
    fn test_merge_into_empty() {
        let mut empty = RunningStats::new();
        let populated = RunningStats::from_values(&[1.0, 2.0, 3.0, 4.0, 5.0]);

        empty.merge(&populated).unwrap();
        assert_eq!(empty, populated);
    }

    #[test]
    fn test_coefficient_of_variation_zero_mean() {
        let stats = RunningStats::from_values(&[-3.0, 3.0]);
        assert_eq!(
            stats.coefficient_of_variation(),
            Err(StatsError::DivisionByZero("mean"))
        );
    }

    #[test]
    fn test_clear() {
        let mut stats = RunningStats::from_values(&[1.0, 2.0, 3.0]);
        stats.clear();
        assert!(stats.is_empty());
        assert_eq!(stats.min(), None);
    }

    #[test]
    fn test_overflow_is_reported() {
        let stats = RunningStats::from_values(&[1e200, -1e200, 0.0]);
        assert_eq!(stats.variance(), Err(StatsError::Overflow("variance")));
        assert_eq!(stats.sample_std_dev(), Err(StatsError::Overflow("variance")));
        assert_eq!(stats.mean().unwrap(), 0.0);

        let stats = RunningStats::from_values(&[f64::MAX, -f64::MAX]);
        assert_eq!(stats.mean(), Err(StatsError::Overflow("mean")));
        assert_eq!(stats.sample_variance(), Err(StatsError::Overflow("variance")));
    }

    #[test]
    fn test_numerical_stability() {
        let base = 1e12;
        let mut stats = RunningStats::new();
        for i in 0..1000 {
            stats.add(base + i as f64);
        }

        let mean = stats.mean().unwrap();
        assert!((mean - (base + 499.5)).abs() < 1.0, "mean: {}", mean);
        // Variance of 0..1000 is (1000² - 1) / 12
        assert!((stats.variance().unwrap() - 83_333.25).abs() < 1.0);
    }
}
