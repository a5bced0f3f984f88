//! Every descriptive measure of one dataset in a single call

use crate::central::{self, FrequencyTable, Mode};
use crate::dispersion;
use crate::error::{Result, StatsError};
use crate::position::{self, sorted_copy};
use crate::validate;

/// Descriptive statistics for one dataset
///
/// Measures that need two observations are `None` for a single one. The
/// coefficient of variation is `None` when the mean is zero or the data has
/// fewer than two observations.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Number of observations
    pub count: usize,
    pub sum: f64,
    pub min: f64,
    pub max: f64,
    /// `max - min`
    pub range: f64,
    pub mean: f64,
    pub median: f64,
    pub mode: Mode,
    /// Population variance (divides by n)
    pub variance: f64,
    /// Population standard deviation
    pub std_dev: f64,
    /// Sample variance (divides by n - 1)
    pub sample_variance: Option<f64>,
    /// Sample standard deviation
    pub sample_std_dev: Option<f64>,
    /// First quartile
    pub q1: f64,
    /// Third quartile
    pub q3: f64,
    /// Coefficient of variation in percent, from the sample standard deviation
    pub coefficient_of_variation: Option<f64>,
}

impl Summary {
    /// Interquartile range
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Compute a [`Summary`] of `values`
///
/// # Example
///
/// ```
/// use descstats::summary::describe;
/// use descstats::central::Mode;
///
/// let s = describe(&[4.0, 8.0, 8.0, 1.0, 9.0]).unwrap();
///
/// assert_eq!(s.count, 5);
/// assert_eq!(s.median, 8.0);
/// assert_eq!(s.mode, Mode::Values(vec![8.0]));
/// assert_eq!(s.range, 8.0);
/// ```
pub fn describe(values: &[f64]) -> Result<Summary> {
    validate::dataset(values)?;

    let sorted = sorted_copy(values)?;
    let count = sorted.len();
    let min = sorted[0];
    let max = sorted[count - 1];
    let mean = central::mean(values)?;

    let variance = dispersion::population_variance(values)?;
    let (sample_variance, sample_std_dev) = if count >= 2 {
        let sv = dispersion::sample_variance(values)?;
        (Some(sv), Some(dispersion::standard_deviation(sv)?))
    } else {
        (None, None)
    };
    let coefficient_of_variation = match sample_std_dev {
        Some(sd) if mean != 0.0 => Some(dispersion::coefficient_of_variation(sd, mean)?),
        _ => None,
    };

    let table = FrequencyTable::from_values(values)?;

    let sum: f64 = values.iter().sum();
    if !sum.is_finite() {
        log::debug!("sum of {} observations overflowed", count);
        return Err(StatsError::Overflow("sum"));
    }

    Ok(Summary {
        count,
        sum,
        min,
        max,
        range: dispersion::spread("range", min, max)?,
        mean,
        median: central::median_of_sorted(&sorted),
        mode: central::mode_of_table(&table),
        variance,
        std_dev: dispersion::standard_deviation(variance)?,
        sample_variance,
        sample_std_dev,
        q1: position::percentile_of_sorted(&sorted, 25.0),
        q3: position::percentile_of_sorted(&sorted, 75.0),
        coefficient_of_variation,
    })
}

#[cfg(feature = "serde")]
impl serde::Serialize for Summary {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Summary", 15)?;
        state.serialize_field("count", &self.count)?;
        state.serialize_field("sum", &self.sum)?;
        state.serialize_field("min", &self.min)?;
        state.serialize_field("max", &self.max)?;
        state.serialize_field("range", &self.range)?;
        state.serialize_field("mean", &self.mean)?;
        state.serialize_field("median", &self.median)?;
        state.serialize_field("mode", &self.mode)?;
        state.serialize_field("variance", &self.variance)?;
        state.serialize_field("std_dev", &self.std_dev)?;
        state.serialize_field("sample_variance", &self.sample_variance)?;
        state.serialize_field("sample_std_dev", &self.sample_std_dev)?;
        state.serialize_field("q1", &self.q1)?;
        state.serialize_field("q3", &self.q3)?;
        state.serialize_field("coefficient_of_variation", &self.coefficient_of_variation)?;
        state.end()
    }
}
