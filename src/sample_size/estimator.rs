//! Finite and infinite population sample-size formulas

use crate::error::{Result, StatsError};
use crate::math;
use crate::validate;

use super::ConfidenceLevel;

/// Proportion assumed when nothing is known about the population (maximises p(1-p))
pub const DEFAULT_PROPORTION: f64 = 0.5;

/// Convert a margin of error typed as a percentage (e.g. `5` for 5%) to a fraction
///
/// The percentage must lie in (0, 100].
pub fn margin_from_percent(percent: f64) -> Result<f64> {
    validate::param(
        "margin_error_percent",
        percent,
        percent.is_finite() && percent > 0.0 && percent <= 100.0,
    )?;
    Ok(percent / 100.0)
}

fn check_margin(margin_error: f64) -> Result<f64> {
    validate::param(
        "margin_error",
        margin_error,
        margin_error.is_finite() && margin_error > 0.0 && margin_error <= 1.0,
    )
}

fn check_proportion(proportion: f64) -> Result<f64> {
    validate::param(
        "proportion",
        proportion,
        proportion.is_finite() && proportion > 0.0 && proportion < 1.0,
    )
}

fn check_population(population: u64) -> Result<u64> {
    if population <= 1 {
        log::debug!("rejected population size {}", population);
        return Err(StatsError::invalid("population", population as f64));
    }
    Ok(population)
}

/// Round a raw estimate half-up to whole sampling units
///
/// A margin of error small enough to push the estimate past `u64::MAX` is
/// rejected rather than saturated.
fn whole_units(raw: f64, margin_error: f64) -> Result<u64> {
    let rounded = math::round_half_up(raw);
    // u64::MAX as f64 rounds up to 2^64, which is itself out of range
    if !rounded.is_finite() || rounded >= u64::MAX as f64 {
        log::debug!("sample size {} does not fit in u64", raw);
        return Err(StatsError::invalid("margin_error", margin_error));
    }
    Ok(rounded as u64)
}

/// Unrounded finite-population sample size
///
/// `Z²·N·p(1-p) / (e²·(N-1) + Z²·p(1-p))`
pub fn raw_sample_size_finite(
    population: u64,
    confidence: ConfidenceLevel,
    margin_error: f64,
    proportion: f64,
) -> Result<f64> {
    let n = check_population(population)? as f64;
    let e = check_margin(margin_error)?;
    let p = check_proportion(proportion)?;

    let z2 = confidence.z_score() * confidence.z_score();
    let pq = p * (1.0 - p);
    Ok(z2 * n * pq / (e * e * (n - 1.0) + z2 * pq))
}

/// Unrounded infinite-population sample size
///
/// `Z²·p(1-p) / e²`
///
/// A margin of error whose square underflows to zero is rejected.
pub fn raw_sample_size_infinite(
    confidence: ConfidenceLevel,
    margin_error: f64,
    proportion: f64,
) -> Result<f64> {
    let e = check_margin(margin_error)?;
    let p = check_proportion(proportion)?;

    let z2 = confidence.z_score() * confidence.z_score();
    let raw = z2 * p * (1.0 - p) / (e * e);
    if !raw.is_finite() {
        log::debug!("margin of error {} squares to zero", e);
        return Err(StatsError::invalid("margin_error", margin_error));
    }
    Ok(raw)
}

/// Sample size for a population of known size `population`, in whole sampling units
///
/// The raw value is rounded half-up, so 277.74 becomes 278.
///
/// # Errors
///
/// [`StatsError::InvalidParameter`] when `population <= 1`, `margin_error` is
/// outside (0, 1] or `proportion` is outside (0, 1).
///
/// # Example
///
/// ```
/// use descstats::sample_size::{sample_size_finite, ConfidenceLevel};
///
/// let n = sample_size_finite(1000, ConfidenceLevel::P95, 0.05, 0.5).unwrap();
/// assert_eq!(n, 278);
/// ```
pub fn sample_size_finite(
    population: u64,
    confidence: ConfidenceLevel,
    margin_error: f64,
    proportion: f64,
) -> Result<u64> {
    raw_sample_size_finite(population, confidence, margin_error, proportion)
        .and_then(|raw| whole_units(raw, margin_error))
}

/// Sample size for an unbounded population, in whole sampling units
///
/// # Errors
///
/// As [`sample_size_finite`], and also [`StatsError::InvalidParameter`] for a
/// `margin_error` so small that the estimate does not fit in a `u64`.
///
/// # Example
///
/// ```
/// use descstats::sample_size::{sample_size_infinite, ConfidenceLevel};
///
/// // 1.96² · 0.25 / 0.05² = 384.16
/// let n = sample_size_infinite(ConfidenceLevel::P95, 0.05, 0.5).unwrap();
/// assert_eq!(n, 384);
/// ```
pub fn sample_size_infinite(
    confidence: ConfidenceLevel,
    margin_error: f64,
    proportion: f64,
) -> Result<u64> {
    raw_sample_size_infinite(confidence, margin_error, proportion).and_then(|raw| whole_units(raw, margin_error))
}

/// Parameters for a sample-size estimate
///
/// Without a population size the infinite-population formula applies. The
/// proportion defaults to [`DEFAULT_PROPORTION`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleSizeParams {
    /// Population size, `None` for an unbounded population
    pub population: Option<u64>,
    /// Confidence level of the interval
    pub confidence: ConfidenceLevel,
    /// Margin of error as a fraction in (0, 1]
    pub margin_error: f64,
    /// Estimated proportion in (0, 1)
    pub proportion: f64,
}

impl SampleSizeParams {
    /// Parameters for an unbounded population with the default proportion
    pub fn new(confidence: ConfidenceLevel, margin_error: f64) -> Self {
        Self {
            population: None,
            confidence,
            margin_error,
            proportion: DEFAULT_PROPORTION,
        }
    }

    /// Use the finite-population formula for a population of `population` units
    pub fn with_population(mut self, population: u64) -> Self {
        self.population = Some(population);
        self
    }

    /// Override the estimated proportion
    pub fn with_proportion(mut self, proportion: f64) -> Self {
        self.proportion = proportion;
        self
    }

    /// Unrounded estimate
    pub fn raw(&self) -> Result<f64> {
        match self.population {
            Some(population) => raw_sample_size_finite(
                population,
                self.confidence,
                self.margin_error,
                self.proportion,
            ),
            None => raw_sample_size_infinite(self.confidence, self.margin_error, self.proportion),
        }
    }

    /// Estimate in whole sampling units
    pub fn estimate(&self) -> Result<u64> {
        self.raw().and_then(|raw| whole_units(raw, self.margin_error))
    }
}
