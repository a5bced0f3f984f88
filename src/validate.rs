//! Fail-fast input checks shared by every measure family
//!
//! Checks run cheapest first and stop at the first violation. Each rejection
//! is logged at debug level before the error is handed back.

use crate::error::{Result, StatsError};

/// Reject an empty dataset, then any non-finite observation
pub(crate) fn dataset(values: &[f64]) -> Result<()> {
    if values.is_empty() {
        log::debug!("rejected empty dataset");
        return Err(StatsError::EmptyDataset);
    }
    finite(values)
}

/// Reject a dataset with fewer than `min` observations, then any non-finite one
pub(crate) fn at_least(values: &[f64], min: usize) -> Result<()> {
    if values.is_empty() {
        log::debug!("rejected empty dataset");
        return Err(StatsError::EmptyDataset);
    }
    if values.len() < min {
        log::debug!("rejected dataset of {} observations, need {}", values.len(), min);
        return Err(StatsError::InsufficientData {
            got: values.len(),
            min,
        });
    }
    finite(values)
}

fn finite(values: &[f64]) -> Result<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => {
            log::debug!("rejected non-finite observation {} at index {}", values[index], index);
            Err(StatsError::NonFiniteValue {
                index,
                value: values[index],
            })
        }
        None => Ok(()),
    }
}

/// Reject `value` unless `accept` holds for it
pub(crate) fn param(name: &'static str, value: f64, accept: bool) -> Result<f64> {
    if accept {
        Ok(value)
    } else {
        log::debug!("rejected parameter {} = {}", name, value);
        Err(StatsError::invalid(name, value))
    }
}

/// Reject a zero (or non-finite) denominator
pub(crate) fn nonzero(what: &'static str, value: f64) -> Result<f64> {
    if value == 0.0 || !value.is_finite() {
        log::debug!("rejected zero denominator {} = {}", what, value);
        Err(StatsError::DivisionByZero(what))
    } else {
        Ok(value)
    }
}
