//! Bounded series of draws

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::central::{self, FrequencyTable, Mode};
use crate::error::{Result, StatsError};
use crate::position::sorted_copy;
use crate::summary::{describe, Summary};
use crate::traits::{Accumulator, MergeError};

/// Up to `capacity` observations kept in draw order
///
/// Where the values come from (random kicks, user entry) is up to the caller;
/// the series only holds them and answers descriptive queries. Sorting for
/// display returns a copy and never reorders the stored draws.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleSeries {
    values: Vec<f64>,
    capacity: usize,
}

impl Default for SampleSeries {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

impl SampleSeries {
    /// Draws allowed per round of the statistics game
    pub const DEFAULT_CAPACITY: usize = 9;

    /// Empty series holding at most `capacity` observations
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be positive");
        Self {
            values: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append `value`
    ///
    /// Returns `Ok(false)` without storing anything once the series is full.
    ///
    /// # Errors
    ///
    /// [`StatsError::NonFiniteValue`] for NaN or infinite values.
    pub fn push(&mut self, value: f64) -> Result<bool> {
        if !value.is_finite() {
            log::debug!("rejected non-finite draw {}", value);
            return Err(StatsError::NonFiniteValue {
                index: self.values.len(),
                value,
            });
        }
        if self.is_full() {
            log::trace!("series full at {} draws, dropping {}", self.capacity, value);
            return Ok(false);
        }
        self.values.push(value);
        Ok(true)
    }

    /// Start a new round
    pub fn reset(&mut self) {
        self.values.clear();
    }

    /// Draws in the order they were pushed
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Ascending copy of the draws
    pub fn sorted(&self) -> Result<Vec<f64>> {
        sorted_copy(&self.values)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.values.len() >= self.capacity
    }

    /// Draws left before the series is full
    pub fn remaining(&self) -> usize {
        self.capacity - self.values.len()
    }

    pub fn mean(&self) -> Result<f64> {
        central::mean(&self.values)
    }

    pub fn median(&self) -> Result<f64> {
        central::median(&self.values)
    }

    pub fn mode(&self) -> Result<Mode> {
        central::mode(&self.values)
    }

    /// Count of each drawn value, ascending; empty for an empty series
    pub fn frequencies(&self) -> Result<FrequencyTable> {
        FrequencyTable::from_values(&self.values)
    }

    pub fn summary(&self) -> Result<Summary> {
        describe(&self.values)
    }
}

impl Accumulator for SampleSeries {
    fn update(&mut self, value: f64) {
        let _ = self.push(value);
    }

    fn merge(&mut self, other: &Self) -> core::result::Result<(), MergeError> {
        let required = self.values.len() + other.values.len();
        if required > self.capacity {
            return Err(MergeError::CapacityExceeded {
                capacity: self.capacity,
                required,
            });
        }
        self.values.extend_from_slice(&other.values);
        Ok(())
    }

    fn clear(&mut self) {
        self.reset();
    }

    fn count(&self) -> u64 {
        self.values.len() as u64
    }
}
