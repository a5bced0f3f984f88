//! Value-to-count tables

use ordered_float::OrderedFloat;

#[cfg(feature = "std")]
use std::{collections::BTreeMap, vec::Vec};

#[cfg(not(feature = "std"))]
use alloc::{collections::BTreeMap, vec::Vec};

use crate::error::Result;
use crate::validate;

/// Frequency of each distinct value in a dataset, ordered by value
///
/// Built once per call from the caller's slice; nothing is retained from it.
///
/// # Example
///
/// ```
/// use descstats::central::FrequencyTable;
///
/// let table = FrequencyTable::from_values(&[3.0, 1.0, 3.0, 2.0, 3.0]).unwrap();
///
/// assert_eq!(table.count(3.0), 3);
/// assert_eq!(table.count(7.0), 0);
/// assert_eq!(table.distinct(), 3);
/// assert_eq!(table.max_frequency(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrequencyTable {
    counts: BTreeMap<OrderedFloat<f64>, usize>,
    total: usize,
}

impl FrequencyTable {
    /// Count every value in `values`
    ///
    /// An empty slice yields an empty table. Non-finite values are rejected.
    pub fn from_values(values: &[f64]) -> Result<Self> {
        if !values.is_empty() {
            validate::dataset(values)?;
        }

        let mut counts = BTreeMap::new();
        for &v in values {
            *counts.entry(OrderedFloat(v)).or_insert(0) += 1;
        }

        Ok(Self {
            counts,
            total: values.len(),
        })
    }

    /// Occurrences of `value`
    pub fn count(&self, value: f64) -> usize {
        self.counts.get(&OrderedFloat(value)).copied().unwrap_or(0)
    }

    /// Number of distinct values
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Number of observations counted
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Highest count of any value, 0 for an empty table
    pub fn max_frequency(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// Values occurring exactly `frequency` times, ascending
    pub fn values_with_frequency(&self, frequency: usize) -> Vec<f64> {
        self.counts
            .iter()
            .filter(|(_, c)| **c == frequency)
            .map(|(v, _)| v.into_inner())
            .collect()
    }

    /// `(value, count)` pairs in ascending value order
    pub fn iter(&self) -> impl Iterator<Item = (f64, usize)> + '_ {
        self.counts.iter().map(|(v, &c)| (v.into_inner(), c))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FrequencyTable {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.counts.len()))?;
        for pair in self.iter() {
            seq.serialize_element(&pair)?;
        }
        seq.end()
    }
}
