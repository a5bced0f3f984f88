//! Shared trait for incremental statistics
//!
//! [`Accumulator`] is implemented by the types in [`running`](crate::running)
//! that take observations one at a time and can be combined.

use core::fmt::{self, Debug};

/// Error while merging two accumulators
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeError {
    /// The merged result would hold more observations than allowed
    CapacityExceeded {
        /// Maximum number of observations
        capacity: usize,
        /// Number the merge would produce
        required: usize,
    },
}

impl fmt::Display for MergeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeError::CapacityExceeded { capacity, required } => {
                write!(f, "capacity exceeded: {} observations into capacity {}", required, capacity)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MergeError {}

/// Incremental, mergeable statistics over a stream of observations
pub trait Accumulator: Clone + Debug {
    /// Record one observation
    ///
    /// Implementations ignore observations they cannot hold (non-finite
    /// values, or any value once full).
    fn update(&mut self, value: f64);

    /// Fold another accumulator's observations into this one
    fn merge(&mut self, other: &Self) -> Result<(), MergeError>;

    /// Forget every observation
    fn clear(&mut self);

    /// Observations recorded
    fn count(&self) -> u64;

    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Record every observation from `values`
    fn extend_from_slice(&mut self, values: &[f64]) {
        for &v in values {
            self.update(v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "std")]
    #[test]
    fn test_merge_error_display() {
        let err = MergeError::CapacityExceeded {
            capacity: 9,
            required: 12,
        };
        assert_eq!(err.to_string(), "capacity exceeded: 12 observations into capacity 9");
    }
}
