//! Error taxonomy for statistics operations
//!
//! Every failure is a deterministic input-domain error. Nothing here is
//! transient, so callers surface the error to the user instead of retrying.

use core::fmt;

/// Result alias used by every fallible operation in the crate
pub type Result<T> = core::result::Result<T, StatsError>;

/// Coarse classification of a [`StatsError`], without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyDataset,
    InsufficientData,
    InvalidParameter,
    DivisionByZero,
    NonFiniteValue,
    MismatchedLengths,
    CorrelationOutOfRange,
    Overflow,
}

/// Error returned by statistics operations
#[derive(Debug, Clone, PartialEq)]
pub enum StatsError {
    /// The operation needs at least one observation
    EmptyDataset,
    /// The operation needs more observations than were supplied
    InsufficientData {
        /// Observations supplied
        got: usize,
        /// Observations required
        min: usize,
    },
    /// A parameter lies outside its domain
    InvalidParameter {
        /// Parameter name as it appears in the API
        name: &'static str,
        /// The rejected value
        value: f64,
    },
    /// A derived quantity has a zero denominator
    DivisionByZero(&'static str),
    /// An observation is NaN or infinite
    NonFiniteValue {
        /// Position of the observation in the caller's sequence
        index: usize,
        /// The rejected observation
        value: f64,
    },
    /// The two halves of a paired dataset differ in length
    MismatchedLengths {
        /// Length of `x`
        x_len: usize,
        /// Length of `y`
        y_len: usize,
    },
    /// A correlation coefficient landed outside [-1, 1] beyond rounding
    /// tolerance, which means the paired data was malformed
    CorrelationOutOfRange(f64),
    /// The data is finite but the named result lies outside the range of `f64`
    Overflow(&'static str),
}

impl StatsError {
    /// Shorthand for [`StatsError::InvalidParameter`]
    pub fn invalid(name: &'static str, value: f64) -> Self {
        StatsError::InvalidParameter { name, value }
    }

    /// The kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            StatsError::EmptyDataset => ErrorKind::EmptyDataset,
            StatsError::InsufficientData { .. } => ErrorKind::InsufficientData,
            StatsError::InvalidParameter { .. } => ErrorKind::InvalidParameter,
            StatsError::DivisionByZero(_) => ErrorKind::DivisionByZero,
            StatsError::NonFiniteValue { .. } => ErrorKind::NonFiniteValue,
            StatsError::MismatchedLengths { .. } => ErrorKind::MismatchedLengths,
            StatsError::CorrelationOutOfRange(_) => ErrorKind::CorrelationOutOfRange,
            StatsError::Overflow(_) => ErrorKind::Overflow,
        }
    }
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsError::EmptyDataset => write!(f, "dataset is empty"),
            StatsError::InsufficientData { got, min } => {
                write!(f, "insufficient data: got {} observations, need at least {}", got, min)
            }
            StatsError::InvalidParameter { name, value } => {
                write!(f, "invalid parameter `{}`: {}", name, value)
            }
            StatsError::DivisionByZero(what) => write!(f, "division by zero: {} is zero", what),
            StatsError::NonFiniteValue { index, value } => {
                write!(f, "non-finite observation at index {}: {}", index, value)
            }
            StatsError::MismatchedLengths { x_len, y_len } => {
                write!(f, "paired dataset lengths differ: x has {}, y has {}", x_len, y_len)
            }
            StatsError::CorrelationOutOfRange(r) => {
                write!(f, "correlation {} outside [-1, 1]; paired data is degenerate", r)
            }
            StatsError::Overflow(what) => write!(f, "{} is not representable as f64", what),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StatsError {}
