//! Sample-size estimation
//!
//! How many sampling units a survey needs to estimate a proportion within a
//! margin of error at a given confidence level, for finite and infinite
//! populations.
//!
//! # Example
//!
//! ```
//! use descstats::sample_size::{ConfidenceLevel, SampleSizeParams};
//!
//! let params = SampleSizeParams::new(ConfidenceLevel::P95, 0.05);
//! assert_eq!(params.estimate().unwrap(), 384);
//!
//! let params = params.with_population(1000);
//! assert_eq!(params.estimate().unwrap(), 278);
//! ```

mod confidence;
mod estimator;

pub use confidence::ConfidenceLevel;
pub use estimator::{
    margin_from_percent, raw_sample_size_finite, raw_sample_size_infinite, sample_size_finite,
    sample_size_infinite, SampleSizeParams, DEFAULT_PROPORTION,
};
