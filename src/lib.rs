//! # Descstats
//!
//! Descriptive statistics as pure functions over slices of `f64`.
//!
//! Every operation validates its own input and returns a [`StatsError`]
//! describing the first problem it finds. Nothing is cached between calls and
//! the caller's data is never reordered: measures that need sorted data work
//! on a private copy.
//!
//! ## Features
//!
//! - **Sample size**: finite and infinite population estimates at 90/95/99% confidence
//! - **Central tendency**: mean, median, mode (with an explicit "no mode" outcome)
//! - **Dispersion**: range, population/sample variance, standard deviation, coefficient of variation
//! - **Position**: quartiles and percentiles with linear interpolation
//! - **Shape & association**: Pearson skewness, covariance, correlation
//! - **Running**: streaming moments and bounded draw series
//!
//! ## Quick Start
//!
//! ```rust
//! use descstats::prelude::*;
//!
//! let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
//!
//! assert!((mean(&data).unwrap() - 5.0).abs() < 1e-12);
//! assert_eq!(median(&data).unwrap(), 4.5);
//! assert_eq!(mode(&data).unwrap(), Mode::Values(vec![4.0]));
//!
//! let n = SampleSizeParams::new(ConfidenceLevel::P95, 0.05)
//!     .with_population(1000)
//!     .estimate()
//!     .unwrap();
//! assert_eq!(n, 278);
//! ```
//!
//! ## Errors
//!
//! ```rust
//! use descstats::{dispersion, ErrorKind};
//!
//! let err = dispersion::sample_variance(&[3.0]).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InsufficientData);
//! ```
//!
//! ## Feature Flags
//!
//! - `sample-size` (default): sample-size estimation
//! - `descriptive` (default): central, dispersion, position, shape and summary
//! - `running` (default): streaming accumulators
//! - `std` (default): standard library support; without it the crate is
//!   `no_std` + `alloc` and uses libm
//! - `serde`: serialization of result types
//! - `full`: everything

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub mod traits;

mod math;
mod validate;

#[cfg(feature = "sample-size")]
#[cfg_attr(docsrs, doc(cfg(feature = "sample-size")))]
pub mod sample_size;

#[cfg(feature = "descriptive")]
#[cfg_attr(docsrs, doc(cfg(feature = "descriptive")))]
pub mod central;

#[cfg(feature = "descriptive")]
#[cfg_attr(docsrs, doc(cfg(feature = "descriptive")))]
pub mod dispersion;

#[cfg(feature = "descriptive")]
#[cfg_attr(docsrs, doc(cfg(feature = "descriptive")))]
pub mod position;

#[cfg(feature = "descriptive")]
#[cfg_attr(docsrs, doc(cfg(feature = "descriptive")))]
pub mod shape;

#[cfg(feature = "descriptive")]
#[cfg_attr(docsrs, doc(cfg(feature = "descriptive")))]
pub mod summary;

#[cfg(feature = "running")]
#[cfg_attr(docsrs, doc(cfg(feature = "running")))]
pub mod running;

pub use error::{ErrorKind, Result, StatsError};

pub mod prelude {
    pub use crate::error::{ErrorKind, StatsError};
    pub use crate::traits::*;

    #[cfg(feature = "sample-size")]
    pub use crate::sample_size::{
        sample_size_finite, sample_size_infinite, ConfidenceLevel, SampleSizeParams,
    };

    #[cfg(feature = "descriptive")]
    pub use crate::central::{mean, median, mode, FrequencyTable, Mode};

    #[cfg(feature = "descriptive")]
    pub use crate::dispersion::{
        coefficient_of_variation, population_variance, range, sample_variance,
        standard_deviation,
    };

    #[cfg(feature = "descriptive")]
    pub use crate::position::{percentile, quartile};

    #[cfg(feature = "descriptive")]
    pub use crate::shape::{covariance, pearson_correlation, pearson_skewness, PairedDataset};

    #[cfg(feature = "descriptive")]
    pub use crate::summary::{describe, Summary};

    #[cfg(feature = "running")]
    pub use crate::running::{RunningStats, SampleSeries};
}
