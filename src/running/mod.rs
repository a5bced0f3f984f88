//! Statistics over observations that arrive one at a time
//!
//! - [`RunningStats`]: constant-memory mean, variance, min and max
//! - [`SampleSeries`]: a bounded list of draws, as in the statistics game
//!   where each kick adds one distance, with the full descriptive summary
//!
//! # Example
//!
//! ```
//! use descstats::running::SampleSeries;
//!
//! let mut kicks = SampleSeries::new(SampleSeries::DEFAULT_CAPACITY);
//! for distance in [7.0, 3.0, 12.0, 3.0] {
//!     kicks.push(distance).unwrap();
//! }
//!
//! assert_eq!(kicks.median().unwrap(), 5.0);
//! assert_eq!(kicks.remaining(), 5);
//! ```

mod moments;
mod series;

pub use moments::RunningStats;
pub use series::SampleSeries;
