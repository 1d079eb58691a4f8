//! Motion Smoothing Library
//!
//! Adaptive "One Euro" filtering for noisy, irregularly sampled tracking data.
//!
//! The One Euro filter is an exponential low-pass whose cutoff frequency rises
//! with the estimated speed of the signal: at rest it smooths heavily and
//! removes jitter, during fast motion it opens up and keeps lag low.
//!
//! # Features
//!
//! - **Scalar filter**: [`OneEuroFilter`] for a single channel
//! - **Vector filters**: [`OneEuroFilter3`] for positions, [`OneEuroFilter4`]
//!   for 4-vectors and component-wise quaternion smoothing
//! - **Shared parameters**: one immutable [`OneEuroParams`] drives any number
//!   of channels
//! - **Timestamped streams**: [`TimestampedFilter`] derives the rate from
//!   sample timestamps
//!
//! # Quick Start
//!
//! ```
//! use motion_smoothing::{frequency, OneEuroFilter3, OneEuroParams};
//!
//! let params = OneEuroParams::joint_position();
//! let mut wrist = OneEuroFilter3::new();
//!
//! let samples = [
//!     (0.000, [0.30, 1.10, 2.00]),
//!     (0.033, [0.31, 1.12, 2.01]),
//!     (0.067, [0.29, 1.11, 1.99]),
//! ];
//!
//! let mut last_time = None;
//! for (time, raw) in samples {
//!     let rate = last_time.map_or(30.0, |last| frequency(last, time));
//!     let _smoothed = wrist.filter(raw, rate, &params)?;
//!     last_time = Some(time);
//! }
//! # Ok::<(), motion_smoothing::FilterError>(())
//! ```
//!
//! # Errors
//!
//! Non-positive rates or cutoffs, and non-finite samples, are reported as
//! [`FilterError`]s instead of producing `NaN`. A failed call never changes the
//! filter state.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]

pub mod config;
pub mod error;
pub mod filter;
pub mod low_pass;
pub mod math;
pub mod streaming;
pub mod vector;

// Re-exports for convenient access
pub use config::OneEuroParams;
pub use error::{FilterError, Result};
pub use filter::{FilterState, OneEuroFilter, SignalFilter};
pub use low_pass::LowPassFilter;
pub use math::{alpha, frequency, try_frequency};
pub use streaming::TimestampedFilter;
pub use vector::{OneEuroFilter3, OneEuroFilter4, OneEuroFilterN};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
