//! Mathematical utilities for adaptive smoothing.
//!
//! This module provides:
//! - [`smoothing`]: cutoff/rate to blend coefficient, timestamps to rate

pub mod smoothing;

pub use smoothing::{alpha, check_rate, frequency, try_frequency};
