//! Error types for filtering operations.
//!
//! Every failure the filters can report is an invalid argument: a bad rate,
//! a bad parameter set, or a sample the filter cannot blend. None of them are
//! transient, so nothing here is retried internally.

use thiserror::Error;

/// Main error type for smoothing operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    /// Sample rate was zero, negative, or not finite.
    #[error("Invalid rate: {rate} (must be a positive, finite frequency)")]
    InvalidRate { rate: f64 },

    /// Parameter set failed validation.
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// The speed-adapted cutoff frequency ended up non-positive or non-finite.
    #[error("Invalid adaptive cutoff: {cutoff}")]
    InvalidCutoff { cutoff: f64 },

    /// A raw sample was NaN or infinite.
    #[error("Non-finite sample in channel {channel}: {value}")]
    NonFiniteSample { channel: usize, value: f64 },

    /// A timestamp was NaN or infinite.
    #[error("Invalid timestamp: {timestamp}")]
    InvalidTimestamp { timestamp: f64 },

    /// Timestamps did not advance.
    #[error("Timestamp {current} does not advance past {last}")]
    NonMonotonicTimestamp { last: f64, current: f64 },

    /// A fixed-rate update was requested on a wrapper without a fixed rate.
    #[error("No fixed rate configured")]
    MissingFixedRate,
}

/// Result type alias for smoothing operations.
pub type Result<T> = std::result::Result<T, FilterError>;

impl FilterError {
    /// Create an invalid rate error.
    #[must_use]
    pub const fn invalid_rate(rate: f64) -> Self {
        Self::InvalidRate { rate }
    }

    /// Create an invalid parameters error.
    #[must_use]
    pub fn invalid_params(msg: impl Into<String>) -> Self {
        Self::InvalidParams(msg.into())
    }

    /// Create an invalid cutoff error.
    #[must_use]
    pub const fn invalid_cutoff(cutoff: f64) -> Self {
        Self::InvalidCutoff { cutoff }
    }

    /// Create a non-finite sample error.
    #[must_use]
    pub const fn non_finite_sample(channel: usize, value: f64) -> Self {
        Self::NonFiniteSample { channel, value }
    }

    /// Create an invalid timestamp error.
    #[must_use]
    pub const fn invalid_timestamp(timestamp: f64) -> Self {
        Self::InvalidTimestamp { timestamp }
    }

    /// Create a non-monotonic timestamp error.
    #[must_use]
    pub const fn non_monotonic(last: f64, current: f64) -> Self {
        Self::NonMonotonicTimestamp { last, current }
    }
}
