//! Frequency/coefficient conversions for exponential smoothing.
//!
//! # Conversions
//!
//! - **Alpha**: cutoff frequency and sample rate to blend coefficient
//! - **Frequency**: two timestamps to a sample rate

use std::cmp::Ordering;
use std::f64::consts::PI;

use crate::error::{FilterError, Result};

/// Convert a cutoff frequency into an exponential-smoothing blend coefficient.
///
/// Computes `1 / (1 + tau / te)` with `te = 1 / rate` the sample period and
/// `tau = 1 / (2π cutoff)` the time constant of the cutoff.
///
/// For positive `rate` and `cutoff` the result lies in `(0, 1]`. No guard is
/// applied here; callers validate their inputs first.
///
/// # Arguments
///
/// * `rate` - Sampling frequency in Hz
/// * `cutoff` - Cutoff frequency in Hz
///
/// # Example
///
/// ```
/// use motion_smoothing::math::alpha;
///
/// let a = alpha(30.0, 1.0);
/// assert!(a > 0.0 && a < 1.0);
/// ```
#[inline]
#[must_use]
pub fn alpha(rate: f64, cutoff: f64) -> f64 {
    let te = 1.0 / rate;
    let tau = 1.0 / (2.0 * PI * cutoff);
    1.0 / (1.0 + tau / te)
}

/// Convert two timestamps (seconds) into a sample rate (Hz).
///
/// Returns `1 / (current_time - last_time)`. Equal timestamps give an
/// infinite rate and reversed ones a negative rate; see [`try_frequency`]
/// for a checked version.
///
/// # Example
///
/// ```
/// use motion_smoothing::math::frequency;
///
/// assert!((frequency(0.0, 0.1) - 10.0).abs() < 1e-12);
/// ```
#[inline]
#[must_use]
pub fn frequency(last_time: f64, current_time: f64) -> f64 {
    1.0 / (current_time - last_time)
}

/// Checked [`frequency`].
///
/// # Errors
///
/// Returns [`FilterError::NonMonotonicTimestamp`] if `current_time` does not
/// come strictly after `last_time`, and [`FilterError::InvalidRate`] if the
/// resulting rate is not finite.
pub fn try_frequency(last_time: f64, current_time: f64) -> Result<f64> {
    if current_time.partial_cmp(&last_time) != Some(Ordering::Greater) {
        return Err(FilterError::non_monotonic(last_time, current_time));
    }
    let rate = frequency(last_time, current_time);
    if !rate.is_finite() {
        return Err(FilterError::invalid_rate(rate));
    }
    Ok(rate)
}

/// Check that a rate is a usable sampling frequency.
///
/// # Errors
///
/// Returns [`FilterError::InvalidRate`] for zero, negative, NaN or infinite rates.
#[inline]
pub fn check_rate(rate: f64) -> Result<()> {
    if rate > 0.0 && rate.is_finite() {
        Ok(())
    } else {
        Err(FilterError::invalid_rate(rate))
    }
}
