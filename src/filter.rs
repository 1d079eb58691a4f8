//! Adaptive scalar One Euro filter.
//!
//! [`OneEuroFilter`] smooths one scalar channel. It keeps two
//! [`LowPassFilter`]s, one for the signal and one for its estimated speed, and
//! picks the signal cutoff from that speed on every call: slow motion gets a
//! cutoff near `min_cutoff` (heavy smoothing), fast motion raises it by
//! `beta * |speed|` (low lag).
//!
//! # State machine
//!
//! | State | On `filter(x, ..)` |
//! |-------|--------------------|
//! | `Uninitialized` | seed both smoothers, return `x`, become `Running` |
//! | `Running` | estimate speed, adapt cutoff, return smoothed `x` |
//!
//! The first sample of a channel is always returned untouched, and every later
//! sample is filtered. [`OneEuroFilter::reset`] returns to `Uninitialized`.

use log::trace;

use crate::config::OneEuroParams;
use crate::error::{FilterError, Result};
use crate::low_pass::LowPassFilter;
use crate::math::smoothing::{alpha, check_rate};

/// Lifecycle of a filter channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterState {
    /// No sample seen yet.
    #[default]
    Uninitialized,
    /// Seeded; every further sample is smoothed.
    Running,
}

/// A filter that smooths one kind of sample at a caller-supplied rate.
///
/// Implemented by the scalar and vector One Euro filters so that wrappers such
/// as [`TimestampedFilter`](crate::TimestampedFilter) can drive either.
pub trait SignalFilter {
    /// Shape of the raw and smoothed values.
    type Sample: Copy;

    /// Smooth one sample taken at `rate` Hz.
    ///
    /// # Errors
    ///
    /// Returns an error if `rate`, `params` or the sample is invalid. The
    /// filter state is unchanged when an error is returned.
    fn filter_sample(
        &mut self,
        sample: Self::Sample,
        rate: f64,
        params: &OneEuroParams,
    ) -> Result<Self::Sample>;

    /// Forget all history.
    fn reset(&mut self);

    /// Whether a first sample has been seen.
    fn is_initialized(&self) -> bool;
}

/// Validated update for one channel, computed without touching its state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Step {
    Seed(f64),
    Blend {
        x: f64,
        alpha_x: f64,
        dx: f64,
        alpha_dx: f64,
    },
}

/// One Euro filter over a single scalar channel.
///
/// # Example
///
/// ```
/// use motion_smoothing::{OneEuroFilter, OneEuroParams};
///
/// let params = OneEuroParams::new(1.0).with_beta(0.5);
/// let mut filter = OneEuroFilter::new();
///
/// // First sample passes through unchanged
/// assert_eq!(filter.filter(5.0, 30.0, &params)?, 5.0);
///
/// // Later samples are smoothed towards the input
/// let y = filter.filter(6.0, 30.0, &params)?;
/// assert!(y > 5.0 && y < 6.0);
/// # Ok::<(), motion_smoothing::FilterError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OneEuroFilter {
    /// Smoothed signal.
    x: LowPassFilter,

    /// Smoothed speed (units per second).
    dx: LowPassFilter,

    state: FilterState,
}

impl OneEuroFilter {
    /// Create an uninitialized filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Smooth one sample.
    ///
    /// # Arguments
    ///
    /// * `x` - Raw sample
    /// * `rate` - Sampling frequency in Hz (see [`frequency`](crate::frequency))
    /// * `params` - Filter parameters
    ///
    /// # Errors
    ///
    /// - [`FilterError::InvalidRate`] if `rate` is not positive and finite
    /// - [`FilterError::InvalidParams`] if `params` fails validation
    /// - [`FilterError::NonFiniteSample`] if `x` is NaN or infinite
    /// - [`FilterError::InvalidCutoff`] if the speed-adapted cutoff is unusable
    ///
    /// On error the filter is left exactly as it was.
    pub fn filter(&mut self, x: f64, rate: f64, params: &OneEuroParams) -> Result<f64> {
        check_rate(rate)?;
        params.validate()?;
        let step = self.plan(0, x, rate, params)?;
        Ok(self.apply(step))
    }

    /// Compute the update for `x` without applying it.
    ///
    /// `rate` and `params` must already be validated.
    pub(crate) fn plan(
        &self,
        channel: usize,
        x: f64,
        rate: f64,
        params: &OneEuroParams,
    ) -> Result<Step> {
        if !x.is_finite() {
            return Err(FilterError::non_finite_sample(channel, x));
        }

        if self.state == FilterState::Uninitialized {
            return Ok(Step::Seed(x));
        }

        let dx = (x - self.x.last_output()) * rate;
        let alpha_dx = alpha(rate, params.derivate_cutoff);
        let edx = self.dx.peek(dx, alpha_dx);

        let cutoff = params.adaptive_cutoff(edx);
        if cutoff <= 0.0 || !cutoff.is_finite() {
            return Err(FilterError::invalid_cutoff(cutoff));
        }

        Ok(Step::Blend {
            x,
            alpha_x: alpha(rate, cutoff),
            dx,
            alpha_dx,
        })
    }

    /// Commit a planned update and return the filtered value.
    pub(crate) fn apply(&mut self, step: Step) -> f64 {
        match step {
            Step::Seed(x) => {
                self.dx = LowPassFilter::with_initial(0.0);
                self.x = LowPassFilter::with_initial(x);
                self.state = FilterState::Running;
                trace!("one euro channel seeded at {}", x);
                x
            }
            Step::Blend {
                x,
                alpha_x,
                dx,
                alpha_dx,
            } => {
                self.dx.filter(dx, alpha_dx);
                self.x.filter(x, alpha_x)
            }
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> FilterState {
        self.state
    }

    /// Whether the channel has been seeded.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.state == FilterState::Running
    }

    /// Last smoothed value, or `None` before the first sample.
    #[must_use]
    pub fn last_output(&self) -> Option<f64> {
        self.is_initialized().then_some(self.x.last_output())
    }

    /// Last smoothed speed estimate, or `None` before the first sample.
    #[must_use]
    pub fn last_derivative(&self) -> Option<f64> {
        self.is_initialized().then_some(self.dx.last_output())
    }

    /// Return to the uninitialized state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl SignalFilter for OneEuroFilter {
    type Sample = f64;

    fn filter_sample(&mut self, sample: f64, rate: f64, params: &OneEuroParams) -> Result<f64> {
        self.filter(sample, rate, params)
    }

    fn reset(&mut self) {
        OneEuroFilter::reset(self);
    }

    fn is_initialized(&self) -> bool {
        OneEuroFilter::is_initialized(self)
    }
}
