//! Parameter set for the One Euro filter family.
//!
//! [`OneEuroParams`] is an immutable, `Copy` value shared by every channel it
//! drives. It carries the three knobs of the filter, along with presets for
//! the tracking sources the filters are usually fed from.
//!
//! # Example
//!
//! ```
//! use motion_smoothing::OneEuroParams;
//!
//! // Fixed-cutoff low-pass at 1 Hz
//! let params = OneEuroParams::default();
//!
//! // Preset for tracked joint positions, then tuned
//! let joints = OneEuroParams::joint_position().with_beta(0.7);
//! assert!(joints.validate().is_ok());
//! ```

use crate::error::{FilterError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration of a One Euro filter.
///
/// # Tuning
///
/// - Lower `min_cutoff` until jitter at rest disappears.
/// - Then raise `beta` until lag during fast motion is acceptable.
/// - `derivate_cutoff` rarely needs changing from its default of 1 Hz.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OneEuroParams {
    /// Cutoff frequency (Hz) used when the signal is at rest.
    /// Must be positive.
    pub min_cutoff: f64,

    /// Speed coefficient: how much the cutoff rises per unit of estimated speed.
    /// `0.0` turns the filter into a fixed-cutoff low-pass.
    pub beta: f64,

    /// Cutoff frequency (Hz) applied to the derivative estimate.
    /// Must be positive.
    pub derivate_cutoff: f64,
}

impl Default for OneEuroParams {
    fn default() -> Self {
        Self {
            min_cutoff: 1.0,
            beta: 0.0,
            derivate_cutoff: 1.0,
        }
    }
}

impl OneEuroParams {
    /// Create a parameter set with the given resting cutoff,
    /// `beta = 0` and `derivate_cutoff = 1`.
    #[must_use]
    pub fn new(min_cutoff: f64) -> Self {
        Self {
            min_cutoff,
            ..Self::default()
        }
    }

    /// Create a parameter set with every value given explicitly.
    #[must_use]
    pub const fn with_all(min_cutoff: f64, beta: f64, derivate_cutoff: f64) -> Self {
        Self {
            min_cutoff,
            beta,
            derivate_cutoff,
        }
    }

    /// Validate the parameter set.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParams`] if a cutoff is not a positive
    /// finite frequency or `beta` is negative or not finite.
    pub fn validate(&self) -> Result<()> {
        if self.min_cutoff <= 0.0 || !self.min_cutoff.is_finite() {
            return Err(FilterError::invalid_params(format!(
                "min_cutoff must be positive and finite, got {}",
                self.min_cutoff
            )));
        }
        if self.beta < 0.0 || !self.beta.is_finite() {
            return Err(FilterError::invalid_params(format!(
                "beta must be non-negative and finite, got {}",
                self.beta
            )));
        }
        if self.derivate_cutoff <= 0.0 || !self.derivate_cutoff.is_finite() {
            return Err(FilterError::invalid_params(format!(
                "derivate_cutoff must be positive and finite, got {}",
                self.derivate_cutoff
            )));
        }
        Ok(())
    }

    /// Preset for tracked skeleton joint positions (metres, ~30 Hz).
    #[must_use]
    pub fn joint_position() -> Self {
        Self {
            min_cutoff: 1.0,
            beta: 0.5,
            ..Self::default()
        }
    }

    /// Preset for per-component joint orientation smoothing.
    ///
    /// Orientation components live in `[-1, 1]`, so speeds are small and
    /// `beta` is correspondingly larger.
    #[must_use]
    pub fn joint_rotation() -> Self {
        Self {
            min_cutoff: 0.5,
            beta: 2.0,
            ..Self::default()
        }
    }

    /// Preset for hand positions, which move faster than the torso.
    #[must_use]
    pub fn hand_tracking() -> Self {
        Self {
            min_cutoff: 1.5,
            beta: 1.0,
            ..Self::default()
        }
    }

    /// Preset for head positions driving a viewpoint, where jitter is most visible.
    #[must_use]
    pub fn head_tracking() -> Self {
        Self {
            min_cutoff: 0.5,
            beta: 0.3,
            ..Self::default()
        }
    }

    /// Set the resting cutoff frequency.
    #[must_use]
    pub const fn with_min_cutoff(mut self, min_cutoff: f64) -> Self {
        self.min_cutoff = min_cutoff;
        self
    }

    /// Set the speed coefficient.
    #[must_use]
    pub const fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Set the derivative cutoff frequency.
    #[must_use]
    pub const fn with_derivate_cutoff(mut self, derivate_cutoff: f64) -> Self {
        self.derivate_cutoff = derivate_cutoff;
        self
    }

    /// Cutoff frequency the filter uses for a given smoothed speed.
    ///
    /// With `beta == 0` this is `min_cutoff` whatever the speed, even an
    /// overflowed one.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn adaptive_cutoff(&self, speed: f64) -> f64 {
        if self.beta == 0.0 {
            return self.min_cutoff;
        }
        self.min_cutoff + self.beta * speed.abs()
    }
}
