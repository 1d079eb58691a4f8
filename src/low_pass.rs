//! Single-value exponential smoother.
//!
//! [`LowPassFilter`] is the building block of the One Euro filter: one scalar
//! of history blended with each new sample by a caller-supplied coefficient.

/// Exponential moving average with a single value of state.
///
/// # Example
///
/// ```
/// use motion_smoothing::LowPassFilter;
///
/// let mut lpf = LowPassFilter::with_initial(0.0);
/// assert_eq!(lpf.filter(10.0, 0.25), 2.5);
/// assert_eq!(lpf.filter(10.0, 1.0), 10.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LowPassFilter {
    last_output: f64,
}

impl LowPassFilter {
    /// Create a smoother holding `value` as its previous output.
    #[must_use]
    pub const fn with_initial(value: f64) -> Self {
        Self { last_output: value }
    }

    /// Blend `x` into the history and return the new output.
    ///
    /// `alpha` is used as given, without clamping: `1.0` passes `x` through,
    /// `0.0` holds the previous output.
    #[inline]
    pub fn filter(&mut self, x: f64, alpha: f64) -> f64 {
        self.last_output = self.peek(x, alpha);
        self.last_output
    }

    /// Output [`filter`](Self::filter) would produce, without committing it.
    ///
    /// Computes `alpha * x + (1 - alpha) * last`. A sample equal to the
    /// previous output returns it unchanged for any `alpha`.
    #[inline]
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn peek(&self, x: f64, alpha: f64) -> f64 {
        if x == self.last_output {
            return self.last_output;
        }
        alpha * x + (1.0 - alpha) * self.last_output
    }

    /// Most recent output.
    #[inline]
    #[must_use]
    pub const fn last_output(&self) -> f64 {
        self.last_output
    }
}
