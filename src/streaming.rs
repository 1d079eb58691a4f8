//! Timestamp-driven filtering for live sample streams.
//!
//! Ingestion pipelines usually hand over samples with a capture time rather
//! than a rate. [`TimestampedFilter`] keeps the last accepted timestamp next
//! to any [`SignalFilter`] and derives the rate with
//! [`frequency`](crate::frequency) on every update.

use log::{debug, warn};

use crate::config::OneEuroParams;
use crate::error::{FilterError, Result};
use crate::filter::SignalFilter;
use crate::math::smoothing::{check_rate, try_frequency};

/// Wraps a filter and feeds it rates computed from sample timestamps.
///
/// # Example
///
/// ```
/// use motion_smoothing::{OneEuroFilter3, OneEuroParams, TimestampedFilter};
///
/// let params = OneEuroParams::joint_position();
/// let mut head = TimestampedFilter::new(OneEuroFilter3::new());
///
/// head.update([0.0, 1.6, 0.0], 0.000, &params)?;
/// let smoothed = head.update([0.01, 1.61, 0.0], 0.033, &params)?;
/// assert!(smoothed[1] > 1.6 && smoothed[1] < 1.61);
/// # Ok::<(), motion_smoothing::FilterError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimestampedFilter<F> {
    /// Wrapped filter.
    inner: F,

    /// Timestamp (seconds) of the last accepted sample.
    last_timestamp: Option<f64>,

    /// Rate used by [`update_fixed`](Self::update_fixed).
    fixed_rate: Option<f64>,
}

impl<F: SignalFilter> TimestampedFilter<F> {
    /// Wrap a filter. Any history already in `inner` is discarded.
    #[must_use]
    pub fn new(mut inner: F) -> Self {
        inner.reset();
        Self {
            inner,
            last_timestamp: None,
            fixed_rate: None,
        }
    }

    /// Wrap a filter driven at a fixed tick rate.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidRate`] if `rate` is not positive and finite.
    pub fn with_fixed_rate(mut inner: F, rate: f64) -> Result<Self> {
        check_rate(rate)?;
        inner.reset();
        Ok(Self {
            inner,
            last_timestamp: None,
            fixed_rate: Some(rate),
        })
    }

    /// Filter a sample captured at `timestamp` seconds.
    ///
    /// The first sample seeds the filter. Later ones are filtered at
    /// `1 / (timestamp - last_timestamp)` Hz. The first timestamped sample
    /// after [`update_fixed`](Self::update_fixed) calls is filtered at the
    /// fixed rate.
    ///
    /// # Errors
    ///
    /// - [`FilterError::InvalidTimestamp`] if `timestamp` is NaN or infinite
    /// - [`FilterError::NonMonotonicTimestamp`] if `timestamp` does not come
    ///   strictly after the last accepted one; the sample is dropped
    /// - any error of the wrapped filter
    ///
    /// On error neither the filter nor the stored timestamp changes.
    pub fn update(
        &mut self,
        sample: F::Sample,
        timestamp: f64,
        params: &OneEuroParams,
    ) -> Result<F::Sample> {
        if !timestamp.is_finite() {
            return Err(FilterError::invalid_timestamp(timestamp));
        }

        let rate = match self.last_timestamp {
            Some(last) if self.inner.is_initialized() => {
                try_frequency(last, timestamp).map_err(|e| {
                    warn!("dropping sample at {}s: {}", timestamp, e);
                    e
                })?
            }
            // Only reached with a fixed rate or on the seeding sample, which
            // ignores the rate.
            _ => self.fixed_rate.unwrap_or(1.0),
        };

        let out = self.inner.filter_sample(sample, rate, params)?;
        self.last_timestamp = Some(timestamp);
        Ok(out)
    }

    /// Filter a sample at the configured fixed rate.
    ///
    /// Fixed ticks carry no timestamp, so the stored one is cleared.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::MissingFixedRate`] if the wrapper was built
    /// without [`with_fixed_rate`](Self::with_fixed_rate), or any error of the
    /// wrapped filter.
    pub fn update_fixed(&mut self, sample: F::Sample, params: &OneEuroParams) -> Result<F::Sample> {
        let rate = self.fixed_rate.ok_or(FilterError::MissingFixedRate)?;
        let out = self.inner.filter_sample(sample, rate, params)?;
        self.last_timestamp = None;
        Ok(out)
    }

    /// Forget the filter history and the last timestamp.
    pub fn reset(&mut self) {
        self.inner.reset();
        self.last_timestamp = None;
        debug!("timestamped filter reset");
    }

    /// Timestamp of the last accepted sample.
    #[must_use]
    pub const fn last_timestamp(&self) -> Option<f64> {
        self.last_timestamp
    }

    /// Configured fixed tick rate.
    #[must_use]
    pub const fn fixed_rate(&self) -> Option<f64> {
        self.fixed_rate
    }

    /// Get reference to the wrapped filter.
    #[must_use]
    pub const fn inner(&self) -> &F {
        &self.inner
    }

    /// Unwrap the filter.
    #[must_use]
    pub fn into_inner(self) -> F {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{OneEuroFilter, OneEuroFilter3};

    #[test]
    fn test_matches_explicit_rate() {
        let params = OneEuroParams::joint_position();
        let mut stamped = TimestampedFilter::new(OneEuroFilter::new());
        let mut manual = OneEuroFilter::new();

        let timestamps = [0.0, 0.033, 0.070, 0.100, 0.141, 0.166];
        let samples = [1.0, 1.1, 1.05, 1.3, 1.2, 1.25];

        let mut last: Option<f64> = None;
        for (&t, &x) in timestamps.iter().zip(samples.iter()) {
            let got = stamped.update(x, t, &params).unwrap();
            let rate = last.map_or(1.0, |l| crate::frequency(l, t));
            let want = manual.filter(x, rate, &params).unwrap();
            assert_eq!(got, want);
            last = Some(t);
        }
        assert_eq!(stamped.last_timestamp(), Some(0.166));
    }

    #[test]
    fn test_non_monotonic_timestamp_dropped() {
        let params = OneEuroParams::default();
        let mut stamped = TimestampedFilter::new(OneEuroFilter3::new());

        stamped.update([0.0, 0.0, 0.0], 1.0, &params).unwrap();
        stamped.update([1.0, 1.0, 1.0], 1.1, &params).unwrap();
        let before = stamped.inner().clone();

        for t in [1.1, 1.05] {
            let err = stamped.update([5.0, 5.0, 5.0], t, &params).unwrap_err();
            assert!(matches!(err, FilterError::NonMonotonicTimestamp { .. }));
        }
        for t in [f64::NAN, f64::INFINITY] {
            let err = stamped.update([5.0, 5.0, 5.0], t, &params).unwrap_err();
            assert!(matches!(err, FilterError::InvalidTimestamp { .. }));
        }
        assert_eq!(stamped.inner(), &before);
        assert_eq!(stamped.last_timestamp(), Some(1.1));
    }

    #[test]
    fn test_filter_error_keeps_timestamp() {
        let params = OneEuroParams::default();
        let mut stamped = TimestampedFilter::new(OneEuroFilter::new());

        stamped.update(1.0, 0.0, &params).unwrap();
        assert!(stamped.update(f64::INFINITY, 0.1, &params).is_err());
        assert_eq!(stamped.last_timestamp(), Some(0.0));
    }

    #[test]
    fn test_fixed_rate() {
        let params = OneEuroParams::head_tracking();
        let mut stamped = TimestampedFilter::with_fixed_rate(OneEuroFilter::new(), 60.0).unwrap();
        let mut manual = OneEuroFilter::new();

        for x in [0.0, 0.2, 0.1, 0.4] {
            let got = stamped.update_fixed(x, &params).unwrap();
            let want = manual.filter(x, 60.0, &params).unwrap();
            assert_eq!(got, want);
        }
        assert_eq!(stamped.fixed_rate(), Some(60.0));
    }

    #[test]
    fn test_mixed_fixed_and_timestamped_updates() {
        let params = OneEuroParams::joint_position();
        let mut stamped = TimestampedFilter::with_fixed_rate(OneEuroFilter::new(), 30.0).unwrap();
        let mut manual = OneEuroFilter::new();

        stamped.update(0.0, 0.0, &params).unwrap();
        manual.filter(0.0, 30.0, &params).unwrap();

        // Ticks without timestamps, then a timestamp long after the first one.
        for x in [0.1, 0.2, 0.3] {
            stamped.update_fixed(x, &params).unwrap();
            manual.filter(x, 30.0, &params).unwrap();
        }
        assert_eq!(stamped.last_timestamp(), None);

        let got = stamped.update(0.4, 10.0, &params).unwrap();
        let want = manual.filter(0.4, 30.0, &params).unwrap();
        assert_eq!(got, want);
        assert_eq!(stamped.last_timestamp(), Some(10.0));

        let got = stamped.update(0.5, 10.05, &params).unwrap();
        let want = manual.filter(0.5, crate::frequency(10.0, 10.05), &params).unwrap();
        assert_eq!(got, want);
    }

    #[test]
    fn test_fixed_rate_required() {
        let params = OneEuroParams::default();
        let mut stamped = TimestampedFilter::new(OneEuroFilter::new());
        assert_eq!(
            stamped.update_fixed(1.0, &params),
            Err(FilterError::MissingFixedRate)
        );
        assert!(TimestampedFilter::with_fixed_rate(OneEuroFilter::new(), 0.0).is_err());
    }

    #[test]
    fn test_reset() {
        let params = OneEuroParams::default();
        let mut stamped = TimestampedFilter::new(OneEuroFilter::new());
        stamped.update(3.0, 5.0, &params).unwrap();
        stamped.update(4.0, 5.1, &params).unwrap();

        stamped.reset();
        assert_eq!(stamped.last_timestamp(), None);
        assert!(!stamped.inner().is_initialized());

        // Earlier timestamps are accepted again after a reset.
        assert_eq!(stamped.update(-2.0, 0.0, &params).unwrap(), -2.0);
    }
}
