//! Component-wise One Euro filters for 3- and 4-wide samples.
//!
//! [`OneEuroFilterN`] runs `N` independent [`OneEuroFilter`]s in lock-step,
//! all driven by the same rate and parameters. There is no coupling between
//! components: each one is smoothed as if it were an unrelated scalar signal.
//!
//! # Orientations
//!
//! [`OneEuroFilter4::filter_quaternion`] smooths the four quaternion
//! components independently. The result is not renormalized and the
//! `q` / `-q` double cover is ignored, so the output can drift off the unit
//! sphere while the input moves. Callers that need a rotation renormalize
//! downstream, e.g. with `UnitQuaternion::new_normalize`.

use nalgebra::{Quaternion, Vector3, Vector4};

use crate::config::OneEuroParams;
use crate::error::Result;
use crate::filter::{OneEuroFilter, SignalFilter, Step};
use crate::math::smoothing::check_rate;

/// `N` independent One Euro channels filtered together.
///
/// # Example
///
/// ```
/// use motion_smoothing::{OneEuroFilter3, OneEuroParams};
///
/// let params = OneEuroParams::joint_position();
/// let mut hand = OneEuroFilter3::new();
///
/// let first = hand.filter([0.1, 1.2, 2.0], 30.0, &params)?;
/// assert_eq!(first, [0.1, 1.2, 2.0]);
/// # Ok::<(), motion_smoothing::FilterError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OneEuroFilterN<const N: usize> {
    channels: [OneEuroFilter; N],
}

/// Filter for position-like triples.
pub type OneEuroFilter3 = OneEuroFilterN<3>;

/// Filter for homogeneous or orientation-like quadruples.
pub type OneEuroFilter4 = OneEuroFilterN<4>;

impl<const N: usize> Default for OneEuroFilterN<N> {
    fn default() -> Self {
        Self {
            channels: std::array::from_fn(|_| OneEuroFilter::new()),
        }
    }
}

impl<const N: usize> OneEuroFilterN<N> {
    /// Create a filter with every channel uninitialized.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Smooth one `N`-wide sample.
    ///
    /// Equivalent to calling [`OneEuroFilter::filter`] on each component with
    /// the same `rate` and `params`, except that every component is validated
    /// before any of them is updated.
    ///
    /// # Errors
    ///
    /// Same conditions as [`OneEuroFilter::filter`]; a failure in any
    /// component leaves all components unchanged.
    pub fn filter(
        &mut self,
        value: [f64; N],
        rate: f64,
        params: &OneEuroParams,
    ) -> Result<[f64; N]> {
        check_rate(rate)?;
        params.validate()?;

        let mut steps = [Step::Seed(0.0); N];
        for (i, ((channel, &x), step)) in self
            .channels
            .iter()
            .zip(value.iter())
            .zip(steps.iter_mut())
            .enumerate()
        {
            *step = channel.plan(i, x, rate, params)?;
        }

        let mut out = [0.0; N];
        for ((channel, step), y) in self.channels.iter_mut().zip(steps).zip(out.iter_mut()) {
            *y = channel.apply(step);
        }
        Ok(out)
    }

    /// Read access to one component's filter.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[must_use]
    pub fn channel(&self, index: usize) -> &OneEuroFilter {
        &self.channels[index]
    }

    /// All component filters, in order.
    #[must_use]
    pub const fn channels(&self) -> &[OneEuroFilter; N] {
        &self.channels
    }

    /// Whether the filter has been seeded.
    ///
    /// Components are always updated together, so this is true for all
    /// channels or none.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.channels.iter().all(OneEuroFilter::is_initialized)
    }

    /// Last smoothed sample, or `None` before the first one.
    #[must_use]
    pub fn last_output(&self) -> Option<[f64; N]> {
        let mut out = [0.0; N];
        for (channel, y) in self.channels.iter().zip(out.iter_mut()) {
            *y = channel.last_output()?;
        }
        Some(out)
    }

    /// Return every channel to the uninitialized state.
    pub fn reset(&mut self) {
        self.channels.iter_mut().for_each(OneEuroFilter::reset);
    }
}

impl OneEuroFilterN<3> {
    /// Smooth an nalgebra vector.
    ///
    /// # Errors
    ///
    /// See [`OneEuroFilterN::filter`].
    pub fn filter_vector3(
        &mut self,
        value: &Vector3<f64>,
        rate: f64,
        params: &OneEuroParams,
    ) -> Result<Vector3<f64>> {
        let out = self.filter([value.x, value.y, value.z], rate, params)?;
        Ok(Vector3::from(out))
    }
}

impl OneEuroFilterN<4> {
    /// Smooth an nalgebra 4-vector.
    ///
    /// # Errors
    ///
    /// See [`OneEuroFilterN::filter`].
    pub fn filter_vector4(
        &mut self,
        value: &Vector4<f64>,
        rate: f64,
        params: &OneEuroParams,
    ) -> Result<Vector4<f64>> {
        let out = self.filter([value.x, value.y, value.z, value.w], rate, params)?;
        Ok(Vector4::from(out))
    }

    /// Smooth a quaternion component-wise, in `(i, j, k, w)` order.
    ///
    /// The output is not renormalized; see the module docs.
    ///
    /// # Errors
    ///
    /// See [`OneEuroFilterN::filter`].
    pub fn filter_quaternion(
        &mut self,
        value: &Quaternion<f64>,
        rate: f64,
        params: &OneEuroParams,
    ) -> Result<Quaternion<f64>> {
        let coords = self.filter_vector4(&value.coords, rate, params)?;
        Ok(Quaternion::from_vector(coords))
    }
}

impl<const N: usize> SignalFilter for OneEuroFilterN<N> {
    type Sample = [f64; N];

    fn filter_sample(
        &mut self,
        sample: [f64; N],
        rate: f64,
        params: &OneEuroParams,
    ) -> Result<[f64; N]> {
        self.filter(sample, rate, params)
    }

    fn reset(&mut self) {
        OneEuroFilterN::reset(self);
    }

    fn is_initialized(&self) -> bool {
        OneEuroFilterN::is_initialized(self)
    }
}
