//! Circular descriptive statistics over radian-valued samples.
//!
//! Everything here reduces along a caller-chosen [Axis] and derives from the
//! mean resultant vector, so mean, variance and standard deviation stay
//! mutually consistent. Angles are assumed to span the full circle in radians;
//! axis-valued data (e.g. orientation on a half circle) must be doubled by the
//! caller first.

use crate::float_trait::Float;

use ndarray::{Array, ArrayBase, Axis, Data, Dimension, RemoveAxis};
use num_complex::Complex;

/// Mean resultant vector: the complex-plane centroid of unit vectors at each
/// sample angle, reduced along `axis`.
///
/// The magnitude encodes concentration (1 = no dispersion, 0 = uniform), the
/// phase encodes the mean direction. An empty axis yields NaN lanes.
pub fn mean_resultant_vector<T, S, D>(x: &ArrayBase<S, D>, axis: Axis) -> Array<Complex<T>, D::Smaller>
where
    T: Float,
    S: Data<Elem = T>,
    D: Dimension + RemoveAxis,
{
    x.map_axis(axis, |lane| {
        let n = T::from_usize(lane.len());
        let (re, im) = lane.iter().fold((T::zero(), T::zero()), |(re, im), &a| {
            (re + a.cos(), im + a.sin())
        });
        Complex::new(re / n, im / n)
    })
}

/// Circular mean direction along `axis`, in (−π, π].
pub fn circular_mean<T, S, D>(x: &ArrayBase<S, D>, axis: Axis) -> Array<T, D::Smaller>
where
    T: Float,
    S: Data<Elem = T>,
    D: Dimension + RemoveAxis,
{
    mean_resultant_vector(x, axis).mapv(|r| r.arg())
}

/// Circular variance along `axis`: 1 − |R|, in [0, 1].
pub fn circular_variance<T, S, D>(x: &ArrayBase<S, D>, axis: Axis) -> Array<T, D::Smaller>
where
    T: Float,
    S: Data<Elem = T>,
    D: Dimension + RemoveAxis,
{
    mean_resultant_vector(x, axis).mapv(|r| T::one() - r.norm())
}

/// Circular standard deviation along `axis`: sqrt(−2 ln |R|), in [0, ∞).
///
/// Diverges as the sample approaches the uniform distribution.
pub fn circular_sd<T, S, D>(x: &ArrayBase<S, D>, axis: Axis) -> Array<T, D::Smaller>
where
    T: Float,
    S: Data<Elem = T>,
    D: Dimension + RemoveAxis,
{
    mean_resultant_vector(x, axis).mapv(|r| (-T::two() * r.norm().ln()).sqrt())
}
