//! Single-shift wrapping of angular differences into the ±half-turn range.
//!
//! All functions shift an element by exactly one full turn when its magnitude
//! exceeds the half-turn, so they are idempotent but only correct for inputs
//! within 1.5 turns of zero. Inputs further out stay wrong; this matches the
//! established analysis convention and is kept on purpose.

use crate::float_trait::Float;

use ndarray::{Array, ArrayBase, DataMut, Dimension};
use serde::{Deserialize, Serialize};

/// Wrap a single radian-valued difference into (−π, π].
///
/// Values exactly at ±π are left untouched (strict inequality).
#[inline]
pub fn wrap_angle_radians<T: Float>(d: T) -> T {
    if d.abs() > T::PI() {
        d - T::two() * T::PI() * d.signum()
    } else {
        d
    }
}

/// Wrap a single degree-valued difference into (−180, 180].
#[inline]
pub fn wrap_angle_degrees<T: Float>(d: T) -> T {
    let half_turn = T::from_usize(180);
    if d.abs() > half_turn {
        d - T::two() * half_turn * d.signum()
    } else {
        d
    }
}

/// Wrap every element of a radian-valued array in place.
pub fn wrap_radians_inplace<T, S, D>(d: &mut ArrayBase<S, D>)
where
    T: Float,
    S: DataMut<Elem = T>,
    D: Dimension,
{
    d.mapv_inplace(wrap_angle_radians);
}

/// Wrap every element of a degree-valued array in place.
pub fn wrap_degrees_inplace<T, S, D>(d: &mut ArrayBase<S, D>)
where
    T: Float,
    S: DataMut<Elem = T>,
    D: Dimension,
{
    d.mapv_inplace(wrap_angle_degrees);
}

/// Owned-value convenience for [wrap_radians_inplace].
pub fn wrap_radians<T, D>(mut d: Array<T, D>) -> Array<T, D>
where
    T: Float,
    D: Dimension,
{
    wrap_radians_inplace(&mut d);
    d
}

/// Owned-value convenience for [wrap_degrees_inplace].
pub fn wrap_degrees<T, D>(mut d: Array<T, D>) -> Array<T, D>
where
    T: Float,
    D: Dimension,
{
    wrap_degrees_inplace(&mut d);
    d
}

/// Wrapping applied by the lag helpers to difference arrays
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WrapMode {
    #[default]
    Radians,
    Degrees,
    /// Leave differences as they are (linear variables)
    None,
}

impl WrapMode {
    #[inline]
    pub(crate) fn apply<T: Float>(self, d: T) -> T {
        match self {
            Self::Radians => wrap_angle_radians(d),
            Self::Degrees => wrap_angle_degrees(d),
            Self::None => d,
        }
    }
}
