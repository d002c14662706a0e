use ndarray::ScalarOperand;
use num_traits::{cast::NumCast, float::Float as NumFloat, float::FloatConst};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::{Debug, Display};
use std::iter::Sum;

/// Scalar type of all arrays and parameters in this crate, implemented for
/// [f32] and [f64]
pub trait Float:
    'static
    + NumFloat
    + FloatConst
    + num_traits::NumAssignOps
    + Sum
    + ScalarOperand
    + Debug
    + Display
    + Send
    + Sync
    + Serialize
    + DeserializeOwned
{
    #[inline]
    fn half() -> Self {
        Self::from(0.5).unwrap()
    }

    #[inline]
    fn two() -> Self {
        Self::from(2.0).unwrap()
    }

    #[inline]
    fn four() -> Self {
        Self::from(4.0).unwrap()
    }

    #[inline]
    fn from_usize(n: usize) -> Self {
        <Self as NumCast>::from(n).unwrap()
    }

    /// Lossy conversion from an [f64] configuration value
    #[inline]
    fn approx_from_f64(x: f64) -> Self {
        <Self as NumCast>::from(x).unwrap()
    }
}

impl Float for f32 {}
impl Float for f64 {}
