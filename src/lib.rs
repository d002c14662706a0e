#![doc = include_str!("../README.md")]


pub mod array_stats;

mod band;
pub use band::{BandKind, DegreeAxis, MeanBand, sem};

mod bessel;
pub use bessel::{bessel_i0, bessel_i0_scaled};

mod binning;
pub use binning::{BinStatistic, binned_statistic};

mod circular;
pub use circular::{circular_mean, circular_sd, circular_variance, mean_resultant_vector};

mod error;
pub use error::{BandError, BinningError, LagError, LossError, ModelError};

mod float_trait;
pub use float_trait::Float;

mod loss;
pub use loss::{BiasRss, ObjectiveTrait, PenaltyOrder, RegularizedRss, Rss, TrimmedRss};

pub mod models;
pub use models::*;

mod nback;
pub use nback::{lagged, lagged_diff};

#[cfg(feature = "plot")]
pub mod plot;

pub mod prelude;

mod wrap;
pub use wrap::{
    WrapMode, wrap_angle_degrees, wrap_angle_radians, wrap_degrees, wrap_degrees_inplace,
    wrap_radians, wrap_radians_inplace,
};

pub use ndarray;
