//! Convenient imports for typical analysis sessions
//!
//! ```
//! use circbias::prelude::*;
//! ```

pub use crate::band::{BandKind, DegreeAxis, MeanBand, sem};
pub use crate::binning::{BinStatistic, binned_statistic};
pub use crate::circular::{circular_mean, circular_sd, circular_variance, mean_resultant_vector};
pub use crate::float_trait::Float;
pub use crate::loss::{
    BiasRss, ObjectiveTrait, PenaltyOrder, RegularizedRss, Rss, TrimmedRss,
};
pub use crate::models::*;
pub use crate::nback::{lagged, lagged_diff};
pub use crate::wrap::{WrapMode, wrap_degrees, wrap_radians};

pub use ndarray::{Array1, Array2, Axis};
