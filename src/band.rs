//! Mean ± band summaries of replicated curves, ready for plotting.
//!
//! A [MeanBand] reduces a matrix of per-replicate curves (rows = replicates,
//! columns aligned with the x grid) to a mean curve with lower/upper band
//! offsets. NaN entries are skipped per column, so ragged designs where some
//! replicates miss some x positions are handled without masking.

use crate::array_stats::{nan_mean, nan_std_count, percentile};
use crate::error::BandError;
use crate::float_trait::Float;

use ndarray::{Array, Array1, Array2, ArrayBase, Axis, Data, Dimension, Ix1, Ix2, RemoveAxis};
use serde::{Deserialize, Serialize};

/// Standard error of the mean along `axis`, ignoring NaN entries in the
/// spread but dividing by the full axis length.
///
/// For a count-adjusted denominator use [MeanBand], which drops the missing
/// entries from the divisor too.
pub fn sem<T, S, D>(y: &ArrayBase<S, D>, axis: Axis) -> Array<T, D::Smaller>
where
    T: Float,
    S: Data<Elem = T>,
    D: Dimension + RemoveAxis,
{
    let sqrt_n = T::from_usize(y.len_of(axis)).sqrt();
    y.map_axis(axis, |lane| {
        let (sd, _) = nan_std_count(lane.iter().copied());
        sd / sqrt_n
    })
}

/// How the band half-widths around the mean curve are derived
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum BandKind {
    /// Standard error of the mean; `within_subject` removes per-replicate
    /// offsets (Cousineau-style row centering) before taking the spread
    Sem { within_subject: bool },
    /// Band edges at per-column percentiles of the replicate distribution
    Percentile { lower: f64, upper: f64 },
}

impl Default for BandKind {
    fn default() -> Self {
        Self::Sem {
            within_subject: false,
        }
    }
}

impl BandKind {
    /// The conventional 95% band, 2.5th to 97.5th percentile.
    pub fn percentile_95() -> Self {
        Self::Percentile {
            lower: 2.5,
            upper: 97.5,
        }
    }
}

/// Mean curve with lower/upper band offsets over an x grid
///
/// Offsets are stored relative to the mean; [MeanBand::lower_curve] and
/// [MeanBand::upper_curve] give the absolute band edges.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeanBand<T> {
    x: Array1<T>,
    mean: Array1<T>,
    lower_offset: Array1<T>,
    upper_offset: Array1<T>,
}

impl<T: Float> MeanBand<T> {
    /// Reduce replicate curves to a mean ± band summary.
    ///
    /// `y` rows are replicates and columns follow `x`; a matrix handed over
    /// transposed is repaired once, any other shape is a [BandError].
    pub fn new<Sx, Sy>(
        x: &ArrayBase<Sx, Ix1>,
        y: &ArrayBase<Sy, Ix2>,
        kind: BandKind,
    ) -> Result<Self, BandError>
    where
        Sx: Data<Elem = T>,
        Sy: Data<Elem = T>,
    {
        let y = if y.ncols() == x.len() {
            y.view()
        } else if y.nrows() == x.len() {
            tracing::info!(
                rows = y.nrows(),
                cols = y.ncols(),
                "sample matrix came in transposed, flipping it"
            );
            y.t()
        } else {
            return Err(BandError::ShapeMismatch {
                rows: y.nrows(),
                cols: y.ncols(),
                len_x: x.len(),
            });
        };
        if let BandKind::Percentile { lower, upper } = kind {
            if !(0.0..=100.0).contains(&lower) || !(0.0..=100.0).contains(&upper) || lower >= upper
            {
                return Err(BandError::InvalidPercentiles);
            }
        }
        let nan_count = y.iter().filter(|v| v.is_nan()).count();
        if nan_count > 0 {
            tracing::info!(nan_count, "skipping NaN samples per column");
        }

        let mean: Array1<T> = y.map_axis(Axis(0), |col| nan_mean(col.iter().copied()));

        let (lower_offset, upper_offset) = match kind {
            BandKind::Sem { within_subject } => {
                let spread_source: Array2<T> = if within_subject {
                    let mut centered = y.to_owned();
                    for mut row in centered.rows_mut() {
                        let row_mean = nan_mean(row.iter().copied());
                        row.mapv_inplace(|v| v - row_mean);
                    }
                    centered
                } else {
                    y.to_owned()
                };
                let sem: Array1<T> = spread_source.map_axis(Axis(0), |col| {
                    let (sd, count) = nan_std_count(col.iter().copied());
                    sd / T::from_usize(count).sqrt()
                });
                (sem.clone(), sem)
            }
            BandKind::Percentile { lower, upper } => {
                let edge = |q: f64| -> Array1<T> {
                    y.map_axis(Axis(0), |col| {
                        let col: Vec<T> = col.iter().copied().collect();
                        percentile(&col, q)
                    })
                };
                (&mean - &edge(lower), edge(upper) - &mean)
            }
        };

        Ok(Self {
            x: x.to_owned(),
            mean,
            lower_offset,
            upper_offset,
        })
    }

    pub fn x(&self) -> &Array1<T> {
        &self.x
    }

    pub fn mean(&self) -> &Array1<T> {
        &self.mean
    }

    /// Half-width below the mean, per x position.
    pub fn lower_offset(&self) -> &Array1<T> {
        &self.lower_offset
    }

    /// Half-width above the mean, per x position.
    pub fn upper_offset(&self) -> &Array1<T> {
        &self.upper_offset
    }

    /// Absolute lower band edge, mean − lower offset.
    pub fn lower_curve(&self) -> Array1<T> {
        &self.mean - &self.lower_offset
    }

    /// Absolute upper band edge, mean + upper offset.
    pub fn upper_curve(&self) -> Array1<T> {
        &self.mean + &self.upper_offset
    }
}

/// Axis limits and tick positions for degree-valued stimulus axes
///
/// Ticks are spaced 45° apart, or 90° once the limit exceeds 90°. A negative
/// limit gives a symmetric axis around zero, a positive one starts at zero.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DegreeAxis<T> {
    limits: (T, T),
    ticks: Vec<T>,
}

impl<T: Float> DegreeAxis<T> {
    pub fn from_limit(limit: T) -> Self {
        let ninety = T::from_usize(90);
        let spacing = if limit.abs() > ninety {
            ninety
        } else {
            ninety * T::half()
        };
        let (lo, hi) = if limit < T::zero() {
            (limit, -limit)
        } else {
            (T::zero(), limit)
        };
        let mut ticks = Vec::new();
        let mut t = lo;
        // inclusive upper bound with a tolerance for accumulated rounding
        while t <= hi + spacing * T::approx_from_f64(1e-9) {
            ticks.push(t);
            t += spacing;
        }
        Self {
            limits: (lo, hi),
            ticks,
        }
    }

    /// Symmetric axis spanning ±`half_range` degrees.
    pub fn symmetric(half_range: T) -> Self {
        Self::from_limit(-half_range.abs())
    }

    pub fn limits(&self) -> (T, T) {
        self.limits
    }

    pub fn ticks(&self) -> &[T] {
        &self.ticks
    }
}
