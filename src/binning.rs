//! Windowed aggregation of a response variable over circular bins.
//!
//! Bins are given as an ordered cycle of center values on the grouping
//! variable; a window spans `overlap` bins to either side, inclusively, and
//! wraps around the cycle near its ends. Window bounds are compared against
//! the grouping variable itself, so bin centers must use its units.

use crate::array_stats;
use crate::circular::{circular_mean, circular_sd, circular_variance};
use crate::error::BinningError;
use crate::float_trait::Float;

use ndarray::{Array1, ArrayBase, Axis, Data, Ix1, aview1};
use serde::{Deserialize, Serialize};

/// Per-bin summary applied to the windowed values
///
/// The circular variants treat values as radians on the full circle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinStatistic {
    Mean,
    /// Population standard deviation (ddof = 0)
    StandardDeviation,
    Median,
    CircularMean,
    CircularVariance,
    CircularSd,
    /// Number of values falling in the window
    Count,
}

impl BinStatistic {
    fn apply<T: Float>(self, window: &[T]) -> T {
        if window.is_empty() {
            return T::nan();
        }
        match self {
            Self::Mean => array_stats::mean(window),
            Self::StandardDeviation => array_stats::standard_deviation(window),
            Self::Median => array_stats::median(window),
            Self::CircularMean => circular_mean(&aview1(window), Axis(0)).into_scalar(),
            Self::CircularVariance => circular_variance(&aview1(window), Axis(0)).into_scalar(),
            Self::CircularSd => circular_sd(&aview1(window), Axis(0)).into_scalar(),
            Self::Count => T::from_usize(window.len()),
        }
    }
}

/// Per-bin statistic of `values` grouped by `grouping` over sliding windows.
///
/// Bin `i` collects values whose grouping entry lies inclusively between
/// `bins[i - overlap]` and `bins[i + overlap]`, indices taken modulo the bin
/// count; near either end the window is the union of the two half-ranges
/// across the wrap. Empty bins yield NaN.
pub fn binned_statistic<T, Sb, Sg, Sv>(
    bins: &ArrayBase<Sb, Ix1>,
    overlap: usize,
    grouping: &ArrayBase<Sg, Ix1>,
    values: &ArrayBase<Sv, Ix1>,
    stat: BinStatistic,
) -> Result<Array1<T>, BinningError>
where
    T: Float,
    Sb: Data<Elem = T>,
    Sg: Data<Elem = T>,
    Sv: Data<Elem = T>,
{
    let n_bins = bins.len();
    if 2 * overlap >= n_bins {
        return Err(BinningError::OverlapTooLarge { overlap, n_bins });
    }
    if grouping.len() != values.len() {
        return Err(BinningError::LengthMismatch {
            grouping: grouping.len(),
            values: values.len(),
        });
    }

    let mut out = Array1::zeros(n_bins);
    for i in 0..n_bins {
        let lo = bins[(i + n_bins - overlap) % n_bins];
        let hi = bins[(i + overlap) % n_bins];
        let wraps = i < overlap || i + overlap >= n_bins;
        let window: Vec<T> = grouping
            .iter()
            .zip(values.iter())
            .filter(|&(&g, _)| {
                if wraps {
                    g >= lo || g <= hi
                } else {
                    g >= lo && g <= hi
                }
            })
            .map(|(_, &v)| v)
            .collect();
        out[i] = stat.apply(&window);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use std::f64::consts::PI;

    #[test]
    fn plain_bins_take_exact_members() {
        let bins = array![0.0_f64, 1.0, 2.0];
        let grouping = array![0.0_f64, 0.0, 1.0, 2.0, 2.0];
        let values = array![1.0_f64, 2.0, 3.0, 4.0, 6.0];
        let out = binned_statistic(&bins, 0, &grouping, &values, BinStatistic::Mean).unwrap();
        assert_eq!(out, array![1.5, 3.0, 5.0]);
    }

    #[test]
    fn overlapping_window_spans_neighbors() {
        let bins = array![0.0_f64, 1.0, 2.0, 3.0, 4.0];
        let grouping = array![0.0_f64, 1.0, 2.0, 3.0, 4.0];
        let values = array![10.0_f64, 20.0, 30.0, 40.0, 50.0];
        let out = binned_statistic(&bins, 1, &grouping, &values, BinStatistic::Mean).unwrap();
        // middle bin covers grouping values 1..=3
        approx::assert_abs_diff_eq!(out[2], 30.0, epsilon = 1e-12);
        approx::assert_abs_diff_eq!(out[1], 20.0, epsilon = 1e-12);
    }

    #[test]
    fn edge_windows_wrap_around_the_cycle() {
        let bins = array![0.0_f64, 1.0, 2.0, 3.0];
        let grouping = array![0.0_f64, 1.0, 2.0, 3.0];
        let values = array![10.0_f64, 20.0, 30.0, 40.0];
        let out = binned_statistic(&bins, 1, &grouping, &values, BinStatistic::Mean).unwrap();
        // first window: grouping >= 3 or <= 1
        approx::assert_abs_diff_eq!(out[0], (10.0 + 20.0 + 40.0) / 3.0, epsilon = 1e-12);
        // last window: grouping >= 2 or <= 0
        approx::assert_abs_diff_eq!(out[3], (10.0 + 30.0 + 40.0) / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn empty_bin_is_nan() {
        let bins = array![0.0_f64, 1.0, 5.0];
        let grouping = array![0.0_f64, 1.0];
        let values = array![2.0_f64, 4.0];
        let out = binned_statistic(&bins, 0, &grouping, &values, BinStatistic::Mean).unwrap();
        assert!(out[2].is_nan());
        assert_eq!(out[0], 2.0);
    }

    #[test]
    fn count_statistic() {
        let bins = array![0.0_f64, 1.0];
        let grouping = array![0.0_f64, 0.0, 0.0, 1.0];
        let values = array![9.0_f64, 9.0, 9.0, 9.0];
        let out = binned_statistic(&bins, 0, &grouping, &values, BinStatistic::Count).unwrap();
        assert_eq!(out, array![3.0, 1.0]);
    }

    #[test]
    fn circular_mean_respects_the_cut() {
        let bins = array![0.0_f64];
        let grouping = array![0.0_f64, 0.0];
        let values = array![PI - 0.1, -PI + 0.1];
        let out =
            binned_statistic(&bins, 0, &grouping, &values, BinStatistic::CircularMean).unwrap();
        approx::assert_abs_diff_eq!(out[0].abs(), PI, epsilon = 1e-9);
    }

    #[test]
    fn overlap_must_leave_distinct_bounds() {
        let bins = array![0.0_f64, 1.0, 2.0, 3.0];
        let err = binned_statistic(&bins, 2, &bins, &bins, BinStatistic::Mean).unwrap_err();
        assert_eq!(
            err,
            BinningError::OverlapTooLarge {
                overlap: 2,
                n_bins: 4
            }
        );
    }

    #[test]
    fn grouping_and_values_must_align() {
        let bins = array![0.0_f64, 1.0];
        let err = binned_statistic(
            &bins,
            0,
            &array![0.0_f64, 1.0, 2.0],
            &array![0.0_f64],
            BinStatistic::Mean,
        )
        .unwrap_err();
        assert_eq!(
            err,
            BinningError::LengthMismatch {
                grouping: 3,
                values: 1
            }
        );
    }
}
