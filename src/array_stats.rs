//! Simple slice statistics functions replacing an ndarray-stats dependency

use crate::float_trait::Float;

use itertools::Itertools;

/// Arithmetic mean; NaN for an empty slice.
pub fn mean<T: Float>(values: &[T]) -> T {
    let sum: T = values.iter().copied().sum();
    sum / T::from_usize(values.len())
}

/// Population standard deviation (ddof = 0); NaN for an empty slice.
pub fn standard_deviation<T: Float>(values: &[T]) -> T {
    let m = mean(values);
    let ss: T = values.iter().map(|&v| (v - m) * (v - m)).sum();
    (ss / T::from_usize(values.len())).sqrt()
}

/// Mean ignoring NaN entries; NaN when nothing is left.
pub fn nan_mean<T: Float>(values: impl IntoIterator<Item = T>) -> T {
    let (sum, count) = values
        .into_iter()
        .filter(|v| !v.is_nan())
        .fold((T::zero(), 0_usize), |(sum, count), v| (sum + v, count + 1));
    sum / T::from_usize(count)
}

/// Population standard deviation ignoring NaN entries, with the count of
/// non-NaN values used in the denominator.
pub fn nan_std_count<T: Float>(values: impl IntoIterator<Item = T> + Clone) -> (T, usize) {
    let m = nan_mean(values.clone());
    let (ss, count) = values
        .into_iter()
        .filter(|v| !v.is_nan())
        .fold((T::zero(), 0_usize), |(ss, count), v| {
            (ss + (v - m) * (v - m), count + 1)
        });
    ((ss / T::from_usize(count)).sqrt(), count)
}

/// Median with linear interpolation between the two middle values; NaN for an
/// empty slice.
pub fn median<T: Float>(values: &[T]) -> T {
    percentile(values, 50.0)
}

/// Percentile with linear interpolation (numpy convention), ignoring NaN
/// entries. `q` is in [0, 100]. NaN when nothing is left.
pub fn percentile<T: Float>(values: &[T], q: f64) -> T {
    let sorted: Vec<T> = values
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .sorted_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .collect();
    if sorted.is_empty() {
        return T::nan();
    }
    if sorted.len() == 1 {
        return sorted[0];
    }
    let rank = q / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = T::approx_from_f64(rank - lo as f64);
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Mean after removing the `cut_fraction` most extreme values from each tail,
/// cutting floor(n * cut_fraction) values per tail (scipy's trim_mean rule).
///
/// Returns None when trimming removes everything.
pub fn trimmed_mean<T: Float>(values: &[T], cut_fraction: f64) -> Option<T> {
    let n = values.len();
    let cut = (n as f64 * cut_fraction) as usize;
    if n == 0 || 2 * cut >= n {
        return None;
    }
    let sorted: Vec<T> = values
        .iter()
        .copied()
        .sorted_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .collect();
    Some(mean(&sorted[cut..n - cut]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_basic() {
        approx::assert_abs_diff_eq!(mean(&[1.0_f64, 2.0, 3.0]), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_standard_deviation_population() {
        // numpy: np.std([1, 2, 3, 4]) == sqrt(1.25)
        approx::assert_abs_diff_eq!(
            standard_deviation(&[1.0_f64, 2.0, 3.0, 4.0]),
            1.25_f64.sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_nan_mean_skips_nan() {
        let v = [1.0_f64, f64::NAN, 3.0];
        approx::assert_abs_diff_eq!(nan_mean(v.iter().copied()), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_nan_std_count() {
        let v = [1.0_f64, f64::NAN, 3.0, f64::NAN];
        let (s, n) = nan_std_count(v.iter().copied());
        assert_eq!(n, 2);
        approx::assert_abs_diff_eq!(s, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_median_odd_even() {
        approx::assert_abs_diff_eq!(median(&[3.0_f64, 1.0, 2.0]), 2.0, epsilon = 1e-12);
        approx::assert_abs_diff_eq!(median(&[4.0_f64, 1.0, 2.0, 3.0]), 2.5, epsilon = 1e-12);
    }

    #[test]
    fn test_percentile_interpolation() {
        // numpy: np.percentile([1, 2, 3, 4], 25) == 1.75
        approx::assert_abs_diff_eq!(
            percentile(&[1.0_f64, 2.0, 3.0, 4.0], 25.0),
            1.75,
            epsilon = 1e-12
        );
        approx::assert_abs_diff_eq!(
            percentile(&[1.0_f64, 2.0, 3.0, 4.0], 100.0),
            4.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_trimmed_mean_cuts_tails() {
        // scipy: trim_mean([1, 2, 3, 4, 100], 0.2) == 3.0
        let v = [1.0_f64, 2.0, 3.0, 4.0, 100.0];
        approx::assert_abs_diff_eq!(trimmed_mean(&v, 0.2).unwrap(), 3.0, epsilon = 1e-12);
        // no trimming at fraction below 1/n
        approx::assert_abs_diff_eq!(trimmed_mean(&v, 0.1).unwrap(), 22.0, epsilon = 1e-12);
    }

    #[test]
    fn test_trimmed_mean_degenerate() {
        assert!(trimmed_mean::<f64>(&[], 0.1).is_none());
        assert!(trimmed_mean(&[1.0_f64, 2.0], 0.5).is_none());
    }

    #[test]
    fn test_empty_is_nan() {
        assert!(mean::<f64>(&[]).is_nan());
        assert!(median::<f64>(&[]).is_nan());
    }
}
