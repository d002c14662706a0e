//! Lagged views of trial sequences for serial-dependence analysis.
//!
//! Negative lags look back (`nb = -1` is the previous trial), positive lags
//! look forward. Outputs keep the input length; slots without a lagged
//! counterpart are zero-filled so trial indices stay aligned across arrays.

use crate::error::LagError;
use crate::float_trait::Float;
use crate::wrap::WrapMode;

use ndarray::{Array1, ArrayBase, Data, Ix1};

fn check_lag(nb: isize, len: usize) -> Result<usize, LagError> {
    if nb == 0 {
        return Err(LagError::ZeroLag);
    }
    if nb > 1 {
        tracing::warn!(
            nb,
            "positive lag looks at future trials; past trials use a negative lag"
        );
    }
    let k = nb.unsigned_abs();
    if k >= len {
        tracing::warn!(nb, len, "lag magnitude reaches past the whole sequence");
    }
    Ok(k)
}

/// Values of the trial `nb` steps away, aligned with the current trial.
///
/// `lagged(-1, v)[i]` is `v[i - 1]`; slots with no such trial are zero.
pub fn lagged<T, S>(nb: isize, vals: &ArrayBase<S, Ix1>) -> Result<Array1<T>, LagError>
where
    T: Float,
    S: Data<Elem = T>,
{
    let k = check_lag(nb, vals.len())?;
    let mut out = Array1::zeros(vals.len());
    if k >= vals.len() {
        return Ok(out);
    }
    if nb < 0 {
        for i in k..vals.len() {
            out[i] = vals[i - k];
        }
    } else {
        for i in 0..vals.len() - k {
            out[i] = vals[i + k];
        }
    }
    Ok(out)
}

/// Wrapped difference between the current trial and the trial `nb` steps away.
///
/// For `nb < 0` this is current minus past, `v[i] - v[i - k]`; for `nb > 0`
/// it is future minus current, `v[i + k] - v[i]`. Differences pass through
/// `wrap`, so angular variables stay within a half turn.
pub fn lagged_diff<T, S>(
    nb: isize,
    vals: &ArrayBase<S, Ix1>,
    wrap: WrapMode,
) -> Result<Array1<T>, LagError>
where
    T: Float,
    S: Data<Elem = T>,
{
    let k = check_lag(nb, vals.len())?;
    let mut out = Array1::zeros(vals.len());
    if k >= vals.len() {
        return Ok(out);
    }
    if nb < 0 {
        for i in k..vals.len() {
            out[i] = wrap.apply(vals[i] - vals[i - k]);
        }
    } else {
        for i in 0..vals.len() - k {
            out[i] = wrap.apply(vals[i + k] - vals[i]);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use std::f64::consts::PI;

    #[test]
    fn one_back_difference() {
        let v = array![10.0_f64, 20.0, 30.0, 40.0];
        let d = lagged_diff(-1, &v, WrapMode::None).unwrap();
        assert_eq!(d, array![0.0, 10.0, 10.0, 10.0]);
    }

    #[test]
    fn one_forward_values() {
        let v = array![10.0_f64, 20.0, 30.0, 40.0];
        let l = lagged(1, &v).unwrap();
        assert_eq!(l, array![20.0, 30.0, 40.0, 0.0]);
    }

    #[test]
    fn two_back_values() {
        let v = array![10.0_f64, 20.0, 30.0, 40.0];
        let l = lagged(-2, &v).unwrap();
        assert_eq!(l, array![0.0, 0.0, 10.0, 20.0]);
    }

    #[test]
    fn differences_wrap_in_radians() {
        let v = array![-3.0_f64, 3.0];
        let d = lagged_diff(-1, &v, WrapMode::Radians).unwrap();
        approx::assert_abs_diff_eq!(d[1], 6.0 - 2.0 * PI, epsilon = 1e-12);
    }

    #[test]
    fn zero_lag_is_an_error() {
        let v = array![1.0_f64, 2.0];
        assert_eq!(lagged(0, &v).unwrap_err(), LagError::ZeroLag);
        assert_eq!(
            lagged_diff(0, &v, WrapMode::None).unwrap_err(),
            LagError::ZeroLag
        );
    }

    #[test]
    fn lag_past_the_sequence_yields_zeros() {
        let v = array![1.0_f64, 2.0, 3.0];
        assert_eq!(lagged(-5, &v).unwrap(), array![0.0, 0.0, 0.0]);
        assert_eq!(
            lagged_diff(5, &v, WrapMode::Radians).unwrap(),
            array![0.0, 0.0, 0.0]
        );
    }
}
