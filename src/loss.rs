//! Scalar objectives for fitting bias models to trial data.
//!
//! Every loss wraps residuals into (−π, π] before squaring, so observations a
//! full turn away from the prediction cost nothing. The structs here only
//! score parameter vectors; minimization is left to an external optimizer
//! driving [ObjectiveTrait::evaluate].

use crate::array_stats::trimmed_mean;
use crate::error::{LossError, ModelError};
use crate::float_trait::Float;
use crate::models::BiasModelTrait;
use crate::wrap::wrap_angle_radians;

use ndarray::{Array1, ArrayBase, Data, Dimension, Ix1, s};
use serde::{Deserialize, Serialize};

/// Scores a parameter vector against observed data
pub trait ObjectiveTrait<T, D>
where
    T: Float,
    D: Dimension,
{
    /// Lower is better; all implementations here return nonnegative values.
    fn evaluate<Sp, Sx, Sy>(
        &self,
        params: &ArrayBase<Sp, Ix1>,
        x: &ArrayBase<Sx, D>,
        y: &ArrayBase<Sy, Ix1>,
    ) -> Result<T, LossError>
    where
        Sp: Data<Elem = T>,
        Sx: Data<Elem = T>,
        Sy: Data<Elem = T>;
}

/// Wrapped residuals y − predicted − offset, reusing the prediction buffer.
fn wrapped_residuals<T, Sy>(
    mut predicted: Array1<T>,
    y: &ArrayBase<Sy, Ix1>,
    offset: T,
) -> Result<Array1<T>, LossError>
where
    T: Float,
    Sy: Data<Elem = T>,
{
    if predicted.len() != y.len() {
        return Err(ModelError::DataLengthMismatch {
            x: predicted.len(),
            y: y.len(),
        }
        .into());
    }
    predicted.zip_mut_with(y, |pi, &yi| *pi = wrap_angle_radians(yi - *pi - offset));
    Ok(predicted)
}

fn root_mean_square<T: Float>(residuals: &Array1<T>) -> T {
    let ss: T = residuals.iter().map(|&r| r * r).sum();
    (ss / T::from_usize(residuals.len())).sqrt()
}

/// Root-mean-square of wrapped residuals
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Rss<M> {
    model: M,
}

impl<M> Rss<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &M {
        &self.model
    }
}

impl<T, M, D> ObjectiveTrait<T, D> for Rss<M>
where
    T: Float,
    M: BiasModelTrait<T, Dim = D>,
    D: Dimension,
{
    fn evaluate<Sp, Sx, Sy>(
        &self,
        params: &ArrayBase<Sp, Ix1>,
        x: &ArrayBase<Sx, D>,
        y: &ArrayBase<Sy, Ix1>,
    ) -> Result<T, LossError>
    where
        Sp: Data<Elem = T>,
        Sx: Data<Elem = T>,
        Sy: Data<Elem = T>,
    {
        let residuals = wrapped_residuals(self.model.eval(params, x)?, y, T::zero())?;
        Ok(root_mean_square(&residuals))
    }
}

/// [Rss] over squared residuals with the most extreme values cut from both
/// tails, for data with occasional off-task trials
///
/// `trim_fraction` is the total fraction removed, split evenly between the
/// tails; each tail loses floor(n · trim_fraction / 2) values.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TrimmedRss<M> {
    model: M,
    trim_fraction: f64,
}

impl<M> TrimmedRss<M> {
    pub const DEFAULT_TRIM_FRACTION: f64 = 0.05;

    pub fn new(model: M) -> Self {
        Self {
            model,
            trim_fraction: Self::DEFAULT_TRIM_FRACTION,
        }
    }

    pub fn with_trim_fraction(model: M, trim_fraction: f64) -> Self {
        assert!(
            (0.0..1.0).contains(&trim_fraction),
            "trim_fraction must be in [0, 1)"
        );
        Self {
            model,
            trim_fraction,
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }
}

impl<T, M, D> ObjectiveTrait<T, D> for TrimmedRss<M>
where
    T: Float,
    M: BiasModelTrait<T, Dim = D>,
    D: Dimension,
{
    fn evaluate<Sp, Sx, Sy>(
        &self,
        params: &ArrayBase<Sp, Ix1>,
        x: &ArrayBase<Sx, D>,
        y: &ArrayBase<Sy, Ix1>,
    ) -> Result<T, LossError>
    where
        Sp: Data<Elem = T>,
        Sx: Data<Elem = T>,
        Sy: Data<Elem = T>,
    {
        let residuals = wrapped_residuals(self.model.eval(params, x)?, y, T::zero())?;
        let squared: Vec<T> = residuals.iter().map(|&r| r * r).collect();
        let cut_fraction = self.trim_fraction / 2.0;
        trimmed_mean(&squared, cut_fraction)
            .map(|m| m.sqrt())
            .ok_or(LossError::DegenerateTrim {
                len: squared.len(),
                cut: (squared.len() as f64 * cut_fraction) as usize,
            })
    }
}

/// [Rss] with the last parameter acting as a constant response offset added
/// outside the model, for observers with a global clockwise/counterclockwise
/// tendency
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BiasRss<M> {
    model: M,
}

impl<M> BiasRss<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &M {
        &self.model
    }
}

impl<T, M, D> ObjectiveTrait<T, D> for BiasRss<M>
where
    T: Float,
    M: BiasModelTrait<T, Dim = D>,
    D: Dimension,
{
    fn evaluate<Sp, Sx, Sy>(
        &self,
        params: &ArrayBase<Sp, Ix1>,
        x: &ArrayBase<Sx, D>,
        y: &ArrayBase<Sy, Ix1>,
    ) -> Result<T, LossError>
    where
        Sp: Data<Elem = T>,
        Sx: Data<Elem = T>,
        Sy: Data<Elem = T>,
    {
        let n = params.len();
        if n == 0 {
            return Err(LossError::MissingBiasParameter);
        }
        let predicted = self.model.eval(&params.slice(s![..n - 1]), x)?;
        let residuals = wrapped_residuals(predicted, y, params[n - 1])?;
        Ok(root_mean_square(&residuals))
    }
}

/// Exponent applied to penalized parameters in [RegularizedRss]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PenaltyOrder {
    /// Sum of absolute values (lasso-like, drives amplitudes to zero)
    L1,
    /// Sum of squares (ridge-like, shrinks amplitudes smoothly)
    #[default]
    L2,
}

impl PenaltyOrder {
    #[inline]
    fn apply<T: Float>(self, p: T) -> T {
        match self {
            Self::L1 => p.abs(),
            Self::L2 => p * p,
        }
    }
}

/// [BiasRss] (or plain [Rss] when the bias slot is disabled) plus
/// λ · Σ |pᵢ|^order over the penalized parameters
///
/// By default every parameter except the bias slot is penalized; an explicit
/// index list overrides that, with out-of-range indices ignored. At λ = 0 the
/// value equals [BiasRss] exactly.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RegularizedRss<M> {
    model: M,
    lambda: f64,
    order: PenaltyOrder,
    penalized: Option<Vec<usize>>,
    include_bias: bool,
}

impl<M> RegularizedRss<M> {
    pub fn new(model: M, lambda: f64) -> Self {
        assert!(lambda >= 0.0, "penalty weight must be nonnegative");
        Self {
            model,
            lambda,
            order: PenaltyOrder::default(),
            penalized: None,
            include_bias: true,
        }
    }

    pub fn with_order(mut self, order: PenaltyOrder) -> Self {
        self.order = order;
        self
    }

    /// Penalize exactly these parameter-vector indices.
    pub fn with_penalized(mut self, indices: Vec<usize>) -> Self {
        self.penalized = Some(indices);
        self
    }

    /// Treat every parameter as belonging to the model; no offset slot.
    pub fn without_bias(mut self) -> Self {
        self.include_bias = false;
        self
    }

    pub fn model(&self) -> &M {
        &self.model
    }
}

impl<T, M, D> ObjectiveTrait<T, D> for RegularizedRss<M>
where
    T: Float,
    M: BiasModelTrait<T, Dim = D>,
    D: Dimension,
{
    fn evaluate<Sp, Sx, Sy>(
        &self,
        params: &ArrayBase<Sp, Ix1>,
        x: &ArrayBase<Sx, D>,
        y: &ArrayBase<Sy, Ix1>,
    ) -> Result<T, LossError>
    where
        Sp: Data<Elem = T>,
        Sx: Data<Elem = T>,
        Sy: Data<Elem = T>,
    {
        let (model_len, offset) = if self.include_bias {
            if params.is_empty() {
                return Err(LossError::MissingBiasParameter);
            }
            (params.len() - 1, params[params.len() - 1])
        } else {
            (params.len(), T::zero())
        };
        let predicted = self.model.eval(&params.slice(s![..model_len]), x)?;
        let residuals = wrapped_residuals(predicted, y, offset)?;
        let error = root_mean_square(&residuals);

        let penalty: T = match &self.penalized {
            Some(indices) => indices
                .iter()
                .filter(|&&i| i < params.len())
                .map(|&i| self.order.apply(params[i]))
                .sum(),
            None => params
                .slice(s![..model_len])
                .iter()
                .map(|&p| self.order.apply(p))
                .sum(),
        };
        Ok(error + T::approx_from_f64(self.lambda) * penalty)
    }
}
