//! Parametric bias-curve models.
//!
//! Every model maps an array of stimulus offsets to predicted bias values
//! under a fixed parameter-vector convention documented on the model struct.
//! Single-component models consume a 1-d offset array; [MultiComponent] sums
//! several independently parameterized copies of an inner model over a 2-d
//! stimulus array of shape (components, trials).

mod dog;
pub use dog::Dog;

mod fourier;
pub use fourier::{CosV1, CosV2, Sine5, SineCosV1, SineCosV2};

mod many;
pub use many::{ManyDog, ManyDvm, MultiComponent};

mod von_mises;
pub use von_mises::{ScaledDvm, von_mises_derivative};

use crate::error::ModelError;
use crate::float_trait::Float;

use enum_dispatch::enum_dispatch;
use ndarray::{Array1, ArrayBase, Data, Dimension, Ix1};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Static facts about a model
#[enum_dispatch]
pub trait ModelInfoTrait {
    /// Short name used in error messages
    fn name(&self) -> &'static str;

    /// Parameter-vector length; None for series models of arbitrary length
    fn param_count(&self) -> Option<usize>;
}

/// Maps stimulus offsets to predicted bias values
pub trait BiasModelTrait<T: Float>: ModelInfoTrait + Clone + Debug + Send {
    /// Ix1 for single-component models, Ix2 for multi-component sums
    type Dim: Dimension;

    fn eval<Sp, Sx>(
        &self,
        params: &ArrayBase<Sp, Ix1>,
        x: &ArrayBase<Sx, Self::Dim>,
    ) -> Result<Array1<T>, ModelError>
    where
        Sp: Data<Elem = T>,
        Sx: Data<Elem = T>;
}

/// All single-component models as variants of this enum
///
/// Consider to import [BiasModelTrait] as well
#[enum_dispatch(ModelInfoTrait)]
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[non_exhaustive]
pub enum BiasModel {
    Dog,
    ScaledDvm,
    SineCosV1,
    SineCosV2,
    CosV1,
    CosV2,
    Sine5,
}

impl<T> BiasModelTrait<T> for BiasModel
where
    T: Float,
{
    type Dim = Ix1;

    fn eval<Sp, Sx>(
        &self,
        params: &ArrayBase<Sp, Ix1>,
        x: &ArrayBase<Sx, Ix1>,
    ) -> Result<Array1<T>, ModelError>
    where
        Sp: Data<Elem = T>,
        Sx: Data<Elem = T>,
    {
        match self {
            Self::Dog(m) => m.eval(params, x),
            Self::ScaledDvm(m) => m.eval(params, x),
            Self::SineCosV1(m) => m.eval(params, x),
            Self::SineCosV2(m) => m.eval(params, x),
            Self::CosV1(m) => m.eval(params, x),
            Self::CosV2(m) => m.eval(params, x),
            Self::Sine5(m) => m.eval(params, x),
        }
    }
}

/// Copy a fixed-arity parameter vector out of a runtime slice, failing loudly
/// on a length mismatch.
pub(crate) fn fixed_params<T, S, const N: usize>(
    name: &'static str,
    params: &ArrayBase<S, Ix1>,
) -> Result<[T; N], ModelError>
where
    T: Float,
    S: Data<Elem = T>,
{
    if params.len() != N {
        return Err(ModelError::WrongParameterCount {
            model: name,
            expected: N,
            actual: params.len(),
        });
    }
    let mut out = [T::zero(); N];
    for (slot, &p) in out.iter_mut().zip(params.iter()) {
        *slot = p;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    model_serde_test!(model_enum_serde, BiasModel, CosV1::new(1).into());

    #[test]
    fn enum_eval_matches_inner_model() {
        let params = array![1.5_f64, 0.02];
        let x = array![-40.0, -10.0, 0.0, 10.0, 40.0];
        let direct = Dog::new().eval(&params, &x).unwrap();
        let model: BiasModel = Dog::new().into();
        let dispatched = model.eval(&params, &x).unwrap();
        assert_eq!(direct, dispatched);
        assert_eq!(model.name(), "DoG");
        assert_eq!(model.param_count(), Some(2));
    }

    #[test]
    fn wrong_parameter_count_is_loud() {
        let model: BiasModel = ScaledDvm::new().into();
        let err = model
            .eval(&array![1.0_f64], &array![0.0, 1.0])
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::WrongParameterCount {
                model: "Sd_vm",
                expected: 2,
                actual: 1
            }
        );
    }
}
