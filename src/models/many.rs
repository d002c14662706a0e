use crate::error::ModelError;
use crate::float_trait::Float;
use crate::models::{BiasModelTrait, Dog, ModelInfoTrait, ScaledDvm};

use macro_const::macro_const;
use ndarray::{Array1, ArrayBase, Axis, Data, Ix1, Ix2};
use serde::{Deserialize, Serialize};

macro_const! {
    const DOC: &str = r"
Sum of independently parameterized copies of a fixed-arity model

With an inner model of arity $k$ and a parameter vector of length $n k$,
component $i$ consumes the contiguous parameter block
$[i k, (i + 1) k)$ and row $i$ of the stimulus array of shape
$(n, \mathrm{trials})$. The number of blocks must equal the number of
stimulus rows; a mismatch is a configuration error and fails loudly.
";
}

#[doc = DOC!()]
#[derive(Clone, Copy, Default, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MultiComponent<M> {
    inner: M,
}

/// Sum of scaled von Mises derivatives, one per stimulus row
pub type ManyDvm = MultiComponent<ScaledDvm>;

/// Sum of Gaussian derivatives, one per stimulus row
pub type ManyDog = MultiComponent<Dog>;

impl<M> MultiComponent<M> {
    pub fn new(inner: M) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &M {
        &self.inner
    }

    pub const fn doc() -> &'static str {
        DOC
    }
}

impl<M> ModelInfoTrait for MultiComponent<M>
where
    M: ModelInfoTrait,
{
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    /// Total length depends on the stimulus row count, so it is not fixed
    fn param_count(&self) -> Option<usize> {
        None
    }
}

impl<T, M> BiasModelTrait<T> for MultiComponent<M>
where
    T: Float,
    M: BiasModelTrait<T, Dim = Ix1>,
{
    type Dim = Ix2;

    fn eval<Sp, Sx>(
        &self,
        params: &ArrayBase<Sp, Ix1>,
        x: &ArrayBase<Sx, Ix2>,
    ) -> Result<Array1<T>, ModelError>
    where
        Sp: Data<Elem = T>,
        Sx: Data<Elem = T>,
    {
        let arity = self
            .inner
            .param_count()
            .ok_or(ModelError::VariableArityComponent {
                model: self.inner.name(),
            })?;
        if params.len() % arity != 0 {
            return Err(ModelError::RaggedParameterBlocks {
                params: params.len(),
                arity,
            });
        }
        let components = params.len() / arity;
        if components != x.nrows() {
            return Err(ModelError::ComponentMismatch {
                components,
                rows: x.nrows(),
            });
        }

        let mut y = Array1::zeros(x.ncols());
        for (block, row) in params
            .axis_chunks_iter(Axis(0), arity)
            .zip(x.outer_iter())
        {
            y += &self.inner.eval(&block, &row)?;
        }
        Ok(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SineCosV1;
    use crate::tests::all_close;
    use ndarray::array;

    model_serde_test!(many_dvm_serde, ManyDvm, ManyDvm::default());

    #[test]
    fn single_component_reduces_to_inner_model() {
        let params = array![1.2_f64, 3.0];
        let x1 = array![-1.0, -0.3, 0.0, 0.4, 1.3];
        let x2 = x1.clone().insert_axis(Axis(0));

        let single = ScaledDvm::new().eval(&params, &x1).unwrap();
        let many = ManyDvm::default().eval(&params, &x2).unwrap();
        all_close(single.as_slice().unwrap(), many.as_slice().unwrap(), 1e-12);
    }

    #[test]
    fn components_sum_independently() {
        let x = array![[10.0_f64, 20.0], [-5.0, 40.0]];
        let params = array![1.0_f64, 0.05, 2.0, 0.02];
        let total = ManyDog::default().eval(&params, &x).unwrap();

        let dog = Dog::new();
        let first = dog.eval(&array![1.0, 0.05], &x.row(0).to_owned()).unwrap();
        let second = dog.eval(&array![2.0, 0.02], &x.row(1).to_owned()).unwrap();
        let desired: Vec<f64> = first
            .iter()
            .zip(second.iter())
            .map(|(a, b)| a + b)
            .collect();
        all_close(total.as_slice().unwrap(), &desired, 1e-12);
    }

    #[test]
    fn component_count_must_match_rows() {
        let x = array![[0.1_f64, 0.2], [0.3, 0.4], [0.5, 0.6]];
        let err = ManyDvm::default()
            .eval(&array![1.0_f64, 2.0, 3.0, 4.0], &x)
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::ComponentMismatch {
                components: 2,
                rows: 3
            }
        );
    }

    #[test]
    fn ragged_parameter_blocks_rejected() {
        let x = array![[0.1_f64, 0.2]];
        let err = ManyDvm::default()
            .eval(&array![1.0_f64, 2.0, 3.0], &x)
            .unwrap_err();
        assert_eq!(err, ModelError::RaggedParameterBlocks { params: 3, arity: 2 });
    }

    #[test]
    fn runtime_chosen_inner_model() {
        let x = array![[0.2_f64, -0.4, 1.0]];
        let params = array![1.0_f64, 2.0];
        let chosen: crate::models::BiasModel = ScaledDvm::new().into();
        let from_enum = MultiComponent::new(chosen).eval(&params, &x).unwrap();
        let direct = ManyDvm::default().eval(&params, &x).unwrap();
        assert_eq!(from_enum, direct);
    }

    #[test]
    fn variable_arity_inner_model_rejected() {
        let x = array![[0.1_f64, 0.2]];
        let err = MultiComponent::new(SineCosV1::new())
            .eval(&array![1.0_f64, 2.0], &x)
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::VariableArityComponent {
                model: "sine_cos_v1"
            }
        );
    }
}
