use crate::error::ModelError;
use crate::float_trait::Float;
use crate::models::{BiasModelTrait, ModelInfoTrait, fixed_params};

use macro_const::macro_const;
use ndarray::{Array1, ArrayBase, Data, Ix1};
use serde::{Deserialize, Serialize};

macro_const! {
    const DOC: &str = r"
First derivative of a Gaussian as a bias curve

$$
y = x \cdot a w k \cdot e^{-(w x)^2}, \qquad k = \sqrt{2}\, e^{1/2},
$$

where the fixed constant $k$ normalizes the curve so that its peak height
equals $a$. Stimulus offsets $x$ are in degrees.

- Parameters: **[amplitude, width]**
";
}

#[doc = DOC!()]
#[derive(Clone, Copy, Default, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dog {}

impl Dog {
    pub fn new() -> Self {
        Self {}
    }

    pub const fn doc() -> &'static str {
        DOC
    }
}

impl ModelInfoTrait for Dog {
    fn name(&self) -> &'static str {
        "DoG"
    }

    fn param_count(&self) -> Option<usize> {
        Some(2)
    }
}

impl<T> BiasModelTrait<T> for Dog
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
        let [a, w] = fixed_params(self.name(), params)?;
        let k = T::SQRT_2() * T::half().exp();
        Ok(x.mapv(|xi| xi * a * w * k * (-(w * xi).powi(2)).exp()))
    }
}
