use crate::bessel::bessel_i0_scaled;
use crate::error::ModelError;
use crate::float_trait::Float;
use crate::models::{BiasModelTrait, ModelInfoTrait, fixed_params};

use macro_const::macro_const;
use ndarray::{Array1, ArrayBase, Data, Ix1};
use serde::{Deserialize, Serialize};

/// Unscaled derivative of the von Mises density at concentration `w`:
///
/// w sin(x) e^{w cos x} / I₀(w),
///
/// evaluated in exponent-cancelled form so it stays finite at large `w`.
pub fn von_mises_derivative<T: Float>(w: T, x: T) -> T {
    w * x.sin() * (w * x.cos() - w.abs()).exp() / bessel_i0_scaled(w)
}

macro_const! {
    const DOC: &str = r"
Scaled derivative of a von Mises density as a bias curve

The unscaled von Mises derivative is divided by its own value at the
analytically derived peak location

$$
x_\mathrm{peak} = 2 \arctan \sqrt{\sqrt{4 w^2 + 1} - 2 w}
$$

and multiplied by $a$, so the peak height equals $a$ exactly for every
concentration $w$. Stimulus offsets $x$ are in radians.

- Parameters: **[amplitude, concentration]**
";
}

#[doc = DOC!()]
#[derive(Clone, Copy, Default, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScaledDvm {}

impl ScaledDvm {
    pub fn new() -> Self {
        Self {}
    }

    pub const fn doc() -> &'static str {
        DOC
    }

    /// Location of the positive peak of the von Mises derivative.
    pub fn peak_location<T: Float>(w: T) -> T {
        T::two()
            * ((T::four() * w * w + T::one()).sqrt() - T::two() * w)
                .sqrt()
                .atan()
    }
}

impl ModelInfoTrait for ScaledDvm {
    fn name(&self) -> &'static str {
        "Sd_vm"
    }

    fn param_count(&self) -> Option<usize> {
        Some(2)
    }
}

impl<T> BiasModelTrait<T> for ScaledDvm
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
        let peak_value = von_mises_derivative(w, Self::peak_location(w));
        Ok(x.mapv(|xi| a * von_mises_derivative(w, xi) / peak_value))
    }
}
