//! Truncated sine/cosine series bias models.
//!
//! Each variant is a fixed, distinct index-to-frequency contract; they are not
//! interchangeable. All take stimulus offsets in radians and parameter vectors
//! of arbitrary length (except [Sine5]).

use crate::error::ModelError;
use crate::float_trait::Float;
use crate::models::{BiasModelTrait, ModelInfoTrait, fixed_params};

use macro_const::macro_const;
use ndarray::{Array1, ArrayBase, Data, Ix1};
use serde::{Deserialize, Serialize};

fn series_eval<T, Sp, Sx, F>(
    params: &ArrayBase<Sp, Ix1>,
    x: &ArrayBase<Sx, Ix1>,
    term: F,
) -> Array1<T>
where
    T: Float,
    Sp: Data<Elem = T>,
    Sx: Data<Elem = T>,
    F: Fn(usize, T) -> T,
{
    let mut y = Array1::zeros(x.len());
    for (j, &amp) in params.iter().enumerate() {
        y.zip_mut_with(x, |yi, &xi| *yi = *yi + amp * term(j, xi));
    }
    y
}

macro_const! {
    const SINE_COS_V1_DOC: &str = r"
Sine/cosine series without a constant term

Slot $2j$ weighs $\cos((j + 1) x)$, slot $2j + 1$ weighs $\sin((j + 1) x)$;
any parameter-vector length is accepted.
";
}

#[doc = SINE_COS_V1_DOC!()]
#[derive(Clone, Copy, Default, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SineCosV1 {}

impl SineCosV1 {
    pub fn new() -> Self {
        Self {}
    }

    pub const fn doc() -> &'static str {
        SINE_COS_V1_DOC
    }
}

impl ModelInfoTrait for SineCosV1 {
    fn name(&self) -> &'static str {
        "sine_cos_v1"
    }

    fn param_count(&self) -> Option<usize> {
        None
    }
}

impl<T> BiasModelTrait<T> for SineCosV1
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
        Ok(series_eval(params, x, |j, xi| {
            let freq = T::from_usize(j / 2 + 1);
            if j % 2 == 0 {
                (freq * xi).cos()
            } else {
                (freq * xi).sin()
            }
        }))
    }
}

macro_const! {
    const SINE_COS_V2_DOC: &str = r"
Sine/cosine series with a frequency-0 uniform term

Slot 0 is a constant offset ($\cos 0x$), even slot $2j$ weighs $\cos(j x)$,
odd slot $2j + 1$ weighs $\sin((j + 1) x)$:

```text
[c0 (uniform), sin(1x), cos(1x), sin(2x), cos(2x), ...]
```
";
}

#[doc = SINE_COS_V2_DOC!()]
#[derive(Clone, Copy, Default, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SineCosV2 {}

impl SineCosV2 {
    pub fn new() -> Self {
        Self {}
    }

    pub const fn doc() -> &'static str {
        SINE_COS_V2_DOC
    }
}

impl ModelInfoTrait for SineCosV2 {
    fn name(&self) -> &'static str {
        "sine_cos_v2"
    }

    fn param_count(&self) -> Option<usize> {
        None
    }
}

impl<T> BiasModelTrait<T> for SineCosV2
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
        Ok(series_eval(params, x, |j, xi| {
            if j % 2 == 0 {
                (T::from_usize(j / 2) * xi).cos()
            } else {
                (T::from_usize(j / 2 + 1) * xi).sin()
            }
        }))
    }
}

macro_const! {
    const COS_V1_DOC: &str = r"
Cosine-only series

Slot $j$ weighs $\cos((j + \mathrm{skip\_zero}) x)$; `skip_zero` shifts the
whole frequency ladder, e.g. `skip_zero = 1` drops the uniform term. Useful
for symmetric (variance-like) effects.
";
}

#[doc = COS_V1_DOC!()]
#[derive(Clone, Copy, Default, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CosV1 {
    pub skip_zero: u32,
}

impl CosV1 {
    pub fn new(skip_zero: u32) -> Self {
        Self { skip_zero }
    }

    pub const fn doc() -> &'static str {
        COS_V1_DOC
    }
}

impl ModelInfoTrait for CosV1 {
    fn name(&self) -> &'static str {
        "cos_v1"
    }

    fn param_count(&self) -> Option<usize> {
        None
    }
}

impl<T> BiasModelTrait<T> for CosV1
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
        let skip = self.skip_zero as usize;
        Ok(series_eval(params, x, |j, xi| {
            (T::from_usize(j + skip) * xi).cos()
        }))
    }
}

macro_const! {
    const COS_V2_DOC: &str = r"
Even-harmonic cosine series

Slot $j$ weighs $\cos(2 j x)$: a uniform term followed by even harmonics
only. Works well for modeling variance changes over the circle.
";
}

#[doc = COS_V2_DOC!()]
#[derive(Clone, Copy, Default, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CosV2 {}

impl CosV2 {
    pub fn new() -> Self {
        Self {}
    }

    pub const fn doc() -> &'static str {
        COS_V2_DOC
    }
}

impl ModelInfoTrait for CosV2 {
    fn name(&self) -> &'static str {
        "cos_v2"
    }

    fn param_count(&self) -> Option<usize> {
        None
    }
}

impl<T> BiasModelTrait<T> for CosV2
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
        Ok(series_eval(params, x, |j, xi| {
            (T::from_usize(2 * j) * xi).cos()
        }))
    }
}

macro_const! {
    const SINE5_DOC: &str = r"
Fixed five-parameter piecewise sine shape

$$
y = a_0 \sin(2x) [x < 0] + a_1 \sin(2x) [x > 0]
  + a_2 \sin(x) [x > 0] + a_3 \sin(x) [x < 0] + a_4 \sin(4x)
$$

Two half-range doubled sines, two half-range fundamental sines, and one
global fourth harmonic; $x = 0$ contributes only through the last term.

- Parameters: **[a0, a1, a2, a3, a4]**
";
}

#[doc = SINE5_DOC!()]
#[derive(Clone, Copy, Default, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sine5 {}

impl Sine5 {
    pub fn new() -> Self {
        Self {}
    }

    pub const fn doc() -> &'static str {
        SINE5_DOC
    }
}

impl ModelInfoTrait for Sine5 {
    fn name(&self) -> &'static str {
        "sine5"
    }

    fn param_count(&self) -> Option<usize> {
        Some(5)
    }
}

impl<T> BiasModelTrait<T> for Sine5
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
        let [a0, a1, a2, a3, a4] = fixed_params(self.name(), params)?;
        Ok(x.mapv(|xi| {
            let mut v = a4 * (T::four() * xi).sin();
            if xi < T::zero() {
                v = v + a0 * (T::two() * xi).sin() + a3 * xi.sin();
            } else if xi > T::zero() {
                v = v + a1 * (T::two() * xi).sin() + a2 * xi.sin();
            }
            v
        }))
    }
}
