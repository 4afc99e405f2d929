use crate::decompose::DecomposedTransform;
use crate::float_types::Real;
use crate::interpolate::lerp;
use crate::quaternion;
use crate::vector::Skew;
use crate::wasm::{Matrix4Js, to_js_error};
use nalgebra::{Quaternion, UnitQuaternion, Vector3, Vector4};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct DecomposedJs {
    pub(crate) inner: DecomposedTransform,
}

fn to_f64_vec<'a>(values: impl IntoIterator<Item = &'a Real>) -> Vec<f64> {
    values.into_iter().map(|v| *v as f64).collect()
}

#[wasm_bindgen]
impl DecomposedJs {
    /// The components of the identity transform.
    #[wasm_bindgen(constructor)]
    pub fn new() -> DecomposedJs {
        DecomposedTransform::default().into()
    }

    /// `[x, y, z]`
    #[wasm_bindgen(getter)]
    pub fn translation(&self) -> Vec<f64> {
        to_f64_vec(self.inner.translation.iter())
    }

    /// `[x, y, z]`
    #[wasm_bindgen(getter)]
    pub fn scale(&self) -> Vec<f64> {
        to_f64_vec(self.inner.scale.iter())
    }

    /// Quaternion as `[x, y, z, w]`.
    #[wasm_bindgen(getter)]
    pub fn rotation(&self) -> Vec<f64> {
        to_f64_vec(self.inner.rotation.coords.iter())
    }

    /// XYZ Euler angles in radians.
    #[wasm_bindgen(getter, js_name = eulerAngles)]
    pub fn euler_angles(&self) -> Vec<f64> {
        to_f64_vec(self.inner.euler_angles().iter())
    }

    /// `[xy, xz, yz]`
    #[wasm_bindgen(getter)]
    pub fn skew(&self) -> Vec<f64> {
        to_f64_vec(self.inner.skew.to_array().iter())
    }

    /// `[p1, p2, p3, p4]`
    #[wasm_bindgen(getter)]
    pub fn perspective(&self) -> Vec<f64> {
        to_f64_vec(self.inner.perspective.iter())
    }

    #[wasm_bindgen(js_name = setTranslation)]
    pub fn set_translation(&mut self, x: f64, y: f64, z: f64) {
        self.inner.translation = Vector3::new(x as Real, y as Real, z as Real);
    }

    #[wasm_bindgen(js_name = setScale)]
    pub fn set_scale(&mut self, x: f64, y: f64, z: f64) {
        self.inner.scale = Vector3::new(x as Real, y as Real, z as Real);
    }

    /// Sets the rotation from quaternion coordinates; they are normalized.
    #[wasm_bindgen(js_name = setRotation)]
    pub fn set_rotation(&mut self, x: f64, y: f64, z: f64, w: f64) {
        self.inner.rotation = UnitQuaternion::new_normalize(Quaternion::new(
            w as Real, x as Real, y as Real, z as Real,
        ));
    }

    #[wasm_bindgen(js_name = setAngleAxis)]
    pub fn set_angle_axis(&mut self, angle: f64, x: f64, y: f64, z: f64) -> Result<(), JsValue> {
        self.inner.rotation = quaternion::from_angle_axis(
            angle as Real,
            Vector3::new(x as Real, y as Real, z as Real),
        )
        .map_err(to_js_error)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = setEulerAngles)]
    pub fn set_euler_angles(&mut self, x: f64, y: f64, z: f64) {
        self.inner
            .set_euler_angles(Vector3::new(x as Real, y as Real, z as Real));
    }

    #[wasm_bindgen(js_name = setSkew)]
    pub fn set_skew(&mut self, xy: f64, xz: f64, yz: f64) {
        self.inner.skew = Skew::new(xy as Real, xz as Real, yz as Real);
    }

    #[wasm_bindgen(js_name = setPerspective)]
    pub fn set_perspective(&mut self, p1: f64, p2: f64, p3: f64, p4: f64) {
        self.inner.perspective = Vector4::new(p1 as Real, p2 as Real, p3 as Real, p4 as Real);
    }

    pub fn recompose(&self) -> Matrix4Js {
        self.inner.recompose().into()
    }

    pub fn lerp(&self, to: &DecomposedJs, fraction: f64) -> DecomposedJs {
        lerp(&self.inner, &to.inner, fraction as Real).into()
    }
}

impl Default for DecomposedJs {
    fn default() -> Self {
        DecomposedJs::new()
    }
}

// Rust-only conversions
impl From<DecomposedTransform> for DecomposedJs {
    fn from(d: DecomposedTransform) -> Self {
        DecomposedJs { inner: d }
    }
}

impl From<&DecomposedJs> for DecomposedTransform {
    fn from(d: &DecomposedJs) -> Self {
        d.inner
    }
}
