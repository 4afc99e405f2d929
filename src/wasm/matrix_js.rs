use crate::decompose::{decompose, try_decompose};
use crate::float_types::Real;
use crate::interpolate::Interpolate;
use crate::wasm::{DecomposedJs, to_js_error};
use nalgebra::Matrix4;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct Matrix4Js {
    pub(crate) inner: Matrix4<Real>,
}

#[wasm_bindgen]
impl Matrix4Js {
    /// Entries in reading order: `mRC` is row `R`, column `C`.
    #[wasm_bindgen(constructor)]
    pub fn new(
        m00: f64,
        m01: f64,
        m02: f64,
        m03: f64,
        m10: f64,
        m11: f64,
        m12: f64,
        m13: f64,
        m20: f64,
        m21: f64,
        m22: f64,
        m23: f64,
        m30: f64,
        m31: f64,
        m32: f64,
        m33: f64,
    ) -> Matrix4Js {
        Matrix4Js {
            inner: Matrix4::new(
                m00 as Real,
                m01 as Real,
                m02 as Real,
                m03 as Real,
                m10 as Real,
                m11 as Real,
                m12 as Real,
                m13 as Real,
                m20 as Real,
                m21 as Real,
                m22 as Real,
                m23 as Real,
                m30 as Real,
                m31 as Real,
                m32 as Real,
                m33 as Real,
            ),
        }
    }

    pub fn identity() -> Matrix4Js {
        Matrix4Js {
            inner: Matrix4::identity(),
        }
    }

    /// Builds a matrix from 16 column-major entries (the layout of
    /// `DOMMatrix.toFloat64Array()`).
    #[wasm_bindgen(js_name = fromArray)]
    pub fn from_array(values: Vec<f64>) -> Result<Matrix4Js, JsValue> {
        if values.len() != 16 {
            return Err(JsValue::from_str(&format!(
                "expected 16 matrix entries, got {}",
                values.len()
            )));
        }
        Ok(Matrix4Js {
            inner: Matrix4::from_iterator(values.into_iter().map(|v| v as Real)),
        })
    }

    /// The 16 entries in column-major order.
    #[wasm_bindgen(js_name = toArray)]
    pub fn to_array(&self) -> Vec<f64> {
        self.inner.iter().map(|v| *v as f64).collect()
    }

    pub fn multiply(&self, other: &Matrix4Js) -> Matrix4Js {
        Matrix4Js {
            inner: self.inner * other.inner,
        }
    }

    pub fn decompose(&self) -> DecomposedJs {
        decompose(&self.inner).into()
    }

    #[wasm_bindgen(js_name = tryDecompose)]
    pub fn try_decompose(&self) -> Result<DecomposedJs, JsValue> {
        try_decompose(&self.inner).map(Into::into).map_err(to_js_error)
    }

    /// Component-wise interpolation towards `to`.
    pub fn interpolate(&self, to: &Matrix4Js, fraction: f64) -> Matrix4Js {
        Matrix4Js {
            inner: self.inner.interpolate(&to.inner, fraction as Real),
        }
    }
}

// Rust-only conversions
impl From<Matrix4<Real>> for Matrix4Js {
    fn from(m: Matrix4<Real>) -> Self {
        Matrix4Js { inner: m }
    }
}

impl From<&Matrix4Js> for Matrix4<Real> {
    fn from(m: &Matrix4Js) -> Self {
        m.inner
    }
}
