//! `wasm-bindgen` bindings exposing decomposition and interpolation to JavaScript.
//!
//! JavaScript numbers are always `f64`; values are cast to and from the crate's
//! `Real` at this boundary.

use crate::errors::TransformError;
use wasm_bindgen::prelude::*;

pub mod decomposed_js;
pub mod matrix_js;

pub use decomposed_js::DecomposedJs;
pub use matrix_js::Matrix4Js;

fn to_js_error(err: TransformError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
