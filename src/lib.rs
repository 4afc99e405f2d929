//! Decomposition, recomposition and interpolation of **4×4 homogeneous transforms**.
//!
//! A transform matrix is split into independent components
//! ([perspective, translation, rotation, skew, scale](decompose::DecomposedTransform))
//! that can be inspected, edited one at a time, interpolated and recomposed.
//! Interpolating components instead of raw matrix entries keeps rotations rigid
//! mid-animation.
//!
//! ```
//! use decomposed::{TransformOps, decompose, interpolate::lerp, recompose};
//! use decomposed::float_types::{EPSILON, Real};
//! use nalgebra::{Matrix4, Vector3};
//!
//! let from = Matrix4::identity();
//! let to = Matrix4::<Real>::identity().translated_by(2.0, 4.0, 6.0).scaled_by(1.0, 2.0, 3.0);
//!
//! let halfway = recompose(&lerp(&decompose(&from), &decompose(&to), 0.5));
//! assert!((halfway.decomposed().translation - Vector3::new(1.0, 2.0, 3.0)).norm() < EPSILON);
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **serde**: `Serialize`/`Deserialize` for the value types
//! - **wasm**: `wasm-bindgen` bindings

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod decompose;
pub mod errors;
pub mod float_types;
pub mod interpolate;
pub mod matrix;
pub mod quaternion;
pub mod traits;
pub mod transform3d;
pub mod vector;

#[cfg(feature = "wasm")]
pub mod wasm;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use decompose::{DecomposedEpsilon, DecomposedTransform, decompose, recompose, try_decompose};
pub use errors::TransformError;
pub use interpolate::Interpolate;
pub use traits::TransformOps;
pub use transform3d::Transform3D;
pub use vector::Skew;
