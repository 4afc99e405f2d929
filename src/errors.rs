//! Decomposition and geometry errors

use crate::float_types::Real;
use nalgebra::Vector3;

/// All the possible failures the transform primitives can report.
///
/// None of these are raised by [`decompose`](crate::decompose::decompose) or
/// [`recompose`](crate::decompose::recompose), which always produce a value;
/// they surface only through the `try_*` / `Result` returning entry points.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransformError {
    /// (SingularPerspectiveBlock) The perspective sub-matrix has a zero determinant
    #[error("(SingularPerspectiveBlock) The perspective sub-matrix has a zero determinant")]
    SingularPerspectiveBlock,
    /// (DegenerateScale) A Gram-Schmidt scale magnitude is zero, the skew is not finite
    #[error("(DegenerateScale) Degenerate scale ({}, {}, {}) leaves the skew undefined", scale.x, scale.y, scale.z)]
    DegenerateScale { scale: Vector3<Real> },
    /// (InvalidGeometry) A zero-length vector or rotation axis was normalized
    #[error("(InvalidGeometry) {0}")]
    InvalidGeometry(String),
    /// (SingularMatrix) The matrix has no inverse
    #[error("(SingularMatrix) The matrix is singular and cannot be inverted")]
    SingularMatrix,
}
