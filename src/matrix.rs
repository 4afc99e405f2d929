//! 4×4 matrix primitives and elementary transform constructors.
//!
//! Matrices use the column-vector convention (`p' = M · p`): the translation is
//! column 3 and the projective row is row 3. Every constructor returns the
//! identity modified only in the entries its component owns, so composing them by
//! right-multiplication applies the rightmost one first.

use crate::errors::TransformError;
use crate::float_types::Real;
use crate::quaternion;
use crate::vector::Skew;
use nalgebra::{Matrix4, UnitQuaternion, Vector3, Vector4};

/// The identity transform.
#[inline]
pub fn identity_matrix() -> Matrix4<Real> {
    Matrix4::identity()
}

/// `a · b`, i.e. `b` applied first.
#[inline]
pub fn multiply(a: &Matrix4<Real>, b: &Matrix4<Real>) -> Matrix4<Real> {
    a * b
}

#[inline]
pub fn determinant(m: &Matrix4<Real>) -> Real {
    m.determinant()
}

/// Determinant of the 3×3 matrix whose columns (or rows) are `r0`, `r1`, `r2`.
#[inline]
pub fn determinant3(r0: &Vector3<Real>, r1: &Vector3<Real>, r2: &Vector3<Real>) -> Real {
    r0.dot(&r1.cross(r2))
}

#[inline]
pub fn transpose(m: &Matrix4<Real>) -> Matrix4<Real> {
    m.transpose()
}

/// Inverse of `m`, or [`TransformError::SingularMatrix`] when it has none.
pub fn inverse(m: &Matrix4<Real>) -> Result<Matrix4<Real>, TransformError> {
    m.try_inverse().ok_or(TransformError::SingularMatrix)
}

/// Multiplies every entry of `m` by `factor`.
#[inline]
pub fn scale_by_factor(m: &Matrix4<Real>, factor: Real) -> Matrix4<Real> {
    m * factor
}

/// Translation by `v`.
pub fn translation_matrix(v: &Vector3<Real>) -> Matrix4<Real> {
    Matrix4::new_translation(v)
}

/// Per-axis scale by `v` (negative entries reflect).
pub fn scale_matrix(v: &Vector3<Real>) -> Matrix4<Real> {
    Matrix4::new_nonuniform_scaling(v)
}

/// Rotation by the unit quaternion `q`.
pub fn rotation_matrix(q: &UnitQuaternion<Real>) -> Matrix4<Real> {
    q.to_homogeneous()
}

/// Rotation by XYZ Euler angles in radians.
pub fn euler_rotation_matrix(euler: &Vector3<Real>) -> Matrix4<Real> {
    rotation_matrix(&quaternion::from_euler_angles(euler))
}

/// Shear matrix with `xy` at `(0, 1)`, `xz` at `(0, 2)` and `yz` at `(1, 2)`.
///
/// Equal to applying the `xy`, then `xz`, then `yz` elementary shears, which is
/// the order the decomposition peels them off in.
pub fn skew_matrix(xy: Real, xz: Real, yz: Real) -> Matrix4<Real> {
    let mut m = Matrix4::identity();
    m[(0, 1)] = xy;
    m[(0, 2)] = xz;
    m[(1, 2)] = yz;
    m
}

/// [`skew_matrix`] from a [`Skew`] record.
#[inline]
pub fn skew_matrix_from(skew: &Skew) -> Matrix4<Real> {
    skew_matrix(skew.xy, skew.xz, skew.yz)
}

/// Identity with its projective row replaced by `p`.
pub fn perspective_matrix(p: &Vector4<Real>) -> Matrix4<Real> {
    let mut m = Matrix4::identity();
    m.set_row(3, &p.transpose());
    m
}

/// The projective row of `m`.
#[inline]
pub fn perspective_row(m: &Matrix4<Real>) -> Vector4<Real> {
    m.row(3).transpose()
}
