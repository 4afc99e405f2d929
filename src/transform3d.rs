//! Platform-style 4×4 transform record.
//!
//! [`Transform3D`] stores its sixteen entries as named fields `m11 ... m44` in the
//! row-vector convention of compositor APIs (`p' = p · M`): the translation is
//! `m41, m42, m43` and the projective column is `m14, m24, m34, m44`. It is the
//! transpose of the column-vector `Matrix4` the rest of the crate uses, which
//! makes the field order `m11, m12, ..., m44` identical to `nalgebra`'s
//! column-major storage. Conversions are therefore exact.

use crate::float_types::Real;
use crate::interpolate::Interpolate;
use crate::matrix;
use crate::quaternion;
use crate::traits::TransformOps;
use nalgebra::{Matrix4, Vector3};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform3D {
    pub m11: Real,
    pub m12: Real,
    pub m13: Real,
    pub m14: Real,
    pub m21: Real,
    pub m22: Real,
    pub m23: Real,
    pub m24: Real,
    pub m31: Real,
    pub m32: Real,
    pub m33: Real,
    pub m34: Real,
    pub m41: Real,
    pub m42: Real,
    pub m43: Real,
    pub m44: Real,
}

impl Default for Transform3D {
    fn default() -> Self {
        Transform3D::identity()
    }
}

impl Transform3D {
    pub const fn identity() -> Self {
        Transform3D::from_array([
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    pub const fn zero() -> Self {
        Transform3D::from_array([0.0; 16])
    }

    /// Builds a transform from its entries in `m11, m12, ..., m44` order.
    pub const fn from_array(m: [Real; 16]) -> Self {
        Transform3D {
            m11: m[0],
            m12: m[1],
            m13: m[2],
            m14: m[3],
            m21: m[4],
            m22: m[5],
            m23: m[6],
            m24: m[7],
            m31: m[8],
            m32: m[9],
            m33: m[10],
            m34: m[11],
            m41: m[12],
            m42: m[13],
            m43: m[14],
            m44: m[15],
        }
    }

    /// The entries in `m11, m12, ..., m44` order.
    pub const fn to_array(&self) -> [Real; 16] {
        [
            self.m11, self.m12, self.m13, self.m14, //
            self.m21, self.m22, self.m23, self.m24, //
            self.m31, self.m32, self.m33, self.m34, //
            self.m41, self.m42, self.m43, self.m44,
        ]
    }

    /// Single-precision entries for APIs that take `f32`. Narrowing may round.
    pub fn to_f32_array(&self) -> [f32; 16] {
        self.to_array().map(|v| v as f32)
    }

    pub fn from_f32_array(m: [f32; 16]) -> Self {
        Transform3D::from_array(m.map(|v| v as Real))
    }

    /// Translation by `(tx, ty, tz)`.
    pub fn make_translation(tx: Real, ty: Real, tz: Real) -> Self {
        matrix::translation_matrix(&Vector3::new(tx, ty, tz)).into()
    }

    /// Scale by `(sx, sy, sz)`.
    pub fn make_scale(sx: Real, sy: Real, sz: Real) -> Self {
        matrix::scale_matrix(&Vector3::new(sx, sy, sz)).into()
    }

    /// Rotation of `angle` radians about the axis `(x, y, z)`.
    /// A zero-length axis yields the identity.
    pub fn make_rotation(angle: Real, x: Real, y: Real, z: Real) -> Self {
        match quaternion::from_angle_axis(angle, Vector3::new(x, y, z)) {
            Ok(q) => matrix::rotation_matrix(&q).into(),
            Err(_) => Transform3D::identity(),
        }
    }

    /// The transform that applies `a` and then `b`.
    pub fn concat(a: &Transform3D, b: &Transform3D) -> Self {
        matrix::multiply(&b.to_matrix(), &a.to_matrix()).into()
    }

    pub fn is_identity(&self) -> bool {
        *self == Transform3D::identity()
    }
}

impl From<Matrix4<Real>> for Transform3D {
    fn from(m: Matrix4<Real>) -> Self {
        let mut entries = [0.0; 16];
        entries.copy_from_slice(m.as_slice());
        Transform3D::from_array(entries)
    }
}

impl From<&Matrix4<Real>> for Transform3D {
    fn from(m: &Matrix4<Real>) -> Self {
        Transform3D::from(*m)
    }
}

impl From<Transform3D> for Matrix4<Real> {
    fn from(t: Transform3D) -> Self {
        Matrix4::from_column_slice(&t.to_array())
    }
}

impl From<[Real; 16]> for Transform3D {
    fn from(m: [Real; 16]) -> Self {
        Transform3D::from_array(m)
    }
}

impl TransformOps for Transform3D {
    fn to_matrix(&self) -> Matrix4<Real> {
        Matrix4::from(*self)
    }

    fn from_matrix(matrix: &Matrix4<Real>) -> Self {
        Transform3D::from(matrix)
    }
}

impl Interpolate for Transform3D {
    fn interpolate(&self, to: &Self, fraction: Real) -> Self {
        self.to_matrix().interpolate(&to.to_matrix(), fraction).into()
    }
}

impl approx::AbsDiffEq for Transform3D {
    type Epsilon = Real;

    fn default_epsilon() -> Self::Epsilon {
        crate::float_types::tolerance()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| approx::AbsDiffEq::abs_diff_eq(a, b, epsilon))
    }
}

impl approx::RelativeEq for Transform3D {
    fn default_max_relative() -> Self::Epsilon {
        <Real as approx::RelativeEq>::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| approx::RelativeEq::relative_eq(a, b, epsilon, max_relative))
    }
}

impl approx::UlpsEq for Transform3D {
    fn default_max_ulps() -> u32 {
        <Real as approx::UlpsEq>::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| approx::UlpsEq::ulps_eq(a, b, epsilon, max_ulps))
    }
}
