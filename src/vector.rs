//! Vector helpers and the [`Skew`] shear record.
//!
//! Plain vector arithmetic (add, subtract, scalar multiply, dot, cross, length)
//! comes straight from `nalgebra`; this module only adds the pieces the
//! decomposition needs on top of it.

use crate::errors::TransformError;
use crate::float_types::Real;
use nalgebra::{Vector3, Vector4};

/// Returns `v` scaled to unit length.
///
/// A zero-length (or non-finite) vector has no direction, so it is rejected with
/// [`TransformError::InvalidGeometry`] instead of producing `NaN` components.
pub fn normalize(v: Vector3<Real>) -> Result<Vector3<Real>, TransformError> {
    let len = v.norm();
    if len == 0.0 || !len.is_finite() {
        return Err(TransformError::InvalidGeometry(format!(
            "cannot normalize vector ({}, {}, {}) of length {}",
            v.x, v.y, v.z, len
        )));
    }
    Ok(v / len)
}

/// `a_scale * a + b_scale * b`
#[inline]
pub fn linear_combination(
    a_scale: Real,
    a: &Vector3<Real>,
    b_scale: Real,
    b: &Vector3<Real>,
) -> Vector3<Real> {
    a * a_scale + b * b_scale
}

/// The perspective row of a matrix without any projective component.
#[inline]
pub fn identity_perspective() -> Vector4<Real> {
    Vector4::new(0.0, 0.0, 0.0, 1.0)
}

/// Off-diagonal coupling between axes.
///
/// `xy` shears X by Y, `xz` shears X by Z and `yz` shears Y by Z. In a
/// column-vector matrix they sit at `(0, 1)`, `(0, 2)` and `(1, 2)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skew {
    pub xy: Real,
    pub xz: Real,
    pub yz: Real,
}

impl Skew {
    pub const fn new(xy: Real, xz: Real, yz: Real) -> Self {
        Skew { xy, xz, yz }
    }

    /// No shear at all.
    pub const fn zero() -> Self {
        Skew::new(0.0, 0.0, 0.0)
    }

    pub fn is_finite(&self) -> bool {
        self.xy.is_finite() && self.xz.is_finite() && self.yz.is_finite()
    }

    pub const fn to_array(self) -> [Real; 3] {
        [self.xy, self.xz, self.yz]
    }
}

impl From<[Real; 3]> for Skew {
    fn from([xy, xz, yz]: [Real; 3]) -> Self {
        Skew::new(xy, xz, yz)
    }
}

impl From<Vector3<Real>> for Skew {
    fn from(v: Vector3<Real>) -> Self {
        Skew::new(v.x, v.y, v.z)
    }
}

impl From<Skew> for Vector3<Real> {
    fn from(skew: Skew) -> Self {
        Vector3::new(skew.xy, skew.xz, skew.yz)
    }
}

impl approx::AbsDiffEq for Skew {
    type Epsilon = Real;

    fn default_epsilon() -> Self::Epsilon {
        crate::float_types::tolerance()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        approx::AbsDiffEq::abs_diff_eq(&self.xy, &other.xy, epsilon)
            && approx::AbsDiffEq::abs_diff_eq(&self.xz, &other.xz, epsilon)
            && approx::AbsDiffEq::abs_diff_eq(&self.yz, &other.yz, epsilon)
    }
}

impl approx::RelativeEq for Skew {
    fn default_max_relative() -> Self::Epsilon {
        <Real as approx::RelativeEq>::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        approx::RelativeEq::relative_eq(&self.xy, &other.xy, epsilon, max_relative)
            && approx::RelativeEq::relative_eq(&self.xz, &other.xz, epsilon, max_relative)
            && approx::RelativeEq::relative_eq(&self.yz, &other.yz, epsilon, max_relative)
    }
}

impl approx::UlpsEq for Skew {
    fn default_max_ulps() -> u32 {
        <Real as approx::UlpsEq>::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        approx::UlpsEq::ulps_eq(&self.xy, &other.xy, epsilon, max_ulps)
            && approx::UlpsEq::ulps_eq(&self.xz, &other.xz, epsilon, max_ulps)
            && approx::UlpsEq::ulps_eq(&self.yz, &other.yz, epsilon, max_ulps)
    }
}
