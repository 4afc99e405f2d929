//! Component-wise interpolation of transforms.
//!
//! Interpolating two matrices entry by entry shears and shrinks the shape
//! mid-animation. Interpolating their [`DecomposedTransform`]s instead moves
//! each quantity through its natural space: translation, scale, skew and
//! perspective linearly, rotation along the great arc between the quaternions.

use crate::decompose::{DecomposedTransform, decompose, recompose};
use crate::float_types::Real;
use crate::vector::Skew;
use nalgebra::{Matrix4, Quaternion, UnitQuaternion, Vector3, Vector4};

/// A value that can be blended towards another value of the same type.
///
/// `fraction` is unrestricted: `0.0` yields `self`, `1.0` yields `to`, and values
/// outside `[0, 1]` extrapolate.
pub trait Interpolate: Sized {
    fn interpolate(&self, to: &Self, fraction: Real) -> Self;
}

impl Interpolate for Real {
    #[inline]
    fn interpolate(&self, to: &Self, fraction: Real) -> Self {
        self + (to - self) * fraction
    }
}

impl Interpolate for Vector3<Real> {
    #[inline]
    fn interpolate(&self, to: &Self, fraction: Real) -> Self {
        self + (to - self) * fraction
    }
}

impl Interpolate for Vector4<Real> {
    #[inline]
    fn interpolate(&self, to: &Self, fraction: Real) -> Self {
        self + (to - self) * fraction
    }
}

impl Interpolate for Skew {
    fn interpolate(&self, to: &Self, fraction: Real) -> Self {
        Skew::new(
            self.xy.interpolate(&to.xy, fraction),
            self.xz.interpolate(&to.xz, fraction),
            self.yz.interpolate(&to.yz, fraction),
        )
    }
}

impl Interpolate for UnitQuaternion<Real> {
    fn interpolate(&self, to: &Self, fraction: Real) -> Self {
        slerp(self, to, fraction)
    }
}

impl Interpolate for DecomposedTransform {
    fn interpolate(&self, to: &Self, fraction: Real) -> Self {
        lerp(self, to, fraction)
    }
}

impl Interpolate for Matrix4<Real> {
    /// Decomposes both matrices, interpolates the components and recomposes.
    fn interpolate(&self, to: &Self, fraction: Real) -> Self {
        recompose(&lerp(&decompose(self), &decompose(to), fraction))
    }
}

/// Interpolates every component of two decomposed transforms.
///
/// # Example
/// ```
/// # use decomposed::{decompose::DecomposedTransform, interpolate::lerp};
/// # use nalgebra::Vector3;
/// let a = DecomposedTransform::default();
/// let b = a.with_translation(Vector3::new(2.0, 4.0, 6.0));
/// assert_eq!(lerp(&a, &b, 0.5).translation, Vector3::new(1.0, 2.0, 3.0));
/// ```
pub fn lerp(
    from: &DecomposedTransform,
    to: &DecomposedTransform,
    fraction: Real,
) -> DecomposedTransform {
    DecomposedTransform {
        perspective: from.perspective.interpolate(&to.perspective, fraction),
        translation: from.translation.interpolate(&to.translation, fraction),
        rotation: slerp(&from.rotation, &to.rotation, fraction),
        skew: from.skew.interpolate(&to.skew, fraction),
        scale: from.scale.interpolate(&to.scale, fraction),
    }
}

/// **Spherical Linear Interpolation (SLERP)** between two rotations.
///
/// For unit quaternions `q₀`, `q₁` with `Ω = acos(q₀ · q₁)`:
/// ```text
/// slerp(q₀, q₁, t) = (sin((1-t)·Ω) · q₀ + sin(t·Ω) · q₁) / sin(Ω)
/// ```
///
/// `q₁` is negated first when `q₀ · q₁ < 0`, so the result always travels the
/// shorter of the two arcs (never more than a half turn). Nearly identical
/// rotations fall back to normalized linear interpolation.
pub fn slerp(
    from: &UnitQuaternion<Real>,
    to: &UnitQuaternion<Real>,
    fraction: Real,
) -> UnitQuaternion<Real> {
    let q0 = from.coords;
    let mut q1 = to.coords;

    let mut dot = q0.dot(&q1);
    if dot < 0.0 {
        q1 = -q1;
        dot = -dot;
    }
    let dot = dot.min(1.0);

    // If the rotations are nearly parallel, use linear interpolation
    if 1.0 - dot < Real::EPSILON {
        return UnitQuaternion::new_normalize(Quaternion::from(q0.interpolate(&q1, fraction)));
    }

    let omega = dot.acos();
    let sin_omega = omega.sin();

    if sin_omega.abs() < Real::EPSILON {
        return UnitQuaternion::new_normalize(Quaternion::from(q0.interpolate(&q1, fraction)));
    }

    let a = ((1.0 - fraction) * omega).sin() / sin_omega;
    let b = (fraction * omega).sin() / sin_omega;

    UnitQuaternion::new_normalize(Quaternion::from(q0 * a + q1 * b))
}
