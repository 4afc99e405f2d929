//! Unit quaternion construction and conversions.
//!
//! Rotations are `nalgebra::UnitQuaternion<Real>`. Euler angles are XYZ
//! Tait-Bryan angles in radians: the rotation matrix is `Rz · Ry · Rx`, i.e.
//! X is applied first.

use crate::errors::TransformError;
use crate::float_types::Real;
use crate::vector;
use nalgebra::{Matrix3, Rotation3, Unit, UnitQuaternion, Vector3};

/// Builds the rotation of `angle` radians about `axis`.
///
/// The axis does not need to be unit length, it is normalized here; a zero
/// axis has no direction and yields [`TransformError::InvalidGeometry`].
///
/// # Example
/// ```
/// # use decomposed::{quaternion, float_types::{EPSILON, FRAC_PI_2}};
/// # use nalgebra::Vector3;
/// let q = quaternion::from_angle_axis(FRAC_PI_2, Vector3::new(0.0, 0.0, 2.0)).unwrap();
/// let v = q * Vector3::x();
/// assert!((v - Vector3::y()).norm() < EPSILON);
/// ```
pub fn from_angle_axis(
    angle: Real,
    axis: Vector3<Real>,
) -> Result<UnitQuaternion<Real>, TransformError> {
    let axis = vector::normalize(axis)?;
    Ok(UnitQuaternion::from_axis_angle(&Unit::new_unchecked(axis), angle))
}

/// Splits a rotation into `(angle, axis)` with `angle` in `[0, π]`.
/// The identity rotation has no axis of its own and reports `+X`.
pub fn angle_axis(q: &UnitQuaternion<Real>) -> (Real, Vector3<Real>) {
    match q.axis_angle() {
        Some((axis, angle)) => (angle, axis.into_inner()),
        None => (0.0, Vector3::x()),
    }
}

/// Builds a rotation from XYZ Euler angles (radians).
pub fn from_euler_angles(euler: &Vector3<Real>) -> UnitQuaternion<Real> {
    UnitQuaternion::from_euler_angles(euler.x, euler.y, euler.z)
}

/// XYZ Euler angles of the rotation whose matrix has the columns `r0`, `r1`, `r2`.
///
/// The gimbal-lock branch (`x` from `r1`/`r2`, `z = 0`) is taken only when
/// `cos(y)` is exactly zero. `asin(±1)` rounds to a value whose cosine is a
/// tiny non-zero number, so a basis with `r0 = (0, 0, ∓1)` normally stays on
/// the general branch. The angles it returns there are still finite.
pub fn euler_angles_from_rotation(
    r0: &Vector3<Real>,
    r1: &Vector3<Real>,
    r2: &Vector3<Real>,
) -> Vector3<Real> {
    let y = (-r0.z).asin();
    if y.cos() != 0.0 {
        Vector3::new(r1.z.atan2(r2.z), y, r0.y.atan2(r0.x))
    } else {
        Vector3::new((-r2.x).atan2(r1.y), y, 0.0)
    }
}

/// XYZ Euler angles (radians) of `q`.
pub fn euler_angles(q: &UnitQuaternion<Real>) -> Vector3<Real> {
    let m = rotation_matrix3(q);
    euler_angles_from_rotation(
        &m.column(0).into_owned(),
        &m.column(1).into_owned(),
        &m.column(2).into_owned(),
    )
}

/// The quaternion of the rotation matrix whose columns are `r0`, `r1`, `r2`.
///
/// The columns are expected to be orthonormal with a positive determinant; the
/// decomposition guarantees this before calling.
pub fn from_rotation_axes(
    r0: &Vector3<Real>,
    r1: &Vector3<Real>,
    r2: &Vector3<Real>,
) -> UnitQuaternion<Real> {
    let m = Matrix3::from_columns(&[*r0, *r1, *r2]);
    UnitQuaternion::from_rotation_matrix(&Rotation3::from_matrix_unchecked(m))
}

/// The 3×3 rotation matrix of `q`.
#[inline]
pub fn rotation_matrix3(q: &UnitQuaternion<Real>) -> Matrix3<Real> {
    q.to_rotation_matrix().into_inner()
}

/// `true` when `a` and `b` are the same rotation: every component of `a`
/// is within `epsilon` of `b` or of `-b`.
pub fn abs_diff_eq(a: &UnitQuaternion<Real>, b: &UnitQuaternion<Real>, epsilon: Real) -> bool {
    let close = |x: &nalgebra::Vector4<Real>, y: &nalgebra::Vector4<Real>| {
        x.iter().zip(y.iter()).all(|(p, q)| (p - q).abs() <= epsilon)
    };
    close(&a.coords, &b.coords) || close(&a.coords, &-b.coords)
}

/// `true` when every component of `q` is a finite number.
#[inline]
pub fn is_finite(q: &UnitQuaternion<Real>) -> bool {
    q.coords.iter().all(|c| c.is_finite())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::float_types::{EPSILON, FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn angle_axis_normalizes_axis() {
        let q = from_angle_axis(FRAC_PI_4, Vector3::new(2.0, 0.0, 0.0)).unwrap();
        let (angle, axis) = angle_axis(&q);
        assert!((angle - FRAC_PI_4).abs() < EPSILON);
        assert!((axis - Vector3::x()).norm() < EPSILON);
    }

    #[test]
    fn zero_axis_is_invalid() {
        assert!(matches!(
            from_angle_axis(PI, Vector3::zeros()),
            Err(TransformError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn identity_reports_x_axis() {
        let (angle, axis) = angle_axis(&UnitQuaternion::identity());
        assert_eq!(angle, 0.0);
        assert_eq!(axis, Vector3::x());
    }

    #[test]
    fn euler_round_trip() {
        let euler = Vector3::new(0.3, -0.4, 1.1);
        let q = from_euler_angles(&euler);
        let back = euler_angles(&q);
        assert!((back - euler).norm() < EPSILON, "{back:?} != {euler:?}");
    }

    #[test]
    fn euler_single_axis_matches_angle_axis() {
        let about_y = from_euler_angles(&Vector3::new(0.0, FRAC_PI_4, 0.0));
        let expected = from_angle_axis(FRAC_PI_4, Vector3::y()).unwrap();
        assert!(abs_diff_eq(&about_y, &expected, EPSILON));
    }

    #[test]
    fn rotation_axes_round_trip() {
        let q = from_angle_axis(1.2, Vector3::new(1.0, -2.0, 0.5)).unwrap();
        let m = rotation_matrix3(&q);
        let back = from_rotation_axes(
            &m.column(0).into_owned(),
            &m.column(1).into_owned(),
            &m.column(2).into_owned(),
        );
        assert!(abs_diff_eq(&q, &back, EPSILON));
    }

    #[test]
    fn euler_angles_at_gimbal_lock() {
        // A quarter turn about Y sends X to -Z.
        let r0 = Vector3::new(0.0, 0.0, -1.0);
        let r1 = Vector3::new(0.0, 1.0, 0.0);
        let r2 = Vector3::new(1.0, 0.0, 0.0);
        let euler = euler_angles_from_rotation(&r0, &r1, &r2);
        assert!(euler.iter().all(|a| a.is_finite()), "{euler:?}");
        assert!((euler - Vector3::new(0.0, FRAC_PI_2, 0.0)).norm() < EPSILON, "{euler:?}");

        let q = from_euler_angles(&euler);
        let expected = from_angle_axis(FRAC_PI_2, Vector3::y()).unwrap();
        assert!(abs_diff_eq(&q, &expected, EPSILON));
    }

    #[test]
    fn negated_quaternion_is_the_same_rotation() {
        let q = from_angle_axis(0.5, Vector3::z()).unwrap();
        let flipped = UnitQuaternion::new_unchecked(-*q.quaternion());
        assert!(abs_diff_eq(&q, &flipped, EPSILON));
        assert!(!abs_diff_eq(&q, &UnitQuaternion::identity(), EPSILON));
    }
}
