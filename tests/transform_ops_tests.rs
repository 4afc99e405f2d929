mod support;

use decomposed::float_types::{FRAC_PI_4, Real};
use decomposed::matrix::{
    identity_matrix, perspective_row, rotation_matrix, scale_matrix, translation_matrix,
};
use decomposed::{Skew, Transform3D, TransformOps, quaternion};
use nalgebra::{Matrix4, UnitQuaternion, Vector3, Vector4};
use support::{EPS, approx_eq, assert_matrix_eq, rotation_eq, vector3_eq, vector4_eq};

fn about_x() -> UnitQuaternion<Real> {
    quaternion::from_angle_axis(FRAC_PI_4, Vector3::x()).unwrap()
}

#[test]
fn composition_three_ways() {
    let fluent = Matrix4::<Real>::identity()
        .translated(Vector3::new(2.0, 4.0, 6.0))
        .scaled(Vector3::new(1.0, 2.0, 3.0))
        .rotated(about_x());

    let elementary = identity_matrix()
        * translation_matrix(&Vector3::new(2.0, 4.0, 6.0))
        * scale_matrix(&Vector3::new(1.0, 2.0, 3.0))
        * rotation_matrix(&about_x());

    // Native-style concatenation applies the left operand first.
    let native = Transform3D::concat(
        &Transform3D::make_rotation(FRAC_PI_4, 1.0, 0.0, 0.0),
        &Transform3D::concat(
            &Transform3D::make_scale(1.0, 2.0, 3.0),
            &Transform3D::make_translation(2.0, 4.0, 6.0),
        ),
    );

    assert_matrix_eq(&fluent, &elementary, EPS);
    assert_matrix_eq(&native.to_matrix(), &elementary, EPS);
}

#[test]
fn translation_getter_and_setter() {
    let t = Transform3D::make_translation(2.0, 3.0, 4.0);
    assert!(vector3_eq(&t.translation(), &Vector3::new(2.0, 3.0, 4.0), EPS));

    let set = Transform3D::identity().with_translation(Vector3::new(2.0, 3.0, 4.0));
    approx::assert_abs_diff_eq!(set, t, epsilon = EPS);
}

#[test]
fn scale_getter_and_setter() {
    let t = Transform3D::make_scale(2.0, 3.0, 4.0);
    assert!(vector3_eq(&t.scale(), &Vector3::new(2.0, 3.0, 4.0), EPS));

    let set = Transform3D::identity().with_scale(Vector3::new(2.0, 3.0, 4.0));
    approx::assert_abs_diff_eq!(set, t, epsilon = EPS);
}

#[test]
fn rotation_getter_and_setter() {
    let t = Transform3D::make_rotation(FRAC_PI_4, 1.0, 0.0, 0.0);
    assert!(rotation_eq(&t.rotation(), &about_x(), EPS));
    assert!(vector3_eq(&t.euler_angles(), &Vector3::new(FRAC_PI_4, 0.0, 0.0), EPS));

    let set = Transform3D::identity().with_rotation(about_x());
    approx::assert_abs_diff_eq!(set, t, epsilon = EPS);

    let by_euler = Transform3D::identity().with_euler_angles(Vector3::new(FRAC_PI_4, 0.0, 0.0));
    approx::assert_abs_diff_eq!(by_euler, t, epsilon = EPS);
}

#[test]
fn rotation_about_oblique_axis() {
    let t = Transform3D::make_rotation(FRAC_PI_4, 1.0, 1.0, 0.0);
    let axis = Vector3::new(1.0, 1.0, 0.0).normalize();
    let q = quaternion::from_angle_axis(FRAC_PI_4, axis).unwrap();
    assert!(rotation_eq(&t.rotation(), &q, EPS));

    let rotated = Transform3D::identity()
        .rotated_by_angle_axis(FRAC_PI_4, Vector3::new(1.0, 1.0, 0.0))
        .unwrap();
    approx::assert_abs_diff_eq!(rotated, t, epsilon = EPS);
}

#[test]
fn setters_replace_rather_than_compose() {
    let base = Transform3D::make_translation(5.0, 5.0, 5.0);
    let replaced = base.with_translation(Vector3::new(1.0, 0.0, 0.0));
    let composed = base.translated_by(1.0, 0.0, 0.0);
    assert!(vector3_eq(&replaced.translation(), &Vector3::new(1.0, 0.0, 0.0), EPS));
    assert!(vector3_eq(&composed.translation(), &Vector3::new(6.0, 5.0, 5.0), EPS));
}

#[test]
fn skew_from_entries() {
    let mut t = Transform3D::identity();
    t.m21 = 0.25;
    t.m31 = 0.25;
    t.m32 = 0.25;
    approx::assert_abs_diff_eq!(t.skew(), Skew::new(0.25, 0.25, 0.25), epsilon = EPS);

    let skewed = Transform3D::identity().skewed(Skew::new(0.25, 0.25, 0.25));
    approx::assert_abs_diff_eq!(skewed, t, epsilon = EPS);

    let set = Transform3D::identity().with_skew(Skew::new(0.25, 0.25, 0.25));
    approx::assert_abs_diff_eq!(set, t, epsilon = EPS);
}

#[test]
fn perspective_from_entries() {
    let mut t = Transform3D::identity();
    t.m34 = -1.0 / 500.0;
    let expected = Vector4::new(0.0, 0.0, -1.0 / 500.0, 1.0);
    assert!(vector4_eq(&t.perspective(), &expected, EPS));

    let applied = Transform3D::identity().applying_perspective(expected);
    assert_eq!(applied, t);

    let set = Transform3D::identity().with_perspective(expected);
    approx::assert_abs_diff_eq!(set, t, epsilon = EPS);
    assert!(vector4_eq(&perspective_row(&set.to_matrix()), &expected, EPS));
}

#[test]
fn with_scale_keeps_other_components() {
    let base = Matrix4::<Real>::identity()
        .translated_by(1.0, 2.0, 3.0)
        .rotated(about_x())
        .scaled_by(2.0, 2.0, 2.0);
    let rescaled = base.with_scale(Vector3::new(0.5, 1.0, 4.0));
    let d = rescaled.decomposed();
    assert!(vector3_eq(&d.scale, &Vector3::new(0.5, 1.0, 4.0), EPS));
    assert!(vector3_eq(&d.translation, &Vector3::new(1.0, 2.0, 3.0), EPS));
    assert!(rotation_eq(&d.rotation, &about_x(), EPS));
}

#[test]
fn rotated_by_euler_matches_quaternion() {
    let a = Transform3D::identity().rotated_by_euler(Vector3::new(0.0, 0.0, FRAC_PI_4));
    let b = Transform3D::make_rotation(FRAC_PI_4, 0.0, 0.0, 1.0);
    approx::assert_abs_diff_eq!(a, b, epsilon = EPS);
    assert!(approx_eq(a.euler_angles().z, FRAC_PI_4, EPS));
}
