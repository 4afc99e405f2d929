mod support;

use decomposed::float_types::{FRAC_PI_2, Real};
use decomposed::{Interpolate, Transform3D, TransformOps, decompose};
use nalgebra::{Matrix4, Point3, Vector3};
use support::{EPS, assert_matrix_eq, vector3_eq};

#[test]
fn identity_and_default_agree() {
    assert_eq!(Transform3D::default(), Transform3D::identity());
    assert_eq!(Transform3D::identity().to_matrix(), Matrix4::<Real>::identity());
    assert!(Transform3D::identity().is_identity());
    assert!(!Transform3D::zero().is_identity());
}

#[test]
fn translation_lives_in_fourth_row() {
    let t = Transform3D::make_translation(2.0, 3.0, 4.0);
    assert_eq!([t.m41, t.m42, t.m43], [2.0, 3.0, 4.0]);
    let p = t.to_matrix().transform_point(&Point3::origin());
    assert_eq!(p, Point3::new(2.0, 3.0, 4.0));
}

#[test]
fn make_rotation_turns_x_towards_y() {
    let t = Transform3D::make_rotation(FRAC_PI_2, 0.0, 0.0, 1.0);
    let v = t.to_matrix().transform_vector(&Vector3::x());
    assert!(vector3_eq(&v, &Vector3::y(), EPS));
}

#[test]
fn array_order_is_m11_to_m44() {
    let entries: [Real; 16] = core::array::from_fn(|i| (i + 1) as Real);
    let t = Transform3D::from(entries);
    assert_eq!(t.m11, 1.0);
    assert_eq!(t.m14, 4.0);
    assert_eq!(t.m41, 13.0);
    assert_eq!(t.m44, 16.0);
    assert_eq!(t.to_array(), entries);

    let m = t.to_matrix();
    assert_eq!(m[(3, 0)], t.m14);
    assert_eq!(m[(0, 3)], t.m41);
    assert_eq!(Transform3D::from(m), t);
}

#[test]
fn decomposes_like_the_matrix() {
    let t = Transform3D::concat(
        &Transform3D::make_scale(2.0, 2.0, 2.0),
        &Transform3D::make_translation(1.0, 0.0, 0.0),
    );
    let d = t.decomposed();
    assert_eq!(d, decompose(&t.to_matrix()));
    assert!(vector3_eq(&d.scale, &Vector3::repeat(2.0), EPS));
    assert!(vector3_eq(&d.translation, &Vector3::new(1.0, 0.0, 0.0), EPS));
    approx::assert_abs_diff_eq!(Transform3D::from_decomposed(&d), t, epsilon = EPS);
}

#[test]
fn interpolates_through_components() {
    let from = Transform3D::identity();
    let to = Transform3D::make_translation(4.0, 0.0, 0.0);
    let mid = from.interpolate(&to, 0.5);
    assert_matrix_eq(
        &mid.to_matrix(),
        &Transform3D::make_translation(2.0, 0.0, 0.0).to_matrix(),
        EPS,
    );
}

#[test]
fn f32_round_trip_is_close() {
    let t = Transform3D::make_rotation(0.3, 1.0, 2.0, 3.0);
    let back = Transform3D::from_f32_array(t.to_f32_array());
    approx::assert_abs_diff_eq!(back, t, epsilon = 1e-6);
}
