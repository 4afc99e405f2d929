//! Test support library
//! Provides comparison helpers with an explicit tolerance.
#![allow(dead_code)]

use decomposed::float_types::Real;
use nalgebra::{Matrix4, UnitQuaternion, Vector3, Vector4};

/// Tolerance the platform-level behaviour is specified against.
pub const EPS: Real = 1e-4;

/// Checks if two Reals are approximately equal
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

pub fn vector3_eq(a: &Vector3<Real>, b: &Vector3<Real>, eps: Real) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| approx_eq(*x, *y, eps))
}

pub fn vector4_eq(a: &Vector4<Real>, b: &Vector4<Real>, eps: Real) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| approx_eq(*x, *y, eps))
}

pub fn matrix_eq(a: &Matrix4<Real>, b: &Matrix4<Real>, eps: Real) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| approx_eq(*x, *y, eps))
}

/// `q` and `-q` describe the same rotation and compare equal.
pub fn rotation_eq(a: &UnitQuaternion<Real>, b: &UnitQuaternion<Real>, eps: Real) -> bool {
    vector4_eq(&a.coords, &b.coords, eps) || vector4_eq(&a.coords, &-b.coords, eps)
}

#[track_caller]
pub fn assert_matrix_eq(a: &Matrix4<Real>, b: &Matrix4<Real>, eps: Real) {
    assert!(matrix_eq(a, b, eps), "matrices differ:{a}{b}");
}
