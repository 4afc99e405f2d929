use crate::decompose::{DecomposedTransform, decompose, recompose};
use crate::errors::TransformError;
use crate::float_types::Real;
use crate::matrix;
use crate::quaternion;
use crate::vector::Skew;
use nalgebra::{Matrix4, UnitQuaternion, Vector3, Vector4};

/// Component access and composition for anything backed by a 4×4 transform.
///
/// Three kinds of operations are provided on top of the two required
/// conversions, all returning new values:
///
/// * getters (`translation()`, `scale()`, ...) read one decomposed component,
/// * `with_*` replace one component: decompose, overwrite, recompose,
/// * `translated`, `scaled`, `rotated`, `skewed` compose an elementary transform
///   on the right, so it is applied before everything already in `self`.
pub trait TransformOps: Sized {
    fn to_matrix(&self) -> Matrix4<Real>;
    fn from_matrix(matrix: &Matrix4<Real>) -> Self;

    /// The components of this transform.
    fn decomposed(&self) -> DecomposedTransform {
        decompose(&self.to_matrix())
    }

    fn from_decomposed(decomposed: &DecomposedTransform) -> Self {
        Self::from_matrix(&recompose(decomposed))
    }

    /// Returns `self · matrix`.
    fn appending(&self, matrix: &Matrix4<Real>) -> Self {
        Self::from_matrix(&matrix::multiply(&self.to_matrix(), matrix))
    }

    /// Returns a copy with one decomposed component changed by `edit`.
    fn with_decomposed(&self, edit: impl FnOnce(&mut DecomposedTransform)) -> Self {
        let mut decomposed = self.decomposed();
        edit(&mut decomposed);
        Self::from_decomposed(&decomposed)
    }

    // Translation

    fn translation(&self) -> Vector3<Real> {
        self.decomposed().translation
    }

    fn with_translation(&self, translation: Vector3<Real>) -> Self {
        self.with_decomposed(|d| d.translation = translation)
    }

    /// Returns a new Self translated by vector.
    fn translated(&self, by: Vector3<Real>) -> Self {
        self.appending(&matrix::translation_matrix(&by))
    }

    /// Returns a new Self translated by x, y, and z.
    fn translated_by(&self, x: Real, y: Real, z: Real) -> Self {
        self.translated(Vector3::new(x, y, z))
    }

    // Scale

    fn scale(&self) -> Vector3<Real> {
        self.decomposed().scale
    }

    fn with_scale(&self, scale: Vector3<Real>) -> Self {
        self.with_decomposed(|d| d.scale = scale)
    }

    /// Returns a new Self with its basis columns multiplied by `by`.
    fn scaled(&self, by: Vector3<Real>) -> Self {
        self.appending(&matrix::scale_matrix(&by))
    }

    /// Returns a new Self scaled by x, y, and z.
    fn scaled_by(&self, x: Real, y: Real, z: Real) -> Self {
        self.scaled(Vector3::new(x, y, z))
    }

    // Rotation

    fn rotation(&self) -> UnitQuaternion<Real> {
        self.decomposed().rotation
    }

    fn with_rotation(&self, rotation: UnitQuaternion<Real>) -> Self {
        self.with_decomposed(|d| d.rotation = rotation)
    }

    /// Returns a new Self rotated by `by`. A rotation with non-finite components
    /// leaves the transform unchanged.
    fn rotated(&self, by: UnitQuaternion<Real>) -> Self {
        if !quaternion::is_finite(&by) {
            return Self::from_matrix(&self.to_matrix());
        }
        self.appending(&matrix::rotation_matrix(&by))
    }

    /// Returns a new Self rotated by `angle` radians about `axis`.
    fn rotated_by_angle_axis(&self, angle: Real, axis: Vector3<Real>) -> Result<Self, TransformError> {
        Ok(self.rotated(quaternion::from_angle_axis(angle, axis)?))
    }

    /// Returns a new Self rotated by XYZ Euler angles (radians).
    fn rotated_by_euler(&self, euler: Vector3<Real>) -> Self {
        self.rotated(quaternion::from_euler_angles(&euler))
    }

    fn euler_angles(&self) -> Vector3<Real> {
        self.decomposed().euler_angles()
    }

    fn with_euler_angles(&self, euler: Vector3<Real>) -> Self {
        self.with_decomposed(|d| d.set_euler_angles(euler))
    }

    // Skew

    fn skew(&self) -> Skew {
        self.decomposed().skew
    }

    fn with_skew(&self, skew: Skew) -> Self {
        self.with_decomposed(|d| d.skew = skew)
    }

    /// Returns a new Self sheared by `by`.
    fn skewed(&self, by: Skew) -> Self {
        self.appending(&matrix::skew_matrix_from(&by))
    }

    // Perspective

    fn perspective(&self) -> Vector4<Real> {
        self.decomposed().perspective
    }

    fn with_perspective(&self, perspective: Vector4<Real>) -> Self {
        self.with_decomposed(|d| d.perspective = perspective)
    }

    /// Returns a new Self whose projective row is overwritten with `perspective`.
    fn applying_perspective(&self, perspective: Vector4<Real>) -> Self {
        let mut m = self.to_matrix();
        m.set_row(3, &perspective.transpose());
        Self::from_matrix(&m)
    }
}

impl TransformOps for Matrix4<Real> {
    #[inline]
    fn to_matrix(&self) -> Matrix4<Real> {
        *self
    }

    #[inline]
    fn from_matrix(matrix: &Matrix4<Real>) -> Self {
        *matrix
    }
}
