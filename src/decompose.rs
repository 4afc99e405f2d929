//! Decomposition of a 4×4 transform into perspective, translation, rotation,
//! skew and scale, and the recomposition back into a matrix.
//!
//! The extraction is the single-pass Gram-Schmidt approach used by browser
//! engines for CSS transform animation (WebKit's `TransformationMatrix`):
//!
//! 1. normalize the matrix by `M[3][3]`,
//! 2. solve the projective row against the perspective-free matrix,
//! 3. read the translation column,
//! 4. orthogonalize the upper 3×3 block column by column, collecting scale and
//!    shear along the way and flipping reflections into a negative scale,
//! 5. convert the remaining orthonormal basis into a quaternion.
//!
//! [`recompose`] undoes it by right-multiplying, in this exact order,
//! perspective → translate → rotate → skew → scale.
//!
//! Matrix entries written `M[i][j]` below are column `i`, row `j`, which is
//! `m[(j, i)]` in `nalgebra` indexing.

use crate::errors::TransformError;
use crate::float_types::{Real, tolerance};
use crate::matrix;
use crate::quaternion;
use crate::vector::{self, Skew};
use nalgebra::{Matrix4, UnitQuaternion, Vector3, Vector4};

/// The independent geometric components of a 4×4 transform.
///
/// This is a plain value: every [`decompose`] produces a fresh one and editing a
/// field never touches the matrix it came from. Call [`recompose`] (or
/// [`DecomposedTransform::recompose`]) to get a matrix back.
///
/// Euler angles are not stored; [`euler_angles`](Self::euler_angles) derives
/// them from `rotation` so both views of the rotation always agree.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecomposedTransform {
    /// Projective row `(p1, p2, p3, p4)`; `(0, 0, 0, 1)` for affine transforms.
    pub perspective: Vector4<Real>,
    pub translation: Vector3<Real>,
    /// Proper rotation (determinant +1); reflections live in `scale`.
    pub rotation: UnitQuaternion<Real>,
    pub skew: Skew,
    /// Per-axis scale, negative when the transform mirrors.
    pub scale: Vector3<Real>,
}

impl Default for DecomposedTransform {
    /// The components of the identity matrix.
    fn default() -> Self {
        DecomposedTransform {
            perspective: vector::identity_perspective(),
            translation: Vector3::zeros(),
            rotation: UnitQuaternion::identity(),
            skew: Skew::zero(),
            scale: Vector3::repeat(1.0),
        }
    }
}

impl DecomposedTransform {
    /// The value a degenerate matrix decomposes to: every component zeroed except
    /// the rotation, which stays the identity. It recomposes to the zero matrix.
    pub fn zero() -> Self {
        DecomposedTransform {
            perspective: Vector4::zeros(),
            translation: Vector3::zeros(),
            rotation: UnitQuaternion::identity(),
            skew: Skew::zero(),
            scale: Vector3::zeros(),
        }
    }

    /// Shorthand for [`decompose`].
    pub fn from_matrix(m: &Matrix4<Real>) -> Self {
        decompose(m)
    }

    /// Shorthand for [`recompose`].
    pub fn recompose(&self) -> Matrix4<Real> {
        recompose(self)
    }

    /// XYZ Euler angles in radians, derived from `rotation`.
    pub fn euler_angles(&self) -> Vector3<Real> {
        quaternion::euler_angles(&self.rotation)
    }

    /// Replaces the rotation with the one described by XYZ Euler angles.
    pub fn set_euler_angles(&mut self, euler: Vector3<Real>) {
        self.rotation = quaternion::from_euler_angles(&euler);
    }

    pub fn with_translation(mut self, translation: Vector3<Real>) -> Self {
        self.translation = translation;
        self
    }

    pub fn with_scale(mut self, scale: Vector3<Real>) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_rotation(mut self, rotation: UnitQuaternion<Real>) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_euler_angles(mut self, euler: Vector3<Real>) -> Self {
        self.set_euler_angles(euler);
        self
    }

    pub fn with_skew(mut self, skew: Skew) -> Self {
        self.skew = skew;
        self
    }

    pub fn with_perspective(mut self, perspective: Vector4<Real>) -> Self {
        self.perspective = perspective;
        self
    }

    /// `true` when no component carries `NaN` or an infinity.
    pub fn is_finite(&self) -> bool {
        self.perspective.iter().all(|c| c.is_finite())
            && self.translation.iter().all(|c| c.is_finite())
            && quaternion::is_finite(&self.rotation)
            && self.skew.is_finite()
            && self.scale.iter().all(|c| c.is_finite())
    }
}

/// Decomposes `m` into its components.
///
/// This never fails. A matrix whose perspective block is singular yields
/// [`DecomposedTransform::zero`]; a rank-deficient upper 3×3 block yields a value
/// whose skew (and possibly rotation) is `NaN`/infinite. Use [`try_decompose`] to
/// get those cases as errors instead.
///
/// # Example
/// ```
/// # use decomposed::{decompose::decompose, matrix::translation_matrix};
/// # use nalgebra::Vector3;
/// let m = translation_matrix(&Vector3::new(2.0, 3.0, 4.0));
/// let d = decompose(&m);
/// assert_eq!(d.translation, Vector3::new(2.0, 3.0, 4.0));
/// assert_eq!(d.scale, Vector3::new(1.0, 1.0, 1.0));
/// ```
pub fn decompose(m: &Matrix4<Real>) -> DecomposedTransform {
    decompose_pass(m).unwrap_or_else(DecomposedTransform::zero)
}

/// Like [`decompose`], but reports degenerate input.
///
/// * [`TransformError::SingularPerspectiveBlock`] when the perspective-free matrix
///   has a zero determinant.
/// * [`TransformError::DegenerateScale`] when a scale factor is within the crate
///   [`tolerance`] of zero or the extracted skew is not finite.
pub fn try_decompose(m: &Matrix4<Real>) -> Result<DecomposedTransform, TransformError> {
    let decomposed = decompose_pass(m).ok_or(TransformError::SingularPerspectiveBlock)?;

    let eps = tolerance();
    if decomposed.scale.iter().any(|s| s.is_nan() || s.abs() < eps) || !decomposed.skew.is_finite() {
        return Err(TransformError::DegenerateScale {
            scale: decomposed.scale,
        });
    }
    Ok(decomposed)
}

/// `None` when the perspective block is singular.
fn decompose_pass(m: &Matrix4<Real>) -> Option<DecomposedTransform> {
    let mut local = *m;

    // Normalize the matrix.
    let w = local[(3, 3)];
    if w != 0.0 {
        local = matrix::scale_by_factor(&local, 1.0 / w);
    }

    // The perspective-free matrix solves for perspective and also tests the
    // upper 3×3 block for singularity.
    let mut perspective_matrix = local;
    perspective_matrix.set_row(3, &Vector4::new(0.0, 0.0, 0.0, 1.0).transpose());

    if matrix::determinant(&perspective_matrix) == 0.0 {
        return None;
    }

    // First, isolate perspective.
    let perspective = if local[(3, 0)] != 0.0 || local[(3, 1)] != 0.0 || local[(3, 2)] != 0.0 {
        let right_hand_side = matrix::perspective_row(&local);
        let inverse = matrix::inverse(&perspective_matrix).ok()?;
        let perspective = matrix::transpose(&inverse) * right_hand_side;

        local.set_row(3, &Vector4::new(0.0, 0.0, 0.0, 1.0).transpose());
        perspective
    } else {
        vector::identity_perspective()
    };

    // Next take care of translation.
    let translation = Vector3::new(local[(0, 3)], local[(1, 3)], local[(2, 3)]);

    // Now get scale and shear from the basis vectors of the upper 3×3 block.
    let mut row = [
        local.fixed_view::<3, 1>(0, 0).into_owned(),
        local.fixed_view::<3, 1>(0, 1).into_owned(),
        local.fixed_view::<3, 1>(0, 2).into_owned(),
    ];

    // X scale factor, normalize first row.
    let mut scale = Vector3::new(row[0].norm(), 0.0, 0.0);
    row[0] /= scale.x;

    // XY shear, make the 2nd row orthogonal to the 1st.
    let mut skew = Skew::new(row[0].dot(&row[1]), 0.0, 0.0);
    row[1] = vector::linear_combination(1.0, &row[1], -skew.xy, &row[0]);

    // Y scale, normalize the 2nd row.
    scale.y = row[1].norm();
    row[1] /= scale.y;
    skew.xy /= scale.y;

    // XZ and YZ shears, orthogonalize the 3rd row.
    skew.xz = row[0].dot(&row[2]);
    row[2] = vector::linear_combination(1.0, &row[2], -skew.xz, &row[0]);
    skew.yz = row[1].dot(&row[2]);
    row[2] = vector::linear_combination(1.0, &row[2], -skew.yz, &row[1]);

    // Z scale, normalize the 3rd row.
    scale.z = row[2].norm();
    row[2] /= scale.z;
    skew.xz /= scale.z;
    skew.yz /= scale.z;

    // The rows are orthonormal now. A negative determinant means a coordinate
    // system flip: move it into the scale so the rotation stays proper.
    if matrix::determinant3(&row[0], &row[1], &row[2]) < 0.0 {
        scale = -scale;
        for r in row.iter_mut() {
            *r = -*r;
        }
    }

    let rotation = quaternion::from_rotation_axes(&row[0], &row[1], &row[2]);

    Some(DecomposedTransform {
        perspective,
        translation,
        rotation,
        skew,
        scale,
    })
}

/// Builds the matrix described by `decomposed`.
///
/// Starting from the identity, the components are applied by right-multiplication
/// in a fixed order: perspective, translation, rotation, skew, scale. A rotation
/// with non-finite components is skipped.
pub fn recompose(decomposed: &DecomposedTransform) -> Matrix4<Real> {
    let mut m = matrix::perspective_matrix(&decomposed.perspective);

    m *= matrix::translation_matrix(&decomposed.translation);

    if quaternion::is_finite(&decomposed.rotation) {
        m *= matrix::rotation_matrix(&decomposed.rotation);
    }

    m *= matrix::skew_matrix_from(&decomposed.skew);

    m * matrix::scale_matrix(&decomposed.scale)
}

/// Per-component tolerances for comparing two [`DecomposedTransform`]s.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct DecomposedEpsilon {
    pub perspective: Real,
    pub translation: Real,
    /// Applied to the quaternion coordinates; `q` and `-q` compare equal.
    pub rotation: Real,
    pub skew: Real,
    pub scale: Real,
}

impl DecomposedEpsilon {
    /// The same tolerance for every component.
    pub const fn uniform(epsilon: Real) -> Self {
        DecomposedEpsilon {
            perspective: epsilon,
            translation: epsilon,
            rotation: epsilon,
            skew: epsilon,
            scale: epsilon,
        }
    }
}

impl From<Real> for DecomposedEpsilon {
    fn from(epsilon: Real) -> Self {
        DecomposedEpsilon::uniform(epsilon)
    }
}

/// `q` and `-q` are the same rotation; compare against whichever is closer.
fn same_rotation(
    a: &UnitQuaternion<Real>,
    b: &UnitQuaternion<Real>,
    check: impl Fn(&Vector4<Real>, &Vector4<Real>) -> bool,
) -> bool {
    let a = &a.coords;
    let b = &b.coords;
    check(a, b) || check(a, &-b)
}

impl approx::AbsDiffEq for DecomposedTransform {
    type Epsilon = DecomposedEpsilon;

    fn default_epsilon() -> Self::Epsilon {
        DecomposedEpsilon::uniform(tolerance())
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        approx::AbsDiffEq::abs_diff_eq(&self.perspective, &other.perspective, epsilon.perspective)
            && approx::AbsDiffEq::abs_diff_eq(&self.translation, &other.translation, epsilon.translation)
            && same_rotation(&self.rotation, &other.rotation, |a, b| {
                approx::AbsDiffEq::abs_diff_eq(a, b, epsilon.rotation)
            })
            && approx::AbsDiffEq::abs_diff_eq(&self.skew, &other.skew, epsilon.skew)
            && approx::AbsDiffEq::abs_diff_eq(&self.scale, &other.scale, epsilon.scale)
    }
}

impl approx::RelativeEq for DecomposedTransform {
    fn default_max_relative() -> Self::Epsilon {
        DecomposedEpsilon::uniform(<Real as approx::RelativeEq>::default_max_relative())
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        approx::RelativeEq::relative_eq(
            &self.perspective,
            &other.perspective,
            epsilon.perspective,
            max_relative.perspective,
        ) && approx::RelativeEq::relative_eq(
            &self.translation,
            &other.translation,
            epsilon.translation,
            max_relative.translation,
        ) && same_rotation(&self.rotation, &other.rotation, |a, b| {
            approx::RelativeEq::relative_eq(a, b, epsilon.rotation, max_relative.rotation)
        }) && approx::RelativeEq::relative_eq(
            &self.skew,
            &other.skew,
            epsilon.skew,
            max_relative.skew,
        ) && approx::RelativeEq::relative_eq(
            &self.scale,
            &other.scale,
            epsilon.scale,
            max_relative.scale,
        )
    }
}

impl approx::UlpsEq for DecomposedTransform {
    fn default_max_ulps() -> u32 {
        <Vector4<Real> as approx::UlpsEq>::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        approx::UlpsEq::ulps_eq(&self.perspective, &other.perspective, epsilon.perspective, max_ulps)
            && approx::UlpsEq::ulps_eq(&self.translation, &other.translation, epsilon.translation, max_ulps)
            && same_rotation(&self.rotation, &other.rotation, |a, b| {
                approx::UlpsEq::ulps_eq(a, b, epsilon.rotation, max_ulps)
            })
            && approx::UlpsEq::ulps_eq(&self.skew, &other.skew, epsilon.skew, max_ulps)
            && approx::UlpsEq::ulps_eq(&self.scale, &other.scale, epsilon.scale, max_ulps)
    }
}
