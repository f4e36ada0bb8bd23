//! Affine transforms in homogeneous form for handing to a graphics API.
//!
//! Holds the same transform as [`Matrix4x3`] with an explicit fourth column.
//! The `w` of the three rotation rows is always `0` and the `w` of the
//! translation row is always `1`; every constructor and mutator
//! re-establishes this, so the fields are never exposed mutably.

use super::matrix4x3::Matrix4x3;
use super::rotation::RotationMatrix;
use super::scalar::FLOAT_TOLERANCE;
use super::vec3::Vector3f;
use super::vec4::Vector4f;
use crate::error::MathError;
use bytemuck::{Pod, Zeroable};
use std::ops::{Mul, MulAssign};

/// Row-major 4x4 matrix
///
/// Layout:
/// ```text
/// [ i.x  i.y  i.z  0 ]
/// [ j.x  j.y  j.z  0 ]
/// [ k.x  k.y  k.z  0 ]
/// [ t.x  t.y  t.z  1 ]
/// ```
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Matrix4x3", into = "Matrix4x3")
)]
pub struct Matrix4x4 {
    i: Vector4f,
    j: Vector4f,
    k: Vector4f,
    translation: Vector4f,
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix4x4 {
    pub const IDENTITY: Matrix4x4 = Matrix4x4::from_rows(
        Vector3f::UNIT_X,
        Vector3f::UNIT_Y,
        Vector3f::UNIT_Z,
        Vector3f::ZERO,
    );

    pub(crate) const fn from_rows(
        x_axis: Vector3f,
        y_axis: Vector3f,
        z_axis: Vector3f,
        translation: Vector3f,
    ) -> Self {
        Self {
            i: Vector4f::direction(x_axis),
            j: Vector4f::direction(y_axis),
            k: Vector4f::direction(z_axis),
            translation: Vector4f::point(translation),
        }
    }

    pub const fn from_translation(translation: Vector3f) -> Self {
        Self::from_rows(
            Vector3f::UNIT_X,
            Vector3f::UNIT_Y,
            Vector3f::UNIT_Z,
            translation,
        )
    }

    pub fn from_rotation(r: &RotationMatrix, uniform_scale: f32) -> Self {
        Matrix4x3::from_rotation(r, uniform_scale).into()
    }

    pub fn from_rotation_scaled(r: &RotationMatrix, scale: Vector3f, pos: Vector3f) -> Self {
        Matrix4x3::from_rotation_scaled(r, scale, pos).into()
    }

    pub fn translation(&self) -> Vector3f {
        self.translation.truncate()
    }

    /// The rotation/scale rows without their `w`, x axis first.
    pub fn rotation_rows(&self) -> [Vector3f; 3] {
        [self.i.truncate(), self.j.truncate(), self.k.truncate()]
    }

    /// Flat row-major view: `i, j, k, translation`, four floats each.
    pub fn adr(&self) -> &[f32; 16] {
        bytemuck::cast_ref(self)
    }

    pub fn set_identity(&mut self) {
        *self = Self::IDENTITY;
    }

    pub fn zero_translation(&mut self) {
        self.translation = Vector4f::point(Vector3f::ZERO);
    }

    pub fn set_translation(&mut self, translation: Vector3f) {
        self.translation = Vector4f::point(translation);
    }

    /// Sets the translation and resets the rotation block to identity.
    pub fn setup_translation(&mut self, translation: Vector3f) {
        *self = Self::from_translation(translation);
    }

    /// See [`Matrix4x3::build`].
    pub fn build(&mut self, r: &RotationMatrix, uniform_scale: f32) {
        *self = Self::from_rotation(r, uniform_scale);
    }

    /// See [`Matrix4x3::build_scaled`].
    pub fn build_scaled(&mut self, r: &RotationMatrix, scale: Vector3f, pos: Vector3f) {
        *self = Self::from_rotation_scaled(r, scale, pos);
    }

    pub fn transform_point(&self, v: Vector3f) -> Vector3f {
        Matrix4x3::from(*self).transform_point(v)
    }

    pub fn transform_vector(&self, v: Vector3f) -> Vector3f {
        Matrix4x3::from(*self).transform_vector(v)
    }

    /// See [`Matrix4x3::determinant`].
    pub fn determinant(&self) -> f32 {
        Matrix4x3::from(*self).determinant()
    }

    /// See [`Matrix4x3::try_inverse`].
    pub fn try_inverse(&self) -> Result<Matrix4x4, MathError> {
        Matrix4x3::from(*self).try_inverse().map(Matrix4x4::from)
    }

    /// See [`Matrix4x3::inverse`].
    pub fn inverse(&self) -> Matrix4x4 {
        Matrix4x3::from(*self).inverse().into()
    }

    pub fn approx_eq(&self, other: &Matrix4x4) -> bool {
        self.approx_eq_within(other, FLOAT_TOLERANCE)
    }

    pub fn approx_eq_within(&self, other: &Matrix4x4, tolerance: f32) -> bool {
        Matrix4x3::from(*self).approx_eq_within(&Matrix4x3::from(*other), tolerance)
    }
}

impl From<Matrix4x3> for Matrix4x4 {
    fn from(m: Matrix4x3) -> Self {
        let [x_axis, y_axis, z_axis] = m.rotation_rows();
        Matrix4x4::from_rows(x_axis, y_axis, z_axis, m.translation())
    }
}

/// `A * B` applies `A` first, then `B`.
impl Mul for Matrix4x4 {
    type Output = Matrix4x4;

    fn mul(self, m: Matrix4x4) -> Matrix4x4 {
        (Matrix4x3::from(self) * Matrix4x3::from(m)).into()
    }
}

impl MulAssign for Matrix4x4 {
    fn mul_assign(&mut self, m: Matrix4x4) {
        *self = *self * m;
    }
}

impl Mul<Matrix4x4> for Vector3f {
    type Output = Vector3f;

    fn mul(self, m: Matrix4x4) -> Vector3f {
        m.transform_point(self)
    }
}

impl MulAssign<Matrix4x4> for Vector3f {
    fn mul_assign(&mut self, m: Matrix4x4) {
        *self = m.transform_point(*self);
    }
}

/// Full homogeneous product, a direction (`w = 0`) is not translated.
impl Mul<Matrix4x4> for Vector4f {
    type Output = Vector4f;

    fn mul(self, m: Matrix4x4) -> Vector4f {
        let Matrix4x4 { i, j, k, translation: t } = m;
        Vector4f::new(
            self.x * i.x + self.y * j.x + self.z * k.x + self.w * t.x,
            self.x * i.y + self.y * j.y + self.z * k.y + self.w * t.y,
            self.x * i.z + self.y * j.z + self.z * k.z + self.w * t.z,
            self.x * i.w + self.y * j.w + self.z * k.w + self.w * t.w,
        )
    }
}

impl MulAssign<Matrix4x4> for Vector4f {
    fn mul_assign(&mut self, m: Matrix4x4) {
        *self = *self * m;
    }
}
