//! Affine transforms stored as a 3x3 rotation/scale block plus a translation row.
//!
//! Same row-vector convention as [`RotationMatrix`]: `v * M` rotates and
//! scales `v`, then adds the translation. The implicit fourth column is
//! always `[0, 0, 0, 1]`.

use super::matrix4x4::Matrix4x4;
use super::rotation::RotationMatrix;
use super::scalar::{FLOAT_TOLERANCE, are_equal};
use super::vec3::Vector3f;
use crate::error::MathError;
use log::warn;
use std::ops::{Mul, MulAssign};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix4x3 {
    rot: [Vector3f; 3],
    translation: Vector3f,
}

impl Default for Matrix4x3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix4x3 {
    pub const IDENTITY: Matrix4x3 = Matrix4x3::from_rows(
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
            rot: [x_axis, y_axis, z_axis],
            translation,
        }
    }

    /// Pure translation
    pub const fn from_translation(translation: Vector3f) -> Self {
        Self::from_rows(
            Vector3f::UNIT_X,
            Vector3f::UNIT_Y,
            Vector3f::UNIT_Z,
            translation,
        )
    }

    /// Rotation scaled uniformly, no translation
    pub fn from_rotation(r: &RotationMatrix, uniform_scale: f32) -> Self {
        let mut m = Self::IDENTITY;
        m.build(r, uniform_scale);
        m
    }

    /// Rotation with a per-axis scale, placed at `pos`
    pub fn from_rotation_scaled(r: &RotationMatrix, scale: Vector3f, pos: Vector3f) -> Self {
        let mut m = Self::IDENTITY;
        m.build_scaled(r, scale, pos);
        m
    }

    pub fn translation(&self) -> Vector3f {
        self.translation
    }

    /// The rotation/scale rows, x axis first.
    pub fn rotation_rows(&self) -> [Vector3f; 3] {
        self.rot
    }

    pub fn set_identity(&mut self) {
        *self = Self::IDENTITY;
    }

    pub fn zero_translation(&mut self) {
        self.translation = Vector3f::ZERO;
    }

    pub fn set_translation(&mut self, translation: Vector3f) {
        self.translation = translation;
    }

    /// Sets the translation and resets the rotation block to identity.
    pub fn setup_translation(&mut self, translation: Vector3f) {
        *self = Self::from_translation(translation);
    }

    /// Replaces the rotation block with `r` scaled by `uniform_scale` and
    /// clears the translation.
    pub fn build(&mut self, r: &RotationMatrix, uniform_scale: f32) {
        self.rot = [
            r.x_axis() * uniform_scale,
            r.y_axis() * uniform_scale,
            r.z_axis() * uniform_scale,
        ];
        self.zero_translation();
    }

    /// Replaces the whole transform: rows of `r` scaled per axis, then `pos`.
    pub fn build_scaled(&mut self, r: &RotationMatrix, scale: Vector3f, pos: Vector3f) {
        self.rot = [
            r.x_axis() * scale.x,
            r.y_axis() * scale.y,
            r.z_axis() * scale.z,
        ];
        self.set_translation(pos);
    }

    /// Transforms a point: rotation/scale, then translation.
    pub fn transform_point(&self, v: Vector3f) -> Vector3f {
        self.transform_vector(v) + self.translation
    }

    /// Transforms a direction, ignoring the translation.
    pub fn transform_vector(&self, v: Vector3f) -> Vector3f {
        let [r0, r1, r2] = self.rot;
        Vector3f::new(
            v.x * r0.x + v.y * r1.x + v.z * r2.x,
            v.x * r0.y + v.y * r1.y + v.z * r2.y,
            v.x * r0.z + v.y * r1.z + v.z * r2.z,
        )
    }

    /// Cofactor expansion of the rotation/scale block along its first row.
    ///
    /// The translation does not contribute since the last column is
    /// `[0, 0, 0, 1]`.
    pub fn determinant(&self) -> f32 {
        let [r0, r1, r2] = self.rot;
        r0.x * (r1.y * r2.z - r1.z * r2.y) - r0.y * (r1.x * r2.z - r1.z * r2.x)
            + r0.z * (r1.x * r2.y - r1.y * r2.x)
    }

    /// Inverse transform, or [`MathError::SingularMatrix`] when the
    /// determinant is within tolerance of zero.
    pub fn try_inverse(&self) -> Result<Matrix4x3, MathError> {
        let det = self.determinant();
        if are_equal(det, 0.0, FLOAT_TOLERANCE) {
            return Err(MathError::SingularMatrix { determinant: det });
        }
        Ok(self.adjugate_inverse(det))
    }

    /// Inverse transform.
    ///
    /// Inverting a singular matrix is a programmer error: it panics in debug
    /// builds and returns an undefined result in release builds.
    pub fn inverse(&self) -> Matrix4x3 {
        let det = self.determinant();
        if are_equal(det, 0.0, FLOAT_TOLERANCE) {
            let err = MathError::SingularMatrix { determinant: det };
            if cfg!(debug_assertions) {
                panic!("{err}");
            }
            warn!("{err}, the inverse is undefined");
        }
        self.adjugate_inverse(det)
    }

    fn adjugate_inverse(&self, det: f32) -> Matrix4x3 {
        let inv_det = 1.0 / det;
        let [r0, r1, r2] = self.rot;
        // cofactors of a row-major block are the cross products of the other two rows
        let c0 = r1.cross(&r2) * inv_det;
        let c1 = r2.cross(&r0) * inv_det;
        let c2 = r0.cross(&r1) * inv_det;

        let inverse_rot = Matrix4x3::from_rows(
            Vector3f::new(c0.x, c1.x, c2.x),
            Vector3f::new(c0.y, c1.y, c2.y),
            Vector3f::new(c0.z, c1.z, c2.z),
            Vector3f::ZERO,
        );
        let translation = -inverse_rot.transform_vector(self.translation);
        Matrix4x3 {
            translation,
            ..inverse_rot
        }
    }

    pub fn approx_eq(&self, other: &Matrix4x3) -> bool {
        self.approx_eq_within(other, FLOAT_TOLERANCE)
    }

    pub fn approx_eq_within(&self, other: &Matrix4x3, tolerance: f32) -> bool {
        self.rot
            .iter()
            .zip(other.rot.iter())
            .all(|(a, b)| a.approx_eq_within(b, tolerance))
            && self.translation.approx_eq_within(&other.translation, tolerance)
    }
}

impl From<Matrix4x4> for Matrix4x3 {
    fn from(m: Matrix4x4) -> Self {
        let [x_axis, y_axis, z_axis] = m.rotation_rows();
        Matrix4x3::from_rows(x_axis, y_axis, z_axis, m.translation())
    }
}

/// `A * B` applies `A` first, then `B`.
impl Mul for Matrix4x3 {
    type Output = Matrix4x3;

    fn mul(self, m: Matrix4x3) -> Matrix4x3 {
        let [r0, r1, r2] = self.rot;
        Matrix4x3::from_rows(
            m.transform_vector(r0),
            m.transform_vector(r1),
            m.transform_vector(r2),
            m.transform_point(self.translation),
        )
    }
}

impl MulAssign for Matrix4x3 {
    fn mul_assign(&mut self, m: Matrix4x3) {
        *self = *self * m;
    }
}

impl Mul<Matrix4x3> for Vector3f {
    type Output = Vector3f;

    fn mul(self, m: Matrix4x3) -> Vector3f {
        m.transform_point(self)
    }
}

impl MulAssign<Matrix4x3> for Vector3f {
    fn mul_assign(&mut self, m: Matrix4x3) {
        *self = m.transform_point(*self);
    }
}
