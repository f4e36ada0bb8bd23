//! Pure 3x3 rotation matrices.
//!
//! Rows are the images of the x, y and z axes and vectors are rows too, so a
//! vector is rotated by `v * R`. The rows must stay orthonormal; repeated
//! products slowly lose that property, see [`RotationMatrix::measure_creep`]
//! and [`RotationMatrix::orthogonalize`].

use super::quaternion::Quaternion;
use super::scalar::{FLOAT_TOLERANCE, sqr};
use super::vec3::Vector3f;
use std::ops::{Mul, MulAssign};
use tracing::trace;

const ORTHOGONALIZE_FACTOR: f32 = 0.25;
const ORTHOGONALIZE_ITERATIONS: usize = 10;

/// Principal axes for [`RotationMatrix::from_principal_axis`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationAxis {
    X,
    Y,
    Z,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationMatrix {
    x_axis: Vector3f,
    y_axis: Vector3f,
    z_axis: Vector3f,
}

impl Default for RotationMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl RotationMatrix {
    pub const IDENTITY: RotationMatrix =
        RotationMatrix::from_rows(Vector3f::UNIT_X, Vector3f::UNIT_Y, Vector3f::UNIT_Z);

    /// Builds a matrix straight from its rows.
    ///
    /// The caller is responsible for the rows being orthonormal, drift can be
    /// corrected afterwards with [`RotationMatrix::orthogonalize`].
    pub const fn from_rows(x_axis: Vector3f, y_axis: Vector3f, z_axis: Vector3f) -> Self {
        Self {
            x_axis,
            y_axis,
            z_axis,
        }
    }

    /// Rotation from Euler angles in radians, applied `z`, then `x`, then `y`.
    pub fn from_euler(x_rad: f32, y_rad: f32, z_rad: f32) -> Self {
        let (sx, cx) = x_rad.sin_cos();
        let (sy, cy) = y_rad.sin_cos();
        let (sz, cz) = z_rad.sin_cos();

        Self::from_rows(
            Vector3f::new(cy * cz + sy * sx * sz, sz * cx, -sy * cz + cy * sx * sz),
            Vector3f::new(-cy * sz + sy * sx * cz, cz * cx, sz * sy + cy * sx * cz),
            Vector3f::new(sy * cx, -sx, cy * cx),
        )
    }

    /// Rotation of `angle` radians around `axis` (Rodrigues' formula).
    ///
    /// `axis` must be unit length.
    pub fn from_axis_angle(axis: Vector3f, angle: f32) -> Self {
        debug_assert!(axis.is_unit(), "rotation axis {axis} is not unit length");
        let (sine, cosine) = angle.sin_cos();
        let one_minus_cos = 1.0 - cosine;

        let xy_1m_cos = axis.x * axis.y * one_minus_cos;
        let xz_1m_cos = axis.x * axis.z * one_minus_cos;
        let yz_1m_cos = axis.y * axis.z * one_minus_cos;
        let x_sin = axis.x * sine;
        let y_sin = axis.y * sine;
        let z_sin = axis.z * sine;

        Self::from_rows(
            Vector3f::new(
                sqr(axis.x) * one_minus_cos + cosine,
                xy_1m_cos + z_sin,
                xz_1m_cos - y_sin,
            ),
            Vector3f::new(
                xy_1m_cos - z_sin,
                sqr(axis.y) * one_minus_cos + cosine,
                yz_1m_cos + x_sin,
            ),
            Vector3f::new(
                xz_1m_cos + y_sin,
                yz_1m_cos - x_sin,
                sqr(axis.z) * one_minus_cos + cosine,
            ),
        )
    }

    /// Rotation of `angle` radians around one of the principal axes.
    pub fn from_principal_axis(axis: RotationAxis, angle: f32) -> Self {
        let (sine, cosine) = angle.sin_cos();
        match axis {
            RotationAxis::X => Self::from_rows(
                Vector3f::UNIT_X,
                Vector3f::new(0.0, cosine, sine),
                Vector3f::new(0.0, -sine, cosine),
            ),
            RotationAxis::Y => Self::from_rows(
                Vector3f::new(cosine, 0.0, -sine),
                Vector3f::UNIT_Y,
                Vector3f::new(sine, 0.0, cosine),
            ),
            RotationAxis::Z => Self::from_rows(
                Vector3f::new(cosine, sine, 0.0),
                Vector3f::new(-sine, cosine, 0.0),
                Vector3f::UNIT_Z,
            ),
        }
    }

    pub fn x_axis(&self) -> Vector3f {
        self.x_axis
    }

    pub fn y_axis(&self) -> Vector3f {
        self.y_axis
    }

    pub fn z_axis(&self) -> Vector3f {
        self.z_axis
    }

    /// The transpose, which is the inverse of an orthonormal matrix.
    pub fn inverse(&self) -> RotationMatrix {
        Self::from_rows(
            Vector3f::new(self.x_axis.x, self.y_axis.x, self.z_axis.x),
            Vector3f::new(self.x_axis.y, self.y_axis.y, self.z_axis.y),
            Vector3f::new(self.x_axis.z, self.y_axis.z, self.z_axis.z),
        )
    }

    /// Transposes in place.
    pub fn invert(&mut self) -> &mut Self {
        std::mem::swap(&mut self.x_axis.y, &mut self.y_axis.x);
        std::mem::swap(&mut self.x_axis.z, &mut self.z_axis.x);
        std::mem::swap(&mut self.y_axis.z, &mut self.z_axis.y);
        self
    }

    pub fn determinant(&self) -> f32 {
        self.x_axis.dot(&self.y_axis.cross(&self.z_axis))
    }

    /// Distance from orthonormality, zero for a perfect rotation.
    ///
    /// Sum of the squared row lengths plus the pairwise dot products of the
    /// rows, minus 3.
    pub fn measure_creep(&self) -> f32 {
        self.x_axis.length_squared()
            + self.y_axis.length_squared()
            + self.z_axis.length_squared()
            + self.x_axis.dot(&self.y_axis)
            + self.x_axis.dot(&self.z_axis)
            + self.y_axis.dot(&self.z_axis)
            - 3.0
    }

    /// Pushes the rows back towards mutual orthogonality.
    ///
    /// Runs a fixed 10 passes, each moving every row away from its shared
    /// component with the other two rows by a factor of 0.25. Row lengths are
    /// not renormalized.
    pub fn orthogonalize(&mut self) {
        let creep_before = self.measure_creep();

        for _ in 0..ORTHOGONALIZE_ITERATIONS {
            let i = self.x_axis;
            let j = self.y_axis;
            let k = self.z_axis;
            let i_dot_j = i.dot(&j);
            let i_dot_k = i.dot(&k);
            let j_dot_k = j.dot(&k);
            let i_inv_mag_sqrd = 1.0 / i.length_squared();
            let j_inv_mag_sqrd = 1.0 / j.length_squared();
            let k_inv_mag_sqrd = 1.0 / k.length_squared();

            self.x_axis = i
                - ORTHOGONALIZE_FACTOR * i_dot_j * j_inv_mag_sqrd * j
                - ORTHOGONALIZE_FACTOR * i_dot_k * k_inv_mag_sqrd * k;
            self.y_axis = j
                - ORTHOGONALIZE_FACTOR * i_dot_j * i_inv_mag_sqrd * i
                - ORTHOGONALIZE_FACTOR * j_dot_k * k_inv_mag_sqrd * k;
            self.z_axis = k
                - ORTHOGONALIZE_FACTOR * i_dot_k * i_inv_mag_sqrd * i
                - ORTHOGONALIZE_FACTOR * j_dot_k * j_inv_mag_sqrd * j;
        }

        trace!(
            creep_before,
            creep_after = self.measure_creep(),
            "orthogonalized rotation matrix"
        );
    }

    pub fn approx_eq(&self, other: &RotationMatrix) -> bool {
        self.approx_eq_within(other, FLOAT_TOLERANCE)
    }

    pub fn approx_eq_within(&self, other: &RotationMatrix, tolerance: f32) -> bool {
        self.x_axis.approx_eq_within(&other.x_axis, tolerance)
            && self.y_axis.approx_eq_within(&other.y_axis, tolerance)
            && self.z_axis.approx_eq_within(&other.z_axis, tolerance)
    }
}

impl From<Quaternion> for RotationMatrix {
    fn from(q: Quaternion) -> Self {
        let (w, v) = (q.w(), q.v());
        let dbl_x_sqr = 2.0 * sqr(v.x);
        let dbl_y_sqr = 2.0 * sqr(v.y);
        let dbl_z_sqr = 2.0 * sqr(v.z);
        let dbl_xy = 2.0 * v.x * v.y;
        let dbl_xz = 2.0 * v.x * v.z;
        let dbl_xw = 2.0 * v.x * w;
        let dbl_yz = 2.0 * v.y * v.z;
        let dbl_yw = 2.0 * v.y * w;
        let dbl_zw = 2.0 * v.z * w;

        Self::from_rows(
            Vector3f::new(1.0 - dbl_y_sqr - dbl_z_sqr, dbl_xy + dbl_zw, dbl_xz - dbl_yw),
            Vector3f::new(dbl_xy - dbl_zw, 1.0 - dbl_x_sqr - dbl_z_sqr, dbl_yz + dbl_xw),
            Vector3f::new(dbl_xz + dbl_yw, dbl_yz - dbl_xw, 1.0 - dbl_x_sqr - dbl_y_sqr),
        )
    }
}

/// `A * B` applies `A` first, then `B`.
///
/// Each entry is a row of `A` dotted with a row of `B`'s transpose, which for
/// an orthonormal `B` is also its inverse.
impl Mul for RotationMatrix {
    type Output = RotationMatrix;

    fn mul(self, that: RotationMatrix) -> RotationMatrix {
        let that_inv = that.inverse();
        let row = |r: Vector3f| {
            Vector3f::new(
                r.dot(&that_inv.x_axis),
                r.dot(&that_inv.y_axis),
                r.dot(&that_inv.z_axis),
            )
        };
        Self::from_rows(row(self.x_axis), row(self.y_axis), row(self.z_axis))
    }
}

impl MulAssign for RotationMatrix {
    fn mul_assign(&mut self, that: RotationMatrix) {
        *self = *self * that;
    }
}

impl Mul<RotationMatrix> for Vector3f {
    type Output = Vector3f;

    fn mul(self, r: RotationMatrix) -> Vector3f {
        let rt = r.inverse();
        Vector3f::new(self.dot(&rt.x_axis), self.dot(&rt.y_axis), self.dot(&rt.z_axis))
    }
}

impl MulAssign<RotationMatrix> for Vector3f {
    fn mul_assign(&mut self, r: RotationMatrix) {
        *self = *self * r;
    }
}
