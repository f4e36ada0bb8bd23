//! Unit quaternions for orientation.
//!
//! A quaternion is stored as a scalar part `w` and a vector part `v`. It only
//! represents a rotation while `w² + |v|² = 1`; none of the operations here
//! renormalize on their own, call [`Quaternion::normalize`] after long chains
//! of products.

use super::rotation::RotationMatrix;
use super::scalar::{FLOAT_TOLERANCE, are_equal, sqr};
use super::vec3::Vector3f;
use crate::error::MathError;
use log::warn;
use std::ops::{Mul, MulAssign, Neg, Sub, SubAssign};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion {
    w: f32,
    v: Vector3f,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    pub const IDENTITY: Quaternion = Quaternion::from_parts(1.0, Vector3f::ZERO);

    /// Raw constructor, the caller is responsible for the unit norm.
    pub(crate) const fn from_parts(w: f32, v: Vector3f) -> Self {
        Self { w, v }
    }

    /// Rotation from Euler angles in radians.
    ///
    /// Uses the same axis order as [`RotationMatrix::from_euler`]: `z` (bank)
    /// first, then `x` (pitch), then `y` (heading).
    pub fn from_euler(x_rad: f32, y_rad: f32, z_rad: f32) -> Self {
        let (sp, cp) = (x_rad * 0.5).sin_cos();
        let (sh, ch) = (y_rad * 0.5).sin_cos();
        let (sb, cb) = (z_rad * 0.5).sin_cos();

        Self::from_parts(
            ch * cp * cb + sh * sp * sb,
            Vector3f::new(
                ch * sp * cb + sh * cp * sb,
                sh * cp * cb - ch * sp * sb,
                ch * cp * sb - sh * sp * cb,
            ),
        )
    }

    /// Rotation of `angle` radians around `axis`.
    ///
    /// `axis` must already be unit length, it is not normalized here.
    pub fn from_axis_angle(axis: Vector3f, angle: f32) -> Self {
        debug_assert!(axis.is_unit(), "rotation axis {axis} is not unit length");
        let (s, c) = (angle * 0.5).sin_cos();
        Self::from_parts(c, s * axis)
    }

    pub fn w(&self) -> f32 {
        self.w
    }

    pub fn v(&self) -> Vector3f {
        self.v
    }

    pub fn rotation_angle(&self) -> f32 {
        2.0 * self.w.clamp(-1.0, 1.0).acos()
    }

    /// Unit rotation axis, or the zero vector for the identity rotation.
    pub fn rotation_axis(&self) -> Vector3f {
        // sin²(angle / 2)
        let s = 1.0 - sqr(self.w);
        if are_equal(s, 0.0, FLOAT_TOLERANCE) {
            return Vector3f::ZERO;
        }
        self.v * (1.0 / s.sqrt())
    }

    pub fn dot(&self, other: &Quaternion) -> f32 {
        self.w * other.w + self.v.dot(&other.v)
    }

    /// Scales the rotation angle by `exponent`.
    pub fn pow(&self, exponent: f32) -> Quaternion {
        // sin(angle) is zero for both signs of the identity
        if are_equal(self.w.abs(), 1.0, FLOAT_TOLERANCE) {
            return *self;
        }
        let angle = self.w.acos();
        let new_angle = angle * exponent;
        let mult = new_angle.sin() / angle.sin();
        Self::from_parts(new_angle.cos(), mult * self.v)
    }

    /// Normalized copy, or [`MathError::ZeroQuaternion`] for a zero magnitude.
    pub fn try_normalized(&self) -> Result<Quaternion, MathError> {
        let mag_sqrd = sqr(self.w) + self.v.length_squared();
        if mag_sqrd > 0.0 {
            let mult = 1.0 / mag_sqrd.sqrt();
            Ok(Self::from_parts(self.w * mult, self.v * mult))
        } else {
            Err(MathError::ZeroQuaternion)
        }
    }

    /// Normalizes in place.
    ///
    /// Normalizing a zero quaternion is a programmer error: it panics in
    /// debug builds and leaves the value unchanged in release builds.
    pub fn normalize(&mut self) {
        match self.try_normalized() {
            Ok(normalized) => *self = normalized,
            Err(err) => {
                if cfg!(debug_assertions) {
                    panic!("{err}");
                }
                warn!("{err}, leaving it unchanged");
            }
        }
    }

    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    pub fn approx_eq(&self, other: &Quaternion) -> bool {
        self.approx_eq_within(other, FLOAT_TOLERANCE)
    }

    pub fn approx_eq_within(&self, other: &Quaternion, tolerance: f32) -> bool {
        are_equal(self.w, other.w, tolerance) && self.v.approx_eq_within(&other.v, tolerance)
    }

    /// See [`slerp`].
    pub fn slerp(&self, end: &Quaternion, t: f32) -> Quaternion {
        slerp(self, end, t)
    }
}

/// Conversion picks the largest of the four trace candidates to avoid
/// dividing by a small number.
impl From<RotationMatrix> for Quaternion {
    fn from(r: RotationMatrix) -> Self {
        let (x, y, z) = (r.x_axis(), r.y_axis(), r.z_axis());

        let trace_w = x.x + y.y + z.z;
        let trace_x = x.x - y.y - z.z;
        let trace_y = y.y - x.x - z.z;
        let trace_z = z.z - x.x - y.y;

        let mut biggest_trace = trace_w;
        let mut biggest = 0;
        for (index, trace) in [trace_x, trace_y, trace_z].into_iter().enumerate() {
            if biggest_trace < trace {
                biggest_trace = trace;
                biggest = index + 1;
            }
        }

        let biggest_val = (biggest_trace + 1.0).sqrt() * 0.5;
        let mult = 0.25 / biggest_val;

        match biggest {
            0 => Self::from_parts(
                biggest_val,
                Vector3f::new(
                    (y.z - z.y) * mult,
                    (z.x - x.z) * mult,
                    (x.y - y.x) * mult,
                ),
            ),
            1 => Self::from_parts(
                (y.z - z.y) * mult,
                Vector3f::new(biggest_val, (x.y + y.x) * mult, (z.x + x.z) * mult),
            ),
            2 => Self::from_parts(
                (z.x - x.z) * mult,
                Vector3f::new((x.y + y.x) * mult, biggest_val, (y.z + z.y) * mult),
            ),
            _ => Self::from_parts(
                (x.y - y.x) * mult,
                Vector3f::new((z.x + x.z) * mult, (y.z + z.y) * mult, biggest_val),
            ),
        }
    }
}

/// Conjugate, which is the inverse rotation for a unit quaternion.
impl Neg for Quaternion {
    type Output = Quaternion;

    fn neg(self) -> Quaternion {
        Self::from_parts(self.w, -self.v)
    }
}

/// Hamilton product
impl Mul for Quaternion {
    type Output = Quaternion;

    fn mul(self, that: Quaternion) -> Quaternion {
        Self::from_parts(
            self.w * that.w - self.v.dot(&that.v),
            self.w * that.v + that.w * self.v + self.v.cross(&that.v),
        )
    }
}

impl MulAssign for Quaternion {
    fn mul_assign(&mut self, that: Quaternion) {
        *self = *self * that;
    }
}

/// Relative rotation `-(self) * that`, the rotation taking `self` to `that`.
///
/// This is not a component-wise difference. Rotating vectors by quaternions
/// relies on the same `-q` sign convention.
impl Sub for Quaternion {
    type Output = Quaternion;

    fn sub(self, that: Quaternion) -> Quaternion {
        -self * that
    }
}

impl SubAssign for Quaternion {
    fn sub_assign(&mut self, that: Quaternion) {
        *self = -*self * that;
    }
}

/// Rotates a vector by the sandwich product `(-q * (0, v) * q).v`.
///
/// This turns in the opposite sense to `v * RotationMatrix::from(q)`; the two
/// agree for half turns.
impl Mul<Quaternion> for Vector3f {
    type Output = Vector3f;

    fn mul(self, q: Quaternion) -> Vector3f {
        (-q * Quaternion::from_parts(0.0, self) * q).v
    }
}

impl MulAssign<Quaternion> for Vector3f {
    fn mul_assign(&mut self, q: Quaternion) {
        *self = *self * q;
    }
}

/// Spherical linear interpolation between two unit quaternions.
///
/// `t` outside `[0, 1]` returns the nearest end unmodified. Interpolation
/// always follows the shorter arc.
pub fn slerp(start: &Quaternion, end: &Quaternion, t: f32) -> Quaternion {
    if t <= 0.0 {
        return *start;
    } else if t >= 1.0 {
        return *end;
    }

    let mut cos_angle = start.dot(end);
    let corrected_end = if cos_angle < 0.0 {
        cos_angle = -cos_angle;
        Quaternion::from_parts(-end.w, -end.v)
    } else {
        *end
    };

    // lerp between nearly identical quaternions, sin(angle) is close to zero
    let (start_mult, end_mult) = if are_equal(cos_angle, 1.0, FLOAT_TOLERANCE) {
        (1.0 - t, t)
    } else {
        let sin_angle = (1.0 - sqr(cos_angle)).sqrt();
        let angle = sin_angle.atan2(cos_angle);
        let inv_sin_angle = 1.0 / sin_angle;
        (
            ((1.0 - t) * angle).sin() * inv_sin_angle,
            (t * angle).sin() * inv_sin_angle,
        )
    };

    Quaternion::from_parts(
        start.w * start_mult + corrected_end.w * end_mult,
        start.v * start_mult + corrected_end.v * end_mult,
    )
}
