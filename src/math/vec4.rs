//! Homogeneous four component vector.
//!
//! `w` tags the vector as a point (`1.0`) or a direction (`0.0`). Arithmetic,
//! dot products, lengths and normalization only look at `x, y, z`; the
//! result keeps the `w` of the left operand.

use super::scalar::{FLOAT_TOLERANCE, are_equal};
use super::vec3::Vector3f;
use bytemuck::{Pod, Zeroable};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(test, derive(fake::Dummy))]
pub struct Vector4f {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vector4f {
    pub const ZERO: Vector4f = Vector4f::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// A point, `w = 1`
    pub const fn point(v: Vector3f) -> Self {
        Self::new(v.x, v.y, v.z, 1.0)
    }

    /// A direction, `w = 0`
    pub const fn direction(v: Vector3f) -> Self {
        Self::new(v.x, v.y, v.z, 0.0)
    }

    /// Drops `w`.
    pub const fn truncate(&self) -> Vector3f {
        Vector3f::new(self.x, self.y, self.z)
    }

    pub fn set(&mut self, x: f32, y: f32, z: f32, w: f32) {
        self.x = x;
        self.y = y;
        self.z = z;
        self.w = w;
    }

    pub fn dot(&self, other: &Vector4f) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product of the `x, y, z` parts. `w` is taken from `self`.
    pub fn cross(&self, other: &Vector4f) -> Vector4f {
        Vector4f::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
            self.w,
        )
    }

    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Normalizes `x, y, z` in place. The zero vector is left unchanged.
    pub fn normalize(&mut self) {
        let len = self.length();
        if len != 0.0 {
            let inv_len = 1.0 / len;
            self.x *= inv_len;
            self.y *= inv_len;
            self.z *= inv_len;
        }
    }

    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Flat view of the components in `x, y, z, w` order.
    pub fn adr(&self) -> &[f32; 4] {
        bytemuck::cast_ref(self)
    }

    pub fn approx_eq(&self, other: &Vector4f) -> bool {
        self.approx_eq_within(other, FLOAT_TOLERANCE)
    }

    /// Compares all four components, `w` included.
    pub fn approx_eq_within(&self, other: &Vector4f, tolerance: f32) -> bool {
        are_equal(self.x, other.x, tolerance)
            && are_equal(self.y, other.y, tolerance)
            && are_equal(self.z, other.z, tolerance)
            && are_equal(self.w, other.w, tolerance)
    }

    pub fn is_zero(&self) -> bool {
        self.is_zero_within(FLOAT_TOLERANCE)
    }

    pub fn is_zero_within(&self, tolerance: f32) -> bool {
        self.truncate().is_zero_within(tolerance)
    }

    pub fn is_unit(&self) -> bool {
        self.is_unit_within(FLOAT_TOLERANCE)
    }

    pub fn is_unit_within(&self, tolerance: f32) -> bool {
        are_equal(self.length_squared(), 1.0, tolerance)
    }
}

impl std::fmt::Display for Vector4f {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{},{},{},{}", self.x, self.y, self.z, self.w)
    }
}

/// Point semantics, `w = 1`
impl From<Vector3f> for Vector4f {
    fn from(v: Vector3f) -> Self {
        Vector4f::point(v)
    }
}

impl From<Vector4f> for Vector3f {
    fn from(v: Vector4f) -> Self {
        v.truncate()
    }
}

impl Neg for Vector4f {
    type Output = Vector4f;

    fn neg(self) -> Vector4f {
        Vector4f::new(-self.x, -self.y, -self.z, self.w)
    }
}

impl Add for Vector4f {
    type Output = Vector4f;

    fn add(self, other: Vector4f) -> Vector4f {
        Vector4f::new(self.x + other.x, self.y + other.y, self.z + other.z, self.w)
    }
}

impl AddAssign for Vector4f {
    fn add_assign(&mut self, other: Vector4f) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl Sub for Vector4f {
    type Output = Vector4f;

    fn sub(self, other: Vector4f) -> Vector4f {
        Vector4f::new(self.x - other.x, self.y - other.y, self.z - other.z, self.w)
    }
}

impl SubAssign for Vector4f {
    fn sub_assign(&mut self, other: Vector4f) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}

impl Mul<f32> for Vector4f {
    type Output = Vector4f;

    fn mul(self, s: f32) -> Vector4f {
        Vector4f::new(self.x * s, self.y * s, self.z * s, self.w)
    }
}

impl Mul<Vector4f> for f32 {
    type Output = Vector4f;

    fn mul(self, v: Vector4f) -> Vector4f {
        v * self
    }
}

impl MulAssign<f32> for Vector4f {
    fn mul_assign(&mut self, s: f32) {
        self.x *= s;
        self.y *= s;
        self.z *= s;
    }
}
