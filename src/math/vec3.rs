//! Three component vector used for points, directions and scale factors.

use super::scalar::{FLOAT_TOLERANCE, are_equal};
use bytemuck::{Pod, Zeroable};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// 3D vector for positions, directions and per-axis scale
///
/// `Default` is the zero vector. Use [`Vector3f::ZERO`] where a defined zero
/// is meant rather than a placeholder value.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(test, derive(fake::Dummy))]
pub struct Vector3f {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3f {
    pub const ZERO: Vector3f = Vector3f::new(0.0, 0.0, 0.0);
    pub const UNIT_X: Vector3f = Vector3f::new(1.0, 0.0, 0.0);
    pub const UNIT_Y: Vector3f = Vector3f::new(0.0, 1.0, 0.0);
    pub const UNIT_Z: Vector3f = Vector3f::new(0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn set(&mut self, x: f32, y: f32, z: f32) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    pub fn dot(&self, other: &Vector3f) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product
    pub fn cross(&self, other: &Vector3f) -> Vector3f {
        Vector3f::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Cheaper than [`Vector3f::length`] when only comparing magnitudes.
    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Normalizes in place. The zero vector is left unchanged.
    pub fn normalize(&mut self) {
        let len = self.length();
        if len != 0.0 {
            let inv_len = 1.0 / len;
            self.x *= inv_len;
            self.y *= inv_len;
            self.z *= inv_len;
        }
    }

    /// Returns the unit vector in the same direction, or zero for the zero vector.
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Flat view of the components in `x, y, z` order.
    pub fn adr(&self) -> &[f32; 3] {
        bytemuck::cast_ref(self)
    }

    pub fn approx_eq(&self, other: &Vector3f) -> bool {
        self.approx_eq_within(other, FLOAT_TOLERANCE)
    }

    /// Component-wise comparison, each difference must be within `tolerance`.
    pub fn approx_eq_within(&self, other: &Vector3f, tolerance: f32) -> bool {
        are_equal(self.x, other.x, tolerance)
            && are_equal(self.y, other.y, tolerance)
            && are_equal(self.z, other.z, tolerance)
    }

    pub fn is_zero(&self) -> bool {
        self.is_zero_within(FLOAT_TOLERANCE)
    }

    pub fn is_zero_within(&self, tolerance: f32) -> bool {
        self.approx_eq_within(&Vector3f::ZERO, tolerance)
    }

    pub fn is_unit(&self) -> bool {
        self.is_unit_within(FLOAT_TOLERANCE)
    }

    pub fn is_unit_within(&self, tolerance: f32) -> bool {
        are_equal(self.length_squared(), 1.0, tolerance)
    }
}

impl std::fmt::Display for Vector3f {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}

impl From<[f32; 3]> for Vector3f {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Vector3f::new(x, y, z)
    }
}

impl Neg for Vector3f {
    type Output = Vector3f;

    fn neg(self) -> Vector3f {
        Vector3f::new(-self.x, -self.y, -self.z)
    }
}

impl Add for Vector3f {
    type Output = Vector3f;

    fn add(self, other: Vector3f) -> Vector3f {
        Vector3f::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl AddAssign for Vector3f {
    fn add_assign(&mut self, other: Vector3f) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl Sub for Vector3f {
    type Output = Vector3f;

    fn sub(self, other: Vector3f) -> Vector3f {
        Vector3f::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl SubAssign for Vector3f {
    fn sub_assign(&mut self, other: Vector3f) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}

impl Mul<f32> for Vector3f {
    type Output = Vector3f;

    fn mul(self, s: f32) -> Vector3f {
        Vector3f::new(self.x * s, self.y * s, self.z * s)
    }
}

impl Mul<Vector3f> for f32 {
    type Output = Vector3f;

    fn mul(self, v: Vector3f) -> Vector3f {
        v * self
    }
}

impl MulAssign<f32> for Vector3f {
    fn mul_assign(&mut self, s: f32) {
        self.x *= s;
        self.y *= s;
        self.z *= s;
    }
}
