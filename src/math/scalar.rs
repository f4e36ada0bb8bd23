//! Scalar constants and helpers shared by all the value types.

use std::ops::Mul;

pub const PI: f32 = std::f32::consts::PI;
pub const TWO_PI: f32 = std::f32::consts::TAU;
pub const HALF_PI: f32 = std::f32::consts::FRAC_PI_2;

/// The maximum delta within which two floats are considered equal.
pub const FLOAT_TOLERANCE: f32 = 0.0001;

/// Returns `true` if `a` and `b` differ by at most `tolerance`.
///
/// Checked as two one-sided bounds rather than `(a - b).abs() <= tolerance`.
#[inline]
pub fn are_equal(a: f32, b: f32, tolerance: f32) -> bool {
    !((a + tolerance) < b || (a - tolerance) > b)
}

#[inline]
pub fn sqr<T: Mul<Output = T> + Copy>(v: T) -> T {
    v * v
}
