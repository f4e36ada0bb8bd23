//! Vectors, rotations and affine transforms for 3D rigid bodies.
//!
//! All types use row vectors: a vector is transformed as `v * M`, and a
//! product `A * B` applies `A` first and `B` second.

mod matrix4x3;
mod matrix4x4;
mod quaternion;
mod rotation;
pub mod scalar;
mod vec3;
mod vec4;

pub use matrix4x3::Matrix4x3;
pub use matrix4x4::Matrix4x4;
pub use quaternion::{Quaternion, slerp};
pub use rotation::{RotationAxis, RotationMatrix};
pub use scalar::{FLOAT_TOLERANCE, HALF_PI, PI, TWO_PI, are_equal, sqr};
pub use vec3::Vector3f;
pub use vec4::Vector4f;
