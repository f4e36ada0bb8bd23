//!
//! Rigidmath is a rigid-transform math kernel for rendering and animation.
//!
//! It provides single precision vectors, quaternions, rotation matrices and affine transforms
//! that convert between each other and can be handed to a graphics API without copying.
//!
//! ```
//! use rigidmath::{Quaternion, RotationMatrix, Vector3f, HALF_PI};
//!
//! let q = Quaternion::from_axis_angle(Vector3f::UNIT_Z, HALF_PI);
//! let r = RotationMatrix::from(q);
//! assert!(r.determinant() > 0.99);
//! ```

mod error;
pub mod math;

pub use error::MathError;
pub use math::*;
