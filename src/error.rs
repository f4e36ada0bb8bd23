use std::error::Error;
use std::fmt::{Display, Formatter};

/// Degenerate operations reported by the checked (`try_*`) entry points.
///
/// These are programmer errors, not runtime conditions. The unchecked
/// variants panic on them in debug builds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    /// The rotation/scale block has a determinant within tolerance of zero.
    SingularMatrix { determinant: f32 },
    /// A quaternion with zero magnitude can not be normalized.
    ZeroQuaternion,
}

impl Error for MathError {}

impl Display for MathError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MathError::SingularMatrix { determinant } => {
                write!(f, "matrix is not invertible (determinant {determinant})")
            }
            MathError::ZeroQuaternion => write!(f, "can not normalize a zero quaternion"),
        }
    }
}
