//! Error type shared by every geometric operation.
//!
//! All failures are raised at the call that violates a contract and are
//! returned to the caller unchanged; nothing is retried or substituted.

use std::fmt;

/// Errors surfaced by points, vectors, segments and spaces.
#[derive(Clone, Debug, PartialEq)]
pub enum GeomError {
    /// Dimension value was zero or negative (or an empty coordinate list).
    InvalidDimension { size: i64 },
    /// Operands of a binary operation live in different dimensions.
    DimensionMismatch { left: usize, right: usize },
    /// Coordinate index is not below the dimension.
    IndexOutOfRange { index: usize, dimension: usize },
    /// Named accessor (`y`, `z`) requested on a point that is too small.
    InsufficientDimension { axis: char, dimension: usize },
    /// Division or normalization by zero, or an otherwise unusable argument.
    InvalidArgument { reason: String },
    /// Operation restricted to 2D invoked on an entity of another dimension.
    InvalidState { reason: String },
}

impl GeomError {
    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_state(reason: impl Into<String>) -> Self {
        Self::InvalidState {
            reason: reason.into(),
        }
    }

    pub(crate) fn mismatch(left: usize, right: usize) -> Self {
        Self::DimensionMismatch { left, right }
    }
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { size } => {
                write!(f, "number of dimensions must be positive, got {size}")
            }
            Self::DimensionMismatch { left, right } => {
                write!(f, "dimensions differ: {left} vs {right}")
            }
            Self::IndexOutOfRange { index, dimension } => write!(
                f,
                "coordinate index {index} out of range for dimension {dimension}"
            ),
            Self::InsufficientDimension { axis, dimension } => write!(
                f,
                "point of dimension {dimension} has no {axis} coordinate"
            ),
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::InvalidState { reason } => write!(f, "invalid state: {reason}"),
        }
    }
}

impl std::error::Error for GeomError {}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, GeomError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_values() {
        let err = GeomError::IndexOutOfRange {
            index: 3,
            dimension: 2,
        };
        assert_eq!(
            err.to_string(),
            "coordinate index 3 out of range for dimension 2"
        );
        let err = GeomError::InsufficientDimension {
            axis: 'z',
            dimension: 2,
        };
        assert_eq!(err.to_string(), "point of dimension 2 has no z coordinate");
        assert_eq!(
            GeomError::mismatch(2, 3).to_string(),
            "dimensions differ: 2 vs 3"
        );
    }

    #[test]
    fn boxes_as_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(GeomError::invalid_argument("x"));
        assert_eq!(err.to_string(), "invalid argument: x");
    }
}
