//! Error types for matrix operations

use crate::matrix::matrix::Size;
use thiserror::Error;

/// Result type alias using the crate's `MatrixError`
pub type Result<T> = std::result::Result<T, MatrixError>;

/// Errors that can occur in matrix operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Operand shapes are incompatible for the operation
    #[error("Dimension mismatch in '{op}': {lhs} vs {rhs}")]
    DimensionMismatch {
        /// The operation name
        op: &'static str,
        /// Left-hand side size
        lhs: Size,
        /// Right-hand side size
        rhs: Size,
    },

    /// The operation is only defined for square matrices
    #[error("Matrix must be square, got {size}")]
    NotSquare {
        /// Actual size
        size: Size,
    },

    /// Index past the current shape
    #[error("Index {index} out of bounds for length {len}")]
    OutOfBounds {
        /// The invalid index
        index: usize,
        /// Length of the indexed axis (or element count for linear indices)
        len: usize,
    },

    /// Determinant is zero within tolerance
    #[error("Matrix is singular")]
    SingularMatrix,
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
