use thiserror::Error;

/// Errors raised when the shapes of matrices or vectors do not fit an operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// A row handed to [`crate::Matrix::from_rows`] differs in length from the rows before it
    #[error("row {row} has {found} entries, expected {expected} like the rows before it")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A row-major buffer does not hold exactly `height * width` cells
    #[error("buffer of length {len} cannot hold a {height}x{width} matrix")]
    InvalidBufferLength {
        height: usize,
        width: usize,
        len: usize,
    },

    /// A replacement row does not match the width of the matrix
    #[error("row has {found} entries, matrix width is {expected}")]
    InvalidRowLength { expected: usize, found: usize },

    /// Two matrices have incompatible dimensions, given as `(height, width)`
    #[error("incompatible matrix dimensions {left:?} and {right:?}")]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    /// Two vectors have different lengths
    #[error("vectors of different lengths {left} and {right}")]
    LengthMismatch { left: usize, right: usize },
}
