//! Error types for vector and matrix operations.

use thiserror::Error;

/// Result type alias for fallible math operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur when operating on vectors and matrices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MathError {
    /// Element access outside the bounds of the 4x4 matrix.
    #[error("matrix index [{row}, {col}] is out of bounds, rows and columns run 0..=3")]
    IndexOutOfBounds { row: usize, col: usize },

    /// A vector of zero length was passed to an operation that needs to
    /// normalize it.
    #[error("cannot normalize a vector of zero length")]
    DegenerateVector,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_error_reports_offending_indices() {
        let error = MathError::IndexOutOfBounds { row: 4, col: 5 };
        let message = error.to_string();
        assert!(message.contains("[4, 5]"));
        assert!(message.contains("0..=3"));
    }

    #[test]
    fn degenerate_vector_error_mentions_zero_length() {
        let message = MathError::DegenerateVector.to_string();
        assert!(message.contains("zero length"));
    }
}
