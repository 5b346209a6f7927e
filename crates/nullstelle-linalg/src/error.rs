//! Linear algebra errors.

use thiserror::Error;

/// Errors from numeric linear algebra.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LinalgError {
    /// The matrix is not square.
    #[error("expected a square matrix, got {rows}x{cols}")]
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// The Schur iteration did not converge.
    #[error("Schur decomposition of a {dimension}x{dimension} matrix did not converge in {max_iterations} iterations")]
    NoConvergence {
        /// Matrix dimension.
        dimension: usize,
        /// Iteration cap that was hit.
        max_iterations: usize,
    },

    /// An exact entry has no finite `f64` image.
    #[error("entry ({row}, {col}) has no finite f64 value")]
    NonFiniteEntry {
        /// Row of the entry.
        row: usize,
        /// Column of the entry.
        col: usize,
    },
}
