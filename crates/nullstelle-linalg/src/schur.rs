//! Complex Schur decomposition of real matrices.
//!
//! A real matrix `M` is factored as `M = Z T Zᴴ` with `Z` unitary and `T`
//! upper triangular. The eigenvalues of `M` sit on the diagonal of `T`; the
//! leading columns of `Z` span the matching invariant subspaces.

use nalgebra::linalg::Schur;
use nalgebra::DMatrix;
use num_complex::Complex64;
use tracing::{debug, trace};

use crate::error::LinalgError;

/// Convergence controls for the Schur iteration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SchurConfig {
    /// Tolerance below which a subdiagonal entry is treated as zero.
    pub eps: f64,
    /// Iteration cap; reaching it is reported as non-convergence.
    pub max_iterations: usize,
}

impl Default for SchurConfig {
    fn default() -> Self {
        Self {
            eps: f64::EPSILON,
            max_iterations: 10_000,
        }
    }
}

/// Result of [`schur`].
#[derive(Clone, Debug)]
pub struct SchurDecomposition {
    /// Unitary factor `Z`; column `j` pairs with `eigenvalues[j]`.
    pub z: DMatrix<Complex64>,
    /// Upper triangular factor `T`.
    pub t: DMatrix<Complex64>,
    /// Diagonal of `T`, in order.
    pub eigenvalues: Vec<Complex64>,
}

impl SchurDecomposition {
    /// Returns the dimension of the decomposed matrix.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.eigenvalues.len()
    }
}

/// Promotes a real matrix to a complex one.
#[must_use]
pub fn to_complex(matrix: &DMatrix<f64>) -> DMatrix<Complex64> {
    matrix.map(|v| Complex64::new(v, 0.0))
}

/// Returns true if every entry below the diagonal is exactly zero.
#[allow(clippy::float_cmp)]
fn is_upper_triangular(matrix: &DMatrix<f64>) -> bool {
    let n = matrix.nrows();
    (0..n).all(|j| (j + 1..n).all(|i| matrix[(i, j)] == 0.0))
}

/// Computes the complex Schur decomposition of a real square matrix.
///
/// Upper triangular input, including the zero matrix, is returned as is with
/// `Z = I`. Otherwise, if the iteration stalls, it is rerun on `M + σI` for
/// a real and then an imaginary shift of magnitude `1 + ‖M‖`. The Schur
/// vectors of a shifted matrix are those of `M`, and `σ` is subtracted from
/// the diagonal of `T` again.
///
/// # Errors
///
/// Returns [`LinalgError::NotSquare`] for a rectangular input and
/// [`LinalgError::NoConvergence`] if every attempt reaches the iteration cap.
pub fn schur(matrix: &DMatrix<f64>, config: &SchurConfig) -> Result<SchurDecomposition, LinalgError> {
    let (rows, cols) = matrix.shape();
    if rows != cols {
        return Err(LinalgError::NotSquare { rows, cols });
    }

    if is_upper_triangular(matrix) {
        let t = to_complex(matrix);
        let eigenvalues: Vec<Complex64> = t.diagonal().iter().copied().collect();
        trace!(dimension = rows, "matrix is already triangular");
        return Ok(SchurDecomposition {
            z: DMatrix::identity(rows, rows),
            t,
            eigenvalues,
        });
    }

    let magnitude = 1.0 + matrix.norm();
    let shifts = [
        Complex64::new(0.0, 0.0),
        Complex64::new(magnitude, 0.0),
        Complex64::new(0.0, magnitude),
    ];

    for shift in shifts {
        let mut shifted = to_complex(matrix);
        for i in 0..rows {
            shifted[(i, i)] += shift;
        }

        let Some(decomposition) = Schur::try_new(shifted, config.eps, config.max_iterations) else {
            debug!(dimension = rows, shift = %shift, "schur iteration stalled");
            continue;
        };

        let (z, mut t) = decomposition.unpack();
        for i in 0..rows {
            t[(i, i)] -= shift;
        }
        let eigenvalues: Vec<Complex64> = t.diagonal().iter().copied().collect();

        trace!(dimension = rows, shift = %shift, "schur decomposition converged");

        return Ok(SchurDecomposition { z, t, eigenvalues });
    }

    Err(LinalgError::NoConvergence {
        dimension: rows,
        max_iterations: config.max_iterations,
    })
}
