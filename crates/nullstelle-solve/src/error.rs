//! Solver errors.

use nullstelle_linalg::LinalgError;
use thiserror::Error;

/// Numerical failures while solving.
///
/// A system that is not zero-dimensional is not an error; solvers report
/// it as `Ok(None)`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SolveError {
    /// Linear algebra failed (rounding or Schur iteration).
    #[error(transparent)]
    Linalg(#[from] LinalgError),
}
