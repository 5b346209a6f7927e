//! Solver traits and their composition.
//!
//! Solving an algebraic set splits into two seams: producing multiplication
//! matrices from the set, and turning matrices into points. Either side can
//! be swapped independently.

use nullstelle_rings::traits::Field;

use crate::algebraic_set::AlgebraicSet;
use crate::error::SolveError;
use crate::multiplication::{GroebnerMultiplicationMatrices, MultiplicationMatrices};
use crate::schur_solver::ReorderedSchurSolver;
use crate::solution::Solution;

/// Produces multiplication matrices for an algebraic set.
pub trait MultiplicationMatricesAlgorithm<R: Field> {
    /// Returns `Ok(None)` if the set is not zero-dimensional or is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrices cannot be represented in `f64`.
    fn multiplication_matrices(
        &self,
        set: &AlgebraicSet<R>,
    ) -> Result<Option<MultiplicationMatrices>, SolveError>;
}

/// Extracts real solutions from multiplication matrices.
pub trait MultiplicationMatricesSolver {
    /// Returns at most `matrices.dimension()` solutions.
    ///
    /// # Errors
    ///
    /// Returns an error on numerical failure.
    fn solve(&self, matrices: &MultiplicationMatrices) -> Result<Vec<Solution>, SolveError>;
}

/// Computes the real points of an algebraic set.
pub trait AlgebraicSolver<R: Field> {
    /// Returns `Ok(None)` if the set cannot be solved this way.
    ///
    /// # Errors
    ///
    /// Returns an error on numerical failure.
    fn solve(&self, set: &AlgebraicSet<R>) -> Result<Option<Vec<Solution>>, SolveError>;
}

/// An [`AlgebraicSolver`] built from a matrix algorithm and a matrix solver.
#[derive(Clone, Debug, Default)]
pub struct SolverUsingMultiplicationMatrices<A, S> {
    /// Builds the multiplication matrices.
    pub algorithm: A,
    /// Solves the multiplication matrices.
    pub solver: S,
}

impl<A, S> SolverUsingMultiplicationMatrices<A, S> {
    /// Composes the two halves.
    pub fn new(algorithm: A, solver: S) -> Self {
        Self { algorithm, solver }
    }
}

impl<R, A, S> AlgebraicSolver<R> for SolverUsingMultiplicationMatrices<A, S>
where
    R: Field,
    A: MultiplicationMatricesAlgorithm<R>,
    S: MultiplicationMatricesSolver,
{
    fn solve(&self, set: &AlgebraicSet<R>) -> Result<Option<Vec<Solution>>, SolveError> {
        match self.algorithm.multiplication_matrices(set)? {
            Some(matrices) => self.solver.solve(&matrices).map(Some),
            None => Ok(None),
        }
    }
}

/// The default solver: Gröbner-basis matrices and Schur clustering.
pub type DefaultSolver = SolverUsingMultiplicationMatrices<GroebnerMultiplicationMatrices, ReorderedSchurSolver>;

/// Returns the default solver with default tolerances.
#[must_use]
pub fn default_solver() -> DefaultSolver {
    SolverUsingMultiplicationMatrices::default()
}

/// Solves `set` with `solver`.
///
/// # Errors
///
/// Returns an error on numerical failure.
pub fn solve<R, S>(set: &AlgebraicSet<R>, solver: &S) -> Result<Option<Vec<Solution>>, SolveError>
where
    R: Field,
    S: AlgebraicSolver<R> + ?Sized,
{
    solver.solve(set)
}
