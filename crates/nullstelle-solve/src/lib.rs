//! Numeric solving of zero-dimensional polynomial systems.
//!
//! This crate implements the multiplication-matrix eigenvalue method
//! (Corless, Gianni and Trager, 1997):
//!
//! - **Multiplication matrices**: one matrix per variable over a monomial
//!   basis of the quotient ring, built from a Gröbner basis
//! - **Generic combination**: a random convex combination of the matrices
//! - **Schur decomposition**: eigenvalues and Schur vectors of the combination
//! - **Clustering**: eigenvalues of multiple roots are grouped, non-real
//!   groups dropped
//! - **Extraction**: averaged Rayleigh quotients give the coordinates
//!
//! # Example
//!
//! ```
//! use nullstelle_poly::{MonomialOrder, SparsePoly};
//! use nullstelle_rings::Q;
//! use nullstelle_solve::{default_solver, solve, AlgebraicSet};
//!
//! // x^2 - 1 = 0, y - x = 0
//! let order = MonomialOrder::Grevlex;
//! let f = SparsePoly::from_exponents(&[(Q::from(1), &[2, 0]), (Q::from(-1), &[0, 0])], 2, order);
//! let g = SparsePoly::from_exponents(&[(Q::from(1), &[0, 1]), (Q::from(-1), &[1, 0])], 2, order);
//! let set = AlgebraicSet::new(vec![f, g], 2, order);
//!
//! let solutions = solve(&set, &default_solver()).unwrap().unwrap();
//! assert_eq!(solutions.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]

pub mod algebraic_set;
pub mod cluster;
pub mod combine;
pub mod config;
pub mod error;
pub mod extract;
pub mod multiplication;
pub mod schur_solver;
pub mod solution;
pub mod solver;

pub use algebraic_set::AlgebraicSet;
pub use config::Tolerances;
pub use error::SolveError;
pub use multiplication::{GroebnerMultiplicationMatrices, MultiplicationMatrices};
pub use schur_solver::ReorderedSchurSolver;
pub use solution::Solution;
pub use solver::{
    default_solver, solve, AlgebraicSolver, DefaultSolver, MultiplicationMatricesAlgorithm,
    MultiplicationMatricesSolver, SolverUsingMultiplicationMatrices,
};

#[cfg(test)]
mod proptests;
