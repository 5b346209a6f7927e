//! # Nullstelle
//!
//! Numeric roots of zero-dimensional polynomial systems.
//!
//! Systems are stated exactly over Q, reduced to a Gröbner basis, turned
//! into multiplication matrices on the finite-dimensional quotient ring, and
//! solved through a single Schur decomposition of a random combination of
//! those matrices.
//!
//! ## Features
//!
//! - **Exact front end**: rationals over `dashu`, packed sparse polynomials
//! - **Gröbner bases**: Buchberger with sugar selection and parallel reduction
//! - **Eigenvalue solver**: Schur decomposition via `nalgebra`, tolerance-based
//!   clustering of multiple roots, real-root filtering
//!
//! ## Quick Start
//!
//! ```rust
//! use nullstelle::prelude::*;
//!
//! // x*y = 2, x^2 + y^2 = 5
//! let order = MonomialOrder::Grevlex;
//! let f = SparsePoly::from_exponents(&[(Q::from(1), &[1, 1]), (Q::from(-2), &[0, 0])], 2, order);
//! let g = SparsePoly::from_exponents(
//!     &[(Q::from(1), &[2, 0]), (Q::from(1), &[0, 2]), (Q::from(-5), &[0, 0])],
//!     2,
//!     order,
//! );
//! let set = AlgebraicSet::new(vec![f, g], 2, order);
//!
//! let solutions = solve(&set, &default_solver()).unwrap().unwrap();
//! assert_eq!(solutions.len(), 4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use nullstelle_groebner as groebner;
pub use nullstelle_linalg as linalg;
pub use nullstelle_poly as poly;
pub use nullstelle_rings as rings;
pub use nullstelle_solve as solve;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use nullstelle_groebner::{groebner_basis, GroebnerBasis, Staircase};
    pub use nullstelle_poly::{MonomialOrder, PackedMonomial, SparsePoly};
    pub use nullstelle_rings::{Field, Ring, Q};
    pub use nullstelle_solve::{
        default_solver, solve, AlgebraicSet, AlgebraicSolver, ReorderedSchurSolver, Solution,
        SolveError, Tolerances,
    };
}
