//! # nullstelle-poly
//!
//! Multivariate polynomials over a coefficient ring.
//!
//! - [`PackedMonomial`]: fixed-width exponent vectors, `Copy` and allocation free
//! - [`MonomialOrder`]: lex, graded lex and graded reverse lex
//! - [`SparsePoly`]: terms sorted in descending monomial order

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]

pub mod monomial;
pub mod ordering;
pub mod sparse;

#[cfg(test)]
mod proptests;

pub use monomial::{PackedMonomial, MAX_VARS};
pub use ordering::MonomialOrder;
pub use sparse::SparsePoly;
