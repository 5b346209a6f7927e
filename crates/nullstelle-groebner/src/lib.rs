//! Gröbner bases over a field.
//!
//! This crate provides:
//! - Buchberger's algorithm with sugar selection, the product and chain
//!   criteria, and parallel reduction of S-polynomial batches via rayon
//! - Reduced Gröbner bases with normal forms and ideal membership
//! - The staircase (standard monomial basis) of a zero-dimensional ideal

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod basis;
pub mod buchberger;
pub mod criteria;
pub mod reduce;
pub mod staircase;

#[cfg(test)]
mod proptests;

pub use basis::GroebnerBasis;
pub use buchberger::{groebner_basis, Buchberger, BuchbergerConfig};
pub use reduce::normal_form;
pub use staircase::Staircase;
