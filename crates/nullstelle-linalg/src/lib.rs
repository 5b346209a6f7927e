//! # nullstelle-linalg
//!
//! Linear algebra for the multiplication-matrix solver.
//!
//! This crate provides:
//! - Dense matrices over an exact ring, with conversion to `nalgebra`
//! - Complex Schur decomposition of real matrices via `nalgebra`
//!
//! Exact matrices are built over Q and rounded once; everything after the
//! rounding is `f64` / `Complex64` numerics.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::many_single_char_names)]

pub mod dense_matrix;
pub mod error;
pub mod schur;

pub use dense_matrix::{dot, DenseMatrix};
pub use error::LinalgError;
pub use schur::{schur, SchurConfig, SchurDecomposition};
