//! # nullstelle-rings
//!
//! Coefficient domains for the nullstelle polynomial solver.
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `Field`
//! - Exact rationals `Q` backed by `dashu`
//!
//! Exact coefficients keep Gröbner basis computations free of rounding; the
//! `num_traits::ToPrimitive` impl on `Q` is the single point where values
//! cross over into floating point.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod rational;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use rational::Q;
pub use traits::{Field, Ring};
