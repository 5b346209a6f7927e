//! Generic linear combination of multiplication matrices.
//!
//! A random convex combination of the matrices separates distinct solutions
//! with probability one, so its eigenvalues index the solutions.

use nalgebra::DMatrix;
use rand::Rng;

use crate::multiplication::MultiplicationMatrices;

/// Draws `n` weights uniformly from `[0, 1)` and normalizes them to sum 1.
pub fn random_weights<G: Rng + ?Sized>(n: usize, rng: &mut G) -> Vec<f64> {
    let raw: Vec<f64> = (0..n).map(|_| rng.gen::<f64>()).collect();
    let total: f64 = raw.iter().sum();
    if total > 0.0 {
        raw.into_iter().map(|w| w / total).collect()
    } else {
        // Every draw was exactly zero.
        vec![1.0 / n as f64; n]
    }
}

/// Forms `Σ weights[i] * matrices[i]`.
///
/// With zero variables the result is the zero matrix of the quotient
/// dimension.
///
/// # Panics
///
/// Panics if there is not exactly one weight per matrix.
#[must_use]
pub fn combine(matrices: &MultiplicationMatrices, weights: &[f64]) -> DMatrix<f64> {
    assert_eq!(
        weights.len(),
        matrices.num_vars(),
        "expected one weight per multiplication matrix"
    );

    let d = matrices.dimension();
    matrices
        .matrices()
        .iter()
        .zip(weights)
        .fold(DMatrix::zeros(d, d), |acc, (m, &w)| acc + m * w)
}
