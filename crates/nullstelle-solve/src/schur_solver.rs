//! Multiplication-matrix solver via a single Schur decomposition.
//!
//! A random convex combination of the matrices is decomposed once. Its
//! eigenvalues are clustered, clusters with non-negligible imaginary part
//! are dropped, and each surviving cluster's Schur vectors yield one point.
//! The Schur form is never reordered: clusters index into `Z` directly.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use nullstelle_linalg::{schur, SchurConfig};

use crate::cluster::{cluster_eigenvalues, retain_real};
use crate::combine::{combine, random_weights};
use crate::config::Tolerances;
use crate::error::SolveError;
use crate::extract::extract_solutions;
use crate::multiplication::MultiplicationMatrices;
use crate::solution::Solution;
use crate::solver::MultiplicationMatricesSolver;

/// Solves multiplication matrices by clustering Schur eigenvalues.
#[derive(Clone, Debug, Default)]
pub struct ReorderedSchurSolver {
    /// Clustering and reality tolerances.
    pub tolerances: Tolerances,
    /// Seed for the weight draw; `None` draws from system entropy.
    pub seed: Option<u64>,
    /// Schur iteration controls.
    pub schur: SchurConfig,
}

impl ReorderedSchurSolver {
    /// Creates a solver with the given tolerances.
    #[must_use]
    pub fn new(tolerances: Tolerances) -> Self {
        Self {
            tolerances,
            ..Self::default()
        }
    }

    /// Fixes the seed of the weight draw.
    #[must_use]
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    /// Draws a weight vector for `n` matrices.
    #[must_use]
    pub fn draw_weights(&self, n: usize) -> Vec<f64> {
        let mut rng = match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        random_weights(n, &mut rng)
    }

    /// Solves with an explicit weight vector.
    ///
    /// This is deterministic: the same matrices and weights always give the
    /// same solutions in the same order.
    ///
    /// # Errors
    ///
    /// Returns an error if the Schur iteration does not converge.
    ///
    /// # Panics
    ///
    /// Panics if there is not exactly one weight per matrix.
    pub fn solve_with_weights(
        &self,
        matrices: &MultiplicationMatrices,
        weights: &[f64],
    ) -> Result<Vec<Solution>, SolveError> {
        let combined = combine(matrices, weights);
        let decomposition = schur(&combined, &self.schur)?;

        let clusters = cluster_eigenvalues(&decomposition.eigenvalues, &self.tolerances);
        let total = clusters.len();
        let clusters = retain_real(clusters, self.tolerances.ztol);

        debug!(
            dimension = matrices.dimension(),
            clusters = total,
            dropped_non_real = total - clusters.len(),
            "clustered eigenvalues"
        );

        Ok(extract_solutions(matrices, &decomposition.z, &clusters))
    }
}

impl MultiplicationMatricesSolver for ReorderedSchurSolver {
    fn solve(&self, matrices: &MultiplicationMatrices) -> Result<Vec<Solution>, SolveError> {
        let weights = self.draw_weights(matrices.num_vars());
        self.solve_with_weights(matrices, &weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::DMatrix;

    #[test]
    fn test_seeded_weights_repeat() {
        let solver = ReorderedSchurSolver::default().with_seed(3);
        assert_eq!(solver.draw_weights(5), solver.draw_weights(5));
    }

    #[test]
    fn test_empty_quotient() {
        let m = MultiplicationMatrices::new(0, vec![DMatrix::zeros(0, 0)]);
        let solutions = ReorderedSchurSolver::default().solve_with_weights(&m, &[1.0]).unwrap();
        assert!(solutions.is_empty());
    }

    #[test]
    fn test_single_point() {
        let m = MultiplicationMatrices::new(
            1,
            vec![DMatrix::from_element(1, 1, 2.0), DMatrix::from_element(1, 1, 3.0)],
        );
        let solver = ReorderedSchurSolver::default();
        for weights in [[0.5, 0.5], [0.1, 0.9], [1.0, 0.0]] {
            let solutions = solver.solve_with_weights(&m, &weights).unwrap();
            assert_eq!(solutions.len(), 1);
            assert!(solutions[0].max_distance(&Solution::new(vec![2.0, 3.0])) < 1e-12);
        }
    }
}
