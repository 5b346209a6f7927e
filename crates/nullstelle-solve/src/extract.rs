//! Solution coordinates from Schur vectors.
//!
//! Every multiplication matrix acts on the invariant subspace of a cluster
//! as its coordinate (plus a nilpotent part), so averaging the Rayleigh
//! quotients `qᴴ M_i q` over the cluster's Schur vectors recovers
//! coordinate `i`.

use nalgebra::DMatrix;
use num_complex::Complex64;
use rayon::prelude::*;

use nullstelle_linalg::schur::to_complex;

use crate::cluster::Cluster;
use crate::multiplication::MultiplicationMatrices;
use crate::solution::Solution;

/// Extracts one solution per cluster, in cluster order.
///
/// `z` holds the Schur vectors of the combined matrix; cluster indices
/// refer to its columns. Only the real part of each averaged quotient is
/// kept.
///
/// # Panics
///
/// Panics if `z` does not match the quotient dimension or a cluster index
/// is out of range.
#[must_use]
pub fn extract_solutions(
    matrices: &MultiplicationMatrices,
    z: &DMatrix<Complex64>,
    clusters: &[Cluster],
) -> Vec<Solution> {
    let d = matrices.dimension();
    assert_eq!(z.shape(), (d, d), "Schur vectors do not match the quotient dimension");

    // M_i Z, so that column j of each product is M_i q_j.
    let products: Vec<DMatrix<Complex64>> = matrices
        .matrices()
        .par_iter()
        .map(|m| to_complex(m) * z)
        .collect();

    clusters
        .par_iter()
        .map(|cluster| {
            let size = cluster.multiplicity() as f64;
            let values = products
                .iter()
                .map(|mz| {
                    let sum: Complex64 = cluster
                        .indices()
                        .iter()
                        .map(|&j| z.column(j).dotc(&mz.column(j)))
                        .sum();
                    sum.re / size
                })
                .collect();
            Solution::new(values)
        })
        .collect()
}
