//! Eigenvalue clustering.
//!
//! Eigenvalues of a defective or multiple root spread out around the true
//! value by roughly `eps^(1/m)`. Clustering gathers them back into one
//! solution each.

use num_complex::Complex64;
use smallvec::SmallVec;

use crate::config::Tolerances;

/// A group of eigenvalue indices with their running mean.
#[derive(Clone, Debug, PartialEq)]
pub struct Cluster {
    indices: SmallVec<[usize; 4]>,
    average: Complex64,
}

impl Cluster {
    fn singleton(index: usize, value: Complex64) -> Self {
        let mut indices = SmallVec::new();
        indices.push(index);
        Self {
            indices,
            average: value,
        }
    }

    /// Adds an eigenvalue and updates the running mean.
    fn absorb(&mut self, index: usize, value: Complex64) {
        let n = self.indices.len() as f64;
        self.average = (self.average * n + value) / (n + 1.0);
        self.indices.push(index);
    }

    /// Returns true if `value` is within tolerance of the mean.
    fn accepts(&self, value: Complex64, tol: &Tolerances) -> bool {
        (value - self.average).norm() <= tol.atol + tol.rtol * self.average.norm()
    }

    /// Indices into the eigenvalue list, in insertion order.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Mean of the member eigenvalues.
    #[must_use]
    pub fn average(&self) -> Complex64 {
        self.average
    }

    /// Number of member eigenvalues.
    #[must_use]
    pub fn multiplicity(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if the mean's imaginary part is at most `ztol`.
    #[must_use]
    pub fn is_real(&self, ztol: f64) -> bool {
        self.average.im.abs() <= ztol
    }
}

/// Partitions eigenvalues into clusters.
///
/// Eigenvalues are visited in index order. Each joins the accepting cluster
/// whose mean is nearest, the earliest such cluster on exact ties, or starts
/// a new one. Clusters are returned in order of creation.
#[must_use]
pub fn cluster_eigenvalues(eigenvalues: &[Complex64], tol: &Tolerances) -> Vec<Cluster> {
    let mut clusters: Vec<Cluster> = Vec::new();

    for (i, &value) in eigenvalues.iter().enumerate() {
        let mut best: Option<(usize, f64)> = None;
        for (j, cluster) in clusters.iter().enumerate() {
            if !cluster.accepts(value, tol) {
                continue;
            }
            let distance = (value - cluster.average).norm();
            if best.map_or(true, |(_, d)| distance < d) {
                best = Some((j, distance));
            }
        }

        match best {
            Some((j, _)) => clusters[j].absorb(i, value),
            None => clusters.push(Cluster::singleton(i, value)),
        }
    }

    clusters
}

/// Drops clusters whose mean has an imaginary part above `ztol`.
#[must_use]
pub fn retain_real(clusters: Vec<Cluster>, ztol: f64) -> Vec<Cluster> {
    clusters.into_iter().filter(|c| c.is_real(ztol)).collect()
}
