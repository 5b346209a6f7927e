//! Property-based tests for clustering and the Schur solver.

#[cfg(test)]
mod tests {
    use nalgebra::{DMatrix, DVector};
    use num_complex::Complex64;
    use proptest::prelude::*;

    use crate::cluster::{cluster_eigenvalues, retain_real};
    use crate::{MultiplicationMatrices, ReorderedSchurSolver, Solution, Tolerances};

    /// Eigenvalues scattered by at most 0.01 around centers 10 apart.
    fn separated_eigenvalues() -> impl Strategy<Value = (usize, Vec<Complex64>)> {
        prop::collection::btree_set(-8i32..8, 1..6).prop_flat_map(|centers| {
            let k = centers.len();
            let centers: Vec<f64> = centers.into_iter().map(|c| f64::from(c) * 10.0).collect();
            prop::collection::vec((0..k, -0.01f64..0.01, -0.01f64..0.01), k..4 * k).prop_map(
                move |picks| {
                    // Every center appears at least once.
                    let mut values: Vec<Complex64> =
                        centers.iter().map(|&c| Complex64::new(c, 0.0)).collect();
                    values.extend(
                        picks
                            .into_iter()
                            .map(|(i, re, im)| Complex64::new(centers[i] + re, im)),
                    );
                    (k, values)
                },
            )
        })
    }

    fn eigenvalues() -> impl Strategy<Value = Vec<Complex64>> {
        prop::collection::vec((-5.0f64..5.0, -1.0f64..1.0), 0..12)
            .prop_map(|v| v.into_iter().map(|(re, im)| Complex64::new(re, im)).collect())
    }

    /// Diagonal multiplication matrices for distinct points.
    fn diagonal_points() -> impl Strategy<Value = Vec<Vec<f64>>> {
        (1usize..4).prop_flat_map(|n| {
            prop::collection::btree_set(-20i32..20, 1..6).prop_flat_map(move |firsts| {
                let d = firsts.len();
                prop::collection::vec(prop::collection::vec(-20i32..20, n - 1), d).prop_map(
                    move |rest| {
                        firsts
                            .iter()
                            .zip(rest)
                            .map(|(&x, tail)| {
                                std::iter::once(x)
                                    .chain(tail)
                                    .map(|v| f64::from(v) / 2.0)
                                    .collect()
                            })
                            .collect()
                    },
                )
            })
        })
    }

    /// `c * I` plus a strictly upper triangular part, all entries integers.
    fn scalar_plus_nilpotent() -> impl Strategy<Value = (f64, DMatrix<f64>)> {
        (1usize..6, -5i32..6).prop_flat_map(|(d, c)| {
            prop::collection::vec(-3i32..4, d * d).prop_map(move |entries| {
                let c = f64::from(c);
                let m = DMatrix::from_fn(d, d, |i, j| match i.cmp(&j) {
                    std::cmp::Ordering::Equal => c,
                    std::cmp::Ordering::Less => f64::from(entries[i * d + j]),
                    std::cmp::Ordering::Greater => 0.0,
                });
                (c, m)
            })
        })
    }

    proptest! {
        #[test]
        fn clusters_partition_indices(eig in eigenvalues(), atol in 0.0f64..2.0, rtol in 0.0f64..0.5) {
            let tol = Tolerances { atol, rtol, ztol: 0.0 };
            let clusters = cluster_eigenvalues(&eig, &tol);

            let mut seen: Vec<usize> = clusters.iter().flat_map(|c| c.indices().to_vec()).collect();
            seen.sort_unstable();
            prop_assert_eq!(seen, (0..eig.len()).collect::<Vec<_>>());
            prop_assert!(clusters.len() <= eig.len());

            for c in &clusters {
                let mean: Complex64 = c.indices().iter().map(|&i| eig[i]).sum::<Complex64>()
                    / c.multiplicity() as f64;
                prop_assert!((mean - c.average()).norm() < 1e-9);
            }
        }

        #[test]
        fn separated_clusters_are_found_for_any_tolerance(
            (k, eig) in separated_eigenvalues(),
            small in 0.05f64..1.0,
            extra in 0.0f64..1.0,
            rtol in 0.0f64..0.01,
        ) {
            let tight = Tolerances { atol: small, rtol, ztol: 0.0 };
            let loose = Tolerances { atol: small + extra, rtol, ztol: 0.0 };

            let n_tight = cluster_eigenvalues(&eig, &tight).len();
            let n_loose = cluster_eigenvalues(&eig, &loose).len();
            prop_assert_eq!(n_tight, k);
            prop_assert!(n_loose <= n_tight);
        }

        #[test]
        fn reality_filter_is_exact(eig in eigenvalues(), ztol in 0.0f64..1.0) {
            let clusters = cluster_eigenvalues(&eig, &Tolerances::uniform(1e-3));
            let kept = retain_real(clusters.clone(), ztol);

            prop_assert!(kept.iter().all(|c| c.average().im.abs() <= ztol));
            let dropped = clusters.iter().filter(|c| c.average().im.abs() > ztol).count();
            prop_assert_eq!(kept.len() + dropped, clusters.len());
        }

        #[test]
        fn diagonal_points_round_trip(points in diagonal_points()) {
            let d = points.len();
            let n = points[0].len();
            let matrices = (0..n)
                .map(|v| DMatrix::from_diagonal(&DVector::from_iterator(d, points.iter().map(|p| p[v]))))
                .collect();
            let m = MultiplicationMatrices::new(d, matrices);

            // Weight the distinct first coordinate so the combination separates points.
            let mut weights = vec![0.0; n];
            weights[0] = 1.0;
            let solutions = ReorderedSchurSolver::default().solve_with_weights(&m, &weights).unwrap();

            prop_assert_eq!(solutions.len(), d);
            for p in &points {
                let target = Solution::new(p.clone());
                prop_assert!(solutions.iter().any(|s| s.max_distance(&target) < 1e-9));
            }
        }

        #[test]
        fn one_point_per_single_eigenvalue((c, m) in scalar_plus_nilpotent()) {
            let d = m.nrows();
            let matrices = MultiplicationMatrices::new(d, vec![m.clone(), m.scale(2.0)]);
            let solutions = ReorderedSchurSolver::default()
                .solve_with_weights(&matrices, &[0.5, 0.5])
                .unwrap();

            prop_assert_eq!(solutions.len(), 1);
            prop_assert!(solutions[0].max_distance(&Solution::new(vec![c, 2.0 * c])) < 1e-9);
        }
    }
}
