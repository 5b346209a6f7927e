//! Multiplication matrices of a zero-dimensional quotient ring.
//!
//! For a monomial basis `B` of `R[x]/I`, the matrix of variable `x_v` has in
//! column `i` the coordinates of `x_v * B[i]` reduced modulo `I`. The
//! matrices of different variables commute.

use nalgebra::DMatrix;
use num_traits::ToPrimitive;
use rayon::prelude::*;
use tracing::debug;

use nullstelle_groebner::{GroebnerBasis, Staircase};
use nullstelle_linalg::{DenseMatrix, LinalgError};
use nullstelle_poly::{PackedMonomial, SparsePoly};
use nullstelle_rings::traits::{Field, Ring};

use crate::algebraic_set::AlgebraicSet;
use crate::error::SolveError;
use crate::solver::MultiplicationMatricesAlgorithm;

/// One square `f64` matrix per variable, all of the quotient dimension.
#[derive(Clone, Debug, PartialEq)]
pub struct MultiplicationMatrices {
    dimension: usize,
    matrices: Vec<DMatrix<f64>>,
}

impl MultiplicationMatrices {
    /// Wraps a family of multiplication matrices.
    ///
    /// The dimension is kept separately so that a family over zero variables
    /// still knows the size of its quotient ring.
    ///
    /// # Panics
    ///
    /// Panics if a matrix is not `dimension x dimension`.
    #[must_use]
    pub fn new(dimension: usize, matrices: Vec<DMatrix<f64>>) -> Self {
        for (i, m) in matrices.iter().enumerate() {
            assert_eq!(
                m.shape(),
                (dimension, dimension),
                "matrix {i} is not {dimension}x{dimension}"
            );
        }
        Self {
            dimension,
            matrices,
        }
    }

    /// Rounds exact matrices to `f64`.
    ///
    /// # Errors
    ///
    /// Returns an error if an entry has no finite `f64` image.
    pub fn from_exact<R: Ring + ToPrimitive>(
        dimension: usize,
        exact: &[DenseMatrix<R>],
    ) -> Result<Self, LinalgError> {
        let matrices = exact
            .iter()
            .map(DenseMatrix::to_f64)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(dimension, matrices))
    }

    /// Returns the dimension of the quotient ring.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.matrices.len()
    }

    /// Returns the matrices, one per variable.
    #[must_use]
    pub fn matrices(&self) -> &[DMatrix<f64>] {
        &self.matrices
    }

    /// Returns the matrix of variable `i`.
    #[must_use]
    pub fn matrix(&self, i: usize) -> Option<&DMatrix<f64>> {
        self.matrices.get(i)
    }
}

/// Builds the exact multiplication matrices over `staircase`.
///
/// Variables are processed in parallel.
#[must_use]
pub fn exact_multiplication_matrices<R>(
    basis: &GroebnerBasis<R>,
    staircase: &Staircase,
) -> Vec<DenseMatrix<R>>
where
    R: Field + Send + Sync,
{
    let n = basis.num_vars();
    let d = staircase.dimension();

    (0..n)
        .into_par_iter()
        .map(|v| {
            let x = PackedMonomial::var(v, n);
            let mut matrix = DenseMatrix::zeros(d, d);
            for (i, b) in staircase.monomials().iter().enumerate() {
                let product = SparsePoly::monomial(x.mul(b), R::one(), n, basis.order());
                let reduced = basis.normal_form(&product);
                let column = staircase
                    .coordinates(&reduced)
                    .expect("normal forms are supported on the staircase");
                matrix.set_col(i, &column);
            }
            matrix
        })
        .collect()
}

/// Builds multiplication matrices from a Gröbner basis.
#[derive(Clone, Copy, Debug, Default)]
pub struct GroebnerMultiplicationMatrices;

impl<R> MultiplicationMatricesAlgorithm<R> for GroebnerMultiplicationMatrices
where
    R: Field + ToPrimitive + Send + Sync,
{
    fn multiplication_matrices(
        &self,
        set: &AlgebraicSet<R>,
    ) -> Result<Option<MultiplicationMatrices>, SolveError> {
        let basis = set.groebner_basis();
        let Some(staircase) = basis.staircase() else {
            debug!(
                unit_ideal = basis.is_unit_ideal(),
                "no finite monomial basis, not solvable by multiplication matrices"
            );
            return Ok(None);
        };

        let exact = exact_multiplication_matrices(basis, &staircase);
        let matrices = MultiplicationMatrices::from_exact(staircase.dimension(), &exact)?;

        debug!(
            dimension = matrices.dimension(),
            num_vars = matrices.num_vars(),
            "built multiplication matrices"
        );

        Ok(Some(matrices))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nullstelle_poly::MonomialOrder;
    use nullstelle_rings::Q;

    fn poly(terms: &[(i64, &[u16])]) -> SparsePoly<Q> {
        let terms: Vec<_> = terms.iter().map(|&(c, e)| (Q::from_integer(c), e)).collect();
        SparsePoly::from_exponents(&terms, terms[0].1.len(), MonomialOrder::Grevlex)
    }

    fn set(equalities: Vec<SparsePoly<Q>>) -> AlgebraicSet<Q> {
        let n = equalities[0].num_vars();
        AlgebraicSet::new(equalities, n, MonomialOrder::Grevlex)
    }

    #[test]
    fn test_point() {
        let s = set(vec![poly(&[(1, &[1, 0]), (-2, &[0, 0])]), poly(&[(1, &[0, 1]), (-3, &[0, 0])])]);
        let m = GroebnerMultiplicationMatrices.multiplication_matrices(&s).unwrap().unwrap();

        assert_eq!(m.dimension(), 1);
        assert_eq!(m.matrix(0), Some(&DMatrix::from_element(1, 1, 2.0)));
        assert_eq!(m.matrix(1), Some(&DMatrix::from_element(1, 1, 3.0)));
    }

    #[test]
    fn test_univariate_companion() {
        // x^2 - 3x + 2 over the basis {1, x}: x*1 = x, x*x = 3x - 2.
        let s = set(vec![poly(&[(1, &[2]), (-3, &[1]), (2, &[0])])]);
        let m = GroebnerMultiplicationMatrices.multiplication_matrices(&s).unwrap().unwrap();

        assert_eq!(m.matrix(0), Some(&DMatrix::from_row_slice(2, 2, &[0.0, -2.0, 1.0, 3.0])));
    }

    #[test]
    fn test_exact_matrices_commute() {
        let s = set(vec![
            poly(&[(1, &[2, 0]), (1, &[0, 2]), (-5, &[0, 0])]),
            poly(&[(1, &[1, 1]), (-2, &[0, 0])]),
        ]);
        let basis = s.groebner_basis();
        let staircase = basis.staircase().unwrap();
        let exact = exact_multiplication_matrices(basis, &staircase);

        assert_eq!(staircase.dimension(), 4);
        assert_eq!(exact[0].mm(&exact[1]), exact[1].mm(&exact[0]));
        // x*y acts as multiplication by 2.
        let two = DenseMatrix::identity(4).scale(&Q::from_integer(2));
        assert_eq!(exact[0].mm(&exact[1]), two);
    }

    #[test]
    fn test_not_zero_dimensional() {
        let s = set(vec![poly(&[(1, &[1, 1])])]);
        assert!(GroebnerMultiplicationMatrices.multiplication_matrices(&s).unwrap().is_none());
    }

    #[test]
    fn test_no_variables() {
        let s = AlgebraicSet::<Q>::universe(0, MonomialOrder::Grevlex);
        let m = GroebnerMultiplicationMatrices.multiplication_matrices(&s).unwrap().unwrap();
        assert_eq!(m.dimension(), 1);
        assert_eq!(m.num_vars(), 0);
    }

    #[test]
    #[should_panic(expected = "not 2x2")]
    fn test_wrong_shape_panics() {
        let _ = MultiplicationMatrices::new(2, vec![DMatrix::zeros(2, 3)]);
    }
}
