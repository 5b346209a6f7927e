//! Standard monomials of a zero-dimensional ideal.
//!
//! The staircase is the set of monomials not divisible by any leading
//! monomial of a Gröbner basis. For a zero-dimensional ideal it is finite
//! and forms a vector-space basis of the quotient ring.

use rustc_hash::FxHashMap;

use nullstelle_poly::{MonomialOrder, PackedMonomial, SparsePoly};
use nullstelle_rings::traits::Ring;

/// An ordered monomial basis of a finite-dimensional quotient ring.
#[derive(Clone, Debug)]
pub struct Staircase {
    monomials: Vec<PackedMonomial>,
    index: FxHashMap<PackedMonomial, usize>,
    num_vars: usize,
}

impl Staircase {
    /// Enumerates the standard monomials below `leading`.
    ///
    /// `bounds[i]` must be an exponent `k` such that `x_i^k` is a leading
    /// monomial; every standard monomial has `e_i < bounds[i]`. Monomials are
    /// listed in ascending `order`, so 1 always comes first.
    pub(crate) fn enumerate(
        leading: &[PackedMonomial],
        bounds: &[u16],
        order: MonomialOrder,
    ) -> Self {
        let num_vars = bounds.len();
        let mut monomials = Vec::new();
        let mut exps = vec![0u16; num_vars];

        loop {
            let m = PackedMonomial::new(&exps);
            if !leading.iter().any(|lm| m.is_divisible_by(lm)) {
                monomials.push(m);
            }

            // Odometer step over the box of exponents.
            let Some(pos) = (0..num_vars).find(|&i| exps[i] + 1 < bounds[i]) else {
                break;
            };
            exps[pos] += 1;
            exps[..pos].fill(0);
        }

        monomials.sort_by(|a, b| order.compare(a, b));
        Self::from_monomials(monomials, num_vars)
    }

    fn from_monomials(monomials: Vec<PackedMonomial>, num_vars: usize) -> Self {
        let index = monomials.iter().enumerate().map(|(i, m)| (*m, i)).collect();
        Self {
            monomials,
            index,
            num_vars,
        }
    }

    /// Returns the basis monomials in order.
    #[must_use]
    pub fn monomials(&self) -> &[PackedMonomial] {
        &self.monomials
    }

    /// Returns the dimension of the quotient ring.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.monomials.len()
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Returns the position of `m` in the basis.
    #[must_use]
    pub fn index_of(&self, m: &PackedMonomial) -> Option<usize> {
        self.index.get(m).copied()
    }

    /// Extracts the coefficient vector of a reduced polynomial.
    ///
    /// Returns `None` if `p` has a term outside the staircase, i.e. `p` is
    /// not in normal form.
    #[must_use]
    pub fn coordinates<R: Ring>(&self, p: &SparsePoly<R>) -> Option<Vec<R>> {
        let mut coords = vec![R::zero(); self.dimension()];
        for (m, c) in p.terms() {
            coords[self.index_of(m)?] = c.clone();
        }
        Some(coords)
    }
}
