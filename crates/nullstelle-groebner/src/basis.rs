//! Reduced Gröbner bases and the queries built on them.

use nullstelle_poly::{MonomialOrder, PackedMonomial, SparsePoly};
use nullstelle_rings::traits::Field;

use crate::reduce::normal_form;
use crate::staircase::Staircase;

/// A reduced Gröbner basis.
///
/// Every element is monic, no leading monomial divides another, and no
/// term of an element is divisible by the leading monomial of another
/// element. Elements are sorted by descending leading monomial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroebnerBasis<R: Field> {
    polys: Vec<SparsePoly<R>>,
    num_vars: usize,
    order: MonomialOrder,
}

impl<R: Field> GroebnerBasis<R> {
    /// Reduces an arbitrary Gröbner basis to the reduced one.
    pub(crate) fn from_groebner(
        polys: Vec<SparsePoly<R>>,
        num_vars: usize,
        order: MonomialOrder,
    ) -> Self {
        let mut polys: Vec<_> = polys.into_iter().filter(|p| !p.is_zero()).collect();
        polys.sort_by(|a, b| match (a.leading_monomial(), b.leading_monomial()) {
            (Some(x), Some(y)) => order.compare(x, y),
            _ => std::cmp::Ordering::Equal,
        });

        // Minimalize: drop elements whose leading monomial is divisible by an
        // earlier (smaller or equal) one.
        let mut minimal: Vec<SparsePoly<R>> = Vec::with_capacity(polys.len());
        for p in polys {
            let redundant = p.leading_monomial().is_some_and(|lm| {
                minimal
                    .iter()
                    .filter_map(SparsePoly::leading_monomial)
                    .any(|other| lm.is_divisible_by(other))
            });
            if !redundant {
                minimal.push(p);
            }
        }

        // Inter-reduce tails. Leading monomials are pairwise non-divisible,
        // so each leading term survives its own reduction.
        let reduced: Vec<SparsePoly<R>> = (0..minimal.len())
            .map(|i| {
                let others: Vec<_> = minimal
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .map(|(_, g)| g.clone())
                    .collect();
                normal_form(&minimal[i], &others).make_monic()
            })
            .collect();

        let mut polys = reduced;
        polys.reverse();

        Self {
            polys,
            num_vars,
            order,
        }
    }

    /// Returns the basis polynomials.
    #[must_use]
    pub fn polys(&self) -> &[SparsePoly<R>] {
        &self.polys
    }

    /// Returns the number of basis elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.polys.len()
    }

    /// Returns true if the basis is empty (the zero ideal).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polys.is_empty()
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Returns the monomial ordering.
    #[must_use]
    pub fn order(&self) -> MonomialOrder {
        self.order
    }

    /// Returns the leading monomials.
    pub fn leading_monomials(&self) -> impl Iterator<Item = &PackedMonomial> {
        self.polys.iter().filter_map(SparsePoly::leading_monomial)
    }

    /// Computes the normal form of `p` modulo the ideal.
    ///
    /// # Panics
    ///
    /// Panics if `p` has a different number of variables.
    #[must_use]
    pub fn normal_form(&self, p: &SparsePoly<R>) -> SparsePoly<R> {
        assert_eq!(p.num_vars(), self.num_vars, "polynomial has wrong number of variables");
        if p.order() == self.order {
            normal_form(p, &self.polys)
        } else {
            normal_form(&p.with_order(self.order), &self.polys)
        }
    }

    /// Tests ideal membership.
    #[must_use]
    pub fn contains(&self, p: &SparsePoly<R>) -> bool {
        self.normal_form(p).is_zero()
    }

    /// Returns true if the ideal contains 1 (the variety is empty).
    #[must_use]
    pub fn is_unit_ideal(&self) -> bool {
        self.polys.iter().any(SparsePoly::is_nonzero_constant)
    }

    /// For each variable, the smallest `k` with `x_i^k` a leading monomial.
    fn pure_power_bounds(&self) -> Option<Vec<u16>> {
        let mut bounds = vec![None; self.num_vars];
        for lm in self.leading_monomials() {
            if let Some(i) = lm.pure_power_var() {
                let k = lm.exponent(i);
                bounds[i] = Some(bounds[i].map_or(k, |b: u16| b.min(k)));
            }
        }
        bounds.into_iter().collect()
    }

    /// Returns true if the ideal has finitely many solutions.
    ///
    /// The unit ideal counts as zero-dimensional (it has none).
    #[must_use]
    pub fn is_zero_dimensional(&self) -> bool {
        self.is_unit_ideal() || self.pure_power_bounds().is_some()
    }

    /// Returns the monomial basis of the quotient ring.
    ///
    /// Returns `None` if the ideal is not zero-dimensional or is the unit
    /// ideal.
    #[must_use]
    pub fn staircase(&self) -> Option<Staircase> {
        if self.is_unit_ideal() {
            return None;
        }
        let bounds = self.pure_power_bounds()?;
        let leading: Vec<_> = self.leading_monomials().copied().collect();
        Some(Staircase::enumerate(&leading, &bounds, self.order))
    }
}
