//! Sparse multivariate polynomials.
//!
//! Terms are kept sorted in descending order of the polynomial's monomial
//! ordering, so the leading term is always `terms[0]` and addition is a
//! linear merge.

use std::cmp::Ordering;

use num_traits::ToPrimitive;
use nullstelle_rings::traits::{Field, Ring};

use crate::monomial::PackedMonomial;
use crate::ordering::MonomialOrder;

/// A sparse multivariate polynomial.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SparsePoly<R: Ring> {
    /// Terms sorted by descending monomial, no zero coefficients.
    terms: Vec<(PackedMonomial, R)>,
    /// Number of variables.
    num_vars: usize,
    /// Monomial ordering used for sorting.
    order: MonomialOrder,
}

impl<R: Ring> SparsePoly<R> {
    /// Creates a polynomial from arbitrary terms.
    ///
    /// Terms are sorted, like terms are combined and zero terms dropped.
    #[must_use]
    pub fn new(terms: Vec<(PackedMonomial, R)>, num_vars: usize, order: MonomialOrder) -> Self {
        let mut terms = terms;
        terms.sort_by(|a, b| order.compare(&b.0, &a.0));

        let mut combined: Vec<(PackedMonomial, R)> = Vec::with_capacity(terms.len());
        for (m, c) in terms {
            match combined.last_mut() {
                Some((last, acc)) if *last == m => *acc = acc.clone() + c,
                _ => combined.push((m, c)),
            }
        }
        combined.retain(|(_, c)| !c.is_zero());

        Self {
            terms: combined,
            num_vars,
            order,
        }
    }

    /// Builds a polynomial from `(coefficient, exponents)` pairs.
    #[must_use]
    pub fn from_exponents(terms: &[(R, &[u16])], num_vars: usize, order: MonomialOrder) -> Self {
        let terms = terms
            .iter()
            .map(|(c, exps)| {
                assert_eq!(exps.len(), num_vars, "exponent vector has wrong length");
                (PackedMonomial::new(exps), c.clone())
            })
            .collect();
        Self::new(terms, num_vars, order)
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero(num_vars: usize, order: MonomialOrder) -> Self {
        Self {
            terms: Vec::new(),
            num_vars,
            order,
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one(num_vars: usize, order: MonomialOrder) -> Self {
        Self::constant(R::one(), num_vars, order)
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: R, num_vars: usize, order: MonomialOrder) -> Self {
        Self::monomial(PackedMonomial::one(num_vars), c, num_vars, order)
    }

    /// Creates the single-term polynomial `c * m`.
    #[must_use]
    pub fn monomial(m: PackedMonomial, c: R, num_vars: usize, order: MonomialOrder) -> Self {
        if c.is_zero() {
            return Self::zero(num_vars, order);
        }
        Self {
            terms: vec![(m, c)],
            num_vars,
            order,
        }
    }

    /// Creates the variable x_i.
    #[must_use]
    pub fn var(i: usize, num_vars: usize, order: MonomialOrder) -> Self {
        Self::monomial(PackedMonomial::var(i, num_vars), R::one(), num_vars, order)
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns true if the polynomial is a non-zero constant.
    #[must_use]
    pub fn is_nonzero_constant(&self) -> bool {
        self.terms.len() == 1 && self.terms[0].0.is_one()
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
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

    /// Returns the terms, leading term first.
    #[must_use]
    pub fn terms(&self) -> &[(PackedMonomial, R)] {
        &self.terms
    }

    /// Returns the leading monomial.
    #[must_use]
    pub fn leading_monomial(&self) -> Option<&PackedMonomial> {
        self.terms.first().map(|(m, _)| m)
    }

    /// Returns the leading coefficient.
    #[must_use]
    pub fn leading_coeff(&self) -> Option<&R> {
        self.terms.first().map(|(_, c)| c)
    }

    /// Returns the leading term.
    #[must_use]
    pub fn leading_term(&self) -> Option<&(PackedMonomial, R)> {
        self.terms.first()
    }

    /// Removes and returns the leading term.
    pub fn pop_leading(&mut self) -> Option<(PackedMonomial, R)> {
        if self.terms.is_empty() {
            None
        } else {
            Some(self.terms.remove(0))
        }
    }

    /// Returns the coefficient of `m` (zero if absent).
    #[must_use]
    pub fn coefficient(&self, m: &PackedMonomial) -> R {
        self.terms
            .binary_search_by(|(t, _)| self.order.compare(m, t))
            .map_or_else(|_| R::zero(), |idx| self.terms[idx].1.clone())
    }

    /// Re-sorts the polynomial for a different monomial ordering.
    #[must_use]
    pub fn with_order(&self, order: MonomialOrder) -> Self {
        Self::new(self.terms.clone(), self.num_vars, order)
    }

    fn assert_compatible(&self, other: &Self) {
        assert_eq!(self.num_vars, other.num_vars, "polynomials have different variable counts");
        assert_eq!(self.order, other.order, "polynomials use different monomial orders");
    }

    /// Merges sorted terms into `self`, assuming `others` is sorted descending.
    fn merge(&self, others: impl Iterator<Item = (PackedMonomial, R)>) -> Self {
        let mut result = Vec::with_capacity(self.terms.len());
        let mut mine = self.terms.iter().peekable();
        let mut others = others.peekable();

        loop {
            let ord = match (mine.peek(), others.peek()) {
                (None, None) => break,
                (Some(_), None) => Ordering::Greater,
                (None, Some(_)) => Ordering::Less,
                (Some((a, _)), Some((b, _))) => self.order.compare(a, b),
            };
            match ord {
                Ordering::Greater => {
                    if let Some(t) = mine.next() {
                        result.push(t.clone());
                    }
                }
                Ordering::Less => {
                    if let Some(t) = others.next() {
                        result.push(t);
                    }
                }
                Ordering::Equal => {
                    if let (Some((m, a)), Some((_, b))) = (mine.next(), others.next()) {
                        let c = a.clone() + b;
                        if !c.is_zero() {
                            result.push((*m, c));
                        }
                    }
                }
            }
        }

        Self {
            terms: result,
            num_vars: self.num_vars,
            order: self.order,
        }
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        self.assert_compatible(other);
        self.merge(other.terms.iter().cloned())
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            terms: self.terms.iter().map(|(m, c)| (*m, -c.clone())).collect(),
            num_vars: self.num_vars,
            order: self.order,
        }
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.assert_compatible(other);
        self.merge(other.terms.iter().map(|(m, c)| (*m, -c.clone())))
    }

    /// Computes `self - c * m * other` in a single merge.
    ///
    /// This is the elementary step of polynomial reduction.
    #[must_use]
    pub fn sub_scaled(&self, other: &Self, m: &PackedMonomial, c: &R) -> Self {
        self.assert_compatible(other);
        if c.is_zero() {
            return self.clone();
        }
        // Monomial orders are compatible with multiplication, so the shifted
        // terms stay sorted.
        self.merge(
            other
                .terms
                .iter()
                .map(|(om, oc)| (m.mul(om), -(c.clone() * oc.clone()))),
        )
    }

    /// Multiplies two polynomials (schoolbook).
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        self.assert_compatible(other);

        if self.is_zero() || other.is_zero() {
            return Self::zero(self.num_vars, self.order);
        }

        let mut terms = Vec::with_capacity(self.len() * other.len());
        for (m1, c1) in &self.terms {
            for (m2, c2) in &other.terms {
                terms.push((m1.mul(m2), c1.clone() * c2.clone()));
            }
        }

        Self::new(terms, self.num_vars, self.order)
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        self.mul_term(&PackedMonomial::one(self.num_vars), c)
    }

    /// Multiplies by the term `c * m`.
    #[must_use]
    pub fn mul_term(&self, m: &PackedMonomial, c: &R) -> Self {
        if c.is_zero() {
            return Self::zero(self.num_vars, self.order);
        }

        Self {
            terms: self
                .terms
                .iter()
                .map(|(t, x)| (m.mul(t), x.clone() * c.clone()))
                .filter(|(_, x)| !x.is_zero())
                .collect(),
            num_vars: self.num_vars,
            order: self.order,
        }
    }

    /// Computes the total degree (zero for the zero polynomial).
    #[must_use]
    pub fn total_degree(&self) -> u32 {
        self.terms
            .iter()
            .map(|(m, _)| m.total_degree())
            .max()
            .unwrap_or(0)
    }

    /// Formats the polynomial with the given variable names.
    #[must_use]
    pub fn display_with(&self, names: &[&str]) -> String
    where
        R: std::fmt::Display,
    {
        if self.is_zero() {
            return "0".to_string();
        }

        let terms: Vec<_> = self
            .terms
            .iter()
            .map(|(m, c)| {
                if m.is_one() {
                    format!("{c}")
                } else if c.is_one() {
                    m.display_with(names)
                } else {
                    format!("{c}*{}", m.display_with(names))
                }
            })
            .collect();

        terms.join(" + ")
    }
}

impl<R: Field> SparsePoly<R> {
    /// Divides through by the leading coefficient.
    #[must_use]
    pub fn make_monic(&self) -> Self {
        match self.leading_coeff().and_then(Field::inv) {
            Some(inv) if !inv.is_one() => self.scale(&inv),
            _ => self.clone(),
        }
    }
}

impl<R: Ring + ToPrimitive> SparsePoly<R> {
    /// Evaluates the polynomial at a floating-point point.
    ///
    /// Returns `None` if a coefficient has no finite `f64` image.
    ///
    /// # Panics
    ///
    /// Panics if `point` does not have one entry per variable.
    #[must_use]
    pub fn evaluate_f64(&self, point: &[f64]) -> Option<f64> {
        assert_eq!(point.len(), self.num_vars, "point has wrong dimension");
        self.terms.iter().try_fold(0.0, |acc, (m, c)| {
            let coeff = c.to_f64()?;
            let value = m
                .exponents()
                .iter()
                .zip(point)
                .fold(coeff, |v, (&e, &x)| v * x.powi(i32::from(e)));
            Some(acc + value)
        })
    }
}

impl<R: Ring + std::fmt::Display> std::fmt::Display for SparsePoly<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_with(&[]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nullstelle_rings::Q;

    fn q(n: i64) -> Q {
        Q::from_integer(n)
    }

    #[test]
    fn test_sparse_basic() {
        let order = MonomialOrder::Grevlex;
        let x = SparsePoly::<Q>::var(0, 2, order);
        let y = SparsePoly::<Q>::var(1, 2, order);

        let sum = x.add(&y);
        assert_eq!(sum.len(), 2);
        assert_eq!(sum.leading_monomial(), Some(&PackedMonomial::var(0, 2)));
        assert!(sum.sub(&x).sub(&y).is_zero());
    }

    #[test]
    fn test_sparse_mul() {
        let order = MonomialOrder::Grevlex;
        let x = SparsePoly::<Q>::var(0, 2, order);
        let one = SparsePoly::one(2, order);

        // (x + 1)^2 = x^2 + 2x + 1
        let xp1 = x.add(&one);
        let sq = xp1.mul(&xp1);
        assert_eq!(sq.len(), 3);
        assert_eq!(sq.coefficient(&PackedMonomial::var(0, 2)), q(2));
        assert_eq!(sq.coefficient(&PackedMonomial::var(1, 2)), q(0));
    }

    #[test]
    fn test_new_combines_like_terms() {
        let order = MonomialOrder::Lex;
        let x = PackedMonomial::var(0, 1);
        let p = SparsePoly::new(vec![(x, q(2)), (x, q(-2)), (PackedMonomial::one(1), q(5))], 1, order);
        assert_eq!(p.len(), 1);
        assert!(p.is_nonzero_constant());
    }

    #[test]
    fn test_sub_scaled() {
        let order = MonomialOrder::Grevlex;
        // p = x^2 - 1, g = x - 1; p - x * g = x - 1
        let p = SparsePoly::from_exponents(&[(q(1), &[2]), (q(-1), &[0])], 1, order);
        let g = SparsePoly::from_exponents(&[(q(1), &[1]), (q(-1), &[0])], 1, order);
        let r = p.sub_scaled(&g, &PackedMonomial::var(0, 1), &q(1));
        assert_eq!(r, g);
    }

    #[test]
    fn test_make_monic() {
        let order = MonomialOrder::Grevlex;
        let p = SparsePoly::from_exponents(&[(q(3), &[1, 0]), (q(6), &[0, 0])], 2, order);
        let monic = p.make_monic();
        assert!(monic.leading_coeff().unwrap().is_one());
        assert_eq!(monic.coefficient(&PackedMonomial::one(2)), q(2));
    }

    #[test]
    fn test_evaluate_f64() {
        let order = MonomialOrder::Grevlex;
        // x^2 + y/2 - 3 at (2, 4) = 4 + 2 - 3 = 3
        let p = SparsePoly::from_exponents(
            &[(q(1), &[2, 0]), (Q::new(1, 2), &[0, 1]), (q(-3), &[0, 0])],
            2,
            order,
        );
        assert_eq!(p.evaluate_f64(&[2.0, 4.0]), Some(3.0));
    }

    #[test]
    fn test_with_order() {
        // x + y^2: grevlex leads with y^2, lex leads with x.
        let p = SparsePoly::from_exponents(&[(q(1), &[1, 0]), (q(1), &[0, 2])], 2, MonomialOrder::Grevlex);
        assert_eq!(p.leading_monomial(), Some(&PackedMonomial::new(&[0, 2])));
        let lex = p.with_order(MonomialOrder::Lex);
        assert_eq!(lex.leading_monomial(), Some(&PackedMonomial::new(&[1, 0])));
    }

    #[test]
    fn test_display() {
        let p = SparsePoly::from_exponents(&[(q(2), &[1, 1]), (q(1), &[0, 1]), (q(-1), &[0, 0])], 2, MonomialOrder::Grevlex);
        assert_eq!(p.display_with(&["x", "y"]), "2*x*y + y + -1");
    }
}
