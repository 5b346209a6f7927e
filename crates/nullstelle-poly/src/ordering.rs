//! Monomial orderings.
//!
//! The ordering fixes which term of a polynomial leads, and therefore
//! the shape of a Gröbner basis and of the quotient-ring monomial basis.

use std::cmp::Ordering;

use crate::monomial::PackedMonomial;

/// A monomial ordering.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum MonomialOrder {
    /// Lexicographic order with x_0 > x_1 > ... > x_{n-1}.
    Lex,

    /// Total degree first, lexicographic as tiebreaker.
    Grlex,

    /// Total degree first, then the smaller exponent in the last
    /// differing variable wins.
    #[default]
    Grevlex,
}

impl MonomialOrder {
    /// Compares two monomials according to this ordering.
    #[must_use]
    pub fn compare(&self, a: &PackedMonomial, b: &PackedMonomial) -> Ordering {
        match self {
            MonomialOrder::Lex => a.cmp_lex(b),
            MonomialOrder::Grlex => a.cmp_grlex(b),
            MonomialOrder::Grevlex => a.cmp_grevlex(b),
        }
    }

    /// Returns a short name for the ordering.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            MonomialOrder::Lex => "lex",
            MonomialOrder::Grlex => "grlex",
            MonomialOrder::Grevlex => "grevlex",
        }
    }
}

impl std::fmt::Display for MonomialOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
