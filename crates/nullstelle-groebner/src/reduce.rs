//! Multivariate division.

use nullstelle_poly::{PackedMonomial, SparsePoly};
use nullstelle_rings::traits::Field;

/// Finds the first divisor whose leading monomial divides `m`.
///
/// Returns the divisor, the cofactor monomial and the divisor's leading
/// coefficient.
pub(crate) fn find_reducer<'a, R: Field>(
    m: &PackedMonomial,
    divisors: &'a [SparsePoly<R>],
) -> Option<(&'a SparsePoly<R>, PackedMonomial, &'a R)> {
    divisors.iter().find_map(|g| {
        let (lm, lc) = g.leading_term()?;
        m.div(lm).map(|mult| (g, mult, lc))
    })
}

/// Computes the fully reduced remainder of `p` on division by `divisors`.
///
/// No term of the result is divisible by a leading monomial of a divisor.
/// When `divisors` is a Gröbner basis the remainder is the unique normal
/// form of `p`.
#[must_use]
pub fn normal_form<R: Field>(p: &SparsePoly<R>, divisors: &[SparsePoly<R>]) -> SparsePoly<R> {
    let mut p = p.clone();
    let mut remainder = Vec::new();

    while let Some((lm, lc)) = p.leading_term().cloned() {
        match find_reducer(&lm, divisors) {
            Some((g, mult, lc_g)) => {
                let ratio = lc.field_div(lc_g);
                p = p.sub_scaled(g, &mult, &ratio);
            }
            None => {
                p.pop_leading();
                remainder.push((lm, lc));
            }
        }
    }

    SparsePoly::new(remainder, p.num_vars(), p.order())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nullstelle_poly::MonomialOrder;
    use nullstelle_rings::Q;

    fn q(n: i64) -> Q {
        Q::from_integer(n)
    }

    #[test]
    fn test_remainder_of_univariate_division() {
        let order = MonomialOrder::Grevlex;
        // x^3 mod (x^2 - 2) = 2x
        let p = SparsePoly::from_exponents(&[(q(1), &[3])], 1, order);
        let g = SparsePoly::from_exponents(&[(q(1), &[2]), (q(-2), &[0])], 1, order);

        let r = normal_form(&p, &[g]);
        assert_eq!(r, SparsePoly::from_exponents(&[(q(2), &[1])], 1, order));
    }

    #[test]
    fn test_tail_terms_are_reduced() {
        let order = MonomialOrder::Lex;
        // p = x + y^2, divisors { y - 1 }: remainder x + 1
        let p = SparsePoly::from_exponents(&[(q(1), &[1, 0]), (q(1), &[0, 2])], 2, order);
        let g = SparsePoly::from_exponents(&[(q(1), &[0, 1]), (q(-1), &[0, 0])], 2, order);

        let r = normal_form(&p, &[g]);
        let expected = SparsePoly::from_exponents(&[(q(1), &[1, 0]), (q(1), &[0, 0])], 2, order);
        assert_eq!(r, expected);
    }

    #[test]
    fn test_no_divisors() {
        let order = MonomialOrder::Grevlex;
        let p = SparsePoly::from_exponents(&[(q(3), &[1, 1]), (q(1), &[0, 0])], 2, order);
        assert_eq!(normal_form(&p, &[]), p);
    }
}
