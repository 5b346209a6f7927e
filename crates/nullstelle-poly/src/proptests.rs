//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use nullstelle_rings::{Ring, Q};

    use crate::{MonomialOrder, PackedMonomial, SparsePoly};

    const NUM_VARS: usize = 2;

    fn small_poly() -> impl Strategy<Value = SparsePoly<Q>> {
        prop::collection::vec((-5i64..5, 0u16..3, 0u16..3), 0..5).prop_map(|terms| {
            let terms = terms
                .into_iter()
                .map(|(c, a, b)| (PackedMonomial::new(&[a, b]), Q::from_integer(c)))
                .collect();
            SparsePoly::new(terms, NUM_VARS, MonomialOrder::Grevlex)
        })
    }

    fn point() -> impl Strategy<Value = Vec<f64>> {
        prop::collection::vec(-2i32..=2, NUM_VARS)
            .prop_map(|v| v.into_iter().map(f64::from).collect())
    }

    proptest! {
        #[test]
        fn add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.mul(&b.add(&c)), a.mul(&b).add(&a.mul(&c)));
        }

        #[test]
        fn sub_self_is_zero(a in small_poly()) {
            prop_assert!(a.sub(&a).is_zero());
        }

        #[test]
        fn terms_strictly_descending(a in small_poly(), b in small_poly()) {
            let p = a.mul(&b);
            for w in p.terms().windows(2) {
                prop_assert_eq!(
                    p.order().compare(&w[0].0, &w[1].0),
                    std::cmp::Ordering::Greater
                );
            }
            prop_assert!(p.terms().iter().all(|(_, c)| !c.is_zero()));
        }

        #[test]
        fn sub_scaled_matches_definition(
            a in small_poly(),
            b in small_poly(),
            e in 0u16..3,
            c in -3i64..3,
        ) {
            let m = PackedMonomial::new(&[e, 0]);
            let c = Q::from_integer(c);
            prop_assert_eq!(a.sub_scaled(&b, &m, &c), a.sub(&b.mul_term(&m, &c)));
        }

        #[test]
        fn evaluation_is_a_homomorphism(a in small_poly(), b in small_poly(), x in point()) {
            let lhs = a.mul(&b).evaluate_f64(&x).unwrap();
            let rhs = a.evaluate_f64(&x).unwrap() * b.evaluate_f64(&x).unwrap();
            prop_assert!((lhs - rhs).abs() < 1e-9);
        }
    }
}
