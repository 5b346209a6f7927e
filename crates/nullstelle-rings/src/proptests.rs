//! Property-based tests for exact rational arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::ToPrimitive;
    use proptest::prelude::*;

    use crate::{Field, Ring, Q};

    fn small_q() -> impl Strategy<Value = Q> {
        (-1000i64..1000i64, 1i64..100i64).prop_map(|(n, d)| Q::new(n, d))
    }

    fn nonzero_q() -> impl Strategy<Value = Q> {
        small_q().prop_filter("rational must be non-zero", |q| !q.is_zero())
    }

    proptest! {
        #[test]
        fn add_commutative(a in small_q(), b in small_q()) {
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn mul_associative(a in small_q(), b in small_q(), c in small_q()) {
            prop_assert_eq!(
                (a.clone() * b.clone()) * c.clone(),
                a * (b * c)
            );
        }

        #[test]
        fn distributive(a in small_q(), b in small_q(), c in small_q()) {
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn additive_inverse(a in small_q()) {
            prop_assert!((a.clone() + (-a)).is_zero());
        }

        #[test]
        fn multiplicative_inverse(a in nonzero_q()) {
            let inv = a.inv().unwrap();
            prop_assert!((a * inv).is_one());
        }

        #[test]
        fn f64_image_is_close(n in -1000i64..1000i64, d in 1i64..100i64) {
            let q = Q::new(n, d);
            let expected = n as f64 / d as f64;
            let approx = q.to_f64().unwrap();
            prop_assert!((approx - expected).abs() <= 1e-12 * expected.abs().max(1.0));
        }
    }
}
