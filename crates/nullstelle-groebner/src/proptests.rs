//! Property-based tests for Gröbner basis computation.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use nullstelle_poly::{MonomialOrder, PackedMonomial, SparsePoly};
    use nullstelle_rings::{Ring, Q};

    use crate::{groebner_basis, normal_form};

    fn small_poly(order: MonomialOrder) -> impl Strategy<Value = SparsePoly<Q>> {
        prop::collection::vec((-3i64..=3, 0u16..3, 0u16..3), 1..4).prop_map(move |terms| {
            let terms = terms
                .into_iter()
                .map(|(c, a, b)| (PackedMonomial::new(&[a, b]), Q::from_integer(c)))
                .collect();
            SparsePoly::new(terms, 2, order)
        })
    }

    fn order() -> impl Strategy<Value = MonomialOrder> {
        prop_oneof![
            Just(MonomialOrder::Lex),
            Just(MonomialOrder::Grlex),
            Just(MonomialOrder::Grevlex),
        ]
    }

    fn system() -> impl Strategy<Value = Vec<SparsePoly<Q>>> {
        order().prop_flat_map(|o| prop::collection::vec(small_poly(o), 1..3))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn generators_are_members(gens in system()) {
            let gb = groebner_basis(gens.clone());
            for g in &gens {
                prop_assert!(gb.contains(g));
            }
        }

        #[test]
        fn basis_is_reduced_and_monic(gens in system()) {
            let gb = groebner_basis(gens);
            let polys = gb.polys();
            for (i, g) in polys.iter().enumerate() {
                prop_assert!(g.leading_coeff().is_some_and(|c| c.is_one()));
                let others: Vec<_> = polys
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .map(|(_, h)| h.clone())
                    .collect();
                prop_assert_eq!(&normal_form(g, &others), g);
            }
        }

        #[test]
        fn s_polynomials_reduce_to_zero(gens in system()) {
            let gb = groebner_basis(gens);
            let polys = gb.polys();
            for (i, f) in polys.iter().enumerate() {
                for g in &polys[i + 1..] {
                    let (lm_f, lm_g) = (f.leading_monomial().unwrap(), g.leading_monomial().unwrap());
                    let lcm = lm_f.lcm(lm_g);
                    let one = Q::one();
                    let s = f
                        .mul_term(&lcm.div(lm_f).unwrap(), &one)
                        .sub_scaled(g, &lcm.div(lm_g).unwrap(), &one);
                    prop_assert!(gb.contains(&s));
                }
            }
        }
    }
}
