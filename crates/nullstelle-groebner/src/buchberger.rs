//! Buchberger's algorithm with sugar selection and batched reduction.
//!
//! Each step selects the pairs of minimal sugar degree, reduces their
//! S-polynomials against the current basis in parallel, then adds the
//! non-zero remainders one by one.

use rayon::prelude::*;
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use nullstelle_poly::{MonomialOrder, PackedMonomial, SparsePoly};
use nullstelle_rings::traits::Field;

use crate::basis::GroebnerBasis;
use crate::criteria::{chain_criterion, pair_key, product_criterion, sugar_selection, CriticalPair};
use crate::reduce::normal_form;

/// Configuration for Buchberger's algorithm.
#[derive(Clone, Debug)]
pub struct BuchbergerConfig {
    /// Whether to select pairs by sugar degree.
    pub use_sugar: bool,
    /// Whether to apply the chain criterion.
    pub use_chain_criterion: bool,
    /// Maximum number of pairs per step when sugar selection is off.
    pub batch_size: usize,
}

impl Default for BuchbergerConfig {
    fn default() -> Self {
        Self {
            use_sugar: true,
            use_chain_criterion: true,
            batch_size: 64,
        }
    }
}

/// Running state of Buchberger's algorithm.
pub struct Buchberger<R: Field> {
    /// Current basis, monic.
    basis: Vec<SparsePoly<R>>,
    /// Sugar degree of each basis element.
    sugars: Vec<u32>,
    /// Pending pairs.
    pairs: Vec<CriticalPair>,
    /// Pairs that were reduced or discarded.
    settled: FxHashSet<(usize, usize)>,
    config: BuchbergerConfig,
    num_vars: usize,
    order: MonomialOrder,
}

impl<R: Field + Send + Sync> Buchberger<R> {
    /// Creates a new instance from generators.
    ///
    /// Generators are converted to `order` and made monic; zero generators
    /// are ignored.
    ///
    /// # Panics
    ///
    /// Panics if a generator has a different number of variables.
    pub fn new(
        generators: Vec<SparsePoly<R>>,
        num_vars: usize,
        order: MonomialOrder,
        config: BuchbergerConfig,
    ) -> Self {
        let mut state = Self {
            basis: Vec::new(),
            sugars: Vec::new(),
            pairs: Vec::new(),
            settled: FxHashSet::default(),
            config,
            num_vars,
            order,
        };

        for g in generators {
            assert_eq!(g.num_vars(), num_vars, "generator has wrong number of variables");
            if g.is_zero() {
                continue;
            }
            let g = if g.order() == order { g } else { g.with_order(order) };
            let sugar = g.total_degree();
            state.add_to_basis(g.make_monic(), sugar);
        }

        state
    }

    /// Runs the algorithm to completion and returns the reduced basis.
    pub fn compute(mut self) -> GroebnerBasis<R> {
        while !self.pairs.is_empty() {
            self.step();
        }

        debug!(
            basis_size = self.basis.len(),
            settled_pairs = self.settled.len(),
            "buchberger finished"
        );

        GroebnerBasis::from_groebner(self.basis, self.num_vars, self.order)
    }

    /// Performs one step of the algorithm.
    fn step(&mut self) {
        let selected = if self.config.use_sugar {
            sugar_selection(&mut self.pairs)
        } else {
            let n = self.pairs.len().min(self.config.batch_size.max(1));
            self.pairs.drain(..n).collect()
        };

        let leading: Vec<PackedMonomial> = self
            .basis
            .iter()
            .filter_map(|g| g.leading_monomial().copied())
            .collect();

        let mut batch = Vec::with_capacity(selected.len());
        for pair in selected {
            let redundant =
                self.config.use_chain_criterion && chain_criterion(&pair, &leading, &self.settled);
            self.settled.insert(pair.key());
            if !redundant {
                batch.push(pair);
            }
        }

        if batch.is_empty() {
            return;
        }

        trace!(batch = batch.len(), pending = self.pairs.len(), "reducing S-polynomials");

        let remainders = self.reduce_spolys(&batch);

        // Remainders of one batch are not reduced against each other yet.
        for (poly, sugar) in remainders {
            let poly = normal_form(&poly, &self.basis);
            if !poly.is_zero() {
                self.add_to_basis(poly.make_monic(), sugar);
            }
        }
    }

    /// Reduces a batch of S-polynomials against the current basis.
    fn reduce_spolys(&self, pairs: &[CriticalPair]) -> Vec<(SparsePoly<R>, u32)> {
        pairs
            .par_iter()
            .filter_map(|pair| {
                let spoly = self.s_polynomial(pair)?;
                let remainder = normal_form(&spoly, &self.basis);
                (!remainder.is_zero()).then_some((remainder, pair.sugar))
            })
            .collect()
    }

    /// Computes the S-polynomial of a pair.
    fn s_polynomial(&self, pair: &CriticalPair) -> Option<SparsePoly<R>> {
        let f = self.basis.get(pair.i)?;
        let g = self.basis.get(pair.j)?;

        let (lm_f, lc_f) = f.leading_term()?;
        let (lm_g, lc_g) = g.leading_term()?;

        let mult_f = pair.lcm.div(lm_f)?;
        let mult_g = pair.lcm.div(lm_g)?;

        // S(f, g) = lc_g * mult_f * f - lc_f * mult_g * g
        Some(f.mul_term(&mult_f, lc_g).sub_scaled(g, &mult_g, lc_f))
    }

    /// Adds a monic polynomial to the basis and generates its pairs.
    fn add_to_basis(&mut self, poly: SparsePoly<R>, sugar: u32) {
        let new_idx = self.basis.len();
        let Some(lm_new) = poly.leading_monomial().copied() else {
            return;
        };

        for (i, existing) in self.basis.iter().enumerate() {
            let Some(lm_i) = existing.leading_monomial() else {
                continue;
            };

            if product_criterion(lm_i, &lm_new) {
                self.settled.insert(pair_key(i, new_idx));
                continue;
            }

            self.pairs.push(CriticalPair::new(
                i,
                new_idx,
                lm_i,
                &lm_new,
                self.sugars[i],
                sugar,
            ));
        }

        self.basis.push(poly);
        self.sugars.push(sugar);
    }

    /// Returns the current number of basis elements.
    #[must_use]
    pub fn basis_size(&self) -> usize {
        self.basis.len()
    }
}

/// Computes the reduced Gröbner basis of the ideal generated by `generators`.
///
/// The variable count and monomial order are taken from the first generator.
///
/// # Panics
///
/// Panics if `generators` is empty.
pub fn groebner_basis<R: Field + Send + Sync>(generators: Vec<SparsePoly<R>>) -> GroebnerBasis<R> {
    let first = generators.first().expect("at least one generator is required");
    let (num_vars, order) = (first.num_vars(), first.order());
    Buchberger::new(generators, num_vars, order, BuchbergerConfig::default()).compute()
}
