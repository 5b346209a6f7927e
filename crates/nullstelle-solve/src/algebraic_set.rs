//! Algebraic sets given by polynomial equalities.

use std::sync::OnceLock;

use num_traits::ToPrimitive;
use tracing::debug;

use nullstelle_groebner::{Buchberger, BuchbergerConfig, GroebnerBasis};
use nullstelle_poly::{MonomialOrder, SparsePoly};
use nullstelle_rings::traits::Field;

/// The common zero set of a list of polynomials.
///
/// The Gröbner basis is computed on first use and cached; the set itself
/// never changes after construction.
#[derive(Clone, Debug)]
pub struct AlgebraicSet<R: Field> {
    equalities: Vec<SparsePoly<R>>,
    num_vars: usize,
    order: MonomialOrder,
    config: BuchbergerConfig,
    groebner: OnceLock<GroebnerBasis<R>>,
}

impl<R: Field + Send + Sync> AlgebraicSet<R> {
    /// Creates the set `{ x : p(x) = 0 for every p in equalities }`.
    ///
    /// Equalities are converted to `order`.
    ///
    /// # Panics
    ///
    /// Panics if an equality has a different number of variables.
    #[must_use]
    pub fn new(equalities: Vec<SparsePoly<R>>, num_vars: usize, order: MonomialOrder) -> Self {
        let equalities = equalities
            .into_iter()
            .map(|p| {
                assert_eq!(p.num_vars(), num_vars, "equality has wrong number of variables");
                if p.order() == order {
                    p
                } else {
                    p.with_order(order)
                }
            })
            .collect();

        Self {
            equalities,
            num_vars,
            order,
            config: BuchbergerConfig::default(),
            groebner: OnceLock::new(),
        }
    }

    /// The whole affine space in `num_vars` variables.
    #[must_use]
    pub fn universe(num_vars: usize, order: MonomialOrder) -> Self {
        Self::new(Vec::new(), num_vars, order)
    }

    /// Replaces the Gröbner basis configuration.
    #[must_use]
    pub fn with_config(self, config: BuchbergerConfig) -> Self {
        Self {
            config,
            groebner: OnceLock::new(),
            ..self
        }
    }

    /// Returns the defining equalities.
    #[must_use]
    pub fn equalities(&self) -> &[SparsePoly<R>] {
        &self.equalities
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

    /// Returns the reduced Gröbner basis of the defining ideal.
    pub fn groebner_basis(&self) -> &GroebnerBasis<R> {
        self.groebner.get_or_init(|| {
            let gb = Buchberger::new(
                self.equalities.clone(),
                self.num_vars,
                self.order,
                self.config.clone(),
            )
            .compute();
            debug!(
                equalities = self.equalities.len(),
                basis_size = gb.len(),
                "computed groebner basis"
            );
            gb
        })
    }

    /// Reduces `p` to its normal form modulo the defining ideal.
    #[must_use]
    pub fn reduce(&self, p: &SparsePoly<R>) -> SparsePoly<R> {
        self.groebner_basis().normal_form(p)
    }

    /// Returns true if the set has no points, even over the complex numbers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groebner_basis().is_unit_ideal()
    }

    /// Returns true if the set is finite.
    #[must_use]
    pub fn is_zero_dimensional(&self) -> bool {
        self.groebner_basis().is_zero_dimensional()
    }

    /// Intersects two sets by joining their equalities.
    ///
    /// # Panics
    ///
    /// Panics if the sets live in different spaces or use different orders.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        assert_eq!(self.num_vars, other.num_vars, "sets have different numbers of variables");
        assert_eq!(self.order, other.order, "sets use different monomial orders");

        let equalities = self
            .equalities
            .iter()
            .chain(&other.equalities)
            .cloned()
            .collect();
        Self::new(equalities, self.num_vars, self.order).with_config(self.config.clone())
    }
}

impl<R: Field + ToPrimitive> AlgebraicSet<R> {
    /// Largest absolute value of an equality at `point`.
    ///
    /// Returns `None` if a coefficient has no finite `f64` image.
    #[must_use]
    pub fn max_residual(&self, point: &[f64]) -> Option<f64> {
        self.equalities
            .iter()
            .try_fold(0.0f64, |acc, p| Some(acc.max(p.evaluate_f64(point)?.abs())))
    }
}
