//! Buchberger criteria for discarding useless critical pairs.
//!
//! Both criteria detect pairs whose S-polynomial is guaranteed to reduce to
//! zero, so the pair can be dropped without reducing it.

use rustc_hash::FxHashSet;

use nullstelle_poly::PackedMonomial;

/// A critical pair `(i, j)` of basis indices with `i < j`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CriticalPair {
    /// Index of the first polynomial.
    pub i: usize,
    /// Index of the second polynomial.
    pub j: usize,
    /// lcm of the two leading monomials.
    pub lcm: PackedMonomial,
    /// Sugar degree of the S-polynomial.
    pub sugar: u32,
}

impl CriticalPair {
    /// Creates the pair for basis elements `i` and `j`.
    ///
    /// The sugar of `S(f, g)` is the larger of the sugars of the two shifted
    /// operands `lcm/lm(f) * f` and `lcm/lm(g) * g`.
    #[must_use]
    pub fn new(
        i: usize,
        j: usize,
        lm_i: &PackedMonomial,
        lm_j: &PackedMonomial,
        sugar_i: u32,
        sugar_j: u32,
    ) -> Self {
        let (i, j) = if i < j { (i, j) } else { (j, i) };
        let lcm = lm_i.lcm(lm_j);
        let shift = |lm: &PackedMonomial| lcm.total_degree() - lm.total_degree();
        let sugar = (sugar_i + shift(lm_i)).max(sugar_j + shift(lm_j));

        Self { i, j, lcm, sugar }
    }

    /// Returns the pair as an ordered key.
    #[must_use]
    pub fn key(&self) -> (usize, usize) {
        (self.i, self.j)
    }
}

/// Orders an index pair as a key.
#[must_use]
pub fn pair_key(a: usize, b: usize) -> (usize, usize) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Checks Buchberger's first criterion (product criterion).
///
/// If the leading monomials are coprime, S(f, g) reduces to zero.
#[must_use]
pub fn product_criterion(lm_f: &PackedMonomial, lm_g: &PackedMonomial) -> bool {
    lm_f.is_coprime(lm_g)
}

/// Checks Buchberger's second criterion (chain criterion).
///
/// The pair `(i, j)` is redundant if some other basis element `h` has a
/// leading monomial dividing `lcm(lm(f), lm(g))` and both pairs `(i, h)` and
/// `(j, h)` are already settled.
#[must_use]
pub fn chain_criterion(
    pair: &CriticalPair,
    leading: &[PackedMonomial],
    settled: &FxHashSet<(usize, usize)>,
) -> bool {
    leading.iter().enumerate().any(|(k, lm_h)| {
        k != pair.i
            && k != pair.j
            && pair.lcm.is_divisible_by(lm_h)
            && settled.contains(&pair_key(pair.i, k))
            && settled.contains(&pair_key(pair.j, k))
    })
}

/// Removes and returns the pairs of minimal sugar degree.
///
/// Ties are broken by index so that the selection is deterministic.
pub fn sugar_selection(pairs: &mut Vec<CriticalPair>) -> Vec<CriticalPair> {
    pairs.sort_by(|a, b| a.sugar.cmp(&b.sugar).then_with(|| a.key().cmp(&b.key())));

    let Some(min_sugar) = pairs.first().map(|p| p.sugar) else {
        return Vec::new();
    };
    let count = pairs.iter().take_while(|p| p.sugar == min_sugar).count();
    pairs.drain(..count).collect()
}
