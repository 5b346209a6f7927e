//! Packed monomial representation.
//!
//! Exponents live in a fixed-size array so monomials are `Copy` and can be
//! compared, multiplied and tested for divisibility without allocation.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Maximum number of variables supported.
pub const MAX_VARS: usize = 16;

/// A monomial `x_0^e_0 * ... * x_{n-1}^e_{n-1}` with up to [`MAX_VARS`] variables.
///
/// Each exponent is stored as a `u16`. The total degree is cached because
/// every graded ordering consults it first.
#[derive(Clone, Copy)]
pub struct PackedMonomial {
    exponents: [u16; MAX_VARS],
    num_vars: u8,
    total_degree: u32,
}

impl PackedMonomial {
    /// Creates a monomial from its exponent vector.
    ///
    /// # Panics
    ///
    /// Panics if more than [`MAX_VARS`] exponents are given.
    #[must_use]
    pub fn new(exps: &[u16]) -> Self {
        assert!(
            exps.len() <= MAX_VARS,
            "at most {MAX_VARS} variables are supported, got {}",
            exps.len()
        );
        let mut exponents = [0u16; MAX_VARS];
        exponents[..exps.len()].copy_from_slice(exps);

        Self {
            exponents,
            num_vars: exps.len() as u8,
            total_degree: exps.iter().map(|&e| u32::from(e)).sum(),
        }
    }

    /// Creates the monomial 1.
    #[must_use]
    pub fn one(num_vars: usize) -> Self {
        assert!(num_vars <= MAX_VARS, "at most {MAX_VARS} variables are supported");
        Self {
            exponents: [0u16; MAX_VARS],
            num_vars: num_vars as u8,
            total_degree: 0,
        }
    }

    /// Creates the monomial x_i.
    #[must_use]
    pub fn var(i: usize, num_vars: usize) -> Self {
        assert!(i < num_vars, "variable index {i} out of range for {num_vars} variables");
        let mut m = Self::one(num_vars);
        m.exponents[i] = 1;
        m.total_degree = 1;
        m
    }

    /// Returns the exponent of variable i (zero beyond `num_vars`).
    #[must_use]
    pub fn exponent(&self, i: usize) -> u16 {
        self.exponents.get(i).copied().unwrap_or(0)
    }

    /// Returns the active exponents.
    #[must_use]
    pub fn exponents(&self) -> &[u16] {
        &self.exponents[..self.num_vars as usize]
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.num_vars as usize
    }

    /// Returns the total degree.
    #[must_use]
    pub fn total_degree(&self) -> u32 {
        self.total_degree
    }

    /// Returns true for the monomial 1.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.total_degree == 0
    }

    /// Returns true if this is a pure power `x_i^k` with `k > 0`, and which `i`.
    #[must_use]
    pub fn pure_power_var(&self) -> Option<usize> {
        let mut found = None;
        for (i, &e) in self.exponents().iter().enumerate() {
            if e > 0 {
                if found.is_some() {
                    return None;
                }
                found = Some(i);
            }
        }
        found
    }

    fn width(&self, other: &Self) -> usize {
        self.num_vars.max(other.num_vars) as usize
    }

    fn from_fn(num_vars: usize, f: impl Fn(usize) -> u16) -> Self {
        let mut exponents = [0u16; MAX_VARS];
        let mut total_degree = 0u32;
        for (i, e) in exponents.iter_mut().enumerate().take(num_vars) {
            *e = f(i);
            total_degree += u32::from(*e);
        }
        Self {
            exponents,
            num_vars: num_vars as u8,
            total_degree,
        }
    }

    /// Multiplies two monomials.
    ///
    /// # Panics
    ///
    /// Panics if an exponent overflows `u16`.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        Self::from_fn(self.width(other), |i| {
            self.exponents[i]
                .checked_add(other.exponents[i])
                .expect("monomial exponent overflow")
        })
    }

    /// Divides by `other`, or returns `None` if `other` does not divide `self`.
    #[must_use]
    pub fn div(&self, other: &Self) -> Option<Self> {
        if !self.is_divisible_by(other) {
            return None;
        }
        Some(Self::from_fn(self.width(other), |i| {
            self.exponents[i] - other.exponents[i]
        }))
    }

    /// Checks if `other` divides `self`.
    #[must_use]
    pub fn is_divisible_by(&self, other: &Self) -> bool {
        other.total_degree <= self.total_degree
            && (0..self.width(other)).all(|i| other.exponents[i] <= self.exponents[i])
    }

    /// Least common multiple.
    #[must_use]
    pub fn lcm(&self, other: &Self) -> Self {
        Self::from_fn(self.width(other), |i| {
            self.exponents[i].max(other.exponents[i])
        })
    }

    /// Greatest common divisor.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        Self::from_fn(self.width(other), |i| {
            self.exponents[i].min(other.exponents[i])
        })
    }

    /// Checks if the two monomials share no variable.
    #[must_use]
    pub fn is_coprime(&self, other: &Self) -> bool {
        (0..self.width(other)).all(|i| self.exponents[i] == 0 || other.exponents[i] == 0)
    }

    /// Pure lexicographic comparison (x_0 > x_1 > ...).
    #[must_use]
    pub fn cmp_lex(&self, other: &Self) -> Ordering {
        let n = self.width(other);
        self.exponents[..n].cmp(&other.exponents[..n])
    }

    /// Graded lexicographic comparison.
    #[must_use]
    pub fn cmp_grlex(&self, other: &Self) -> Ordering {
        self.total_degree
            .cmp(&other.total_degree)
            .then_with(|| self.cmp_lex(other))
    }

    /// Graded reverse lexicographic comparison.
    #[must_use]
    pub fn cmp_grevlex(&self, other: &Self) -> Ordering {
        self.total_degree.cmp(&other.total_degree).then_with(|| {
            // Smaller exponent in the last differing variable wins.
            (0..self.width(other))
                .rev()
                .map(|i| other.exponents[i].cmp(&self.exponents[i]))
                .find(|ord| ord.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    }

    /// Formats the monomial using the given variable names.
    #[must_use]
    pub fn display_with(&self, names: &[&str]) -> String {
        let parts: Vec<String> = self
            .exponents()
            .iter()
            .enumerate()
            .filter(|&(_, &e)| e > 0)
            .map(|(i, &e)| {
                let name = names.get(i).map_or_else(|| format!("x{i}"), |s| (*s).to_string());
                if e == 1 {
                    name
                } else {
                    format!("{name}^{e}")
                }
            })
            .collect();

        if parts.is_empty() {
            "1".to_string()
        } else {
            parts.join("*")
        }
    }
}

impl PartialEq for PackedMonomial {
    fn eq(&self, other: &Self) -> bool {
        // Exponents beyond num_vars are always zero, so compare the full array.
        self.total_degree == other.total_degree && self.exponents == other.exponents
    }
}

impl Eq for PackedMonomial {}

impl Hash for PackedMonomial {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.exponents.hash(state);
    }
}

impl fmt::Debug for PackedMonomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mono({})", self.display_with(&[]))
    }
}

impl fmt::Display for PackedMonomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_with(&[]))
    }
}
