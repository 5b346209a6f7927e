//! The field of rational numbers Q.
//!
//! Polynomial systems are stated and reduced exactly over Q; only the final
//! multiplication matrices are rounded to `f64` via [`ToPrimitive`].

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use dashu::base::{Abs, Inverse, Signed as DashuSigned};
use dashu::integer::{IBig, UBig};
use dashu::rational::RBig;
use num_traits::ToPrimitive;

use crate::traits::{Field, Ring};

/// An arbitrary precision rational number.
///
/// Values are always stored in lowest terms with a positive denominator.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Q(RBig);

impl Q {
    /// Creates a rational from numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(num: i64, den: i64) -> Self {
        assert!(den != 0, "denominator cannot be zero");
        let num = IBig::from(num);
        let num = if den < 0 { -num } else { num };
        Self(RBig::from_parts(num, UBig::from(den.unsigned_abs())))
    }

    /// Creates a rational from an integer.
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Self(RBig::from(IBig::from(n)))
    }

    /// Returns the numerator as an i64, if it fits.
    #[must_use]
    pub fn numerator_i64(&self) -> Option<i64> {
        self.0.numerator().clone().try_into().ok()
    }

    /// Returns the denominator as a u64, if it fits.
    #[must_use]
    pub fn denominator_u64(&self) -> Option<u64> {
        self.0.denominator().clone().try_into().ok()
    }

    /// Returns true if the denominator is one.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.denominator().is_one()
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Nearest `f64`, rounding as dashu does.
    #[must_use]
    pub fn to_f64_lossy(&self) -> f64 {
        self.0.to_f64().value()
    }
}

impl Ring for Q {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }
}

impl Field for Q {
    fn inv(&self) -> Option<Self> {
        if self.0.is_zero() {
            None
        } else {
            Some(Self(self.0.clone().inv()))
        }
    }
}

impl ToPrimitive for Q {
    fn to_i64(&self) -> Option<i64> {
        if self.is_integer() {
            self.numerator_i64()
        } else {
            None
        }
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_i64().and_then(|n| u64::try_from(n).ok())
    }

    fn to_f64(&self) -> Option<f64> {
        let value = self.to_f64_lossy();
        value.is_finite().then_some(value)
    }
}

impl Add for Q {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<&Q> for &Q {
    type Output = Q;

    fn add(self, rhs: &Q) -> Self::Output {
        Q(&self.0 + &rhs.0)
    }
}

impl Sub for Q {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sub<&Q> for &Q {
    type Output = Q;

    fn sub(self, rhs: &Q) -> Self::Output {
        Q(&self.0 - &rhs.0)
    }
}

impl Mul for Q {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul<&Q> for &Q {
    type Output = Q;

    fn mul(self, rhs: &Q) -> Self::Output {
        Q(&self.0 * &rhs.0)
    }
}

impl Neg for Q {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Q {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<RBig> for Q {
    fn from(value: RBig) -> Self {
        Self(value)
    }
}

impl fmt::Debug for Q {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q({})", self.0)
    }
}

impl fmt::Display for Q {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_laws() {
        let a = Q::new(2, 3);
        let b = Q::new(3, 4);

        // 2/3 + 3/4 = 17/12
        let sum = a.clone() + b.clone();
        assert_eq!(sum.numerator_i64(), Some(17));
        assert_eq!(sum.denominator_u64(), Some(12));

        // 2/3 * 3/4 = 1/2
        let prod = a * b;
        assert_eq!(prod, Q::new(1, 2));
    }

    #[test]
    fn test_negative_denominator() {
        let a = Q::new(3, -6);
        assert!(a.is_negative());
        assert_eq!(a, Q::new(-1, 2));
        assert_eq!(a.abs(), Q::new(1, 2));
    }

    #[test]
    fn test_inverse() {
        let a = Q::new(3, 5);
        let inv = a.inv().unwrap();
        assert!((a * inv).is_one());
        assert!(Q::zero().inv().is_none());
    }

    #[test]
    fn test_division() {
        let quot = Q::new(1, 2).field_div(&Q::new(1, 3));
        assert_eq!(quot, Q::new(3, 2));
    }

    #[test]
    fn test_to_primitive() {
        assert_eq!(Q::new(-7, 1).to_i64(), Some(-7));
        assert_eq!(Q::new(1, 2).to_i64(), None);
        assert_eq!(Q::new(1, 4).to_f64(), Some(0.25));
        assert_eq!(Q::new(-3, 2).to_f64(), Some(-1.5));
    }

    #[test]
    fn test_pow() {
        assert_eq!(Q::new(2, 3).pow(3), Q::new(8, 27));
        assert!(Q::new(5, 7).pow(0).is_one());
    }

    #[test]
    fn test_display() {
        assert_eq!(Q::from_integer(3).to_string(), "3");
        assert_eq!(Q::new(2, 3).to_string(), "2/3");
    }
}
