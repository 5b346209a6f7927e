//! Numeric solution points.

use std::fmt;

/// A real solution, one coordinate per variable.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    /// Values for each variable.
    pub values: Vec<f64>,
}

impl Solution {
    /// Creates a new solution.
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Returns the value for variable i.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<f64> {
        self.values.get(i).copied()
    }

    /// Returns the number of coordinates.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.values.len()
    }

    /// Largest coordinate-wise distance to `other`.
    ///
    /// # Panics
    ///
    /// Panics if the solutions have different lengths.
    #[must_use]
    pub fn max_distance(&self, other: &Self) -> f64 {
        assert_eq!(self.values.len(), other.values.len(), "solutions have different lengths");
        self.values
            .iter()
            .zip(&other.values)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }
}

impl From<Vec<f64>> for Solution {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let s = Solution::new(vec![1.0, -2.5]);
        assert_eq!(s.num_vars(), 2);
        assert_eq!(s.get(1), Some(-2.5));
        assert_eq!(s.get(2), None);
        assert_eq!(s.to_string(), "(1, -2.5)");
        assert_eq!(Solution::new(Vec::new()).to_string(), "()");
    }

    #[test]
    fn test_max_distance() {
        let a = Solution::from(vec![1.0, 2.0]);
        let b = Solution::from(vec![1.5, 1.0]);
        assert_eq!(a.max_distance(&b), 1.0);
    }
}
