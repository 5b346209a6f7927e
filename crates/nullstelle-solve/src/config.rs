//! Numeric tolerances.

/// Tolerances for eigenvalue clustering and the reality filter.
///
/// Two eigenvalues `v` and `λ` are merged when
/// `|v - λ| <= atol + rtol * |λ|`; a cluster is reported as a real solution
/// when the imaginary part of its average is at most `ztol`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerances {
    /// Absolute clustering tolerance.
    pub atol: f64,
    /// Relative clustering tolerance.
    pub rtol: f64,
    /// Largest imaginary part still treated as real.
    pub ztol: f64,
}

impl Tolerances {
    /// Uses the same value for all three tolerances.
    #[must_use]
    pub fn uniform(eps: f64) -> Self {
        Self {
            atol: eps,
            rtol: eps,
            ztol: eps,
        }
    }

    /// Keeps clusters regardless of their imaginary part.
    ///
    /// Coordinates are still reported as real numbers: a complex solution
    /// contributes the real parts of its coordinates, so a conjugate pair
    /// shows up as two equal points.
    #[must_use]
    pub fn keep_complex(self) -> Self {
        Self {
            ztol: f64::INFINITY,
            ..self
        }
    }
}

impl Default for Tolerances {
    /// `16 * sqrt(f64::EPSILON)` for all three, roughly `2.4e-7`.
    fn default() -> Self {
        Self::uniform(16.0 * f64::EPSILON.sqrt())
    }
}
