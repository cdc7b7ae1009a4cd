//! Complex numbers ordered by modulus.

use std::cmp::Ordering;

use serde::Serialize;

use super::MODULUS_EPSILON;

/// A complex number with `f64` parts.
///
/// Equality is exact on both parts. Ordering compares the modulus first and
/// falls back to the real part when the moduli agree within
/// [`MODULUS_EPSILON`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Complex {
    /// Real part.
    pub re: f64,
    /// Imaginary part.
    pub im: f64,
}

impl Complex {
    /// Create a complex number from its parts.
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Euclidean norm `sqrt(re² + im²)`.
    pub fn modulus(&self) -> f64 {
        self.re.hypot(self.im)
    }

    /// Strict "less than" under the modulus-then-real order.
    pub fn precedes(&self, other: &Complex) -> bool {
        let (a, b) = (self.modulus(), other.modulus());
        if (a - b).abs() < MODULUS_EPSILON {
            self.re < other.re
        } else {
            a < b
        }
    }
}

impl PartialOrd for Complex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.precedes(other) {
            Some(Ordering::Less)
        } else if other.precedes(self) {
            Some(Ordering::Greater)
        } else {
            // Same modulus and real part but different imaginary sign.
            None
        }
    }
}

impl std::fmt::Display for Complex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.im >= 0.0 {
            write!(f, "{:.2}+{:.2}i", self.re, self.im)
        } else {
            write!(f, "{:.2}{:.2}i", self.re, self.im)
        }
    }
}
