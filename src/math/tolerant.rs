//! Floating point values compared through a fixed-width tolerance interval.
//!
//! Two values are equal when their intervals `[v - ε/2, v + ε/2]` overlap. This
//! relation is reflexive and symmetric but NOT transitive: `a ≈ b` and `b ≈ c`
//! do not imply `a ≈ c`, so it is not exposed through `PartialEq`/`PartialOrd`.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::config::TOLERANCE_EPSILON;

#[derive(Debug, Clone, Copy, Default)]
pub struct Tolerant(pub f64);

impl Tolerant {
    pub const EPSILON: f64 = TOLERANCE_EPSILON;

    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Lower bound of the tolerance interval.
    pub fn low(self) -> f64 {
        self.0 - Self::EPSILON / 2.0
    }

    /// Upper bound of the tolerance interval.
    pub fn high(self) -> f64 {
        self.0 + Self::EPSILON / 2.0
    }

    /// True when both tolerance intervals overlap.
    pub fn approx_eq(self, other: impl Into<Tolerant>) -> bool {
        let other = other.into();
        self.low() < other.high() && self.high() > other.low()
    }

    /// True when the intervals are disjoint.
    pub fn approx_ne(self, other: impl Into<Tolerant>) -> bool {
        let other = other.into();
        self.low() > other.high() || self.high() < other.low()
    }

    /// Strictly below `other`, never true for values within tolerance.
    pub fn approx_lt(self, other: impl Into<Tolerant>) -> bool {
        let other = other.into();
        self.approx_ne(other) && self.low() < other.high()
    }

    /// Strictly above `other`, never true for values within tolerance.
    pub fn approx_gt(self, other: impl Into<Tolerant>) -> bool {
        let other = other.into();
        self.approx_ne(other) && self.high() > other.low()
    }

    pub fn is_zero(self) -> bool {
        self.approx_eq(0.0)
    }
}

impl From<f64> for Tolerant {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<Tolerant> for f64 {
    fn from(value: Tolerant) -> Self {
        value.0
    }
}

impl fmt::Display for Tolerant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Tolerant {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Tolerant {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Tolerant {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl Div for Tolerant {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self(self.0 / rhs.0)
    }
}

impl Neg for Tolerant {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = Tolerant::EPSILON;

    #[test]
    fn test_reflexive() {
        for v in [0.0, 1.0, -3.5, 1e6, 1e-9] {
            assert!(Tolerant(v).approx_eq(v));
            assert!(!Tolerant(v).approx_ne(v));
        }
    }

    #[test]
    fn test_within_half_epsilon_is_equal() {
        let a = Tolerant(10.0);
        assert!(a.approx_eq(10.0 + EPS / 2.0 * 0.99));
        assert!(a.approx_eq(10.0 - EPS / 2.0 * 0.99));
        assert!(!a.approx_eq(10.0 + EPS * 1.01));
    }

    #[test]
    fn test_equality_is_not_transitive() {
        let a = Tolerant(0.0);
        let b = Tolerant(0.8 * EPS);
        let c = Tolerant(1.6 * EPS);
        assert!(a.approx_eq(b));
        assert!(b.approx_eq(c));
        assert!(!a.approx_eq(c));
        assert!(a.approx_ne(c));
    }

    #[test]
    fn test_ordering_excludes_tolerated_values() {
        let a = Tolerant(1.0);
        let close = 1.0 + EPS * 0.5;
        assert!(!a.approx_lt(close));
        assert!(!a.approx_gt(close));
        assert!(a.approx_lt(2.0));
        assert!(!a.approx_gt(2.0));
        assert!(a.approx_gt(0.0));
        assert!(!a.approx_lt(0.0));
    }

    #[test]
    fn test_arithmetic_uses_raw_values() {
        let a = Tolerant(3.0);
        let b = Tolerant(1.5);
        assert_eq!((a + b).value(), 4.5);
        assert_eq!((a - b).value(), 1.5);
        assert_eq!((a * b).value(), 4.5);
        assert_eq!((a / b).value(), 2.0);
        assert_eq!((-a).value(), -3.0);
    }

    #[test]
    fn test_is_zero() {
        assert!(Tolerant(EPS / 4.0).is_zero());
        assert!(!Tolerant(EPS * 2.0).is_zero());
    }
}
