//! Money type for representing prices.
//!
//! The storefront prices everything in whole rupees, so amounts are plain
//! integers with no minor unit.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rupee symbol used for display.
pub const RUPEE: &str = "\u{20b9}";

/// A whole-rupee amount.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money {
    /// Amount in rupees.
    pub amount: i64,
}

impl Money {
    /// Create a new Money value.
    pub const fn new(amount: i64) -> Self {
        Self { amount }
    }

    /// Zero rupees.
    pub const fn zero() -> Self {
        Self::new(0)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount > 0
    }

    /// Format as a display string (e.g., "₹599").
    pub fn display(&self) -> String {
        format!("{}{}", RUPEE, self.amount)
    }

    /// Add another amount, returning None on overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        self.amount.checked_add(other.amount).map(Money::new)
    }

    /// Subtract another amount, returning None on overflow.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        self.amount.checked_sub(other.amount).map(Money::new)
    }

    /// Multiply by a quantity, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount.checked_mul(factor).map(Money::new)
    }

    /// Sum an iterator of amounts, returning None on overflow.
    pub fn try_sum<'a>(mut iter: impl Iterator<Item = &'a Money>) -> Option<Money> {
        iter.try_fold(Money::zero(), |acc, m| acc.try_add(m))
    }
}

impl From<i64> for Money {
    fn from(amount: i64) -> Self {
        Self::new(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(599).display(), "\u{20b9}599");
        assert_eq!(Money::new(49).to_string(), "\u{20b9}49");
    }

    #[test]
    fn test_money_checked_arithmetic() {
        let a = Money::new(599);
        let b = Money::new(699);
        assert_eq!(a.try_add(&b), Some(Money::new(1298)));
        assert_eq!(b.try_subtract(&a), Some(Money::new(100)));
        assert_eq!(b.try_multiply(2), Some(Money::new(1398)));
        assert_eq!(Money::new(i64::MAX).try_add(&Money::new(1)), None);
    }

    #[test]
    fn test_money_sum() {
        let amounts = [Money::new(599), Money::new(1398), Money::new(49)];
        assert_eq!(Money::try_sum(amounts.iter()), Some(Money::new(2046)));
        assert_eq!(Money::try_sum([].iter()), Some(Money::zero()));
    }

    #[test]
    fn test_money_ordering() {
        assert!(Money::new(299) < Money::new(699));
        assert!(Money::new(1).is_positive());
        assert!(Money::zero().is_zero());
    }
}
