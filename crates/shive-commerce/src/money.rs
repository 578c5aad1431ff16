//! Price type for catalog amounts.
//!
//! Prices are whole amounts with no minor unit and no currency attached.
//! The storefront only ever adds them up, so the type stays small.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// A non-negative price amount.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// Create a price from a raw amount.
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Zero amount.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the raw amount.
    pub const fn amount(self) -> u64 {
        self.0
    }

    /// Add two prices, returning `None` on overflow.
    pub fn checked_add(self, other: Price) -> Option<Price> {
        self.0.checked_add(other.0).map(Price)
    }

    /// Format with a display label, e.g. `RS 2999`.
    pub fn display(self, label: &str) -> String {
        if label.is_empty() {
            self.0.to_string()
        } else {
            format!("{} {}", label, self.0)
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Price {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

// Saturates at `u64::MAX`; use `checked_add` to detect overflow.
impl Add for Price {
    type Output = Price;

    fn add(self, other: Price) -> Price {
        Price(self.0.saturating_add(other.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Price> for Price {
    fn sum<I: Iterator<Item = &'a Price>>(iter: I) -> Price {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_label() {
        assert_eq!(Price::new(2999).display("RS"), "RS 2999");
        assert_eq!(Price::new(2999).display(""), "2999");
    }

    #[test]
    fn test_sum() {
        let prices = [Price::new(2999), Price::new(3499), Price::new(1999)];
        let total: Price = prices.iter().sum();
        assert_eq!(total, Price::new(8497));
    }

    #[test]
    fn test_sum_empty_is_zero() {
        let total: Price = Vec::<Price>::new().into_iter().sum();
        assert_eq!(total, Price::zero());
    }

    #[test]
    fn test_checked_add_overflow() {
        assert!(Price::new(u64::MAX).checked_add(Price::new(1)).is_none());
        assert_eq!(Price::new(u64::MAX) + Price::new(1), Price::new(u64::MAX));
    }
}
