//! Type-safe price representation using decimal arithmetic.
//!
//! The catalog is single-currency, so `Price` carries no currency code. It
//! does enforce the one invariant every price in the system relies on: the
//! amount is never negative.

use std::iter::Sum;
use std::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A non-negative monetary amount.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// A zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    ///
    /// Negative amounts are clamped to zero; upstream data occasionally
    /// carries garbage and a negative price has no meaning here.
    #[must_use]
    pub fn new(amount: Decimal) -> Self {
        if amount.is_sign_negative() {
            Self(Decimal::ZERO)
        } else {
            Self(amount)
        }
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// The total for `quantity` units at this price.
    #[must_use]
    pub fn line_total(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
