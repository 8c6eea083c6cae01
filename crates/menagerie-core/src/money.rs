//! # Money Module
//!
//! Provides the `Money` type for prices and totals.
//!
//! Arithmetic is only offered in checked form, so an overflowing total
//! surfaces as [`CoreError::TotalOverflow`] rather than a panic or a wrap.
//!
//! ## Units
//! The price table is quoted in whole currency units (a cat costs 10), so
//! `Money` wraps an `i64` count of those units. There is no fractional part
//! and no floating point anywhere in the pricing path.
//!
//! ## Usage
//! ```rust
//! use menagerie_core::money::Money;
//!
//! let price = Money::from_units(20);
//! let line = price.checked_mul_quantity(2).unwrap();
//! assert_eq!(line.units(), 40);
//! assert_eq!(line.to_string(), "40");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in whole currency units.
///
/// ## Where Money is Used
/// ```text
/// PriceTable ──► unit price ──► PurchaseRecord::line_total ──► Order total
///                                                                  │
///                                               "Total was 550" ◄──┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole units.
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Returns the value in whole units.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Returns zero money value. Every total starts here.
    ///
    /// ```rust
    /// use menagerie_core::money::Money;
    ///
    /// assert!(Money::zero().is_zero());
    /// assert_eq!(Money::zero(), Money::default());
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Adds two amounts, failing with [`CoreError::TotalOverflow`] instead of wrapping.
    pub fn checked_add(self, other: Money) -> CoreResult<Money> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or(CoreError::TotalOverflow)
    }

    /// Multiplies a unit price by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use menagerie_core::money::Money;
    ///
    /// let wolf = Money::from_units(200);
    /// assert_eq!(wolf.checked_mul_quantity(2).unwrap().units(), 400);
    /// assert!(wolf.checked_mul_quantity(i64::MAX).is_err());
    /// ```
    pub fn checked_mul_quantity(self, qty: i64) -> CoreResult<Money> {
        self.0
            .checked_mul(qty)
            .map(Money)
            .ok_or(CoreError::TotalOverflow)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the bare unit count, which is what the report line prints.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_units() {
        let money = Money::from_units(550);
        assert_eq!(money.units(), 550);
        assert!(!money.is_zero());
    }

    #[test]
    fn test_display_is_bare_integer() {
        assert_eq!(Money::from_units(550).to_string(), "550");
        assert_eq!(Money::zero().to_string(), "0");
        assert_eq!(Money::from_units(-10).to_string(), "-10");
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = Money::from_units(100);
        let b = Money::from_units(20);

        assert_eq!(a.checked_add(b).unwrap().units(), 120);
        assert_eq!(b.checked_mul_quantity(2).unwrap().units(), 40);
        assert_eq!(Money::zero().checked_add(Money::zero()), Ok(Money::zero()));
    }

    #[test]
    fn test_checked_overflow() {
        let big = Money::from_units(i64::MAX);
        assert_eq!(
            big.checked_add(Money::from_units(1)),
            Err(CoreError::TotalOverflow)
        );
        assert_eq!(big.checked_mul_quantity(2), Err(CoreError::TotalOverflow));
        assert_eq!(big.checked_mul_quantity(1), Ok(big));
    }

    #[test]
    fn test_serializes_as_plain_number() {
        let json = serde_json::to_string(&Money::from_units(550)).unwrap();
        assert_eq!(json, "550");
    }
}
