//! # Pricing Module
//!
//! The fixed unit price of each animal.
//!
//! | Kind | Unit price |
//! |------|-----------:|
//! | Cat  | 10         |
//! | Dog  | 20         |
//! | Lion | 100        |
//! | Wolf | 200        |
//!
//! `PriceTable` holds one field per kind, so a lookup is an exhaustive
//! `match` and cannot miss.

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::money::Money;
use crate::types::AnimalKind;

/// Unit prices for every [`AnimalKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTable {
    pub cat: Money,
    pub dog: Money,
    pub lion: Money,
    pub wolf: Money,
}

/// The standard price list.
pub const STANDARD_PRICES: PriceTable = PriceTable {
    cat: Money::from_units(10),
    dog: Money::from_units(20),
    lion: Money::from_units(100),
    wolf: Money::from_units(200),
};

impl PriceTable {
    /// Returns the standard price list.
    #[inline]
    pub const fn standard() -> Self {
        STANDARD_PRICES
    }

    /// Unit price of `kind`.
    #[inline]
    pub const fn price_for(&self, kind: AnimalKind) -> Money {
        match kind {
            AnimalKind::Cat => self.cat,
            AnimalKind::Dog => self.dog,
            AnimalKind::Lion => self.lion,
            AnimalKind::Wolf => self.wolf,
        }
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        PriceTable::standard()
    }
}

/// Unit price of `kind` from the standard list.
///
/// ```rust
/// use menagerie_core::{price_for, AnimalKind};
///
/// assert_eq!(price_for(AnimalKind::Lion).units(), 100);
/// ```
#[inline]
pub const fn price_for(kind: AnimalKind) -> Money {
    STANDARD_PRICES.price_for(kind)
}

/// Looks up a price by animal name. Fails with `UnknownAnimalKind` for
/// anything outside the four kinds.
pub fn price_for_name(name: &str) -> CoreResult<Money> {
    let kind: AnimalKind = name.parse()?;
    Ok(price_for(kind))
}
