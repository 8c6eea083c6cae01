//! # Domain Types
//!
//! Core domain types for pricing an animal order.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐        │
//! │  │   AnimalKind    │   │ PurchaseRecord  │   │      Order      │        │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │        │
//! │  │  Cat  (1)       │◄──│  kind           │◄──│  records        │        │
//! │  │  Dog  (2)       │   │  quantity (≥1)  │   │  created_at     │        │
//! │  │  Lion (3)       │   └─────────────────┘   └─────────────────┘        │
//! │  │  Wolf (4)       │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::pricing::PriceTable;
use crate::validation::validate_quantity;

// =============================================================================
// Animal Kind
// =============================================================================

/// The closed set of animals that can be purchased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimalKind {
    Cat,
    Dog,
    Lion,
    Wolf,
}

impl AnimalKind {
    /// Every kind, in declaration order.
    pub const ALL: [AnimalKind; 4] = [
        AnimalKind::Cat,
        AnimalKind::Dog,
        AnimalKind::Lion,
        AnimalKind::Wolf,
    ];

    /// Capitalized display name.
    pub const fn name(&self) -> &'static str {
        match self {
            AnimalKind::Cat => "Cat",
            AnimalKind::Dog => "Dog",
            AnimalKind::Lion => "Lion",
            AnimalKind::Wolf => "Wolf",
        }
    }

    /// Stable numeric code (Cat=1 .. Wolf=4).
    pub const fn code(&self) -> i32 {
        match self {
            AnimalKind::Cat => 1,
            AnimalKind::Dog => 2,
            AnimalKind::Lion => 3,
            AnimalKind::Wolf => 4,
        }
    }
}

impl fmt::Display for AnimalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a kind by name, ignoring case and surrounding whitespace.
///
/// ```rust
/// use menagerie_core::AnimalKind;
///
/// assert_eq!(" Lion ".parse::<AnimalKind>().unwrap(), AnimalKind::Lion);
/// assert!("tiger".parse::<AnimalKind>().is_err());
/// ```
impl FromStr for AnimalKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        AnimalKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| CoreError::UnknownAnimalKind(name.to_string()))
    }
}

impl TryFrom<i32> for AnimalKind {
    type Error = CoreError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(AnimalKind::Cat),
            2 => Ok(AnimalKind::Dog),
            3 => Ok(AnimalKind::Lion),
            4 => Ok(AnimalKind::Wolf),
            other => Err(CoreError::UnknownAnimalKind(format!("code {}", other))),
        }
    }
}

// =============================================================================
// Purchase Record
// =============================================================================

/// One line item: an animal kind and the number of units requested.
///
/// ## Invariants
/// - `quantity >= 1`
/// - `quantity` is exactly what the caller asked for; nothing adjusts it
///   on the way in or on the way out.
///
/// Fields are private so the only way to obtain a record is through
/// [`PurchaseRecord::new`], which validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PurchaseRecord {
    kind: AnimalKind,
    quantity: i64,
}

impl PurchaseRecord {
    /// Creates a record, rejecting non-positive quantities.
    pub fn new(kind: AnimalKind, quantity: i64) -> CoreResult<Self> {
        validate_quantity(quantity)?;
        Ok(PurchaseRecord { kind, quantity })
    }

    #[inline]
    pub const fn kind(&self) -> AnimalKind {
        self.kind
    }

    #[inline]
    pub const fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Unit price × quantity, priced against `table`.
    pub fn line_total(&self, table: &PriceTable) -> CoreResult<Money> {
        table.price_for(self.kind).checked_mul_quantity(self.quantity)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("cat".parse::<AnimalKind>(), Ok(AnimalKind::Cat));
        assert_eq!("DOG".parse::<AnimalKind>(), Ok(AnimalKind::Dog));
        assert_eq!("  Wolf\n".parse::<AnimalKind>(), Ok(AnimalKind::Wolf));
        assert_eq!(
            "tiger".parse::<AnimalKind>(),
            Err(CoreError::UnknownAnimalKind("tiger".to_string()))
        );
        assert!("".parse::<AnimalKind>().is_err());
    }

    #[test]
    fn test_codes_round_trip() {
        for kind in AnimalKind::ALL {
            assert_eq!(AnimalKind::try_from(kind.code()), Ok(kind));
        }
        assert!(AnimalKind::try_from(0).is_err());
        assert!(AnimalKind::try_from(5).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(AnimalKind::Lion.to_string(), "Lion");
    }

    #[test]
    fn test_record_keeps_quantity_verbatim() {
        let record = PurchaseRecord::new(AnimalKind::Dog, 2).unwrap();
        assert_eq!(record.kind(), AnimalKind::Dog);
        assert_eq!(record.quantity(), 2);
    }

    #[test]
    fn test_record_rejects_non_positive() {
        assert_eq!(
            PurchaseRecord::new(AnimalKind::Cat, 0),
            Err(CoreError::InvalidQuantity { quantity: 0 })
        );
        assert_eq!(
            PurchaseRecord::new(AnimalKind::Cat, -1),
            Err(CoreError::InvalidQuantity { quantity: -1 })
        );
    }

    #[test]
    fn test_line_total() {
        let table = PriceTable::standard();
        let record = PurchaseRecord::new(AnimalKind::Wolf, 2).unwrap();
        assert_eq!(record.line_total(&table).unwrap().units(), 400);
    }

    #[test]
    fn test_record_serializes() {
        let record = PurchaseRecord::new(AnimalKind::Lion, 1).unwrap();
        let json = serde_json::to_value(record).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "lion", "quantity": 1 }));
    }
}
