//! # Validation Module
//!
//! Input checks that run before anything touches an [`Order`](crate::Order).
//!
//! ## Usage
//! ```rust
//! use menagerie_core::validation::{validate_purchase, validate_quantity};
//! use menagerie_core::AnimalKind;
//!
//! assert!(validate_quantity(2).is_ok());
//!
//! // Dry run: builds the record without registering it anywhere.
//! let record = validate_purchase(AnimalKind::Dog, 2).unwrap();
//! assert_eq!(record.quantity(), 2);
//! ```

use crate::error::{CoreError, CoreResult};
use crate::types::{AnimalKind, PurchaseRecord};

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_quantity(qty: i64) -> CoreResult<()> {
    if qty <= 0 {
        return Err(CoreError::InvalidQuantity { quantity: qty });
    }

    Ok(())
}

/// Checks a prospective purchase and returns the record it would produce.
///
/// This has no side effects. [`Order::register`](crate::Order::register)
/// calls it and then appends the result.
pub fn validate_purchase(kind: AnimalKind, quantity: i64) -> CoreResult<PurchaseRecord> {
    PurchaseRecord::new(kind, quantity)
}

/// Like [`validate_purchase`], with the kind given by name.
pub fn validate_named_purchase(kind: &str, quantity: i64) -> CoreResult<PurchaseRecord> {
    let kind: AnimalKind = kind.parse()?;
    validate_purchase(kind, quantity)
}
