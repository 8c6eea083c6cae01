//! # Order
//!
//! The list of purchases for one pricing run, and the total over it.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Order Operations                                │
//! │                                                                         │
//! │  Caller                   Order method              State change        │
//! │  ──────                   ────────────              ────────────        │
//! │                                                                         │
//! │  register(Dog, 2) ──────► validate_purchase ──────► records.push(rec)   │
//! │                                                                         │
//! │  register(Dog, 0) ──────► InvalidQuantity ────────► (unchanged)         │
//! │                                                                         │
//! │  total() ───────────────► calculate_total ────────► (read only)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! `Order` is a plain owned value with no interior mutability. Sharing it
//! between threads needs external synchronisation such as `Mutex<Order>`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::pricing::PriceTable;
use crate::types::{AnimalKind, PurchaseRecord};
use crate::validation::{validate_named_purchase, validate_purchase};

// =============================================================================
// Total Calculation
// =============================================================================

/// Sums `unit price × quantity` over `records` using the standard prices.
///
/// The accumulator starts at zero, so an empty slice totals 0. Addition is
/// commutative, so record order does not matter.
///
/// ```rust
/// use menagerie_core::{calculate_total, validation::validate_purchase, AnimalKind};
///
/// let records = [
///     validate_purchase(AnimalKind::Cat, 1).unwrap(),
///     validate_purchase(AnimalKind::Dog, 2).unwrap(),
/// ];
/// assert_eq!(calculate_total(&records).unwrap().units(), 50);
/// assert_eq!(calculate_total(&[]).unwrap().units(), 0);
/// ```
pub fn calculate_total(records: &[PurchaseRecord]) -> CoreResult<Money> {
    calculate_total_with(&PriceTable::standard(), records)
}

/// [`calculate_total`] against an explicit price table.
pub fn calculate_total_with(table: &PriceTable, records: &[PurchaseRecord]) -> CoreResult<Money> {
    records.iter().try_fold(Money::zero(), |total, record| {
        total.checked_add(record.line_total(table)?)
    })
}

// =============================================================================
// Order
// =============================================================================

/// Purchases accumulated before computing a total.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    records: Vec<PurchaseRecord>,

    /// When the order was created or last cleared.
    created_at: DateTime<Utc>,
}

impl Order {
    /// Creates a new empty order.
    pub fn new() -> Self {
        Order {
            records: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Registers `quantity` units of `kind`.
    ///
    /// The quantity is stored exactly as given. Registering the same kind
    /// twice produces two separate records. On error the order is unchanged.
    pub fn register(&mut self, kind: AnimalKind, quantity: i64) -> CoreResult<()> {
        let record = validate_purchase(kind, quantity)?;
        self.push(record);
        Ok(())
    }

    /// Registers a purchase whose kind is given by name (`"cat"`, `"Wolf"`, ...).
    pub fn register_named(&mut self, kind: &str, quantity: i64) -> CoreResult<()> {
        let record = validate_named_purchase(kind, quantity)?;
        self.push(record);
        Ok(())
    }

    fn push(&mut self, record: PurchaseRecord) {
        debug!(kind = %record.kind(), quantity = record.quantity(), "purchase registered");
        self.records.push(record);
    }

    /// Total price of the order at standard prices.
    pub fn total(&self) -> CoreResult<Money> {
        calculate_total(&self.records)
    }

    /// Total price of the order against `table`.
    pub fn total_with(&self, table: &PriceTable) -> CoreResult<Money> {
        calculate_total_with(table, &self.records)
    }

    /// Registered records, in registration order.
    pub fn records(&self) -> &[PurchaseRecord] {
        &self.records
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Number of line items.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of quantities across all line items.
    pub fn total_quantity(&self) -> CoreResult<i64> {
        self.records.iter().try_fold(0i64, |acc, r| {
            acc.checked_add(r.quantity()).ok_or(CoreError::TotalOverflow)
        })
    }

    /// Removes every record.
    pub fn clear(&mut self) {
        self.records.clear();
        self.created_at = Utc::now();
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Totals Summary
// =============================================================================

/// Order totals summary, ready to serialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotals {
    pub line_count: usize,
    pub total_quantity: i64,
    pub total: Money,
}

impl OrderTotals {
    pub fn from_order(order: &Order) -> CoreResult<Self> {
        Ok(OrderTotals {
            line_count: order.len(),
            total_quantity: order.total_quantity()?,
            total: order.total()?,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
