//! # menagerie-core: Pure Business Logic for Animal Orders
//!
//! Prices a list of animal purchases. Every function here is pure; printing,
//! configuration and logging setup live in `menagerie-cli`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     menagerie-cli (binary)                              │
//! │     init logging ──► run_order_example ──► print report                 │
//! └─────────────────────────────────┬───────────────────────────────────────┘
//!                                   │
//! ┌─────────────────────────────────▼───────────────────────────────────────┐
//! │               ★ menagerie-core (THIS CRATE) ★                           │
//! │                                                                         │
//! │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐            │
//! │   │   types   │  │  pricing  │  │   order   │  │ validation│            │
//! │   │AnimalKind │  │PriceTable │  │   Order   │  │  quantity │            │
//! │   │ Purchase  │  │ price_for │  │   total   │  │  purchase │            │
//! │   └───────────┘  └───────────┘  └───────────┘  └───────────┘            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `AnimalKind` and `PurchaseRecord`
//! - [`pricing`] - The fixed price table
//! - [`money`] - Integer money type
//! - [`order`] - `Order`, registration and totals
//! - [`validation`] - Quantity and purchase checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use menagerie_core::{AnimalKind, Order};
//!
//! let mut order = Order::new();
//! order.register(AnimalKind::Cat, 1)?;
//! order.register(AnimalKind::Dog, 2)?;
//! order.register(AnimalKind::Lion, 1)?;
//! order.register(AnimalKind::Wolf, 2)?;
//!
//! assert_eq!(order.total()?.units(), 550);
//! # Ok::<(), menagerie_core::CoreError>(())
//! ```

pub mod error;
pub mod money;
pub mod order;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use order::{calculate_total, calculate_total_with, Order, OrderTotals};
pub use pricing::{price_for, price_for_name, PriceTable};
pub use types::*;
