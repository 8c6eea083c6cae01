//! # Error Types
//!
//! Domain-specific error types for menagerie-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  menagerie-core errors (this file)                                      │
//! │  └── CoreError        - Registration, lookup and total failures         │
//! │                                                                         │
//! │  menagerie-cli errors (app)                                             │
//! │  ├── ConfigError      - Bad logging configuration                       │
//! │  └── CliError         - What `main` reports                             │
//! │                                                                         │
//! │  Flow: CoreError → CliError → stderr + non-zero exit                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant here is a programmer error under the fixed scenario. None of
//! them has partial-result semantics: a total that skipped a bad line would be
//! wrong, so callers stop on the first error.

use thiserror::Error;

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A purchase was registered with zero or a negative quantity.
    ///
    /// ## User Workflow
    /// ```text
    /// order.register(Cat, 0)
    ///      │
    ///      ▼
    /// validate_purchase(Cat, 0)
    ///      │
    ///      ▼
    /// InvalidQuantity { quantity: 0 }   (order left untouched)
    /// ```
    #[error("Quantity must be positive, got {quantity}")]
    InvalidQuantity { quantity: i64 },

    /// An animal name or code outside Cat, Dog, Lion, Wolf.
    #[error("Unknown animal kind: {0}")]
    UnknownAnimalKind(String),

    /// A line total or the running total left the i64 range.
    #[error("Order total overflowed")]
    TotalOverflow,
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
