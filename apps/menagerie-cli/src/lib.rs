//! # Menagerie CLI Library
//!
//! Prices the reference order and renders the report. `main.rs` just calls
//! [`run`]; pricing and rendering are testable without a process.
//!
//! ## Module Organization
//! ```text
//! menagerie_cli/
//! ├── lib.rs          ◄─── run(), reference order & report rendering
//! ├── config.rs       ◄─── Env-based logging configuration
//! ├── logging.rs      ◄─── tracing-subscriber setup
//! └── error.rs        ◄─── CliError
//! ```

pub mod config;
pub mod error;
pub mod logging;

use std::io::Write;

use menagerie_core::{AnimalKind, Money, Order, OrderTotals};
use tracing::{error, info};

use config::CliConfig;

pub use error::CliError;

/// The purchases priced by the binary, in registration order.
pub const REFERENCE_ORDER: [(AnimalKind, i64); 4] = [
    (AnimalKind::Cat, 1),
    (AnimalKind::Dog, 2),
    (AnimalKind::Lion, 1),
    (AnimalKind::Wolf, 2),
];

/// Outcome of one pricing run.
#[derive(Debug, Clone)]
pub struct OrderReport {
    pub order: Order,
    pub totals: OrderTotals,
}

impl OrderReport {
    pub fn total(&self) -> Money {
        self.totals.total
    }

    /// The text written to stdout.
    pub fn render(&self) -> String {
        render_report(self.total())
    }
}

/// Registers `items` on a fresh order and totals it.
pub fn price_order(items: &[(AnimalKind, i64)]) -> Result<OrderReport, CliError> {
    let mut order = Order::new();
    for &(kind, quantity) in items {
        order.register(kind, quantity)?;
    }

    let totals = OrderTotals::from_order(&order)?;
    info!(
        lines = totals.line_count,
        quantity = totals.total_quantity,
        total = %totals.total,
        "order priced"
    );

    Ok(OrderReport { order, totals })
}

/// Prices [`REFERENCE_ORDER`] (1 cat, 2 dogs, 1 lion, 2 wolves).
pub fn run_order_example() -> Result<OrderReport, CliError> {
    price_order(&REFERENCE_ORDER)
}

/// Runs the binary: config, logging, pricing, then the report on stdout.
///
/// ## Startup Sequence
/// 1. Load logging configuration from the environment
/// 2. Initialize tracing (stderr)
/// 3. Price the reference order
/// 4. Write the report to stdout
///
/// Any error skips step 4, so a failed run prints no total.
pub fn run() -> Result<(), CliError> {
    let config = CliConfig::load()?;
    logging::init_tracing(&config);

    info!("Starting menagerie order pricing");

    let report = run_order_example().map_err(|e| {
        error!(error = %e, "order pricing failed");
        e
    })?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(report.render().as_bytes())?;
    stdout.flush()?;

    Ok(())
}

/// Formats the report block for `total`.
///
/// ```rust
/// use menagerie_cli::render_report;
/// use menagerie_core::Money;
///
/// assert_eq!(
///     render_report(Money::from_units(550)),
///     "RESULT:\n######:\nTotal was 550\n"
/// );
/// ```
pub fn render_report(total: Money) -> String {
    format!("RESULT:\n######:\nTotal was {}\n", total)
}
