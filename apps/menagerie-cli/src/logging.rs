//! Tracing setup for the binary.
//!
//! Logs go to stderr so stdout carries nothing but the report.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{CliConfig, LogFormat, DEFAULT_LOG_FILTER};

/// Initializes the global tracing subscriber.
///
/// An unparsable filter falls back to [`DEFAULT_LOG_FILTER`] rather than
/// aborting the run.
pub fn init_tracing(config: &CliConfig) {
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .compact(),
            )
            .init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().with_writer(std::io::stderr).pretty())
            .init(),
    }
}
