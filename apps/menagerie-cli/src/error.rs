//! CLI error type: everything `main` can fail with.

use menagerie_core::CoreError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Pricing failed: {0}")]
    Core(#[from] CoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
