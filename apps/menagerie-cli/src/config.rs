//! Logging configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//! Only the logging layer is configurable; prices and the reference order are fixed.

use std::env;

/// Default filter when neither `MENAGERIE_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn,menagerie=info";

/// Output style of the stderr log layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// `EnvFilter` directive string
    pub log_filter: String,

    /// Log line format
    pub log_format: LogFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_format: LogFormat::Compact,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let log_filter = non_empty("MENAGERIE_LOG")
            .or_else(|| non_empty("RUST_LOG"))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let log_format = match lookup("MENAGERIE_LOG_FORMAT") {
            None => LogFormat::default(),
            Some(v) => match v.trim().to_ascii_lowercase().as_str() {
                "compact" => LogFormat::Compact,
                "pretty" => LogFormat::Pretty,
                _ => return Err(ConfigError::InvalidValue("MENAGERIE_LOG_FORMAT".to_string())),
            },
        };

        Ok(CliConfig {
            log_filter,
            log_format,
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_menagerie_log_wins_over_rust_log() {
        let config = CliConfig::from_lookup(lookup_from(&[
            ("RUST_LOG", "trace"),
            ("MENAGERIE_LOG", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.log_filter, "debug");

        let config = CliConfig::from_lookup(lookup_from(&[("RUST_LOG", "trace")])).unwrap();
        assert_eq!(config.log_filter, "trace");
    }

    #[test]
    fn test_empty_menagerie_log_falls_through_to_rust_log() {
        let config = CliConfig::from_lookup(lookup_from(&[
            ("MENAGERIE_LOG", ""),
            ("RUST_LOG", "menagerie=debug"),
        ]))
        .unwrap();
        assert_eq!(config.log_filter, "menagerie=debug");

        let config = CliConfig::from_lookup(lookup_from(&[
            ("MENAGERIE_LOG", "  "),
            ("RUST_LOG", ""),
        ]))
        .unwrap();
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_log_format() {
        let config =
            CliConfig::from_lookup(lookup_from(&[("MENAGERIE_LOG_FORMAT", "Pretty")])).unwrap();
        assert_eq!(config.log_format, LogFormat::Pretty);

        let err = CliConfig::from_lookup(lookup_from(&[("MENAGERIE_LOG_FORMAT", "json")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for MENAGERIE_LOG_FORMAT");
    }
}
