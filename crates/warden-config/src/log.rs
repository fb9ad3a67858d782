//! Logging configuration and tracing subscriber setup.

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::ConfigError;

/// Environment variable that overrides the configured filter.
pub const LOG_ENV_VAR: &str = "WARDEN_LOG";

fn default_filter() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct LogConfig {
    /// `tracing-subscriber` filter directive, e.g. `"warden_usage=debug"`.
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl LogConfig {
    /// Build the subscriber filter. `WARDEN_LOG` wins over the config value.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the configured directive does
    /// not parse.
    pub fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
        if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV_VAR) {
            return Ok(filter);
        }
        EnvFilter::try_new(&self.filter).map_err(|e| ConfigError::InvalidValue {
            field: "log.filter".into(),
            reason: e.to_string(),
        })
    }
}

/// Install the global `fmt` subscriber.
///
/// # Errors
///
/// Returns `ConfigError` if the filter is invalid or a global subscriber is
/// already installed.
pub fn init_tracing(config: &LogConfig) -> Result<(), ConfigError> {
    let filter = config.env_filter()?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| ConfigError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_is_warn() {
        assert_eq!(LogConfig::default().filter, "warn");
    }

    #[test]
    fn configured_directive_parses() {
        let config = LogConfig {
            filter: "warden_usage=debug,info".into(),
        };
        assert!(config.env_filter().is_ok());
    }
}
