//! Usage accounting configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct UsageConfig {
    /// Events requested per audit search page. `0` leaves the page size to
    /// the audit backend.
    #[serde(default)]
    pub page_limit: u32,

    /// Upper bound on pages fetched in one scan. `None` scans until the
    /// audit backend reports the last page.
    #[serde(default)]
    pub max_pages: Option<u32>,
}

impl UsageConfig {
    /// Check field values that deserialization alone cannot rule out.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `max_pages` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_pages == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "usage.max_pages".into(),
                reason: "must be at least 1 when set".into(),
            });
        }
        Ok(())
    }
}
