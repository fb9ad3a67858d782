//! Cross-cutting error types for Warden.
//!
//! Domain-specific errors (e.g., `UsageError`, `ConfigError`) are defined in
//! their respective crates.

use thiserror::Error;

/// Errors that can be raised by any Warden crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Input failed validation: a required field is missing or out of range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    /// Shorthand for building an [`CoreError::InvalidArgument`].
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Whether this error was caused by bad input rather than a fault.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
