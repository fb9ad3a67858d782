//! Usage accounting error types.

use thiserror::Error;
use warden_core::events::EventKindMismatch;

/// Errors reported by an audit search backend.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The backend failed to serve the page.
    #[error("Audit backend error: {0}")]
    Backend(String),

    /// The start key was not issued by this backend.
    #[error("Invalid start key: {0:?}")]
    InvalidStartKey(String),

    /// The caller cancelled the search.
    #[error("Audit search cancelled")]
    Cancelled,

    /// The caller's deadline passed before the search completed.
    #[error("Audit search deadline exceeded")]
    DeadlineExceeded,

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Errors that abort a usage scan. No partial count is returned with any of
/// them.
#[derive(Debug, Error)]
pub enum UsageError {
    /// The audit log returned an event of the wrong variant.
    #[error("Unexpected audit event shape: {0}")]
    ShapeMismatch(#[from] EventKindMismatch),

    /// Fetching a page failed.
    #[error("Searching audit events failed: {0}")]
    Upstream(#[from] SearchError),

    /// The backend handed back the start key it was given.
    #[error("Audit search did not advance past start key {cursor:?}")]
    StalledCursor { cursor: String },

    /// The scan hit the configured page bound before the last page.
    #[error("Audit search exceeded {max_pages} pages")]
    PageLimitExceeded { max_pages: u32 },
}
