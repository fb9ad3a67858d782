//! # warden-usage
//!
//! Resource usage accounting derived from the audit event stream.
//!
//! The audit log itself is an external collaborator reached through the
//! [`AuditSearcher`] trait. This crate drives its paginated search, checks
//! every returned event, and aggregates the result:
//!
//! - [`access_request_monthly_usage`]: distinct access requests created in
//!   the current calendar month (UTC)
//! - [`UsageCounter`]: the same count with configurable page size, page
//!   bound, reporter, and deadline
//! - [`MemoryAuditLog`]: an in-memory paging audit log for tests and
//!   embedders without a storage backend

pub mod error;
pub mod memory;
pub mod reporter;
pub mod search;
pub mod usage;

pub use error::{SearchError, UsageError};
pub use memory::MemoryAuditLog;
pub use reporter::{RecordingReporter, TracingReporter, UsageReporter};
pub use search::{AuditSearcher, EventOrder, EventPage, SearchEventsRequest};
pub use usage::{UsageCounter, UsageWindow, access_request_monthly_usage, month_start};
