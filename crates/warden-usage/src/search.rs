//! Audit search collaborator interface.

use std::future::Future;

use chrono::{DateTime, Utc};
use warden_core::events::AuditEvent;

use crate::error::SearchError;

/// Order in which events are returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EventOrder {
    /// Oldest first.
    #[default]
    Ascending,
    Descending,
}

/// One page request against the audit log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchEventsRequest {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
    pub order: EventOrder,
    /// Type tags to return. Empty means every type.
    pub event_types: Vec<String>,
    /// Maximum events per page. `0` leaves the page size to the backend.
    pub limit: u32,
    /// Opaque continuation key from the previous page; empty for the first.
    pub start_key: String,
}

/// One page of search results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventPage {
    pub events: Vec<AuditEvent>,
    /// Key for the next page. Empty when there are no more pages.
    pub next_start_key: String,
}

/// A paginated audit log search backend.
///
/// Implementations must return a `next_start_key` that makes progress:
/// repeating the key they were given is treated as a broken backend.
/// Cancellation and deadlines observed by the backend are reported as
/// [`SearchError::Cancelled`] and [`SearchError::DeadlineExceeded`].
pub trait AuditSearcher {
    fn search_events(
        &self,
        req: &SearchEventsRequest,
    ) -> impl Future<Output = Result<EventPage, SearchError>> + Send;
}

impl<S: AuditSearcher + ?Sized> AuditSearcher for &S {
    fn search_events(
        &self,
        req: &SearchEventsRequest,
    ) -> impl Future<Output = Result<EventPage, SearchError>> + Send {
        (**self).search_events(req)
    }
}
