//! In-memory paging audit log.
//!
//! Holds events in append order and serves them through [`AuditSearcher`]
//! with the same filtering and pagination contract a storage backend
//! offers. Start keys are decimal offsets into the filtered result.

use warden_core::events::AuditEvent;

use crate::error::SearchError;
use crate::search::{AuditSearcher, EventOrder, EventPage, SearchEventsRequest};

/// Page size used when a request leaves `limit` at `0`.
pub const DEFAULT_PAGE_SIZE: usize = 100;

#[derive(Debug, Clone, Default)]
pub struct MemoryAuditLog {
    events: Vec<AuditEvent>,
    page_size: usize,
}

impl MemoryAuditLog {
    #[must_use]
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    /// A log whose default page size is `page_size` (at least 1).
    #[must_use]
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            events: Vec::new(),
            page_size: page_size.max(1),
        }
    }

    pub fn append(&mut self, event: impl Into<AuditEvent>) {
        self.events.push(event.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    fn search(&self, req: &SearchEventsRequest) -> Result<EventPage, SearchError> {
        let offset = if req.start_key.is_empty() {
            0
        } else {
            req.start_key
                .parse::<usize>()
                .map_err(|_| SearchError::InvalidStartKey(req.start_key.clone()))?
        };

        let mut matched: Vec<&AuditEvent> = self
            .events
            .iter()
            .filter(|ev| {
                let time = ev.metadata().time;
                time >= req.from && time <= req.to
            })
            .filter(|ev| {
                req.event_types.is_empty() || req.event_types.iter().any(|t| t == ev.get_type())
            })
            .collect();
        matched.sort_by_key(|ev| ev.metadata().time);
        if req.order == EventOrder::Descending {
            matched.reverse();
        }

        if offset > matched.len() {
            return Err(SearchError::InvalidStartKey(req.start_key.clone()));
        }

        let limit = match usize::try_from(req.limit) {
            Ok(0) | Err(_) => self.page_size,
            Ok(n) => n,
        };
        let end = offset.saturating_add(limit).min(matched.len());
        let events = matched[offset..end].iter().map(|ev| (*ev).clone()).collect();
        let next_start_key = if end < matched.len() {
            end.to_string()
        } else {
            String::new()
        };

        Ok(EventPage {
            events,
            next_start_key,
        })
    }
}

impl AuditSearcher for MemoryAuditLog {
    async fn search_events(&self, req: &SearchEventsRequest) -> Result<EventPage, SearchError> {
        self.search(req)
    }
}
