//! Monthly access request usage.

use std::collections::HashSet;
use std::time::Duration;

use chrono::{DateTime, Datelike, Days, NaiveTime, Utc};
use warden_config::UsageConfig;
use warden_core::events::ACCESS_REQUEST_CREATE_EVENT;

use crate::error::{SearchError, UsageError};
use crate::reporter::{TracingReporter, UsageReporter};
use crate::search::{AuditSearcher, EventOrder, EventPage, SearchEventsRequest};

/// Closed time range `[from, to]` scanned for usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageWindow {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl UsageWindow {
    /// From the first instant of `now`'s calendar month (UTC) up to `now`.
    #[must_use]
    pub fn month_to_date(now: DateTime<Utc>) -> Self {
        Self {
            from: month_start(now),
            to: now,
        }
    }
}

/// First instant of the UTC calendar month containing `now`.
#[must_use]
pub fn month_start(now: DateTime<Utc>) -> DateTime<Utc> {
    let first = now.date_naive() - Days::new(u64::from(now.day0()));
    first.and_time(NaiveTime::MIN).and_utc()
}

/// Number of distinct access requests created this month.
///
/// Uses the default [`UsageConfig`] and reports tolerated anomalies as
/// `tracing` warnings.
///
/// # Errors
///
/// See [`UsageCounter::count_monthly_access_requests`].
pub async fn access_request_monthly_usage<S: AuditSearcher>(
    searcher: &S,
    now: DateTime<Utc>,
) -> Result<usize, UsageError> {
    UsageCounter::new(searcher)
        .count_monthly_access_requests(now)
        .await
}

/// Progress of a paginated scan.
#[derive(Debug)]
enum ScanState {
    /// Next page to fetch, by start key.
    Scanning(String),
    Done,
    Failed(UsageError),
}

/// Counts access requests by scanning the audit log.
#[derive(Debug)]
pub struct UsageCounter<S, R = TracingReporter> {
    searcher: S,
    reporter: R,
    config: UsageConfig,
}

impl<S: AuditSearcher> UsageCounter<S> {
    #[must_use]
    pub fn new(searcher: S) -> Self {
        Self {
            searcher,
            reporter: TracingReporter,
            config: UsageConfig::default(),
        }
    }
}

impl<S: AuditSearcher, R: UsageReporter> UsageCounter<S, R> {
    /// Replace the anomaly reporter.
    #[must_use]
    pub fn with_reporter<R2: UsageReporter>(self, reporter: R2) -> UsageCounter<S, R2> {
        UsageCounter {
            searcher: self.searcher,
            reporter,
            config: self.config,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: UsageConfig) -> Self {
        self.config = config;
        self
    }

    /// Number of distinct access requests created between the start of
    /// `now`'s month and `now`.
    ///
    /// Every returned event must be an `AccessRequestCreate`. One whose type
    /// tag is not `access_request.create` is reported and skipped.
    ///
    /// # Errors
    ///
    /// Returns `UsageError::Upstream` if a page fetch fails,
    /// `UsageError::ShapeMismatch` if an event has the wrong variant, and
    /// `UsageError::StalledCursor` / `UsageError::PageLimitExceeded` if the
    /// backend stops making progress.
    pub async fn count_monthly_access_requests(
        &self,
        now: DateTime<Utc>,
    ) -> Result<usize, UsageError> {
        self.count_access_requests(UsageWindow::month_to_date(now))
            .await
    }

    /// Same as [`Self::count_monthly_access_requests`], giving up once
    /// `deadline` elapses.
    ///
    /// # Errors
    ///
    /// As above; an elapsed deadline is reported as
    /// `UsageError::Upstream(SearchError::DeadlineExceeded)`.
    pub async fn count_monthly_access_requests_with_deadline(
        &self,
        now: DateTime<Utc>,
        deadline: Duration,
    ) -> Result<usize, UsageError> {
        tokio::time::timeout(deadline, self.count_monthly_access_requests(now))
            .await
            .unwrap_or_else(|_elapsed| Err(UsageError::Upstream(SearchError::DeadlineExceeded)))
    }

    /// Distinct access requests created within `window`.
    ///
    /// # Errors
    ///
    /// See [`Self::count_monthly_access_requests`].
    pub async fn count_access_requests(&self, window: UsageWindow) -> Result<usize, UsageError> {
        let mut created: HashSet<String> = HashSet::new();
        let mut pages = 0u32;
        let mut state = ScanState::Scanning(String::new());

        loop {
            state = match state {
                ScanState::Scanning(start_key) => {
                    self.scan_page(window, start_key, &mut pages, &mut created)
                        .await
                }
                ScanState::Done => break,
                ScanState::Failed(err) => return Err(err),
            };
        }

        tracing::debug!(
            pages,
            count = created.len(),
            "access request usage scan complete"
        );
        Ok(created.len())
    }

    async fn scan_page(
        &self,
        window: UsageWindow,
        start_key: String,
        pages: &mut u32,
        created: &mut HashSet<String>,
    ) -> ScanState {
        if let Some(max_pages) = self.config.max_pages {
            if *pages >= max_pages {
                return ScanState::Failed(UsageError::PageLimitExceeded { max_pages });
            }
        }

        let req = SearchEventsRequest {
            from: window.from,
            to: window.to,
            order: EventOrder::Ascending,
            event_types: vec![ACCESS_REQUEST_CREATE_EVENT.to_string()],
            limit: self.config.page_limit,
            start_key,
        };

        let page = match self.searcher.search_events(&req).await {
            Ok(page) => page,
            Err(err) => return ScanState::Failed(err.into()),
        };
        *pages += 1;
        tracing::debug!(
            page = *pages,
            events = page.events.len(),
            "fetched audit events page"
        );

        if let Err(err) = self.tally(&page, created) {
            return ScanState::Failed(err);
        }

        let EventPage { next_start_key, .. } = page;
        if next_start_key.is_empty() {
            ScanState::Done
        } else if next_start_key == req.start_key {
            ScanState::Failed(UsageError::StalledCursor {
                cursor: next_start_key,
            })
        } else {
            ScanState::Scanning(next_start_key)
        }
    }

    fn tally(&self, page: &EventPage, created: &mut HashSet<String>) -> Result<(), UsageError> {
        for event in &page.events {
            let ev = event.as_access_request_create()?;
            if ev.get_type() == ACCESS_REQUEST_CREATE_EVENT {
                created.insert(ev.request_id.clone());
            } else {
                self.reporter.unexpected_event_type(
                    ACCESS_REQUEST_CREATE_EVENT,
                    ev.get_type(),
                    &ev.request_id,
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    #[case(Utc.with_ymd_and_hms(2023, 1, 15, 0, 0, 0).unwrap(), Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap())]
    #[case(Utc.with_ymd_and_hms(2024, 2, 29, 23, 59, 59).unwrap(), Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap())]
    #[case(Utc.with_ymd_and_hms(2023, 12, 1, 0, 0, 0).unwrap(), Utc.with_ymd_and_hms(2023, 12, 1, 0, 0, 0).unwrap())]
    fn month_start_truncates_to_first_of_month(
        #[case] now: DateTime<Utc>,
        #[case] expected: DateTime<Utc>,
    ) {
        assert_eq!(month_start(now), expected);
    }

    #[test]
    fn month_start_drops_subsecond_precision() {
        let now = Utc.with_ymd_and_hms(2023, 3, 9, 8, 7, 6).unwrap()
            + chrono::Duration::milliseconds(250);
        assert_eq!(
            month_start(now),
            Utc.with_ymd_and_hms(2023, 3, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn window_ends_at_now() {
        let now = Utc.with_ymd_and_hms(2023, 1, 15, 0, 0, 0).unwrap();
        let window = UsageWindow::month_to_date(now);
        assert_eq!(window.to, now);
        assert_eq!(window.from, month_start(now));
    }
}
