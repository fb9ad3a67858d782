//! Reporting of anomalies that do not abort a scan.

use std::sync::Mutex;

/// Receives anomalies tolerated during a usage scan.
pub trait UsageReporter {
    /// An event of the right variant carried an unexpected type tag and was
    /// left out of the count.
    fn unexpected_event_type(&self, expected: &str, actual: &str, request_id: &str);
}

/// Reports anomalies as `tracing` warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl UsageReporter for TracingReporter {
    fn unexpected_event_type(&self, expected: &str, actual: &str, request_id: &str) {
        tracing::warn!(
            request_id,
            "Expected event type {:?}, got {:?}",
            expected,
            actual
        );
    }
}

/// Records anomalies in memory.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    unexpected: Mutex<Vec<(String, String)>>,
}

impl RecordingReporter {
    /// `(request_id, actual type)` pairs reported so far.
    #[must_use]
    pub fn unexpected(&self) -> Vec<(String, String)> {
        self.unexpected
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl UsageReporter for RecordingReporter {
    fn unexpected_event_type(&self, _expected: &str, actual: &str, request_id: &str) {
        if let Ok(mut guard) = self.unexpected.lock() {
            guard.push((request_id.to_string(), actual.to_string()));
        }
    }
}

impl<R: UsageReporter + ?Sized> UsageReporter for &R {
    fn unexpected_event_type(&self, expected: &str, actual: &str, request_id: &str) {
        (**self).unexpected_event_type(expected, actual, request_id);
    }
}
