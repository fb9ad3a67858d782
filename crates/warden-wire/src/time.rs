//! Timestamp and duration messages.
//!
//! Both carry whole seconds plus a nanosecond remainder in `0..1_000_000_000`.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use warden_core::errors::CoreError;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// A point in time, as seconds and nanoseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Timestamp {
    #[serde(default)]
    pub seconds: i64,
    #[serde(default)]
    pub nanos: i32,
}

/// A signed span of time.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Duration {
    #[serde(default)]
    pub seconds: i64,
    #[serde(default)]
    pub nanos: i32,
}

impl From<DateTime<Utc>> for Timestamp {
    /// A leap-second instant keeps its `nanos >= 1e9` and will not decode;
    /// `Review::new` rejects those instants.
    #[allow(clippy::cast_possible_wrap)]
    fn from(dt: DateTime<Utc>) -> Self {
        // subsec nanos stays below 2e9 even during a leap second
        Self {
            seconds: dt.timestamp(),
            nanos: dt.timestamp_subsec_nanos() as i32,
        }
    }
}

impl Timestamp {
    /// Convert to a UTC datetime.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidArgument` if `nanos` is out of range or the
    /// instant is outside what chrono can represent.
    pub fn to_datetime(self) -> Result<DateTime<Utc>, CoreError> {
        let nanos = u32::try_from(self.nanos)
            .ok()
            .filter(|n| *n < NANOS_PER_SECOND)
            .ok_or_else(|| {
                CoreError::invalid_argument(format!("timestamp nanos {} out of range", self.nanos))
            })?;
        DateTime::from_timestamp(self.seconds, nanos).ok_or_else(|| {
            CoreError::invalid_argument(format!(
                "timestamp {}s is outside the supported range",
                self.seconds
            ))
        })
    }
}

impl From<std::time::Duration> for Duration {
    /// Seconds beyond `i64::MAX` saturate. `Review::new` rejects such
    /// frequencies, so encoding a constructed review never hits the clamp.
    #[allow(clippy::cast_possible_wrap)]
    fn from(d: std::time::Duration) -> Self {
        Self {
            seconds: i64::try_from(d.as_secs()).unwrap_or(i64::MAX),
            nanos: d.subsec_nanos() as i32,
        }
    }
}

impl Duration {
    /// Convert to a non-negative standard duration.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidArgument` for negative durations or
    /// out-of-range nanos.
    pub fn to_std(self) -> Result<std::time::Duration, CoreError> {
        let seconds = u64::try_from(self.seconds).map_err(|_| {
            CoreError::invalid_argument(format!("duration {}s is negative", self.seconds))
        })?;
        let nanos = u32::try_from(self.nanos)
            .ok()
            .filter(|n| *n < NANOS_PER_SECOND)
            .ok_or_else(|| {
                CoreError::invalid_argument(format!("duration nanos {} out of range", self.nanos))
            })?;
        Ok(std::time::Duration::new(seconds, nanos))
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.seconds == 0 && self.nanos == 0
    }
}
