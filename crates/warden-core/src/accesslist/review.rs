use std::time::Duration;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::header::{Metadata, ResourceHeader};
use crate::traits::Traits;

/// Resource kind of an access-list review.
pub const KIND_ACCESS_LIST_REVIEW: &str = "access_list_review";

/// The outcome of a periodic review of an access list.
///
/// Reviews are immutable once built. Use [`Review::new`] so that the same
/// validation applies whether a review is built directly or decoded.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Review {
    pub header: ResourceHeader,
    pub spec: ReviewSpec,
}

/// Body of an access-list review.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReviewSpec {
    /// Name of the access list that was reviewed.
    pub access_list: String,
    pub reviewers: Vec<String>,
    pub review_date: DateTime<Utc>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub changes: ReviewChanges,
}

/// What the review altered. Every field has an "unset" value, and a
/// `ReviewChanges` with all fields unset means nothing changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReviewChanges {
    /// New review frequency. `Duration::ZERO` means unchanged.
    #[serde(default)]
    pub frequency_changed: Duration,
    pub membership_requirements_changed: Option<Requires>,
    pub removed_members: Option<Vec<String>>,
}

/// Membership requirements of an access list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Requires {
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub traits: Traits,
}

/// Largest frequency a signed 64-bit seconds count can carry.
#[allow(clippy::cast_sign_loss)]
const MAX_FREQUENCY_SECS: u64 = i64::MAX as u64;

/// Leap seconds are stored as a subsecond part of one second or more, which
/// has no encoded form.
fn is_leap_second(dt: DateTime<Utc>) -> bool {
    dt.timestamp_subsec_nanos() >= 1_000_000_000
}

impl ReviewChanges {
    /// True when at least one field is set.
    #[must_use]
    pub const fn has_changes(&self) -> bool {
        !self.frequency_changed.is_zero()
            || self.membership_requirements_changed.is_some()
            || self.removed_members.is_some()
    }
}

impl Review {
    /// Build a review, validating required fields and filling in header
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidArgument` if the name, access list,
    /// reviewers, or review date is missing, or if a time value cannot be
    /// encoded (leap-second instants, frequencies beyond `i64::MAX` seconds).
    pub fn new(metadata: Metadata, spec: ReviewSpec) -> Result<Self, CoreError> {
        let mut review = Self {
            header: ResourceHeader::new(KIND_ACCESS_LIST_REVIEW, metadata),
            spec,
        };
        review.check_and_set_defaults()?;
        Ok(review)
    }

    /// Validate the review and normalise optional fields.
    ///
    /// An empty `removed_members` list is collapsed to `None`: the wire form
    /// cannot tell an empty list from an absent one.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidArgument` on the first missing or
    /// unencodable field.
    pub fn check_and_set_defaults(&mut self) -> Result<(), CoreError> {
        self.header.kind = KIND_ACCESS_LIST_REVIEW.to_string();
        if self.header.version.is_empty() {
            self.header.version = crate::header::VERSION_V1.to_string();
        }

        if self.header.metadata.name.is_empty() {
            return Err(CoreError::invalid_argument(
                "access list review name is missing",
            ));
        }
        if self.spec.access_list.is_empty() {
            return Err(CoreError::invalid_argument("access list is missing"));
        }
        if self.spec.reviewers.is_empty() {
            return Err(CoreError::invalid_argument("reviewers are missing"));
        }
        if self.spec.review_date == DateTime::<Utc>::UNIX_EPOCH {
            return Err(CoreError::invalid_argument("review date is missing"));
        }
        if is_leap_second(self.spec.review_date) {
            return Err(CoreError::invalid_argument(
                "review date falls on a leap second",
            ));
        }
        if self.header.metadata.expires.is_some_and(is_leap_second) {
            return Err(CoreError::invalid_argument(
                "expiry falls on a leap second",
            ));
        }
        if self.spec.changes.frequency_changed.as_secs() > MAX_FREQUENCY_SECS {
            return Err(CoreError::invalid_argument(format!(
                "review frequency {:?} is out of range",
                self.spec.changes.frequency_changed
            )));
        }

        if self
            .spec
            .changes
            .removed_members
            .as_ref()
            .is_some_and(Vec::is_empty)
        {
            self.spec.changes.removed_members = None;
        }

        Ok(())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.header.name()
    }
}
