//! Audit event variants.
//!
//! The audit log is polymorphic over a declared type tag. Warden consumes a
//! closed set of variants; anything that reaches a consumer in the wrong
//! variant is reported through [`EventKindMismatch`] rather than being
//! silently skipped.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Emitted when an access request is created.
pub const ACCESS_REQUEST_CREATE_EVENT: &str = "access_request.create";

/// Emitted when an access request changes state. Shares the
/// [`AccessRequestCreate`] payload with the create event.
pub const ACCESS_REQUEST_UPDATE_EVENT: &str = "access_request.update";

/// Emitted when an access list is reviewed.
pub const ACCESS_LIST_REVIEW_EVENT: &str = "access_list.review";

/// Emitted on a user login attempt.
pub const USER_LOGIN_EVENT: &str = "user.login";

/// Fields common to every audit event.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EventMetadata {
    /// Declared type tag, e.g. `"access_request.create"`.
    #[serde(rename = "event")]
    pub event_type: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub id: String,
    pub time: DateTime<Utc>,
    #[serde(default)]
    pub index: i64,
}

/// Payload of access request create and update events.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AccessRequestCreate {
    #[serde(flatten)]
    pub metadata: EventMetadata,
    #[serde(default)]
    pub user: String,
    pub request_id: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub request_state: String,
    #[serde(default)]
    pub reason: String,
}

/// Payload of an access list review event.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AccessListReview {
    #[serde(flatten)]
    pub metadata: EventMetadata,
    pub access_list_name: String,
    pub review_name: String,
    #[serde(default)]
    pub reviewers: Vec<String>,
}

/// Payload of a user login event.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UserLogin {
    #[serde(flatten)]
    pub metadata: EventMetadata,
    pub user: String,
    #[serde(default)]
    pub method: String,
    pub success: bool,
}

/// An audit event as returned by the audit log.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AuditEvent {
    AccessRequestCreate(AccessRequestCreate),
    AccessListReview(AccessListReview),
    UserLogin(UserLogin),
}

/// An event was not of the variant a consumer required.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("expected {expected}, but got {actual}")]
pub struct EventKindMismatch {
    pub expected: &'static str,
    pub actual: &'static str,
}

impl AccessRequestCreate {
    /// Declared type tag of this event.
    #[must_use]
    pub fn get_type(&self) -> &str {
        &self.metadata.event_type
    }
}

impl AuditEvent {
    /// Declared type tag of the wrapped event.
    #[must_use]
    pub fn get_type(&self) -> &str {
        &self.metadata().event_type
    }

    #[must_use]
    pub const fn metadata(&self) -> &EventMetadata {
        match self {
            Self::AccessRequestCreate(ev) => &ev.metadata,
            Self::AccessListReview(ev) => &ev.metadata,
            Self::UserLogin(ev) => &ev.metadata,
        }
    }

    /// Name of the concrete payload type, used in diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::AccessRequestCreate(_) => "AccessRequestCreate",
            Self::AccessListReview(_) => "AccessListReview",
            Self::UserLogin(_) => "UserLogin",
        }
    }

    /// Borrow the payload as an [`AccessRequestCreate`].
    ///
    /// # Errors
    ///
    /// Returns [`EventKindMismatch`] naming the actual variant.
    pub const fn as_access_request_create(
        &self,
    ) -> Result<&AccessRequestCreate, EventKindMismatch> {
        match self {
            Self::AccessRequestCreate(ev) => Ok(ev),
            other => Err(EventKindMismatch {
                expected: "AccessRequestCreate",
                actual: other.kind_name(),
            }),
        }
    }
}

impl TryFrom<AuditEvent> for AccessRequestCreate {
    type Error = EventKindMismatch;

    fn try_from(event: AuditEvent) -> Result<Self, Self::Error> {
        match event {
            AuditEvent::AccessRequestCreate(ev) => Ok(ev),
            other => Err(EventKindMismatch {
                expected: "AccessRequestCreate",
                actual: other.kind_name(),
            }),
        }
    }
}

impl From<AccessRequestCreate> for AuditEvent {
    fn from(ev: AccessRequestCreate) -> Self {
        Self::AccessRequestCreate(ev)
    }
}

impl From<AccessListReview> for AuditEvent {
    fn from(ev: AccessListReview) -> Self {
        Self::AccessListReview(ev)
    }
}

impl From<UserLogin> for AuditEvent {
    fn from(ev: UserLogin) -> Self {
        Self::UserLogin(ev)
    }
}
