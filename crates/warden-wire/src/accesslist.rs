//! Access-list review messages.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::header::ResourceHeader;
use crate::time::{Duration, Timestamp};
use crate::traits::Trait;

/// A stored access-list review.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Review {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<ResourceHeader>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<ReviewSpec>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReviewSpec {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub access_list: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reviewers: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_date: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
    /// Absent when the review changed nothing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changes: Option<ReviewChanges>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReviewChanges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency_changed: Option<Duration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub membership_requirements_changed: Option<AccessListRequires>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub removed_members: Vec<String>,
}

/// Membership requirements of an access list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AccessListRequires {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub traits: Vec<Trait>,
}
