//! Resource header shared by every stored record.
//!
//! The header is produced by the storage collaborator. Only `metadata.name`
//! carries meaning inside Warden; every other field is carried through
//! conversions untouched.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Resource version written by this release.
pub const VERSION_V1: &str = "v1";

/// Identifying metadata of a resource.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Metadata {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
    pub expires: Option<DateTime<Utc>>,
    #[serde(default)]
    pub revision: String,
}

/// Kind/version envelope wrapping a resource's metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ResourceHeader {
    pub kind: String,
    pub version: String,
    pub metadata: Metadata,
}

impl ResourceHeader {
    /// Header for a resource of `kind` at version `v1`.
    #[must_use]
    pub fn new(kind: &str, metadata: Metadata) -> Self {
        Self {
            kind: kind.to_string(),
            version: VERSION_V1.to_string(),
            metadata,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.metadata.name
    }
}
