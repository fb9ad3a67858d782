//! Trait list entries.
//!
//! Maps do not survive every wire encoding with a stable order, so trait maps
//! travel as a list of key/values pairs.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One trait and its values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Trait {
    pub key: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}
