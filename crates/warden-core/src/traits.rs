//! User trait maps.
//!
//! A trait is a named, multi-valued attribute of a user (e.g. `"logins"` ->
//! `["root", "ubuntu"]`). Access-list membership requirements match against
//! these.

use std::collections::BTreeMap;

/// Mapping from trait name to its ordered values.
///
/// A `BTreeMap` keeps the key order stable so that encoded forms are
/// deterministic.
pub type Traits = BTreeMap<String, Vec<String>>;
