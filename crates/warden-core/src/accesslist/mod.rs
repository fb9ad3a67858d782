//! Access-list types.
//!
//! Access lists themselves (membership, ownership, CRUD) are managed
//! elsewhere. This module holds the records Warden produces about them.

mod review;

pub use review::{KIND_ACCESS_LIST_REVIEW, Requires, Review, ReviewChanges, ReviewSpec};
