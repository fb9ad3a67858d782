//! Version 1 conversions.
//!
//! Encoding (`to_*_wire`) is total. Decoding (`from_*_wire`) accepts `None`
//! and partially populated messages and reports missing required fields as
//! `CoreError::InvalidArgument` instead of panicking.

pub mod header;
pub mod review;
pub mod traits;

pub use header::{from_metadata_wire, to_metadata_wire, to_resource_header_wire};
pub use review::{from_review_wire, to_review_wire};
pub use traits::{from_traits_wire, to_traits_wire};
