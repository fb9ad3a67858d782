//! # warden-core
//!
//! Core domain types and error types for Warden.
//!
//! This crate provides the value types shared across all Warden crates:
//! - Resource header and metadata carried by every stored record
//! - Trait maps used by access-list membership requirements
//! - Access-list review records with their validating constructor
//! - Audit event variants consumed by usage accounting
//! - Cross-cutting error types

pub mod accesslist;
pub mod errors;
pub mod events;
pub mod header;
pub mod traits;
