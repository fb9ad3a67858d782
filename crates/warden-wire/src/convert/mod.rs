//! Conversions between domain values and wire messages.
//!
//! Conversions are versioned alongside the wire schema; `v1` is the only
//! schema version written today.

pub mod v1;
