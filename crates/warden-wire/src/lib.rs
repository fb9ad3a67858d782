//! # warden-wire
//!
//! Wire representation of Warden records, used for storage and transport.
//!
//! Wire messages follow protobuf conventions: every nested message is
//! optional, scalar fields use their zero value for "unset", and repeated
//! fields cannot tell empty from absent. Messages serialize as JSON with
//! unset fields omitted.
//!
//! - [`time`]: timestamp and duration messages
//! - [`header`]: resource header and metadata messages
//! - [`traits`]: trait list entries
//! - [`accesslist`]: access-list review messages
//! - [`convert`]: versioned conversions between domain values and messages

pub mod accesslist;
pub mod convert;
pub mod header;
pub mod time;
pub mod traits;
