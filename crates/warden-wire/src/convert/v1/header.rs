use warden_core::errors::CoreError;
use warden_core::header::{Metadata, ResourceHeader};

use crate::header as wire;
use crate::time::Timestamp;

/// Encode a resource header.
#[must_use]
pub fn to_resource_header_wire(header: &ResourceHeader) -> wire::ResourceHeader {
    wire::ResourceHeader {
        kind: header.kind.clone(),
        sub_kind: String::new(),
        version: header.version.clone(),
        metadata: Some(to_metadata_wire(&header.metadata)),
    }
}

/// Encode resource metadata.
#[must_use]
pub fn to_metadata_wire(metadata: &Metadata) -> wire::Metadata {
    wire::Metadata {
        name: metadata.name.clone(),
        description: metadata.description.clone(),
        labels: metadata.labels.clone(),
        expires: metadata.expires.map(Timestamp::from),
        revision: metadata.revision.clone(),
    }
}

/// Decode resource metadata. A missing message decodes to empty metadata;
/// whether a name is required is up to the resource constructor.
///
/// # Errors
///
/// Returns `CoreError::InvalidArgument` if `expires` is out of range.
pub fn from_metadata_wire(msg: Option<&wire::Metadata>) -> Result<Metadata, CoreError> {
    let Some(msg) = msg else {
        return Ok(Metadata::default());
    };

    let expires = msg.expires.map(Timestamp::to_datetime).transpose()?;

    Ok(Metadata {
        name: msg.name.clone(),
        description: msg.description.clone(),
        labels: msg.labels.clone(),
        expires,
        revision: msg.revision.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    #[test]
    fn metadata_roundtrip() {
        let metadata = Metadata {
            name: "review".into(),
            description: "quarterly".into(),
            labels: [("team".to_string(), "infra".to_string())]
                .into_iter()
                .collect(),
            expires: Some(Utc.with_ymd_and_hms(2024, 6, 30, 0, 0, 0).unwrap()),
            revision: "rev-3".into(),
        };
        let msg = to_metadata_wire(&metadata);
        assert_eq!(from_metadata_wire(Some(&msg)).unwrap(), metadata);
    }

    #[test]
    fn missing_metadata_decodes_empty() {
        assert_eq!(from_metadata_wire(None).unwrap(), Metadata::default());
    }

    #[test]
    fn invalid_expiry_rejected() {
        let msg = wire::Metadata {
            name: "review".into(),
            expires: Some(Timestamp {
                seconds: 0,
                nanos: 2_000_000_000,
            }),
            ..wire::Metadata::default()
        };
        assert!(from_metadata_wire(Some(&msg)).unwrap_err().is_invalid_argument());
    }
}
