use warden_core::accesslist::{Requires, Review, ReviewChanges, ReviewSpec};
use warden_core::errors::CoreError;

use super::header::{from_metadata_wire, to_resource_header_wire};
use super::traits::{from_traits_wire, to_traits_wire};
use crate::accesslist as wire;
use crate::time::{Duration, Timestamp};

/// Encode an access-list review.
///
/// The `changes` block is left out entirely when nothing changed, and each
/// of its fields is only written when set.
#[must_use]
pub fn to_review_wire(review: &Review) -> wire::Review {
    let changes = &review.spec.changes;
    let wire_changes = changes.has_changes().then(|| wire::ReviewChanges {
        frequency_changed: (!changes.frequency_changed.is_zero())
            .then(|| Duration::from(changes.frequency_changed)),
        membership_requirements_changed: changes
            .membership_requirements_changed
            .as_ref()
            .map(to_requires_wire),
        removed_members: changes.removed_members.clone().unwrap_or_default(),
    });

    wire::Review {
        header: Some(to_resource_header_wire(&review.header)),
        spec: Some(wire::ReviewSpec {
            access_list: review.spec.access_list.clone(),
            reviewers: review.spec.reviewers.clone(),
            review_date: Some(Timestamp::from(review.spec.review_date)),
            notes: review.spec.notes.clone(),
            changes: wire_changes,
        }),
    }
}

/// Decode an access-list review.
///
/// # Errors
///
/// Returns `CoreError::InvalidArgument` if the message or its spec is
/// missing, a required field is empty, a time value is out of range, or the
/// decoded review fails [`Review::new`] validation.
pub fn from_review_wire(msg: Option<&wire::Review>) -> Result<Review, CoreError> {
    let Some(msg) = msg else {
        return Err(CoreError::invalid_argument("access list review message is missing"));
    };
    let Some(spec) = msg.spec.as_ref() else {
        return Err(CoreError::invalid_argument("access list review spec is missing"));
    };

    if spec.access_list.is_empty() {
        return Err(CoreError::invalid_argument("access list is missing"));
    }
    if spec.reviewers.is_empty() {
        return Err(CoreError::invalid_argument("reviewers are missing"));
    }
    let Some(review_date) = spec.review_date else {
        return Err(CoreError::invalid_argument("review date is missing"));
    };

    let metadata = from_metadata_wire(
        msg.header
            .as_ref()
            .and_then(|header| header.metadata.as_ref()),
    )?;

    Review::new(
        metadata,
        ReviewSpec {
            access_list: spec.access_list.clone(),
            reviewers: spec.reviewers.clone(),
            review_date: review_date.to_datetime()?,
            notes: spec.notes.clone(),
            changes: from_changes_wire(spec.changes.as_ref())?,
        },
    )
}

fn from_changes_wire(msg: Option<&wire::ReviewChanges>) -> Result<ReviewChanges, CoreError> {
    let Some(msg) = msg else {
        return Ok(ReviewChanges::default());
    };

    let frequency_changed = msg
        .frequency_changed
        .map(Duration::to_std)
        .transpose()?
        .unwrap_or_default();

    Ok(ReviewChanges {
        frequency_changed,
        membership_requirements_changed: msg
            .membership_requirements_changed
            .as_ref()
            .map(from_requires_wire),
        removed_members: (!msg.removed_members.is_empty()).then(|| msg.removed_members.clone()),
    })
}

fn to_requires_wire(requires: &Requires) -> wire::AccessListRequires {
    wire::AccessListRequires {
        roles: requires.roles.clone(),
        traits: to_traits_wire(&requires.traits),
    }
}

fn from_requires_wire(msg: &wire::AccessListRequires) -> Requires {
    Requires {
        roles: msg.roles.clone(),
        traits: from_traits_wire(&msg.traits),
    }
}
