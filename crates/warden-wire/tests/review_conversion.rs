//! Access-list review wire conversion tests.
//!
//! Covers the encode/decode round trip for every combination of changed
//! fields, decoding of partially populated messages, and presence of the
//! `changes` block on the wire.

use std::time::Duration;

use chrono::{NaiveDate, TimeZone, Utc};
use pretty_assertions::assert_eq;
use rstest::rstest;
use schemars::schema_for;
use warden_core::accesslist::{Requires, Review, ReviewChanges, ReviewSpec};
use warden_core::header::Metadata;
use warden_wire::accesslist as wire;
use warden_wire::convert::v1::{from_review_wire, from_traits_wire, to_review_wire};
use warden_wire::time::Timestamp;

fn new_access_list_review(name: &str) -> Review {
    Review::new(
        Metadata {
            name: name.into(),
            ..Metadata::default()
        },
        ReviewSpec {
            access_list: "access-list".into(),
            reviewers: vec!["reviewer1".into(), "reviewer2".into()],
            review_date: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
            notes: "some notes".into(),
            changes: ReviewChanges {
                frequency_changed: Duration::from_secs(20 * 3600),
                membership_requirements_changed: Some(Requires {
                    roles: vec!["role1".into(), "role2".into()],
                    traits: [
                        ("trait1".to_string(), vec!["value1".to_string()]),
                        ("trait2".to_string(), vec!["value2".to_string()]),
                    ]
                    .into_iter()
                    .collect(),
                }),
                removed_members: Some(vec![
                    "removed1".into(),
                    "removed2".into(),
                    "removed3".into(),
                ]),
            },
        },
    )
    .expect("valid review")
}

/// Encode a fresh review and let the caller damage the message.
fn encoded_with(mutate: impl FnOnce(&mut wire::Review)) -> wire::Review {
    let mut msg = to_review_wire(&new_access_list_review("access-list-review"));
    mutate(&mut msg);
    msg
}

fn spec_mut(msg: &mut wire::Review) -> &mut wire::ReviewSpec {
    msg.spec.as_mut().expect("encoded review has a spec")
}

fn changes_mut(msg: &mut wire::Review) -> &mut wire::ReviewChanges {
    spec_mut(msg)
        .changes
        .as_mut()
        .expect("encoded review has changes")
}

// ---------------------------------------------------------------------------
// Round trip
// ---------------------------------------------------------------------------

#[rstest]
#[case::all_changes(true, true, true)]
#[case::no_changes(false, false, false)]
#[case::only_frequency(true, false, false)]
#[case::only_membership_requirements(false, true, false)]
#[case::only_removed_members(false, false, true)]
fn review_roundtrip(
    #[case] frequency: bool,
    #[case] requirements: bool,
    #[case] removed: bool,
) {
    let mut review = new_access_list_review("access-list-review");
    let changes = &mut review.spec.changes;
    if !frequency {
        changes.frequency_changed = Duration::ZERO;
    }
    if !requirements {
        changes.membership_requirements_changed = None;
    }
    if !removed {
        changes.removed_members = None;
    }

    let converted = from_review_wire(Some(&to_review_wire(&review))).unwrap();
    assert_eq!(converted, review);
}

#[test]
fn largest_frequency_roundtrips() {
    let mut review = new_access_list_review("access-list-review");
    review.spec.changes.frequency_changed = Duration::new(i64::MAX.unsigned_abs(), 999_999_999);
    let review = Review::new(review.header.metadata, review.spec).unwrap();

    let converted = from_review_wire(Some(&to_review_wire(&review))).unwrap();
    assert_eq!(converted, review);
}

// ---------------------------------------------------------------------------
// Values with no encoded form are rejected at construction
// ---------------------------------------------------------------------------

#[test]
fn leap_second_review_date_rejected() {
    let review = new_access_list_review("access-list-review");
    let leap = NaiveDate::from_ymd_opt(2016, 12, 31)
        .and_then(|d| d.and_hms_nano_opt(23, 59, 59, 1_500_000_000))
        .unwrap()
        .and_utc();
    let spec = ReviewSpec {
        review_date: leap,
        ..review.spec
    };

    let err = Review::new(review.header.metadata, spec).unwrap_err();
    assert!(err.is_invalid_argument(), "unexpected error: {err}");
}

#[test]
fn leap_second_expiry_rejected() {
    let review = new_access_list_review("access-list-review");
    let leap = NaiveDate::from_ymd_opt(2016, 12, 31)
        .and_then(|d| d.and_hms_nano_opt(23, 59, 59, 1_000_000_000))
        .unwrap()
        .and_utc();
    let metadata = Metadata {
        expires: Some(leap),
        ..review.header.metadata
    };

    let err = Review::new(metadata, review.spec).unwrap_err();
    assert!(err.is_invalid_argument(), "unexpected error: {err}");
}

#[test]
fn frequency_beyond_wire_range_rejected() {
    let mut review = new_access_list_review("access-list-review");
    review.spec.changes.frequency_changed = Duration::MAX;

    let err = Review::new(review.header.metadata, review.spec).unwrap_err();
    assert!(err.is_invalid_argument(), "unexpected error: {err}");
}

#[test]
fn review_roundtrip_through_json() {
    let review = new_access_list_review("access-list-review");
    let json = serde_json::to_string(&to_review_wire(&review)).unwrap();
    let msg: wire::Review = serde_json::from_str(&json).unwrap();
    assert_eq!(from_review_wire(Some(&msg)).unwrap(), review);
}

#[test]
fn review_wire_json_matches_schema() {
    let msg = to_review_wire(&new_access_list_review("access-list-review"));
    let schema = serde_json::to_value(schema_for!(wire::Review)).unwrap();
    let instance = serde_json::to_value(&msg).unwrap();
    let validator = jsonschema::validator_for(&schema).expect("schema should be valid");
    let errors: Vec<String> = validator.iter_errors(&instance).map(|e| e.to_string()).collect();
    assert!(errors.is_empty(), "schema validation failed: {errors:?}");
}

// ---------------------------------------------------------------------------
// Decoding partially populated messages
// ---------------------------------------------------------------------------

#[test]
fn nil_message_is_rejected() {
    let err = from_review_wire(None).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[rstest]
#[case::spec_missing(|m: &mut wire::Review| m.spec = None)]
#[case::access_list_empty(|m: &mut wire::Review| spec_mut(m).access_list.clear())]
#[case::reviewers_missing(|m: &mut wire::Review| spec_mut(m).reviewers = Vec::new())]
#[case::review_date_missing(|m: &mut wire::Review| spec_mut(m).review_date = None)]
#[case::header_missing(|m: &mut wire::Review| m.header = None)]
#[case::review_date_out_of_range(|m: &mut wire::Review| {
    spec_mut(m).review_date = Some(Timestamp { seconds: 0, nanos: -7 });
})]
#[case::negative_frequency(|m: &mut wire::Review| {
    changes_mut(m).frequency_changed = Some(warden_wire::time::Duration { seconds: -60, nanos: 0 });
})]
fn damaged_message_is_rejected(#[case] mutate: fn(&mut wire::Review)) {
    let err = from_review_wire(Some(&encoded_with(mutate))).unwrap_err();
    assert!(err.is_invalid_argument(), "unexpected error: {err}");
}

#[rstest]
#[case::notes_empty(|m: &mut wire::Review| spec_mut(m).notes.clear())]
#[case::changes_missing(|m: &mut wire::Review| spec_mut(m).changes = None)]
#[case::frequency_missing(|m: &mut wire::Review| changes_mut(m).frequency_changed = None)]
#[case::requirements_missing(|m: &mut wire::Review| {
    changes_mut(m).membership_requirements_changed = None;
})]
#[case::removed_members_missing(|m: &mut wire::Review| changes_mut(m).removed_members = Vec::new())]
#[case::changes_present_but_empty(|m: &mut wire::Review| {
    spec_mut(m).changes = Some(wire::ReviewChanges::default());
})]
fn partial_message_is_accepted(#[case] mutate: fn(&mut wire::Review)) {
    assert!(from_review_wire(Some(&encoded_with(mutate))).is_ok());
}

#[test]
fn missing_changes_decode_to_unset() {
    let msg = encoded_with(|m| spec_mut(m).changes = None);
    let review = from_review_wire(Some(&msg)).unwrap();
    assert_eq!(review.spec.changes, ReviewChanges::default());
}

#[test]
fn empty_changes_block_decodes_like_absent() {
    let msg = encoded_with(|m| spec_mut(m).changes = Some(wire::ReviewChanges::default()));
    let review = from_review_wire(Some(&msg)).unwrap();
    assert_eq!(review.spec.changes, ReviewChanges::default());
}

#[test]
fn missing_changes_fields_decode_to_unset() {
    let msg = encoded_with(|m| {
        let changes = changes_mut(m);
        changes.frequency_changed = None;
        changes.removed_members = Vec::new();
    });
    let review = from_review_wire(Some(&msg)).unwrap();
    assert_eq!(review.spec.changes.frequency_changed, Duration::ZERO);
    assert_eq!(review.spec.changes.removed_members, None);
    assert!(review.spec.changes.membership_requirements_changed.is_some());
}

// ---------------------------------------------------------------------------
// Changes presence on the wire
// ---------------------------------------------------------------------------

#[test]
fn no_changes_omits_changes_block() {
    let mut review = new_access_list_review("access-list-review");
    review.spec.changes = ReviewChanges::default();

    let msg = to_review_wire(&review);
    assert_eq!(msg.spec.as_ref().unwrap().changes, None);

    let json = serde_json::to_value(&msg).unwrap();
    assert!(json["spec"].get("changes").is_none());
}

#[test]
fn only_frequency_changes() {
    let mut review = new_access_list_review("access-list-review");
    review.spec.changes.membership_requirements_changed = None;
    review.spec.changes.removed_members = None;

    let msg = to_review_wire(&review);
    let changes = msg.spec.unwrap().changes.unwrap();
    assert_eq!(
        changes.frequency_changed.unwrap().to_std().unwrap(),
        review.spec.changes.frequency_changed
    );
    assert_eq!(changes.membership_requirements_changed, None);
    assert!(changes.removed_members.is_empty());
}

#[test]
fn only_membership_requirements_change() {
    let mut review = new_access_list_review("access-list-review");
    review.spec.changes.frequency_changed = Duration::ZERO;
    review.spec.changes.removed_members = None;

    let msg = to_review_wire(&review);
    let changes = msg.spec.unwrap().changes.unwrap();
    let expected = review.spec.changes.membership_requirements_changed.unwrap();
    let requires = changes.membership_requirements_changed.unwrap();
    assert_eq!(changes.frequency_changed, None);
    assert_eq!(requires.roles, expected.roles);
    assert_eq!(from_traits_wire(&requires.traits), expected.traits);
    assert!(changes.removed_members.is_empty());
}

#[test]
fn only_removed_members_change() {
    let mut review = new_access_list_review("access-list-review");
    review.spec.changes.frequency_changed = Duration::ZERO;
    review.spec.changes.membership_requirements_changed = None;

    let msg = to_review_wire(&review);
    let changes = msg.spec.unwrap().changes.unwrap();
    assert_eq!(changes.frequency_changed, None);
    assert_eq!(changes.membership_requirements_changed, None);
    assert_eq!(
        Some(changes.removed_members),
        review.spec.changes.removed_members
    );
}
