//! Integration-level invariants for the TAP3 tag dictionary.

use tap3_ber::dictionary::{lookup, schema_exists, FieldType};

#[test]
fn only_release_3_11_is_populated() {
    assert!(schema_exists(3, 11));
    assert!(!schema_exists(3, 10));
    assert!(!schema_exists(3, 12));
    assert!(!schema_exists(2, 2));
    assert!(!schema_exists(0, 0));
}

#[test]
fn lookup_returns_none_for_unpopulated_release() {
    assert_eq!(lookup(3, 10, 1), None);
    assert_eq!(lookup(1, 1, 1), None);
}

#[test]
fn known_fields_resolve_to_the_expected_name_and_type() {
    assert_eq!(lookup(3, 11, 1), Some(("TransferBatch", FieldType::Group)));
    assert_eq!(lookup(3, 11, 128), Some(("Imei", FieldType::BcdString)));
    assert_eq!(lookup(3, 11, 152), Some(("Msisdn", FieldType::Integer)));
    assert_eq!(lookup(3, 11, 210), Some(("TapCurrency", FieldType::OctetString)));
    assert_eq!(lookup(3, 11, 343), Some(("TotalDataVolume", FieldType::Integer64)));
}

#[test]
fn unassigned_tags_resolve_to_none() {
    assert_eq!(lookup(3, 11, 0), None);
    assert_eq!(lookup(3, 11, 7), None); // gap between 6 and 8 in the source table
    assert_eq!(lookup(3, 11, 9_999), None);
}

#[test]
fn every_populated_tag_resolves_consistently() {
    // A handful of tags spread across the table, each checked twice to make
    // sure repeated lookups agree (the table is static, this should be free).
    for &tag in &[1u64, 4, 36, 128, 152, 210, 343] {
        let first = lookup(3, 11, tag);
        let second = lookup(3, 11, tag);
        assert_eq!(first, second);
        assert!(first.is_some(), "tag {} should resolve", tag);
    }
}
