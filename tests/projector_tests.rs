//! End-to-end projector tests: bytes -> RawTree -> Named Tree.

use bytes::Bytes;
use tap3_ber::{parse_ber, project_tap, ErrorCode, NamedData};

fn encode_high_tag(tag: u64) -> Vec<u8> {
    let mut groups = vec![(tag & 0x7F) as u8];
    let mut remaining = tag >> 7;
    while remaining > 0 {
        groups.push((remaining & 0x7F) as u8 | 0x80);
        remaining >>= 7;
    }
    groups.reverse();
    groups
}

fn tlv(tag: u64, constructed: bool, value: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    if tag < 0x1F {
        let first = (if constructed { 0x20 } else { 0x00 }) | tag as u8;
        out.push(first);
    } else {
        out.push(if constructed { 0x3F } else { 0x1F });
        out.extend(encode_high_tag(tag));
    }
    assert!(value.len() < 128, "test helper only supports short-form lengths");
    out.push(value.len() as u8);
    out.extend_from_slice(value);
    out
}

#[test]
fn projects_a_realistic_transfer_batch_fragment() {
    // TransferBatch(1) { BatchControlInfo(4) { Imei(128) = "1234", Msisdn(152) = 500 } }
    let imei = tlv(128, false, &[0x12, 0x34, 0xFF]); // BCD "1234"
    let msisdn = tlv(152, false, &[0x01, 0xF4]); // 500
    let mut batch_control_content = imei;
    batch_control_content.extend(msisdn);
    let batch_control = tlv(4, true, &batch_control_content);
    let transfer_batch = tlv(1, true, &batch_control);

    let tree = parse_ber(&transfer_batch).unwrap();
    let named = project_tap(&tree, 3, 11).unwrap();

    let batch = named.children().next().expect("TransferBatch");
    assert_eq!(batch.name(), "TransferBatch");

    let control = batch.children().next().expect("BatchControlInfo");
    assert_eq!(control.name(), "BatchControlInfo");
    assert_eq!(*control.data(), NamedData::Absent);

    let mut control_children = control.children();
    let imei = control_children.next().unwrap();
    assert_eq!(imei.name(), "Imei");
    assert_eq!(*imei.data(), NamedData::Digits("1234".to_string()));

    let msisdn = control_children.next().unwrap();
    assert_eq!(msisdn.name(), "Msisdn");
    assert_eq!(*msisdn.data(), NamedData::Integer(500));
}

#[test]
fn octet_string_field_is_copied_verbatim() {
    let tap_currency = tlv(210, false, b"EUR");
    let data = tlv(1, true, &tap_currency);
    let tree = parse_ber(&data).unwrap();
    let named = project_tap(&tree, 3, 11).unwrap();
    let batch = named.children().next().unwrap();
    let currency = batch.children().next().unwrap();
    assert_eq!(currency.name(), "TapCurrency");
    assert_eq!(*currency.data(), NamedData::Text(Bytes::from_static(b"EUR")));
}

#[test]
fn integer64_field_decodes_as_signed_integer() {
    let data_volume = tlv(343, false, &0x1_0000_0001i64.to_be_bytes()[3..]); // minimal 5-byte form
    let data = tlv(1, true, &data_volume);
    let tree = parse_ber(&data).unwrap();
    let named = project_tap(&tree, 3, 11).unwrap();
    let batch = named.children().next().unwrap();
    let total = batch.children().next().unwrap();
    assert_eq!(total.name(), "TotalDataVolume");
    assert_eq!(*total.data(), NamedData::Integer(0x1_0000_0001));
}

#[test]
fn unresolved_tag_drops_its_whole_subtree() {
    // An unknown outer tag wrapping a recognised inner tag: both vanish,
    // because the projector skips the subtree entirely on an unresolved tag.
    let msisdn = tlv(152, false, &[0x00, 0x01]);
    let unknown_wrapper = tlv(50_000, true, &msisdn);
    let data = tlv(1, true, &unknown_wrapper);

    let tree = parse_ber(&data).unwrap();
    let named = project_tap(&tree, 3, 11).unwrap();
    let batch = named.children().next().unwrap();
    assert_eq!(batch.children().count(), 0);
}

#[test]
fn unknown_schema_fails_the_whole_projection() {
    let data = tlv(1, true, &[]);
    let tree = parse_ber(&data).unwrap();
    let err = project_tap(&tree, 3, 12).unwrap_err();
    assert_eq!(err.code(), ErrorCode::UnknownSchema);

    let err = project_tap(&tree, 99, 0).unwrap_err();
    assert_eq!(err.code(), ErrorCode::UnknownSchema);
}

#[test]
fn projection_is_deterministic_for_a_fixed_raw_tree() {
    let msisdn = tlv(152, false, &[0x00, 0x2A]);
    let data = tlv(1, true, &msisdn);
    let tree = parse_ber(&data).unwrap();

    let first = project_tap(&tree, 3, 11).unwrap();
    let second = project_tap(&tree, 3, 11).unwrap();
    assert_eq!(first, second);
}

#[test]
fn bcd_round_trips_on_canonical_even_length_digit_strings() {
    fn pack_bcd(digits: &str) -> Vec<u8> {
        let nibbles: Vec<u8> = digits.bytes().map(|b| b - b'0').collect();
        nibbles.chunks(2).map(|pair| (pair[0] << 4) | pair[1]).collect()
    }

    for digits in ["12", "1234", "00", "98765432"] {
        let packed = pack_bcd(digits);
        let decoded = tap3_ber::projector::decode_bcd_string(&Bytes::copy_from_slice(&packed));
        assert_eq!(decoded, digits);
    }
}

#[test]
fn integer_round_trips_on_minimal_length_encodings() {
    for value in [0i64, 1, -1, 127, -128, 32767, -32768, i64::MAX, i64::MIN] {
        let mut bytes: Vec<u8> = value.to_be_bytes().to_vec();
        while bytes.len() > 1 {
            let keep_high_bit = bytes[0] & 0x80 != 0;
            let can_trim = if value < 0 {
                bytes[0] == 0xFF && (bytes[1] & 0x80) != 0
            } else {
                bytes[0] == 0x00 && (bytes[1] & 0x80) == 0
            };
            let _ = keep_high_bit;
            if can_trim {
                bytes.remove(0);
            } else {
                break;
            }
        }
        let decoded = tap3_ber::projector::decode_integer(&Bytes::copy_from_slice(&bytes)).unwrap();
        assert_eq!(decoded, value, "round-trip failed for {}", value);
    }
}
