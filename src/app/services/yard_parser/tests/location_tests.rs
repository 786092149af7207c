//! Tests for yard location decoding

use crate::app::models::CellValue;
use crate::app::services::yard_parser::location::{
    LocationError, decode_location, decode_location_str, normalize_location,
};

#[test]
fn test_hyphenated_and_fixed_width_decode_identically() {
    let hyphenated = decode_location_str("A2-22-05-1").unwrap();
    let fixed = decode_location_str("A221051").unwrap();

    for decoded in [&hyphenated, &fixed] {
        assert_eq!(decoded.block, "A2");
        assert_eq!(decoded.bay, 22);
        assert_eq!(decoded.row, 5);
        assert_eq!(decoded.tier, 1);
    }
    assert_eq!(hyphenated.normalized, "A2-22-05-1");
    assert_eq!(fixed.normalized, "A221051");
}

#[test]
fn test_whitespace_is_removed_before_decoding() {
    assert_eq!(normalize_location("  A2 - 22 -05- 1 "), "A2-22-05-1");

    let decoded = decode_location_str(" A2 22 05 1 ").unwrap();
    assert_eq!(decoded.normalized, "A221051");
    assert_eq!(decoded.block, "A2");
    assert_eq!(decoded.bay, 22);
}

#[test]
fn test_fixed_width_long_block_name() {
    let decoded = decode_location_str("EMPTY130024").unwrap();
    assert_eq!(decoded.block, "EMPTY1");
    assert_eq!(decoded.bay, 30);
    assert_eq!(decoded.row, 2);
    assert_eq!(decoded.tier, 4);
}

#[test]
fn test_fixed_width_minimum_length() {
    let decoded = decode_location_str("B01011").unwrap();
    assert_eq!(decoded.block, "B");
    assert_eq!(decoded.bay, 1);
    assert_eq!(decoded.row, 1);
    assert_eq!(decoded.tier, 1);

    assert!(matches!(
        decode_location_str("01011"),
        Err(LocationError::UnrecognizedFormat { .. })
    ));
}

#[test]
fn test_missing_location() {
    assert_eq!(decode_location(None), Err(LocationError::MissingLocation));
    assert_eq!(
        decode_location(Some(&CellValue::Text("   ".to_string()))),
        Err(LocationError::MissingLocation)
    );
}

#[test]
fn test_non_text_location_is_missing() {
    let number = CellValue::Number(1221051.0);
    assert_eq!(decode_location(Some(&number)), Err(LocationError::MissingLocation));

    let flag = CellValue::Bool(true);
    assert_eq!(decode_location(Some(&flag)), Err(LocationError::MissingLocation));
}

#[test]
fn test_short_unhyphenated_is_unrecognized() {
    let err = decode_location_str("A2-22").unwrap_err();
    assert_eq!(err.code(), "unrecognized-format");
}

#[test]
fn test_non_numeric_segment_is_invalid() {
    let err = decode_location_str("A2-2X-05-1").unwrap_err();
    assert_eq!(err.code(), "invalid-format");

    let err = decode_location_str("A2X2051").unwrap_err();
    assert_eq!(err.code(), "invalid-format");
}

#[test]
fn test_empty_segment_is_invalid() {
    let err = decode_location_str("A2--05-1").unwrap_err();
    assert_eq!(err.code(), "invalid-format");

    let err = decode_location_str("-22-05-1").unwrap_err();
    assert_eq!(err.code(), "invalid-format");
}

#[test]
fn test_zero_row_or_tier_is_invalid() {
    assert_eq!(decode_location_str("A2-22-00-1").unwrap_err().code(), "invalid-format");
    assert_eq!(decode_location_str("A2-22-05-0").unwrap_err().code(), "invalid-format");
    assert_eq!(decode_location_str("A222000").unwrap_err().code(), "invalid-format");
}

#[test]
fn test_signed_numbers_are_invalid() {
    assert_eq!(decode_location_str("A2-+2-05-1").unwrap_err().code(), "invalid-format");
}

#[test]
fn test_bay_is_not_bounds_checked() {
    let decoded = decode_location_str("A2-00-05-1").unwrap();
    assert_eq!(decoded.bay, 0);

    let decoded = decode_location_str("A2-999-05-1").unwrap();
    assert_eq!(decoded.bay, 999);
}

#[test]
fn test_more_than_four_segments_falls_back_to_fixed_width() {
    // Five segments is not the hyphenated form; fixed width then finds a hyphen in the row digits
    let err = decode_location_str("A-2-22-05-1").unwrap_err();
    assert_eq!(err.code(), "invalid-format");
}

#[test]
fn test_error_messages_name_the_location() {
    let err = decode_location_str("A2-2X-05-1").unwrap_err();
    assert!(err.to_string().contains("A2-2X-05-1"));
    assert_eq!(LocationError::MissingLocation.to_string(), "missing location");
}
