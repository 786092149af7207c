//! Tests for alias-based column resolution

use super::*;
use crate::app::models::CellValue;
use crate::app::services::yard_parser::column_mapping::{
    ColumnMapping, Field, cell_text, resolve_column,
};

#[test]
fn test_resolve_is_case_and_whitespace_insensitive_on_keys() {
    let row = RawRow::new().with("  LOCATION ", "A2-22-05-1");
    let mapping = ColumnMapping::standard();

    assert_eq!(
        mapping.resolve(&row, Field::Location),
        Some(&CellValue::Text("A2-22-05-1".to_string()))
    );
}

#[test]
fn test_resolve_does_not_trim_values() {
    let row = RawRow::new().with("Vessel", "  EVER GIVEN ");
    let value = ColumnMapping::standard().resolve(&row, Field::Vessel);

    assert_eq!(value, Some(&CellValue::Text("  EVER GIVEN ".to_string())));
}

#[test]
fn test_resolve_vietnamese_headers() {
    let row = vietnamese_row("MSKU1234565", "A221051", "MSK", "EVER GIVEN");
    let resolved = ColumnMapping::standard().resolve_row(&row);

    assert_eq!(cell_text(resolved.container_id).as_deref(), Some("MSKU1234565"));
    assert_eq!(cell_text(resolved.location).as_deref(), Some("A221051"));
    assert_eq!(cell_text(resolved.owner).as_deref(), Some("MSK"));
    assert_eq!(cell_text(resolved.vessel).as_deref(), Some("EVER GIVEN"));
    assert!(resolved.status.is_none());
    assert!(resolved.flow.is_none());
    assert!(resolved.iso.is_none());
}

#[test]
fn test_row_key_order_wins_over_alias_order() {
    // "location" is last in the alias list but first in the row
    let row = RawRow::new()
        .with("location", "A1-01-01-1")
        .with("Vị trí trên bãi", "B1-03-02-2");
    let value = ColumnMapping::standard().resolve(&row, Field::Location);
    assert_eq!(value, Some(&CellValue::Text("A1-01-01-1".to_string())));

    let reversed = RawRow::new()
        .with("Vị trí trên bãi", "B1-03-02-2")
        .with("location", "A1-01-01-1");
    let value = ColumnMapping::standard().resolve(&reversed, Field::Location);
    assert_eq!(value, Some(&CellValue::Text("B1-03-02-2".to_string())));
}

#[test]
fn test_unknown_headers_resolve_to_none() {
    let row = RawRow::new().with("Ghi chú", "fragile").with("Seal", "123");
    let resolved = ColumnMapping::standard().resolve_row(&row);

    assert!(resolved.location.is_none());
    assert!(resolved.container_id.is_none());
}

#[test]
fn test_partial_header_does_not_match() {
    // "container no" is not an alias of the container id field
    let row = RawRow::new().with("Container No", "MSKU1234565");
    assert!(resolve_column(&row, Field::ContainerId.standard_aliases()).is_none());
}

#[test]
fn test_extra_aliases_are_normalized_and_appended() {
    let mapping = ColumnMapping::standard()
        .with_extra_aliases(Field::Location, ["  Yard Position ", "location"]);

    let aliases = mapping.aliases(Field::Location);
    assert_eq!(aliases.last().map(String::as_str), Some("yard position"));
    // Existing alias is not duplicated
    assert_eq!(aliases.iter().filter(|a| *a == "location").count(), 1);

    let row = RawRow::new().with("YARD POSITION", "A1-01-01-1");
    assert!(mapping.resolve(&row, Field::Location).is_some());
}

#[test]
fn test_cell_text_formats_numbers_and_drops_blanks() {
    let number = CellValue::Number(12345.0);
    let blank = CellValue::Text("   ".to_string());

    assert_eq!(cell_text(Some(&number)).as_deref(), Some("12345"));
    assert_eq!(cell_text(Some(&blank)), None);
    assert_eq!(cell_text(None), None);
}
