//! Test utilities for yard parser testing
//!
//! Row builders shared by the parser test modules.

use crate::app::models::RawRow;

// Test modules
mod column_mapping_tests;
mod location_tests;

/// Row with the Vietnamese headers used by most terminal exports
pub fn vietnamese_row(container: &str, location: &str, owner: &str, vessel: &str) -> RawRow {
    RawRow::new()
        .with("Số Cont", container)
        .with("Vị trí trên bãi", location)
        .with("Hãng khai thác", owner)
        .with("Tên tàu", vessel)
}

/// Row with English headers and status/flow/ISO columns
pub fn english_row(
    container: &str,
    location: &str,
    status: &str,
    flow: &str,
    iso: &str,
) -> RawRow {
    RawRow::new()
        .with("Container", container)
        .with("Location", location)
        .with("Operator", "MSK")
        .with("Status", status)
        .with("Flow", flow)
        .with("ISO", iso)
}

/// Helper to create CSV content with mixed good and bad rows
pub fn create_test_yard_csv() -> String {
    r#"Số Cont,Vị trí trên bãi,Hãng khai thác,Tên tàu,Trạng thái,Hướng,Mã ISO
MSKU1234565,A2-22-05-1,MSK,EVER GIVEN,F,X,45G1
TGHU7654321,A1 03 02 2,ONE,,E,,22G1
CMAU1111110,,CMA,MAERSK ESSEN,F,I,22R1
OOLU2222221,A1-XX-01-1,OOL,EVER GIVEN,F,X,22G1
HLXU3333332,R1050 13,HLC,MAERSK ESSEN,F,I,22R1
"#
    .to_string()
}
