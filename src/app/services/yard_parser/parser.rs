//! Core yard parser implementation
//!
//! Iterates input rows once, resolves columns, decodes the location and
//! materializes containers. A bad row is counted and skipped; it never fails
//! the parse.

use std::collections::BTreeSet;
use tracing::{debug, info};

use super::column_mapping::{ColumnMapping, cell_text};
use super::location::decode_location;
use super::materializer::{ContainerDetails, materialize};
use super::stats::{ParseResult, ParseStats};
use super::table::{rows_from_csv_str, rows_from_json_str, rows_from_workbook_bytes};
use crate::Result;
use crate::app::models::RawRow;

/// Parser for container-yard position rows
#[derive(Debug, Clone, Default)]
pub struct YardParser {
    mapping: ColumnMapping,
}

impl YardParser {
    /// Create a parser with a custom column alias table
    pub fn new(mapping: ColumnMapping) -> Self {
        Self { mapping }
    }

    /// Column alias table in use
    pub fn mapping(&self) -> &ColumnMapping {
        &self.mapping
    }

    /// Parse in-memory rows
    pub fn parse_rows(&self, rows: &[RawRow]) -> ParseResult {
        let mut stats = ParseStats::new();
        let mut containers = Vec::with_capacity(rows.len());
        let mut vessels = BTreeSet::new();

        for (index, row) in rows.iter().enumerate() {
            let row_number = index + 1;
            stats.total_rows += 1;

            let resolved = self.mapping.resolve_row(row);

            // Vessel names are collected even from rows that get skipped
            if let Some(vessel) = cell_text(resolved.vessel) {
                vessels.insert(vessel);
            }

            match decode_location(resolved.location) {
                Ok(location) => {
                    let details = ContainerDetails::from_resolved(&resolved, row_number);
                    containers.extend(materialize(location, details, &mut stats));
                }
                Err(e) => {
                    debug!("Skipped row {}: {}", row_number, e);
                    stats.record_skip(row_number, &e);
                }
            }
        }

        info!("Parsed yard rows: {}", stats.summary());

        ParseResult {
            containers,
            stats,
            vessels: vessels.into_iter().collect(),
        }
    }

    /// Parse CSV text with a header row
    pub fn parse_csv_str(&self, source_name: &str, text: &str) -> Result<ParseResult> {
        let rows = rows_from_csv_str(source_name, text)?;
        debug!("Decoded {} CSV rows from '{}'", rows.len(), source_name);
        Ok(self.parse_rows(&rows))
    }

    /// Parse a JSON array of row objects
    pub fn parse_json_str(&self, source_name: &str, text: &str) -> Result<ParseResult> {
        let rows = rows_from_json_str(source_name, text)?;
        debug!("Decoded {} JSON rows from '{}'", rows.len(), source_name);
        Ok(self.parse_rows(&rows))
    }

    /// Parse the first worksheet of a workbook held in memory
    pub fn parse_workbook_bytes(&self, source_name: &str, bytes: Vec<u8>) -> Result<ParseResult> {
        let rows = rows_from_workbook_bytes(source_name, bytes)?;
        debug!("Decoded {} worksheet rows from '{}'", rows.len(), source_name);
        Ok(self.parse_rows(&rows))
    }
}
