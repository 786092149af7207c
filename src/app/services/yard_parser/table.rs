//! Decoding of CSV text, JSON text and workbooks into rows
//!
//! This is the only place where input can fail as a whole. A table that
//! cannot be decoded returns an error and no rows at all.

use crate::app::models::{CellValue, RawRow};
use crate::{Error, Result};
use calamine::{Data, Range, Reader, open_workbook_auto_from_rs};
use serde_json::Value;
use std::io::{Cursor, Read};

/// Decode CSV text with a header row
pub fn rows_from_csv_str(source_name: &str, text: &str) -> Result<Vec<RawRow>> {
    rows_from_csv_reader(source_name, text.as_bytes())
}

/// Decode CSV from any reader with a header row
///
/// Empty cells are left out of the row. CSV carries no cell types, so every
/// other cell is text.
pub fn rows_from_csv_reader<R: Read>(source_name: &str, reader: R) -> Result<Vec<RawRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| Error::csv_parsing(source_name, "Failed to read CSV headers", Some(e)))?
        .clone();

    let mut rows = Vec::new();
    for (index, result) in csv_reader.records().enumerate() {
        let record = result.map_err(|e| {
            Error::csv_parsing(
                source_name,
                format!("Failed to read CSV record {}", index + 1),
                Some(e),
            )
        })?;

        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .filter(|(_, value)| !value.trim().is_empty())
            .map(|(header, value)| (header, CellValue::Text(value.to_string())))
            .collect();
        rows.push(row);
    }

    Ok(rows)
}

/// Decode a JSON array of objects, keeping each object's key order
///
/// `null` cells are left out. Nested arrays or objects make the whole input
/// non-tabular.
pub fn rows_from_json_str(source_name: &str, text: &str) -> Result<Vec<RawRow>> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| Error::json(format!("Failed to decode '{}'", source_name), e))?;

    let Value::Array(items) = value else {
        return Err(Error::invalid_table(
            source_name,
            "expected a JSON array of row objects",
        ));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| json_row(source_name, index + 1, item))
        .collect()
}

fn json_row(source_name: &str, row_number: usize, item: Value) -> Result<RawRow> {
    let Value::Object(map) = item else {
        return Err(Error::invalid_table(
            source_name,
            format!("row {} is not an object", row_number),
        ));
    };

    let mut row = RawRow::new();
    for (key, value) in map {
        let cell = match value {
            Value::Null => continue,
            Value::String(text) => CellValue::Text(text),
            Value::Bool(b) => CellValue::Bool(b),
            Value::Number(n) => match n.as_f64() {
                Some(n) => CellValue::Number(n),
                None => {
                    return Err(Error::invalid_table(
                        source_name,
                        format!("row {} column '{}' has an unrepresentable number", row_number, key),
                    ));
                }
            },
            Value::Array(_) | Value::Object(_) => {
                return Err(Error::invalid_table(
                    source_name,
                    format!("row {} column '{}' is not a scalar value", row_number, key),
                ));
            }
        };
        row.push(key, cell);
    }

    Ok(row)
}

/// Decode the first worksheet of an `.xlsx`/`.xls` workbook held in memory
///
/// A buffer that is not a workbook, or a workbook without sheets, is not
/// tabular.
pub fn rows_from_workbook_bytes(source_name: &str, bytes: Vec<u8>) -> Result<Vec<RawRow>> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes)).map_err(|e| {
        Error::invalid_table(source_name, format!("not a readable workbook: {}", e))
    })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| Error::invalid_table(source_name, "workbook has no worksheets"))?
        .map_err(|e| {
            Error::invalid_table(source_name, format!("failed to read first worksheet: {}", e))
        })?;

    Ok(rows_from_range(&range))
}

/// Rows of a worksheet range whose first row holds the headers
///
/// Cells keep their spreadsheet type. Empty cells and columns without a
/// header are left out, and rows with no cells at all are dropped.
pub fn rows_from_range(range: &Range<Data>) -> Vec<RawRow> {
    let mut sheet_rows = range.rows();
    let Some(header_row) = sheet_rows.next() else {
        return Vec::new();
    };

    let headers: Vec<Option<String>> = header_row
        .iter()
        .map(|cell| match cell {
            Data::Empty => None,
            other => Some(other.to_string()).filter(|h| !h.trim().is_empty()),
        })
        .collect();

    sheet_rows
        .map(|cells| {
            headers
                .iter()
                .zip(cells)
                .filter_map(|(header, cell)| Some((header.as_deref()?, workbook_cell(cell)?)))
                .collect::<RawRow>()
        })
        .filter(|row| !row.is_empty())
        .collect()
}

fn workbook_cell(cell: &Data) -> Option<CellValue> {
    match cell {
        Data::Empty => None,
        Data::String(text) if text.trim().is_empty() => None,
        Data::String(text) | Data::DateTimeIso(text) | Data::DurationIso(text) => {
            Some(CellValue::Text(text.clone()))
        }
        Data::Float(n) => Some(CellValue::Number(*n)),
        Data::Int(n) => Some(CellValue::Number(*n as f64)),
        Data::Bool(b) => Some(CellValue::Bool(*b)),
        // Serial day number, as spreadsheet exports without date formatting give it
        Data::DateTime(date) => Some(CellValue::Number(date.as_f64())),
        Data::Error(error) => Some(CellValue::Text(error.to_string())),
    }
}
