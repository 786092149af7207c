//! Reading yard uploads from disk
//!
//! The input format is chosen by file extension. Decoding itself is shared
//! with the in-memory entry points on [`YardParser`](crate::YardParser).

use crate::app::models::RawRow;
use crate::app::services::yard_parser::table::{
    rows_from_csv_reader, rows_from_json_str, rows_from_workbook_bytes,
};
use crate::{Error, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Supported upload formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Json,
    /// Excel workbook, `.xlsx` or legacy `.xls`; only the first sheet is read
    Xlsx,
}

impl InputFormat {
    /// Detect the format from a path's extension (case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "csv" => Some(InputFormat::Csv),
            "json" => Some(InputFormat::Json),
            "xlsx" | "xls" => Some(InputFormat::Xlsx),
            _ => None,
        }
    }
}

/// Read every row of a CSV, JSON or workbook upload
///
/// Fails as a whole when the file cannot be read or decoded; no partial
/// row list is returned.
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>> {
    let source_name = path.display().to_string();

    let format = InputFormat::from_path(path).ok_or_else(|| {
        Error::invalid_table(&source_name, "unsupported file extension (expected .csv, .json or .xlsx)")
    })?;

    let rows = match format {
        InputFormat::Csv => {
            let file = File::open(path)
                .map_err(|e| Error::io(format!("Failed to open {}", source_name), e))?;
            rows_from_csv_reader(&source_name, BufReader::new(file))?
        }
        InputFormat::Json => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| Error::io(format!("Failed to read {}", source_name), e))?;
            rows_from_json_str(&source_name, &text)?
        }
        InputFormat::Xlsx => {
            let bytes = std::fs::read(path)
                .map_err(|e| Error::io(format!("Failed to read {}", source_name), e))?;
            rows_from_workbook_bytes(&source_name, bytes)?
        }
    };

    debug!("Read {} rows from {} ({:?})", rows.len(), source_name, format);
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(content).unwrap();
        path
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(InputFormat::from_path(Path::new("yard.csv")), Some(InputFormat::Csv));
        assert_eq!(InputFormat::from_path(Path::new("YARD.JSON")), Some(InputFormat::Json));
        assert_eq!(InputFormat::from_path(Path::new("yard.xlsx")), Some(InputFormat::Xlsx));
        assert_eq!(InputFormat::from_path(Path::new("Yard.XLS")), Some(InputFormat::Xlsx));
        assert_eq!(InputFormat::from_path(Path::new("yard.ods")), None);
        assert_eq!(InputFormat::from_path(Path::new("yard")), None);
    }

    #[test]
    fn test_read_csv_rows() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "yard.csv",
            "Số Cont,Vị trí\nMSKU1234565,A2-22-05-1\nTGHU7654321,A221031\n".as_bytes(),
        );

        let rows = read_rows(&path).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_read_json_rows() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "yard.json", br#"[{"location": "A2-21-05-1"}, {}]"#);

        let rows = read_rows(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows[1].is_empty());
    }

    #[test]
    fn test_unsupported_extension_is_not_tabular() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "yard.txt", b"location\nA221051\n");

        assert!(matches!(read_rows(&path), Err(Error::InvalidTable { .. })));
    }

    #[test]
    fn test_corrupt_workbook_is_not_tabular() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "yard.xlsx", b"PK\x03\x04");

        assert!(matches!(read_rows(&path), Err(Error::InvalidTable { .. })));
    }

    #[test]
    fn test_missing_workbook_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.xlsx");

        assert!(matches!(read_rows(&path), Err(Error::Io { .. })));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.csv");

        assert!(matches!(read_rows(&path), Err(Error::Io { .. })));
    }
}
