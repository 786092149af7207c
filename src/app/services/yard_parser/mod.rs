//! Yard position parser
//!
//! Turns spreadsheet rows describing container positions into canonical
//! [`Container`](crate::app::models::Container) records. Bad rows are skipped
//! and counted; only input that cannot be read as a table at all is an error.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Row iteration and result assembly
//! - [`column_mapping`] - Alias-based resolution of arbitrary headers to canonical fields
//! - [`location`] - Decoding of `BLOCK-BAY-ROW-TIER` and fixed-width location codes
//! - [`materializer`] - One or two container records per decoded row
//! - [`table`] - CSV/JSON text and workbooks to rows
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use yard_processor::app::models::RawRow;
//! use yard_processor::app::services::yard_parser::YardParser;
//!
//! let rows = vec![
//!     RawRow::new()
//!         .with("Số Cont", "MSKU1234565")
//!         .with("Vị trí", "A2-22-05-1"),
//! ];
//!
//! let result = YardParser::default().parse_rows(&rows);
//! assert_eq!(result.stats.created_containers, 1);
//! assert_eq!(result.containers.len(), 2); // 40ft: two bay slots
//! ```

pub mod column_mapping;
pub mod location;
pub mod materializer;
pub mod parser;
pub mod stats;
pub mod table;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_mapping::{ColumnMapping, Field, ResolvedRow};
pub use location::{DecodedLocation, LocationError, decode_location};
pub use parser::YardParser;
pub use stats::{ParseResult, ParseStats, SkippedRow};
