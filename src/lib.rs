//! Yard Processor Library
//!
//! A Rust library for turning container-yard position spreadsheets into a
//! canonical set of container records and derived occupancy statistics.
//!
//! This library provides tools for:
//! - Resolving loosely named spreadsheet columns into canonical fields
//! - Decoding yard location codes (`A2-22-05-1` or `A221051`) into block/bay/row/tier
//! - Materializing 20ft and 40ft (two-slot) container records
//! - Aggregating per-block TEU statistics with ISO type filtering
//! - Aggregating per-block, per-vessel occupancy
//! - Free-text container search
//! - Storing and reloading parsed yard snapshots

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod yard_parser;
        pub mod yard_stats;
    }
    pub mod adapters {
        pub mod filesystem;
        pub mod repository;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod report;
}

// Re-export commonly used types
pub use app::models::{BlockConfig, BlockGroup, CellValue, Container, ContainerSize, RawRow};
pub use app::services::yard_parser::{ParseResult, ParseStats, YardParser};
pub use app::services::yard_stats::{BlockStats, IsoFilter, VesselStatsData};
pub use config::Config;

/// Result type alias for the yard processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for yard processing operations
///
/// Individual rows that cannot be decoded are never reported through this
/// type; they are counted in [`ParseStats`] instead.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV decoding error
    #[error("CSV parsing error in '{source_name}': {message}")]
    CsvParsing {
        source_name: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Input could not be interpreted as a table of rows
    #[error("Input '{source_name}' is not tabular data: {message}")]
    InvalidTable {
        source_name: String,
        message: String,
    },

    /// JSON encoding or decoding error
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Snapshot store error
    #[error("Repository error: {message}")]
    Repository { message: String },

    /// Report rendering error
    #[error("Report error: {message}")]
    Report { message: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        source_name: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            source_name: source_name.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a not-tabular error
    pub fn invalid_table(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidTable {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Create a JSON error with context
    pub fn json(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a repository error
    pub fn repository(message: impl Into<String>) -> Self {
        Self::Repository {
            message: message.into(),
        }
    }

    /// Create a report rendering error
    pub fn report(message: impl Into<String>) -> Self {
        Self::Report {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            source_name: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json {
            message: "JSON processing failed".to_string(),
            source: error,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Self::Configuration {
            message: format!("Invalid TOML: {}", error),
        }
    }
}
