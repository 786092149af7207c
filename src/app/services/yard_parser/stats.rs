//! Parsing statistics and result structures
//!
//! This module provides types for tracking how many rows were read, how many
//! physical containers were created and which rows were skipped and why.

use super::location::LocationError;
use crate::app::models::Container;
use serde::{Deserialize, Serialize};

/// Parsing result with containers, statistics and vessel names
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseResult {
    /// Container records; a 40ft container contributes two
    pub containers: Vec<Container>,

    /// Row-level statistics
    pub stats: ParseStats,

    /// Distinct vessel names, ascending
    pub vessels: Vec<String>,
}

impl ParseResult {
    /// Records that stand for a whole physical container (no `End` halves)
    pub fn physical_containers(&self) -> impl Iterator<Item = &Container> {
        self.containers.iter().filter(|c| c.is_counted())
    }
}

/// A row that produced no container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedRow {
    /// 1-based position in the input
    pub row_number: usize,
    /// Reason code (`missing-location`, `unrecognized-format`, `invalid-format`)
    pub reason: String,
    /// Human-readable detail
    pub detail: String,
}

/// Parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseStats {
    /// Rows encountered
    pub total_rows: usize,

    /// Physical containers created (one per decoded row)
    pub created_containers: usize,

    /// Rows skipped because their location could not be decoded
    pub skipped_rows: usize,

    /// Per-row skip details for debugging
    #[serde(default)]
    pub skipped: Vec<SkippedRow>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a skipped row
    pub fn record_skip(&mut self, row_number: usize, error: &LocationError) {
        self.skipped_rows += 1;
        self.skipped.push(SkippedRow {
            row_number,
            reason: error.code().to_string(),
            detail: error.to_string(),
        });
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            (self.created_containers as f64 / self.total_rows as f64) * 100.0
        }
    }

    /// Get summary of parsing statistics
    pub fn summary(&self) -> String {
        format!(
            "{} rows -> {} containers ({:.1}% success) | {} skipped",
            self.total_rows,
            self.created_containers,
            self.success_rate(),
            self.skipped_rows
        )
    }
}
