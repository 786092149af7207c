//! Yard location decoding
//!
//! Two spellings of the same slot are accepted:
//! - hyphenated `BLOCK-BAY-ROW-TIER`, e.g. `A2-22-05-1`
//! - fixed width with no separators, read from the right: 1 char tier,
//!   2 chars row, 2 chars bay, the rest is the block, e.g. `A221051`
//!
//! Bay is not bounds-checked here; only the layout knows how many bays a
//! block has (see `yard_stats::layout_check`).

use crate::app::models::CellValue;
use crate::constants::{LOCATION_SEPARATOR, MIN_FIXED_WIDTH_LOCATION_LEN};
use serde::{Deserialize, Serialize};

/// Why a row's location could not be decoded
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    /// Location cell absent, not text, or blank
    #[error("missing location")]
    MissingLocation,

    /// Neither four hyphenated segments nor long enough for fixed width
    #[error("unrecognized location format '{location}'")]
    UnrecognizedFormat { location: String },

    /// Recognized shape but a segment is empty, non-numeric or out of range
    #[error("invalid location '{location}': {reason}")]
    InvalidFormat { location: String, reason: String },
}

impl LocationError {
    /// Short machine-readable reason code
    pub fn code(&self) -> &'static str {
        match self {
            LocationError::MissingLocation => "missing-location",
            LocationError::UnrecognizedFormat { .. } => "unrecognized-format",
            LocationError::InvalidFormat { .. } => "invalid-format",
        }
    }

    fn invalid(location: &str, reason: impl Into<String>) -> Self {
        LocationError::InvalidFormat {
            location: location.to_string(),
            reason: reason.into(),
        }
    }
}

/// A validated slot coordinate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedLocation {
    /// Location text with all whitespace removed
    pub normalized: String,
    pub block: String,
    pub bay: i32,
    pub row: u32,
    pub tier: u32,
}

/// Strip surrounding and embedded whitespace
pub fn normalize_location(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Decode a resolved location cell
pub fn decode_location(value: Option<&CellValue>) -> Result<DecodedLocation, LocationError> {
    let text = value
        .and_then(CellValue::as_text)
        .ok_or(LocationError::MissingLocation)?;
    decode_location_str(text)
}

/// Decode a location string
pub fn decode_location_str(raw: &str) -> Result<DecodedLocation, LocationError> {
    let normalized = normalize_location(raw);
    if normalized.is_empty() {
        return Err(LocationError::MissingLocation);
    }

    let (block, bay_text, row_text, tier_text) = split_segments(&normalized)?;

    if block.is_empty() {
        return Err(LocationError::invalid(&normalized, "block segment is empty"));
    }

    let bay = parse_coordinate(&normalized, "bay", &bay_text)?;
    let row = parse_coordinate(&normalized, "row", &row_text)?;
    let tier = parse_coordinate(&normalized, "tier", &tier_text)?;

    if row < 1 {
        return Err(LocationError::invalid(&normalized, "row must be at least 1"));
    }
    if tier < 1 {
        return Err(LocationError::invalid(&normalized, "tier must be at least 1"));
    }

    Ok(DecodedLocation {
        block,
        bay,
        row: row as u32,
        tier: tier as u32,
        normalized,
    })
}

/// Split into (block, bay, row, tier) text, hyphenated form first
fn split_segments(
    normalized: &str,
) -> Result<(String, String, String, String), LocationError> {
    let parts: Vec<&str> = normalized.split(LOCATION_SEPARATOR).collect();
    if let [block, bay, row, tier] = parts.as_slice() {
        return Ok((
            block.to_string(),
            bay.to_string(),
            row.to_string(),
            tier.to_string(),
        ));
    }

    let chars: Vec<char> = normalized.chars().collect();
    let len = chars.len();
    if len < MIN_FIXED_WIDTH_LOCATION_LEN {
        return Err(LocationError::UnrecognizedFormat {
            location: normalized.to_string(),
        });
    }

    let text = |range: std::ops::Range<usize>| chars[range].iter().collect::<String>();
    Ok((
        text(0..len - 5),
        text(len - 5..len - 3),
        text(len - 3..len - 1),
        text(len - 1..len),
    ))
}

/// Parse a base-10 coordinate made only of ASCII digits
fn parse_coordinate(location: &str, name: &str, text: &str) -> Result<i32, LocationError> {
    if text.is_empty() {
        return Err(LocationError::invalid(
            location,
            format!("{} segment is empty", name),
        ));
    }
    if !text.chars().all(|c| c.is_ascii_digit()) {
        return Err(LocationError::invalid(
            location,
            format!("{} '{}' is not a number", name, text),
        ));
    }

    text.parse::<i32>()
        .map_err(|e| LocationError::invalid(location, format!("{} '{}': {}", name, text, e)))
}
