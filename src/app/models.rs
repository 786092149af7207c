//! Core data structures for yard processing
//!
//! Defines the raw spreadsheet row representation, the canonical container
//! record produced by parsing, and the block layout supplied by the caller.

use crate::constants::{TEU_20FT, TEU_40FT, flow_values, status_values};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single spreadsheet cell value
///
/// Spreadsheet exports mix text and numeric cells, and whether a location
/// cell is textual matters to the location decoder, so the variant is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    /// Borrow the text of a textual cell
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(text) => write!(f, "{}", text),
            // Integral numbers print without a trailing ".0"
            CellValue::Number(n) if n.fract() == 0.0 && n.is_finite() => write!(f, "{}", *n as i64),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

/// One input row: header name to cell value, in the row's own key order
///
/// Key order is significant. When a row carries two headers that alias the
/// same field, the one appearing first wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    fields: Vec<(String, CellValue)>,
}

impl RawRow {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field append
    pub fn with(mut self, key: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.push(key, value);
        self
    }

    /// Append a field at the end of the row
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<CellValue>) {
        self.fields.push((key.into(), value.into()));
    }

    /// Iterate fields in row order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RawRow
where
    K: Into<String>,
    V: Into<CellValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// Physical container length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum ContainerSize {
    Twenty,
    Forty,
}

impl ContainerSize {
    /// Length in feet
    pub fn feet(self) -> u16 {
        match self {
            ContainerSize::Twenty => 20,
            ContainerSize::Forty => 40,
        }
    }

    /// Twenty-foot equivalent units occupied by one container of this size
    pub fn teu(self) -> usize {
        match self {
            ContainerSize::Twenty => TEU_20FT,
            ContainerSize::Forty => TEU_40FT,
        }
    }
}

impl From<ContainerSize> for u16 {
    fn from(size: ContainerSize) -> Self {
        size.feet()
    }
}

impl TryFrom<u16> for ContainerSize {
    type Error = String;

    fn try_from(feet: u16) -> std::result::Result<Self, Self::Error> {
        match feet {
            20 => Ok(ContainerSize::Twenty),
            40 => Ok(ContainerSize::Forty),
            other => Err(format!("unsupported container size: {}ft", other)),
        }
    }
}

/// Which half of a 40ft container a record represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartType {
    Start,
    End,
}

/// Full or empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CargoStatus {
    Full,
    Empty,
}

impl CargoStatus {
    /// Interpret a spreadsheet value; unknown spellings yield `None`
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_uppercase();
        if status_values::FULL.contains(&normalized.as_str()) {
            Some(CargoStatus::Full)
        } else if status_values::EMPTY.contains(&normalized.as_str()) {
            Some(CargoStatus::Empty)
        } else {
            None
        }
    }
}

/// Direction of a full container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Flow {
    Export,
    Import,
}

impl Flow {
    /// Interpret a spreadsheet value; unknown spellings yield `None`
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_uppercase();
        if flow_values::EXPORT.contains(&normalized.as_str()) {
            Some(Flow::Export)
        } else if flow_values::IMPORT.contains(&normalized.as_str()) {
            Some(Flow::Import)
        } else {
            None
        }
    }
}

/// One slot occupant, or one half of a 40ft occupant
///
/// The two records of a 40ft pair share every field except `bay` and
/// `part_type`. Aggregates count only the `Start` half.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    pub id: String,
    pub location: String,
    pub block: String,
    pub bay: i32,
    pub row: u32,
    pub tier: u32,
    pub size: ContainerSize,
    pub is_multi_bay: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_type: Option<PartType>,
    pub owner: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vessel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CargoStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flow: Option<Flow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iso: Option<String>,
}

impl Container {
    /// Whether this record takes part in aggregates (not the `End` half of a pair)
    pub fn is_counted(&self) -> bool {
        self.part_type != Some(PartType::End)
    }

    /// TEU weight of the physical container
    pub fn teu(&self) -> usize {
        self.size.teu()
    }
}

/// Category tag of a yard block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockGroup {
    /// General purpose stacking
    General,
    /// Blocks with reefer plugs
    Reefer,
    /// Blocks reserved for empties
    Empty,
}

impl BlockGroup {
    /// Group as shown in reports; empty-container blocks are listed as general
    pub fn presented(self) -> Self {
        match self {
            BlockGroup::Empty => BlockGroup::General,
            other => other,
        }
    }
}

impl fmt::Display for BlockGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BlockGroup::General => "general",
            BlockGroup::Reefer => "reefer",
            BlockGroup::Empty => "empty",
        };
        write!(f, "{}", name)
    }
}

/// Static layout of one yard block, owned by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockConfig {
    pub name: String,
    /// Capacity in TEU
    pub capacity: usize,
    pub group: BlockGroup,
    pub total_bays: u32,
    pub rows_per_bay: u32,
    pub tiers_per_bay: u32,
    #[serde(default)]
    pub is_default: bool,
}

impl BlockConfig {
    pub fn new(
        name: impl Into<String>,
        group: BlockGroup,
        total_bays: u32,
        rows_per_bay: u32,
        tiers_per_bay: u32,
        capacity: usize,
    ) -> Self {
        Self {
            name: name.into(),
            capacity,
            group,
            total_bays,
            rows_per_bay,
            tiers_per_bay,
            is_default: false,
        }
    }

    /// Mark the block as part of the built-in layout
    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    /// Check whether a bay/row/tier coordinate lies inside this block's grid
    pub fn contains_slot(&self, bay: i32, row: u32, tier: u32) -> bool {
        bay >= 1
            && bay as u32 <= self.total_bays
            && (1..=self.rows_per_bay).contains(&row)
            && (1..=self.tiers_per_bay).contains(&tier)
    }
}
