//! Column mapping for loosely named spreadsheet headers
//!
//! Each semantic field has an ordered alias list. A row is resolved by
//! scanning the row's own keys in order and returning the first key whose
//! trimmed, lower-cased form is one of the field's aliases. Row order wins
//! over alias order: with both "Location" and "Vị trí" present, whichever
//! header comes first in the row is used.

use crate::app::models::{CellValue, RawRow};
use crate::constants::columns;
use std::collections::HashMap;
use std::fmt;
use tracing::trace;

/// Canonical semantic fields read from a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Location,
    Owner,
    ContainerId,
    Vessel,
    Status,
    Flow,
    Iso,
}

impl Field {
    /// All fields, in resolution order
    pub const ALL: [Field; 7] = [
        Field::Location,
        Field::Owner,
        Field::ContainerId,
        Field::Vessel,
        Field::Status,
        Field::Flow,
        Field::Iso,
    ];

    /// Built-in aliases for this field
    pub fn standard_aliases(self) -> &'static [&'static str] {
        match self {
            Field::Location => columns::LOCATION,
            Field::Owner => columns::OWNER,
            Field::ContainerId => columns::CONTAINER_ID,
            Field::Vessel => columns::VESSEL,
            Field::Status => columns::STATUS,
            Field::Flow => columns::FLOW,
            Field::Iso => columns::ISO,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Location => "location",
            Field::Owner => "owner",
            Field::ContainerId => "container",
            Field::Vessel => "vessel",
            Field::Status => "status",
            Field::Flow => "flow",
            Field::Iso => "iso",
        };
        write!(f, "{}", name)
    }
}

/// Normalize a header name or alias for comparison
pub fn normalize_header(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Return the value of the first row key (in row order) that matches an alias
///
/// `aliases` must already be normalized with [`normalize_header`]. Only keys
/// are normalized; the value is returned untouched.
pub fn resolve_column<'a, S: AsRef<str>>(row: &'a RawRow, aliases: &[S]) -> Option<&'a CellValue> {
    row.iter()
        .find(|(key, _)| {
            let key = normalize_header(key);
            aliases.iter().any(|alias| alias.as_ref() == key)
        })
        .map(|(_, value)| value)
}

/// Alias table for all semantic fields
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    aliases: HashMap<Field, Vec<String>>,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self::standard()
    }
}

impl ColumnMapping {
    /// Mapping with only the built-in aliases
    pub fn standard() -> Self {
        let aliases = Field::ALL
            .iter()
            .map(|&field| {
                let list = field
                    .standard_aliases()
                    .iter()
                    .map(|alias| normalize_header(alias))
                    .collect();
                (field, list)
            })
            .collect();

        Self { aliases }
    }

    /// Append extra aliases for a field after the built-in ones
    pub fn with_extra_aliases<I, S>(mut self, field: Field, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let list = self.aliases.entry(field).or_default();
        for alias in extra {
            let alias = normalize_header(alias.as_ref());
            if !alias.is_empty() && !list.contains(&alias) {
                list.push(alias);
            }
        }
        self
    }

    /// Aliases accepted for a field
    pub fn aliases(&self, field: Field) -> &[String] {
        self.aliases.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Resolve one field of a row
    pub fn resolve<'a>(&self, row: &'a RawRow, field: Field) -> Option<&'a CellValue> {
        let value = resolve_column(row, self.aliases(field));
        if value.is_none() {
            trace!("No column for field '{}'", field);
        }
        value
    }

    /// Resolve every semantic field of a row
    pub fn resolve_row<'a>(&self, row: &'a RawRow) -> ResolvedRow<'a> {
        ResolvedRow {
            location: self.resolve(row, Field::Location),
            owner: self.resolve(row, Field::Owner),
            container_id: self.resolve(row, Field::ContainerId),
            vessel: self.resolve(row, Field::Vessel),
            status: self.resolve(row, Field::Status),
            flow: self.resolve(row, Field::Flow),
            iso: self.resolve(row, Field::Iso),
        }
    }
}

/// A row's cell values keyed by semantic field
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolvedRow<'a> {
    pub location: Option<&'a CellValue>,
    pub owner: Option<&'a CellValue>,
    pub container_id: Option<&'a CellValue>,
    pub vessel: Option<&'a CellValue>,
    pub status: Option<&'a CellValue>,
    pub flow: Option<&'a CellValue>,
    pub iso: Option<&'a CellValue>,
}

/// Cell value as trimmed text, or `None` if blank
pub fn cell_text(value: Option<&CellValue>) -> Option<String> {
    value
        .map(|v| v.to_string().trim().to_string())
        .filter(|s| !s.is_empty())
}
