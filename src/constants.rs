//! Application constants for the yard processor
//!
//! This module contains the column alias tables, value vocabularies,
//! sentinel values and the default yard layout used throughout the crate.

use crate::app::models::{BlockConfig, BlockGroup};

// =============================================================================
// Column Aliases
// =============================================================================

/// Accepted header names per semantic field, already lower-cased and trimmed.
///
/// Spreadsheets exported by different terminal operators label the same
/// column in Vietnamese or English, so every semantic field has a list.
pub mod columns {
    pub const LOCATION: &[&str] = &["vị trí trên bãi", "vị trí", "location"];
    pub const OWNER: &[&str] = &["hãng khai thác", "chủ hàng", "owner", "operator"];
    pub const CONTAINER_ID: &[&str] = &["số cont", "container", "container number"];
    pub const VESSEL: &[&str] = &["tên tàu", "vessel"];
    pub const STATUS: &[&str] = &["trạng thái", "status", "full/empty", "f/e"];
    pub const FLOW: &[&str] = &["hướng", "xuất/nhập", "flow", "category", "import/export"];
    pub const ISO: &[&str] = &["mã iso", "iso", "iso code", "iso type", "size/type"];
}

// =============================================================================
// Container Defaults
// =============================================================================

/// Owner recorded when the row has no owner/operator column
pub const UNKNOWN_OWNER: &str = "Unknown";

/// Prefix for synthesized ids of rows without a container number
pub const PLACEHOLDER_ID_PREFIX: &str = "UNKNOWN";

/// Minimum length of a separator-free location code (block + 2 bay + 2 row + 1 tier)
pub const MIN_FIXED_WIDTH_LOCATION_LEN: usize = 6;

/// Separator of the hyphenated location format
pub const LOCATION_SEPARATOR: char = '-';

// =============================================================================
// Value Vocabularies
// =============================================================================

/// Upper-cased spellings accepted for the full/empty column
pub mod status_values {
    pub const FULL: &[&str] = &["FULL", "F", "FCL", "HÀNG"];
    pub const EMPTY: &[&str] = &["EMPTY", "E", "MT", "MTY", "RỖNG"];
}

/// Upper-cased spellings accepted for the import/export column
pub mod flow_values {
    pub const EXPORT: &[&str] = &["EXPORT", "EXP", "X", "XUẤT"];
    pub const IMPORT: &[&str] = &["IMPORT", "IMP", "I", "NHẬP"];
}

/// ISO 6346 type-group letters (third character of the size/type code)
pub mod iso_types {
    /// General purpose, platform, tank, ventilated and bulk groups
    pub const DRY_GROUP_CODES: &[char] = &['G', 'P', 'T', 'L', 'U'];

    /// Refrigerated group
    pub const REEFER_GROUP_CODE: char = 'R';

    /// Position of the type-group letter within the code
    pub const GROUP_CODE_INDEX: usize = 2;
}

// =============================================================================
// TEU Weights
// =============================================================================

/// TEU weight of a 20ft container
pub const TEU_20FT: usize = 1;

/// TEU weight of a 40ft container
pub const TEU_40FT: usize = 2;

// =============================================================================
// File and Directory Constants
// =============================================================================

/// Directory name under the user config/data directories
pub const APP_DIR_NAME: &str = "yard-processor";

/// Default configuration filename
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default snapshot store filename
pub const SNAPSHOT_FILE_NAME: &str = "snapshots.json";

/// Environment variable overriding the snapshot store path
pub const ENV_STORE_PATH: &str = "YARD_STORE_PATH";

/// Environment variable overriding the log level
pub const ENV_LOG_LEVEL: &str = "YARD_LOG_LEVEL";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Accepted log levels
pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Capacity of the broadcast channel carrying store change notifications
pub const CHANGE_CHANNEL_CAPACITY: usize = 16;

// =============================================================================
// Default Yard Layout
// =============================================================================

/// Built-in layout used when no configuration supplies one
pub fn default_layout() -> Vec<BlockConfig> {
    vec![
        BlockConfig::new("A1", BlockGroup::General, 30, 6, 5, 900),
        BlockConfig::new("A2", BlockGroup::General, 30, 6, 5, 900),
        BlockConfig::new("B1", BlockGroup::General, 20, 6, 4, 480),
        BlockConfig::new("R1", BlockGroup::Reefer, 10, 6, 4, 240),
        BlockConfig::new("E1", BlockGroup::Empty, 30, 8, 6, 1440),
    ]
    .into_iter()
    .map(BlockConfig::as_default)
    .collect()
}
