//! Configuration management and validation.
//!
//! Provides the yard layout, extra spreadsheet column aliases, the snapshot
//! store location and the log level. Values are layered: built-in defaults,
//! then a TOML file, then environment variables, then command-line flags.
//!
//! ```toml
//! [[layout.blocks]]
//! name = "A1"
//! group = "general"
//! capacity = 900
//! totalBays = 30
//! rowsPerBay = 6
//! tiersPerBay = 5
//!
//! [columns]
//! location = ["slot"]
//!
//! [store]
//! path = "/var/lib/yard/snapshots.json"
//!
//! [logging]
//! level = "info"
//! ```

use crate::app::models::BlockConfig;
use crate::app::services::yard_parser::{ColumnMapping, Field};
use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_LOG_LEVEL, ENV_LOG_LEVEL, ENV_STORE_PATH, LOG_LEVELS,
    SNAPSHOT_FILE_NAME, default_layout,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Yard layout section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Blocks in presentation order
    pub blocks: Vec<BlockConfig>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            blocks: default_layout(),
        }
    }
}

/// Extra header aliases, tried after the built-in ones
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnsConfig {
    pub location: Vec<String>,
    pub owner: Vec<String>,
    pub container_id: Vec<String>,
    pub vessel: Vec<String>,
    pub status: Vec<String>,
    pub flow: Vec<String>,
    pub iso: Vec<String>,
}

impl ColumnsConfig {
    fn extra(&self, field: Field) -> &[String] {
        match field {
            Field::Location => &self.location,
            Field::Owner => &self.owner,
            Field::ContainerId => &self.container_id,
            Field::Vessel => &self.vessel,
            Field::Status => &self.status,
            Field::Flow => &self.flow,
            Field::Iso => &self.iso,
        }
    }
}

/// Snapshot store section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Snapshot file; defaults to the user data directory
    pub path: Option<PathBuf>,
}

/// Logging section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Where a loaded configuration's values came from
///
/// Recorded during loading so the caller can report it once logging is up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigSource {
    /// Config file that was read, if any
    pub file: Option<PathBuf>,
    /// Environment variables that replaced configured values
    pub env_overrides: Vec<&'static str>,
}

/// Global configuration for the yard processor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub layout: LayoutConfig,
    pub columns: ColumnsConfig,
    pub store: StoreConfig,
    pub logging: LoggingConfig,
    #[serde(skip)]
    pub source: ConfigSource,
}

impl Config {
    /// Default configuration file location, if the platform has a config directory
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read config {}", path.display()), e))?;
        Self::from_toml_str(&text).map_err(|e| match e {
            Error::Configuration { message } => {
                Error::configuration(format!("{}: {}", path.display(), message))
            }
            other => other,
        })
    }

    /// Load defaults, then a config file, then environment overrides
    ///
    /// An explicit `config_file` must exist. Without one, the default config
    /// path is used when present. The result is validated.
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let file = match config_file {
            Some(path) if !path.exists() => {
                return Err(Error::configuration(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            Some(path) => Some(path.to_path_buf()),
            None => Self::default_config_path().filter(|p| p.exists()),
        };

        let mut config = match &file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.source.file = file;

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply `YARD_STORE_PATH` and `YARD_LOG_LEVEL` from the given lookup
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_STORE_PATH).filter(|v| !v.trim().is_empty()) {
            self.source.env_overrides.push(ENV_STORE_PATH);
            self.store.path = Some(PathBuf::from(path));
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL).filter(|v| !v.trim().is_empty()) {
            self.source.env_overrides.push(ENV_LOG_LEVEL);
            self.logging.level = level.trim().to_lowercase();
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let blocks = &self.layout.blocks;
        if blocks.is_empty() {
            return Err(Error::configuration("layout must define at least one block"));
        }

        let mut seen = HashSet::new();
        for block in blocks {
            if block.name.trim().is_empty() {
                return Err(Error::configuration("block name must not be empty"));
            }
            if !seen.insert(block.name.as_str()) {
                return Err(Error::configuration(format!(
                    "duplicate block name '{}'",
                    block.name
                )));
            }
            if block.total_bays == 0 || block.rows_per_bay == 0 || block.tiers_per_bay == 0 {
                return Err(Error::configuration(format!(
                    "block '{}' must have positive bays, rows and tiers",
                    block.name
                )));
            }
            if block.capacity == 0 {
                return Err(Error::configuration(format!(
                    "block '{}' must have a positive capacity",
                    block.name
                )));
            }
        }

        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(Error::configuration(format!(
                "unknown log level '{}' (expected one of: {})",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    /// Snapshot file to use
    pub fn store_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.store.path {
            return Ok(path.clone());
        }

        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR_NAME).join(SNAPSHOT_FILE_NAME))
            .ok_or_else(|| {
                Error::configuration("no data directory available; set [store] path")
            })
    }

    /// Built-in column aliases extended with the configured extras
    pub fn column_mapping(&self) -> ColumnMapping {
        Field::ALL
            .iter()
            .fold(ColumnMapping::standard(), |mapping, &field| {
                mapping.with_extra_aliases(field, self.columns.extra(field).iter())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::{BlockGroup, RawRow};
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert!(config.layout.blocks.iter().all(|b| b.is_default));
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_toml_layout_replaces_default() {
        let config = Config::from_toml_str(
            r#"
            [[layout.blocks]]
            name = "Q1"
            group = "reefer"
            capacity = 120
            totalBays = 10
            rowsPerBay = 4
            tiersPerBay = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.layout.blocks.len(), 1);
        let block = &config.layout.blocks[0];
        assert_eq!(block.name, "Q1");
        assert_eq!(block.group, BlockGroup::Reefer);
        assert!(!block.is_default);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = Config::from_toml_str("[logging]\nlevel = \"debug\"\n").unwrap();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.layout, LayoutConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_configuration_error() {
        let result = Config::from_toml_str("[layout\nblocks = 3");
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_validate_rejects_bad_layouts() {
        let mut empty = Config::default();
        empty.layout.blocks.clear();
        assert!(empty.validate().is_err());

        let mut duplicate = Config::default();
        duplicate.layout.blocks.push(BlockConfig::new("A1", BlockGroup::General, 1, 1, 1, 1));
        assert!(duplicate.validate().is_err());

        let mut zero_rows = Config::default();
        zero_rows.layout.blocks[0].rows_per_bay = 0;
        assert!(zero_rows.validate().is_err());

        let mut zero_capacity = Config::default();
        zero_capacity.layout.blocks[0].capacity = 0;
        assert!(zero_capacity.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_log_level() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            (ENV_STORE_PATH, "/tmp/yard/snapshots.json"),
            (ENV_LOG_LEVEL, " INFO "),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_env_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(
            config.store_path().unwrap(),
            PathBuf::from("/tmp/yard/snapshots.json")
        );
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.source.env_overrides, vec![ENV_STORE_PATH, ENV_LOG_LEVEL]);
    }

    #[test]
    fn test_blank_env_values_are_ignored() {
        let mut config = Config::default();
        config.apply_env_overrides(|_| Some("  ".to_string()));

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_missing_explicit_config_file_is_error() {
        let result = Config::load_layered(Some(Path::new("/nonexistent/yard/config.toml")));
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_loaded_config_records_its_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlevel = \"info\"").unwrap();

        let config = Config::load_layered(Some(file.path())).unwrap();
        assert_eq!(config.source.file.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_parsed_config_has_no_source() {
        let config = Config::from_toml_str("[logging]\nlevel = \"debug\"\n").unwrap();
        assert_eq!(config.source, ConfigSource::default());
    }

    #[test]
    fn test_extra_column_aliases_are_used() {
        let config = Config::from_toml_str("[columns]\nlocation = [\"Slot\"]\n").unwrap();
        let mapping = config.column_mapping();

        let row = RawRow::new().with("slot", "A2-21-05-1");
        assert!(mapping.resolve(&row, Field::Location).is_some());
    }
}
