//! Command-line argument definitions for the yard processor
//!
//! This module defines the complete CLI interface using clap derive API.

use crate::app::services::yard_stats::IsoFilter;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

/// CLI arguments for the container yard processor
///
/// Reads container-yard position spreadsheets (CSV, JSON or Excel) and reports
/// container records, per-block occupancy and per-vessel counts.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "yard-processor",
    version,
    about = "Parse container-yard position spreadsheets and report block occupancy",
    long_about = "Reads container-yard position uploads in CSV, JSON or Excel form, decodes each row's \
                  location into block, bay, row and tier, expands 40ft containers into their two \
                  bay slots and reports per-block TEU statistics, per-vessel counts and searches. \
                  Parsed uploads can be stored as snapshots and reused by later commands."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to configuration file
    ///
    /// TOML configuration file with the yard layout and extra column aliases.
    /// If not specified, looks for <config dir>/yard-processor/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        global = true,
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Available subcommands for the yard processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse an upload and report containers and skipped rows
    Parse(ParseArgs),
    /// Per-block TEU statistics
    Stats(StatsArgs),
    /// Per-block, per-vessel container counts
    Vessels(VesselsArgs),
    /// Find containers by id fragment or exact location
    Search(SearchArgs),
}

/// Arguments for the parse command
#[derive(Debug, Clone, Parser)]
pub struct ParseArgs {
    /// Upload to parse (.csv, .json or .xlsx)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Store the parsed upload as a snapshot
    #[arg(long = "save", help = "Store the parse result in the snapshot store")]
    pub save: bool,

    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub format: OutputFormat,
}

/// Arguments for the stats command
#[derive(Debug, Clone, Parser)]
pub struct StatsArgs {
    /// Upload to analyse; the latest stored snapshot when omitted
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// ISO type filter
    #[arg(
        long = "iso",
        value_name = "TYPE",
        default_value = "all",
        help = "Only count containers of this ISO type (all, dry, reefer)"
    )]
    pub iso: IsoFilter,

    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub format: OutputFormat,
}

/// Arguments for the vessels command
#[derive(Debug, Clone, Parser)]
pub struct VesselsArgs {
    /// Upload to analyse; the latest stored snapshot when omitted
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub format: OutputFormat,
}

/// Arguments for the search command
#[derive(Debug, Clone, Parser)]
pub struct SearchArgs {
    /// Container id fragment or location (`A2-21-05-1` or `A221051`)
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Upload to search; the latest stored snapshot when omitted
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub format: OutputFormat,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Commands {
    /// Upload path named on the command line, if any
    pub fn input(&self) -> Option<&Path> {
        match self {
            Commands::Parse(args) => Some(args.input.as_path()),
            Commands::Stats(args) => args.input.as_deref(),
            Commands::Vessels(args) => args.input.as_deref(),
            Commands::Search(args) => args.input.as_deref(),
        }
    }
}

impl Args {
    /// Validate argument combinations and paths
    pub fn validate(&self) -> Result<()> {
        if let Some(input) = self.command.as_ref().and_then(Commands::input) {
            if !input.is_file() {
                return Err(Error::configuration(format!(
                    "Input file does not exist: {}",
                    input.display()
                )));
            }
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        if let Some(Commands::Search(args)) = &self.command {
            if args.query.trim().is_empty() {
                return Err(Error::data_validation("Search query cannot be empty"));
            }
        }

        Ok(())
    }

    /// Log level implied by `--quiet` and `-v`, if either was given
    pub fn log_level_override(&self) -> Option<&'static str> {
        if self.quiet {
            return Some("error");
        }
        match self.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_parse_command() {
        let args = parse(&["yard-processor", "parse", "yard.csv", "--save", "--format", "json"]);

        match args.command {
            Some(Commands::Parse(parse_args)) => {
                assert_eq!(parse_args.input, PathBuf::from("yard.csv"));
                assert!(parse_args.save);
                assert_eq!(parse_args.format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_stats_iso_filter() {
        let args = parse(&["yard-processor", "stats", "--iso", "reefer"]);

        match args.command {
            Some(Commands::Stats(stats_args)) => {
                assert_eq!(stats_args.iso, IsoFilter::Reefer);
                assert!(stats_args.input.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }

        assert!(Args::try_parse_from(["yard-processor", "stats", "--iso", "frozen"]).is_err());
    }

    #[test]
    fn test_search_query_before_optional_input() {
        let args = parse(&["yard-processor", "search", "A2-21-05-1", "yard.json"]);

        match args.command {
            Some(Commands::Search(search_args)) => {
                assert_eq!(search_args.query, "A2-21-05-1");
                assert_eq!(search_args.input, Some(PathBuf::from("yard.json")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = parse(&["yard-processor", "vessels", "-vv"]);
        assert_eq!(args.log_level_override(), Some("debug"));

        let args = parse(&["yard-processor", "-q", "vessels"]);
        assert_eq!(args.log_level_override(), Some("error"));

        let args = parse(&["yard-processor", "vessels"]);
        assert_eq!(args.log_level_override(), None);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["yard-processor", "-q", "-v", "vessels"]).is_err());
    }

    #[test]
    fn test_validate_paths() {
        let args = parse(&["yard-processor", "parse", "/nonexistent/yard.csv"]);
        assert!(args.validate().is_err());

        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "location").unwrap();
        let path = file.path().to_str().unwrap().to_string();
        let args = parse(&["yard-processor", "parse", &path]);
        assert!(args.validate().is_ok());

        let args = parse(&["yard-processor", "-c", "/nonexistent/config.toml", "vessels"]);
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_query() {
        let args = parse(&["yard-processor", "search", "  "]);
        assert!(args.validate().is_err());
    }
}
