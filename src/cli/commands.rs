//! Command implementations for the yard processor CLI
//!
//! This module contains the command execution logic: logging setup,
//! configuration loading, choosing between a fresh upload and the latest
//! stored snapshot, and handing results to the report renderers.

use crate::app::adapters::filesystem::read_rows;
use crate::app::adapters::repository::{JsonFileRepository, YardRepository, YardSnapshot};
use crate::app::models::{BlockConfig, Container};
use crate::app::services::yard_parser::{ParseResult, YardParser};
use crate::app::services::yard_stats::{
    calculate_block_stats, calculate_vessel_stats, find_out_of_layout, search_containers,
    yard_totals,
};
use crate::cli::args::{Args, Commands, ParseArgs, SearchArgs, StatsArgs, VesselsArgs};
use crate::cli::report;
use crate::config::Config;
use anyhow::{Context, Result, bail};
use std::path::Path;
use tracing::{debug, info, warn};

/// Main command runner for the yard processor
///
/// 1. Validate arguments and load configuration
/// 2. Set up logging
/// 3. Run the selected command and print its report to stdout
pub async fn run(args: Args) -> Result<()> {
    args.validate()?;

    let config = load_configuration(&args)?;
    setup_logging(&args, &config)?;

    info!("Starting yard processor");
    debug!("Command line arguments: {:?}", args);
    log_configuration_source(&config);
    debug!("Loaded configuration: {:?}", config);

    let Some(command) = args.command else {
        bail!("No command given");
    };

    match command {
        Commands::Parse(parse_args) => run_parse(&config, parse_args).await,
        Commands::Stats(stats_args) => run_stats(&config, stats_args).await,
        Commands::Vessels(vessels_args) => run_vessels(&config, vessels_args).await,
        Commands::Search(search_args) => run_search(&config, search_args).await,
    }
}

/// Set up tracing output on stderr
///
/// `RUST_LOG` wins when set; otherwise `-q`/`-v` and then the configured level
/// decide the filter.
fn setup_logging(args: &Args, config: &Config) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args
        .log_level_override()
        .unwrap_or(config.logging.level.as_str());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("yard_processor={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .context("Failed to initialise logging")?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (defaults -> file -> env)
fn load_configuration(args: &Args) -> Result<Config> {
    let config = Config::load_layered(args.config_file.as_deref())
        .context("Failed to load configuration")?;
    Ok(config)
}

/// Report where the configuration came from
///
/// Loading happens before the subscriber exists, so the source is recorded on
/// the config and logged here.
fn log_configuration_source(config: &Config) {
    match &config.source.file {
        Some(path) => info!("Using config file {}", path.display()),
        None => debug!("No config file found, using built-in defaults"),
    }
    for key in &config.source.env_overrides {
        debug!("Configuration overridden by {}", key);
    }
}

fn open_repository(config: &Config) -> Result<JsonFileRepository> {
    let store_path = config.store_path()?;
    let repository = JsonFileRepository::open(&store_path)
        .with_context(|| format!("Failed to open snapshot store {}", store_path.display()))?;
    Ok(repository)
}

/// Read and parse one upload
fn parse_upload(config: &Config, input: &Path) -> Result<ParseResult> {
    let rows = read_rows(input).with_context(|| format!("Failed to read {}", input.display()))?;
    let parser = YardParser::new(config.column_mapping());
    Ok(parser.parse_rows(&rows))
}

/// Containers from the given upload, or from the latest stored snapshot
fn load_containers(config: &Config, input: Option<&Path>) -> Result<Vec<Container>> {
    if let Some(input) = input {
        return Ok(parse_upload(config, input)?.containers);
    }

    let repository = open_repository(config)?;
    match repository.load_latest()? {
        Some(snapshot) => {
            info!(
                "Using stored snapshot '{}' uploaded at {}",
                snapshot.filename, snapshot.uploaded_at
            );
            Ok(snapshot.containers)
        }
        None => bail!(
            "No stored snapshot in {}; run `yard-processor parse <INPUT> --save` first",
            repository.store_path().display()
        ),
    }
}

/// Log records that do not fit the configured layout
fn warn_out_of_layout(containers: &[Container], layout: &[BlockConfig]) {
    let issues = find_out_of_layout(containers, layout);
    if issues.is_empty() {
        return;
    }

    warn!(
        "{} container records fall outside the configured layout",
        issues.len()
    );
    for issue in &issues {
        debug!(
            "{} at {}/{}/{}/{}: {:?}",
            issue.id, issue.block, issue.bay, issue.row, issue.tier, issue.issue
        );
    }
}

async fn run_parse(config: &Config, args: ParseArgs) -> Result<()> {
    let result = parse_upload(config, &args.input)?;
    warn_out_of_layout(&result.containers, &config.layout.blocks);

    let filename = args
        .input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.input.display().to_string());

    let output = report::parse_report(&filename, &result, args.format)?;

    if args.save {
        let repository = open_repository(config)?;
        repository
            .save(YardSnapshot::from_parse(filename.as_str(), result))
            .context("Failed to save snapshot")?;
        info!("Snapshot saved to {}", repository.store_path().display());
    }

    println!("{}", output);
    Ok(())
}

async fn run_stats(config: &Config, args: StatsArgs) -> Result<()> {
    let containers = load_containers(config, args.input.as_deref())?;
    warn_out_of_layout(&containers, &config.layout.blocks);

    let stats = calculate_block_stats(&containers, args.iso, &config.layout.blocks);
    let totals = yard_totals(&stats);

    println!("{}", report::stats_report(args.iso, &stats, &totals, args.format)?);
    Ok(())
}

async fn run_vessels(config: &Config, args: VesselsArgs) -> Result<()> {
    let containers = load_containers(config, args.input.as_deref())?;
    let data = calculate_vessel_stats(&containers, &config.layout.blocks);

    println!("{}", report::vessels_report(&data, args.format)?);
    Ok(())
}

async fn run_search(config: &Config, args: SearchArgs) -> Result<()> {
    let containers = load_containers(config, args.input.as_deref())?;
    let matches = search_containers(&args.query, &containers);
    debug!("Search '{}' matched {} containers", args.query, matches.len());

    println!("{}", report::search_report(&args.query, &matches, args.format)?);
    Ok(())
}
