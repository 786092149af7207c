use clap::Parser;
use std::process;
use yard_processor::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        tokio::select! {
            result = commands::run(args) => result,
            signal = tokio::signal::ctrl_c() => {
                if let Err(e) = signal {
                    eprintln!("Failed to listen for CTRL+C: {}", e);
                }
                eprintln!("\nReceived CTRL+C, shutting down...");
                Err(yard_processor::Error::processing_interrupted(
                    "Processing interrupted by user",
                )
                .into())
            }
        }
    });

    if let Err(error) = result {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Yard Processor - Container Yard Occupancy");
    println!("=========================================");
    println!();
    println!("Parse container-yard position spreadsheets (CSV, JSON or Excel) into");
    println!("container records and report per-block TEU occupancy and per-vessel counts.");
    println!();
    println!("USAGE:");
    println!("    yard-processor [OPTIONS] <COMMAND>");
    println!();
    println!("COMMANDS:");
    println!("    parse       Parse an upload and report containers and skipped rows");
    println!("    stats       Per-block TEU statistics");
    println!("    vessels     Per-block, per-vessel container counts");
    println!("    search      Find containers by id fragment or exact location");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <FILE>    Path to configuration file (TOML format)");
    println!("    -v, --verbose          Increase logging verbosity");
    println!("    -q, --quiet            Suppress log output except errors");
    println!("    -h, --help             Show help information");
    println!("    -V, --version          Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Parse an upload and store it as the current yard snapshot:");
    println!("    yard-processor parse yard.csv --save");
    println!();
    println!("    # Reefer occupancy of the stored snapshot as JSON:");
    println!("    yard-processor stats --iso reefer --format json");
    println!();
    println!("    # Find a slot in either location spelling:");
    println!("    yard-processor search A2-21-05-1");
    println!();
    println!("For detailed help on any command, use:");
    println!("    yard-processor <COMMAND> --help");
}
