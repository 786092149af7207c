//! Report rendering for CLI output
//!
//! Every report is rendered to a string so the command runner decides where it
//! goes. JSON reports use the same camelCase field names as stored snapshots.

use crate::app::services::yard_parser::ParseResult;
use crate::app::services::yard_stats::{BlockStats, IsoFilter, VesselStatsData, YardTotals};
use crate::cli::args::OutputFormat;
use crate::{Error, Result};
use colored::*;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt::{self, Write};

/// Maximum skipped rows listed individually in the human parse report
const MAX_SKIPPED_SHOWN: usize = 10;

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| Error::json("Failed to encode report", e))
}

/// Run a human renderer into a fresh string
fn render<F>(name: &str, write_report: F) -> Result<String>
where
    F: FnOnce(&mut String) -> fmt::Result,
{
    let mut out = String::new();
    write_report(&mut out)
        .map_err(|_| Error::report(format!("Failed to render {} report", name)))?;
    Ok(out)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ParseReportJson<'a> {
    filename: &'a str,
    #[serde(flatten)]
    result: &'a ParseResult,
}

/// Summary of a parsed upload
pub fn parse_report(filename: &str, result: &ParseResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(&ParseReportJson { filename, result }),
        OutputFormat::Human => render("parse", |out| write_parse(out, filename, result)),
    }
}

fn write_parse(out: &mut String, filename: &str, result: &ParseResult) -> fmt::Result {
    let stats = &result.stats;
    writeln!(out, "{} {}", "Yard upload".bright_green().bold(), filename)?;
    writeln!(
        out,
        "  {} {}",
        "Rows read:".bright_cyan(),
        stats.total_rows.to_string().bright_white()
    )?;
    writeln!(
        out,
        "  {} {} ({:.1}% success)",
        "Containers:".bright_cyan(),
        stats.created_containers.to_string().bright_white().bold(),
        stats.success_rate()
    )?;
    writeln!(
        out,
        "  {} {}",
        "Slot records:".bright_cyan(),
        result.containers.len().to_string().bright_white()
    )?;

    if stats.skipped_rows > 0 {
        writeln!(
            out,
            "  {} {}",
            "Rows skipped:".bright_red(),
            stats.skipped_rows.to_string().bright_red().bold()
        )?;
        for skipped in stats.skipped.iter().take(MAX_SKIPPED_SHOWN) {
            writeln!(
                out,
                "    • row {} [{}] {}",
                skipped.row_number, skipped.reason, skipped.detail
            )?;
        }
        if stats.skipped.len() > MAX_SKIPPED_SHOWN {
            writeln!(
                out,
                "    • ... and {} more",
                stats.skipped.len() - MAX_SKIPPED_SHOWN
            )?;
        }
    }

    let vessels = if result.vessels.is_empty() {
        "(none)".to_string()
    } else {
        result.vessels.join(", ")
    };
    write!(out, "  {} {}", "Vessels:".bright_cyan(), vessels)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatsReportJson<'a> {
    filter: IsoFilter,
    blocks: &'a [BlockStats],
    totals: &'a YardTotals,
}

/// Per-block TEU table with yard totals
pub fn stats_report(
    filter: IsoFilter,
    stats: &[BlockStats],
    totals: &YardTotals,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(&StatsReportJson {
            filter,
            blocks: stats,
            totals,
        }),
        OutputFormat::Human => render("stats", |out| write_stats(out, filter, stats, totals)),
    }
}

fn write_stats(
    out: &mut String,
    filter: IsoFilter,
    stats: &[BlockStats],
    totals: &YardTotals,
) -> fmt::Result {
    writeln!(
        out,
        "{} ({} containers)",
        "Block occupancy".bright_green().bold(),
        filter
    )?;
    writeln!(
        out,
        "  {:<8} {:<8} {:>9} {:>9} {:>9} {:>9} {:>9} {:>7}",
        "Block", "Group", "Export", "Import", "Empty", "Total", "Capacity", "Used"
    )?;

    for block in stats {
        writeln!(
            out,
            "  {:<8} {:<8} {:>9} {:>9} {:>9} {:>9} {:>9} {:>6.1}%",
            block.name,
            block.group.to_string(),
            block.export_full_teus,
            block.import_full_teus,
            block.empty_teus,
            block.total_teus(),
            block.capacity,
            block.occupancy_percent()
        )?;
    }

    write!(
        out,
        "  {:<8} {:<8} {:>9} {:>9} {:>9} {:>9} {:>9} {:>6.1}%",
        "Total".bold(),
        "",
        totals.export_full_teus,
        totals.import_full_teus,
        totals.empty_teus,
        totals.total_teus.to_string().bold(),
        totals.capacity,
        totals.occupancy_percent()
    )
}

/// Container counts per block and vessel
pub fn vessels_report(data: &VesselStatsData, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(data),
        OutputFormat::Human => render("vessels", |out| write_vessels(out, data)),
    }
}

fn write_vessels(out: &mut String, data: &VesselStatsData) -> fmt::Result {
    write!(out, "{}", "Vessels by block".bright_green().bold())?;
    for (block, vessels) in data {
        write!(out, "\n  {}", block.as_str().bright_cyan())?;
        if vessels.is_empty() {
            write!(out, " (no vessel containers)")?;
        }
        for (vessel, count) in vessels {
            write!(out, "\n    • {}: {}", vessel, count.to_string().bright_white())?;
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct SearchReportJson<'a> {
    query: &'a str,
    matches: &'a BTreeSet<String>,
}

/// Ids matching a search query
pub fn search_report(query: &str, matches: &BTreeSet<String>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(&SearchReportJson { query, matches }),
        OutputFormat::Human => render("search", |out| write_search(out, query, matches)),
    }
}

fn write_search(out: &mut String, query: &str, matches: &BTreeSet<String>) -> fmt::Result {
    if matches.is_empty() {
        return write!(out, "{}", format!("No containers match '{}'", query).yellow());
    }

    write!(
        out,
        "{} {} for '{}'",
        matches.len().to_string().bright_white().bold(),
        if matches.len() == 1 { "match" } else { "matches" },
        query
    )?;
    for id in matches {
        write!(out, "\n  {}", id)?;
    }
    Ok(())
}
