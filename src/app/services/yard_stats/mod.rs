//! Yard statistics over parsed container records
//!
//! Pure aggregations recomputed from scratch on every call; callers that
//! want memoization key it on the container set, filter and layout.
//!
//! # Architecture
//!
//! - [`iso`] - ISO size/type code classification (dry / reefer)
//! - [`block_stats`] - Per-block TEU and count totals split by full/empty and flow
//! - [`vessel_stats`] - Per-block, per-vessel container counts
//! - [`search`] - Free-text container lookup by id or location
//! - [`layout_check`] - Records that do not fit the configured block grid
//!
//! # Double counting
//!
//! A 40ft container is stored as two records. Every aggregate here drops
//! the `End` half so each physical container is counted once.
//!
//! # Example Usage
//!
//! ```rust
//! use yard_processor::app::services::yard_parser::YardParser;
//! use yard_processor::app::services::yard_stats::{IsoFilter, calculate_block_stats};
//! use yard_processor::app::models::RawRow;
//! use yard_processor::constants::default_layout;
//!
//! let rows = vec![RawRow::new().with("Location", "A2-22-05-1").with("Status", "F").with("Flow", "X")];
//! let parsed = YardParser::default().parse_rows(&rows);
//!
//! let stats = calculate_block_stats(&parsed.containers, IsoFilter::All, &default_layout());
//! let a2 = stats.iter().find(|s| s.name == "A2").unwrap();
//! assert_eq!(a2.export_full_teus, 2);
//! assert_eq!(a2.export_full_count, 1);
//! ```

pub mod block_stats;
pub mod iso;
pub mod layout_check;
pub mod search;
pub mod vessel_stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use block_stats::{BlockStats, YardTotals, calculate_block_stats, yard_totals};
pub use iso::{IsoFilter, IsoType, classify_iso};
pub use layout_check::{LayoutIssue, OutOfLayout, find_out_of_layout};
pub use search::search_containers;
pub use vessel_stats::{VesselStatsData, calculate_vessel_stats};
