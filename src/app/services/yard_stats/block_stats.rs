//! Per-block TEU statistics
//!
//! Every configured block gets one entry, in layout order, even when no
//! container is stored in it. Containers in blocks that are not configured
//! are left out.

use super::iso::IsoFilter;
use crate::app::models::{BlockConfig, BlockGroup, CargoStatus, Container, Flow};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info};

/// Occupancy totals for one block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockStats {
    pub name: String,
    /// Presented group; empty-container blocks appear as general
    pub group: BlockGroup,
    /// Capacity in TEU
    pub capacity: usize,
    pub export_full_teus: usize,
    pub import_full_teus: usize,
    pub empty_teus: usize,
    pub export_full_count: usize,
    pub import_full_count: usize,
    pub empty_count: usize,
}

impl BlockStats {
    /// Zeroed statistics for a configured block
    pub fn for_block(block: &BlockConfig) -> Self {
        Self {
            name: block.name.clone(),
            group: block.group.presented(),
            capacity: block.capacity,
            export_full_teus: 0,
            import_full_teus: 0,
            empty_teus: 0,
            export_full_count: 0,
            import_full_count: 0,
            empty_count: 0,
        }
    }

    /// Add one counted container to the matching category
    ///
    /// Full containers without a known flow and containers without a status
    /// belong to no category and are ignored.
    fn add(&mut self, container: &Container) {
        let teu = container.teu();
        match (container.status, container.flow) {
            (Some(CargoStatus::Full), Some(Flow::Export)) => {
                self.export_full_teus += teu;
                self.export_full_count += 1;
            }
            (Some(CargoStatus::Full), Some(Flow::Import)) => {
                self.import_full_teus += teu;
                self.import_full_count += 1;
            }
            (Some(CargoStatus::Empty), _) => {
                self.empty_teus += teu;
                self.empty_count += 1;
            }
            _ => {}
        }
    }

    /// TEU across all categories
    pub fn total_teus(&self) -> usize {
        self.export_full_teus + self.import_full_teus + self.empty_teus
    }

    /// Containers across all categories
    pub fn total_count(&self) -> usize {
        self.export_full_count + self.import_full_count + self.empty_count
    }

    /// Used capacity as a percentage (0 when capacity is 0)
    pub fn occupancy_percent(&self) -> f64 {
        if self.capacity == 0 {
            0.0
        } else {
            (self.total_teus() as f64 / self.capacity as f64) * 100.0
        }
    }
}

/// Calculate statistics for every configured block
///
/// Containers are first filtered by ISO type, then the `End` half of each
/// 40ft pair is dropped so every physical container counts once.
pub fn calculate_block_stats(
    containers: &[Container],
    filter: IsoFilter,
    layout: &[BlockConfig],
) -> Vec<BlockStats> {
    let mut by_block: HashMap<&str, Vec<&Container>> = HashMap::new();
    let mut considered = 0;

    for container in containers
        .iter()
        .filter(|c| filter.matches(c.iso.as_deref()))
        .filter(|c| c.is_counted())
    {
        by_block
            .entry(container.block.as_str())
            .or_default()
            .push(container);
        considered += 1;
    }

    let stats: Vec<BlockStats> = layout
        .iter()
        .map(|block| {
            let mut stats = BlockStats::for_block(block);
            for container in by_block.get(block.name.as_str()).into_iter().flatten() {
                stats.add(container);
            }
            debug!(
                "Block {}: {} TEU in {} containers",
                stats.name,
                stats.total_teus(),
                stats.total_count()
            );
            stats
        })
        .collect();

    info!(
        "Block statistics ({} filter): {} containers over {} blocks",
        filter,
        considered,
        stats.len()
    );

    stats
}

/// Yard-wide sum of block statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YardTotals {
    pub capacity: usize,
    pub export_full_teus: usize,
    pub import_full_teus: usize,
    pub empty_teus: usize,
    pub total_teus: usize,
    pub total_count: usize,
}

impl YardTotals {
    /// Used capacity as a percentage (0 when capacity is 0)
    pub fn occupancy_percent(&self) -> f64 {
        if self.capacity == 0 {
            0.0
        } else {
            (self.total_teus as f64 / self.capacity as f64) * 100.0
        }
    }
}

/// Sum block statistics into yard totals
pub fn yard_totals(stats: &[BlockStats]) -> YardTotals {
    stats.iter().fold(YardTotals::default(), |mut totals, block| {
        totals.capacity += block.capacity;
        totals.export_full_teus += block.export_full_teus;
        totals.import_full_teus += block.import_full_teus;
        totals.empty_teus += block.empty_teus;
        totals.total_teus += block.total_teus();
        totals.total_count += block.total_count();
        totals
    })
}
