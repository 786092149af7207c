//! Per-block, per-vessel container counts

use crate::app::models::{BlockConfig, Container};
use std::collections::BTreeMap;
use tracing::debug;

/// Block name to vessel name to container count
pub type VesselStatsData = BTreeMap<String, BTreeMap<String, usize>>;

/// Count counted containers per block and vessel
///
/// Every configured block is present, possibly with an empty map. Blocks
/// that only appear in the data are added on demand.
pub fn calculate_vessel_stats(containers: &[Container], layout: &[BlockConfig]) -> VesselStatsData {
    let mut data: VesselStatsData = layout
        .iter()
        .map(|block| (block.name.clone(), BTreeMap::new()))
        .collect();

    for container in containers.iter().filter(|c| c.is_counted()) {
        let Some(vessel) = container.vessel.as_deref().filter(|v| !v.trim().is_empty()) else {
            continue;
        };

        *data
            .entry(container.block.clone())
            .or_default()
            .entry(vessel.to_string())
            .or_insert(0) += 1;
    }

    debug!("Vessel statistics over {} blocks", data.len());
    data
}
