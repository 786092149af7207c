//! Container record materialization
//!
//! Yard numbering reserves even bay numbers for the shared centre of a 40ft
//! container, which physically occupies the odd bays on either side. An odd
//! bay is a single 20ft slot.

use super::column_mapping::{ResolvedRow, cell_text};
use super::location::DecodedLocation;
use super::stats::ParseStats;
use crate::app::models::{CargoStatus, Container, ContainerSize, Flow, PartType};
use crate::constants::{PLACEHOLDER_ID_PREFIX, UNKNOWN_OWNER};

/// Non-positional fields of a container row
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerDetails {
    pub id: String,
    pub owner: String,
    pub vessel: Option<String>,
    pub status: Option<CargoStatus>,
    pub flow: Option<Flow>,
    pub iso: Option<String>,
}

impl ContainerDetails {
    /// Extract details from a resolved row, filling defaults for absent fields
    ///
    /// `row_number` is 1-based and only used to synthesize a placeholder id.
    pub fn from_resolved(resolved: &ResolvedRow<'_>, row_number: usize) -> Self {
        Self {
            id: cell_text(resolved.container_id)
                .unwrap_or_else(|| placeholder_id(row_number)),
            owner: cell_text(resolved.owner).unwrap_or_else(|| UNKNOWN_OWNER.to_string()),
            vessel: cell_text(resolved.vessel),
            status: cell_text(resolved.status).and_then(|s| CargoStatus::parse(&s)),
            flow: cell_text(resolved.flow).and_then(|s| Flow::parse(&s)),
            iso: cell_text(resolved.iso).map(|s| s.to_uppercase()),
        }
    }
}

/// Id used for rows without a container number
pub fn placeholder_id(row_number: usize) -> String {
    format!("{}-{}", PLACEHOLDER_ID_PREFIX, row_number)
}

/// Build the record(s) for one physical container
///
/// Counts exactly one created container in `stats`, whether one or two
/// records are returned.
pub fn materialize(
    location: DecodedLocation,
    details: ContainerDetails,
    stats: &mut ParseStats,
) -> Vec<Container> {
    stats.created_containers += 1;

    let base = Container {
        id: details.id,
        location: location.normalized,
        block: location.block,
        bay: location.bay,
        row: location.row,
        tier: location.tier,
        size: ContainerSize::Twenty,
        is_multi_bay: false,
        part_type: None,
        owner: details.owner,
        vessel: details.vessel,
        status: details.status,
        flow: details.flow,
        iso: details.iso,
    };

    if location.bay % 2 != 0 {
        return vec![base];
    }

    let start = Container {
        bay: location.bay - 1,
        size: ContainerSize::Forty,
        is_multi_bay: true,
        part_type: Some(PartType::Start),
        ..base
    };
    let end = Container {
        bay: location.bay + 1,
        part_type: Some(PartType::End),
        ..start.clone()
    };

    vec![start, end]
}
