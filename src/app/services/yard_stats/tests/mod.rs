//! Tests for the yard statistics module
//!
//! Fixture builders for containers and layouts shared by the test modules.

pub mod search_tests;

use crate::app::models::{
    BlockConfig, BlockGroup, CargoStatus, Container, ContainerSize, Flow, PartType,
};

/// Create a 20ft test container
pub fn create_test_container(id: &str, block: &str, bay: i32) -> Container {
    Container {
        id: id.to_string(),
        location: format!("{}-{:02}-01-1", block, bay),
        block: block.to_string(),
        bay,
        row: 1,
        tier: 1,
        size: ContainerSize::Twenty,
        is_multi_bay: false,
        part_type: None,
        owner: "Unknown".to_string(),
        vessel: None,
        status: None,
        flow: None,
        iso: None,
    }
}

/// Create both records of a 40ft container centred on an even bay
pub fn create_forty_foot_pair(id: &str, block: &str, centre_bay: i32) -> [Container; 2] {
    let start = Container {
        location: format!("{}-{:02}-01-1", block, centre_bay),
        bay: centre_bay - 1,
        size: ContainerSize::Forty,
        is_multi_bay: true,
        part_type: Some(PartType::Start),
        ..create_test_container(id, block, centre_bay)
    };
    let end = Container {
        bay: centre_bay + 1,
        part_type: Some(PartType::End),
        ..start.clone()
    };
    [start, end]
}

/// Set status, flow and ISO code on a container
pub fn with_cargo(
    mut container: Container,
    status: Option<CargoStatus>,
    flow: Option<Flow>,
    iso: Option<&str>,
) -> Container {
    container.status = status;
    container.flow = flow;
    container.iso = iso.map(str::to_string);
    container
}

/// Set the vessel on a container
pub fn with_vessel(mut container: Container, vessel: &str) -> Container {
    container.vessel = Some(vessel.to_string());
    container
}

/// Three-block layout used across tests
pub fn create_test_layout() -> Vec<BlockConfig> {
    vec![
        BlockConfig::new("A1", BlockGroup::General, 30, 6, 5, 900),
        BlockConfig::new("R1", BlockGroup::Reefer, 10, 6, 4, 240),
        BlockConfig::new("E1", BlockGroup::Empty, 30, 8, 6, 1440),
    ]
}
