//! Layout fit check
//!
//! The location decoder accepts any bay number. This check lists records
//! that fall outside the configured grid so callers can warn about them.
//! It never changes aggregates.

use crate::app::models::{BlockConfig, Container};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Why a record does not fit the layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutIssue {
    UnknownBlock,
    OutsideGrid,
}

/// A record that does not fit the layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutOfLayout {
    pub id: String,
    pub block: String,
    pub bay: i32,
    pub row: u32,
    pub tier: u32,
    pub issue: LayoutIssue,
}

/// Records whose block is unknown or whose slot lies outside the block grid
///
/// Both halves of a 40ft pair are checked, since the `End` half can run past
/// the last bay on its own.
pub fn find_out_of_layout(containers: &[Container], layout: &[BlockConfig]) -> Vec<OutOfLayout> {
    let blocks: HashMap<&str, &BlockConfig> =
        layout.iter().map(|b| (b.name.as_str(), b)).collect();

    containers
        .iter()
        .filter_map(|c| {
            let issue = match blocks.get(c.block.as_str()) {
                None => LayoutIssue::UnknownBlock,
                Some(block) if !block.contains_slot(c.bay, c.row, c.tier) => {
                    LayoutIssue::OutsideGrid
                }
                Some(_) => return None,
            };
            Some(OutOfLayout {
                id: c.id.clone(),
                block: c.block.clone(),
                bay: c.bay,
                row: c.row,
                tier: c.tier,
                issue,
            })
        })
        .collect()
}
