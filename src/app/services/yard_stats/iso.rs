//! ISO 6346 size/type code classification

use crate::constants::iso_types::{DRY_GROUP_CODES, GROUP_CODE_INDEX, REEFER_GROUP_CODE};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type category derived from an ISO code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IsoType {
    Dry,
    Reefer,
    Unclassified,
}

/// Classify by the third character of the code
pub fn classify_iso(code: Option<&str>) -> IsoType {
    let Some(group) = code.and_then(|c| c.chars().nth(GROUP_CODE_INDEX)) else {
        return IsoType::Unclassified;
    };

    let group = group.to_ascii_uppercase();
    if DRY_GROUP_CODES.contains(&group) {
        IsoType::Dry
    } else if group == REEFER_GROUP_CODE {
        IsoType::Reefer
    } else {
        IsoType::Unclassified
    }
}

/// Container type filter for statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IsoFilter {
    #[default]
    All,
    Dry,
    Reefer,
}

impl IsoFilter {
    /// Check whether a container with this ISO code passes the filter
    ///
    /// Unclassified codes only pass `All`.
    pub fn matches(self, iso: Option<&str>) -> bool {
        match self {
            IsoFilter::All => true,
            IsoFilter::Dry => classify_iso(iso) == IsoType::Dry,
            IsoFilter::Reefer => classify_iso(iso) == IsoType::Reefer,
        }
    }
}

impl fmt::Display for IsoFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IsoFilter::All => "ALL",
            IsoFilter::Dry => "DRY",
            IsoFilter::Reefer => "REEFER",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for IsoFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "ALL" => Ok(IsoFilter::All),
            "DRY" => Ok(IsoFilter::Dry),
            "REEFER" | "RF" => Ok(IsoFilter::Reefer),
            other => Err(Error::data_validation(format!(
                "Unknown ISO filter '{}'. Expected one of: all, dry, reefer",
                other
            ))),
        }
    }
}
