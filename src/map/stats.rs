use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// One row of the per-district user distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictCount {
    pub district: String,
    #[serde(default)]
    pub display_name: String,
    pub user_count: u64,
}

impl DistrictCount {
    pub fn new(district: impl Into<String>, display_name: impl Into<String>, user_count: u64) -> Self {
        DistrictCount {
            district: district.into(),
            display_name: display_name.into(),
            user_count,
        }
    }
}

pub fn parse_distribution(json: &str) -> Result<Vec<DistrictCount>> {
    Ok(serde_json::from_str(json)?)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RoleFilter {
    #[default]
    All,
    Admin,
    VeterinaryOfficer,
}

impl RoleFilter {
    pub fn from_param(role: Option<&str>) -> RoleFilter {
        match role {
            Some("ADMIN") => RoleFilter::Admin,
            Some("VETERINARY_OFFICER") => RoleFilter::VeterinaryOfficer,
            _ => RoleFilter::All,
        }
    }

    /// Plural noun used after a count in tooltips.
    pub fn label(self) -> &'static str {
        match self {
            RoleFilter::All => "users",
            RoleFilter::Admin => "ADMINs",
            RoleFilter::VeterinaryOfficer => "VETERINARY_OFFICERs",
        }
    }
}
