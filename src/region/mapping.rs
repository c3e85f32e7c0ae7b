use super::catalog::District;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    pub name: String,
    pub path: String,
}

/// The district data table: identifier to name and path, ordered by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DistrictMapping {
    entries: BTreeMap<District, MappingEntry>,
}

impl DistrictMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, district: District, path: impl Into<String>) {
        self.entries.insert(
            district,
            MappingEntry {
                name: district.display_name().to_string(),
                path: path.into(),
            },
        );
    }

    pub fn get(&self, district: District) -> Option<&MappingEntry> {
        self.entries.get(&district)
    }

    pub fn iter(&self) -> impl Iterator<Item = (District, &MappingEntry)> {
        self.entries.iter().map(|(district, entry)| (*district, entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let mapping: DistrictMapping = serde_json::from_str(json)?;
        if let Some((district, _)) = mapping.iter().find(|(_, entry)| entry.path.is_empty()) {
            let err = format!("Empty path for {} in district mapping", district);
            tracing::error!(err);
            return Err(anyhow::anyhow!(err));
        }

        Ok(mapping)
    }
}
