use crate::error::PipelineError;
use crate::prelude::*;
use crate::region::{catalog::District, mapping::DistrictMapping};
use itertools::Itertools;
use regex::Regex;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionRecord {
    pub district: District,
    pub display_name: &'static str,
    pub path_data: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Found,
    Missing,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrictnessPolicy {
    pub require_complete: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Extraction {
    records: BTreeMap<District, RegionRecord>,
    outcomes: Vec<(District, Outcome)>,
}

impl Extraction {
    pub fn record(&self, district: District) -> Option<&RegionRecord> {
        self.records.get(&district)
    }

    pub fn records(&self) -> impl Iterator<Item = &RegionRecord> {
        self.records.values()
    }

    /// Per-entry outcomes, in catalog order.
    pub fn outcomes(&self) -> &[(District, Outcome)] {
        &self.outcomes
    }

    pub fn found(&self) -> usize {
        self.records.len()
    }

    pub fn expected(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_complete(&self) -> bool {
        self.found() == self.expected()
    }

    pub fn missing(&self) -> Vec<District> {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| *outcome == Outcome::Missing)
            .map(|(district, _)| *district)
            .collect()
    }

    pub fn check(&self, policy: StrictnessPolicy) -> Result<(), PipelineError> {
        if !policy.require_complete || self.is_complete() {
            return Ok(());
        }

        Err(PipelineError::IncompleteExtraction {
            found: self.found(),
            expected: self.expected(),
            missing: self.missing().iter().map(|d| d.key()).join(", "),
        })
    }

    pub fn to_mapping(&self) -> DistrictMapping {
        let mut mapping = DistrictMapping::new();
        for record in self.records.values() {
            mapping.insert(record.district, record.path_data.clone());
        }

        mapping
    }
}

/// Scans `source` for `var <name> = <factory>.path("<payload>");` once per
/// distinct catalog entry.
pub fn extract(source: &str, catalog: &[District]) -> Result<Extraction> {
    let mut extraction = Extraction::default();
    for district in catalog.iter().unique() {
        let pattern = assignment_pattern(district.var_name())?;
        let mut captures = pattern.captures_iter(source).filter_map(|c| c.get(1));
        match captures.next() {
            Some(payload) => {
                let extra = captures.count();
                if extra > 0 {
                    tracing::warn!(
                        "{} assigned {} more time(s), keeping the first",
                        district.var_name(),
                        extra
                    );
                }
                extraction.records.insert(
                    *district,
                    RegionRecord {
                        district: *district,
                        display_name: district.display_name(),
                        path_data: payload.as_str().to_string(),
                    },
                );
                extraction.outcomes.push((*district, Outcome::Found));
                tracing::info!("✓ Extracted {} ({})", district.display_name(), district.key());
            }
            None => {
                extraction.outcomes.push((*district, Outcome::Missing));
                tracing::warn!("✗ Failed to extract {} ({})", district.display_name(), district.key());
            }
        }
    }

    tracing::info!(
        "Total districts: {}/{}",
        extraction.found(),
        extraction.expected()
    );

    Ok(extraction)
}

fn assignment_pattern(var_name: &str) -> Result<Regex> {
    Ok(Regex::new(&format!(
        r#"\bvar\s+{}\s*=\s*[A-Za-z_$][\w$]*\.path\("([^"]+)"\)\s*;"#,
        regex::escape(var_name)
    ))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legacy_source(skip: &[District]) -> String {
        District::ALL
            .iter()
            .rev()
            .filter(|d| !skip.contains(d))
            .map(|d| format!("var {} = rsr.path(\"m 1,2 3,4 {} z\");\n", d.var_name(), d.key()))
            .collect()
    }

    #[test]
    fn test_extracts_every_district_from_well_formed_source() {
        let extraction = extract(&legacy_source(&[]), &District::ALL).unwrap();
        assert!(extraction.is_complete());
        assert_eq!(extraction.found(), 25);
        for district in District::ALL {
            let record = extraction.record(district).unwrap();
            assert!(!record.path_data.is_empty());
            assert_eq!(record.display_name, district.display_name());
            assert!(record.path_data.contains(district.key()));
        }
    }

    #[test]
    fn test_missing_entry_is_not_fatal() {
        let source = legacy_source(&[District::Galle, District::Kandy]);
        let extraction = extract(&source, &District::ALL).unwrap();
        assert_eq!(extraction.found(), 23);
        assert_eq!(extraction.expected(), 25);
        assert_eq!(extraction.missing(), vec![District::Kandy, District::Galle]);
        assert!(extraction.record(District::Colombo).is_some());
    }

    #[test]
    fn test_outcomes_follow_catalog_order() {
        let extraction = extract(&legacy_source(&[District::Matale]), &District::ALL).unwrap();
        let order: Vec<District> = extraction.outcomes().iter().map(|(d, _)| *d).collect();
        assert_eq!(order, District::ALL.to_vec());
        assert_eq!(extraction.outcomes()[4], (District::Matale, Outcome::Missing));
    }

    #[test]
    fn test_variable_name_must_match_exactly() {
        let source = "var colombo2 = rsr.path(\"M0,0\");\nvar xgalle = rsr.path(\"M1,1\");";
        let extraction = extract(source, &[District::Colombo, District::Galle]).unwrap();
        assert_eq!(extraction.found(), 0);
    }

    #[test]
    fn test_empty_payload_is_a_miss() {
        let extraction = extract("var galle = rsr.path(\"\");", &[District::Galle]).unwrap();
        assert_eq!(extraction.missing(), vec![District::Galle]);
    }

    #[test]
    fn test_any_factory_and_loose_spacing() {
        let source = "var   jaffna=paper.path(\"M5,5 L6,6\") ;";
        let extraction = extract(source, &[District::Jaffna]).unwrap();
        assert_eq!(extraction.record(District::Jaffna).unwrap().path_data, "M5,5 L6,6");
    }

    #[test]
    fn test_first_assignment_wins() {
        let source = "var matara = rsr.path(\"M1,1\");\nvar matara = rsr.path(\"M2,2\");";
        let extraction = extract(source, &[District::Matara]).unwrap();
        assert_eq!(extraction.record(District::Matara).unwrap().path_data, "M1,1");
    }

    #[test]
    fn test_repeated_catalog_entries_are_scanned_once() {
        let source = "var galle = rsr.path(\"M1,1\");";
        let extraction = extract(source, &[District::Galle, District::Galle]).unwrap();
        assert_eq!(extraction.found(), 1);
        assert_eq!(extraction.expected(), 1);
        assert!(extraction.is_complete());
        assert!(extraction.check(StrictnessPolicy { require_complete: true }).is_ok());

        let extraction = extract("", &[District::Galle, District::Galle]).unwrap();
        assert_eq!(extraction.missing(), vec![District::Galle]);
    }

    #[test]
    fn test_strictness_policy() {
        let extraction = extract(&legacy_source(&[District::Badulla]), &District::ALL).unwrap();
        assert!(extraction.check(StrictnessPolicy::default()).is_ok());
        let err = extraction
            .check(StrictnessPolicy { require_complete: true })
            .unwrap_err();
        assert_eq!(
            err,
            PipelineError::IncompleteExtraction {
                found: 24,
                expected: 25,
                missing: "BADULLA".to_string(),
            }
        );

        let complete = extract(&legacy_source(&[]), &District::ALL).unwrap();
        assert!(complete.check(StrictnessPolicy { require_complete: true }).is_ok());
    }

    #[test]
    fn test_to_mapping_carries_found_records_only() {
        let extraction = extract(&legacy_source(&[District::Ampara]), &District::ALL).unwrap();
        let mapping = extraction.to_mapping();
        assert_eq!(mapping.len(), 24);
        assert!(mapping.get(District::Ampara).is_none());
        assert_eq!(mapping.get(District::Kandy).unwrap().name, "Kandy");
    }
}
