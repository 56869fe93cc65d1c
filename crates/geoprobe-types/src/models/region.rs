//! Region targets.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use validator::Validate;

use super::RESERVED_REPORT_KEYS;
use crate::error::ProbeError;

/// One configured region: a stable report key plus the display/routing name
/// handed to the regional client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
pub struct RegionTarget {
    /// Stable identifier used as the report key (e.g. `westUS3`)
    #[validate(length(min = 1_u64))]
    pub key: String,
    /// Routing region name (e.g. `West US 3`)
    #[validate(length(min = 1_u64))]
    pub name: String,
}

impl RegionTarget {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self { key: key.into(), name: name.into() }
    }
}

/// Region pair probed when nothing else is configured.
pub fn default_regions() -> Vec<RegionTarget> {
    vec![
        RegionTarget::new("centralIndia", "Central India"),
        RegionTarget::new("westUS3", "West US 3"),
    ]
}

/// Checks that a region set can be turned into a report: non-empty, unique
/// keys, no key shadowing a top-level report field.
pub fn validate_region_set(regions: &[RegionTarget]) -> Result<(), ProbeError> {
    if regions.is_empty() {
        return Err(ProbeError::NoRegions);
    }
    let mut seen = HashSet::with_capacity(regions.len());
    for region in regions {
        if RESERVED_REPORT_KEYS.contains(&region.key.as_str()) {
            return Err(ProbeError::ReservedRegionKey { key: region.key.clone() });
        }
        if !seen.insert(region.key.as_str()) {
            return Err(ProbeError::DuplicateRegion { key: region.key.clone() });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_regions_are_valid() {
        assert_eq!(validate_region_set(&default_regions()), Ok(()));
    }

    #[test]
    fn test_empty_region_set() {
        assert_eq!(validate_region_set(&[]), Err(ProbeError::NoRegions));
    }

    #[test]
    fn test_duplicate_keys() {
        let regions = vec![RegionTarget::new("a", "West US 3"), RegionTarget::new("a", "East US")];
        assert_eq!(
            validate_region_set(&regions),
            Err(ProbeError::DuplicateRegion { key: "a".to_string() })
        );
    }

    #[test]
    fn test_reserved_key() {
        let regions = vec![RegionTarget::new("diagnostics", "West US 3")];
        assert_eq!(
            validate_region_set(&regions),
            Err(ProbeError::ReservedRegionKey { key: "diagnostics".to_string() })
        );
    }
}
