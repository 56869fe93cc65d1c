//! Latency probe settings.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{default_regions, ConsistencyMode, RegionTarget};

/// Latency probe configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct ProbeConfig {
    /// Regions probed by every comparison, in dispatch order
    #[serde(default = "default_regions")]
    #[validate(length(min = 1_u64), nested)]
    pub regions: Vec<RegionTarget>,
    /// Read issued identically against every region
    #[serde(default = "default_query")]
    #[validate(length(min = 1_u64))]
    pub query: String,
    /// Consistency used when the caller does not pick one
    #[serde(default)]
    pub default_consistency: ConsistencyMode,
    /// Per-region deadline; `None` waits for every region indefinitely
    #[serde(default)]
    #[validate(range(min = 1_u64))]
    pub timeout_ms: Option<u64>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            regions: default_regions(),
            query: default_query(),
            default_consistency: ConsistencyMode::default(),
            timeout_ms: None,
        }
    }
}

fn default_query() -> String {
    "SELECT TOP 10 * FROM c ORDER BY c._ts DESC".to_string()
}
