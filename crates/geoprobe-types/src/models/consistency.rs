//! Read consistency levels understood by the document service.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ProbeError;

/// Read consistency level applied uniformly to every regional client of one probe.
///
/// Rendered exactly as the service expects it in the consistency header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConsistencyMode {
    Strong,
    BoundedStaleness,
    #[default]
    Session,
    ConsistentPrefix,
    Eventual,
}

impl ConsistencyMode {
    pub const ALL: [ConsistencyMode; 5] = [
        ConsistencyMode::Strong,
        ConsistencyMode::BoundedStaleness,
        ConsistencyMode::Session,
        ConsistencyMode::ConsistentPrefix,
        ConsistencyMode::Eventual,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ConsistencyMode::Strong => "Strong",
            ConsistencyMode::BoundedStaleness => "BoundedStaleness",
            ConsistencyMode::Session => "Session",
            ConsistencyMode::ConsistentPrefix => "ConsistentPrefix",
            ConsistencyMode::Eventual => "Eventual",
        }
    }
}

impl fmt::Display for ConsistencyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConsistencyMode {
    type Err = ProbeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String =
            s.trim().chars().filter(|c| !matches!(c, '_' | '-' | ' ')).collect();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| ProbeError::UnsupportedConsistency { value: s.to_string() })
    }
}
