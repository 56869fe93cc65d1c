//! Probe report model.
//!
//! A report is built fresh for every comparison and never mutated after it is
//! returned. Each region contributes exactly one [`RegionResult`] and one
//! [`DiagnosticRecord`], both keyed by the region key.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::ConsistencyMode;

/// Top-level report keys that region keys must not shadow.
pub const RESERVED_REPORT_KEYS: [&str; 2] = ["diagnostics", "consistency"];

const FALLBACK: &str = "Fallback";
const UNAVAILABLE: &str = "Unavailable";

/// Region inferred to have actually answered a request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum ServingRegion {
    /// A configured region matched one of the contacted endpoints
    Region(String),
    /// The call succeeded but no contacted endpoint carried a known marker
    Fallback,
    /// The call failed
    Unavailable,
}

impl ServingRegion {
    pub fn as_str(&self) -> &str {
        match self {
            ServingRegion::Region(name) => name,
            ServingRegion::Fallback => FALLBACK,
            ServingRegion::Unavailable => UNAVAILABLE,
        }
    }
}

impl fmt::Display for ServingRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ServingRegion> for String {
    fn from(region: ServingRegion) -> Self {
        match region {
            ServingRegion::Region(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

impl From<String> for ServingRegion {
    fn from(s: String) -> Self {
        match s.as_str() {
            FALLBACK => ServingRegion::Fallback,
            UNAVAILABLE => ServingRegion::Unavailable,
            _ => ServingRegion::Region(s),
        }
    }
}

/// Outcome of one regional call.
///
/// Build through [`RegionResult::succeeded`] or [`RegionResult::failed`]:
/// a success always carries latency and data, a failure always carries an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionResult {
    pub success: bool,
    pub latency_ms: Option<u64>,
    pub data: Option<Vec<serde_json::Value>>,
    pub error: Option<String>,
    pub region_served: ServingRegion,
    pub endpoint: Option<String>,
}

impl RegionResult {
    pub fn succeeded(
        latency_ms: u64,
        data: Vec<serde_json::Value>,
        region_served: ServingRegion,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            success: true,
            latency_ms: Some(latency_ms),
            data: Some(data),
            error: None,
            region_served,
            endpoint: Some(endpoint.into()),
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            latency_ms: None,
            data: None,
            error: Some(error.into()),
            region_served: ServingRegion::Unavailable,
            endpoint: None,
        }
    }
}

/// Diagnostic payload as handed over by the regional client.
///
/// The shape varies between service versions: sometimes a JSON string carried
/// in a header, sometimes an already structured object, sometimes nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticPayload {
    Absent,
    Raw(String),
    Structured(serde_json::Value),
}

impl DiagnosticPayload {
    /// Payload as reported back in [`DiagnosticRecord::raw`]. Absent becomes `{}`.
    pub fn to_raw_value(&self) -> serde_json::Value {
        match self {
            DiagnosticPayload::Absent => serde_json::Value::Object(serde_json::Map::new()),
            DiagnosticPayload::Raw(s) => serde_json::Value::String(s.clone()),
            DiagnosticPayload::Structured(v) => v.clone(),
        }
    }
}

/// Per-region raw routing evidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticRecord {
    pub raw: serde_json::Value,
    pub endpoints: Vec<String>,
    pub actual_endpoint: String,
    pub region_served: ServingRegion,
}

impl DiagnosticRecord {
    /// Degraded record for a failed call: the error message stands in for the payload.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            raw: serde_json::Value::String(message.into()),
            endpoints: Vec::new(),
            actual_endpoint: "Error".to_string(),
            region_served: ServingRegion::Unavailable,
        }
    }
}

/// Combined comparison result.
///
/// Serialized flat: one key per region, plus `diagnostics` and `consistency`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeReport {
    #[serde(flatten)]
    pub regions: BTreeMap<String, RegionResult>,
    pub diagnostics: BTreeMap<String, DiagnosticRecord>,
    pub consistency: ConsistencyMode,
}

impl ProbeReport {
    pub fn region(&self, key: &str) -> Option<&RegionResult> {
        self.regions.get(key)
    }

    pub fn diagnostic(&self, key: &str) -> Option<&DiagnosticRecord> {
        self.diagnostics.get(key)
    }

    pub fn succeeded_count(&self) -> usize {
        self.regions.values().filter(|r| r.success).count()
    }
}
