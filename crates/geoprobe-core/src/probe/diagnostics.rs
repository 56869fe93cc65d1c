//! Diagnostic payload normalization and serving-region attribution.
//!
//! Nothing in here fails: an unreadable payload degrades to no endpoints,
//! which classifies as [`ServingRegion::Fallback`].

use geoprobe_types::{DiagnosticPayload, RegionTarget, ServingRegion};

/// JSON pointer to the ordered list of endpoints the client contacted.
pub const CONTACTED_ENDPOINTS_POINTER: &str =
    "/clientSideRequestStatistics/locationEndpointsContacted";

#[derive(Debug, Clone, PartialEq, Eq)]
struct MarkerRule {
    marker: String,
    region: String,
}

/// Ordered `(marker, region name)` rules.
///
/// Classification walks endpoints in contact order and, for each endpoint,
/// rules in declaration order. The first hit wins: the first contacted
/// endpoint is the one the client preferred before any retry or fallback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionMatcher {
    rules: Vec<MarkerRule>,
}

impl RegionMatcher {
    pub fn new<I, M, R>(rules: I) -> Self
    where
        I: IntoIterator<Item = (M, R)>,
        M: Into<String>,
        R: Into<String>,
    {
        Self {
            rules: rules
                .into_iter()
                .map(|(marker, region)| MarkerRule {
                    marker: marker.into().to_ascii_lowercase(),
                    region: region.into(),
                })
                .collect(),
        }
    }

    /// One rule per region, markers derived with [`RegionMatcher::marker_for`].
    pub fn from_regions(regions: &[RegionTarget]) -> Self {
        Self::new(regions.iter().map(|r| (Self::marker_for(&r.name), r.name.clone())))
    }

    /// Host marker for a region name: `"Central India"` → `"-centralindia"`.
    pub fn marker_for(region_name: &str) -> String {
        let compact: String = region_name
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();
        format!("-{compact}")
    }

    pub fn classify<S: AsRef<str>>(&self, endpoints: &[S]) -> ServingRegion {
        endpoints
            .iter()
            .find_map(|endpoint| {
                let endpoint = endpoint.as_ref().to_ascii_lowercase();
                self.rules.iter().find(|rule| contains_marker(&endpoint, &rule.marker))
            })
            .map_or(ServingRegion::Fallback, |rule| ServingRegion::Region(rule.region.clone()))
    }
}

/// `marker` must end a name segment: `-westus` matches `acct-westus.` but not `acct-westus3.`.
fn contains_marker(endpoint: &str, marker: &str) -> bool {
    endpoint.match_indices(marker).any(|(at, _)| {
        endpoint[at + marker.len()..].chars().next().map_or(true, |c| !c.is_ascii_alphanumeric())
    })
}

/// Normalized view of one diagnostic payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedDiagnostics {
    pub endpoints: Vec<String>,
    pub region_served: ServingRegion,
}

pub fn extract(payload: &DiagnosticPayload, matcher: &RegionMatcher) -> ExtractedDiagnostics {
    let endpoints = contacted_endpoints(payload);
    let region_served = matcher.classify(endpoints.as_slice());
    ExtractedDiagnostics { endpoints, region_served }
}

/// Contacted endpoints in contact order. Non-string entries are skipped.
pub fn contacted_endpoints(payload: &DiagnosticPayload) -> Vec<String> {
    let parsed;
    let value = match payload {
        DiagnosticPayload::Absent => return Vec::new(),
        DiagnosticPayload::Structured(value) => value,
        DiagnosticPayload::Raw(text) => match serde_json::from_str::<serde_json::Value>(text) {
            Ok(value) => {
                parsed = value;
                &parsed
            },
            Err(e) => {
                tracing::debug!("Unparseable diagnostics payload ({}), treating as empty", e);
                return Vec::new();
            },
        },
    };

    value
        .pointer(CONTACTED_ENDPOINTS_POINTER)
        .and_then(serde_json::Value::as_array)
        .map(|list| list.iter().filter_map(|v| v.as_str().map(str::to_string)).collect())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "diagnostics_tests.rs"]
mod tests;
