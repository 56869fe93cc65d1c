//! One timed read against one region.

use std::sync::Arc;
use std::time::{Duration, Instant};

use geoprobe_client::QueryResponse;
use geoprobe_types::{
    ConsistencyMode, DiagnosticPayload, DiagnosticRecord, Query, RegionResult, RegionTarget,
};

use super::diagnostics::{extract, RegionMatcher};
use super::factory::RegionClientFactory;

/// Response header naming the endpoint that served the request.
pub const SERVICE_ENDPOINT_HEADER: &str = "x-ms-serviceendpoint";
/// Response header carrying a JSON-encoded diagnostics string.
pub const DIAGNOSTICS_HEADER: &str = "x-ms-documentdb-diagnostics";

const UNKNOWN_ENDPOINT: &str = "Unknown";

/// Outcome of probing one region: the public result plus its raw evidence.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionProbe {
    pub result: RegionResult,
    pub diagnostics: DiagnosticRecord,
}

impl RegionProbe {
    pub fn failed(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            result: RegionResult::failed(message.clone()),
            diagnostics: DiagnosticRecord::failed(message),
        }
    }
}

#[derive(Clone)]
pub struct RegionProber {
    factory: Arc<dyn RegionClientFactory>,
    timeout: Option<Duration>,
}

impl RegionProber {
    pub fn new(factory: Arc<dyn RegionClientFactory>) -> Self {
        Self { factory, timeout: None }
    }

    /// Bound every regional read by `timeout`; a read that overruns is
    /// reported as that region's failure.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Probes `target`. Never fails: every error becomes a failed [`RegionProbe`].
    pub async fn probe(
        &self,
        target: &RegionTarget,
        query: &Query,
        consistency: ConsistencyMode,
        matcher: &RegionMatcher,
    ) -> RegionProbe {
        match self.timed_query(target, query, consistency).await {
            Ok((latency_ms, response)) => {
                let probe = summarize(latency_ms, response, matcher);
                tracing::debug!(
                    "[Probe] {} ({}) answered in {} ms, served by {}",
                    target.key,
                    target.name,
                    latency_ms,
                    probe.result.region_served
                );
                probe
            },
            Err(message) => {
                tracing::warn!("[Probe] {} ({}) failed: {}", target.key, target.name, message);
                RegionProbe::failed(message)
            },
        }
    }

    async fn timed_query(
        &self,
        target: &RegionTarget,
        query: &Query,
        consistency: ConsistencyMode,
    ) -> Result<(u64, QueryResponse), String> {
        let client =
            self.factory.client_for(&target.name, consistency).map_err(|e| e.to_string())?;

        let started = Instant::now();
        let call = client.run_query(query);
        let response = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, call).await.map_err(|_| {
                format!("Region {} did not answer within {} ms", target.name, limit.as_millis())
            })?,
            None => call.await,
        }
        .map_err(|e| e.to_string())?;
        let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        Ok((latency_ms, response))
    }
}

/// Structured diagnostics win over the header string; neither present is `Absent`.
pub(crate) fn payload_of(response: &QueryResponse) -> DiagnosticPayload {
    match &response.diagnostics {
        Some(value) if !value.is_null() => DiagnosticPayload::Structured(value.clone()),
        _ => response
            .header(DIAGNOSTICS_HEADER)
            .map_or(DiagnosticPayload::Absent, |raw| DiagnosticPayload::Raw(raw.to_string())),
    }
}

fn summarize(latency_ms: u64, response: QueryResponse, matcher: &RegionMatcher) -> RegionProbe {
    let actual_endpoint =
        response.header(SERVICE_ENDPOINT_HEADER).unwrap_or(UNKNOWN_ENDPOINT).to_string();
    let payload = payload_of(&response);
    let extracted = extract(&payload, matcher);

    RegionProbe {
        result: RegionResult::succeeded(
            latency_ms,
            response.resources,
            extracted.region_served.clone(),
            actual_endpoint.clone(),
        ),
        diagnostics: DiagnosticRecord {
            raw: payload.to_raw_value(),
            endpoints: extracted.endpoints,
            actual_endpoint,
            region_served: extracted.region_served,
        },
    }
}

#[cfg(test)]
#[path = "prober_tests.rs"]
mod tests;
