//! Concurrent fan-out over every configured region.

use futures::future::join_all;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use geoprobe_types::models::validate_region_set;
use geoprobe_types::{ConsistencyMode, ProbeConfig, ProbeError, ProbeReport, Query, RegionTarget};

use super::diagnostics::RegionMatcher;
use super::factory::RegionClientFactory;
use super::prober::{RegionProbe, RegionProber};

/// Runs the same read against every region at once and assembles the report.
///
/// The report is only returned once every region reached a terminal state.
/// Each probe owns its own result slot, so no locking is involved.
#[derive(Clone)]
pub struct LatencyComparator {
    prober: RegionProber,
    regions: Vec<RegionTarget>,
    query: Query,
    default_consistency: ConsistencyMode,
}

impl LatencyComparator {
    pub fn new(prober: RegionProber, regions: Vec<RegionTarget>, query: Query) -> Self {
        Self { prober, regions, query, default_consistency: ConsistencyMode::default() }
    }

    pub fn from_config(
        factory: Arc<dyn RegionClientFactory>,
        config: &ProbeConfig,
    ) -> Result<Self, ProbeError> {
        validate_region_set(&config.regions)?;
        let prober =
            RegionProber::new(factory).with_timeout(config.timeout_ms.map(Duration::from_millis));
        Ok(Self {
            prober,
            regions: config.regions.clone(),
            query: Query::new(config.query.clone()),
            default_consistency: config.default_consistency,
        })
    }

    pub fn regions(&self) -> &[RegionTarget] {
        &self.regions
    }

    /// Probes the configured regions with the configured query.
    pub async fn compare(
        &self,
        consistency: Option<ConsistencyMode>,
    ) -> Result<ProbeReport, ProbeError> {
        let consistency = consistency.unwrap_or(self.default_consistency);
        self.compare_regions(&self.regions, &self.query, consistency).await
    }

    /// Probes an explicit region set.
    ///
    /// Fails only if the region set itself is unusable; that check happens
    /// before anything is dispatched.
    pub async fn compare_regions(
        &self,
        regions: &[RegionTarget],
        query: &Query,
        consistency: ConsistencyMode,
    ) -> Result<ProbeReport, ProbeError> {
        validate_region_set(regions)?;

        let matcher = Arc::new(RegionMatcher::from_regions(regions));
        let query = Arc::new(query.clone());

        let (keys, tasks): (Vec<String>, Vec<_>) = regions
            .iter()
            .cloned()
            .map(|target| {
                let prober = self.prober.clone();
                let matcher = Arc::clone(&matcher);
                let query = Arc::clone(&query);
                let key = target.key.clone();
                let task = tokio::spawn(async move {
                    prober.probe(&target, &query, consistency, &matcher).await
                });
                (key, task)
            })
            .unzip();

        let outcomes = join_all(tasks).await;

        let mut results = BTreeMap::new();
        let mut diagnostics = BTreeMap::new();
        for (key, outcome) in keys.into_iter().zip(outcomes) {
            let probe = outcome.unwrap_or_else(|e| {
                tracing::error!("[Probe] task for {} did not complete: {}", key, e);
                RegionProbe::failed(format!("Probe task for {key} did not complete: {e}"))
            });
            results.insert(key.clone(), probe.result);
            diagnostics.insert(key, probe.diagnostics);
        }

        let report = ProbeReport { regions: results, diagnostics, consistency };
        tracing::info!(
            "📡 Latency report ({}): {}/{} regions answered",
            consistency,
            report.succeeded_count(),
            regions.len()
        );
        Ok(report)
    }
}

#[cfg(test)]
#[path = "comparator_tests.rs"]
mod tests;
