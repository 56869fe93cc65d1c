//! Test helpers for geoprobe-server unit tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tempfile::TempDir;

use geoprobe_client::{ClientError, QueryResponse};
use geoprobe_core::{
    DocumentStore, LatencyComparator, MovieCatalog, RegionClient, RegionClientFactory,
    RegionProber,
};
use geoprobe_types::models::default_regions;
use geoprobe_types::{AppConfig, ConsistencyMode, Query};

use crate::state::AppState;

/// Canned outcome per region name; regions without an entry fail to connect.
#[derive(Default)]
pub struct CannedFactory {
    outcomes: HashMap<String, Result<QueryResponse, String>>,
}

impl CannedFactory {
    pub fn respond(mut self, region_name: &str, endpoint: &str) -> Self {
        let response = QueryResponse {
            resources: vec![serde_json::json!({"id": format!("from-{endpoint}")})],
            headers: HashMap::from([("x-ms-serviceendpoint".to_string(), endpoint.to_string())]),
            diagnostics: Some(serde_json::json!({
                "clientSideRequestStatistics": { "locationEndpointsContacted": [endpoint] }
            })),
        };
        self.outcomes.insert(region_name.to_string(), Ok(response));
        self
    }

    pub fn fail(mut self, region_name: &str, message: &str) -> Self {
        self.outcomes.insert(region_name.to_string(), Err(message.to_string()));
        self
    }
}

struct CannedClient(Result<QueryResponse, String>);

#[async_trait]
impl RegionClient for CannedClient {
    async fn run_query(&self, _query: &Query) -> Result<QueryResponse, ClientError> {
        self.0.clone().map_err(ClientError::Connection)
    }
}

impl RegionClientFactory for CannedFactory {
    fn client_for(
        &self,
        region_name: &str,
        _consistency: ConsistencyMode,
    ) -> Result<Box<dyn RegionClient>, ClientError> {
        let outcome = self
            .outcomes
            .get(region_name)
            .cloned()
            .unwrap_or_else(|| Err(format!("connect ECONNREFUSED ({region_name})")));
        Ok(Box::new(CannedClient(outcome)))
    }
}

pub fn healthy_factory() -> CannedFactory {
    CannedFactory::default()
        .respond("Central India", "https://movies-centralindia.documents.azure.com:443/")
        .respond("West US 3", "https://movies-westus3.documents.azure.com:443/")
}

/// Document store that keeps every write in memory.
#[derive(Default)]
pub struct RecordingStore {
    pub writes: Mutex<Vec<serde_json::Value>>,
    pub fail_with: Option<String>,
}

#[async_trait]
impl DocumentStore for RecordingStore {
    async fn create(
        &self,
        document: &serde_json::Value,
        _partition_key: &serde_json::Value,
    ) -> Result<serde_json::Value, ClientError> {
        if let Some(message) = &self.fail_with {
            return Err(ClientError::Connection(message.clone()));
        }
        if let Ok(mut writes) = self.writes.lock() {
            writes.push(document.clone());
        }
        Ok(document.clone())
    }
}

/// Create an `AppState` backed by in-memory fakes.
///
/// Returns `(AppState, TempDir)`; the temp dir is the static directory, keep it
/// alive for the test duration.
pub fn test_app_state(factory: CannedFactory, store: RecordingStore) -> (AppState, TempDir) {
    test_app_state_with(factory, Arc::new(store))
}

pub fn test_app_state_with(
    factory: CannedFactory,
    store: Arc<RecordingStore>,
) -> (AppState, TempDir) {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let mut config = AppConfig::default();
    config.server.static_dir = temp_dir.path().display().to_string();

    let comparator = LatencyComparator::new(
        RegionProber::new(Arc::new(factory)),
        default_regions(),
        Query::new(config.probe.query.clone()),
    );
    let catalog = MovieCatalog::new(store, config.cosmos.partition_key_path.clone());

    (AppState::new(config, comparator, catalog), temp_dir)
}
