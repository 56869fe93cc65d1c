//! In-memory region clients for probe tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use geoprobe_client::{ClientError, QueryResponse};
use geoprobe_types::{ConsistencyMode, Query};

use super::factory::{RegionClient, RegionClientFactory};

#[derive(Clone)]
pub(crate) enum Behavior {
    Respond { delay: Duration, response: QueryResponse },
    Fail { delay: Duration, message: String },
    Hang,
    Panic(String),
    RejectClient(String),
}

struct FakeClient {
    behavior: Behavior,
}

#[async_trait]
impl RegionClient for FakeClient {
    async fn run_query(&self, _query: &Query) -> Result<QueryResponse, ClientError> {
        match &self.behavior {
            Behavior::Respond { delay, response } => {
                tokio::time::sleep(*delay).await;
                Ok(response.clone())
            },
            Behavior::Fail { delay, message } => {
                tokio::time::sleep(*delay).await;
                Err(ClientError::Connection(message.clone()))
            },
            Behavior::Hang => std::future::pending().await,
            Behavior::Panic(message) => panic!("{message}"),
            Behavior::RejectClient(_) => unreachable!("client is never built"),
        }
    }
}

/// Factory keyed by region name; records every client it hands out.
#[derive(Default)]
pub(crate) struct FakeFactory {
    behaviors: HashMap<String, Behavior>,
    calls: Mutex<Vec<(String, ConsistencyMode)>>,
}

impl FakeFactory {
    pub(crate) fn with(mut self, region_name: &str, behavior: Behavior) -> Self {
        self.behaviors.insert(region_name.to_string(), behavior);
        self
    }

    pub(crate) fn calls(&self) -> Vec<(String, ConsistencyMode)> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl RegionClientFactory for FakeFactory {
    fn client_for(
        &self,
        region_name: &str,
        consistency: ConsistencyMode,
    ) -> Result<Box<dyn RegionClient>, ClientError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((region_name.to_string(), consistency));
        }
        let behavior = self
            .behaviors
            .get(region_name)
            .cloned()
            .unwrap_or_else(|| Behavior::RejectClient(format!("no backend for {region_name}")));
        if let Behavior::RejectClient(message) = behavior {
            return Err(ClientError::Connection(message));
        }
        Ok(Box::new(FakeClient { behavior }))
    }
}

/// Healthy response whose diagnostics list `endpoint` as the only contact.
pub(crate) fn served_by(endpoint: &str, documents: Vec<serde_json::Value>) -> QueryResponse {
    QueryResponse {
        resources: documents,
        headers: HashMap::from([("x-ms-serviceendpoint".to_string(), endpoint.to_string())]),
        diagnostics: Some(serde_json::json!({
            "clientSideRequestStatistics": { "locationEndpointsContacted": [endpoint] }
        })),
    }
}

pub(crate) fn respond(response: QueryResponse) -> Behavior {
    Behavior::Respond { delay: Duration::ZERO, response }
}

pub(crate) const CENTRAL_INDIA_ENDPOINT: &str = "https://movies-centralindia.documents.azure.com:443/";
pub(crate) const WEST_US_3_ENDPOINT: &str = "https://movies-westus3.documents.azure.com:443/";
