//! Region-pinned client boundary.
//!
//! The probe only needs "run this query and hand back resources, headers and
//! diagnostics". Everything behind that is swappable, which is how the tests
//! simulate slow and failing regions.

use async_trait::async_trait;

use geoprobe_client::{ClientConfig, ClientError, CosmosClient, QueryResponse};
use geoprobe_types::{ConsistencyMode, CosmosConfig, Query};

/// A client whose reads are routed to a single preferred region.
#[async_trait]
pub trait RegionClient: Send + Sync {
    async fn run_query(&self, query: &Query) -> Result<QueryResponse, ClientError>;
}

/// Supplies one fresh client per (region, consistency) pair.
pub trait RegionClientFactory: Send + Sync {
    fn client_for(
        &self,
        region_name: &str,
        consistency: ConsistencyMode,
    ) -> Result<Box<dyn RegionClient>, ClientError>;
}

#[async_trait]
impl RegionClient for CosmosClient {
    async fn run_query(&self, query: &Query) -> Result<QueryResponse, ClientError> {
        CosmosClient::run_query(self, query).await
    }
}

/// Builds [`CosmosClient`]s from a shared base configuration.
#[derive(Debug, Clone)]
pub struct CosmosClientFactory {
    base: ClientConfig,
}

impl CosmosClientFactory {
    pub fn new(base: ClientConfig) -> Self {
        Self { base }
    }

    pub fn from_settings(settings: &CosmosConfig) -> Self {
        Self::new(ClientConfig::from_settings(settings))
    }

    pub fn base(&self) -> &ClientConfig {
        &self.base
    }
}

impl RegionClientFactory for CosmosClientFactory {
    fn client_for(
        &self,
        region_name: &str,
        consistency: ConsistencyMode,
    ) -> Result<Box<dyn RegionClient>, ClientError> {
        let client = CosmosClient::new(self.base.pinned_to(region_name, consistency))?;
        Ok(Box::new(client))
    }
}
