//! Application State
//!
//! Everything a handler needs, built once at startup from [`AppConfig`].

use anyhow::Result;
use std::sync::Arc;

use geoprobe_client::{ClientConfig, CosmosClient};
use geoprobe_core::{CosmosClientFactory, LatencyComparator, MovieCatalog};
use geoprobe_types::AppConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub(crate) inner: Arc<AppStateInner>,
}

pub struct AppStateInner {
    pub config: AppConfig,
    pub comparator: LatencyComparator,
    pub catalog: MovieCatalog,
}

impl AppState {
    pub fn new(config: AppConfig, comparator: LatencyComparator, catalog: MovieCatalog) -> Self {
        Self { inner: Arc::new(AppStateInner { config, comparator, catalog }) }
    }

    /// Wire the document service clients described by `config`.
    pub fn from_config(config: AppConfig) -> Result<Self> {
        let factory = Arc::new(CosmosClientFactory::from_settings(&config.cosmos));
        let comparator = LatencyComparator::from_config(factory, &config.probe)?;

        let writer = CosmosClient::new(ClientConfig::from_settings(&config.cosmos))?;
        let catalog = MovieCatalog::new(Arc::new(writer), config.cosmos.partition_key_path.clone());

        Ok(Self::new(config, comparator, catalog))
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    pub fn comparator(&self) -> &LatencyComparator {
        &self.inner.comparator
    }

    pub fn catalog(&self) -> &MovieCatalog {
        &self.inner.catalog
    }
}
