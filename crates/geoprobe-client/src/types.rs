//! Client configuration and response types.

use serde::Deserialize;
use std::collections::HashMap;

use geoprobe_types::{ConsistencyMode, CosmosConfig};

/// Configuration for one document service client.
///
/// A client routes reads to exactly one preferred-location list; build one
/// client per region to pin reads to that region.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Global account endpoint.
    pub endpoint: String,
    /// Base64 master key.
    pub key: String,
    pub database_id: String,
    pub container_id: String,
    /// Appended to the user agent.
    pub user_agent_suffix: String,
    /// Read regions in priority order; empty reads from the global endpoint.
    pub preferred_locations: Vec<String>,
    /// Consistency level sent with every read.
    pub consistency: ConsistencyMode,
    /// Transport timeout; `None` leaves requests unbounded.
    pub timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://localhost:8081/".to_string(),
            key: String::new(),
            database_id: "MovieDB".to_string(),
            container_id: "Movies".to_string(),
            user_agent_suffix: "MovieAPI".to_string(),
            preferred_locations: Vec::new(),
            consistency: ConsistencyMode::Session,
            timeout_secs: None,
        }
    }
}

impl ClientConfig {
    /// Base client configuration from application settings.
    pub fn from_settings(settings: &CosmosConfig) -> Self {
        Self {
            endpoint: settings.endpoint.clone(),
            key: settings.key.clone(),
            database_id: settings.database_id.clone(),
            container_id: settings.container_id.clone(),
            user_agent_suffix: settings.user_agent_suffix.clone(),
            preferred_locations: Vec::new(),
            consistency: ConsistencyMode::default(),
            timeout_secs: settings.request_timeout_secs,
        }
    }

    /// Copy of this configuration pinned to a single preferred region.
    #[must_use]
    pub fn pinned_to(&self, region_name: &str, consistency: ConsistencyMode) -> Self {
        Self {
            preferred_locations: vec![region_name.to_string()],
            consistency,
            ..self.clone()
        }
    }
}

/// Fully materialized query result.
#[derive(Debug, Clone)]
pub struct QueryResponse {
    /// Every document across all pages.
    pub resources: Vec<serde_json::Value>,
    /// Headers of the first page, lower-cased names.
    pub headers: HashMap<String, String>,
    /// Client-side request statistics.
    pub diagnostics: Option<serde_json::Value>,
}

impl QueryResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }
}

/// One page of a query response.
#[derive(Debug, Deserialize)]
pub(crate) struct QueryPage {
    #[serde(rename = "Documents", default)]
    pub documents: Vec<serde_json::Value>,
}

/// Account metadata returned by the global endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseAccount {
    #[serde(default)]
    pub readable_locations: Vec<AccountLocation>,
    #[serde(default)]
    pub writable_locations: Vec<AccountLocation>,
}

/// A regional endpoint advertised by the account.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountLocation {
    pub name: String,
    pub database_account_endpoint: String,
}

impl DatabaseAccount {
    /// Endpoint of the first preferred location the account can read from.
    pub fn read_endpoint_for(&self, preferred: &[String]) -> Option<&str> {
        preferred.iter().find_map(|wanted| {
            self.readable_locations
                .iter()
                .find(|loc| loc.name.eq_ignore_ascii_case(wanted))
                .map(|loc| loc.database_account_endpoint.as_str())
        })
    }
}

/// Error body returned by the service.
#[derive(Debug, Deserialize)]
pub(crate) struct ServiceErrorBody {
    pub code: Option<String>,
    pub message: Option<String>,
}
