//! Document service connection settings.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Connection settings shared by every regional client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct CosmosConfig {
    /// Global account endpoint (e.g. `https://movies.documents.azure.com:443/`)
    #[serde(default)]
    #[validate(length(min = 1_u64))]
    pub endpoint: String,
    /// Base64 master key
    #[serde(default)]
    #[validate(length(min = 1_u64))]
    pub key: String,
    #[serde(default = "default_database_id")]
    #[validate(length(min = 1_u64))]
    pub database_id: String,
    #[serde(default = "default_container_id")]
    #[validate(length(min = 1_u64))]
    pub container_id: String,
    /// Partition key path of the container (e.g. `/movie`)
    #[serde(default = "default_partition_key_path")]
    #[validate(length(min = 2_u64))]
    pub partition_key_path: String,
    /// Appended to the client user agent
    #[serde(default = "default_user_agent_suffix")]
    pub user_agent_suffix: String,
    /// Transport-level request timeout; `None` leaves requests unbounded
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for CosmosConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            key: String::new(),
            database_id: default_database_id(),
            container_id: default_container_id(),
            partition_key_path: default_partition_key_path(),
            user_agent_suffix: default_user_agent_suffix(),
            request_timeout_secs: None,
        }
    }
}

fn default_database_id() -> String {
    "MovieDB".to_string()
}

fn default_container_id() -> String {
    "Movies".to_string()
}

fn default_partition_key_path() -> String {
    "/movie".to_string()
}

fn default_user_agent_suffix() -> String {
    "MovieAPI".to_string()
}
