//! Top-level application configuration.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{CosmosConfig, ProbeConfig, ServerConfig};

/// Full application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct AppConfig {
    /// Document service connection settings
    #[serde(default)]
    #[validate(nested)]
    pub cosmos: CosmosConfig,
    /// Latency probe settings
    #[serde(default)]
    #[validate(nested)]
    pub probe: ProbeConfig,
    /// HTTP daemon settings
    #[serde(default)]
    #[validate(nested)]
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy safe to print or return over the API.
    #[must_use]
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if !copy.cosmos.key.is_empty() {
            copy.cosmos.key = "********".to_string();
        }
        copy
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_fills_defaults() {
        let cfg: AppConfig =
            serde_json::from_str(r#"{"server": {"port": 8080}}"#).unwrap();
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.cosmos.database_id, "MovieDB");
        assert_eq!(cfg.probe.regions.len(), 2);
    }

    #[test]
    fn test_redacted_masks_key() {
        let mut cfg = AppConfig::new();
        cfg.cosmos.key = "c2VjcmV0".to_string();
        assert_eq!(cfg.redacted().cosmos.key, "********");
        assert_eq!(cfg.cosmos.key, "c2VjcmV0");
    }
}
