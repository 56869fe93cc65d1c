//! Configuration loading.
//!
//! Order of precedence: built-in defaults, then the optional JSON file, then
//! environment variables.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use validator::Validate;

use geoprobe_types::models::validate_region_set;
use geoprobe_types::{AppConfig, ConfigError};

pub const ENV_ENDPOINT: &str = "COSMOS_ENDPOINT";
pub const ENV_KEY: &str = "COSMOS_KEY";
pub const ENV_DATABASE: &str = "COSMOS_DATABASE";
pub const ENV_CONTAINER: &str = "COSMOS_CONTAINER";
pub const ENV_PORT: &str = "GEOPROBE_PORT";
pub const ENV_HOST: &str = "GEOPROBE_HOST";
pub const ENV_STATIC_DIR: &str = "GEOPROBE_STATIC_DIR";
pub const ENV_PROBE_TIMEOUT_MS: &str = "GEOPROBE_PROBE_TIMEOUT_MS";

/// Load configuration from `path` (if any) and the process environment.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    load_config_with(path, |name| std::env::var(name).ok())
}

/// Same as [`load_config`] with an injectable environment lookup.
pub fn load_config_with<F>(path: Option<&Path>, lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match path {
        Some(path) => read_config_file(path)?,
        None => AppConfig::new(),
    };
    apply_env_overrides(&mut config, lookup)?;
    Ok(config)
}

fn read_config_file(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound { path: path.display().to_string() });
    }
    let content = fs::read_to_string(path).map_err(|e| ConfigError::ParseError {
        message: format!("Failed to read {}: {}", path.display(), e),
    })?;
    serde_json::from_str(&content).map_err(|e| ConfigError::from_json_error(&e))
}

/// Overlay environment variables onto `config`. Empty values are ignored.
pub fn apply_env_overrides<F>(config: &mut AppConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    if let Some(v) = get(ENV_ENDPOINT) {
        config.cosmos.endpoint = v;
    }
    if let Some(v) = get(ENV_KEY) {
        config.cosmos.key = v;
    }
    if let Some(v) = get(ENV_DATABASE) {
        config.cosmos.database_id = v;
    }
    if let Some(v) = get(ENV_CONTAINER) {
        config.cosmos.container_id = v;
    }
    if let Some(v) = get(ENV_HOST) {
        config.server.host = v;
    }
    if let Some(v) = get(ENV_STATIC_DIR) {
        config.server.static_dir = v;
    }
    if let Some(v) = get(ENV_PORT) {
        config.server.port = parse_override(ENV_PORT, &v)?;
    }
    if let Some(v) = get(ENV_PROBE_TIMEOUT_MS) {
        config.probe.timeout_ms = Some(parse_override(ENV_PROBE_TIMEOUT_MS, &v)?);
    }
    Ok(())
}

fn parse_override<T: FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::InvalidOverride { name: name.to_string(), value: value.to_string() })
}

/// Checks everything the daemon needs before it can talk to the service.
pub fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.cosmos.endpoint.trim().is_empty() {
        return Err(ConfigError::MissingSetting { name: ENV_ENDPOINT.to_string() });
    }
    if config.cosmos.key.trim().is_empty() {
        return Err(ConfigError::MissingSetting { name: ENV_KEY.to_string() });
    }
    config.validate().map_err(|e| ConfigError::from_validation_errors(&e))?;
    validate_region_set(&config.probe.regions).map_err(|e| ConfigError::ValidationError {
        field: "probe.regions".to_string(),
        message: e.to_string(),
    })
}
