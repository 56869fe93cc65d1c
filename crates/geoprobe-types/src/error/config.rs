//! Configuration-related errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum ConfigError {
    /// Config file not found at expected path
    #[error("Config not found: {path}")]
    NotFound {
        /// Filesystem path where config was expected
        path: String,
    },

    /// Config file parse error
    #[error("Config parse error: {message}")]
    ParseError {
        /// Description of the parse failure
        message: String,
    },

    /// Config validation error (invalid values)
    #[error("Config validation error for {field}: {message}")]
    ValidationError {
        /// Name of the field that failed validation
        field: String,
        /// Description of the validation failure
        message: String,
    },

    /// A required setting was neither in the file nor in the environment
    #[error("Missing required setting: {name}")]
    MissingSetting {
        /// Environment variable or config key name
        name: String,
    },

    /// An environment override could not be parsed
    #[error("Invalid value for {name}: {value}")]
    InvalidOverride {
        /// Environment variable name
        name: String,
        /// Raw value that failed to parse
        value: String,
    },
}

impl ConfigError {
    /// Create a parse error from a serde_json error.
    pub fn from_json_error(e: &serde_json::Error) -> Self {
        Self::ParseError { message: e.to_string() }
    }

    /// Create a validation error from validator output.
    pub fn from_validation_errors(e: &validator::ValidationErrors) -> Self {
        let field = e
            .field_errors()
            .keys()
            .next()
            .map_or_else(|| "config".to_string(), |k| k.to_string());
        Self::ValidationError { field, message: e.to_string() }
    }
}
