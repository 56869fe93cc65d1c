//! Unified error types for geoprobe core.

use serde::Serialize;
use thiserror::Error;

use geoprobe_client::ClientError;
use geoprobe_types::{ConfigError, ProbeError};

/// Main error type for geoprobe core operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AppError {
    /// Configuration loading or validation failed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The comparison could not be dispatched at all.
    #[error("Probe error: {0}")]
    Probe(#[from] ProbeError),

    /// Document service call failed.
    #[error("{0}")]
    Client(#[from] ClientError),

    /// File system I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Caller input rejected before reaching the service.
    #[error("{0}")]
    Validation(String),
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}

/// Result type alias for geoprobe core operations.
pub type AppResult<T> = Result<T, AppError>;
