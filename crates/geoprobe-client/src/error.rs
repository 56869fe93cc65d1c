//! Error types for the document service client.

use thiserror::Error;

/// Errors that can occur when talking to the document service.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The configured master key is not valid base64.
    #[error("Invalid master key: {0}")]
    InvalidKey(String),

    /// The configured or discovered endpoint is not a valid URL.
    #[error("Invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint {
        /// Endpoint as configured or discovered.
        endpoint: String,
        /// Parse failure.
        reason: String,
    },

    /// Failed to establish a connection or send the request.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// HTTP request failed.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Service returned an invalid or unparseable response.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Service returned a non-success status.
    #[error("Service error ({status}): {message}")]
    ServiceError {
        /// HTTP status code.
        status: u16,
        /// Service error code, when the body carried one.
        code: Option<String>,
        /// Error message from the service.
        message: String,
    },

    /// Request body could not be serialized.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Build a [`ClientError`] from a transport failure, separating
    /// connect/timeout problems from everything else.
    pub(crate) fn from_transport(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            ClientError::Connection(e.to_string())
        } else {
            ClientError::Request(e)
        }
    }
}
