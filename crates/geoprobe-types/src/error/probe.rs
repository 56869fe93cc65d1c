//! Probe orchestration errors.
//!
//! Per-region failures never show up here: they are reported as data inside
//! the probe report. These variants cover the cases where no report can be
//! produced at all.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised before any regional probe is dispatched.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum ProbeError {
    /// The region set is empty
    #[error("No regions configured for probing")]
    NoRegions,

    /// Two targets share the same region key
    #[error("Duplicate region key: {key}")]
    DuplicateRegion {
        /// Offending region key
        key: String,
    },

    /// A region key collides with a top-level report field
    #[error("Region key '{key}' is reserved by the report format")]
    ReservedRegionKey {
        /// Offending region key
        key: String,
    },

    /// A consistency mode string did not match any supported level
    #[error("Unsupported consistency mode: {value}")]
    UnsupportedConsistency {
        /// Raw value supplied by the caller
        value: String,
    },
}
