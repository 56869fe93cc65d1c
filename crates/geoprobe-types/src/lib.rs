//! # geoprobe Types
//!
//! Core types, models, and error definitions for the geoprobe workspace.
//!
//! - **`error`** - Typed error hierarchy for configuration and probe orchestration
//! - **`models`** - Domain models (regions, consistency modes, probe reports, movies, config)
//!
//! ## Architecture Role
//!
//! `geoprobe-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!              geoprobe-types (this crate)
//!                      │
//!          ┌───────────┴───────────┐
//!          ▼                       ▼
//!   geoprobe-client ──────▶ geoprobe-core
//!                                  │
//!                                  ▼
//!                          geoprobe-server
//! ```
//!
//! All types are designed to be:
//! - **Serializable** via serde for the HTTP API
//! - **Clone** for cheap sharing across async boundaries
//! - **PartialEq** for testing and comparison

pub mod error;
pub mod models;

// Re-export error types for convenience
pub use error::{ConfigError, ProbeError};

// Re-export core model types
pub use models::{
    AppConfig, ConsistencyMode, CosmosConfig, DiagnosticPayload, DiagnosticRecord, MovieDocument,
    NewMovie, ProbeConfig, ProbeReport, Query, QueryParameter, RegionResult, RegionTarget,
    ServerConfig, ServingRegion,
};
