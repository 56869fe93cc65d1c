//! Domain models for geoprobe.

pub mod config;
mod consistency;
mod movie;
mod probe;
mod query;
mod region;

pub use config::{AppConfig, CosmosConfig, ProbeConfig, ServerConfig};
pub use consistency::ConsistencyMode;
pub use movie::{MovieDocument, NewMovie};
pub use probe::{
    DiagnosticPayload, DiagnosticRecord, ProbeReport, RegionResult, ServingRegion,
    RESERVED_REPORT_KEYS,
};
pub use query::{Query, QueryParameter};
pub use region::{default_regions, validate_region_set, RegionTarget};
