//! # geoprobe Core
//!
//! Multi-region latency probe.
//!
//! ```text
//! geoprobe-core/src/
//! ├── probe/
//! │   ├── diagnostics.rs  # payload normalization + first-match region attribution
//! │   ├── prober.rs       # one timed read against one region, never fails
//! │   ├── comparator.rs   # concurrent fan-out + join barrier + report assembly
//! │   └── factory.rs      # region-pinned client boundary
//! ├── catalog.rs          # movie creation glue
//! └── modules/
//!     ├── config.rs       # file + environment configuration loading
//!     └── logger.rs       # tracing subscriber setup
//! ```

#![cfg_attr(test, allow(clippy::panic, clippy::float_cmp))]

pub mod catalog;
pub mod error;
pub mod modules;
pub mod probe;

// Re-export commonly used types
pub use catalog::{DocumentStore, MovieCatalog};
pub use error::{AppError, AppResult};
pub use probe::{
    CosmosClientFactory, LatencyComparator, RegionClient, RegionClientFactory, RegionMatcher,
    RegionProbe, RegionProber,
};
