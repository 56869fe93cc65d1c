//! Regional latency probe.
//!
//! ```text
//! LatencyComparator ──spawn──▶ RegionProber (one per region)
//!        │                          │
//!        │                          ├─▶ RegionClientFactory::client_for(name, consistency)
//!        │                          ├─▶ RegionClient::run_query (timed)
//!        │                          └─▶ diagnostics::extract
//!        ◀──────── join_all ────────┘
//! ```

mod comparator;
pub mod diagnostics;
mod factory;
mod prober;

#[cfg(test)]
mod test_support;

pub use comparator::LatencyComparator;
pub use diagnostics::{extract, ExtractedDiagnostics, RegionMatcher};
pub use factory::{CosmosClientFactory, RegionClient, RegionClientFactory};
pub use prober::{RegionProbe, RegionProber, DIAGNOSTICS_HEADER, SERVICE_ENDPOINT_HEADER};
