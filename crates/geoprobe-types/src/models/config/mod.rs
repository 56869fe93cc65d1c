//! Configuration models.
//!
//! Built once at process start and passed explicitly into the client factory,
//! the comparator and the HTTP layer.

mod app;
mod cosmos;
mod probe;
mod server;

pub use app::AppConfig;
pub use cosmos::CosmosConfig;
pub use probe::ProbeConfig;
pub use server::ServerConfig;
