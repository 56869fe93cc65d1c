//! Typed error definitions for geoprobe.
//!
//! Each domain has its own error enum. All of them are:
//!
//! - **Serializable** for API responses via serde
//! - **Displayable** for logging via Display trait
//! - **Matchable** for error handling logic via enum variants

mod config;
mod probe;

pub use config::ConfigError;
pub use probe::ProbeError;
