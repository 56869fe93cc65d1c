#![doc = include_str!("../README.md")]

mod auth;
mod client;
mod error;
mod types;

pub use client::CosmosClient;
pub use error::ClientError;
pub use types::*;
