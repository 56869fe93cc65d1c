use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "geoprobe",
    about = "geoprobe - multi-region read latency probe",
    version = env!("CARGO_PKG_VERSION"),
    author,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short, long, global = true, env = "GEOPROBE_CONFIG", help = "Path to a JSON config file")]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Override the listen port")]
    pub port: Option<u16>,

    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Start the HTTP server (default if no command specified)")]
    Serve,

    #[command(about = "Run one latency comparison and print the report")]
    Probe {
        #[arg(long, help = "Consistency mode (Strong, BoundedStaleness, Session, ConsistentPrefix, Eventual)")]
        consistency: Option<String>,

        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },

    #[command(subcommand, about = "Inspect configuration")]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    #[command(about = "Show the effective configuration (key masked)")]
    Show {
        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },
}
