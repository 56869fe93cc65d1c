//! geoprobe - Headless Daemon
//!
//! A Rust HTTP server that:
//! - Compares read latency across service regions on /latency-report
//! - Accepts new movie records on /movies
//! - Serves the web UI as static files for everything else
//!
//! Access via: http://localhost:5000

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

mod api;
mod cli;
mod commands;
mod router;
mod server_utils;
mod state;

#[cfg(test)]
mod test_helpers;

use cli::{Cli, Commands};
use geoprobe_core::modules::{config as core_config, logger};
use geoprobe_types::AppConfig;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is normal outside development.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logger::init_tracing(&cli.log_level).map_err(|e| anyhow::anyhow!(e))?;

    let mut config = core_config::load_config(cli.config.as_deref())?;
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => run_server(config).await,
        Commands::Probe { consistency, json } => {
            commands::handle_probe(&config, consistency, json).await
        },
        Commands::Config(cmd) => commands::handle_config_command(&config, cmd),
    }
}

async fn run_server(config: AppConfig) -> Result<()> {
    core_config::validate_config(&config)?;

    let addr = config.server.bind_address();
    info!("🚀 geoprobe starting on {}...", addr);

    let regions: Vec<String> = config.probe.regions.iter().map(|r| r.name.clone()).collect();
    let state = AppState::from_config(config)?;
    info!("✅ Application state initialized");
    info!("📡 Probing regions: {}", regions.join(", "));

    let app = router::build_router(state);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("🌐 Server listening on http://{}", addr);
    info!("📊 Latency report at http://{}/latency-report", addr);

    axum::serve(listener, app).with_graceful_shutdown(server_utils::shutdown_signal()).await?;

    info!("👋 Server stopped");
    Ok(())
}
