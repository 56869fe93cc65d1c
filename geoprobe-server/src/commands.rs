use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use std::sync::Arc;

use geoprobe_core::modules::config::validate_config;
use geoprobe_core::{CosmosClientFactory, LatencyComparator};
use geoprobe_types::{AppConfig, ConsistencyMode, ProbeReport, RegionTarget};

use crate::cli::ConfigCommands;

pub async fn handle_probe(config: &AppConfig, consistency: Option<String>, json: bool) -> Result<()> {
    validate_config(config)?;
    let consistency = consistency.map(|c| c.parse::<ConsistencyMode>()).transpose()?;

    let factory = Arc::new(CosmosClientFactory::from_settings(&config.cosmos));
    let comparator = LatencyComparator::from_config(factory, &config.probe)?;
    let report = comparator.compare(consistency).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", format!("Latency report ({})", report.consistency).cyan().bold());
    println!("{}", report_table(&report, comparator.regions()));
    println!("\n{}/{} regions answered", report.succeeded_count(), report.regions.len());
    Ok(())
}

fn report_table(report: &ProbeReport, regions: &[RegionTarget]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Region", "Status", "Latency", "Served By", "Endpoint"]);

    for target in regions {
        let Some(result) = report.region(&target.key) else {
            continue;
        };
        let status = if result.success {
            Cell::new("OK").fg(Color::Green)
        } else {
            Cell::new(result.error.as_deref().unwrap_or("Failed")).fg(Color::Red)
        };
        let latency = result.latency_ms.map_or_else(|| "-".to_string(), |ms| format!("{ms} ms"));

        table.add_row(vec![
            Cell::new(&target.name),
            status,
            Cell::new(latency),
            Cell::new(result.region_served.as_str()),
            Cell::new(result.endpoint.as_deref().unwrap_or("-")),
        ]);
    }
    table
}

pub fn handle_config_command(config: &AppConfig, cmd: ConfigCommands) -> Result<()> {
    match cmd {
        ConfigCommands::Show { json } => show_config(config, json),
    }
}

fn show_config(config: &AppConfig, json: bool) -> Result<()> {
    let config = config.redacted();

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    println!("{}", "Document Service:".cyan().bold());
    println!("  Endpoint: {}", or_unset(&config.cosmos.endpoint));
    println!("  Key: {}", or_unset(&config.cosmos.key));
    println!("  Database: {}", config.cosmos.database_id);
    println!("  Container: {}", config.cosmos.container_id);
    println!("{}", "Probe:".cyan().bold());
    for region in &config.probe.regions {
        println!("  {} -> {}", region.key, region.name);
    }
    println!("  Default consistency: {}", config.probe.default_consistency);
    println!(
        "  Timeout: {}",
        config.probe.timeout_ms.map_or_else(|| "none".to_string(), |ms| format!("{ms} ms"))
    );
    println!("{}", "Server:".cyan().bold());
    println!("  Listen: {}", config.server.bind_address());
    println!("  Static dir: {}", config.server.static_dir);
    Ok(())
}

fn or_unset(value: &str) -> String {
    if value.is_empty() {
        "(unset)".yellow().to_string()
    } else {
        value.to_string()
    }
}
