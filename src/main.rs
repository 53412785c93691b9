//! Impact Deflect - command-line host
//!
//! Runs the impact and mitigation operations against a scenario store
//! seeded from the built-in presets or a JSON file, and prints the
//! response body.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use impact_deflect::scenarios::SCENARIOS;
use impact_deflect::service::ImpactService;
use impact_deflect::{EngineConfig, MemoryStore};

#[derive(Parser, Debug)]
#[command(name = "impact-deflect")]
#[command(about = "Asteroid impact effects and deflection strategy assessment")]
struct Cli {
    /// JSON array of scenario records (defaults to the built-in presets)
    #[arg(long, global = true)]
    scenarios: Option<PathBuf>,

    /// TOML file overriding engine constants
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write persisted result rows to this JSON file
    #[arg(long, global = true)]
    results: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute impact effects for a scenario
    Impact { scenario_id: String },
    /// Rank deflection strategies for a scenario
    Mitigate { scenario_id: String },
    /// List built-in scenarios
    Presets,
}

#[derive(Clone, Copy, Debug)]
enum Operation {
    Impact,
    Mitigate,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "impact_deflect=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let (operation, scenario_id) = match &cli.command {
        Command::Presets => {
            print_presets();
            return ExitCode::SUCCESS;
        }
        Command::Impact { scenario_id } => (Operation::Impact, scenario_id.as_str()),
        Command::Mitigate { scenario_id } => (Operation::Mitigate, scenario_id.as_str()),
    };

    let config = match &cli.config {
        Some(path) => match EngineConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                error!("Failed to load config {}: {e}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => EngineConfig::default(),
    };

    let store = match &cli.scenarios {
        Some(path) => match MemoryStore::load(path) {
            Ok(store) => {
                info!("Loaded scenarios from {}", path.display());
                store
            }
            Err(e) => {
                error!("Failed to load scenarios {}: {e}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => MemoryStore::with_presets(),
    };

    let mut service = ImpactService::new(store, config);
    let body = serde_json::json!({ "scenarioId": scenario_id }).to_string();
    let response = match operation {
        Operation::Impact => service.handle_compute_impact(&body),
        Operation::Mitigate => service.handle_compare_mitigation(&body),
    };

    match serde_json::to_string_pretty(&response.body) {
        Ok(body) => println!("{body}"),
        Err(e) => error!("Failed to encode response: {e}"),
    }

    if let Some(path) = &cli.results {
        if let Err(e) = service.store().dump(path) {
            error!("Failed to write results {}: {e}", path.display());
            return ExitCode::FAILURE;
        }
    }

    if response.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn print_presets() {
    for preset in SCENARIOS {
        println!(
            "{:<12} {:<20} {:>9.0} m {:>6.0} kg/m³ {:>5.1} km/s  {}",
            preset.id,
            preset.name,
            preset.diameter_meters,
            preset.density_kg_m3,
            preset.velocity_km_s,
            preset.description
        );
    }
}
