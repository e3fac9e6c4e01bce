//! WarPlan - WarEra company allocation planner.
//!
//! # Usage
//!
//! ```bash
//! # Damage loadout for 10 companies
//! cargo run -p warplan_cli -- plan damage 10
//!
//! # Eco plan as JSON, with a custom catalog
//! cargo run -p warplan_cli -- plan eco 8 --catalog catalog.ron --json
//!
//! # Validate a catalog file
//! cargo run -p warplan_cli -- validate catalog.ron
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use warplan_cli::loader::load_catalog;
use warplan_core::prelude::*;

#[derive(Parser)]
#[command(name = "warplan")]
#[command(about = "Company allocation planner for WarEra")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute an allocation plan
    Plan {
        /// Allocation mode: "eco" or "damage" (case-insensitive)
        mode: String,
        /// Number of companies to allocate
        companies: u32,
        /// Path to a RON catalog file (defaults to the built-in catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Emit the plan as JSON instead of a text summary
        #[arg(long)]
        json: bool,
    },
    /// Validate a RON catalog file
    Validate {
        /// Path to the catalog file
        path: PathBuf,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Plan {
            mode,
            companies,
            catalog,
            json,
        } => {
            let policy: Policy = match mode.parse() {
                Ok(policy) => policy,
                Err(e) => {
                    tracing::error!("{e}");
                    std::process::exit(1);
                }
            };
            let catalog = match load_catalog(catalog.as_deref()) {
                Ok(catalog) => catalog,
                Err(e) => {
                    tracing::error!("{e}");
                    std::process::exit(1);
                }
            };

            let plan = match policy {
                Policy::Damage => optimize_damage(&catalog, companies),
                Policy::Eco => optimize_eco(&catalog, companies),
            };

            if json {
                match serde_json::to_string_pretty(&plan) {
                    Ok(out) => println!("{out}"),
                    Err(e) => {
                        tracing::error!("Failed to serialize plan: {e}");
                        std::process::exit(1);
                    }
                }
            } else {
                println!("{}", PlanSummary::new(&plan));
            }
        }
        Commands::Validate { path } => match load_catalog(Some(&path)) {
            Ok(_) => tracing::info!("Validation passed"),
            Err(e) => {
                tracing::error!("Validation failed: {e}");
                std::process::exit(1);
            }
        },
    }
}
