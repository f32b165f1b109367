//! agency - build, inspect and estimate an agency roster
//!
//! Usage:
//!   agency elite --name <NAME> --location <LOC>     - Canned elite roster
//!   agency roster --config <PATH> [--complete ID:N] - Roster from a JSON/YAML file
//!   agency estimate --kind <KIND> [--difficulty <D>] - Resource estimate (all levels if omitted)

use std::path::PathBuf;

use agency_app::apply_completions;
use agency_app::config::RosterConfig;
use agency_app::report::{self, EstimateKind};
use agency_domain::{Agency, Difficulty, SystemClock};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "agency")]
#[command(about = "Agency - agents, objectives and resource estimates")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Debug logging (RUST_LOG still wins when set)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the elite agency (Alpha, Bravo, Charlie)
    Elite {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        location: String,
    },
    /// Load an agency from a roster file
    Roster {
        /// Path to a .json, .yaml or .yml roster
        #[arg(short, long)]
        config: PathBuf,
        /// Complete an objective before reporting (repeatable)
        #[arg(long = "complete", value_name = "AGENT_ID:INDEX")]
        complete: Vec<String>,
    },
    /// Show the resources an objective variant needs
    Estimate {
        #[arg(short, long, value_enum)]
        kind: EstimateKind,
        /// low, medium or high; every level when omitted
        #[arg(short, long)]
        difficulty: Option<Difficulty>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let clock = SystemClock;

    match cli.command {
        Commands::Elite { name, location } => {
            let agency = Agency::elite(name, location, &clock);
            print_agency(&agency, cli.json)
        }
        Commands::Roster { config, complete } => {
            let mut agency = RosterConfig::from_file(&config)?.build(&clock);
            apply_completions(&mut agency, &complete)?;
            print_agency(&agency, cli.json)
        }
        Commands::Estimate { kind, difficulty } => {
            let levels = match difficulty {
                Some(difficulty) => vec![difficulty],
                None => Difficulty::all().to_vec(),
            };
            for difficulty in levels {
                let estimate = kind.estimate(difficulty);
                if cli.json {
                    println!("{}", report::to_json(&estimate)?);
                } else {
                    println!(
                        "{} ({}): {}",
                        kind.name(),
                        difficulty,
                        report::render_estimate(&estimate)
                    );
                }
            }
            Ok(())
        }
    }
}

fn print_agency(agency: &Agency, json: bool) -> anyhow::Result<()> {
    info!(agency = agency.name(), agents = agency.len(), "agency ready");
    if json {
        println!("{}", report::to_json(agency)?);
    } else {
        print!("{}", report::render_agency(agency)?);
    }
    Ok(())
}
