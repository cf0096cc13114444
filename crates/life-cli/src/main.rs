//! L.I.F.E. CLI
//!
//! Command-line front end for the adaptive trait engine.
//!
//! # Commands
//!
//! - `simulate`: Generate a deterministic synthetic batch document
//! - `batch`: Aggregate a batch document and report statistics
//! - `project`: Project an ad-hoc trait vector
//! - `update`: Apply a single linear or saturating update
//!
//! Exit codes: 0 success, 1 general error, 2 invalid configuration,
//! 3 invalid input, 4 I/O or serialization failure.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod document;
mod error;

/// L.I.F.E. adaptive trait engine
#[derive(Parser)]
#[command(name = "life-cli")]
#[command(version)]
#[command(about = "Simulate, update, project and aggregate adaptive traits")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a synthetic batch document
    Simulate(commands::simulate::SimulateArgs),
    /// Process a batch document
    ///
    /// Failing entities are reported and excluded from the statistics;
    /// the rest of the batch still runs.
    Batch(commands::batch::BatchArgs),
    /// Project trait values into normalized weights
    Project(commands::project::ProjectArgs),
    /// Apply one trait update
    Update(commands::update::UpdateArgs),
}

fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match cli.command {
        Commands::Simulate(args) => commands::simulate::handle_simulate(args),
        Commands::Batch(args) => commands::batch::handle_batch(args),
        Commands::Project(args) => commands::project::handle_project(args),
        Commands::Update(args) => commands::update::handle_update(args),
    };

    std::process::exit(exit_code);
}
