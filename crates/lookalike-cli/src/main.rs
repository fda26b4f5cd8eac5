//! Lookalike CLI
//!
//! Command-line interface for visual snapshot reconciliation

use clap::{Parser, Subcommand, ValueEnum};
use lookalike_core::logging_facility::{self, Profile};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "lookalike")]
#[command(about = "Lookalike - visual snapshot reconciliation", long_about = None)]
struct Cli {
    /// Settings file (defaults to ./lookalike.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit structured logs to stderr
    #[arg(long, global = true, value_enum)]
    log_profile: Option<LogProfile>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogProfile {
    Development,
    Production,
}

impl From<LogProfile> for Profile {
    fn from(profile: LogProfile) -> Self {
        match profile {
            LogProfile::Development => Profile::Development,
            LogProfile::Production => Profile::Production,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Reconcile one screenshot against its baseline
    Reconcile(commands::reconcile::ReconcileArgs),
    /// Run a JSON reconcile request (stdin or file) and print the JSON result
    Task(commands::task::TaskArgs),
    /// Print the diff policy the given match options produce
    Policy(commands::policy::PolicyArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Some(profile) = cli.log_profile {
        logging_facility::init(profile.into());
    }

    let config = cli.config.as_deref();
    let result = match cli.command {
        Commands::Reconcile(args) => commands::reconcile::execute(args, config),
        Commands::Task(args) => commands::task::execute(args, config),
        Commands::Policy(args) => commands::policy::execute(args, config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
