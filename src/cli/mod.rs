use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber;

pub mod commands;

/// NPM Download Statistics Proof Generator
#[derive(Parser)]
#[command(name = "npm-downloads-proof")]
#[command(about = "NPM Download Statistics Proof Generator")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the download total for a package over one date range
    Fetch(commands::fetch::FetchCommand),
    /// Multi-range download report (last 7 days, last 30 days, year to date)
    Report(commands::report::ReportCommand),
    /// Generate a single verifiable proof document (HTML or JSON)
    Proof(commands::proof::ProofCommand),
    /// Generate proof documents for a planned batch of date ranges
    Batch(commands::batch::BatchCommand),
}

pub async fn run() -> AppResult<()> {
    // Initialise tracing subscriber to capture info!() macros
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch(command) => command.run().await,
        Commands::Report(command) => command.run().await,
        Commands::Proof(command) => command.run().await,
        Commands::Batch(command) => command.run().await,
    }
}

/// Parse a YYYY-MM-DD date argument
pub fn parse_date(value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        AppError::InvalidArguments(format!("dates must be in YYYY-MM-DD format, got '{}'", value))
    })
}
