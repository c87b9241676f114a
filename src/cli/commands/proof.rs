use crate::cli::parse_date;
use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::registry::{RegistryClient, StatsSource};
use crate::render::{format_number, OutputFormat, ReportRenderer};
use crate::report;
use crate::types::RangeSpec;
use chrono::Utc;
use clap::Args;
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

/// Generate a single verifiable proof document
#[derive(Args)]
pub struct ProofCommand {
    /// NPM package name
    package: String,

    /// Range start date (YYYY-MM-DD)
    start: String,

    /// Range end date (YYYY-MM-DD)
    end: String,

    /// Output format of the proof document
    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,

    /// Also fetch the daily series and embed weekly/monthly charts
    #[arg(long)]
    charts: bool,

    /// Output directory (overrides config.toml)
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

impl ProofCommand {
    pub async fn run(&self) -> AppResult<()> {
        let start = parse_date(&self.start)?;
        let end = parse_date(&self.end)?;
        if start > end {
            return Err(AppError::InvalidArguments(format!(
                "start date {} is after end date {}",
                start, end
            )));
        }

        let config = AppConfig::load().map_err(|e| AppError::Config(e.to_string()))?;
        let output_dir = self
            .output_dir
            .clone()
            .unwrap_or(config.report.output_dir.clone());
        let client = RegistryClient::new(&config.registry)?;

        println!("Fetching download statistics for {}...", self.package);
        println!("Period: {} to {}\n", start, end);

        let range = RangeSpec::new(start, end, format!("{} to {}", start, end));
        let total = client.point_total(&self.package, start, end).await?;

        // Charts are best-effort: a point total without a series still
        // makes a valid proof, just without the chart section
        let daily = if self.charts {
            match client.daily_series(&self.package, start, end).await {
                Ok(series) => Some(series),
                Err(e) => {
                    warn!("Daily series fetch failed, proof will have no charts: {}", e);
                    None
                }
            }
        } else {
            None
        };

        let model = report::build(&self.package, &range, total, daily, Utc::now())?;
        println!(
            "Successfully fetched data: {} downloads\n",
            format_number(model.total.downloads)
        );

        let rendered = ReportRenderer::render(&model, self.format)?;
        let path = output_dir.join(ReportRenderer::proof_filename(&model, self.format));
        fs::write(&path, rendered)?;
        info!("Proof written to {}", path.display());

        println!("Proof document generated: {}", path.display());
        println!("\nProof Details:");
        println!("  Package: {}", model.package);
        println!("  Period: {} to {}", model.range.start, model.range.end);
        println!("  Downloads: {}", format_number(model.total.downloads));
        println!("  Signature Hash: {}...", model.token.short());
        Ok(())
    }
}
