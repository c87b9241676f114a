use crate::cli::parse_date;
use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::planner;
use crate::registry::{RegistryClient, StatsSource};
use crate::render::{OutputFormat, ReportRenderer};
use crate::report;
use crate::types::RangeSpec;
use chrono::Utc;
use clap::{Args, Subcommand};
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

/// Generate proof documents for a planned batch of date ranges
#[derive(Args)]
pub struct BatchCommand {
    /// NPM package name
    package: String,

    #[command(subcommand)]
    mode: BatchMode,

    /// Output format for every proof in the batch
    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,

    /// Fetch daily series and embed charts in every proof
    #[arg(long)]
    charts: bool,

    /// Output directory (overrides config.toml)
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

/// Range planning strategies
#[derive(Subcommand)]
pub enum BatchMode {
    /// Rolling 7-day windows ending today
    Weekly {
        /// Number of weeks
        #[arg(default_value_t = 4)]
        count: usize,
    },
    /// Rolling calendar months ending today (current month is partial)
    Monthly {
        /// Number of months
        #[arg(default_value_t = 3)]
        count: usize,
    },
    /// Explicit start/end date pairs (YYYY-MM-DD)
    Custom {
        #[arg(num_args = 1.., value_name = "START END")]
        dates: Vec<String>,
    },
}

impl BatchCommand {
    pub async fn run(&self) -> AppResult<()> {
        let today = Utc::now().date_naive();
        let plan = self.plan(today)?;

        let config = AppConfig::load().map_err(|e| AppError::Config(e.to_string()))?;
        let output_dir = self
            .output_dir
            .clone()
            .unwrap_or(config.report.output_dir.clone());
        let client = RegistryClient::new(&config.registry)?;

        println!(
            "Generating {} proof(s) for {}...\n",
            plan.len(),
            self.package
        );

        let mut generated: Vec<PathBuf> = Vec::new();
        let mut failed = 0usize;

        // One range failing must not abort the batch; report and continue
        for range in &plan {
            println!("{}: {} to {}", range.label, range.start, range.end);
            match self.generate_one(&client, range, &output_dir).await {
                Ok(path) => {
                    println!("  Generated {}\n", path.display());
                    generated.push(path);
                }
                Err(e) => {
                    warn!("Proof generation failed for {}: {}", range.label, e);
                    println!("  Failed to generate proof: {}\n", e);
                    failed += 1;
                }
            }
        }

        println!("{}", "=".repeat(70));
        println!(
            "Generated {} proof document(s), {} failed",
            generated.len(),
            failed
        );
        println!("{}", "=".repeat(70));
        if !generated.is_empty() {
            println!("\nGenerated files:");
            for path in &generated {
                println!("  - {}", path.display());
            }
        }
        Ok(())
    }

    fn plan(&self, today: chrono::NaiveDate) -> AppResult<Vec<RangeSpec>> {
        match &self.mode {
            BatchMode::Weekly { count } => Ok(planner::plan_weekly(today, *count)),
            BatchMode::Monthly { count } => Ok(planner::plan_monthly(today, *count)),
            BatchMode::Custom { dates } => {
                let parsed: AppResult<Vec<_>> = dates.iter().map(|d| parse_date(d)).collect();
                planner::plan_custom(&parsed?)
            }
        }
    }

    async fn generate_one(
        &self,
        client: &dyn StatsSource,
        range: &RangeSpec,
        output_dir: &std::path::Path,
    ) -> AppResult<PathBuf> {
        let total = client
            .point_total(&self.package, range.start, range.end)
            .await?;
        // Charts are best-effort, as in the proof command: a chartless
        // proof still counts as a succeeded range
        let daily = if self.charts {
            match client
                .daily_series(&self.package, range.start, range.end)
                .await
            {
                Ok(series) => Some(series),
                Err(e) => {
                    warn!(
                        "Daily series fetch failed for {}, proof will have no charts: {}",
                        range.label, e
                    );
                    None
                }
            }
        } else {
            None
        };

        let model = report::build(&self.package, range, total, daily, Utc::now())?;
        let rendered = ReportRenderer::render(&model, self.format)?;
        let path = output_dir.join(ReportRenderer::proof_filename(&model, self.format));
        fs::write(&path, rendered)?;
        info!("Proof written to {}", path.display());
        Ok(path)
    }
}
