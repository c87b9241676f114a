use crate::cli::parse_date;
use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::registry::{RegistryClient, StatsSource};
use crate::render::format_number;
use clap::Args;
use tracing::info;

/// Fetch and print the download total for one package and date range
#[derive(Args)]
pub struct FetchCommand {
    /// NPM package name
    package: String,

    /// Range start date (YYYY-MM-DD)
    start: String,

    /// Range end date (YYYY-MM-DD)
    end: String,
}

impl FetchCommand {
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
        let client = RegistryClient::new(&config.registry)?;

        info!(
            "Fetching downloads for {} from {} to {}",
            self.package, start, end
        );
        println!(
            "Fetching downloads for {} from {} to {}...",
            self.package, start, end
        );

        match client.point_total(&self.package, start, end).await? {
            Some(total) => {
                println!("Package: {}", self.package);
                println!("Period: {} to {}", total.start, total.end);
                println!("Total Downloads: {}", format_number(total.downloads));
                Ok(())
            }
            None => Err(AppError::MissingData(format!(
                "registry returned no download total for {}",
                self.package
            ))),
        }
    }
}
