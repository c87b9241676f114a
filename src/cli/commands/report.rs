use crate::cli::parse_date;
use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::registry::{RegistryClient, StatsSource};
use crate::render::console::{self, SummaryRow};
use crate::render::format_number;
use crate::types::RangeSpec;
use chrono::{Duration, NaiveDate, Utc};
use clap::Args;
use tracing::warn;

/// Multi-range download report for one package
///
/// Always covers the last 7 days, last 30 days and year to date; extra
/// ranges are supplied as `start end label` triples after the package name.
#[derive(Args)]
pub struct ReportCommand {
    /// NPM package name
    package: String,

    /// Additional ranges as start end label triples (dates YYYY-MM-DD)
    #[arg(num_args = 0.., value_name = "START END LABEL")]
    ranges: Vec<String>,
}

impl ReportCommand {
    pub async fn run(&self) -> AppResult<()> {
        let today = Utc::now().date_naive();
        let ranges = self.collect_ranges(today)?;

        let config = AppConfig::load().map_err(|e| AppError::Config(e.to_string()))?;
        let client = RegistryClient::new(&config.registry)?;

        print!("{}", console::render_header(&self.package, Utc::now()));
        println!();

        let mut rows: Vec<SummaryRow> = Vec::new();
        for range in &ranges {
            println!("{} ({} to {}):", range.label, range.start, range.end);
            match client.point_total(&self.package, range.start, range.end).await {
                Ok(Some(total)) => {
                    println!("  {} downloads", format_number(total.downloads));
                    rows.push(SummaryRow {
                        label: range.label.clone(),
                        start: total.start,
                        end: total.end,
                        downloads: total.downloads,
                    });
                }
                Ok(None) => println!("  No download data available"),
                Err(e) => {
                    warn!("Fetch failed for {}: {}", range.label, e);
                    println!("  Failed to fetch data");
                }
            }
            println!();
        }

        if !rows.is_empty() {
            print!("{}", console::render_summary(&rows));
        }
        Ok(())
    }

    /// Default rolling windows plus any custom labelled triples
    fn collect_ranges(&self, today: NaiveDate) -> AppResult<Vec<RangeSpec>> {
        let mut ranges = vec![
            RangeSpec::new(today - Duration::days(7), today, "Last 7 Days"),
            RangeSpec::new(today - Duration::days(30), today, "Last 30 Days"),
            RangeSpec::new(year_start(today), today, "Year to Date"),
        ];

        if self.ranges.len() % 3 != 0 {
            return Err(AppError::InvalidArguments(format!(
                "custom ranges must come as 'start end label' triples, got {} argument(s)",
                self.ranges.len()
            )));
        }
        for triple in self.ranges.chunks(3) {
            let start = parse_date(&triple[0])?;
            let end = parse_date(&triple[1])?;
            if start > end {
                return Err(AppError::InvalidArguments(format!(
                    "range '{}' starts after it ends",
                    triple[2]
                )));
            }
            ranges.push(RangeSpec::new(start, end, triple[2].clone()));
        }
        Ok(ranges)
    }
}

fn year_start(today: NaiveDate) -> NaiveDate {
    use chrono::Datelike;
    NaiveDate::from_ymd_opt(today.year(), 1, 1).expect("January 1st always exists")
}
