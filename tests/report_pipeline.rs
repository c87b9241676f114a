//! End-to-end pipeline tests: plan ranges, serve canned registry data
//! through the StatsSource capability, build report models and render
//! proof documents to disk.

use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use npm_downloads_proof::errors::{AppError, FetchError, FetchResult};
use npm_downloads_proof::planner;
use npm_downloads_proof::registry::StatsSource;
use npm_downloads_proof::render::{OutputFormat, ReportRenderer};
use npm_downloads_proof::report;
use npm_downloads_proof::types::{DailyPoint, DailySeries, PointTotal};
use std::collections::HashMap;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2025-12-03T10:15:30Z")
        .unwrap()
        .with_timezone(&Utc)
}

/// Canned per-range behaviour for the stub registry
enum Canned {
    Total(u64),
    NoDownloadsField,
    HttpError(u16),
}

struct StubSource {
    ranges: HashMap<(NaiveDate, NaiveDate), Canned>,
}

impl StubSource {
    fn new() -> Self {
        Self {
            ranges: HashMap::new(),
        }
    }

    fn with(mut self, start: NaiveDate, end: NaiveDate, canned: Canned) -> Self {
        self.ranges.insert((start, end), canned);
        self
    }
}

#[async_trait]
impl StatsSource for StubSource {
    async fn point_total(
        &self,
        _package: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> FetchResult<Option<PointTotal>> {
        match self.ranges.get(&(start, end)) {
            Some(Canned::Total(downloads)) => Ok(Some(PointTotal {
                start,
                end,
                downloads: *downloads,
            })),
            Some(Canned::NoDownloadsField) => Ok(None),
            Some(Canned::HttpError(status)) => Err(FetchError::Status {
                status: *status,
                url: "stub".to_string(),
            }),
            None => Ok(None),
        }
    }

    async fn daily_series(
        &self,
        _package: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> FetchResult<DailySeries> {
        // Uniform 100 downloads per day across the requested window
        let days = (end - start).num_days() + 1;
        let points = (0..days)
            .map(|i| DailyPoint {
                date: start + Duration::days(i),
                count: 100,
            })
            .collect();
        Ok(DailySeries::from_points(start, end, points))
    }
}

#[tokio::test]
async fn weekly_batch_builds_one_model_per_range() {
    let reference = date(2025, 12, 3);
    let plan = planner::plan_weekly(reference, 2);
    let source = StubSource::new()
        .with(date(2025, 11, 27), date(2025, 12, 3), Canned::Total(4521))
        .with(date(2025, 11, 20), date(2025, 11, 26), Canned::Total(3890));

    let mut models = Vec::new();
    for range in &plan {
        let total = source
            .point_total("mcp-server-kubernetes", range.start, range.end)
            .await
            .unwrap();
        let daily = source
            .daily_series("mcp-server-kubernetes", range.start, range.end)
            .await
            .unwrap();
        models.push(
            report::build("mcp-server-kubernetes", range, total, Some(daily), at()).unwrap(),
        );
    }

    assert_eq!(models.len(), 2);
    assert_eq!(models[0].total.downloads, 4521);
    assert_eq!(models[1].total.downloads, 3890);
    // 7 uniform daily points collapse into a single full week bucket
    assert_eq!(models[0].weekly.len(), 1);
    assert_eq!(models[0].weekly[0].total, 700);
    assert_eq!(models[0].weekly[0].day_count, 7);
    // Each model signs its own range: hashes must differ
    assert_ne!(models[0].token.hash, models[1].token.hash);
}

#[tokio::test]
async fn batch_skips_failed_ranges_and_keeps_the_rest() {
    let plan = planner::plan_weekly(date(2025, 12, 3), 3);
    let source = StubSource::new()
        .with(date(2025, 11, 27), date(2025, 12, 3), Canned::Total(4521))
        .with(
            date(2025, 11, 20),
            date(2025, 11, 26),
            Canned::HttpError(503),
        )
        .with(
            date(2025, 11, 13),
            date(2025, 11, 19),
            Canned::NoDownloadsField,
        );

    let mut succeeded = 0;
    let mut failed = 0;
    for range in &plan {
        let result = match source.point_total("pkg", range.start, range.end).await {
            Ok(total) => report::build("pkg", range, total, None, at()),
            Err(e) => Err(AppError::Fetch(e)),
        };
        match result {
            Ok(_) => succeeded += 1,
            Err(_) => failed += 1,
        }
    }

    assert_eq!(succeeded, 1);
    assert_eq!(failed, 2);
}

#[tokio::test]
async fn missing_downloads_field_surfaces_as_missing_data() {
    let plan = planner::plan_custom(&[date(2025, 11, 1), date(2025, 11, 30)]).unwrap();
    let source = StubSource::new().with(
        date(2025, 11, 1),
        date(2025, 11, 30),
        Canned::NoDownloadsField,
    );

    let total = source
        .point_total("pkg", plan[0].start, plan[0].end)
        .await
        .unwrap();
    let err = report::build("pkg", &plan[0], total, None, at()).unwrap_err();
    assert!(matches!(err, AppError::MissingData(_)));
}

#[tokio::test]
async fn rendered_proofs_have_unique_filenames_per_batch() {
    let dir = tempfile::tempdir().unwrap();
    let plan = planner::plan_monthly(date(2025, 1, 15), 2);
    let source = StubSource::new()
        .with(date(2025, 1, 1), date(2025, 1, 15), Canned::Total(1500))
        .with(date(2024, 12, 1), date(2024, 12, 31), Canned::Total(3100));

    let mut written = Vec::new();
    for range in &plan {
        let total = source.point_total("pkg", range.start, range.end).await.unwrap();
        let daily = source.daily_series("pkg", range.start, range.end).await.unwrap();
        let model = report::build("pkg", range, total, Some(daily), at()).unwrap();

        for format in [OutputFormat::Html, OutputFormat::Json] {
            let rendered = ReportRenderer::render(&model, format).unwrap();
            let path = dir.path().join(ReportRenderer::proof_filename(&model, format));
            assert!(!written.contains(&path), "filename collision: {:?}", path);
            std::fs::write(&path, &rendered).unwrap();
            written.push(path);
        }
    }

    assert_eq!(written.len(), 4);

    // JSON proofs round-trip as JSON and carry the full signature hash
    let january = std::fs::read_to_string(&written[1]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&january).unwrap();
    assert_eq!(value["statistics"]["total_downloads"], 1500);
    assert_eq!(
        value["verification"]["signature_hash"]
            .as_str()
            .unwrap()
            .len(),
        64
    );
    // Aggregates present because a daily series was fetched
    assert!(value["statistics"]["weekly"].is_array());
    assert!(value["statistics"]["monthly"].is_array());
}

#[tokio::test]
async fn report_model_is_internally_consistent_for_verifiers() {
    let range = planner::plan_weekly(date(2025, 12, 3), 1).remove(0);
    let source =
        StubSource::new().with(date(2025, 11, 27), date(2025, 12, 3), Canned::Total(4521));

    let total = source.point_total("pkg", range.start, range.end).await.unwrap();
    let model = report::build("pkg", &range, total, None, at()).unwrap();

    // Recompute the signature from the values embedded in the model only
    let recomputed = npm_downloads_proof::verify::sign(
        &model.package,
        model.range.start,
        model.range.end,
        model.total.downloads,
        model.token.generated_at,
    );
    assert_eq!(model.token.hash, recomputed.hash);
}
