use crate::config::RegistryConfig;
use crate::errors::{FetchError, FetchResult};
use crate::registry::StatsSource;
use crate::types::{DailyPoint, DailySeries, PointTotal};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Point endpoint payload: `/downloads/point/{period}/{package}`
///
/// `downloads` is optional: the registry can answer 200 with a payload
/// that omits it (e.g. brand-new packages with no recorded days).
#[derive(Debug, Deserialize)]
struct PointResponse {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    downloads: Option<u64>,
}

/// Range endpoint payload: `/downloads/range/{period}/{package}`
#[derive(Debug, Deserialize)]
struct RangeResponse {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    #[serde(default)]
    downloads: Vec<RangeDay>,
}

#[derive(Debug, Deserialize)]
struct RangeDay {
    day: NaiveDate,
    downloads: u64,
}

/// HTTP client for the npm registry statistics API
///
/// No retry or backoff: a report run makes a handful of requests and a
/// failed range is reported and skipped by the batch driver.
pub struct RegistryClient {
    http: reqwest::Client,
    base_url: String,
}

impl RegistryClient {
    pub fn new(config: &RegistryConfig) -> FetchResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| FetchError::Network(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, kind: &str, package: &str, start: NaiveDate, end: NaiveDate) -> String {
        format!(
            "{}/downloads/{}/{}:{}/{}",
            self.base_url, kind, start, end, package
        )
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> FetchResult<T> {
        debug!("GET {}", url);
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::MalformedPayload(e.to_string()))
    }
}

#[async_trait]
impl StatsSource for RegistryClient {
    async fn point_total(
        &self,
        package: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> FetchResult<Option<PointTotal>> {
        let url = self.endpoint("point", package, start, end);
        let payload: PointResponse = self.get_json(&url).await?;

        Ok(payload.downloads.map(|downloads| PointTotal {
            // The registry echoes the effective period; fall back to the
            // requested dates if it omits them
            start: payload.start.unwrap_or(start),
            end: payload.end.unwrap_or(end),
            downloads,
        }))
    }

    async fn daily_series(
        &self,
        package: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> FetchResult<DailySeries> {
        let url = self.endpoint("range", package, start, end);
        let payload: RangeResponse = self.get_json(&url).await?;

        let points = payload
            .downloads
            .into_iter()
            .map(|d| DailyPoint {
                date: d.day,
                count: d.downloads,
            })
            .collect();

        Ok(DailySeries::from_points(
            payload.start.unwrap_or(start),
            payload.end.unwrap_or(end),
            points,
        ))
    }
}
