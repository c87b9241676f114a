//! NPM registry statistics API access
//!
//! The download counts API is documented at
//! <https://github.com/npm/registry/blob/master/docs/download-counts.md>.

mod client;

pub use client::RegistryClient;

use crate::errors::FetchResult;
use crate::types::{DailySeries, PointTotal};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Narrow capability over the registry statistics API
///
/// Two operations only, so the report pipeline can be driven by canned
/// in-memory implementations in tests. `point_total` returns `Ok(None)`
/// when the registry answered with well-formed JSON that carries no
/// `downloads` figure; whether that is an error is the caller's decision.
#[async_trait]
pub trait StatsSource: Send + Sync {
    async fn point_total(
        &self,
        package: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> FetchResult<Option<PointTotal>>;

    async fn daily_series(
        &self,
        package: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> FetchResult<DailySeries>;
}
