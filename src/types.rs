//! NPM Download Statistics Proof Generator - Type System
//!
//! Canonical representations of the daily download series fetched from the
//! registry, the derived weekly/monthly buckets, and the assembled report
//! model handed to the renderers.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One day of download counts for a package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub count: u64,
}

/// Ordered daily download series covering the closed interval [start, end]
///
/// May be empty (the registry had no data) or sparse (missing days are
/// absent, not zero). Points are sorted ascending on ingestion; the
/// aggregator re-validates the ordering as a precondition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySeries {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub points: Vec<DailyPoint>,
}

impl DailySeries {
    /// Build a series from raw registry points, sorting by date
    pub fn from_points(start: NaiveDate, end: NaiveDate, mut points: Vec<DailyPoint>) -> Self {
        points.sort_by_key(|p| p.date);
        Self { start, end, points }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sum of all daily counts in the series
    pub fn total(&self) -> u64 {
        self.points.iter().map(|p| p.count).sum()
    }
}

/// Aggregated total over a contiguous sub-range of a daily series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub label: String,
    pub total: u64,
    /// Number of daily points actually summed (< calendar span when sparse)
    pub day_count: usize,
}

/// Single aggregate download count for one explicit date range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointTotal {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub downloads: u64,
}

/// Content hash plus generation timestamp for report verification
///
/// The full 64-character hex digest is retained so an independent verifier
/// can recompute and compare; `short()` is for display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationToken {
    pub hash: String,
    pub generated_at: DateTime<Utc>,
}

impl VerificationToken {
    /// Truncated display form of the digest (first 16 hex characters)
    ///
    /// Tokens normally carry a full 64-character SHA-256 digest, but the
    /// type is deserializable, so a shorter hash must not panic here.
    pub fn short(&self) -> &str {
        self.hash.get(..16).unwrap_or(&self.hash)
    }

    /// Timestamp in the format embedded in proof documents
    pub fn timestamp(&self) -> String {
        format_timestamp(self.generated_at)
    }
}

/// Format a timestamp the way proof documents display (and sign) it
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// One concrete date range to request, produced by the batch planner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSpec {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub label: String,
}

impl RangeSpec {
    pub fn new(start: NaiveDate, end: NaiveDate, label: impl Into<String>) -> Self {
        debug_assert!(start <= end, "RangeSpec start must not exceed end");
        Self {
            start,
            end,
            label: label.into(),
        }
    }
}

/// Immutable report payload handed to the renderers
///
/// Built once per report; regeneration produces a new model with a fresh
/// token rather than editing an existing one. The token was computed from
/// the same package/range/downloads values present here, so a verifier can
/// recompute without additional lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportModel {
    pub package: String,
    pub range: RangeSpec,
    pub total: PointTotal,
    pub daily: Option<DailySeries>,
    pub weekly: Vec<Bucket>,
    pub monthly: Vec<Bucket>,
    pub token: VerificationToken,
}

impl ReportModel {
    /// Whether the model carries chart-worthy daily data
    pub fn has_series(&self) -> bool {
        self.daily.as_ref().is_some_and(|d| !d.is_empty())
    }
}
