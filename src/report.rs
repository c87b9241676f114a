//! Report model assembly
//!
//! Combines the point total, the optional daily series, the derived
//! weekly/monthly buckets and the verification token into one immutable
//! payload for the renderers. Pure apart from the caller-supplied
//! timestamp; all fetching happens upstream.

use crate::aggregate::{aggregate_monthly, aggregate_weekly};
use crate::errors::{AppError, AppResult};
use crate::types::{DailySeries, PointTotal, RangeSpec, ReportModel};
use crate::verify;
use chrono::{DateTime, Utc};

/// Build a report model for one package and range
///
/// `total` is `None` when the registry answered structurally but carried no
/// usable downloads figure; that surfaces as `MissingData` rather than a
/// partial report. When a daily series is present the weekly and monthly
/// buckets are derived from it; otherwise both stay empty and renderers
/// skip the charts. The token is computed exactly once, from the same
/// values embedded in the returned model.
pub fn build(
    package: &str,
    range: &RangeSpec,
    total: Option<PointTotal>,
    daily: Option<DailySeries>,
    generated_at: DateTime<Utc>,
) -> AppResult<ReportModel> {
    let total = total.ok_or_else(|| {
        AppError::MissingData(format!(
            "no download total for {} ({} to {})",
            package, range.start, range.end
        ))
    })?;

    let (weekly, monthly) = match &daily {
        Some(series) => (aggregate_weekly(series)?, aggregate_monthly(series)?),
        None => (Vec::new(), Vec::new()),
    };

    let token = verify::sign(package, range.start, range.end, total.downloads, generated_at);

    Ok(ReportModel {
        package: package.to_string(),
        range: range.clone(),
        total,
        daily,
        weekly,
        monthly,
        token,
    })
}
