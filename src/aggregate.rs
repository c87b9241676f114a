//! Daily series aggregation into weekly and monthly buckets
//!
//! Weekly buckets are positional: consecutive groups of 7 points in arrival
//! order, regardless of calendar weekday. A series starting mid-week
//! therefore produces "weeks" that do not align Mon-Sun. This matches the
//! convention the proof documents were built on and must not be changed to
//! ISO week alignment without versioning the documents.

use crate::errors::{AppError, AppResult};
use crate::types::{Bucket, DailyPoint, DailySeries};
use chrono::{Datelike, Duration, NaiveDate};

/// Number of daily points per positional week bucket
const DAYS_PER_WEEK: usize = 7;

/// Validate aggregation preconditions: strictly ascending dates, no duplicates
fn validate(points: &[DailyPoint]) -> AppResult<()> {
    for pair in points.windows(2) {
        if pair[1].date == pair[0].date {
            return Err(AppError::InvalidInput(format!(
                "duplicate date in daily series: {}",
                pair[0].date
            )));
        }
        if pair[1].date < pair[0].date {
            return Err(AppError::InvalidInput(format!(
                "daily series not sorted: {} follows {}",
                pair[1].date, pair[0].date
            )));
        }
    }
    Ok(())
}

/// Aggregate a daily series into positional 7-point week buckets
///
/// Bucket start/end are the first/last dates of each group; the final
/// bucket may hold 1-6 points when the series length is not a multiple of
/// 7. Empty input yields an empty series.
pub fn aggregate_weekly(daily: &DailySeries) -> AppResult<Vec<Bucket>> {
    validate(&daily.points)?;

    let buckets = daily
        .points
        .chunks(DAYS_PER_WEEK)
        .map(|week| Bucket {
            start: week[0].date,
            end: week[week.len() - 1].date,
            // Month-day slice of the bucket start, e.g. "11-27"
            label: week[0].date.format("%m-%d").to_string(),
            total: week.iter().map(|p| p.count).sum(),
            day_count: week.len(),
        })
        .collect();

    Ok(buckets)
}

/// Aggregate a daily series into calendar-month buckets
///
/// One bucket per distinct year-month present in the data, in order of
/// first appearance. Months inside the overall range with no data points
/// produce no bucket. Bucket bounds are the calendar month's first and
/// last day; `day_count` counts only the points actually present.
pub fn aggregate_monthly(daily: &DailySeries) -> AppResult<Vec<Bucket>> {
    validate(&daily.points)?;

    let mut buckets: Vec<Bucket> = Vec::new();

    for point in &daily.points {
        let start = month_start(point.date);
        match buckets.iter_mut().find(|b| b.start == start) {
            Some(bucket) => {
                bucket.total += point.count;
                bucket.day_count += 1;
            }
            None => buckets.push(Bucket {
                start,
                end: month_end(point.date),
                label: point.date.format("%b %Y").to_string(),
                total: point.count,
                day_count: 1,
            }),
        }
    }

    Ok(buckets)
}

fn month_start(date: NaiveDate) -> NaiveDate {
    // Day 1 always exists for a valid (year, month)
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

/// Last day of the month: first day of the next month minus one day
fn month_end(date: NaiveDate) -> NaiveDate {
    let (next_year, next_month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .map(|first| first - Duration::days(1))
        .unwrap_or(date)
}
