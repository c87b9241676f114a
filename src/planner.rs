//! Batch range planning
//!
//! Pure functions that turn a reference date plus a count (or explicit date
//! pairs) into the ordered list of ranges a batch run will fetch. "Now" is
//! always passed in as `reference` so planning is reproducible in tests.

use crate::errors::{AppError, AppResult};
use crate::types::RangeSpec;
use chrono::{Datelike, Duration, NaiveDate};

/// Plan `count` rolling 7-day windows ending at `reference`
///
/// Window i covers `[reference - 7i - 6, reference - 7i]`; the windows are
/// non-overlapping and ordered most-recent-first, matching the natural
/// "last N weeks" framing.
pub fn plan_weekly(reference: NaiveDate, count: usize) -> Vec<RangeSpec> {
    (0..count)
        .map(|i| {
            let end = reference - Duration::days(7 * i as i64);
            let start = end - Duration::days(6);
            RangeSpec::new(start, end, format!("Week {}", i + 1))
        })
        .collect()
}

/// Plan `count` rolling calendar months ending at `reference`
///
/// Index 0 is the partial current month `[first-of-month, reference]`;
/// index i > 0 is the full calendar month i months before the reference
/// month, with explicit year rollover when the subtraction crosses January.
pub fn plan_monthly(reference: NaiveDate, count: usize) -> Vec<RangeSpec> {
    (0..count)
        .map(|i| {
            if i == 0 {
                let start = first_of_month(reference.year(), reference.month());
                RangeSpec::new(start, reference, "Month 1".to_string())
            } else {
                let mut year = reference.year();
                let mut month = reference.month() as i32 - i as i32;
                while month <= 0 {
                    month += 12;
                    year -= 1;
                }
                let start = first_of_month(year, month as u32);
                // Month end is the first day of the next month minus one
                // day, which handles variable month lengths and leap years
                let end = next_month(year, month as u32) - Duration::days(1);
                RangeSpec::new(start, end, format!("Month {}", i + 1))
            }
        })
        .collect()
}

/// Plan explicit ranges from `(start, end)` date pairs
///
/// All-or-nothing: an odd number of dates, zero pairs, or any pair with
/// start after end rejects the whole plan.
pub fn plan_custom(dates: &[NaiveDate]) -> AppResult<Vec<RangeSpec>> {
    if dates.is_empty() || dates.len() % 2 != 0 {
        return Err(AppError::InvalidArguments(format!(
            "custom ranges require pairs of start and end dates, got {} date(s)",
            dates.len()
        )));
    }

    dates
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| {
            if pair[0] > pair[1] {
                return Err(AppError::InvalidArguments(format!(
                    "range {} starts after it ends: {} > {}",
                    i + 1,
                    pair[0],
                    pair[1]
                )));
            }
            Ok(RangeSpec::new(pair[0], pair[1], format!("Range {}", i + 1)))
        })
        .collect()
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    // Day 1 always exists for a valid (year, month)
    NaiveDate::from_ymd_opt(year, month, 1).expect("valid month arithmetic")
}

fn next_month(year: i32, month: u32) -> NaiveDate {
    if month == 12 {
        first_of_month(year + 1, 1)
    } else {
        first_of_month(year, month + 1)
    }
}
