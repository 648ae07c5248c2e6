//! Canonical calendar generation and seeding.
//!
//! This module builds the set of day records for a year, the explicit
//! date lists the core queries the store with, and the Sunday-first month
//! grid the presentation layer renders.

use chrono::{Datelike, Days, NaiveDate};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{DayRecord, JobProfile, is_weekend};
use crate::store::{DayStore, DayUpdate};

use super::worth::day_worth;

/// Builds one fresh day record per date of `year`, Jan 1 through Dec 31.
///
/// Produces exactly 365 records (366 in leap years), in date order, each
/// with `is_working = false`, `is_overtime = false`, and `worth` derived
/// from the given job profile. Pure function; persisting the result is the
/// caller's responsibility.
///
/// Years outside chrono's representable range yield an empty calendar.
///
/// # Examples
///
/// ```
/// use shiftledger::calculation::build_year;
/// use shiftledger::models::JobProfile;
/// use rust_decimal::Decimal;
///
/// let job = JobProfile {
///     job_name: "unc_nursing".to_string(),
///     hourly_rate: Decimal::new(5450, 2),
///     overtime_rate: Decimal::new(9065, 2),
///     weekend_rate: Decimal::new(1000, 2),
///     night_rate: Decimal::new(425, 2),
///     critical_rate: Decimal::new(750, 2),
/// };
///
/// let days = build_year(2025, &job);
/// assert_eq!(days.len(), 365);
/// assert_eq!(days[0].date_string(), "2025-01-01");
/// assert_eq!(days[364].date_string(), "2025-12-31");
/// ```
pub fn build_year(year: i32, job: &JobProfile) -> Vec<DayRecord> {
    let Some(first) = NaiveDate::from_ymd_opt(year, 1, 1) else {
        return Vec::new();
    };

    first
        .iter_days()
        .take_while(|date| date.year() == year)
        .map(|date| DayRecord::new(date, day_worth(is_weekend(date), job)))
        .collect()
}

/// Seeds the store with the canonical calendar for `year`.
///
/// Resolves the active job profile through the store, builds the year, and
/// persists it via `upsert_days`. Years that already have records are left
/// untouched, keeping the operation idempotent.
///
/// # Returns
///
/// The number of records written: 365/366 on a fresh seed, 0 when the year
/// was already present.
///
/// # Errors
///
/// Returns [`LedgerError::Configuration`] when no job profile with the
/// given name exists, since worth cannot be computed without one.
pub fn seed_year(store: &mut dyn DayStore, year: i32, job_name: &str) -> LedgerResult<usize> {
    if store.year_exists(year)? {
        return Ok(0);
    }

    let job = store
        .get_job(job_name)?
        .ok_or_else(|| LedgerError::Configuration {
            message: format!("no active job profile '{}' to seed year {}", job_name, year),
        })?;

    let records = build_year(year, &job);
    store.upsert_days(&records)?;
    Ok(records.len())
}

/// The explicit, ordered list of in-month dates for `year`/`month`.
///
/// This is the list the core hands to `get_days`; the store is never asked
/// to resolve a month range itself. Invalid months yield an empty list.
pub fn month_dates(year: i32, month: u32) -> Vec<NaiveDate> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };

    first
        .iter_days()
        .take_while(|date| date.month() == month && date.year() == year)
        .collect()
}

/// Sunday-first week rows covering `year`/`month`.
///
/// Each row holds seven consecutive dates starting on a Sunday; the first
/// and last rows carry the leading and trailing dates of the adjacent
/// months, exactly as the calendar widget lays them out. Invalid months
/// yield an empty grid.
pub fn month_grid(year: i32, month: u32) -> Vec<Vec<NaiveDate>> {
    let dates = month_dates(year, month);
    let (Some(first), Some(last)) = (dates.first(), dates.last()) else {
        return Vec::new();
    };

    let mut row_start = *first - Days::new(u64::from(first.weekday().num_days_from_sunday()));
    let mut grid = Vec::new();
    while row_start <= *last {
        grid.push((0..7).map(|offset| row_start + Days::new(offset)).collect());
        row_start = row_start + Days::new(7);
    }
    grid
}

/// Recomputes the stored worth of every day of `year` from `job`.
///
/// Worth is derived data and must never be trusted across a rate change;
/// callers invoke this after updating the active profile's rates.
///
/// # Returns
///
/// The number of records whose worth actually changed.
pub fn refresh_worth(store: &mut dyn DayStore, year: i32, job: &JobProfile) -> LedgerResult<usize> {
    let dates: Vec<NaiveDate> = (1..=12).flat_map(|month| month_dates(year, month)).collect();
    let days = store.get_days(&dates)?;

    let mut updated = 0;
    for day in days {
        let worth = day_worth(day.is_weekend, job);
        if worth != day.worth {
            store.set_day_field(day.date, DayUpdate::Worth(worth))?;
            updated += 1;
        }
    }
    Ok(updated)
}
