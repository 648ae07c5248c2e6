//! Consecutive-day overtime annotation.
//!
//! The alternate, display-facing policy kept alongside the weekly
//! threshold rule: within a 7-day slice, working days past the third each
//! attract an overtime differential — 8 hours for the first day beyond
//! the third, 12 hours for every later one. The annotation drives the
//! `is_overtime` flag and calendar subtitles; period totals come from the
//! weekly rule alone.

use std::collections::HashSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::LedgerResult;
use crate::models::{ConsecutiveOvertime, JobProfile, PayPeriod, WeekAggregate};
use crate::store::{DayStore, DayUpdate};

use super::engine::split_weeks;

/// Working days in a week before the annotation starts.
pub const CONSECUTIVE_TRIGGER_DAYS: u32 = 3;

/// Overtime hours attributed to the first working day beyond the third.
pub const FIRST_EXTRA_HOURS: u32 = 8;

/// Overtime hours attributed to each later working day.
pub const LATER_EXTRA_HOURS: u32 = 12;

/// Annotates the working days of a week under the consecutive-day policy.
///
/// Returns one entry per annotated day, in date order: the fourth working
/// day of the week carries 8 hours of overtime differential, the fifth
/// and later carry 12 each. Weeks with three or fewer working days return
/// no annotations.
///
/// # Examples
///
/// ```
/// use shiftledger::calculation::consecutive_overtime;
/// use shiftledger::models::{DayRecord, JobProfile, WeekAggregate};
/// use chrono::NaiveDate;
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
/// let start = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
/// let days: Vec<DayRecord> = start
///     .iter_days()
///     .take(5)
///     .map(|date| {
///         let mut day = DayRecord::new(date, Decimal::new(65400, 2));
///         day.is_working = true;
///         day
///     })
///     .collect();
///
/// let annotations = consecutive_overtime(&WeekAggregate::slice(start, &days), &job);
/// assert_eq!(annotations.len(), 2);
/// assert_eq!(annotations[0].hours, 8);
/// assert_eq!(annotations[1].hours, 12);
/// ```
pub fn consecutive_overtime(week: &WeekAggregate, job: &JobProfile) -> Vec<ConsecutiveOvertime> {
    let differential = job.overtime_differential();

    week.working_days()
        .enumerate()
        .filter_map(|(index, day)| {
            let ordinal = index as u32 + 1;
            if ordinal <= CONSECUTIVE_TRIGGER_DAYS {
                return None;
            }
            let hours = if ordinal == CONSECUTIVE_TRIGGER_DAYS + 1 {
                FIRST_EXTRA_HOURS
            } else {
                LATER_EXTRA_HOURS
            };
            Some(ConsecutiveOvertime {
                date: day.date,
                hours,
                addition: differential * Decimal::from(hours),
            })
        })
        .collect()
}

/// Recomputes and persists `is_overtime` across a pay period.
///
/// The flag is derived data: each week of the period is re-annotated from
/// its current working days and any record whose flag disagrees is
/// rewritten. Called after a working-day toggle so the stored flags never
/// go stale.
///
/// # Returns
///
/// The number of records whose flag actually changed.
pub fn refresh_overtime_flags(
    store: &mut dyn DayStore,
    period: &PayPeriod,
    job: &JobProfile,
) -> LedgerResult<usize> {
    let dates = period.dates();
    let days = store.get_days(&dates)?;

    let mut updated = 0;
    for week in split_weeks(period, &days) {
        let flagged: HashSet<NaiveDate> = consecutive_overtime(&week, job)
            .iter()
            .map(|annotation| annotation.date)
            .collect();

        for day in &week.days {
            let flag = flagged.contains(&day.date);
            if day.is_overtime != flag {
                store.set_day_field(day.date, DayUpdate::Overtime(flag))?;
                updated += 1;
            }
        }
    }
    Ok(updated)
}
