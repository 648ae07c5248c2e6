//! Day record model.
//!
//! This module defines the [`DayRecord`] struct, the canonical per-date
//! entity tracking work status and derived pay.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Hours in a standard shift.
///
/// The domain assumes every scheduled shift is a 12-hour shift; day worth
/// and weekly hour totals are both built on this constant.
pub const SHIFT_HOURS: u32 = 12;

/// Represents one calendar date in the shift calendar.
///
/// Exactly one record exists per date per calendar dataset. The `date` is
/// immutable once created; `is_working` is the only field normally mutated
/// afterwards. `is_overtime` is a derived annotation recomputed on each
/// evaluation, and `worth` must be recomputed whenever the owning job's
/// rates change.
///
/// # Example
///
/// ```
/// use shiftledger::models::DayRecord;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let day = DayRecord::new(
///     NaiveDate::from_ymd_opt(2025, 7, 5).unwrap(), // Saturday
///     Decimal::new(77400, 2),
/// );
/// assert!(day.is_weekend);
/// assert!(!day.is_working);
/// assert_eq!(day.date_string(), "2025-07-05");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    /// The calendar date (unique key).
    pub date: NaiveDate,
    /// The year component of `date`, kept for query convenience.
    pub year: i32,
    /// The month component of `date` (1-12), kept for query convenience.
    pub month: u32,
    /// The day-of-month component of `date`, kept for query convenience.
    pub day: u32,
    /// Whether the date falls on a Saturday or Sunday.
    pub is_weekend: bool,
    /// User-declared shift flag; true when a shift is scheduled.
    pub is_working: bool,
    /// Derived overtime annotation; recomputed each evaluation.
    pub is_overtime: bool,
    /// Base earnings for the day if worked.
    pub worth: Decimal,
}

impl DayRecord {
    /// Creates a fresh, non-working record for a date.
    ///
    /// The redundant `year`/`month`/`day` fields and the weekend flag are
    /// derived from the date; `is_working` and `is_overtime` start false.
    pub fn new(date: NaiveDate, worth: Decimal) -> Self {
        Self {
            date,
            year: date.year(),
            month: date.month(),
            day: date.day(),
            is_weekend: is_weekend(date),
            is_working: false,
            is_overtime: false,
            worth,
        }
    }

    /// Returns the date formatted as `YYYY-MM-DD`, the storage key format.
    pub fn date_string(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Returns true if the date falls on a Saturday or Sunday.
pub(crate) fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
