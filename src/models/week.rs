//! Week aggregate model.
//!
//! This module defines the [`WeekAggregate`] type, a transient 7-day
//! grouping of day records used for overtime calculation.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::day::{DayRecord, SHIFT_HOURS};

/// A contiguous 7-day slice of a pay period or calendar month.
///
/// Constructed on demand from day records for a given range and discarded
/// after reporting; never persisted. The `days` vector holds only the
/// records found in the store, so a freshly-seeded range may carry fewer
/// than seven entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekAggregate {
    /// The first date of the slice (inclusive).
    pub start_date: NaiveDate,
    /// The last date of the slice (inclusive).
    pub end_date: NaiveDate,
    /// The day records found within the slice, in date order.
    pub days: Vec<DayRecord>,
}

impl WeekAggregate {
    /// Builds the 7-day slice starting at `start_date` from the given
    /// records, keeping only those that fall inside it.
    pub fn slice(start_date: NaiveDate, days: &[DayRecord]) -> Self {
        let end_date = start_date + Days::new(6);
        let days = days
            .iter()
            .filter(|d| d.date >= start_date && d.date <= end_date)
            .cloned()
            .collect();
        Self {
            start_date,
            end_date,
            days,
        }
    }

    /// The records flagged as working days, in date order.
    pub fn working_days(&self) -> impl Iterator<Item = &DayRecord> {
        self.days.iter().filter(|d| d.is_working)
    }

    /// The number of working days in the week.
    pub fn working_count(&self) -> u32 {
        self.working_days().count() as u32
    }

    /// Total scheduled hours for the week (working days x 12).
    pub fn scheduled_hours(&self) -> u32 {
        self.working_count() * SHIFT_HOURS
    }

    /// The sum of each working day's worth, before any overtime addition.
    pub fn base_pay(&self) -> Decimal {
        self.working_days().map(|d| d.worth).sum()
    }

    /// Whether the given date falls inside this week.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}
