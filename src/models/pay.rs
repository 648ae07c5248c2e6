//! Pay calculation result models.
//!
//! This module contains the typed outputs of the pay calculation engine:
//! per-week, per-period, and per-month totals, plus the per-day annotation
//! produced by the consecutive-day overtime policy.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The computed pay for one 7-day week slice.
///
/// Produced by the weekly overtime rule; a pure function of the week's day
/// records and the job profile, so recomputing an unmodified week yields an
/// identical value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekPay {
    /// The first date of the week (inclusive).
    pub start_date: NaiveDate,
    /// The last date of the week (inclusive).
    pub end_date: NaiveDate,
    /// The number of working days in the week.
    pub working_days: u32,
    /// Total scheduled hours (working days x 12).
    pub total_hours: u32,
    /// Hours paid at the overtime differential.
    pub overtime_hours: u32,
    /// Sum of each working day's worth.
    pub base_pay: Decimal,
    /// The overtime addition on top of base pay.
    pub overtime_pay: Decimal,
    /// Base pay plus overtime addition.
    pub total: Decimal,
}

/// The computed pay for one biweekly pay period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodPay {
    /// The date the period is paid out.
    pub pay_date: NaiveDate,
    /// The start date of the period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the period (inclusive).
    pub end_date: NaiveDate,
    /// Per-week breakdown, in date order.
    pub weeks: Vec<WeekPay>,
    /// Sum of the week totals, before correction.
    pub gross: Decimal,
    /// Gross multiplied by the empirical correction factor, rounded to
    /// cents.
    pub corrected: Decimal,
}

/// The computed pay for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthPay {
    /// The payroll year of the schedule the month was resolved against.
    pub year: i32,
    /// The month (1-12).
    pub month: u32,
    /// Per-period breakdown, in pay-date order.
    pub periods: Vec<PeriodPay>,
    /// Sum of the corrected period totals.
    pub gross: Decimal,
    /// The flat tax rate used for the net estimate.
    pub tax_rate: Decimal,
    /// Display-only net estimate: `gross - gross * tax_rate`.
    pub net_estimate: Decimal,
}

/// A per-day overtime annotation from the consecutive-day policy.
///
/// Feeds the `is_overtime` flag and display subtitles; never feeds period
/// totals, which come from the weekly threshold rule alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsecutiveOvertime {
    /// The annotated date.
    pub date: NaiveDate,
    /// Overtime hours attributed to the day (8 or 12).
    pub hours: u32,
    /// The surcharge those hours would earn at the overtime differential.
    pub addition: Decimal,
}
