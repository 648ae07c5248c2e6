//! Pay calculation engine.
//!
//! Rolls day records up into weekly, biweekly, and monthly pay: each pay
//! period's date range is resolved to an explicit list, read back through
//! the day store, split into 7-day week aggregates, run through the
//! weekly overtime rule, and summed with the empirical correction factor.
//!
//! The engine holds no state. Every calculation re-reads the store, so a
//! toggled working day is always observed, and a failure computing one
//! period cannot corrupt another.

use chrono::Days;
use rust_decimal::Decimal;

use crate::config::{EngineParams, PaySchedule};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{DayRecord, JobProfile, MonthPay, PayPeriod, PeriodPay, WeekAggregate, WeekPay};
use crate::store::DayStore;

use super::overtime::apply_overtime;

/// Splits a pay period's day records into consecutive 7-day aggregates.
///
/// A 14-day period yields two weeks; longer ranges yield one aggregate
/// per started 7-day slice. Records are assigned by date, so missing
/// dates simply leave thinner weeks.
pub fn split_weeks(period: &PayPeriod, days: &[DayRecord]) -> Vec<WeekAggregate> {
    let mut weeks = Vec::new();
    let mut start = period.start_date;
    while start <= period.end_date {
        weeks.push(WeekAggregate::slice(start, days));
        start = start + Days::new(7);
    }
    weeks
}

/// Calculates the pay for one biweekly period.
///
/// Resolves the period's explicit date list, reads the records through
/// the store (missing dates are silently omitted), applies the weekly
/// overtime rule per 7-day slice, and corrects the summed gross by the
/// configured factor, rounded to cents.
///
/// # Errors
///
/// Propagates any persistence failure from the store.
pub fn calculate_period(
    store: &dyn DayStore,
    period: &PayPeriod,
    job: &JobProfile,
    params: &EngineParams,
) -> LedgerResult<PeriodPay> {
    let dates = period.dates();
    let days = store.get_days(&dates)?;

    let weeks: Vec<WeekPay> = split_weeks(period, &days)
        .iter()
        .map(|week| apply_overtime(week, job))
        .collect();

    let gross: Decimal = weeks.iter().map(|week| week.total).sum();
    let corrected = (gross * params.correction_factor).round_dp(2);

    Ok(PeriodPay {
        pay_date: period.pay_date,
        start_date: period.start_date,
        end_date: period.end_date,
        weeks,
        gross,
        corrected,
    })
}

/// Calculates the pay for every period of a month, plus the month total.
///
/// The active job profile is resolved through the store — never from a
/// cache — so rate changes take effect on the next calculation. The month
/// total is the sum of the corrected period totals; the net estimate is
/// the display-only flat deduction `gross - gross * tax_rate`.
///
/// # Errors
///
/// - [`LedgerError::Configuration`] when the active job profile is absent
///   from the store.
/// - [`LedgerError::UnknownPeriod`] when the month has no schedule entry.
/// - Any persistence failure from the store.
pub fn calculate_month(
    store: &dyn DayStore,
    schedule: &PaySchedule,
    params: &EngineParams,
    month: u32,
) -> LedgerResult<MonthPay> {
    let job = store
        .get_job(&params.active_job)?
        .ok_or_else(|| LedgerError::Configuration {
            message: format!("no active job profile '{}'", params.active_job),
        })?;

    let periods = schedule.periods_for_month(month)?;

    let mut period_pays = Vec::with_capacity(periods.len());
    for period in periods {
        period_pays.push(calculate_period(store, period, &job, params)?);
    }

    let gross: Decimal = period_pays.iter().map(|p| p.corrected).sum();
    let net_estimate = net_after_tax(gross, params.tax_rate);

    Ok(MonthPay {
        year: schedule.year(),
        month,
        periods: period_pays,
        gross,
        tax_rate: params.tax_rate,
        net_estimate,
    })
}

/// The display-only flat tax estimate: `gross - gross * rate`, in cents.
pub fn net_after_tax(gross: Decimal, rate: Decimal) -> Decimal {
    (gross - gross * rate).round_dp(2)
}
