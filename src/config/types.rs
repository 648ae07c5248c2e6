//! Configuration types for the shift ledger.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, and the validated
//! [`PaySchedule`] the pay period resolver runs on.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{JobProfile, PayPeriod};

/// One pay period entry in the schedule file.
#[derive(Debug, Clone, Deserialize)]
pub struct PeriodEntry {
    /// The date the period is paid out.
    pub pay_date: NaiveDate,
    /// The start date of the period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the period (inclusive).
    pub end_date: NaiveDate,
}

/// Schedule configuration file structure (`schedule.yaml`).
///
/// One file describes one payroll year. The per-month tables are
/// hand-curated because pay dates follow an externally imposed biweekly
/// payroll calendar that does not align with calendar months; deriving
/// them from a rule would get the 3-period months wrong.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// The payroll year the schedule covers.
    pub year: i32,
    /// Map of month number (1-12) to that month's pay periods.
    pub months: HashMap<u32, Vec<PeriodEntry>>,
}

/// The validated biweekly payroll schedule for one year.
///
/// This is the pay period resolver: it maps a month to its defined pay
/// periods and locates the period covering an arbitrary date.
#[derive(Debug, Clone)]
pub struct PaySchedule {
    year: i32,
    months: BTreeMap<u32, Vec<PayPeriod>>,
}

impl PaySchedule {
    /// Builds a schedule from per-month periods, validating every span.
    ///
    /// Periods are ordered by pay date within each month.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidSchedule`] when any period does not
    /// span exactly 14 inclusive days.
    pub fn new(year: i32, months: BTreeMap<u32, Vec<PayPeriod>>) -> LedgerResult<Self> {
        let mut months = months;
        for periods in months.values_mut() {
            for period in periods.iter() {
                period.validate()?;
            }
            periods.sort_by_key(|p| p.pay_date);
        }
        Ok(Self { year, months })
    }

    /// The payroll year this schedule covers.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The pay periods defined for a month, in pay-date order.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnknownPeriod`] when the month has no entry
    /// in the schedule.
    pub fn periods_for_month(&self, month: u32) -> LedgerResult<&[PayPeriod]> {
        self.months
            .get(&month)
            .map(Vec::as_slice)
            .ok_or(LedgerError::UnknownPeriod { month })
    }

    /// Locates the pay period whose date range covers `date`, if any.
    pub fn period_containing(&self, date: NaiveDate) -> Option<&PayPeriod> {
        self.months
            .values()
            .flatten()
            .find(|period| period.contains_date(date))
    }
}

impl TryFrom<ScheduleConfig> for PaySchedule {
    type Error = LedgerError;

    fn try_from(config: ScheduleConfig) -> LedgerResult<Self> {
        let months = config
            .months
            .into_iter()
            .map(|(month, entries)| {
                let periods = entries
                    .into_iter()
                    .map(|entry| PayPeriod {
                        pay_date: entry.pay_date,
                        start_date: entry.start_date,
                        end_date: entry.end_date,
                    })
                    .collect();
                (month, periods)
            })
            .collect();
        Self::new(config.year, months)
    }
}

/// Engine parameters (`engine.yaml`).
///
/// The correction factor and tax rate are empirical constants observed
/// against an external payroll system; they are configuration, never
/// literals in calculation code.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineParams {
    /// The name of the single active job profile.
    pub active_job: String,
    /// Multiplier applied to each biweekly gross (default +6%).
    #[serde(default = "default_correction_factor")]
    pub correction_factor: Decimal,
    /// Flat rate used for the display-only net estimate (default 24%).
    #[serde(default = "default_tax_rate")]
    pub tax_rate: Decimal,
}

fn default_correction_factor() -> Decimal {
    Decimal::new(106, 2) // 1.06
}

fn default_tax_rate() -> Decimal {
    Decimal::new(24, 2) // 0.24
}

/// The five rates of one job in the jobs file.
#[derive(Debug, Clone, Deserialize)]
pub struct JobRates {
    /// Base hourly rate.
    pub hourly: Decimal,
    /// Hourly rate paid for overtime hours.
    pub overtime: Decimal,
    /// Hourly weekend differential.
    pub weekend: Decimal,
    /// Hourly night differential.
    pub night: Decimal,
    /// Hourly critical-coverage differential.
    pub critical: Decimal,
}

/// Jobs configuration file structure (`jobs.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct JobsConfig {
    /// Map of job name to its rates.
    pub jobs: HashMap<String, JobRates>,
}

impl JobsConfig {
    /// Converts the file entries into job profiles, sorted by name.
    pub fn profiles(&self) -> Vec<JobProfile> {
        let mut profiles: Vec<JobProfile> = self
            .jobs
            .iter()
            .map(|(name, rates)| JobProfile {
                job_name: name.clone(),
                hourly_rate: rates.hourly,
                overtime_rate: rates.overtime,
                weekend_rate: rates.weekend,
                night_rate: rates.night,
                critical_rate: rates.critical,
            })
            .collect();
        profiles.sort_by(|a, b| a.job_name.cmp(&b.job_name));
        profiles
    }
}

/// The complete payroll configuration loaded from a config directory.
#[derive(Debug, Clone)]
pub struct PayrollConfig {
    schedule: PaySchedule,
    params: EngineParams,
    jobs: Vec<JobProfile>,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig from its component parts.
    pub fn new(schedule: PaySchedule, params: EngineParams, jobs: Vec<JobProfile>) -> Self {
        Self {
            schedule,
            params,
            jobs,
        }
    }

    /// Returns the payroll schedule.
    pub fn schedule(&self) -> &PaySchedule {
        &self.schedule
    }

    /// Returns the engine parameters.
    pub fn params(&self) -> &EngineParams {
        &self.params
    }

    /// Returns the seed job profiles.
    pub fn jobs(&self) -> &[JobProfile] {
        &self.jobs
    }
}
