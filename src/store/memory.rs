//! In-memory day store.

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{DayRecord, JobProfile};

use super::{DayStore, DayUpdate};

/// An in-memory [`DayStore`] backed by ordered maps.
///
/// Day records are keyed by date, job profiles by name. This is the
/// single-user, single-file storage model of the original design rendered
/// as plain collections; it is the default store behind the HTTP surface
/// and the store used throughout the test suite.
#[derive(Debug, Default)]
pub struct MemoryStore {
    days: BTreeMap<NaiveDate, DayRecord>,
    jobs: HashMap<String, JobProfile>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of day records held.
    pub fn day_count(&self) -> usize {
        self.days.len()
    }
}

impl DayStore for MemoryStore {
    fn get_days(&self, dates: &[NaiveDate]) -> LedgerResult<Vec<DayRecord>> {
        Ok(dates
            .iter()
            .filter_map(|date| self.days.get(date).cloned())
            .collect())
    }

    fn upsert_days(&mut self, records: &[DayRecord]) -> LedgerResult<()> {
        for record in records {
            self.days.insert(record.date, record.clone());
        }
        Ok(())
    }

    fn set_day_field(&mut self, date: NaiveDate, update: DayUpdate) -> LedgerResult<()> {
        let record = self
            .days
            .get_mut(&date)
            .ok_or(LedgerError::NotFound { date })?;

        match update {
            DayUpdate::Working(value) => record.is_working = value,
            DayUpdate::Overtime(value) => record.is_overtime = value,
            DayUpdate::Worth(value) => record.worth = value,
        }
        Ok(())
    }

    fn get_job(&self, name: &str) -> LedgerResult<Option<JobProfile>> {
        Ok(self.jobs.get(name).cloned())
    }

    fn upsert_job(&mut self, job: &JobProfile) -> LedgerResult<()> {
        job.validate()?;
        self.jobs.insert(job.job_name.clone(), job.clone());
        Ok(())
    }

    fn year_exists(&self, year: i32) -> LedgerResult<bool> {
        Ok(self
            .days
            .range(
                NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(NaiveDate::MIN)
                    ..=NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(NaiveDate::MAX),
            )
            .next()
            .is_some_and(|(date, _)| date.year() == year))
    }
}
