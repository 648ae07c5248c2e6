//! Persistence contract for day records and job rate profiles.
//!
//! The core never talks to a concrete storage engine; it consumes the
//! [`DayStore`] trait and resolves explicit date lists before querying.
//! [`MemoryStore`] is the in-crate implementation backing the HTTP surface
//! and tests; any storage technology can replace it by implementing the
//! trait.

mod memory;

pub use memory::MemoryStore;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::LedgerResult;
use crate::models::{DayRecord, JobProfile};

/// A single-field mutation applied to an existing day record.
///
/// `date` is immutable once created, so updates cover only the mutable
/// fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayUpdate {
    /// Set the user-declared shift flag.
    Working(bool),
    /// Set the derived overtime annotation.
    Overtime(bool),
    /// Replace the day's worth after a rate change.
    Worth(Decimal),
}

/// Storage contract the core requires for day records and job profiles.
///
/// Implementations own the data; the core never caches records beyond a
/// single calculation pass, so a mutated `is_working` flag is always
/// re-read rather than assumed fresh.
pub trait DayStore: Send + Sync {
    /// Fetches the records for the given dates, preserving input order and
    /// silently skipping dates that have no record.
    fn get_days(&self, dates: &[NaiveDate]) -> LedgerResult<Vec<DayRecord>>;

    /// Inserts or replaces records, keyed by date. Idempotent: upserting
    /// the same records twice leaves the store unchanged.
    fn upsert_days(&mut self, records: &[DayRecord]) -> LedgerResult<()>;

    /// Applies a single-field mutation to the record for `date`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::LedgerError::NotFound`] when no record
    /// exists for the date.
    fn set_day_field(&mut self, date: NaiveDate, update: DayUpdate) -> LedgerResult<()>;

    /// Looks up a job rate profile by name.
    fn get_job(&self, name: &str) -> LedgerResult<Option<JobProfile>>;

    /// Inserts or replaces a job rate profile, keyed by name.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::LedgerError::InvalidJob`] when the profile
    /// carries a negative rate.
    fn upsert_job(&mut self, job: &JobProfile) -> LedgerResult<()>;

    /// Whether any record exists for the given year.
    ///
    /// Used by the calendar seeder to keep seeding idempotent.
    fn year_exists(&self, year: i32) -> LedgerResult<bool>;
}
