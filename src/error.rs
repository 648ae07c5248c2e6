//! Error types for the shift ledger.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while building calendars,
//! resolving pay periods, and calculating pay.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the shift ledger.
///
/// All fallible operations in the crate return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use shiftledger::error::LedgerError;
///
/// let error = LedgerError::ConfigNotFound {
///     path: "/missing/schedule.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/schedule.yaml");
/// ```
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A required piece of runtime configuration was missing, most
    /// commonly the active job rate profile.
    #[error("Configuration error: {message}")]
    Configuration {
        /// A description of what was missing.
        message: String,
    },

    /// The requested month has no pay periods in the loaded schedule.
    #[error("No pay periods defined for month {month}")]
    UnknownPeriod {
        /// The month (1-12) that had no schedule entry.
        month: u32,
    },

    /// A single-date mutation targeted a day record that does not exist.
    ///
    /// Bulk lookups via `get_days` stay lenient and simply omit missing
    /// dates; only explicit writes to an absent record surface this error.
    #[error("Day record not found: {date}")]
    NotFound {
        /// The date that was not found.
        date: NaiveDate,
    },

    /// A pay period in the schedule does not span exactly 14 days.
    #[error("Invalid pay period paid {pay_date}: {message}")]
    InvalidSchedule {
        /// The pay date of the offending period.
        pay_date: NaiveDate,
        /// A description of what made the period invalid.
        message: String,
    },

    /// A job rate profile contained an invalid rate.
    #[error("Invalid job profile '{job_name}': {message}")]
    InvalidJob {
        /// The name of the invalid profile.
        job_name: String,
        /// A description of what made the profile invalid.
        message: String,
    },

    /// An opaque failure from the day store.
    ///
    /// Never swallowed by the core; surfaced to the caller, which decides
    /// whether to log, alert, or ignore.
    #[error("Persistence error: {message}")]
    Persistence {
        /// A description of the underlying failure.
        message: String,
    },
}

/// A type alias for Results that return LedgerError.
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = LedgerError::ConfigNotFound {
            path: "/missing/schedule.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/schedule.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = LedgerError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_configuration_displays_message() {
        let error = LedgerError::Configuration {
            message: "no active job profile".to_string(),
        };
        assert_eq!(error.to_string(), "Configuration error: no active job profile");
    }

    #[test]
    fn test_unknown_period_displays_month() {
        let error = LedgerError::UnknownPeriod { month: 13 };
        assert_eq!(error.to_string(), "No pay periods defined for month 13");
    }

    #[test]
    fn test_not_found_displays_date() {
        let error = LedgerError::NotFound {
            date: NaiveDate::from_ymd_opt(2099, 1, 1).unwrap(),
        };
        assert_eq!(error.to_string(), "Day record not found: 2099-01-01");
    }

    #[test]
    fn test_invalid_schedule_displays_pay_date() {
        let error = LedgerError::InvalidSchedule {
            pay_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            message: "spans 13 days".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid pay period paid 2025-07-01: spans 13 days"
        );
    }

    #[test]
    fn test_invalid_job_displays_name_and_message() {
        let error = LedgerError::InvalidJob {
            job_name: "unc_nursing".to_string(),
            message: "hourly rate is negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid job profile 'unc_nursing': hourly rate is negative"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<LedgerError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_unknown_period() -> LedgerResult<()> {
            Err(LedgerError::UnknownPeriod { month: 0 })
        }

        fn propagates_error() -> LedgerResult<()> {
            returns_unknown_period()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
