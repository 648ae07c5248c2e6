//! Job rate profile model.
//!
//! This module defines the [`JobProfile`] struct, a named set of pay rates.
//! Exactly one profile is active for pay calculations in the single-job
//! model; the active name is configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};

/// A named set of pay rates for one job.
///
/// All rates are dollar amounts per hour. The weekend, night, and critical
/// rates are differentials added on top of the hourly rate, not multipliers.
///
/// # Example
///
/// ```
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
/// assert!(job.validate().is_ok());
/// assert_eq!(job.overtime_differential(), Decimal::new(3615, 2)); // 36.15
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobProfile {
    /// Unique name of the job (e.g., "unc_nursing").
    pub job_name: String,
    /// Base hourly rate.
    pub hourly_rate: Decimal,
    /// Hourly rate paid for overtime hours.
    pub overtime_rate: Decimal,
    /// Hourly differential added on weekend days.
    pub weekend_rate: Decimal,
    /// Hourly differential added on night shifts.
    pub night_rate: Decimal,
    /// Hourly differential added on critical-coverage shifts.
    pub critical_rate: Decimal,
}

impl JobProfile {
    /// Checks that every rate is non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidJob`] naming the first negative rate.
    pub fn validate(&self) -> LedgerResult<()> {
        let rates = [
            ("hourly", self.hourly_rate),
            ("overtime", self.overtime_rate),
            ("weekend", self.weekend_rate),
            ("night", self.night_rate),
            ("critical", self.critical_rate),
        ];
        for (field, rate) in rates {
            if rate < Decimal::ZERO {
                return Err(LedgerError::InvalidJob {
                    job_name: self.job_name.clone(),
                    message: format!("{} rate is negative", field),
                });
            }
        }
        Ok(())
    }

    /// The per-hour surcharge an overtime hour earns over an ordinary hour.
    pub fn overtime_differential(&self) -> Decimal {
        self.overtime_rate - self.hourly_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unc_nursing() -> JobProfile {
        JobProfile {
            job_name: "unc_nursing".to_string(),
            hourly_rate: Decimal::new(5450, 2),
            overtime_rate: Decimal::new(9065, 2),
            weekend_rate: Decimal::new(1000, 2),
            night_rate: Decimal::new(425, 2),
            critical_rate: Decimal::new(750, 2),
        }
    }

    /// JP-001: a valid profile passes validation
    #[test]
    fn test_validate_accepts_non_negative_rates() {
        assert!(unc_nursing().validate().is_ok());
    }

    /// JP-002: a negative rate is rejected and named
    #[test]
    fn test_validate_rejects_negative_rate() {
        let mut job = unc_nursing();
        job.weekend_rate = Decimal::new(-100, 2);

        match job.validate() {
            Err(LedgerError::InvalidJob { job_name, message }) => {
                assert_eq!(job_name, "unc_nursing");
                assert!(message.contains("weekend"));
            }
            other => panic!("Expected InvalidJob error, got {:?}", other),
        }
    }

    /// JP-003: zero rates are allowed
    #[test]
    fn test_validate_accepts_zero_rates() {
        let mut job = unc_nursing();
        job.night_rate = Decimal::ZERO;
        job.critical_rate = Decimal::ZERO;
        assert!(job.validate().is_ok());
    }

    #[test]
    fn test_overtime_differential() {
        // 90.65 - 54.50 = 36.15
        assert_eq!(unc_nursing().overtime_differential(), Decimal::new(3615, 2));
    }

    #[test]
    fn test_deserialization() {
        let json = r#"{
            "job_name": "unc_nursing",
            "hourly_rate": "54.50",
            "overtime_rate": "90.65",
            "weekend_rate": "10.00",
            "night_rate": "4.25",
            "critical_rate": "7.50"
        }"#;

        let job: JobProfile = serde_json::from_str(json).unwrap();
        assert_eq!(job, unc_nursing());
    }

    #[test]
    fn test_serialization_round_trip() {
        let job = unc_nursing();
        let json = serde_json::to_string(&job).unwrap();
        let deserialized: JobProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(job, deserialized);
    }
}
