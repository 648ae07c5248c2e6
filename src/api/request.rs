//! Request types for the shift ledger API.
//!
//! This module defines the JSON request structures for the mutating
//! endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::JobProfile;

/// Request body for `PATCH /days/{date}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetWorkingRequest {
    /// The new value of the day's working flag.
    pub is_working: bool,
}

/// Request body for `PUT /jobs/{name}`.
///
/// Carries the five rates; the job name comes from the path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRatesRequest {
    /// Base hourly rate.
    pub hourly_rate: Decimal,
    /// Hourly rate paid for overtime hours.
    pub overtime_rate: Decimal,
    /// Hourly weekend differential.
    pub weekend_rate: Decimal,
    /// Hourly night differential.
    #[serde(default)]
    pub night_rate: Decimal,
    /// Hourly critical-coverage differential.
    #[serde(default)]
    pub critical_rate: Decimal,
}

impl JobRatesRequest {
    /// Builds the domain profile for the named job.
    pub fn into_profile(self, job_name: &str) -> JobProfile {
        JobProfile {
            job_name: job_name.to_string(),
            hourly_rate: self.hourly_rate,
            overtime_rate: self.overtime_rate,
            weekend_rate: self.weekend_rate,
            night_rate: self.night_rate,
            critical_rate: self.critical_rate,
        }
    }
}
