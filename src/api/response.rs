//! Response types for the shift ledger API.
//!
//! This module defines the response structures and the error mapping
//! from [`LedgerError`] to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;
use crate::models::DayRecord;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a job-not-found error response.
    pub fn job_not_found(name: &str) -> Self {
        Self::with_details(
            "JOB_NOT_FOUND",
            format!("Job profile not found: {}", name),
            format!("No job profile named '{}' exists in the store", name),
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<LedgerError> for ApiErrorResponse {
    fn from(error: LedgerError) -> Self {
        match error {
            LedgerError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            LedgerError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            LedgerError::Configuration { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIGURATION_ERROR",
                    "Missing runtime configuration",
                    message,
                ),
            },
            LedgerError::UnknownPeriod { month } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "UNKNOWN_PERIOD",
                    format!("No pay periods defined for month {}", month),
                    "The requested month is outside the loaded payroll schedule",
                ),
            },
            LedgerError::NotFound { date } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "DAY_NOT_FOUND",
                    format!("Day record not found: {}", date),
                    "The date has not been seeded into the calendar",
                ),
            },
            LedgerError::InvalidSchedule { pay_date, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    format!("Invalid pay period paid {}", pay_date),
                    message,
                ),
            },
            LedgerError::InvalidJob { job_name, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_JOB",
                    format!("Invalid job profile '{}'", job_name),
                    message,
                ),
            },
            LedgerError::Persistence { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("PERSISTENCE_ERROR", "Persistence failure", message),
            },
        }
    }
}

/// Response body for `POST /calendar/{year}/seed`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedResponse {
    /// The seeded year.
    pub year: i32,
    /// Records written; 0 when the year was already seeded.
    pub seeded: usize,
}

/// One cell of the month grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridDay {
    /// The cell's date.
    pub date: NaiveDate,
    /// Whether the date belongs to the requested month (the grid leads
    /// and trails with adjacent-month dates).
    pub in_month: bool,
    /// The stored record, absent when the date has not been seeded.
    pub record: Option<DayRecord>,
}

/// Response body for `GET /calendar/{year}/{month}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthCalendarResponse {
    /// The requested year.
    pub year: i32,
    /// The requested month (1-12).
    pub month: u32,
    /// Sunday-first week rows covering the month.
    pub weeks: Vec<Vec<GridDay>>,
}

/// Response body for `PATCH /days/{date}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleResponse {
    /// The record after the mutation and overtime-flag refresh.
    pub day: DayRecord,
    /// How many records had their overtime flag rewritten.
    pub overtime_flags_updated: usize,
}

/// Response body for `PUT /jobs/{name}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobUpdateResponse {
    /// The stored profile.
    pub job: crate::models::JobProfile,
    /// Day records whose worth was recomputed from the new rates.
    pub worth_updated: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_unknown_period_maps_to_not_found() {
        let api_error: ApiErrorResponse = LedgerError::UnknownPeriod { month: 13 }.into();
        assert_eq!(api_error.status, StatusCode::NOT_FOUND);
        assert_eq!(api_error.error.code, "UNKNOWN_PERIOD");
    }

    #[test]
    fn test_day_not_found_maps_to_not_found() {
        let api_error: ApiErrorResponse = LedgerError::NotFound {
            date: NaiveDate::from_ymd_opt(2099, 1, 1).unwrap(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::NOT_FOUND);
        assert_eq!(api_error.error.code, "DAY_NOT_FOUND");
    }

    #[test]
    fn test_configuration_maps_to_internal_error() {
        let api_error: ApiErrorResponse = LedgerError::Configuration {
            message: "no active job profile".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIGURATION_ERROR");
    }

    #[test]
    fn test_invalid_job_maps_to_bad_request() {
        let api_error: ApiErrorResponse = LedgerError::InvalidJob {
            job_name: "unc_nursing".to_string(),
            message: "hourly rate is negative".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_JOB");
    }
}
