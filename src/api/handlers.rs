//! HTTP request handlers for the shift ledger API.
//!
//! This module contains the handler functions for all API endpoints.

use std::collections::HashMap;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, post},
};
use chrono::{Datelike, NaiveDate};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_month, month_grid, refresh_overtime_flags, refresh_worth, seed_year,
};
use crate::error::LedgerError;
use crate::models::DayRecord;
use crate::store::DayUpdate;

use super::request::{JobRatesRequest, SetWorkingRequest};
use super::response::{
    ApiError, ApiErrorResponse, GridDay, JobUpdateResponse, MonthCalendarResponse, SeedResponse,
    ToggleResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calendar/:year/seed", post(seed_year_handler))
        .route("/calendar/:year/:month", get(month_calendar_handler))
        .route("/days/:date", patch(set_working_handler))
        .route("/pay/:year/:month", get(month_pay_handler))
        .route("/jobs/:name", get(get_job_handler).put(put_job_handler))
        .with_state(state)
}

/// Handler for POST /calendar/{year}/seed.
///
/// Seeds the canonical calendar for a year from the active job profile.
/// Idempotent: an already-seeded year reports zero written records.
async fn seed_year_handler(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, year, "Seeding calendar year");

    let job_name = state.config().params().active_job.clone();
    match state.write_store(|store| seed_year(store, year, &job_name)) {
        Ok(seeded) => {
            info!(correlation_id = %correlation_id, year, seeded, "Calendar seed completed");
            (StatusCode::OK, Json(SeedResponse { year, seeded })).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Calendar seed failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /calendar/{year}/{month}.
///
/// Returns the Sunday-first month grid with the stored record for each
/// seeded date; unseeded dates come back with a null record rather than
/// an error, matching the lenient lookup contract.
async fn month_calendar_handler(
    State(state): State<AppState>,
    Path((year, month)): Path<(i32, u32)>,
) -> impl IntoResponse {
    let grid = month_grid(year, month);
    if grid.is_empty() {
        let error = ApiError::validation_error(format!("no such month: {}-{}", year, month));
        return (StatusCode::BAD_REQUEST, Json(error)).into_response();
    }

    let dates: Vec<NaiveDate> = grid.iter().flatten().copied().collect();
    match state.read_store(|store| store.get_days(&dates)) {
        Ok(days) => {
            let by_date: HashMap<NaiveDate, DayRecord> =
                days.into_iter().map(|day| (day.date, day)).collect();

            let weeks = grid
                .into_iter()
                .map(|row| {
                    row.into_iter()
                        .map(|date| GridDay {
                            date,
                            in_month: date.year() == year && date.month() == month,
                            record: by_date.get(&date).cloned(),
                        })
                        .collect()
                })
                .collect();

            (StatusCode::OK, Json(MonthCalendarResponse { year, month, weeks })).into_response()
        }
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for PATCH /days/{date}.
///
/// Sets the working flag for one day, then re-derives the `is_overtime`
/// annotations for the pay period containing the date. The store is the
/// source of truth: the response record is read back, not echoed.
async fn set_working_handler(
    State(state): State<AppState>,
    Path(date): Path<String>,
    payload: Result<Json<SetWorkingRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let Ok(date) = NaiveDate::parse_from_str(&date, "%Y-%m-%d") else {
        let error = ApiError::validation_error(format!("date must be YYYY-MM-DD, got '{}'", date));
        return (StatusCode::BAD_REQUEST, Json(error)).into_response();
    };

    info!(
        correlation_id = %correlation_id,
        date = %date,
        is_working = request.is_working,
        "Toggling working day"
    );

    let period = state.config().schedule().period_containing(date).copied();
    let job_name = state.config().params().active_job.clone();

    let result = state.write_store(|store| {
        store.set_day_field(date, DayUpdate::Working(request.is_working))?;

        let mut flags = 0;
        if let Some(period) = period {
            if let Some(job) = store.get_job(&job_name)? {
                flags = refresh_overtime_flags(store, &period, &job)?;
            }
        }

        let day = store
            .get_days(&[date])?
            .into_iter()
            .next()
            .ok_or(LedgerError::NotFound { date })?;

        Ok(ToggleResponse {
            day,
            overtime_flags_updated: flags,
        })
    });

    match result {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Working-day toggle failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /pay/{year}/{month}.
///
/// Calculates the month's pay summary against the loaded schedule. The
/// year must match the schedule year; schedules for other years have to
/// be supplied as configuration.
async fn month_pay_handler(
    State(state): State<AppState>,
    Path((year, month)): Path<(i32, u32)>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let schedule = state.config().schedule();
    if year != schedule.year() {
        let error = ApiError::with_details(
            "UNKNOWN_PERIOD",
            format!("No payroll schedule loaded for year {}", year),
            format!("The loaded schedule covers {}", schedule.year()),
        );
        return (StatusCode::NOT_FOUND, Json(error)).into_response();
    }

    let params = state.config().params();
    match state.read_store(|store| calculate_month(store, schedule, params, month)) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                year,
                month,
                gross = %result.gross,
                "Month pay calculated"
            );
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Month pay calculation failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /jobs/{name}.
async fn get_job_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    match state.read_store(|store| store.get_job(&name)) {
        Ok(Some(job)) => (StatusCode::OK, Json(job)).into_response(),
        Ok(None) => {
            (StatusCode::NOT_FOUND, Json(ApiError::job_not_found(&name))).into_response()
        }
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for PUT /jobs/{name}.
///
/// Upserts a job rate profile. When the active profile changes, every
/// stored worth for the schedule year is recomputed — worth is derived
/// data and must never survive a rate change.
async fn put_job_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    payload: Result<Json<JobRatesRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let profile = request.into_profile(&name);
    let is_active = state.config().params().active_job == name;
    let year = state.config().schedule().year();

    let result = state.write_store(|store| {
        store.upsert_job(&profile)?;
        let worth_updated = if is_active {
            refresh_worth(store, year, &profile)?
        } else {
            0
        };
        Ok(JobUpdateResponse {
            job: profile.clone(),
            worth_updated,
        })
    });

    match result {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                job = %name,
                worth_updated = response.worth_updated,
                "Job profile updated"
            );
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Job update failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Maps a JSON extraction rejection to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    (StatusCode::BAD_REQUEST, Json(error)).into_response()
}
