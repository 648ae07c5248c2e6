//! HTTP API module for the shift ledger.
//!
//! This module provides the REST endpoints for seeding calendars,
//! toggling working days, and reading pay summaries. It is presentation
//! glue over the calculation core: handlers translate between JSON and
//! the typed domain, and every calculation re-reads the shared store.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{JobRatesRequest, SetWorkingRequest};
pub use response::ApiError;
pub use state::AppState;
