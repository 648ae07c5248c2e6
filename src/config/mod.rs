//! Configuration for the shift ledger.
//!
//! The payroll schedule, engine parameters, and seed job profiles are
//! domain configuration, not logic: they live in YAML files and are loaded
//! into strongly-typed structures at startup so future payroll years ship
//! as data changes only.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    EngineParams, JobRates, JobsConfig, PayrollConfig, PaySchedule, PeriodEntry, ScheduleConfig,
};
