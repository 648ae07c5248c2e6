//! Calculation logic for the shift ledger.
//!
//! This module contains all the calculation functions: canonical calendar
//! generation and seeding, day worth derivation, the weekly threshold
//! overtime rule, the alternate consecutive-day overtime annotation, and
//! the pay calculation engine that rolls weeks into biweekly and monthly
//! totals.

mod calendar;
mod consecutive;
mod engine;
mod overtime;
mod worth;

pub use calendar::{build_year, month_dates, month_grid, refresh_worth, seed_year};
pub use consecutive::{
    CONSECUTIVE_TRIGGER_DAYS, FIRST_EXTRA_HOURS, LATER_EXTRA_HOURS, consecutive_overtime,
    refresh_overtime_flags,
};
pub use engine::{calculate_month, calculate_period, net_after_tax, split_weeks};
pub use overtime::{WEEKLY_OVERTIME_THRESHOLD, apply_overtime};
pub use worth::day_worth;
