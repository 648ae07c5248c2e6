//! Day worth derivation.
//!
//! A day's worth is its base earnings if worked: one standard 12-hour
//! shift at the job's hourly rate, plus the weekend differential for the
//! full shift on Saturdays and Sundays.

use rust_decimal::Decimal;

use crate::models::{JobProfile, SHIFT_HOURS};

/// Computes the base earnings for a day.
///
/// `hourly_rate * 12` on weekdays; `hourly_rate * 12 + weekend_rate * 12`
/// on weekends.
///
/// # Examples
///
/// ```
/// use shiftledger::calculation::day_worth;
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
///
/// assert_eq!(day_worth(false, &job), Decimal::new(65400, 2)); // 654.00
/// assert_eq!(day_worth(true, &job), Decimal::new(77400, 2)); // 774.00
/// ```
pub fn day_worth(is_weekend: bool, job: &JobProfile) -> Decimal {
    let shift_hours = Decimal::from(SHIFT_HOURS);
    let base = job.hourly_rate * shift_hours;
    if is_weekend {
        base + job.weekend_rate * shift_hours
    } else {
        base
    }
}
