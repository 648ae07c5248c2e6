//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type describing one fixed
//! biweekly payroll cycle.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};

/// The number of days in a pay period (two 7-day weeks, inclusive).
pub(crate) const PERIOD_DAYS: i64 = 14;

/// One biweekly payroll cycle ending on a defined pay date.
///
/// Pay periods are statically enumerated per month per year and are
/// immutable configuration data, not derived. The start and end dates are
/// inclusive and span exactly 14 days.
///
/// # Example
///
/// ```
/// use shiftledger::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod {
///     pay_date: NaiveDate::from_ymd_opt(2025, 7, 15).unwrap(),
///     start_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 7, 14).unwrap(),
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 7, 8).unwrap()));
/// assert_eq!(period.dates().len(), 14);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The date the period is paid out.
    pub pay_date: NaiveDate,
    /// The start date of the period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// The explicit, ordered list of dates the period covers.
    ///
    /// The core always resolves this list first and queries the store by
    /// list, never by range.
    pub fn dates(&self) -> Vec<NaiveDate> {
        let mut dates = Vec::with_capacity(PERIOD_DAYS as usize);
        let mut current = self.start_date;
        while current <= self.end_date {
            dates.push(current);
            current = current + Days::new(1);
        }
        dates
    }

    /// The number of days the period spans, inclusive.
    pub fn span_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Checks the 14-day invariant and date ordering.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidSchedule`] when the span is not exactly
    /// 14 inclusive days.
    pub fn validate(&self) -> LedgerResult<()> {
        if self.span_days() != PERIOD_DAYS {
            return Err(LedgerError::InvalidSchedule {
                pay_date: self.pay_date,
                message: format!("spans {} days, expected {}", self.span_days(), PERIOD_DAYS),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn july_mid_period() -> PayPeriod {
        PayPeriod {
            pay_date: NaiveDate::from_ymd_opt(2025, 7, 15).unwrap(),
            start_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 7, 14).unwrap(),
        }
    }

    /// PP-001: contains_date within period
    #[test]
    fn test_contains_date_within_period() {
        let period = july_mid_period();
        assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 7, 8).unwrap()));
    }

    /// PP-002: contains_date is inclusive of both bounds
    #[test]
    fn test_contains_date_on_bounds() {
        let period = july_mid_period();
        assert!(period.contains_date(period.start_date));
        assert!(period.contains_date(period.end_date));
    }

    /// PP-003: contains_date outside period
    #[test]
    fn test_contains_date_outside_period() {
        let period = july_mid_period();
        assert!(!period.contains_date(NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()));
        assert!(!period.contains_date(NaiveDate::from_ymd_opt(2025, 7, 15).unwrap()));
    }

    /// PP-004: dates() lists all 14 days in order
    #[test]
    fn test_dates_are_ordered_and_complete() {
        let dates = july_mid_period().dates();
        assert_eq!(dates.len(), 14);
        assert_eq!(dates[0], NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
        assert_eq!(dates[13], NaiveDate::from_ymd_opt(2025, 7, 14).unwrap());
        assert!(dates.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_validate_accepts_14_day_span() {
        assert!(july_mid_period().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_short_span() {
        let period = PayPeriod {
            pay_date: NaiveDate::from_ymd_opt(2025, 7, 15).unwrap(),
            start_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 7, 13).unwrap(),
        };

        match period.validate() {
            Err(LedgerError::InvalidSchedule { pay_date, message }) => {
                assert_eq!(pay_date, period.pay_date);
                assert!(message.contains("13"));
            }
            other => panic!("Expected InvalidSchedule error, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_pay_period() {
        let json = r#"{
            "pay_date": "2025-07-15",
            "start_date": "2025-07-01",
            "end_date": "2025-07-14"
        }"#;
        let period: PayPeriod = serde_json::from_str(json).unwrap();
        assert_eq!(period, july_mid_period());
    }
}
