//! `Date` type.
//!
//! A thin wrapper around [`chrono::NaiveDate`] exposing the fallible,
//! unit-aware arithmetic the curve code needs.  Month arithmetic clamps to
//! the end of the target month (Jan 31 + 1M = Feb 28/29).

use crate::period::Period;
use crate::time_unit::TimeUnit;
use chrono::{Datelike, Days, Months, NaiveDate};
use yc_core::errors::{Error, Result};

/// A calendar date.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    /// Earliest representable date.
    pub const MIN: Date = Date(NaiveDate::MIN);

    /// Latest representable date.
    pub const MAX: Date = Date(NaiveDate::MAX);

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| Error::Date(format!("invalid date {year}-{month:02}-{day:02}")))
    }

    /// The underlying chrono date.
    pub fn naive(self) -> NaiveDate {
        self.0
    }

    /// The year.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// The month (1–12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// The day of the month (1–31).
    pub fn day_of_month(&self) -> u32 {
        self.0.day()
    }

    /// Advance by `n` calendar days (negative moves backwards).
    pub fn add_days(self, n: i64) -> Result<Self> {
        let shifted = if n >= 0 {
            self.0.checked_add_days(Days::new(n.unsigned_abs()))
        } else {
            self.0.checked_sub_days(Days::new(n.unsigned_abs()))
        };
        shifted
            .map(Date)
            .ok_or_else(|| Error::Date(format!("{self} + {n} days is out of range")))
    }

    /// Advance by `n` units of `unit`.
    pub fn advance(self, n: i32, unit: TimeUnit) -> Result<Self> {
        match unit {
            TimeUnit::Days => self.add_days(i64::from(n)),
            TimeUnit::Weeks => self.add_days(7 * i64::from(n)),
            TimeUnit::Months => {
                let months = Months::new(n.unsigned_abs());
                let shifted = if n >= 0 {
                    self.0.checked_add_months(months)
                } else {
                    self.0.checked_sub_months(months)
                };
                shifted
                    .map(Date)
                    .ok_or_else(|| Error::Date(format!("{self} + {n} months is out of range")))
            }
            TimeUnit::Years => {
                let months = n
                    .checked_mul(12)
                    .ok_or_else(|| Error::Date(format!("{n} years overflows")))?;
                self.advance(months, TimeUnit::Months)
            }
        }
    }

    /// Advance by a [`Period`].
    pub fn advance_by(self, period: Period) -> Result<Self> {
        self.advance(period.length, period.unit)
    }

    /// Number of calendar days from `self` to `other` (positive if
    /// `other > self`).
    pub fn days_between(self, other: Date) -> i64 {
        other.0.signed_duration_since(self.0).num_days()
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn rejects_invalid_dates() {
        assert!(Date::from_ymd(2023, 2, 29).is_err());
        assert!(Date::from_ymd(2024, 13, 1).is_err());
        assert!(Date::from_ymd(2024, 2, 29).is_ok());
    }

    #[test]
    fn month_arithmetic_clamps_to_month_end() {
        assert_eq!(date(2024, 1, 31).advance(1, TimeUnit::Months).unwrap(), date(2024, 2, 29));
        assert_eq!(date(2024, 3, 31).advance(-1, TimeUnit::Months).unwrap(), date(2024, 2, 29));
        assert_eq!(date(2024, 2, 29).advance(1, TimeUnit::Years).unwrap(), date(2025, 2, 28));
    }

    #[test]
    fn day_and_week_arithmetic() {
        let d = date(2024, 12, 30);
        assert_eq!(d.add_days(3).unwrap(), date(2025, 1, 2));
        assert_eq!(d.add_days(-30).unwrap(), date(2024, 11, 30));
        assert_eq!(d.advance(2, TimeUnit::Weeks).unwrap(), date(2025, 1, 13));
        assert_eq!(d.days_between(date(2025, 1, 2)), 3);
    }

    #[test]
    fn overflow_is_an_error() {
        assert!(Date::MAX.add_days(1).is_err());
        assert!(Date::MIN.advance(-1, TimeUnit::Months).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(date(2007, 7, 4).to_string(), "2007-07-04");
        assert_eq!(format!("{:?}", date(2007, 7, 4)), "Date(2007-07-04)");
    }
}
