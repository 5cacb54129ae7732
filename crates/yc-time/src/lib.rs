//! # yc-time
//!
//! Date, period, frequency, day counter, and interest-rate types.
//!
//! Dates are plain calendar dates backed by [`chrono::NaiveDate`]; no
//! holiday calendar or business-day adjustment is applied anywhere in the
//! workspace.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// `DayCounter` trait and built-in day-count conventions.
pub mod day_counter;

/// Payment / compounding frequency.
pub mod frequency;

/// `InterestRate`: a rate with its conventions.
pub mod interest_rate;

/// `Period`: a time span in a `TimeUnit`.
pub mod period;

/// `TimeUnit`: days, weeks, months, years.
pub mod time_unit;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use day_counter::{Actual360, Actual365Fixed, DayCounter, Thirty360};
pub use frequency::Frequency;
pub use interest_rate::InterestRate;
pub use period::Period;
pub use time_unit::TimeUnit;
