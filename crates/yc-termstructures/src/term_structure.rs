//! `TermStructure`: base trait for all term structures.
//!
//! Every term structure has a **reference date**, a **day counter**, and a
//! **maximum date** (the furthest point it can be queried at without
//! extrapolation).  Times are year fractions from the reference date.

use std::sync::Arc;
use yc_core::errors::{Error, Result};
use yc_core::Time;
use yc_math::{close_enough, Extrapolator};
use yc_time::{Date, DayCounter};

/// Base trait for all term structures.
pub trait TermStructure: Extrapolator + std::fmt::Debug {
    /// The date at which discount = 1.0 and from which time is measured.
    ///
    /// Fallible because curves whose reference date floats with the
    /// evaluation date compute it on demand.
    fn reference_date(&self) -> Result<Date>;

    /// The day counter used for date → time conversions.
    fn day_counter(&self) -> &Arc<dyn DayCounter>;

    /// The latest date for which the curve can be used.
    fn max_date(&self) -> Date;

    /// The latest time for which the curve can be used.
    fn max_time(&self) -> Result<Time> {
        self.time_from_reference(self.max_date())
    }

    /// Convert a date to a year fraction relative to the reference date.
    fn time_from_reference(&self, date: Date) -> Result<Time> {
        Ok(self.day_counter().year_fraction(self.reference_date()?, date))
    }

    /// Check that `t` lies in the domain of the curve.
    ///
    /// Negative times are always rejected.  Times past
    /// [`max_time`](Self::max_time) are accepted only when `extrapolate` is
    /// requested or extrapolation is enabled on the curve.
    fn check_range(&self, t: Time, extrapolate: bool) -> Result<()> {
        if t < 0.0 {
            return Err(Error::Range(format!("negative time ({t}) given")));
        }
        if extrapolate || self.allows_extrapolation() {
            return Ok(());
        }
        let max = self.max_time()?;
        if t > max && !close_enough(t, max) {
            return Err(Error::Range(format!(
                "time ({t}) is past max curve time ({max})"
            )));
        }
        Ok(())
    }

    /// Date-based counterpart of [`check_range`](Self::check_range).
    fn check_range_date(&self, date: Date, extrapolate: bool) -> Result<()> {
        let reference = self.reference_date()?;
        if date < reference {
            return Err(Error::Range(format!(
                "date ({date}) before reference date ({reference})"
            )));
        }
        if !extrapolate && !self.allows_extrapolation() && date > self.max_date() {
            return Err(Error::Range(format!(
                "date ({date}) is past max curve date ({})",
                self.max_date()
            )));
        }
        Ok(())
    }
}
