//! `YieldTermStructure`: yield / interest-rate term structures.
//!
//! This module defines the `YieldTermStructure` trait together with the three
//! fundamental quantities any yield curve must provide:
//!
//! * **discount factor**: `P(0,t)`
//! * **zero rate**: the continuously-compounded (or other convention) zero
//!   rate for maturity *t*
//! * **forward rate**: the instantaneous or period forward rate between two
//!   times

use crate::term_structure::TermStructure;
use std::sync::Arc;
use yc_core::errors::Result;
use yc_core::{ensure, Compounding, DiscountFactor, Rate, Time};
use yc_time::{Date, DayCounter, Frequency, InterestRate};

/// Small time step used for instantaneous rates.
const DT: Time = 1.0e-4;

/// A yield (interest-rate) term structure.
///
/// Implementors provide [`discount_impl`](Self::discount_impl) and may
/// override the zero and forward hooks when they can do better than the
/// generic relationships.  The hooks do not check the domain; the public
/// methods do.
pub trait YieldTermStructure: TermStructure {
    // ── Low-level impl hooks ─────────────────────────────────────────────

    /// Discount factor for time `t`.
    fn discount_impl(&self, t: Time) -> Result<DiscountFactor>;

    /// Continuously-compounded zero yield for time `t`.
    ///
    /// Default: `-ln P(t) / t`, and the instantaneous forward at `t = 0`.
    fn zero_yield_impl(&self, t: Time) -> Result<Rate> {
        if t == 0.0 {
            return self.forward_impl(0.0);
        }
        Ok(-self.discount_impl(t)?.ln() / t)
    }

    /// Instantaneous forward rate at time `t`.
    ///
    /// Default: central difference of `-ln P` over [`DT`].
    fn forward_impl(&self, t: Time) -> Result<Rate> {
        let t1 = (t - DT / 2.0).max(0.0);
        let t2 = t1 + DT;
        Ok((self.discount_impl(t1)?.ln() - self.discount_impl(t2)?.ln()) / DT)
    }

    // ── Discount factors ─────────────────────────────────────────────────

    /// Discount factor for a time.
    fn discount(&self, t: Time) -> Result<DiscountFactor> {
        self.discount_with(t, false)
    }

    /// Discount factor for a time, optionally extrapolating.
    fn discount_with(&self, t: Time, extrapolate: bool) -> Result<DiscountFactor> {
        self.check_range(t, extrapolate)?;
        self.discount_impl(t)
    }

    /// Discount factor for a date.
    fn discount_date(&self, date: Date) -> Result<DiscountFactor> {
        self.discount(self.time_from_reference(date)?)
    }

    // ── Zero rates ───────────────────────────────────────────────────────

    /// Continuously-compounded zero rate for a time.
    fn zero_rate(&self, t: Time) -> Result<Rate> {
        self.zero_rate_with(t, false)
    }

    /// Continuously-compounded zero rate, optionally extrapolating.
    fn zero_rate_with(&self, t: Time, extrapolate: bool) -> Result<Rate> {
        self.check_range(t, extrapolate)?;
        self.zero_yield_impl(t)
    }

    /// Zero rate for time `t`, expressed under the given conventions and
    /// the curve's day counter.
    fn zero_rate_compounded(
        &self,
        t: Time,
        compounding: Compounding,
        frequency: Frequency,
    ) -> Result<InterestRate> {
        self.check_range(t, false)?;
        let t = if t == 0.0 { DT } else { t };
        let compound = 1.0 / self.discount_impl(t)?;
        InterestRate::implied_rate(compound, self.day_counter().clone(), compounding, frequency, t)
    }

    /// Zero rate between the reference date and `date`, expressed under the
    /// given conventions.
    fn zero_rate_date(
        &self,
        date: Date,
        day_counter: Arc<dyn DayCounter>,
        compounding: Compounding,
        frequency: Frequency,
    ) -> Result<InterestRate> {
        let reference = self.reference_date()?;
        if date == reference {
            let compound = 1.0 / self.discount(DT)?;
            return InterestRate::implied_rate(compound, day_counter, compounding, frequency, DT);
        }
        let compound = 1.0 / self.discount_date(date)?;
        let t = day_counter.year_fraction(reference, date);
        InterestRate::implied_rate(compound, day_counter, compounding, frequency, t)
    }

    // ── Forward rates ────────────────────────────────────────────────────

    /// Continuously-compounded forward rate between two times; the
    /// instantaneous forward when they coincide.
    fn forward_rate(&self, t1: Time, t2: Time) -> Result<Rate> {
        self.forward_rate_with(t1, t2, false)
    }

    /// [`forward_rate`](Self::forward_rate), optionally extrapolating.
    fn forward_rate_with(&self, t1: Time, t2: Time, extrapolate: bool) -> Result<Rate> {
        ensure!(t2 >= t1, "forward start time ({t1}) after end time ({t2})");
        self.check_range(t1, extrapolate)?;
        self.check_range(t2, extrapolate)?;
        if t1 == t2 {
            return self.forward_impl(t1);
        }
        Ok((self.discount_impl(t1)?.ln() - self.discount_impl(t2)?.ln()) / (t2 - t1))
    }

    /// Forward rate between two times, expressed under the given
    /// conventions and the curve's day counter.
    fn forward_rate_compounded(
        &self,
        t1: Time,
        t2: Time,
        compounding: Compounding,
        frequency: Frequency,
    ) -> Result<InterestRate> {
        ensure!(t2 >= t1, "forward start time ({t1}) after end time ({t2})");
        let (t1, t2) = if t1 == t2 {
            let start = (t1 - DT / 2.0).max(0.0);
            (start, start + DT)
        } else {
            (t1, t2)
        };
        self.check_range(t1, false)?;
        self.check_range(t2, false)?;
        let compound = self.discount_impl(t1)? / self.discount_impl(t2)?;
        InterestRate::implied_rate(
            compound,
            self.day_counter().clone(),
            compounding,
            frequency,
            t2 - t1,
        )
    }

    /// Forward rate between two dates, expressed under the given
    /// conventions.
    fn forward_rate_dates(
        &self,
        d1: Date,
        d2: Date,
        day_counter: Arc<dyn DayCounter>,
        compounding: Compounding,
        frequency: Frequency,
    ) -> Result<InterestRate> {
        ensure!(d2 >= d1, "forward start date ({d1}) after end date ({d2})");
        if d1 == d2 {
            let t = self.time_from_reference(d1)?;
            let t1 = (t - DT / 2.0).max(0.0);
            let t2 = t1 + DT;
            self.check_range(t2, false)?;
            let compound = self.discount_impl(t1)? / self.discount_impl(t2)?;
            return InterestRate::implied_rate(compound, day_counter, compounding, frequency, DT);
        }
        let compound = self.discount_date(d1)? / self.discount_date(d2)?;
        let t = day_counter.year_fraction(d1, d2);
        InterestRate::implied_rate(compound, day_counter, compounding, frequency, t)
    }
}
