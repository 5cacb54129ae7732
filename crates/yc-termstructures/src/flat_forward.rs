//! `FlatForward`: a yield term structure with a constant forward rate.
//!
//! The rate is read from a quote on every query, so a change in the quote
//! moves the whole curve.

use crate::term_structure::TermStructure;
use crate::yield_term_structure::YieldTermStructure;
use std::sync::Arc;
use yc_core::errors::{Error, Result};
use yc_core::{Compounding, DiscountFactor, Handle, Rate, Time};
use yc_math::Extrapolator;
use yc_quotes::{IntoQuoteHandle, Quote};
use yc_time::{Date, DayCounter, Frequency, InterestRate};

/// A flat (constant) forward-rate yield term structure.
///
/// Discount factors are computed as `P(t) = exp(-r * t)` where `r` is the
/// continuously-compounded equivalent of the quoted rate over one year.
#[derive(Debug)]
pub struct FlatForward {
    reference_date: Date,
    rate: Handle<dyn Quote>,
    day_counter: Arc<dyn DayCounter>,
    compounding: Compounding,
    frequency: Frequency,
    extrapolate: bool,
}

impl FlatForward {
    /// Create a flat-forward curve for a rate quoted under the given
    /// conventions.
    pub fn new(
        reference_date: Date,
        rate: impl IntoQuoteHandle,
        day_counter: impl DayCounter + 'static,
        compounding: Compounding,
        frequency: Frequency,
    ) -> Result<Self> {
        let day_counter: Arc<dyn DayCounter> = Arc::new(day_counter);
        // rejects irregular frequencies for compounded conventions
        InterestRate::with_day_counter(0.0, day_counter.clone(), compounding, frequency)?;
        Ok(Self {
            reference_date,
            rate: rate.into_quote_handle(),
            day_counter,
            compounding,
            frequency,
            extrapolate: false,
        })
    }

    /// Create a flat-forward curve assuming continuous compounding.
    pub fn continuous(
        reference_date: Date,
        rate: impl IntoQuoteHandle,
        day_counter: impl DayCounter + 'static,
    ) -> Self {
        Self {
            reference_date,
            rate: rate.into_quote_handle(),
            day_counter: Arc::new(day_counter),
            compounding: Compounding::Continuous,
            frequency: Frequency::NoFrequency,
            extrapolate: false,
        }
    }

    /// The quoted rate with its conventions.
    pub fn rate(&self) -> Result<InterestRate> {
        let value = self
            .rate
            .get()
            .and_then(|q| q.value())
            .ok_or_else(|| Error::Configuration("null flat-forward rate quote".into()))?;
        InterestRate::with_day_counter(
            value,
            self.day_counter.clone(),
            self.compounding,
            self.frequency,
        )
    }

    fn continuous_rate(&self) -> Result<Rate> {
        Ok(self.rate()?.compound_factor(1.0)?.ln())
    }
}

impl Extrapolator for FlatForward {
    fn allows_extrapolation(&self) -> bool {
        self.extrapolate
    }

    fn set_extrapolation(&mut self, allow: bool) {
        self.extrapolate = allow;
    }
}

impl TermStructure for FlatForward {
    fn reference_date(&self) -> Result<Date> {
        Ok(self.reference_date)
    }

    fn day_counter(&self) -> &Arc<dyn DayCounter> {
        &self.day_counter
    }

    fn max_date(&self) -> Date {
        Date::MAX
    }
}

impl YieldTermStructure for FlatForward {
    fn discount_impl(&self, t: Time) -> Result<DiscountFactor> {
        Ok((-self.continuous_rate()? * t).exp())
    }

    fn zero_yield_impl(&self, _t: Time) -> Result<Rate> {
        self.continuous_rate()
    }

    fn forward_impl(&self, _t: Time) -> Result<Rate> {
        self.continuous_rate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use yc_quotes::SimpleQuote;
    use yc_time::{Actual360, Actual365Fixed};

    fn today() -> Date {
        Date::from_ymd(2024, 6, 3).unwrap()
    }

    #[test]
    fn continuous_rate() {
        let curve = FlatForward::continuous(today(), 0.05, Actual365Fixed);
        assert_abs_diff_eq!(curve.discount(1.0).unwrap(), (-0.05_f64).exp(), epsilon = 1e-15);
        assert_abs_diff_eq!(curve.zero_rate(7.0).unwrap(), 0.05, epsilon = 1e-15);
        assert_abs_diff_eq!(curve.forward_rate(2.0, 5.0).unwrap(), 0.05, epsilon = 1e-14);
    }

    #[test]
    fn annual_compounding_is_converted() {
        let curve = FlatForward::new(
            today(),
            0.05,
            Actual365Fixed,
            Compounding::Compounded,
            Frequency::Annual,
        )
        .unwrap();
        assert_abs_diff_eq!(curve.discount(1.0).unwrap(), 1.0 / 1.05, epsilon = 1e-15);
        let rate = curve
            .zero_rate_compounded(3.0, Compounding::Compounded, Frequency::Annual)
            .unwrap();
        assert_abs_diff_eq!(rate.rate(), 0.05, epsilon = 1e-14);
    }

    #[test]
    fn irregular_frequency_is_rejected() {
        let err = FlatForward::new(
            today(),
            0.05,
            Actual360,
            Compounding::Compounded,
            Frequency::Once,
        )
        .unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn follows_its_quote() {
        let quote = Arc::new(SimpleQuote::new(0.02));
        let curve = FlatForward::continuous(today(), &quote, Actual365Fixed);
        assert_abs_diff_eq!(curve.zero_rate(1.0).unwrap(), 0.02, epsilon = 1e-15);
        quote.set_value(0.03);
        assert_abs_diff_eq!(curve.zero_rate(1.0).unwrap(), 0.03, epsilon = 1e-15);
        quote.reset();
        assert!(curve.discount(1.0).unwrap_err().is_configuration());
    }

    #[test]
    fn never_runs_out_of_range() {
        let curve = FlatForward::continuous(today(), 0.01, Actual365Fixed);
        assert!(curve.discount(500.0).is_ok());
        assert!(curve.discount(-1.0).unwrap_err().is_range());
    }
}
