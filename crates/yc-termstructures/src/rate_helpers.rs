//! Rate helpers for yield-curve bootstrapping.
//!
//! A *rate helper* wraps a market-observable quote (a deposit rate, FRA
//! rate, futures price or par swap rate) together with the dates and
//! conventions needed to compute the same quantity off a curve.  The
//! bootstrapper adjusts one curve node per helper until the implied quote
//! matches the observed one.
//!
//! Dates are taken as given: no holiday calendar or business-day
//! adjustment is applied.

use crate::yield_term_structure::YieldTermStructure;
use std::sync::{Arc, Weak};
use yc_core::errors::{Error, Result};
use yc_core::{ensure, fail, Handle, Observer, Rate, Real, Time};
use yc_quotes::{IntoQuoteHandle, Quote};
use yc_time::{Date, DayCounter, Frequency, Period};

// ── RateHelper trait ──────────────────────────────────────────────────────────

/// A single market quote that constrains the yield curve at its latest
/// date.
pub trait RateHelper: std::fmt::Debug + Send + Sync {
    /// The observed quote.
    fn quote(&self) -> &Handle<dyn Quote>;

    /// The first date the instrument depends on.
    fn earliest_date(&self) -> Date;

    /// The maturity; the bootstrapped node sits here.
    fn latest_date(&self) -> Date;

    /// The quote implied by `curve`.
    fn implied_quote(&self, curve: &dyn YieldTermStructure) -> Result<Real>;

    /// The current value of the observed quote.
    ///
    /// # Errors
    /// `Configuration` if the handle is empty or the quote has no value.
    fn reference_quote(&self) -> Result<Real> {
        self.quote().get().and_then(|q| q.value()).ok_or_else(|| {
            Error::Configuration(format!(
                "invalid quote for instrument maturing {}",
                self.latest_date()
            ))
        })
    }

    /// Observed minus implied quote.
    fn quote_error(&self, curve: &dyn YieldTermStructure) -> Result<Real> {
        Ok(self.reference_quote()? - self.implied_quote(curve)?)
    }

    /// Register `observer` with every quote the helper reads.
    fn register_with(&self, observer: Weak<dyn Observer>) {
        if let Some(quote) = self.quote().get() {
            quote.register_observer(observer);
        }
    }
}

/// Simple forward rate over `[start, end]` with accrual `tau`.
fn simple_forward(
    curve: &dyn YieldTermStructure,
    start: Date,
    end: Date,
    tau: Time,
) -> Result<Rate> {
    Ok((curve.discount_date(start)? / curve.discount_date(end)? - 1.0) / tau)
}

fn accrual(day_counter: &dyn DayCounter, start: Date, end: Date) -> Result<Time> {
    ensure!(end > start, "end date ({end}) must be after start date ({start})");
    let tau = day_counter.year_fraction(start, end);
    ensure!(tau > 0.0, "zero accrual between {start} and {end} under {}", day_counter.name());
    Ok(tau)
}

// ── DepositRateHelper ─────────────────────────────────────────────────────────

/// A deposit (money-market) rate helper.
///
/// The implied quote is the simple rate over `[settlement, maturity]`:
/// `(P(s)/P(m) − 1) / τ`.
#[derive(Debug)]
pub struct DepositRateHelper {
    rate: Handle<dyn Quote>,
    settlement_date: Date,
    maturity_date: Date,
    year_fraction: Time,
}

impl DepositRateHelper {
    /// Create a deposit rate helper from explicit settlement and maturity
    /// dates.
    pub fn new(
        rate: impl IntoQuoteHandle,
        settlement_date: Date,
        maturity_date: Date,
        day_counter: impl DayCounter,
    ) -> Result<Self> {
        let year_fraction = accrual(&day_counter, settlement_date, maturity_date)?;
        Ok(Self {
            rate: rate.into_quote_handle(),
            settlement_date,
            maturity_date,
            year_fraction,
        })
    }

    /// Create a deposit rate helper maturing `tenor` after settlement.
    pub fn from_tenor(
        rate: impl IntoQuoteHandle,
        settlement_date: Date,
        tenor: Period,
        day_counter: impl DayCounter,
    ) -> Result<Self> {
        let maturity = settlement_date.advance_by(tenor)?;
        Self::new(rate, settlement_date, maturity, day_counter)
    }
}

impl RateHelper for DepositRateHelper {
    fn quote(&self) -> &Handle<dyn Quote> {
        &self.rate
    }

    fn earliest_date(&self) -> Date {
        self.settlement_date
    }

    fn latest_date(&self) -> Date {
        self.maturity_date
    }

    fn implied_quote(&self, curve: &dyn YieldTermStructure) -> Result<Real> {
        simple_forward(curve, self.settlement_date, self.maturity_date, self.year_fraction)
    }
}

// ── FraRateHelper ─────────────────────────────────────────────────────────────

/// A forward-rate-agreement helper.
///
/// The implied quote is the simple forward rate between the value date and
/// the maturity date.
#[derive(Debug)]
pub struct FraRateHelper {
    rate: Handle<dyn Quote>,
    value_date: Date,
    maturity_date: Date,
    year_fraction: Time,
}

impl FraRateHelper {
    /// Create a FRA helper from explicit value and maturity dates.
    pub fn new(
        rate: impl IntoQuoteHandle,
        value_date: Date,
        maturity_date: Date,
        day_counter: impl DayCounter,
    ) -> Result<Self> {
        let year_fraction = accrual(&day_counter, value_date, maturity_date)?;
        Ok(Self {
            rate: rate.into_quote_handle(),
            value_date,
            maturity_date,
            year_fraction,
        })
    }

    /// Create an `m × n` FRA: the period from `months_to_start` to
    /// `months_to_end` months after settlement.
    pub fn from_months(
        rate: impl IntoQuoteHandle,
        settlement_date: Date,
        months_to_start: i32,
        months_to_end: i32,
        day_counter: impl DayCounter,
    ) -> Result<Self> {
        ensure!(
            months_to_end > months_to_start,
            "months to end ({months_to_end}) must be greater than months to start ({months_to_start})"
        );
        let value_date = settlement_date.advance_by(Period::months(months_to_start))?;
        let maturity_date = settlement_date.advance_by(Period::months(months_to_end))?;
        Self::new(rate, value_date, maturity_date, day_counter)
    }
}

impl RateHelper for FraRateHelper {
    fn quote(&self) -> &Handle<dyn Quote> {
        &self.rate
    }

    fn earliest_date(&self) -> Date {
        self.value_date
    }

    fn latest_date(&self) -> Date {
        self.maturity_date
    }

    fn implied_quote(&self, curve: &dyn YieldTermStructure) -> Result<Real> {
        simple_forward(curve, self.value_date, self.maturity_date, self.year_fraction)
    }
}

// ── FuturesRateHelper ─────────────────────────────────────────────────────────

/// An interest-rate futures helper.
///
/// The quote is a price; the implied price is
/// `100 × (1 − (forward + convexity adjustment))`.
#[derive(Debug)]
pub struct FuturesRateHelper {
    price: Handle<dyn Quote>,
    convexity_adjustment: Handle<dyn Quote>,
    start_date: Date,
    end_date: Date,
    year_fraction: Time,
}

impl FuturesRateHelper {
    /// Create a futures helper over `[start_date, end_date]`.
    pub fn new(
        price: impl IntoQuoteHandle,
        start_date: Date,
        end_date: Date,
        day_counter: impl DayCounter,
    ) -> Result<Self> {
        let year_fraction = accrual(&day_counter, start_date, end_date)?;
        Ok(Self {
            price: price.into_quote_handle(),
            convexity_adjustment: Handle::null(),
            start_date,
            end_date,
            year_fraction,
        })
    }

    /// Create a futures helper on a deposit of `months` months.
    pub fn from_months(
        price: impl IntoQuoteHandle,
        start_date: Date,
        months: i32,
        day_counter: impl DayCounter,
    ) -> Result<Self> {
        let end_date = start_date.advance_by(Period::months(months))?;
        Self::new(price, start_date, end_date, day_counter)
    }

    /// Subtract a convexity adjustment from the futures rate.
    pub fn with_convexity_adjustment(mut self, adjustment: impl IntoQuoteHandle) -> Self {
        self.convexity_adjustment = adjustment.into_quote_handle();
        self
    }

    /// The current convexity adjustment; zero when none was given.
    pub fn convexity_adjustment(&self) -> Result<Rate> {
        match self.convexity_adjustment.get() {
            None => Ok(0.0),
            Some(quote) => quote.value().ok_or_else(|| {
                Error::Configuration(format!(
                    "invalid convexity adjustment for futures maturing {}",
                    self.end_date
                ))
            }),
        }
    }
}

impl RateHelper for FuturesRateHelper {
    fn quote(&self) -> &Handle<dyn Quote> {
        &self.price
    }

    fn earliest_date(&self) -> Date {
        self.start_date
    }

    fn latest_date(&self) -> Date {
        self.end_date
    }

    fn implied_quote(&self, curve: &dyn YieldTermStructure) -> Result<Real> {
        let forward = simple_forward(curve, self.start_date, self.end_date, self.year_fraction)?;
        Ok(100.0 * (1.0 - (forward + self.convexity_adjustment()?)))
    }

    fn register_with(&self, observer: Weak<dyn Observer>) {
        if let Some(quote) = self.convexity_adjustment.get() {
            quote.register_observer(observer.clone());
        }
        if let Some(quote) = self.price.get() {
            quote.register_observer(observer);
        }
    }
}

// ── SwapRateHelper ────────────────────────────────────────────────────────────

/// A par-swap-rate helper.
///
/// The floating leg is valued off the same curve, so the par rate is
/// `(P(t₀) − P(tₙ)) / Σ τᵢ P(tᵢ)` over the fixed schedule `t₀ < … < tₙ`.
#[derive(Debug)]
pub struct SwapRateHelper {
    rate: Handle<dyn Quote>,
    fixed_dates: Vec<Date>,
    accruals: Vec<Time>,
    day_counter: Arc<dyn DayCounter>,
}

impl SwapRateHelper {
    /// Create a swap helper over an explicit fixed schedule; the first date
    /// is the start of the swap.
    pub fn new(
        rate: impl IntoQuoteHandle,
        fixed_dates: Vec<Date>,
        fixed_day_counter: impl DayCounter + 'static,
    ) -> Result<Self> {
        ensure!(
            fixed_dates.len() >= 2,
            "fixed schedule needs at least 2 dates, {} given",
            fixed_dates.len()
        );
        let accruals = fixed_dates
            .windows(2)
            .map(|pair| accrual(&fixed_day_counter, pair[0], pair[1]))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            rate: rate.into_quote_handle(),
            fixed_dates,
            accruals,
            day_counter: Arc::new(fixed_day_counter),
        })
    }

    /// Create a swap helper of length `tenor` starting at settlement, with
    /// fixed payments at `fixed_frequency`.
    ///
    /// Payment dates are generated forward from settlement; a short final
    /// period absorbs any remainder.
    pub fn from_tenor(
        rate: impl IntoQuoteHandle,
        settlement_date: Date,
        tenor: Period,
        fixed_frequency: Frequency,
        fixed_day_counter: impl DayCounter + 'static,
    ) -> Result<Self> {
        let maturity = settlement_date.advance_by(tenor)?;
        ensure!(maturity > settlement_date, "swap tenor ({tenor}) must be positive");
        let step = Period::from_frequency(fixed_frequency)?;
        let mut dates = vec![settlement_date];
        let mut k = 1;
        loop {
            let date = settlement_date.advance_by(step * k)?;
            if date >= maturity {
                break;
            }
            dates.push(date);
            k += 1;
        }
        dates.push(maturity);
        Self::new(rate, dates, fixed_day_counter)
    }

    /// The fixed-leg schedule, start date first.
    pub fn fixed_dates(&self) -> &[Date] {
        &self.fixed_dates
    }

    /// The fixed-leg day counter.
    pub fn fixed_day_counter(&self) -> &Arc<dyn DayCounter> {
        &self.day_counter
    }
}

impl RateHelper for SwapRateHelper {
    fn quote(&self) -> &Handle<dyn Quote> {
        &self.rate
    }

    fn earliest_date(&self) -> Date {
        self.fixed_dates[0]
    }

    fn latest_date(&self) -> Date {
        self.fixed_dates[self.fixed_dates.len() - 1]
    }

    fn implied_quote(&self, curve: &dyn YieldTermStructure) -> Result<Real> {
        let mut annuity = 0.0;
        for (date, tau) in self.fixed_dates[1..].iter().zip(&self.accruals) {
            annuity += tau * curve.discount_date(*date)?;
        }
        if annuity == 0.0 {
            fail!("zero fixed-leg annuity for swap maturing {}", self.latest_date());
        }
        let start = curve.discount_date(self.earliest_date())?;
        let end = curve.discount_date(self.latest_date())?;
        Ok((start - end) / annuity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatForward;
    use approx::assert_abs_diff_eq;
    use yc_core::DirtyFlag;
    use yc_quotes::SimpleQuote;
    use yc_time::{Actual360, Actual365Fixed, Thirty360};

    fn today() -> Date {
        Date::from_ymd(2024, 2, 1).unwrap()
    }

    fn flat(rate: Rate) -> FlatForward {
        FlatForward::continuous(today(), rate, Actual365Fixed)
    }

    #[test]
    fn deposit_on_a_flat_curve() {
        let helper = DepositRateHelper::from_tenor(0.03, today(), Period::months(6), Actual360).unwrap();
        let curve = flat(0.03);
        let tau = Actual360.year_fraction(today(), helper.latest_date());
        let t = Actual365Fixed.year_fraction(today(), helper.latest_date());
        let expected = ((0.03 * t).exp() - 1.0) / tau;
        assert_abs_diff_eq!(helper.implied_quote(&curve).unwrap(), expected, epsilon = 1e-15);
        assert_abs_diff_eq!(helper.quote_error(&curve).unwrap(), 0.03 - expected, epsilon = 1e-15);
        assert_eq!(helper.earliest_date(), today());
        assert_eq!(helper.latest_date(), Date::from_ymd(2024, 8, 1).unwrap());
    }

    #[test]
    fn inverted_dates_are_rejected() {
        let err = DepositRateHelper::new(0.03, today(), today(), Actual360).unwrap_err();
        assert!(err.is_configuration());
        let err = FraRateHelper::from_months(0.03, today(), 6, 3, Actual360).unwrap_err();
        assert!(err.is_configuration());
        let err = SwapRateHelper::new(0.03, vec![today()], Thirty360).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn fra_matches_the_curve_forward() {
        let helper = FraRateHelper::from_months(0.0, today(), 3, 9, Actual360).unwrap();
        let curve = flat(0.025);
        let (d1, d2) = (helper.earliest_date(), helper.latest_date());
        let tau = Actual360.year_fraction(d1, d2);
        let expected =
            (curve.discount_date(d1).unwrap() / curve.discount_date(d2).unwrap() - 1.0) / tau;
        assert_abs_diff_eq!(helper.implied_quote(&curve).unwrap(), expected, epsilon = 1e-15);
        assert_eq!(d1, Date::from_ymd(2024, 5, 1).unwrap());
    }

    #[test]
    fn futures_price_includes_convexity() {
        let curve = flat(0.04);
        let plain = FuturesRateHelper::from_months(96.0, today(), 3, Actual360).unwrap();
        let adjusted = FuturesRateHelper::from_months(96.0, today(), 3, Actual360)
            .unwrap()
            .with_convexity_adjustment(0.0005);
        let difference =
            plain.implied_quote(&curve).unwrap() - adjusted.implied_quote(&curve).unwrap();
        assert_abs_diff_eq!(difference, 0.05, epsilon = 1e-12);

        let broken = FuturesRateHelper::from_months(96.0, today(), 3, Actual360)
            .unwrap()
            .with_convexity_adjustment(Arc::new(SimpleQuote::empty()));
        assert!(broken.implied_quote(&curve).unwrap_err().is_configuration());
    }

    #[test]
    fn swap_schedule_generation() {
        let helper =
            SwapRateHelper::from_tenor(0.04, today(), Period::years(2), Frequency::Semiannual, Thirty360)
                .unwrap();
        let expected: Vec<Date> = [(2024, 2, 1), (2024, 8, 1), (2025, 2, 1), (2025, 8, 1), (2026, 2, 1)]
            .into_iter()
            .map(|(y, m, d)| Date::from_ymd(y, m, d).unwrap())
            .collect();
        assert_eq!(helper.fixed_dates(), expected.as_slice());
        assert_eq!(helper.fixed_day_counter().name(), Thirty360.name());
    }

    #[test]
    fn swap_par_rate_on_a_flat_curve() {
        let helper =
            SwapRateHelper::from_tenor(0.0, today(), Period::years(5), Frequency::Annual, Thirty360)
                .unwrap();
        let curve = flat(0.05);
        let dates = helper.fixed_dates();
        let mut annuity = 0.0;
        for pair in dates.windows(2) {
            annuity += Thirty360.year_fraction(pair[0], pair[1]) * curve.discount_date(pair[1]).unwrap();
        }
        let expected = (1.0 - curve.discount_date(dates[5]).unwrap()) / annuity;
        assert_abs_diff_eq!(helper.implied_quote(&curve).unwrap(), expected, epsilon = 1e-15);
        // roughly the annually-compounded equivalent of 5% continuous
        assert!((helper.implied_quote(&curve).unwrap() - 0.0513).abs() < 1e-3);
    }

    #[test]
    fn null_quotes_are_configuration_errors() {
        let helper =
            DepositRateHelper::new(Handle::<dyn Quote>::null(), today(), Date::from_ymd(2024, 5, 1).unwrap(), Actual360)
                .unwrap();
        assert!(helper.reference_quote().unwrap_err().is_configuration());

        let quote = Arc::new(SimpleQuote::empty());
        let helper = DepositRateHelper::from_tenor(&quote, today(), Period::months(1), Actual360).unwrap();
        assert!(helper.quote_error(&flat(0.01)).unwrap_err().is_configuration());
        quote.set_value(0.01);
        assert_eq!(helper.reference_quote().unwrap(), 0.01);
    }

    #[test]
    fn observers_see_quote_changes() {
        let price = Arc::new(SimpleQuote::new(97.0));
        let convexity = Arc::new(SimpleQuote::new(0.0));
        let helper = FuturesRateHelper::from_months(&price, today(), 3, Actual360)
            .unwrap()
            .with_convexity_adjustment(&convexity);
        let flag = DirtyFlag::new();
        let observer: Arc<dyn Observer> = flag.clone();
        helper.register_with(Arc::downgrade(&observer));

        price.set_value(97.5);
        assert!(flag.take());
        convexity.set_value(0.0001);
        assert!(flag.take());
    }
}
