//! `PiecewiseYieldCurve`: iterative bootstrap construction of a yield curve.
//!
//! Given a set of [`RateHelper`]s (deposits, FRAs, futures, swaps) the
//! bootstrapper places one node at each helper's maturity and solves, in
//! order of maturity, for the node value that makes the helper's implied
//! quote match the observed one.  Local interpolators are swept repeatedly
//! until the node values settle; global ones take a single sweep.
//!
//! The curve is lazy: nothing is solved until the first query, and a
//! change in any quote (or, for a floating curve, in the evaluation date)
//! only marks the result stale.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use yc_math::LogLinear;
//! use yc_termstructures::{
//!     CurveKind, DepositRateHelper, PiecewiseYieldCurve, RateHelper, YieldTermStructure,
//! };
//! use yc_time::{Actual360, Date};
//!
//! let today = Date::from_ymd(2025, 1, 2).unwrap();
//! let helpers: Vec<Arc<dyn RateHelper>> = vec![
//!     Arc::new(
//!         DepositRateHelper::new(0.04, today, Date::from_ymd(2025, 4, 2).unwrap(), Actual360)
//!             .unwrap(),
//!     ),
//!     Arc::new(
//!         DepositRateHelper::new(0.045, today, Date::from_ymd(2025, 7, 2).unwrap(), Actual360)
//!             .unwrap(),
//!     ),
//! ];
//! let curve =
//!     PiecewiseYieldCurve::new(CurveKind::Discount, today, helpers, Actual360, LogLinear).unwrap();
//! assert!(curve.discount(0.4).unwrap() < 1.0);
//! ```

use crate::bootstrap_config::BootstrapConfig;
use crate::bootstrap_traits::{CurveKind, CurveTraits};
use crate::interpolated_curve::InterpolatedCurve;
use crate::rate_helpers::RateHelper;
use crate::term_structure::TermStructure;
use crate::yield_term_structure::YieldTermStructure;
use std::cell::RefCell;
use std::sync::Arc;
use tracing::{debug, trace, warn};
use yc_core::errors::{Error, Result};
use yc_core::{
    ensure, fail, DiscountFactor, LazyObject, LazyState, Observable, Rate, Real, Settings, Time,
};
use yc_math::{Brent, Extrapolator, Interpolator, Linear, Solver1D};
use yc_time::{Date, DayCounter};

/// Where the reference date comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reference {
    Fixed(Date),
    /// Evaluation date plus a number of calendar days.
    Floating { settlement_days: u32 },
}

impl Reference {
    fn resolve(self) -> Result<Date> {
        match self {
            Reference::Fixed(date) => Ok(date),
            Reference::Floating { settlement_days } => {
                Date::from(Settings::instance().evaluation_date())
                    .add_days(i64::from(settlement_days))
            }
        }
    }
}

/// Node arrays being solved for.
#[derive(Debug)]
struct WorkingNodes {
    dates: Vec<Date>,
    times: Vec<Time>,
    data: Vec<Real>,
}

impl WorkingNodes {
    /// Curve over the first `span` nodes, extrapolating past the last one.
    fn curve(
        &self,
        traits: &Arc<dyn CurveTraits>,
        day_counter: &Arc<dyn DayCounter>,
        span: usize,
        interpolator: &dyn Interpolator,
    ) -> Result<InterpolatedCurve> {
        let mut curve = InterpolatedCurve::from_nodes(
            traits.clone(),
            day_counter.clone(),
            self.dates[..span].to_vec(),
            self.times[..span].to_vec(),
            self.data[..span].to_vec(),
            interpolator,
        )?;
        curve.enable_extrapolation();
        Ok(curve)
    }
}

/// Quote error of one helper as a function of the value of its node.
struct ObjectiveFunction<'a> {
    traits: &'a Arc<dyn CurveTraits>,
    day_counter: &'a Arc<dyn DayCounter>,
    interpolator: &'a dyn Interpolator,
    helper: &'a dyn RateHelper,
    nodes: &'a mut WorkingNodes,
    segment: usize,
    span: usize,
}

impl ObjectiveFunction<'_> {
    fn value(&mut self, guess: Real) -> Result<Real> {
        self.traits
            .update_guess(&mut self.nodes.data, guess, self.segment);
        let curve = self
            .nodes
            .curve(self.traits, self.day_counter, self.span, self.interpolator)?;
        self.helper.quote_error(&curve)
    }
}

/// A yield curve bootstrapped from market instruments.
///
/// Node 0 sits at the reference date; node `i` at the maturity of the
/// `i`-th helper in maturity order.  What the node values mean is fixed by
/// the [`CurveKind`].
#[derive(Debug)]
pub struct PiecewiseYieldCurve {
    traits: Arc<dyn CurveTraits>,
    reference: Reference,
    day_counter: Arc<dyn DayCounter>,
    instruments: Vec<Arc<dyn RateHelper>>,
    interpolator: Box<dyn Interpolator>,
    solver: Box<dyn Solver1D>,
    config: BootstrapConfig,
    extrapolate: bool,
    lazy: LazyState,
    curve: RefCell<Option<InterpolatedCurve>>,
}

impl PiecewiseYieldCurve {
    /// Curve anchored at `reference_date` with the default
    /// [`BootstrapConfig`].
    ///
    /// # Errors
    /// `Configuration` if no instruments are given, two share a maturity,
    /// or one matures on or before the reference date.
    pub fn new(
        kind: CurveKind,
        reference_date: Date,
        instruments: Vec<Arc<dyn RateHelper>>,
        day_counter: impl DayCounter + 'static,
        interpolator: impl Interpolator + 'static,
    ) -> Result<Self> {
        Self::with_config(
            kind,
            reference_date,
            instruments,
            day_counter,
            interpolator,
            BootstrapConfig::default(),
        )
    }

    /// Curve anchored at `reference_date` with explicit settings.
    pub fn with_config(
        kind: CurveKind,
        reference_date: Date,
        instruments: Vec<Arc<dyn RateHelper>>,
        day_counter: impl DayCounter + 'static,
        interpolator: impl Interpolator + 'static,
        config: BootstrapConfig,
    ) -> Result<Self> {
        Self::build(
            kind,
            Reference::Fixed(reference_date),
            instruments,
            Arc::new(day_counter),
            Box::new(interpolator),
            config,
        )
    }

    /// Curve whose reference date is the evaluation date plus
    /// `settlement_days` calendar days.
    ///
    /// The curve follows the evaluation date in [`Settings`]: changing it
    /// marks the curve for recalculation.
    pub fn floating(
        kind: CurveKind,
        settlement_days: u32,
        instruments: Vec<Arc<dyn RateHelper>>,
        day_counter: impl DayCounter + 'static,
        interpolator: impl Interpolator + 'static,
        config: BootstrapConfig,
    ) -> Result<Self> {
        let curve = Self::build(
            kind,
            Reference::Floating { settlement_days },
            instruments,
            Arc::new(day_counter),
            Box::new(interpolator),
            config,
        )?;
        Settings::instance().register_observer(curve.lazy.observer());
        Ok(curve)
    }

    fn build(
        kind: CurveKind,
        reference: Reference,
        mut instruments: Vec<Arc<dyn RateHelper>>,
        day_counter: Arc<dyn DayCounter>,
        interpolator: Box<dyn Interpolator>,
        config: BootstrapConfig,
    ) -> Result<Self> {
        config.validate()?;
        ensure!(!instruments.is_empty(), "no instruments given");
        instruments.sort_by_key(|helper| helper.latest_date());
        for pair in instruments.windows(2) {
            ensure!(
                pair[0].latest_date() != pair[1].latest_date(),
                "more than one instrument with maturity {}",
                pair[0].latest_date()
            );
        }
        if let Reference::Fixed(reference_date) = reference {
            let first = instruments[0].latest_date();
            ensure!(
                first > reference_date,
                "instrument maturing {first} is not after the reference date {reference_date}"
            );
        }

        let lazy = LazyState::new();
        for helper in &instruments {
            helper.register_with(lazy.observer());
        }
        Ok(Self {
            traits: kind.traits(config.allow_negative_rates),
            reference,
            day_counter,
            instruments,
            interpolator,
            solver: Box::new(Brent::default()),
            config,
            extrapolate: false,
            lazy,
            curve: RefCell::new(None),
        })
    }

    /// Replace the root finder (Brent by default).
    pub fn with_solver(mut self, solver: impl Solver1D + 'static) -> Self {
        self.solver = Box::new(solver);
        self.update();
        self
    }

    /// What the node values represent.
    pub fn kind(&self) -> CurveKind {
        self.traits.kind()
    }

    /// The bootstrap settings.
    pub fn config(&self) -> &BootstrapConfig {
        &self.config
    }

    /// The instruments, in maturity order.
    pub fn instruments(&self) -> &[Arc<dyn RateHelper>] {
        &self.instruments
    }

    /// `(date, value)` pairs, reference date first.
    pub fn nodes(&self) -> Result<Vec<(Date, Real)>> {
        self.with_curve(|curve| Ok(curve.nodes()))
    }

    /// Node times; `times()[0] == 0`.
    pub fn times(&self) -> Result<Vec<Time>> {
        self.with_curve(|curve| Ok(curve.times().to_vec()))
    }

    /// Node dates.
    pub fn dates(&self) -> Result<Vec<Date>> {
        self.with_curve(|curve| Ok(curve.dates().to_vec()))
    }

    /// Node values.
    pub fn data(&self) -> Result<Vec<Real>> {
        self.with_curve(|curve| Ok(curve.data().to_vec()))
    }

    /// Bootstrap if needed, then read the published curve.
    fn with_curve<T>(&self, read: impl FnOnce(&InterpolatedCurve) -> Result<T>) -> Result<T> {
        self.calculate()?;
        let curve = self.curve.borrow();
        match curve.as_ref() {
            Some(curve) => read(curve),
            None => fail!("yield curve has not been bootstrapped"),
        }
    }

    fn bootstrap(&self) -> Result<InterpolatedCurve> {
        let reference_date = self.reference_date()?;
        debug!(
            kind = %self.kind(),
            instruments = self.instruments.len(),
            reference = %reference_date,
            interpolator = ?self.interpolator,
            "bootstrapping yield curve"
        );
        self.solve_nodes(reference_date).map_err(|e| {
            warn!(kind = %self.kind(), reference = %reference_date, error = %e, "bootstrap failed");
            e
        })
    }

    fn solve_nodes(&self, reference_date: Date) -> Result<InterpolatedCurve> {
        let n = self.instruments.len();
        for helper in &self.instruments {
            ensure!(
                helper.latest_date() > reference_date,
                "instrument maturing {} is not after the reference date {reference_date}",
                helper.latest_date()
            );
            helper.reference_quote()?;
        }

        let mut dates = Vec::with_capacity(n + 1);
        dates.push(reference_date);
        dates.extend(self.instruments.iter().map(|helper| helper.latest_date()));
        let times: Vec<Time> = dates
            .iter()
            .map(|date| self.day_counter.year_fraction(reference_date, *date))
            .collect();
        for (pair, date) in times.windows(2).zip(&dates[1..]) {
            ensure!(
                pair[1] > pair[0],
                "instrument maturing {date} does not extend the curve under {}",
                self.day_counter.name()
            );
        }
        let mut nodes = WorkingNodes {
            dates,
            times,
            data: vec![self.traits.initial_value(); n + 1],
        };

        let single_pass = self.interpolator.is_global() || n == 1;
        for iteration in 0..self.config.max_iterations {
            let previous = nodes.data.clone();
            for i in 1..=n {
                let maturity = nodes.dates[i];
                let value = self.solve_segment(&mut nodes, i, iteration).map_err(|e| {
                    Error::Convergence(format!(
                        "could not bootstrap instrument maturing {maturity} \
                         (segment {i}, iteration {}): {e}",
                        iteration + 1
                    ))
                })?;
                self.traits.update_guess(&mut nodes.data, value, i);
            }

            if single_pass {
                debug!(iteration, "bootstrap completed in a single pass");
                return self.publish(nodes);
            }
            let improvement: Real = nodes
                .data
                .iter()
                .zip(&previous)
                .skip(1)
                .map(|(current, before)| (current - before).abs())
                .sum();
            debug!(iteration, improvement, "bootstrap pass completed");
            if improvement <= n as Real * self.config.accuracy {
                return self.publish(nodes);
            }
        }
        Err(Error::Convergence(format!(
            "bootstrap did not converge after {} iterations",
            self.config.max_iterations
        )))
    }

    /// Solve for the value of node `i`.
    fn solve_segment(&self, nodes: &mut WorkingNodes, i: usize, iteration: usize) -> Result<Real> {
        let n = nodes.data.len() - 1;
        let first_pass = iteration == 0;
        let (interpolator, span): (&dyn Interpolator, usize) = if !first_pass {
            (&*self.interpolator, n + 1)
        } else if self.interpolator.is_global() && i < 2 {
            (&Linear, i + 1)
        } else {
            (&*self.interpolator, i + 1)
        };

        let guess = if !first_pass {
            0.99 * nodes.data[i]
        } else if i > 1 {
            let partial = nodes.curve(&self.traits, &self.day_counter, i, &*self.interpolator)?;
            self.traits.guess(&partial, nodes.times[i])?
        } else {
            self.traits.initial_guess()
        };
        let min = self.traits.min_value_after(i, &nodes.data);
        let max = self.traits.max_value_after(i, &nodes.data);
        let guess = if guess <= min || guess >= max {
            (min + max) / 2.0
        } else {
            guess
        };

        let time = nodes.times[i];
        let mut objective = ObjectiveFunction {
            traits: &self.traits,
            day_counter: &self.day_counter,
            interpolator,
            helper: &*self.instruments[i - 1],
            nodes,
            segment: i,
            span,
        };
        let value = self.solver.solve(
            &mut |x| objective.value(x),
            self.config.accuracy,
            guess,
            min,
            max,
        )?;
        trace!(segment = i, time, value, guess, min, max, "node solved");
        Ok(value)
    }

    fn publish(&self, nodes: WorkingNodes) -> Result<InterpolatedCurve> {
        InterpolatedCurve::from_nodes(
            self.traits.clone(),
            self.day_counter.clone(),
            nodes.dates,
            nodes.times,
            nodes.data,
            &*self.interpolator,
        )
    }
}

impl LazyObject for PiecewiseYieldCurve {
    fn perform_calculations(&self) -> Result<()> {
        let curve = self.bootstrap()?;
        *self.curve.borrow_mut() = Some(curve);
        Ok(())
    }

    fn lazy_state(&self) -> &LazyState {
        &self.lazy
    }
}

impl Extrapolator for PiecewiseYieldCurve {
    fn allows_extrapolation(&self) -> bool {
        self.extrapolate
    }

    fn set_extrapolation(&mut self, allow: bool) {
        self.extrapolate = allow;
    }
}

impl TermStructure for PiecewiseYieldCurve {
    fn reference_date(&self) -> Result<Date> {
        self.reference.resolve()
    }

    fn day_counter(&self) -> &Arc<dyn DayCounter> {
        &self.day_counter
    }

    fn max_date(&self) -> Date {
        self.instruments[self.instruments.len() - 1].latest_date()
    }
}

impl YieldTermStructure for PiecewiseYieldCurve {
    fn discount_impl(&self, t: Time) -> Result<DiscountFactor> {
        self.with_curve(|curve| curve.discount_impl(t))
    }

    fn zero_yield_impl(&self, t: Time) -> Result<Rate> {
        self.with_curve(|curve| curve.zero_yield_impl(t))
    }

    fn forward_impl(&self, t: Time) -> Result<Rate> {
        self.with_curve(|curve| curve.forward_impl(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rate_helpers::{DepositRateHelper, SwapRateHelper};
    use approx::assert_abs_diff_eq;
    use yc_math::{BackwardFlat, Bisection, ForwardFlat, Linear, LogLinear};
    use yc_quotes::{IntoQuoteHandle, SimpleQuote};
    use yc_time::{Actual360, Frequency, Period, Thirty360};

    fn today() -> Date {
        Date::from_ymd(2023, 1, 2).unwrap()
    }

    fn deposit(rate: impl IntoQuoteHandle, months: i32) -> Arc<dyn RateHelper> {
        Arc::new(
            DepositRateHelper::from_tenor(rate, today(), Period::months(months), Actual360).unwrap(),
        )
    }

    fn swap(rate: Rate, years: i32) -> Arc<dyn RateHelper> {
        Arc::new(
            SwapRateHelper::from_tenor(rate, today(), Period::years(years), Frequency::Annual, Thirty360)
                .unwrap(),
        )
    }

    fn instruments() -> Vec<Arc<dyn RateHelper>> {
        vec![
            deposit(0.0458, 1),
            deposit(0.0457, 3),
            deposit(0.0450, 6),
            swap(0.0454, 1),
            swap(0.0499, 5),
        ]
    }

    fn discount_curve(instruments: Vec<Arc<dyn RateHelper>>) -> PiecewiseYieldCurve {
        PiecewiseYieldCurve::new(CurveKind::Discount, today(), instruments, Actual360, LogLinear)
            .unwrap()
    }

    #[test]
    fn bootstrap_single_deposit() {
        let helper = deposit(0.04581, 3);
        let maturity = helper.latest_date();
        let curve = discount_curve(vec![helper]);
        let tau = Actual360.year_fraction(today(), maturity);
        assert_eq!(tau, 0.25);
        assert_abs_diff_eq!(
            curve.discount_date(maturity).unwrap(),
            1.0 / (1.0 + 0.04581 * tau),
            epsilon = 1e-10
        );
    }

    #[test]
    fn bootstrap_reprices_every_instrument() {
        for kind in [CurveKind::Discount, CurveKind::ZeroYield, CurveKind::ForwardRate] {
            let curve =
                PiecewiseYieldCurve::new(kind, today(), instruments(), Actual360, Linear).unwrap();
            for helper in curve.instruments() {
                assert_abs_diff_eq!(helper.quote_error(&curve).unwrap(), 0.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn duplicate_maturities_are_rejected() {
        let err = PiecewiseYieldCurve::new(
            CurveKind::Discount,
            today(),
            vec![deposit(0.04, 3), deposit(0.041, 3)],
            Actual360,
            LogLinear,
        )
        .unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn bootstrap_error_on_empty_helpers() {
        let err = PiecewiseYieldCurve::new(CurveKind::Discount, today(), vec![], Actual360, LogLinear)
            .unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn expired_instruments_are_rejected() {
        let start = today().add_days(-30).unwrap();
        let expired: Arc<dyn RateHelper> =
            Arc::new(DepositRateHelper::new(0.04, start, today(), Actual360).unwrap());
        let err = PiecewiseYieldCurve::new(
            CurveKind::ZeroYield,
            today(),
            vec![expired, deposit(0.04, 3)],
            Actual360,
            Linear,
        )
        .unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let err = PiecewiseYieldCurve::with_config(
            CurveKind::Discount,
            today(),
            instruments(),
            Actual360,
            LogLinear,
            BootstrapConfig::default().with_max_iterations(0),
        )
        .unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn nodes_follow_sorted_maturities() {
        let mut reversed = instruments();
        reversed.reverse();
        let curve = discount_curve(reversed);
        let maturities: Vec<Date> = curve.instruments().iter().map(|h| h.latest_date()).collect();
        assert!(maturities.windows(2).all(|pair| pair[0] < pair[1]));

        let times = curve.times().unwrap();
        assert_eq!(times[0], 0.0);
        assert!(times.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(curve.dates().unwrap()[0], today());
        assert_eq!(curve.dates().unwrap()[1..], maturities[..]);
        assert_eq!(curve.data().unwrap()[0], 1.0);
        assert_eq!(curve.nodes().unwrap().len(), maturities.len() + 1);
        assert_eq!(curve.max_date(), maturities[maturities.len() - 1]);
    }

    #[test]
    fn repeated_queries_are_identical() {
        let curve = discount_curve(instruments());
        assert!(!curve.is_calculated());
        let first = (
            curve.discount(1.5).unwrap(),
            curve.zero_rate(2.5).unwrap(),
            curve.forward_rate(1.0, 3.0).unwrap(),
        );
        assert!(curve.is_calculated());
        let second = (
            curve.discount(1.5).unwrap(),
            curve.zero_rate(2.5).unwrap(),
            curve.forward_rate(1.0, 3.0).unwrap(),
        );
        assert_eq!(first, second);
    }

    #[test]
    fn quote_changes_invalidate_the_curve() {
        let quote = Arc::new(SimpleQuote::new(0.04));
        let curve = discount_curve(vec![deposit(&quote, 3), deposit(0.042, 6)]);
        let before = curve.discount(0.2).unwrap();
        assert!(curve.is_calculated());

        quote.set_value(0.05);
        assert!(!curve.is_calculated());
        let after = curve.discount(0.2).unwrap();
        assert!(after < before);

        curve.freeze();
        quote.set_value(0.06);
        assert_eq!(curve.discount(0.2).unwrap(), after);
        curve.unfreeze();
        assert!(curve.discount(0.2).unwrap() < after);

        curve.update();
        assert!(!curve.is_calculated());
    }

    #[test]
    fn null_quote_fails_at_calculation() {
        let quote = Arc::new(SimpleQuote::empty());
        let curve = discount_curve(vec![deposit(&quote, 3)]);
        let err = curve.discount(0.1).unwrap_err();
        assert!(err.is_configuration(), "{err}");
        assert!(!curve.is_calculated());

        quote.set_value(0.03);
        assert!(curve.discount(0.1).is_ok());
    }

    #[test]
    fn bootstrap_negative_rates() {
        let helpers = || vec![deposit(-0.005, 3), deposit(-0.004, 6)];
        let curve = discount_curve(helpers());
        assert!(curve.discount(0.25).unwrap() > 1.0);

        let strict = PiecewiseYieldCurve::with_config(
            CurveKind::Discount,
            today(),
            helpers(),
            Actual360,
            LogLinear,
            BootstrapConfig::default().with_negative_rates(false),
        )
        .unwrap();
        let err = strict.discount(0.25).unwrap_err();
        assert!(err.is_convergence());
        assert!(err.to_string().contains("could not bootstrap"), "{err}");
    }

    #[test]
    fn inverted_positive_zero_curve() {
        // extrapolated guesses fall below zero and are reset into the bracket
        let helpers = vec![
            deposit(0.02, 3),
            deposit(0.011, 6),
            deposit(0.0052, 12),
            deposit(0.003, 24),
        ];
        let curve = PiecewiseYieldCurve::with_config(
            CurveKind::ZeroYield,
            today(),
            helpers,
            Actual360,
            Linear,
            BootstrapConfig::default().with_negative_rates(false),
        )
        .unwrap();
        for helper in curve.instruments() {
            assert_abs_diff_eq!(helper.quote_error(&curve).unwrap(), 0.0, epsilon = 1e-9);
        }
        let data = curve.data().unwrap();
        assert!(data.iter().all(|z| *z > 0.0));
        assert!(data[1..].windows(2).all(|pair| pair[1] < pair[0]));
    }

    #[test]
    fn unsupported_pairings_fail_to_bootstrap() {
        let rate_log_linear =
            PiecewiseYieldCurve::new(CurveKind::ZeroYield, today(), instruments(), Actual360, LogLinear)
                .unwrap();
        let forward_flat = PiecewiseYieldCurve::new(
            CurveKind::ForwardRate,
            today(),
            instruments(),
            Actual360,
            ForwardFlat,
        )
        .unwrap();
        let settlement = today().add_days(2).unwrap();
        let spot_deposit: Arc<dyn RateHelper> = Arc::new(
            DepositRateHelper::from_tenor(0.045, settlement, Period::months(3), Actual360).unwrap(),
        );
        let backward_flat = PiecewiseYieldCurve::new(
            CurveKind::Discount,
            today(),
            vec![spot_deposit],
            Actual360,
            BackwardFlat,
        )
        .unwrap();

        for curve in [rate_log_linear, forward_flat, backward_flat] {
            let err = curve.data().unwrap_err();
            assert!(err.is_convergence(), "{} curve: {err}", curve.kind());
            assert!(err.to_string().contains("could not bootstrap"), "{err}");
        }
    }

    #[test]
    fn boundaries_and_extrapolation() {
        let mut curve = discount_curve(instruments());
        let t_max = curve.max_time().unwrap();
        assert_eq!(curve.times().unwrap().last(), Some(&t_max));
        assert!(curve.discount(0.0).is_ok());
        assert!(curve.discount(t_max).is_ok());
        assert!(curve.discount(t_max + 1.0).unwrap_err().is_range());
        assert!(curve.discount_with(t_max + 1.0, true).is_ok());

        curve.enable_extrapolation();
        // flat instantaneous forward past the last node
        let at_end = curve.forward_rate(t_max, t_max).unwrap();
        let beyond = curve.forward_rate(t_max + 1.0, t_max + 1.0).unwrap();
        assert_abs_diff_eq!(at_end, beyond, epsilon = 1e-12);
        curve.disable_extrapolation();
        assert!(curve.zero_rate(t_max + 1.0).unwrap_err().is_range());
    }

    #[test]
    fn alternative_solver() {
        let curve = discount_curve(instruments()).with_solver(Bisection::default());
        for helper in curve.instruments() {
            assert_abs_diff_eq!(helper.quote_error(&curve).unwrap(), 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn solver_failures_are_reported() {
        let curve =
            discount_curve(instruments()).with_solver(Brent::default().with_max_evaluations(3));
        let err = curve.discount(1.0).unwrap_err();
        assert!(err.is_convergence());
        assert!(err.to_string().contains("could not bootstrap"), "{err}");
        assert!(curve.nodes().is_err());
    }

    #[test]
    fn iteration_cap_is_enforced() {
        let curve = PiecewiseYieldCurve::with_config(
            CurveKind::Discount,
            today(),
            instruments(),
            Actual360,
            LogLinear,
            BootstrapConfig::default().with_max_iterations(1),
        )
        .unwrap();
        let err = curve.data().unwrap_err();
        assert!(err.is_convergence());
        assert!(err.to_string().contains("did not converge"), "{err}");
    }

    #[test]
    fn zero_nodes_are_zero_rates() {
        let curve =
            PiecewiseYieldCurve::new(CurveKind::ZeroYield, today(), instruments(), Actual360, Linear)
                .unwrap();
        let (times, data) = (curve.times().unwrap(), curve.data().unwrap());
        // the rate at the reference date follows the first segment
        assert_eq!(data[0], data[1]);
        for (t, z) in times.iter().zip(&data).skip(1) {
            assert_abs_diff_eq!(curve.zero_rate(*t).unwrap(), *z, epsilon = 1e-15);
        }
    }
}
