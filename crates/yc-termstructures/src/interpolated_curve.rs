//! `InterpolatedCurve`: a yield curve interpolated over node values.
//!
//! The nodes are discount factors, zero yields or instantaneous forwards
//! depending on the [`CurveKind`]; the matching [`CurveTraits`] turn the
//! interpolation into discount factors and rates.

use crate::bootstrap_traits::{CurveKind, CurveTraits};
use crate::term_structure::TermStructure;
use crate::yield_term_structure::YieldTermStructure;
use std::sync::Arc;
use yc_core::errors::Result;
use yc_core::{ensure, DiscountFactor, Rate, Real, Time};
use yc_math::{Extrapolator, Interpolation, Interpolator};
use yc_time::{Date, DayCounter};

/// A yield curve defined by `(date, value)` nodes and an interpolator.
///
/// The first node sits at the reference date.
///
/// # Example
/// ```
/// use yc_math::LogLinear;
/// use yc_termstructures::{InterpolatedCurve, YieldTermStructure};
/// use yc_time::{Actual365Fixed, Date};
///
/// let dates = [
///     Date::from_ymd(2024, 1, 2).unwrap(),
///     Date::from_ymd(2025, 1, 2).unwrap(),
///     Date::from_ymd(2026, 1, 2).unwrap(),
/// ];
/// let curve =
///     InterpolatedCurve::discount_curve(&dates, &[1.0, 0.96, 0.92], Actual365Fixed, &LogLinear)
///         .unwrap();
/// assert_eq!(curve.discount_date(dates[1]).unwrap(), 0.96);
/// ```
#[derive(Debug)]
pub struct InterpolatedCurve {
    traits: Arc<dyn CurveTraits>,
    day_counter: Arc<dyn DayCounter>,
    dates: Vec<Date>,
    times: Vec<Time>,
    data: Vec<Real>,
    interpolation: Box<dyn Interpolation>,
    extrapolate: bool,
}

impl InterpolatedCurve {
    /// Build a curve interpolating discount factors.
    ///
    /// The first discount factor must be 1 and all must be positive.
    pub fn discount_curve(
        dates: &[Date],
        discounts: &[DiscountFactor],
        day_counter: impl DayCounter + 'static,
        interpolator: &dyn Interpolator,
    ) -> Result<Self> {
        check_nodes(dates, discounts)?;
        ensure!(
            discounts[0] == 1.0,
            "initial discount factor ({}) must be 1.0",
            discounts[0]
        );
        for (date, df) in dates.iter().zip(discounts) {
            ensure!(*df > 0.0, "non-positive discount factor ({df}) at {date}");
        }
        Self::from_dates(CurveKind::Discount, dates, discounts, Arc::new(day_counter), interpolator)
    }

    /// Build a curve interpolating continuously-compounded zero yields.
    pub fn zero_curve(
        dates: &[Date],
        yields: &[Rate],
        day_counter: impl DayCounter + 'static,
        interpolator: &dyn Interpolator,
    ) -> Result<Self> {
        check_nodes(dates, yields)?;
        Self::from_dates(CurveKind::ZeroYield, dates, yields, Arc::new(day_counter), interpolator)
    }

    /// Build a curve interpolating instantaneous forward rates.
    pub fn forward_curve(
        dates: &[Date],
        forwards: &[Rate],
        day_counter: impl DayCounter + 'static,
        interpolator: &dyn Interpolator,
    ) -> Result<Self> {
        check_nodes(dates, forwards)?;
        Self::from_dates(CurveKind::ForwardRate, dates, forwards, Arc::new(day_counter), interpolator)
    }

    fn from_dates(
        kind: CurveKind,
        dates: &[Date],
        data: &[Real],
        day_counter: Arc<dyn DayCounter>,
        interpolator: &dyn Interpolator,
    ) -> Result<Self> {
        let times = dates
            .iter()
            .map(|d| day_counter.year_fraction(dates[0], *d))
            .collect();
        Self::from_nodes(
            kind.traits(true),
            day_counter,
            dates.to_vec(),
            times,
            data.to_vec(),
            interpolator,
        )
    }

    /// Build from node arrays already converted to times.
    pub(crate) fn from_nodes(
        traits: Arc<dyn CurveTraits>,
        day_counter: Arc<dyn DayCounter>,
        dates: Vec<Date>,
        times: Vec<Time>,
        data: Vec<Real>,
        interpolator: &dyn Interpolator,
    ) -> Result<Self> {
        ensure!(
            dates.len() == times.len() && times.len() == data.len(),
            "{} dates, {} times and {} values given",
            dates.len(),
            times.len(),
            data.len()
        );
        let interpolation = interpolator.interpolate(&times, &data)?;
        Ok(Self {
            traits,
            day_counter,
            dates,
            times,
            data,
            interpolation,
            extrapolate: false,
        })
    }

    /// What the node values represent.
    pub fn kind(&self) -> CurveKind {
        self.traits.kind()
    }

    /// Node dates.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Node times.
    pub fn times(&self) -> &[Time] {
        &self.times
    }

    /// Node values.
    pub fn data(&self) -> &[Real] {
        &self.data
    }

    /// `(date, value)` pairs.
    pub fn nodes(&self) -> Vec<(Date, Real)> {
        self.dates.iter().copied().zip(self.data.iter().copied()).collect()
    }
}

/// Shape checks shared by the public constructors.
fn check_nodes(dates: &[Date], values: &[Real]) -> Result<()> {
    ensure!(
        dates.len() >= 2,
        "not enough nodes: {} given, at least 2 required",
        dates.len()
    );
    ensure!(
        dates.len() == values.len(),
        "dates/values count mismatch: {} vs {}",
        dates.len(),
        values.len()
    );
    for pair in dates.windows(2) {
        ensure!(
            pair[1] > pair[0],
            "dates must be strictly increasing: {} follows {}",
            pair[1],
            pair[0]
        );
    }
    Ok(())
}

impl Extrapolator for InterpolatedCurve {
    fn allows_extrapolation(&self) -> bool {
        self.extrapolate
    }

    fn set_extrapolation(&mut self, allow: bool) {
        self.extrapolate = allow;
    }
}

impl TermStructure for InterpolatedCurve {
    fn reference_date(&self) -> Result<Date> {
        Ok(self.dates[0])
    }

    fn day_counter(&self) -> &Arc<dyn DayCounter> {
        &self.day_counter
    }

    fn max_date(&self) -> Date {
        self.dates[self.dates.len() - 1]
    }
}

impl YieldTermStructure for InterpolatedCurve {
    fn discount_impl(&self, t: Time) -> Result<DiscountFactor> {
        self.traits.discount(&*self.interpolation, t)
    }

    fn zero_yield_impl(&self, t: Time) -> Result<Rate> {
        self.traits.zero_yield(&*self.interpolation, t)
    }

    fn forward_impl(&self, t: Time) -> Result<Rate> {
        self.traits.forward(&*self.interpolation, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use yc_math::{Cubic, Linear, LogLinear};
    use yc_time::{Actual360, Actual365Fixed, Period};

    fn dates() -> Vec<Date> {
        let start = Date::from_ymd(2024, 3, 15).unwrap();
        [0, 6, 12, 24, 60]
            .into_iter()
            .map(|m| start.advance_by(Period::months(m)).unwrap())
            .collect()
    }

    #[test]
    fn discount_round_trip_is_exact() {
        let discounts = [1.0, 0.981, 0.962, 0.921, 0.802];
        for interpolator in [&LogLinear as &dyn Interpolator, &Linear, &Cubic] {
            let curve =
                InterpolatedCurve::discount_curve(&dates(), &discounts, Actual360, interpolator)
                    .unwrap();
            for (date, df) in dates().iter().zip(discounts) {
                assert_eq!(curve.discount_date(*date).unwrap(), df, "{interpolator:?}");
            }
            assert_eq!(curve.times()[0], 0.0);
            assert_eq!(curve.kind(), CurveKind::Discount);
        }
    }

    #[test]
    fn invalid_discount_nodes() {
        let d = dates();
        let err = InterpolatedCurve::discount_curve(&d, &[0.99, 0.98, 0.97, 0.96, 0.95], Actual360, &LogLinear)
            .unwrap_err();
        assert!(err.is_configuration());
        let err = InterpolatedCurve::discount_curve(&d, &[1.0, 0.98, -0.1, 0.96, 0.95], Actual360, &LogLinear)
            .unwrap_err();
        assert!(err.is_configuration());
        let err = InterpolatedCurve::discount_curve(&d[..3], &[1.0, 0.98], Actual360, &LogLinear)
            .unwrap_err();
        assert!(err.is_configuration());
        let err = InterpolatedCurve::zero_curve(&d[..1], &[0.01], Actual360, &Linear).unwrap_err();
        assert!(err.is_configuration());
        let swapped = [d[0], d[2], d[1]];
        let err = InterpolatedCurve::zero_curve(&swapped, &[0.01; 3], Actual360, &Linear).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn zero_curve_reproduces_its_yields() {
        let yields = [0.02, 0.021, 0.023, 0.026, 0.03];
        let curve = InterpolatedCurve::zero_curve(&dates(), &yields, Actual365Fixed, &Linear).unwrap();
        for (date, z) in dates().iter().zip(yields).skip(1) {
            let t = curve.time_from_reference(*date).unwrap();
            assert_abs_diff_eq!(curve.zero_rate(t).unwrap(), z, epsilon = 1e-15);
            assert_abs_diff_eq!(curve.discount(t).unwrap(), (-z * t).exp(), epsilon = 1e-15);
        }
        assert_eq!(curve.nodes().len(), 5);
    }

    #[test]
    fn forward_curve_integrates_forwards() {
        let forwards = [0.02, 0.02, 0.03, 0.03, 0.04];
        let curve =
            InterpolatedCurve::forward_curve(&dates(), &forwards, Actual365Fixed, &Linear).unwrap();
        let times = curve.times().to_vec();
        // trapezoidal rule is exact for piecewise-linear forwards
        let mut integral = 0.0;
        for i in 1..times.len() {
            integral += 0.5 * (forwards[i - 1] + forwards[i]) * (times[i] - times[i - 1]);
            assert_abs_diff_eq!(curve.discount(times[i]).unwrap(), (-integral).exp(), epsilon = 1e-14);
        }
        assert_abs_diff_eq!(curve.forward_rate(times[2], times[2]).unwrap(), 0.03, epsilon = 1e-15);
    }

    #[test]
    fn range_boundaries() {
        let discounts = [1.0, 0.981, 0.962, 0.921, 0.802];
        let mut curve =
            InterpolatedCurve::discount_curve(&dates(), &discounts, Actual360, &LogLinear).unwrap();
        let t_max = curve.max_time().unwrap();
        assert!(curve.discount(0.0).is_ok());
        assert!(curve.discount(t_max).is_ok());
        assert!(curve.discount(t_max + 1.0).unwrap_err().is_range());
        curve.enable_extrapolation();
        assert!(curve.discount(t_max + 1.0).is_ok());
        curve.disable_extrapolation();
        assert!(curve.discount(t_max + 1.0).unwrap_err().is_range());
    }
}
