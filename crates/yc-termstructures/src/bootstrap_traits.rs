//! Curve traits: what the node values of a bootstrapped curve mean.
//!
//! A [`PiecewiseYieldCurve`](crate::PiecewiseYieldCurve) solves for one
//! value per instrument.  Depending on the [`CurveKind`] those values are
//! discount factors, zero yields or instantaneous forwards; the matching
//! [`CurveTraits`] implementation supplies starting values, solver bounds,
//! and the formulas that turn an interpolation of the node values into
//! discount factors and rates.
//!
//! Past the last node every kind extrapolates with a flat instantaneous
//! forward equal to the one at the last node.

use crate::yield_term_structure::YieldTermStructure;
use std::fmt;
use std::sync::Arc;
use yc_core::errors::Result;
use yc_core::{DiscountFactor, Rate, Real, Time};
use yc_math::Interpolation;

/// Average rate used to seed rate curves.
const AVERAGE_RATE: Rate = 0.05;

/// Bound on rates (and discount factors) explored by the solver.
const MAX_RATE: Rate = 3.0;

/// The quantity a bootstrapped curve interpolates.
///
/// Not every interpolator suits every kind.  These pairings cannot be
/// bootstrapped and fail with a "could not bootstrap" convergence error:
///
/// * rate curves with `LogLinear` unless negative rates are disallowed,
///   since the solver bracket reaches below zero;
/// * `ForwardRate` with `ForwardFlat`, where a node never affects the
///   instrument maturing on it;
/// * `Discount` with `BackwardFlat` when the first helper settles after
///   the reference date, as both its dates then read the same node;
/// * `ZeroYield` with `Cubic` may fail to bracket a node once the spline
///   couples all nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveKind {
    /// Discount factors.
    Discount,
    /// Instantaneous forward rates.
    ForwardRate,
    /// Continuously-compounded zero yields.
    ZeroYield,
}

impl CurveKind {
    /// The traits implementation for this kind.
    pub fn traits(self, allow_negative_rates: bool) -> Arc<dyn CurveTraits> {
        match self {
            CurveKind::Discount => Arc::new(DiscountTraits {
                allow_negative_rates,
            }),
            CurveKind::ForwardRate => Arc::new(ForwardRateTraits {
                allow_negative_rates,
            }),
            CurveKind::ZeroYield => Arc::new(ZeroYieldTraits {
                allow_negative_rates,
            }),
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveKind::Discount => write!(f, "discount"),
            CurveKind::ForwardRate => write!(f, "forward rate"),
            CurveKind::ZeroYield => write!(f, "zero yield"),
        }
    }
}

/// Strategy for one [`CurveKind`].
///
/// The `interpolation` arguments interpolate node values over node times,
/// with the first node at `t = 0`.  Callers have already checked `t`
/// against the curve domain.
pub trait CurveTraits: fmt::Debug + Send + Sync {
    /// The kind this implementation serves.
    fn kind(&self) -> CurveKind;

    /// Value at the reference date.
    fn initial_value(&self) -> Real;

    /// Starting guess for the first solved node.
    fn initial_guess(&self) -> Real;

    /// Starting guess for a node at `t`, read off a partially built curve.
    fn guess(&self, curve: &dyn YieldTermStructure, t: Time) -> Result<Real>;

    /// Lower solver bound for node `i`.
    fn min_value_after(&self, i: usize, data: &[Real]) -> Real;

    /// Upper solver bound for node `i`.
    fn max_value_after(&self, i: usize, data: &[Real]) -> Real;

    /// Store a trial value for node `i`.
    fn update_guess(&self, data: &mut [Real], value: Real, i: usize) {
        data[i] = value;
    }

    /// Discount factor at `t`.
    fn discount(&self, interpolation: &dyn Interpolation, t: Time) -> Result<DiscountFactor>;

    /// Continuously-compounded zero yield at `t`.
    fn zero_yield(&self, interpolation: &dyn Interpolation, t: Time) -> Result<Rate>;

    /// Instantaneous forward at `t`.
    fn forward(&self, interpolation: &dyn Interpolation, t: Time) -> Result<Rate>;
}

/// Time and value of the last node.
fn last_node(interpolation: &dyn Interpolation) -> (Time, Real) {
    let ys = interpolation.y_values();
    (interpolation.x_max(), ys[ys.len() - 1])
}

fn min_rate(allow_negative_rates: bool) -> Rate {
    if allow_negative_rates {
        -MAX_RATE
    } else {
        f64::EPSILON
    }
}

/// Rate curves let the rate at `t = 0` follow the first segment.
fn update_rate_guess(data: &mut [Real], value: Real, i: usize) {
    data[i] = value;
    if i == 1 {
        data[0] = value;
    }
}

// ── Discount ─────────────────────────────────────────────────────────────────

/// Node values are discount factors.
#[derive(Debug, Clone, Copy)]
pub struct DiscountTraits {
    /// Let discount factors grow with maturity.
    pub allow_negative_rates: bool,
}

impl CurveTraits for DiscountTraits {
    fn kind(&self) -> CurveKind {
        CurveKind::Discount
    }

    fn initial_value(&self) -> Real {
        1.0
    }

    fn initial_guess(&self) -> Real {
        0.9
    }

    fn guess(&self, curve: &dyn YieldTermStructure, t: Time) -> Result<Real> {
        curve.discount_with(t, true)
    }

    fn min_value_after(&self, _i: usize, _data: &[Real]) -> Real {
        f64::EPSILON
    }

    fn max_value_after(&self, i: usize, data: &[Real]) -> Real {
        if self.allow_negative_rates {
            MAX_RATE
        } else {
            data[i - 1]
        }
    }

    fn discount(&self, interpolation: &dyn Interpolation, t: Time) -> Result<DiscountFactor> {
        let (t_max, d_max) = last_node(interpolation);
        if t <= t_max {
            return interpolation.evaluate(t, true);
        }
        let f_max = -interpolation.derivative(t_max, true)? / d_max;
        Ok(d_max * (-f_max * (t - t_max)).exp())
    }

    fn zero_yield(&self, interpolation: &dyn Interpolation, t: Time) -> Result<Rate> {
        if t == 0.0 {
            return self.forward(interpolation, 0.0);
        }
        Ok(-self.discount(interpolation, t)?.ln() / t)
    }

    fn forward(&self, interpolation: &dyn Interpolation, t: Time) -> Result<Rate> {
        let (t_max, d_max) = last_node(interpolation);
        if t <= t_max {
            return Ok(-interpolation.derivative(t, true)? / interpolation.evaluate(t, true)?);
        }
        Ok(-interpolation.derivative(t_max, true)? / d_max)
    }
}

// ── Zero yield ───────────────────────────────────────────────────────────────

/// Node values are continuously-compounded zero yields.
#[derive(Debug, Clone, Copy)]
pub struct ZeroYieldTraits {
    /// Let yields go below zero.
    pub allow_negative_rates: bool,
}

impl CurveTraits for ZeroYieldTraits {
    fn kind(&self) -> CurveKind {
        CurveKind::ZeroYield
    }

    fn initial_value(&self) -> Real {
        AVERAGE_RATE
    }

    fn initial_guess(&self) -> Real {
        AVERAGE_RATE
    }

    fn guess(&self, curve: &dyn YieldTermStructure, t: Time) -> Result<Real> {
        curve.zero_rate_with(t, true)
    }

    fn min_value_after(&self, _i: usize, _data: &[Real]) -> Real {
        min_rate(self.allow_negative_rates)
    }

    fn max_value_after(&self, _i: usize, _data: &[Real]) -> Real {
        MAX_RATE
    }

    fn update_guess(&self, data: &mut [Real], value: Real, i: usize) {
        update_rate_guess(data, value, i);
    }

    fn discount(&self, interpolation: &dyn Interpolation, t: Time) -> Result<DiscountFactor> {
        Ok((-self.zero_yield(interpolation, t)? * t).exp())
    }

    fn zero_yield(&self, interpolation: &dyn Interpolation, t: Time) -> Result<Rate> {
        let (t_max, z_max) = last_node(interpolation);
        if t <= t_max {
            return interpolation.evaluate(t, true);
        }
        let f_max = z_max + t_max * interpolation.derivative(t_max, true)?;
        Ok((z_max * t_max + f_max * (t - t_max)) / t)
    }

    fn forward(&self, interpolation: &dyn Interpolation, t: Time) -> Result<Rate> {
        let (t_max, z_max) = last_node(interpolation);
        if t <= t_max {
            return Ok(interpolation.evaluate(t, true)? + t * interpolation.derivative(t, true)?);
        }
        Ok(z_max + t_max * interpolation.derivative(t_max, true)?)
    }
}

// ── Forward rate ─────────────────────────────────────────────────────────────

/// Node values are instantaneous forward rates.
#[derive(Debug, Clone, Copy)]
pub struct ForwardRateTraits {
    /// Let forwards go below zero.
    pub allow_negative_rates: bool,
}

impl ForwardRateTraits {
    /// `∫₀ᵗ f(s) ds`.
    fn integral(interpolation: &dyn Interpolation, t: Time) -> Result<Real> {
        let (t_max, f_max) = last_node(interpolation);
        if t <= t_max {
            return interpolation.primitive(t, true);
        }
        Ok(interpolation.primitive(t_max, true)? + f_max * (t - t_max))
    }
}

impl CurveTraits for ForwardRateTraits {
    fn kind(&self) -> CurveKind {
        CurveKind::ForwardRate
    }

    fn initial_value(&self) -> Real {
        AVERAGE_RATE
    }

    fn initial_guess(&self) -> Real {
        AVERAGE_RATE
    }

    fn guess(&self, curve: &dyn YieldTermStructure, t: Time) -> Result<Real> {
        curve.forward_rate_with(t, t, true)
    }

    fn min_value_after(&self, _i: usize, _data: &[Real]) -> Real {
        min_rate(self.allow_negative_rates)
    }

    fn max_value_after(&self, _i: usize, _data: &[Real]) -> Real {
        MAX_RATE
    }

    fn update_guess(&self, data: &mut [Real], value: Real, i: usize) {
        update_rate_guess(data, value, i);
    }

    fn discount(&self, interpolation: &dyn Interpolation, t: Time) -> Result<DiscountFactor> {
        Ok((-Self::integral(interpolation, t)?).exp())
    }

    fn zero_yield(&self, interpolation: &dyn Interpolation, t: Time) -> Result<Rate> {
        if t == 0.0 {
            return self.forward(interpolation, 0.0);
        }
        Ok(Self::integral(interpolation, t)? / t)
    }

    fn forward(&self, interpolation: &dyn Interpolation, t: Time) -> Result<Rate> {
        let (t_max, f_max) = last_node(interpolation);
        if t <= t_max {
            return interpolation.evaluate(t, true);
        }
        Ok(f_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use yc_math::{Interpolator, Linear, LogLinear};

    #[test]
    fn bounds_depend_on_negative_rates() {
        let data = [1.0, 0.97, 0.9];
        let strict = CurveKind::Discount.traits(false);
        assert_eq!(strict.min_value_after(2, &data), f64::EPSILON);
        assert_eq!(strict.max_value_after(2, &data), 0.97);
        let relaxed = CurveKind::Discount.traits(true);
        assert_eq!(relaxed.max_value_after(2, &data), 3.0);

        for kind in [CurveKind::ZeroYield, CurveKind::ForwardRate] {
            assert_eq!(kind.traits(true).min_value_after(1, &data), -3.0);
            assert_eq!(kind.traits(false).min_value_after(1, &data), f64::EPSILON);
            assert_eq!(kind.traits(false).max_value_after(1, &data), 3.0);
        }
    }

    #[test]
    fn rate_curves_move_the_first_node_with_the_second() {
        let mut data = [0.05, 0.05, 0.05];
        let zero = CurveKind::ZeroYield.traits(true);
        zero.update_guess(&mut data, 0.02, 1);
        assert_eq!(data, [0.02, 0.02, 0.05]);
        zero.update_guess(&mut data, 0.03, 2);
        assert_eq!(data, [0.02, 0.02, 0.03]);

        let mut data = [1.0, 1.0];
        CurveKind::Discount.traits(true).update_guess(&mut data, 0.98, 1);
        assert_eq!(data, [1.0, 0.98]);
    }

    #[test]
    fn starting_values() {
        let discount = CurveKind::Discount.traits(true);
        assert_eq!((discount.initial_value(), discount.initial_guess()), (1.0, 0.9));
        for kind in [CurveKind::ZeroYield, CurveKind::ForwardRate] {
            let traits = kind.traits(true);
            assert_eq!((traits.initial_value(), traits.initial_guess()), (0.05, 0.05));
            assert_eq!(traits.kind(), kind);
        }
    }

    #[test]
    fn discount_nodes_extrapolate_with_flat_forward() {
        let r: f64 = 0.04;
        let xs = [0.0, 1.0, 2.0];
        let ys: Vec<f64> = xs.iter().map(|t| (-r * t).exp()).collect();
        let interp = LogLinear.interpolate(&xs, &ys).unwrap();
        let traits = CurveKind::Discount.traits(true);
        assert_abs_diff_eq!(traits.forward(&*interp, 0.5).unwrap(), r, epsilon = 1e-12);
        assert_abs_diff_eq!(traits.zero_yield(&*interp, 0.0).unwrap(), r, epsilon = 1e-12);
        assert_abs_diff_eq!(
            traits.discount(&*interp, 5.0).unwrap(),
            (-r * 5.0).exp(),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(traits.forward(&*interp, 5.0).unwrap(), r, epsilon = 1e-12);
    }

    #[test]
    fn zero_and_forward_nodes_agree_on_a_flat_curve() {
        let r = 0.03;
        let xs = [0.0, 1.0, 3.0];
        let ys = [r; 3];
        let interp = Linear.interpolate(&xs, &ys).unwrap();
        for kind in [CurveKind::ZeroYield, CurveKind::ForwardRate] {
            let traits = kind.traits(true);
            for t in [0.0, 0.5, 3.0, 10.0] {
                assert_abs_diff_eq!(traits.discount(&*interp, t).unwrap(), (-r * t).exp(), epsilon = 1e-14);
                assert_abs_diff_eq!(traits.zero_yield(&*interp, t).unwrap(), r, epsilon = 1e-14);
                assert_abs_diff_eq!(traits.forward(&*interp, t).unwrap(), r, epsilon = 1e-14);
            }
        }
    }

    #[test]
    fn sloped_zero_curve_forwards() {
        // z(t) = 0.01 + 0.01 t on [0, 2], so f(t) = 0.01 + 0.02 t
        let interp = Linear.interpolate(&[0.0, 2.0], &[0.01, 0.03]).unwrap();
        let traits = CurveKind::ZeroYield.traits(true);
        assert_abs_diff_eq!(traits.forward(&*interp, 1.0).unwrap(), 0.03, epsilon = 1e-15);
        // beyond the last node the forward stays at f(2) = 0.05
        assert_abs_diff_eq!(traits.forward(&*interp, 4.0).unwrap(), 0.05, epsilon = 1e-15);
        let expected = (0.03 * 2.0 + 0.05 * 2.0) / 4.0;
        assert_abs_diff_eq!(traits.zero_yield(&*interp, 4.0).unwrap(), expected, epsilon = 1e-15);
    }
}
