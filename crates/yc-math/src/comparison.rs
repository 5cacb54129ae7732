//! Floating-point comparison utilities.
//!
//! Both predicates compare relative to the magnitudes involved, scaled by
//! `n` machine epsilons (42 by default).  When one operand is zero the
//! tolerance becomes absolute and squared, so `close(x, 0.0)` only accepts
//! values of order 1e-29.

use yc_core::Real;

const DEFAULT_ULPS: u32 = 42;

/// `close_n(x, y, 42)`.
#[inline]
pub fn close(x: Real, y: Real) -> bool {
    close_n(x, y, DEFAULT_ULPS)
}

/// Return `true` if `x` and `y` agree within `n` epsilons relative to
/// **both** magnitudes.
pub fn close_n(x: Real, y: Real, n: u32) -> bool {
    if x == y {
        return true;
    }
    let diff = (x - y).abs();
    let tolerance = Real::from(n) * f64::EPSILON;
    if x * y == 0.0 {
        return diff < tolerance * tolerance;
    }
    diff <= tolerance * x.abs() && diff <= tolerance * y.abs()
}

/// `close_enough_n(x, y, 42)`.
#[inline]
pub fn close_enough(x: Real, y: Real) -> bool {
    close_enough_n(x, y, DEFAULT_ULPS)
}

/// Return `true` if `x` and `y` agree within `n` epsilons relative to
/// **either** magnitude.
pub fn close_enough_n(x: Real, y: Real, n: u32) -> bool {
    if x == y {
        return true;
    }
    let diff = (x - y).abs();
    let tolerance = Real::from(n) * f64::EPSILON;
    if x * y == 0.0 {
        return diff < tolerance * tolerance;
    }
    diff <= tolerance * x.abs() || diff <= tolerance * y.abs()
}
