//! # yc-termstructures
//!
//! Yield term structures and their construction from market quotes.
//!
//! The centrepiece is [`PiecewiseYieldCurve`], which bootstraps discount
//! factors, zero yields or instantaneous forwards so that every
//! [`RateHelper`] reprices its quote.  Curves built directly from arrays
//! ([`InterpolatedCurve`]), flat curves ([`FlatForward`]) and re-anchored
//! views ([`ImpliedTermStructure`]) share the same
//! [`YieldTermStructure`] interface.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `TermStructure`: reference date, day counter and domain checks.
pub mod term_structure;

/// `YieldTermStructure`: discount factors, zero and forward rates.
pub mod yield_term_structure;

/// Curve traits: what the bootstrapped node values mean.
pub mod bootstrap_traits;

/// `InterpolatedCurve`: yield curve interpolated over node values.
pub mod interpolated_curve;

/// `FlatForward`: constant-rate yield curve.
pub mod flat_forward;

/// `ImpliedTermStructure`: another curve seen from a later date.
pub mod implied_term_structure;

/// Rate helpers: market instruments the bootstrapper calibrates to.
pub mod rate_helpers;

/// Bootstrap accuracy and iteration settings.
pub mod bootstrap_config;

/// `PiecewiseYieldCurve`: the iterative bootstrapper.
pub mod piecewise_yield_curve;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use bootstrap_config::BootstrapConfig;
pub use bootstrap_traits::{CurveKind, CurveTraits, DiscountTraits, ForwardRateTraits, ZeroYieldTraits};
pub use flat_forward::FlatForward;
pub use implied_term_structure::ImpliedTermStructure;
pub use interpolated_curve::InterpolatedCurve;
pub use piecewise_yield_curve::PiecewiseYieldCurve;
pub use rate_helpers::{
    DepositRateHelper, FraRateHelper, FuturesRateHelper, RateHelper, SwapRateHelper,
};
pub use term_structure::TermStructure;
pub use yield_term_structure::YieldTermStructure;
