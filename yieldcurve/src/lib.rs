//! # yieldcurve
//!
//! Bootstrapping of interest-rate yield curves from deposits, FRAs,
//! futures, and swaps.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `yc-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! yieldcurve = "0.1"
//! ```
//!
//! ```rust
//! use std::sync::Arc;
//! use yieldcurve::{
//!     Actual360, CurveKind, Date, DepositRateHelper, Frequency, LogLinear, Period,
//!     PiecewiseYieldCurve, RateHelper, SwapRateHelper, Thirty360, YieldTermStructure,
//! };
//!
//! let today = Date::from_ymd(2024, 1, 15).unwrap();
//! let settlement = today.add_days(2).unwrap();
//! let helpers: Vec<Arc<dyn RateHelper>> = vec![
//!     Arc::new(
//!         DepositRateHelper::from_tenor(0.0456, settlement, Period::months(3), Actual360)
//!             .unwrap(),
//!     ),
//!     Arc::new(
//!         SwapRateHelper::from_tenor(0.0454, settlement, Period::years(1), Frequency::Annual, Thirty360)
//!             .unwrap(),
//!     ),
//!     Arc::new(
//!         SwapRateHelper::from_tenor(0.0499, settlement, Period::years(5), Frequency::Annual, Thirty360)
//!             .unwrap(),
//!     ),
//! ];
//!
//! let curve =
//!     PiecewiseYieldCurve::new(CurveKind::Discount, today, helpers, Actual360, LogLinear).unwrap();
//! for helper in curve.instruments() {
//!     assert!(helper.quote_error(&curve).unwrap().abs() < 1e-9);
//! }
//! assert!(curve.discount(3.0).unwrap() < 1.0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, error definitions, and the observer and lazy-object
/// patterns.
pub use yc_core as core;

/// Date, period, frequency, day counter, and interest-rate types.
pub use yc_time as time;

/// Interpolation schemes and 1D root finders.
pub use yc_math as math;

/// Market quotes.
pub use yc_quotes as quotes;

/// Term structures, rate helpers, and the bootstrapper.
pub use yc_termstructures as termstructures;

pub use yc_core::{Compounding, Error, Handle, LazyObject, Result, ScopedEvaluationDate, Settings};
pub use yc_math::{
    BackwardFlat, Bisection, Brent, Cubic, Extrapolator, FalsePosition, ForwardFlat,
    Interpolation, Interpolator, Linear, LogLinear, Solver1D,
};
pub use yc_quotes::{IntoQuoteHandle, Quote, SimpleQuote};
pub use yc_termstructures::{
    BootstrapConfig, CurveKind, DepositRateHelper, FlatForward, FraRateHelper,
    FuturesRateHelper, ImpliedTermStructure, InterpolatedCurve, PiecewiseYieldCurve, RateHelper,
    SwapRateHelper, TermStructure, YieldTermStructure,
};
pub use yc_time::{
    Actual360, Actual365Fixed, Date, DayCounter, Frequency, InterestRate, Period, Thirty360,
    TimeUnit,
};
