//! # yc-math
//!
//! Mathematical building blocks for curve construction: floating-point
//! comparison, 1D/2D interpolation schemes with their interpolator
//! factories, and bracketing 1D root finders.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Floating-point comparison utilities.
pub mod comparison;

/// Extrapolation flag shared by interpolations and curves.
pub mod extrapolation;

/// 1D and 2D interpolation schemes.
pub mod interpolations;

/// 1D root-finding solvers.
pub mod solvers1d;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use comparison::{close, close_enough};
pub use extrapolation::Extrapolator;
pub use interpolations::{
    BackwardFlat, Bilinear, Cubic, ForwardFlat, Interpolation, Interpolation2D, Interpolator,
    Interpolator2D, Linear, LogLinear,
};
pub use solvers1d::{Bisection, Brent, FalsePosition, Solver1D};
