//! # yc-core
//!
//! Core types, traits, and error definitions for yieldcurve.
//!
//! This crate provides the foundational building blocks shared across the
//! other crates in the workspace: numeric aliases, the error type, the
//! Observer/Observable pattern, the `Handle` wrapper, `LazyObject`, and the
//! process-wide `Settings`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Compounding conventions.
pub mod compounding;

/// Error type and the `ensure!` / `fail!` macros.
pub mod errors;

/// Shared, optionally-null reference handle.
pub mod handle;

/// Design patterns: observable, lazy object.
pub mod patterns;

/// Global library settings (evaluation date).
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Signed integer used for day offsets.
pub type Integer = i32;

/// Non-negative integer type.
pub type Natural = u32;

/// Alias used for array sizes / indices.
pub type Size = usize;

/// A rate expressed as a decimal (e.g. 0.05 = 5 %).
pub type Rate = Real;

/// A discount factor.
pub type DiscountFactor = Real;

/// A price or value.
pub type Price = Real;

/// A time measurement in years.
pub type Time = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use compounding::Compounding;
pub use errors::{Error, Result};
pub use handle::Handle;
pub use patterns::lazy_object::{DirtyFlag, LazyObject, LazyState};
pub use patterns::observable::{Observable, ObservableImpl, Observer};
pub use settings::{ScopedEvaluationDate, Settings};
