//! # yc-quotes
//!
//! Observable market quotes for yieldcurve.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// `Quote` trait and `SimpleQuote`.
pub mod quote;

pub use quote::{IntoQuoteHandle, Quote, SimpleQuote};
