//! Error types for yieldcurve.
//!
//! Every fallible operation in the workspace returns [`Result`], whose error
//! side is the single `thiserror`-derived [`Error`] enum.  Precondition
//! checks go through the [`ensure!`](crate::ensure) macro and unconditional
//! failures through [`fail!`](crate::fail).

use thiserror::Error;

/// The top-level error type used throughout yieldcurve.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Invalid inputs: empty or duplicate instruments, null quotes,
    /// mismatched arrays, invalid solver arguments.  Not retryable.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Evaluation requested outside the valid domain without extrapolation.
    #[error("range error: {0}")]
    Range(String),

    /// A root finder or the bootstrap loop failed to converge.
    #[error("convergence error: {0}")]
    Convergence(String),

    /// Invalid calendar date or date arithmetic overflow.
    #[error("date error: {0}")]
    Date(String),

    /// General runtime error.
    #[error("{0}")]
    Runtime(String),
}

impl Error {
    /// Return `true` for [`Error::Configuration`].
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration(_))
    }

    /// Return `true` for [`Error::Range`].
    pub fn is_range(&self) -> bool {
        matches!(self, Error::Range(_))
    }

    /// Return `true` for [`Error::Convergence`].
    pub fn is_convergence(&self) -> bool {
        matches!(self, Error::Convergence(_))
    }
}

/// Shorthand `Result` type used throughout yieldcurve.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Configuration(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use yc_core::{ensure, errors::Error};
/// fn positive(x: f64) -> yc_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(matches!(positive(-1.0), Err(Error::Configuration(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Configuration(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use yc_core::{fail, errors::Error};
/// fn always_err() -> yc_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert_eq!(always_err(), Err(Error::Runtime("something went wrong".into())));
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
