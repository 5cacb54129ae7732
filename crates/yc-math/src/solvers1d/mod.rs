//! Bracketing 1D root finders.
//!
//! Every solver shares the [`Solver1D::solve`] preamble: the accuracy and
//! the bracket are validated, both end points are evaluated (an end point
//! that is already a root is returned as is), a sign change is required,
//! and the guess must lie strictly inside the bracket.  The algorithm
//! proper then runs in [`Solver1D::solve_bracketed`] under an evaluation
//! budget.
//!
//! Objectives return `Result` so that failures raised while evaluating them
//! travel out of the solver unchanged.

mod bisection;
mod brent;
mod false_position;

pub use bisection::Bisection;
pub use brent::Brent;
pub use false_position::FalsePosition;

use crate::comparison::close;
use tracing::trace;
use yc_core::errors::{Error, Result};
use yc_core::{ensure, Real};

/// Default evaluation budget.
pub const DEFAULT_MAX_EVALUATIONS: usize = 100;

/// Budgeted, NaN-checking wrapper around an objective function.
pub struct Evaluator<'f> {
    f: &'f mut dyn FnMut(Real) -> Result<Real>,
    count: usize,
    max: usize,
}

impl<'f> Evaluator<'f> {
    /// Wrap `f` with a budget of `max` evaluations.
    pub fn new(f: &'f mut dyn FnMut(Real) -> Result<Real>, max: usize) -> Self {
        Self { f, count: 0, max }
    }

    /// Evaluate the objective at `x`.
    ///
    /// # Errors
    /// [`Error::Convergence`] once the budget is spent or if the objective
    /// returns NaN; errors from the objective itself are passed through.
    pub fn call(&mut self, x: Real) -> Result<Real> {
        if self.count >= self.max {
            trace!(evaluations = self.count, x, "solver evaluation budget exhausted");
            return Err(self.budget_exceeded());
        }
        self.count += 1;
        let y = (self.f)(x)?;
        if y.is_nan() {
            return Err(Error::Convergence(format!(
                "objective function returned NaN at x = {x}"
            )));
        }
        Ok(y)
    }

    /// Number of evaluations performed so far.
    pub fn evaluations(&self) -> usize {
        self.count
    }

    /// The error reported when the budget is exceeded.
    pub fn budget_exceeded(&self) -> Error {
        Error::Convergence(format!(
            "maximum number of function evaluations ({}) exceeded",
            self.max
        ))
    }
}

impl std::fmt::Debug for Evaluator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Evaluator")
            .field("count", &self.count)
            .field("max", &self.max)
            .finish()
    }
}

/// A validated bracket with the objective evaluated at both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    /// Lower end.
    pub x_min: Real,
    /// Upper end.
    pub x_max: Real,
    /// Objective at `x_min`.
    pub fx_min: Real,
    /// Objective at `x_max`.
    pub fx_max: Real,
    /// Starting point, strictly inside the bracket.
    pub guess: Real,
}

/// A bracketing root finder.
pub trait Solver1D: std::fmt::Debug + Send + Sync {
    /// Name used in log and error messages.
    fn name(&self) -> &'static str;

    /// Evaluation budget for one call to [`solve`](Self::solve).
    fn max_evaluations(&self) -> usize;

    /// Run the algorithm on a validated bracket.
    fn solve_bracketed(&self, f: &mut Evaluator<'_>, accuracy: Real, bracket: Bracket)
        -> Result<Real>;

    /// Find `x` in `[x_min, x_max]` with `f(x) = 0` to within `accuracy`.
    ///
    /// # Errors
    /// * [`Error::Configuration`] for a non-positive accuracy, an empty or
    ///   reversed bracket, or a guess not strictly inside it;
    /// * [`Error::Convergence`] if the bracket holds no sign change, the
    ///   budget is exceeded, or the objective returns NaN.
    fn solve(
        &self,
        f: &mut dyn FnMut(Real) -> Result<Real>,
        accuracy: Real,
        guess: Real,
        x_min: Real,
        x_max: Real,
    ) -> Result<Real> {
        ensure!(accuracy > 0.0, "accuracy ({accuracy}) must be positive");
        let accuracy = accuracy.max(f64::EPSILON);
        ensure!(
            x_min < x_max,
            "invalid range: x_min ({x_min}) >= x_max ({x_max})"
        );

        let mut evaluator = Evaluator::new(f, self.max_evaluations());
        let fx_min = evaluator.call(x_min)?;
        if close(fx_min, 0.0) {
            return Ok(x_min);
        }
        let fx_max = evaluator.call(x_max)?;
        if close(fx_max, 0.0) {
            return Ok(x_max);
        }
        if fx_min * fx_max > 0.0 {
            return Err(Error::Convergence(format!(
                "root not bracketed: f[{x_min}, {x_max}] -> [{fx_min:e}, {fx_max:e}]"
            )));
        }
        ensure!(
            guess > x_min,
            "guess ({guess}) must be greater than x_min ({x_min})"
        );
        ensure!(
            guess < x_max,
            "guess ({guess}) must be less than x_max ({x_max})"
        );

        let bracket = Bracket {
            x_min,
            x_max,
            fx_min,
            fx_max,
            guess,
        };
        let root = self.solve_bracketed(&mut evaluator, accuracy, bracket)?;
        trace!(
            solver = self.name(),
            root,
            evaluations = evaluator.evaluations(),
            "root found"
        );
        Ok(root)
    }
}
