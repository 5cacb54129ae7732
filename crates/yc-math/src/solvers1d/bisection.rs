use super::{Bracket, Evaluator, Solver1D, DEFAULT_MAX_EVALUATIONS};
use crate::comparison::close;
use yc_core::errors::Result;
use yc_core::Real;

/// Interval halving.  Slow but never leaves the bracket.
#[derive(Debug, Clone, Copy)]
pub struct Bisection {
    max_evaluations: usize,
}

impl Bisection {
    /// Set the evaluation budget.
    pub fn with_max_evaluations(mut self, max_evaluations: usize) -> Self {
        self.max_evaluations = max_evaluations;
        self
    }
}

impl Default for Bisection {
    fn default() -> Self {
        Self {
            max_evaluations: DEFAULT_MAX_EVALUATIONS,
        }
    }
}

impl Solver1D for Bisection {
    fn name(&self) -> &'static str {
        "Bisection"
    }

    fn max_evaluations(&self) -> usize {
        self.max_evaluations
    }

    fn solve_bracketed(
        &self,
        f: &mut Evaluator<'_>,
        accuracy: Real,
        bracket: Bracket,
    ) -> Result<Real> {
        // orient the search so that f > 0 lies at root + dx
        let (mut root, mut dx) = if bracket.fx_min < 0.0 {
            (bracket.x_min, bracket.x_max - bracket.x_min)
        } else {
            (bracket.x_max, bracket.x_min - bracket.x_max)
        };
        loop {
            dx /= 2.0;
            let x_mid = root + dx;
            let f_mid = f.call(x_mid)?;
            if f_mid <= 0.0 {
                root = x_mid;
            }
            if close(f_mid, 0.0) {
                return Ok(x_mid);
            }
            if dx.abs() < accuracy {
                return Ok(root);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_parabola() {
        let bisection = Bisection::default();
        assert_eq!(bisection.max_evaluations(), 100);
        let accuracy = 1.0e-15;
        let root = bisection
            .solve(&mut |x| Ok(x * x - 1.0), accuracy, 1.5, 0.0, 3.0)
            .unwrap();
        assert!((1.0 - root).abs() <= accuracy, "root is {root}");
    }

    #[test]
    fn decreasing_function() {
        let root = Bisection::default()
            .solve(&mut |x| Ok(2.0 - x.exp()), 1e-12, 0.1, 0.0, 1.0)
            .unwrap();
        assert!((root - 2.0_f64.ln()).abs() < 1e-12);
    }
}
