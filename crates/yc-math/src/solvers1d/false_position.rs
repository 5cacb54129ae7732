use super::{Bracket, Evaluator, Solver1D, DEFAULT_MAX_EVALUATIONS};
use yc_core::errors::Result;
use yc_core::Real;

/// Regula falsi: the secant through the current bracket ends replaces the
/// end whose value has the same sign.
#[derive(Debug, Clone, Copy)]
pub struct FalsePosition {
    max_evaluations: usize,
}

impl FalsePosition {
    /// Set the evaluation budget.
    pub fn with_max_evaluations(mut self, max_evaluations: usize) -> Self {
        self.max_evaluations = max_evaluations;
        self
    }
}

impl Default for FalsePosition {
    fn default() -> Self {
        Self {
            max_evaluations: DEFAULT_MAX_EVALUATIONS,
        }
    }
}

impl Solver1D for FalsePosition {
    fn name(&self) -> &'static str {
        "FalsePosition"
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
        // (xl, fl) is the negative end, (xh, fh) the positive one
        let (mut xl, mut fl, mut xh, mut fh) = if bracket.fx_min < 0.0 {
            (bracket.x_min, bracket.fx_min, bracket.x_max, bracket.fx_max)
        } else {
            (bracket.x_max, bracket.fx_max, bracket.x_min, bracket.fx_min)
        };
        let mut dx = xh - xl;
        loop {
            let root = xl + dx * fl / (fl - fh);
            let froot = f.call(root)?;
            let del = if froot < 0.0 {
                let del = xl - root;
                xl = root;
                fl = froot;
                del
            } else {
                let del = xh - root;
                xh = root;
                fh = froot;
                del
            };
            dx = xh - xl;
            if del.abs() < accuracy || froot == 0.0 {
                return Ok(root);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_function_in_one_step() {
        let mut calls = 0;
        let root = FalsePosition::default()
            .solve(
                &mut |x| {
                    calls += 1;
                    Ok(3.0 * x - 1.0)
                },
                1e-12,
                0.5,
                0.0,
                1.0,
            )
            .unwrap();
        assert!((root - 1.0 / 3.0).abs() < 1e-15);
        // both ends, the secant root, and one confirming step
        assert!(calls <= 4, "{calls} evaluations");
    }

    #[test]
    fn cubic() {
        let root = FalsePosition::default()
            .solve(&mut |x| Ok(x.powi(3) - 2.0 * x - 5.0), 1e-10, 2.0, 1.0, 3.0)
            .unwrap();
        assert!((root - 2.094_551_481_542_326_5).abs() < 1e-9);
    }
}
