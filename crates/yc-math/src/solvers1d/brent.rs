use super::{Bracket, Evaluator, Solver1D, DEFAULT_MAX_EVALUATIONS};
use crate::comparison::close;
use yc_core::errors::Result;
use yc_core::Real;

/// Brent's method: inverse quadratic interpolation with a bisection
/// fallback, started from the guess.
#[derive(Debug, Clone, Copy)]
pub struct Brent {
    max_evaluations: usize,
}

impl Brent {
    /// Set the evaluation budget.
    pub fn with_max_evaluations(mut self, max_evaluations: usize) -> Self {
        self.max_evaluations = max_evaluations;
        self
    }
}

impl Default for Brent {
    fn default() -> Self {
        Self {
            max_evaluations: DEFAULT_MAX_EVALUATIONS,
        }
    }
}

impl Solver1D for Brent {
    fn name(&self) -> &'static str {
        "Brent"
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
        let Bracket {
            mut x_min,
            mut x_max,
            mut fx_min,
            mut fx_max,
            guess,
        } = bracket;

        // start with the guess on one side and both bounds on the other
        let mut root = guess;
        let mut froot = f.call(root)?;
        if froot * fx_min < 0.0 {
            x_max = x_min;
            fx_max = fx_min;
        } else {
            x_min = x_max;
            fx_min = fx_max;
        }
        let mut d = root - x_max;
        let mut e = d;

        loop {
            if (froot > 0.0 && fx_max > 0.0) || (froot < 0.0 && fx_max < 0.0) {
                x_max = x_min;
                fx_max = fx_min;
                d = root - x_min;
                e = d;
            }
            if fx_max.abs() < froot.abs() {
                x_min = root;
                root = x_max;
                x_max = x_min;
                fx_min = froot;
                froot = fx_max;
                fx_max = fx_min;
            }
            let tol = 2.0 * f64::EPSILON * root.abs() + 0.5 * accuracy;
            let x_mid = 0.5 * (x_max - root);
            if x_mid.abs() <= tol || close(froot, 0.0) {
                return Ok(root);
            }

            if e.abs() >= tol && fx_min.abs() > froot.abs() {
                let s = froot / fx_min;
                let (mut p, mut q) = if close(x_min, x_max) {
                    (2.0 * x_mid * s, 1.0 - s)
                } else {
                    let q = fx_min / fx_max;
                    let r = froot / fx_max;
                    (
                        s * (2.0 * x_mid * q * (q - r) - (root - x_min) * (r - 1.0)),
                        (q - 1.0) * (r - 1.0) * (s - 1.0),
                    )
                };
                if p > 0.0 {
                    q = -q;
                }
                p = p.abs();
                let min1 = 3.0 * x_mid * q - (tol * q).abs();
                let min2 = (e * q).abs();
                if 2.0 * p < min1.min(min2) {
                    // interpolation accepted
                    e = d;
                    d = p / q;
                } else {
                    d = x_mid;
                    e = d;
                }
            } else {
                d = x_mid;
                e = d;
            }

            x_min = root;
            fx_min = froot;
            root += if d.abs() > tol { d } else { tol.copysign(x_mid) };
            froot = f.call(root)?;
        }
    }
}
