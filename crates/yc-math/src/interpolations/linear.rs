//! Linear and log-linear interpolation.

use super::{impl_extrapolator, Interpolation, Interpolator, Nodes};
use yc_core::errors::Result;
use yc_core::{ensure, Real};

// ── Linear ────────────────────────────────────────────────────────────────────

/// Piecewise-linear interpolation between nodes.
#[derive(Debug, Clone)]
pub struct LinearInterpolation {
    nodes: Nodes,
    slopes: Vec<Real>,
    // integral from xs[0] to xs[i]
    primitive: Vec<Real>,
}

impl LinearInterpolation {
    /// Fit to `xs`/`ys`; at least two points are required.
    pub fn new(xs: &[Real], ys: &[Real]) -> Result<Self> {
        let nodes = Nodes::new(xs, ys, 2)?;
        let slopes: Vec<Real> = nodes
            .widths()
            .iter()
            .zip(ys.windows(2))
            .map(|(h, y)| (y[1] - y[0]) / h)
            .collect();
        let mut primitive = Vec::with_capacity(xs.len());
        primitive.push(0.0);
        for (i, h) in nodes.widths().iter().enumerate() {
            primitive.push(primitive[i] + h * (ys[i] + 0.5 * h * slopes[i]));
        }
        Ok(Self {
            nodes,
            slopes,
            primitive,
        })
    }
}

impl_extrapolator!(LinearInterpolation);

impl Interpolation for LinearInterpolation {
    fn nodes(&self) -> &Nodes {
        &self.nodes
    }

    fn value_at(&self, x: Real) -> Real {
        let i = self.nodes.locate(x);
        if let Some(y) = self.nodes.node_value(i, x) {
            return y;
        }
        self.nodes.ys()[i] + self.slopes[i] * (x - self.nodes.xs()[i])
    }

    fn primitive_at(&self, x: Real) -> Real {
        let i = self.nodes.locate(x);
        let dx = x - self.nodes.xs()[i];
        self.primitive[i] + dx * (self.nodes.ys()[i] + 0.5 * dx * self.slopes[i])
    }

    fn derivative_at(&self, x: Real) -> Real {
        self.slopes[self.nodes.locate(x)]
    }

    fn second_derivative_at(&self, _x: Real) -> Real {
        0.0
    }
}

/// Factory for [`LinearInterpolation`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Linear;

impl Interpolator for Linear {
    fn interpolate(&self, xs: &[Real], ys: &[Real]) -> Result<Box<dyn Interpolation>> {
        Ok(Box::new(LinearInterpolation::new(xs, ys)?))
    }
}

// ── Log-linear ────────────────────────────────────────────────────────────────

/// Linear interpolation of `ln(y)`; the natural scheme for discount factors.
///
/// All ordinates must be strictly positive.
#[derive(Debug, Clone)]
pub struct LogLinearInterpolation {
    nodes: Nodes,
    log_ys: Vec<Real>,
    slopes: Vec<Real>,
    primitive: Vec<Real>,
}

impl LogLinearInterpolation {
    /// Fit to `xs`/`ys`; at least two points, all `ys > 0`.
    pub fn new(xs: &[Real], ys: &[Real]) -> Result<Self> {
        let nodes = Nodes::new(xs, ys, 2)?;
        ensure!(
            ys.iter().all(|&y| y > 0.0),
            "log-linear interpolation needs positive values, got {ys:?}"
        );
        let log_ys: Vec<Real> = ys.iter().map(|y| y.ln()).collect();
        let widths = nodes.widths();
        let slopes: Vec<Real> = widths
            .iter()
            .zip(log_ys.windows(2))
            .map(|(h, l)| (l[1] - l[0]) / h)
            .collect();
        let mut primitive = Vec::with_capacity(xs.len());
        primitive.push(0.0);
        for (i, h) in widths.iter().enumerate() {
            primitive.push(primitive[i] + segment_integral(ys[i], slopes[i], *h));
        }
        Ok(Self {
            nodes,
            log_ys,
            slopes,
            primitive,
        })
    }
}

/// `∫₀^dx y0·exp(b·s) ds`.
fn segment_integral(y0: Real, b: Real, dx: Real) -> Real {
    if b == 0.0 {
        y0 * dx
    } else {
        y0 * (b * dx).exp_m1() / b
    }
}

impl_extrapolator!(LogLinearInterpolation);

impl Interpolation for LogLinearInterpolation {
    fn nodes(&self) -> &Nodes {
        &self.nodes
    }

    fn value_at(&self, x: Real) -> Real {
        let i = self.nodes.locate(x);
        if let Some(y) = self.nodes.node_value(i, x) {
            return y;
        }
        (self.log_ys[i] + self.slopes[i] * (x - self.nodes.xs()[i])).exp()
    }

    fn primitive_at(&self, x: Real) -> Real {
        let i = self.nodes.locate(x);
        let dx = x - self.nodes.xs()[i];
        self.primitive[i] + segment_integral(self.nodes.ys()[i], self.slopes[i], dx)
    }

    fn derivative_at(&self, x: Real) -> Real {
        self.value_at(x) * self.slopes[self.nodes.locate(x)]
    }

    fn second_derivative_at(&self, x: Real) -> Real {
        let b = self.slopes[self.nodes.locate(x)];
        self.value_at(x) * b * b
    }
}

/// Factory for [`LogLinearInterpolation`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LogLinear;

impl Interpolator for LogLinear {
    fn interpolate(&self, xs: &[Real], ys: &[Real]) -> Result<Box<dyn Interpolation>> {
        Ok(Box::new(LogLinearInterpolation::new(xs, ys)?))
    }
}
