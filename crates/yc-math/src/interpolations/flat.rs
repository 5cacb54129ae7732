//! Piecewise-constant interpolation.
//!
//! Backward-flat takes the value of the node at the right end of each
//! interval, forward-flat the one at the left end.  Both agree with the node
//! ordinates at the node abscissae.

use super::{impl_extrapolator, Interpolation, Interpolator, Nodes};
use yc_core::errors::Result;
use yc_core::Real;

fn cumulative(nodes: &Nodes, value: impl Fn(usize) -> Real) -> Vec<Real> {
    let mut primitive = Vec::with_capacity(nodes.len());
    primitive.push(0.0);
    for (i, h) in nodes.widths().iter().enumerate() {
        primitive.push(primitive[i] + h * value(i));
    }
    primitive
}

/// `y(x) = y[i+1]` on `(x[i], x[i+1]]`.
#[derive(Debug, Clone)]
pub struct BackwardFlatInterpolation {
    nodes: Nodes,
    primitive: Vec<Real>,
}

impl BackwardFlatInterpolation {
    /// Fit to `xs`/`ys`; at least two points are required.
    pub fn new(xs: &[Real], ys: &[Real]) -> Result<Self> {
        let nodes = Nodes::new(xs, ys, 2)?;
        let primitive = cumulative(&nodes, |i| ys[i + 1]);
        Ok(Self { nodes, primitive })
    }
}

impl_extrapolator!(BackwardFlatInterpolation);

impl Interpolation for BackwardFlatInterpolation {
    fn nodes(&self) -> &Nodes {
        &self.nodes
    }

    fn value_at(&self, x: Real) -> Real {
        let ys = self.nodes.ys();
        if x <= self.nodes.xs()[0] {
            return ys[0];
        }
        let i = self.nodes.locate(x);
        if x == self.nodes.xs()[i] {
            ys[i]
        } else {
            ys[i + 1]
        }
    }

    fn primitive_at(&self, x: Real) -> Real {
        let (xs, ys) = (self.nodes.xs(), self.nodes.ys());
        if x <= xs[0] {
            return (x - xs[0]) * ys[0];
        }
        let i = self.nodes.locate(x);
        self.primitive[i] + (x - xs[i]) * ys[i + 1]
    }

    fn derivative_at(&self, _x: Real) -> Real {
        0.0
    }

    fn second_derivative_at(&self, _x: Real) -> Real {
        0.0
    }
}

/// Factory for [`BackwardFlatInterpolation`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BackwardFlat;

impl Interpolator for BackwardFlat {
    fn interpolate(&self, xs: &[Real], ys: &[Real]) -> Result<Box<dyn Interpolation>> {
        Ok(Box::new(BackwardFlatInterpolation::new(xs, ys)?))
    }
}

/// `y(x) = y[i]` on `[x[i], x[i+1])`.
#[derive(Debug, Clone)]
pub struct ForwardFlatInterpolation {
    nodes: Nodes,
    primitive: Vec<Real>,
}

impl ForwardFlatInterpolation {
    /// Fit to `xs`/`ys`; at least two points are required.
    pub fn new(xs: &[Real], ys: &[Real]) -> Result<Self> {
        let nodes = Nodes::new(xs, ys, 2)?;
        let primitive = cumulative(&nodes, |i| ys[i]);
        Ok(Self { nodes, primitive })
    }
}

impl_extrapolator!(ForwardFlatInterpolation);

impl Interpolation for ForwardFlatInterpolation {
    fn nodes(&self) -> &Nodes {
        &self.nodes
    }

    fn value_at(&self, x: Real) -> Real {
        let (xs, ys) = (self.nodes.xs(), self.nodes.ys());
        let n = xs.len();
        if x >= xs[n - 1] {
            return ys[n - 1];
        }
        ys[self.nodes.locate(x)]
    }

    fn primitive_at(&self, x: Real) -> Real {
        let (xs, ys) = (self.nodes.xs(), self.nodes.ys());
        let n = xs.len();
        if x >= xs[n - 1] {
            return self.primitive[n - 1] + (x - xs[n - 1]) * ys[n - 1];
        }
        let i = self.nodes.locate(x);
        self.primitive[i] + (x - xs[i]) * ys[i]
    }

    fn derivative_at(&self, _x: Real) -> Real {
        0.0
    }

    fn second_derivative_at(&self, _x: Real) -> Real {
        0.0
    }
}

/// Factory for [`ForwardFlatInterpolation`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardFlat;

impl Interpolator for ForwardFlat {
    fn interpolate(&self, xs: &[Real], ys: &[Real]) -> Result<Box<dyn Interpolation>> {
        Ok(Box::new(ForwardFlatInterpolation::new(xs, ys)?))
    }
}
