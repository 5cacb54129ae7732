//! Natural cubic spline.
//!
//! Second derivatives `M` at the nodes solve the tridiagonal system
//!
//! ```text
//! h[i-1] M[i-1] + 2 (h[i-1] + h[i]) M[i] + h[i] M[i+1] = 6 (s[i] - s[i-1])
//! ```
//!
//! with `M[0] = M[n-1] = 0`, where `h` are the interval widths and `s` the
//! secant slopes.  Each segment is then stored as
//! `y[i] + dx (a + dx (b + dx c))`.  Queries beyond the end nodes use the
//! end segments' polynomials.

use super::{impl_extrapolator, Interpolation, Interpolator, Nodes};
use yc_core::errors::Result;
use yc_core::Real;

/// Natural cubic spline through a node set.
#[derive(Debug, Clone)]
pub struct CubicNaturalSpline {
    nodes: Nodes,
    a: Vec<Real>,
    b: Vec<Real>,
    c: Vec<Real>,
    primitive: Vec<Real>,
}

impl CubicNaturalSpline {
    /// Fit to `xs`/`ys`; at least two points are required.
    pub fn new(xs: &[Real], ys: &[Real]) -> Result<Self> {
        let nodes = Nodes::new(xs, ys, 2)?;
        let h = nodes.widths();
        let s: Vec<Real> = h
            .iter()
            .zip(ys.windows(2))
            .map(|(h, y)| (y[1] - y[0]) / h)
            .collect();
        let m = second_derivatives(&h, &s);

        let n = xs.len();
        let mut a = Vec::with_capacity(n - 1);
        let mut b = Vec::with_capacity(n - 1);
        let mut c = Vec::with_capacity(n - 1);
        let mut primitive = Vec::with_capacity(n);
        primitive.push(0.0);
        for i in 0..n - 1 {
            a.push(s[i] - h[i] * (2.0 * m[i] + m[i + 1]) / 6.0);
            b.push(0.5 * m[i]);
            c.push((m[i + 1] - m[i]) / (6.0 * h[i]));
            let hi = h[i];
            primitive.push(
                primitive[i]
                    + hi * (ys[i] + hi * (a[i] / 2.0 + hi * (b[i] / 3.0 + hi * c[i] / 4.0))),
            );
        }
        Ok(Self {
            nodes,
            a,
            b,
            c,
            primitive,
        })
    }
}

/// Solve for the node second derivatives with the Thomas algorithm.
fn second_derivatives(h: &[Real], s: &[Real]) -> Vec<Real> {
    let n = h.len() + 1;
    let mut m = vec![0.0; n];
    if n < 3 {
        return m;
    }
    let k = n - 2;
    let mut diag = vec![0.0; k];
    let mut rhs = vec![0.0; k];
    for j in 0..k {
        diag[j] = 2.0 * (h[j] + h[j + 1]);
        rhs[j] = 6.0 * (s[j + 1] - s[j]);
    }
    // forward sweep; sub- and super-diagonal of row j are h[j] and h[j+1]
    for j in 1..k {
        let w = h[j] / diag[j - 1];
        diag[j] -= w * h[j];
        rhs[j] -= w * rhs[j - 1];
    }
    m[k] = rhs[k - 1] / diag[k - 1];
    for j in (0..k - 1).rev() {
        m[j + 1] = (rhs[j] - h[j + 1] * m[j + 2]) / diag[j];
    }
    m
}

impl_extrapolator!(CubicNaturalSpline);

impl Interpolation for CubicNaturalSpline {
    fn nodes(&self) -> &Nodes {
        &self.nodes
    }

    fn value_at(&self, x: Real) -> Real {
        let i = self.nodes.locate(x);
        if let Some(y) = self.nodes.node_value(i, x) {
            return y;
        }
        let dx = x - self.nodes.xs()[i];
        self.nodes.ys()[i] + dx * (self.a[i] + dx * (self.b[i] + dx * self.c[i]))
    }

    fn primitive_at(&self, x: Real) -> Real {
        let i = self.nodes.locate(x);
        let dx = x - self.nodes.xs()[i];
        self.primitive[i]
            + dx * (self.nodes.ys()[i]
                + dx * (self.a[i] / 2.0 + dx * (self.b[i] / 3.0 + dx * self.c[i] / 4.0)))
    }

    fn derivative_at(&self, x: Real) -> Real {
        let i = self.nodes.locate(x);
        let dx = x - self.nodes.xs()[i];
        self.a[i] + dx * (2.0 * self.b[i] + 3.0 * dx * self.c[i])
    }

    fn second_derivative_at(&self, x: Real) -> Real {
        let i = self.nodes.locate(x);
        let dx = x - self.nodes.xs()[i];
        2.0 * self.b[i] + 6.0 * dx * self.c[i]
    }
}

/// Factory for [`CubicNaturalSpline`].  Global: moving one node moves the
/// whole curve.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cubic;

impl Interpolator for Cubic {
    fn interpolate(&self, xs: &[Real], ys: &[Real]) -> Result<Box<dyn Interpolation>> {
        Ok(Box::new(CubicNaturalSpline::new(xs, ys)?))
    }

    fn is_global(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn three_point_spline() {
        // M[1] = -3, so the first segment is 1.5 dx - 0.5 dx^3
        let cs = CubicNaturalSpline::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0]).unwrap();
        assert_abs_diff_eq!(cs.evaluate(0.5, false).unwrap(), 0.6875, epsilon = 1e-15);
        assert_abs_diff_eq!(cs.evaluate(1.5, false).unwrap(), 0.6875, epsilon = 1e-15);
        assert_abs_diff_eq!(cs.derivative(1.0, false).unwrap(), 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(cs.second_derivative(1.0, false).unwrap(), -3.0, epsilon = 1e-14);
        assert_abs_diff_eq!(cs.primitive(1.0, false).unwrap(), 0.625, epsilon = 1e-15);
    }

    #[test]
    fn natural_end_conditions() {
        let xs = [0.0, 0.5, 1.5, 2.0, 4.0];
        let ys = [1.0, 0.2, -0.7, 0.4, 2.0];
        let cs = CubicNaturalSpline::new(&xs, &ys).unwrap();
        assert_abs_diff_eq!(cs.second_derivative(0.0, false).unwrap(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(cs.second_derivative(4.0, false).unwrap(), 0.0, epsilon = 1e-12);
        for (x, y) in xs.iter().zip(ys) {
            assert_eq!(cs.evaluate(*x, false).unwrap(), y);
        }
    }

    #[test]
    fn continuity_at_interior_nodes() {
        let xs = [0.0, 0.5, 1.5, 2.0, 4.0];
        let ys = [1.0, 0.2, -0.7, 0.4, 2.0];
        let cs = CubicNaturalSpline::new(&xs, &ys).unwrap();
        let eps = 1e-9;
        for &x in &xs[1..4] {
            let left = cs.derivative(x - eps, false).unwrap();
            let right = cs.derivative(x + eps, false).unwrap();
            assert_abs_diff_eq!(left, right, epsilon = 1e-6);
            let left = cs.second_derivative(x - eps, false).unwrap();
            let right = cs.second_derivative(x + eps, false).unwrap();
            assert_abs_diff_eq!(left, right, epsilon = 1e-6);
        }
    }

    #[test]
    fn reproduces_straight_lines() {
        let xs = [0.0, 1.0, 2.5, 3.0];
        let ys: Vec<Real> = xs.iter().map(|x| 2.0 * x - 1.0).collect();
        let cs = CubicNaturalSpline::new(&xs, &ys).unwrap();
        assert_abs_diff_eq!(cs.evaluate(1.7, false).unwrap(), 2.4, epsilon = 1e-14);
        assert_abs_diff_eq!(cs.derivative(0.3, false).unwrap(), 2.0, epsilon = 1e-14);
    }

    #[test]
    fn factory_is_global() {
        assert!(Cubic.is_global());
        assert!(Cubic.interpolate(&[0.0], &[1.0]).is_err());
    }
}
