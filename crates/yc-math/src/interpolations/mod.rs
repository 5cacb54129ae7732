//! 1D and 2D interpolation.
//!
//! Two roles are kept apart:
//!
//! * an [`Interpolation`] is a function fitted to a fixed node set; it
//!   evaluates the value, primitive and first two derivatives with range
//!   checking against its extrapolation flag;
//! * an [`Interpolator`] is the strategy that builds interpolations from
//!   node arrays and tells curve builders whether the scheme is *global*
//!   (every value depends on every node, e.g. splines) or *local*.
//!
//! All 1D schemes return node ordinates exactly when evaluated at a node
//! abscissa.

mod bilinear;
mod cubic;
mod flat;
mod linear;

pub use bilinear::{Bilinear, BilinearInterpolation};
pub use cubic::{Cubic, CubicNaturalSpline};
pub use flat::{BackwardFlat, BackwardFlatInterpolation, ForwardFlat, ForwardFlatInterpolation};
pub use linear::{Linear, LinearInterpolation, LogLinear, LogLinearInterpolation};

use crate::comparison::close;
use crate::extrapolation::Extrapolator;
use yc_core::errors::{Error, Result};
use yc_core::{ensure, Real};

/// Index `i` of the interval `[xs[i], xs[i+1])` containing `x`.
///
/// Clamped: `x <= xs[0]` gives `0`; `x >= xs[n-1]` gives `n-2`.  `xs` must
/// hold at least two strictly increasing values.
pub fn locate(xs: &[Real], x: Real) -> usize {
    let n = xs.len();
    if x < xs[0] {
        0
    } else if x > xs[n - 1] {
        n - 2
    } else {
        xs[..n - 1].partition_point(|&v| v <= x).saturating_sub(1)
    }
}

/// Check that `xs` holds at least `required` finite, strictly increasing
/// values.
pub(crate) fn check_axis(xs: &[Real], required: usize) -> Result<()> {
    ensure!(
        xs.len() >= required,
        "not enough points to interpolate: at least {required} required, {} provided",
        xs.len()
    );
    ensure!(
        xs.iter().all(|x| x.is_finite()),
        "non-finite x value in {xs:?}"
    );
    if let Some(i) = xs.windows(2).position(|w| w[1] <= w[0]) {
        return Err(Error::Configuration(format!(
            "x values must be strictly increasing: x[{i}] = {}, x[{}] = {}",
            xs[i],
            i + 1,
            xs[i + 1]
        )));
    }
    Ok(())
}

/// Validated node arrays plus the extrapolation flag, embedded by every 1D
/// interpolation.
#[derive(Debug, Clone)]
pub struct Nodes {
    xs: Vec<Real>,
    ys: Vec<Real>,
    extrapolate: bool,
}

impl Nodes {
    /// Copy and validate `xs`/`ys`: equal lengths, at least `required`
    /// points, finite strictly increasing abscissae.
    pub fn new(xs: &[Real], ys: &[Real], required: usize) -> Result<Self> {
        ensure!(
            xs.len() == ys.len(),
            "x and y arrays have different sizes ({} vs {})",
            xs.len(),
            ys.len()
        );
        check_axis(xs, required)?;
        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            extrapolate: false,
        })
    }

    /// The abscissae.
    pub fn xs(&self) -> &[Real] {
        &self.xs
    }

    /// The ordinates.
    pub fn ys(&self) -> &[Real] {
        &self.ys
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Always `false`: construction requires at least one node.
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Interval index of `x`, see [`locate`].
    pub fn locate(&self, x: Real) -> usize {
        locate(&self.xs, x)
    }

    /// Node ordinate if `x` hits the end points of interval `i` exactly.
    pub fn node_value(&self, i: usize, x: Real) -> Option<Real> {
        if x == self.xs[i] {
            Some(self.ys[i])
        } else if x == self.xs[i + 1] {
            Some(self.ys[i + 1])
        } else {
            None
        }
    }

    /// Width of each interval.
    pub(crate) fn widths(&self) -> Vec<Real> {
        self.xs.windows(2).map(|w| w[1] - w[0]).collect()
    }
}

macro_rules! impl_extrapolator {
    ($ty:ty) => {
        impl $crate::extrapolation::Extrapolator for $ty {
            fn allows_extrapolation(&self) -> bool {
                self.nodes.extrapolate
            }

            fn set_extrapolation(&mut self, allow: bool) {
                self.nodes.extrapolate = allow;
            }
        }
    };
}
pub(crate) use impl_extrapolator;

/// A 1D function fitted to a fixed set of nodes.
///
/// Implementors supply the node data and the unchecked `*_at` hooks; the
/// provided methods add the range contract: a query outside
/// `[x_min, x_max]` fails with [`Error::Range`] unless extrapolation is
/// requested for the call or enabled on the object.
pub trait Interpolation: Extrapolator + std::fmt::Debug {
    /// The node data.
    fn nodes(&self) -> &Nodes;

    /// Value at `x`, no range check.
    fn value_at(&self, x: Real) -> Real;

    /// Integral from `x_min` to `x`, no range check.
    fn primitive_at(&self, x: Real) -> Real;

    /// First derivative at `x`, no range check.
    fn derivative_at(&self, x: Real) -> Real;

    /// Second derivative at `x`, no range check.
    fn second_derivative_at(&self, x: Real) -> Real;

    /// The node abscissae.
    fn x_values(&self) -> &[Real] {
        self.nodes().xs()
    }

    /// The node ordinates.
    fn y_values(&self) -> &[Real] {
        self.nodes().ys()
    }

    /// Lower bound of the domain.
    fn x_min(&self) -> Real {
        self.nodes().xs()[0]
    }

    /// Upper bound of the domain.
    fn x_max(&self) -> Real {
        let xs = self.nodes().xs();
        xs[xs.len() - 1]
    }

    /// `true` if `x` lies in the domain; end points match with tolerance.
    fn is_in_range(&self, x: Real) -> bool {
        let (x1, x2) = (self.x_min(), self.x_max());
        (x >= x1 && x <= x2) || close(x, x1) || close(x, x2)
    }

    /// Interval index of `x`, see [`locate`].
    fn locate(&self, x: Real) -> usize {
        self.nodes().locate(x)
    }

    /// Fail with [`Error::Range`] unless `x` may be evaluated.
    fn check_range(&self, x: Real, extrapolate: bool) -> Result<()> {
        if extrapolate || self.allows_extrapolation() || self.is_in_range(x) {
            Ok(())
        } else {
            Err(Error::Range(format!(
                "interpolation range is [{}, {}]: extrapolation at {x} not allowed",
                self.x_min(),
                self.x_max()
            )))
        }
    }

    /// Interpolated value at `x`.
    fn evaluate(&self, x: Real, extrapolate: bool) -> Result<Real> {
        self.check_range(x, extrapolate)?;
        Ok(self.value_at(x))
    }

    /// Integral of the interpolation from `x_min` to `x`.
    fn primitive(&self, x: Real, extrapolate: bool) -> Result<Real> {
        self.check_range(x, extrapolate)?;
        Ok(self.primitive_at(x))
    }

    /// First derivative at `x`.
    fn derivative(&self, x: Real, extrapolate: bool) -> Result<Real> {
        self.check_range(x, extrapolate)?;
        Ok(self.derivative_at(x))
    }

    /// Second derivative at `x`.
    fn second_derivative(&self, x: Real, extrapolate: bool) -> Result<Real> {
        self.check_range(x, extrapolate)?;
        Ok(self.second_derivative_at(x))
    }
}

/// Strategy building [`Interpolation`]s from node arrays.
pub trait Interpolator: std::fmt::Debug + Send + Sync {
    /// Fit an interpolation to `xs`/`ys`.
    fn interpolate(&self, xs: &[Real], ys: &[Real]) -> Result<Box<dyn Interpolation>>;

    /// `true` if every value depends on every node.
    fn is_global(&self) -> bool {
        false
    }

    /// Minimum number of nodes accepted by [`interpolate`](Self::interpolate).
    fn required_points(&self) -> usize {
        2
    }
}

/// A 2D function fitted to a rectangular grid.
pub trait Interpolation2D: Extrapolator + std::fmt::Debug {
    /// Grid abscissae.
    fn x_values(&self) -> &[Real];

    /// Grid ordinates.
    fn y_values(&self) -> &[Real];

    /// Value at `(x, y)`, no range check.
    fn value_at(&self, x: Real, y: Real) -> Real;

    /// Lower bound of the x domain.
    fn x_min(&self) -> Real {
        self.x_values()[0]
    }

    /// Upper bound of the x domain.
    fn x_max(&self) -> Real {
        let xs = self.x_values();
        xs[xs.len() - 1]
    }

    /// Lower bound of the y domain.
    fn y_min(&self) -> Real {
        self.y_values()[0]
    }

    /// Upper bound of the y domain.
    fn y_max(&self) -> Real {
        let ys = self.y_values();
        ys[ys.len() - 1]
    }

    /// `true` if `(x, y)` lies in the grid; edges match with tolerance.
    fn is_in_range(&self, x: Real, y: Real) -> bool {
        let in_x = (x >= self.x_min() && x <= self.x_max())
            || close(x, self.x_min())
            || close(x, self.x_max());
        let in_y = (y >= self.y_min() && y <= self.y_max())
            || close(y, self.y_min())
            || close(y, self.y_max());
        in_x && in_y
    }

    /// Column interval containing `x`.
    fn locate_x(&self, x: Real) -> usize {
        locate(self.x_values(), x)
    }

    /// Row interval containing `y`.
    fn locate_y(&self, y: Real) -> usize {
        locate(self.y_values(), y)
    }

    /// Interpolated value at `(x, y)`.
    fn evaluate(&self, x: Real, y: Real, extrapolate: bool) -> Result<Real> {
        if !(extrapolate || self.allows_extrapolation() || self.is_in_range(x, y)) {
            return Err(Error::Range(format!(
                "interpolation range is [{}, {}] x [{}, {}]: extrapolation at ({x}, {y}) not allowed",
                self.x_min(),
                self.x_max(),
                self.y_min(),
                self.y_max()
            )));
        }
        Ok(self.value_at(x, y))
    }
}

/// Strategy building [`Interpolation2D`]s from a grid.
pub trait Interpolator2D: std::fmt::Debug + Send + Sync {
    /// Fit a surface to `xs × ys`; `z` is row-major, `z[j * xs.len() + i]`
    /// being the value at `(xs[i], ys[j])`.
    fn interpolate(&self, xs: &[Real], ys: &[Real], z: &[Real]) -> Result<Box<dyn Interpolation2D>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locate_clamps_and_searches() {
        let xs = [0.0, 1.0, 2.0, 4.0];
        assert_eq!(locate(&xs, -1.0), 0);
        assert_eq!(locate(&xs, 0.0), 0);
        assert_eq!(locate(&xs, 0.5), 0);
        assert_eq!(locate(&xs, 1.0), 1);
        assert_eq!(locate(&xs, 3.9), 2);
        assert_eq!(locate(&xs, 4.0), 2);
        assert_eq!(locate(&xs, 10.0), 2);
        assert_eq!(locate(&xs, f64::NAN), 0);
    }

    #[test]
    fn nodes_validation() {
        assert!(Nodes::new(&[0.0, 1.0], &[1.0], 2).unwrap_err().is_configuration());
        assert!(Nodes::new(&[0.0], &[1.0], 2).is_err());
        assert!(Nodes::new(&[0.0, 1.0, 1.0], &[1.0, 2.0, 3.0], 2).is_err());
        assert!(Nodes::new(&[0.0, f64::NAN], &[1.0, 2.0], 2).is_err());
        assert_eq!(Nodes::new(&[0.0, 1.0], &[1.0, 2.0], 2).unwrap().len(), 2);
    }
}
