//! Bilinear interpolation on a rectangular grid.

use super::{check_axis, Interpolation2D, Interpolator2D};
use crate::extrapolation::Extrapolator;
use yc_core::errors::Result;
use yc_core::{ensure, Real};

/// Bilinear surface over `xs × ys`.
///
/// `z` is row-major: `z[j * nx + i]` is the value at `(xs[i], ys[j])`.
#[derive(Debug, Clone)]
pub struct BilinearInterpolation {
    xs: Vec<Real>,
    ys: Vec<Real>,
    z: Vec<Real>,
    extrapolate: bool,
}

impl BilinearInterpolation {
    /// Fit to the grid; both axes need two or more strictly increasing
    /// values.
    pub fn new(xs: &[Real], ys: &[Real], z: &[Real]) -> Result<Self> {
        check_axis(xs, 2)?;
        check_axis(ys, 2)?;
        ensure!(
            z.len() == xs.len() * ys.len(),
            "z length ({}) must equal nx*ny ({}*{})",
            z.len(),
            xs.len(),
            ys.len()
        );
        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            z: z.to_vec(),
            extrapolate: false,
        })
    }

    fn z_at(&self, i: usize, j: usize) -> Real {
        self.z[j * self.xs.len() + i]
    }
}

impl Extrapolator for BilinearInterpolation {
    fn allows_extrapolation(&self) -> bool {
        self.extrapolate
    }

    fn set_extrapolation(&mut self, allow: bool) {
        self.extrapolate = allow;
    }
}

impl Interpolation2D for BilinearInterpolation {
    fn x_values(&self) -> &[Real] {
        &self.xs
    }

    fn y_values(&self) -> &[Real] {
        &self.ys
    }

    fn value_at(&self, x: Real, y: Real) -> Real {
        let i = self.locate_x(x);
        let j = self.locate_y(y);

        let t = (x - self.xs[i]) / (self.xs[i + 1] - self.xs[i]);
        let u = (y - self.ys[j]) / (self.ys[j + 1] - self.ys[j]);

        (1.0 - t) * (1.0 - u) * self.z_at(i, j)
            + t * (1.0 - u) * self.z_at(i + 1, j)
            + (1.0 - t) * u * self.z_at(i, j + 1)
            + t * u * self.z_at(i + 1, j + 1)
    }
}

/// Factory for [`BilinearInterpolation`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Bilinear;

impl Interpolator2D for Bilinear {
    fn interpolate(&self, xs: &[Real], ys: &[Real], z: &[Real]) -> Result<Box<dyn Interpolation2D>> {
        Ok(Box::new(BilinearInterpolation::new(xs, ys, z)?))
    }
}
