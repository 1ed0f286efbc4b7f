//! Coordinate grid and potential sampling for the non-negative half-axis.

use ndarray as nd;
use crate::{
    error::GridError,
    solve::{ self, Method, ShootResult, Solution },
};

pub type GridResult<T> = Result<T, GridError>;

/// Uniform coordinate grid on `[0, xmax]` together with samples of an even
/// single-well potential.
///
/// Arrays borrowed from this type are guaranteed to have length `mesh + 1`
/// with `x[0] = 0` and uniform spacing `dx = xmax / mesh`. Both arrays are
/// immutable after construction; every eigenvalue search reads them and owns
/// its own working state.
#[derive(Clone, Debug)]
pub struct Grid {
    // coordinate array
    x: nd::Array1<f64>,
    // coordinate array grid spacing
    dx: f64,
    // potential array
    V: nd::Array1<f64>,
    // number of grid intervals; arrays hold mesh + 1 points
    mesh: usize,
}

impl Grid {
    /// Create a new `Grid` spanning `[0, xmax]` with `mesh + 1` points,
    /// sampling the potential `V` at every point.
    ///
    /// `V` must be even about `x = 0` for the parity-based boundary conditions
    /// of the solvers to hold; this is a precondition on the caller, not
    /// checked numerically.
    pub fn new<F>(xmax: f64, mesh: usize, V: F) -> GridResult<Self>
    where F: FnMut(f64) -> f64
    {
        GridError::check_xmax(xmax)?;
        GridError::check_mesh(mesh)?;
        let dx = xmax / mesh as f64;
        let x: nd::Array1<f64>
            = (0..=mesh).map(|i| i as f64 * dx).collect();
        let V: nd::Array1<f64> = x.mapv(V);
        Ok(Self { x, dx, V, mesh })
    }

    /// Get a reference to the coordinate array.
    pub fn get_x(&self) -> &nd::Array1<f64> { &self.x }

    /// Get a reference to the potential array.
    pub fn get_V(&self) -> &nd::Array1<f64> { &self.V }

    /// Get the coordinate array grid spacing.
    pub fn get_dx(&self) -> f64 { self.dx }

    /// Get the number of grid intervals (one less than the array length).
    pub fn mesh(&self) -> usize { self.mesh }

    /// Get the length of the coordinate and potential arrays.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.mesh + 1 }

    /// Thin interface to [`solve::solve`].
    pub fn solve(&self, nodes: usize, method: Method) -> ShootResult<Solution> {
        solve::solve(self, nodes, method)
    }
}
