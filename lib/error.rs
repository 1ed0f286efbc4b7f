//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use thiserror::Error;

/// Returned when grid construction parameters are rejected before any
/// allocation takes place.
#[derive(Debug, Error)]
pub enum GridError {
    /// Returned when the grid half-width is not strictly positive.
    #[error("grid half-width must be greater than 0; got {0}")]
    BadXmax(f64),

    /// Returned when the number of grid intervals is zero.
    #[error("mesh must be at least 1; got {0}")]
    BadMesh(usize),
}

impl GridError {
    pub(crate) fn check_xmax(xmax: f64) -> Result<(), Self> {
        (xmax > 0.0).then_some(()).ok_or(Self::BadXmax(xmax))
    }

    pub(crate) fn check_mesh(mesh: usize) -> Result<(), Self> {
        (mesh >= 1).then_some(()).ok_or(Self::BadMesh(mesh))
    }
}

/// Returned from shooting-method solver functions.
///
/// The structural variants ([`NoTurningPoint`][Self::NoTurningPoint] and
/// [`TurningPointTooFar`][Self::TurningPointTooFar]) are unrecoverable within
/// a session: the search strategy has no fallback when the trial energy admits
/// no classically allowed region, or when the forbidden region leaves no
/// runway for the inward integration. Callers are expected to rebuild the
/// session with a wider or finer grid instead of retrying.
#[derive(Debug, Error)]
pub enum ShootError {
    /// Returned when a non-positive `epsilon` value is encountered.
    #[error("epsilon values must be greater than 0; got {0}")]
    BadEpsilon(f64),

    /// Returned when a non-positive `maxiters` value is encountered.
    #[error("maxiters must be greater than 0; got {0}")]
    BadMaxiters(usize),

    /// Returned when the trial energy lies below the potential everywhere on
    /// the grid, so the coefficient array never changes sign.
    #[error("no classical turning point: trial energy {e} lies below the potential everywhere on the grid")]
    NoTurningPoint { e: f64 },

    /// Returned when the last sign change of the coefficient array falls
    /// within two points of the outer grid edge, leaving no forbidden region
    /// to start the inward integration from; increase `xmax` or `mesh`.
    #[error("classical turning point at index {icl} is too close to the grid edge (mesh = {mesh}); increase xmax or mesh")]
    TurningPointTooFar { icl: usize, mesh: usize },
}

impl ShootError {
    pub(crate) fn check_epsilon(epsilon: f64) -> Result<(), Self> {
        (epsilon > 0.0).then_some(()).ok_or(Self::BadEpsilon(epsilon))
    }

    pub(crate) fn check_maxiters(maxiters: usize) -> Result<(), Self> {
        (maxiters != 0).then_some(()).ok_or(Self::BadMaxiters(maxiters))
    }
}
