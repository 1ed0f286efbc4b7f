//! Eigenvalue search for the one-dimensional, time-independent Schrödinger
//! equation (TISE) via Numerov integration and the shooting method.
//!
//! The main entry points are [`solve_matched`] (two-sided integration with
//! matching at the classical turning point) and [`solve_forward`]
//! (outward-only integration), both reachable through the [`Method`] selector
//! and the master [`solve`] function.

use std::cmp;
use ndarray as nd;
use tracing::{ info, warn };
use crate::{
    Arr1,
    error::ShootError,
    grid::Grid,
    utils::wf_renormalize_sym,
};

pub type ShootResult<T> = Result<T, ShootError>;

/// A single solution to the TISE, as produced by one eigenvalue search.
///
/// This struct is only returned by a solver function; you probably won't ever
/// instantiate it yourself. `converged = false` marks a search that exhausted
/// its iteration budget before the energy bracket closed below tolerance; the
/// fields then hold the best estimate rather than garbage, and the caller
/// decides whether to use it.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Energy
    pub e: f64,
    /// Wavefunction on the non-negative half-axis.
    ///
    /// Normalized over the symmetric domain for [`Method::Matched`];
    /// unnormalized (divergent tail) for [`Method::Forward`].
    pub wf: nd::Array1<f64>,
    /// Index of the classical turning point on the grid.
    pub icl: usize,
    /// Requested node count; fixes the parity of the solution.
    pub nodes: usize,
    /// Number of shooting passes executed.
    pub iters: usize,
    /// Whether the energy bracket closed below tolerance.
    pub converged: bool,
}

impl Solution {
    /// Compare two `Solution`s by their energy.
    pub fn cmp_energy(&self, other: &Self) -> Option<cmp::Ordering> {
        self.e.partial_cmp(&other.e)
    }

    /// Parity sign of the solution on the negative half-axis: `+1.0` for an
    /// even node count, `-1.0` for odd.
    pub fn parity(&self) -> f64 {
        if self.nodes % 2 == 0 { 1.0 } else { -1.0 }
    }
}

/// Solving method selector and parameters.
///
/// In both variants, `trial = None` requests a bisection search on the
/// energy, while `trial = Some(e)` evaluates the solution at the fixed energy
/// `e` in a single pass with no search.
#[derive(Clone, Debug)]
pub enum Method {
    /// Outward and inward Numerov integration matched at the classical
    /// turning point; bisection driven by node count, then refined by the
    /// derivative discontinuity at the matching point.
    Matched {
        /// Fixed trial energy, or `None` to search.
        trial: Option<f64>,
        /// Bracket-width tolerance (default: `1e-10`).
        epsilon: Option<f64>,
        /// Maximum number of shooting passes (default: `1000`).
        maxiters: Option<usize>,
    },
    /// Outward Numerov integration across the whole grid only; bisection
    /// driven purely by node count. The resulting wavefunction is not
    /// normalized (it diverges at large `x`).
    Forward {
        /// Fixed trial energy, or `None` to search.
        trial: Option<f64>,
        /// Bracket-width tolerance (default: `1e-10`).
        epsilon: Option<f64>,
        /// Maximum number of shooting passes (default: `1000`).
        maxiters: Option<usize>,
    },
}

impl Method {
    /// Return `true` if `self` is `Matched`.
    pub fn is_matched(&self) -> bool { matches!(self, Self::Matched { .. }) }

    /// Return `true` if `self` is `Forward`.
    pub fn is_forward(&self) -> bool { matches!(self, Self::Forward { .. }) }
}

// lower and upper bounds of the potential over the grid; the initial energy
// bracket for every search
fn potential_bounds<S>(V: &Arr1<S>) -> (f64, f64)
where S: nd::Data<Elem = f64>
{
    V.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(lo, hi), &Vk| (lo.min(Vk), hi.max(Vk)),
    )
}

// Build the coefficient array consumed by the Numerov recursion and locate
// the classical turning point.
//
// The scan runs on fk = (dx²/12)·2(V[k] − e), whose sign separates the
// classically allowed (fk < 0) from the forbidden (fk > 0) region; the
// returned index is the last sign change. Exact zeros are nudged to 1e-20 so
// a genuine sign change is never missed to exact cancellation. On success the
// array has already been mapped to the form required by the recursion,
// fk ← 1 − fk.
fn coeff_array<S>(ddx12: f64, V: &Arr1<S>, e: f64)
    -> ShootResult<(nd::Array1<f64>, usize)>
where S: nd::Data<Elem = f64>
{
    let mesh = V.len() - 1;
    let mut f: nd::Array1<f64> = nd::Array1::zeros(mesh + 1);
    f[0] = ddx12 * 2.0 * (V[0] - e);
    let mut icl: Option<usize> = None;
    for k in 1..=mesh {
        f[k] = ddx12 * 2.0 * (V[k] - e);
        if f[k] == 0.0 { f[k] = 1e-20; }
        if f[k].signum() != f[k - 1].signum() { icl = Some(k); }
    }
    match icl {
        Some(icl) if icl >= mesh.saturating_sub(2) => {
            Err(ShootError::TurningPointTooFar { icl, mesh })
        },
        Some(icl) => {
            f.mapv_inplace(|fk| 1.0 - fk);
            Ok((f, icl))
        },
        None => Err(ShootError::NoTurningPoint { e }),
    }
}

// Numerov three-point recursion: given the coefficient values around point k
// and the two solution values behind it, produce the next solution value.
// The inward form follows by swapping the roles of the k−1 and k+1 points.
#[inline]
fn numerov_step(f_prev: f64, f_cur: f64, f_next: f64, y_prev: f64, y_cur: f64)
    -> f64
{
    ((12.0 - 10.0 * f_cur) * y_cur - f_prev * y_prev) / f_next
}

// Integrate outward from the origin up to `stop`, counting sign changes of
// the solution along the way.
//
// The first two values fix the parity: an even solution starts from y[0] = 1
// with y[1] derived from the recursion assuming f[-1] = f[1]; an odd solution
// starts from y[0] = 0, y[1] = dx. The returned count covers the open
// half-axis only (the origin node of an odd solution is not included).
fn integrate_outward<S>(
    dx: f64,
    f: &Arr1<S>,
    even: bool,
    stop: usize,
    y: &mut nd::Array1<f64>,
) -> usize
where S: nd::Data<Elem = f64>
{
    if even {
        y[0] = 1.0;
        y[1] = 0.5 * (12.0 - 10.0 * f[0]) * y[0] / f[1];
    } else {
        y[0] = 0.0;
        y[1] = dx;
    }
    let mut ncross: usize = 0;
    for k in 1..stop {
        y[k + 1] = numerov_step(f[k - 1], f[k], f[k + 1], y[k - 1], y[k]);
        if y[k].signum() != y[k + 1].signum() { ncross += 1; }
    }
    ncross
}

// Integrate inward from the outer grid edge down to the turning point,
// assuming the solution vanishes just outside the grid (y[mesh + 1] = 0).
fn integrate_inward<S>(
    dx: f64,
    f: &Arr1<S>,
    icl: usize,
    y: &mut nd::Array1<f64>,
)
where S: nd::Data<Elem = f64>
{
    let mesh = y.len() - 1;
    y[mesh] = dx;
    y[mesh - 1] = (12.0 - 10.0 * f[mesh]) * y[mesh] / f[mesh - 1];
    for k in (icl + 1..mesh).rev() {
        y[k - 1] = numerov_step(f[k + 1], f[k], f[k - 1], y[k + 1], y[k]);
    }
}

/// Find the bound state with `nodes` nodes by two-sided Numerov integration
/// matched at the classical turning point.
///
/// With `trial = None` the energy is searched by bisection within
/// `[min V, max V]`: node-count mismatches narrow the bracket first, and once
/// the node count is correct the discontinuity in the first derivative at the
/// matching point takes over as the narrowing signal. With `trial = Some(e)`
/// a single outward/inward pass is evaluated at the fixed energy `e`.
///
/// The search stops when the bracket width drops below `epsilon` or after
/// `maxiters` passes; running into the iteration budget is reported through
/// [`Solution::converged`] and a warning on the log stream, not as an error.
/// The returned wavefunction is matched at the turning point and normalized
/// over the symmetric domain `[-xmax, xmax]`.
pub fn solve_matched(
    grid: &Grid,
    nodes: usize,
    trial: Option<f64>,
    epsilon: f64,
    maxiters: usize,
) -> ShootResult<Solution> {
    ShootError::check_epsilon(epsilon)?;
    ShootError::check_maxiters(maxiters)?;

    let dx = grid.get_dx();
    let V = grid.get_V();
    let mesh = grid.mesh();
    let ddx12 = dx.powi(2) / 12.0;
    let even = nodes % 2 == 0;
    let bisect = trial.is_none();

    let (mut elw, mut eup) = potential_bounds(V);
    let (mut e, iterate) = match trial {
        None => (0.5 * (elw + eup), maxiters),
        Some(e0) => (e0, 1),
    };

    let mut y: nd::Array1<f64> = nd::Array1::zeros(mesh + 1);
    let mut icl_last: usize = 0;
    let mut iters: usize = 0;
    for k in 0..iterate {
        if bisect && eup - elw < epsilon { break; }
        iters = k + 1;

        let (f, icl) = coeff_array(ddx12, V, e)?;
        icl_last = icl;
        y.fill(0.0);
        let hcross = integrate_outward(dx, &f, even, icl, &mut y);
        let yicl = y[icl];
        let ncross = if even { 2 * hcross } else { 2 * hcross + 1 };

        if bisect && ncross != nodes {
            // wrong node count: narrow the bracket on that signal alone
            info!(iter = k, e, ncross, "bisection on node count");
            if ncross > nodes { eup = e; } else { elw = e; }
            e = 0.5 * (eup + elw);
            continue;
        }

        // node count correct (or energy fixed): match the inward branch and
        // normalize on [-xmax, xmax]
        integrate_inward(dx, &f, icl, &mut y);
        let scale = yicl / y[icl];
        y.slice_mut(nd::s![icl..]).map_inplace(|yk| { *yk *= scale; });
        wf_renormalize_sym(&mut y, dx);

        if bisect {
            // discontinuity of y' at the matching point; vanishes for an
            // exact eigenfunction
            let djump
                = (y[icl + 1] + y[icl - 1] - (14.0 - 12.0 * f[icl]) * y[icl])
                / dx;
            info!(iter = k, e, nodes, djump, "bisection on derivative jump");
            if djump * y[icl] > 0.0 { eup = e; } else { elw = e; }
            e = 0.5 * (eup + elw);
        } else {
            info!(e, ncross, nodes, "fixed-energy evaluation");
        }
    }
    let converged = !bisect || eup - elw < epsilon;
    if !converged {
        warn!(
            e, width = eup - elw, iters,
            "energy bracket failed to close within the iteration budget",
        );
    }
    Ok(Solution { e, wf: y, icl: icl_last, nodes, iters, converged })
}

/// Find the bound state with `nodes` nodes by outward Numerov integration
/// only, bisecting on the node count alone.
///
/// The crossing count of the outward solution over the half-axis is compared
/// against `nodes / 2`; there is no inward pass and no matching, so the
/// returned wavefunction carries the divergence of the forbidden-region tail
/// and is left unnormalized. Search and termination semantics otherwise match
/// [`solve_matched`].
pub fn solve_forward(
    grid: &Grid,
    nodes: usize,
    trial: Option<f64>,
    epsilon: f64,
    maxiters: usize,
) -> ShootResult<Solution> {
    ShootError::check_epsilon(epsilon)?;
    ShootError::check_maxiters(maxiters)?;

    let dx = grid.get_dx();
    let V = grid.get_V();
    let mesh = grid.mesh();
    let ddx12 = dx.powi(2) / 12.0;
    let even = nodes % 2 == 0;
    let hnodes = nodes / 2;
    let bisect = trial.is_none();

    let (mut elw, mut eup) = potential_bounds(V);
    let (mut e, iterate) = match trial {
        None => (0.5 * (elw + eup), maxiters),
        Some(e0) => (e0, 1),
    };

    let mut y: nd::Array1<f64> = nd::Array1::zeros(mesh + 1);
    let mut icl_last: usize = 0;
    let mut iters: usize = 0;
    for k in 0..iterate {
        if bisect && eup - elw < epsilon { break; }
        iters = k + 1;

        let (f, icl) = coeff_array(ddx12, V, e)?;
        icl_last = icl;
        y.fill(0.0);
        let hcross = integrate_outward(dx, &f, even, mesh, &mut y);
        info!(iter = k, e, ncross = hcross, "forward-only bisection");

        if bisect {
            if hcross > hnodes { eup = e; } else { elw = e; }
            e = 0.5 * (eup + elw);
        }
    }
    let converged = !bisect || eup - elw < epsilon;
    if !converged {
        warn!(
            e, width = eup - elw, iters,
            "energy bracket failed to close within the iteration budget",
        );
    }
    Ok(Solution { e, wf: y, icl: icl_last, nodes, iters, converged })
}

/// Master solving function for all [methods][Method].
pub fn solve(grid: &Grid, nodes: usize, method: Method)
    -> ShootResult<Solution>
{
    match method {
        Method::Matched { trial, epsilon, maxiters } => {
            solve_matched(
                grid,
                nodes,
                trial,
                epsilon.unwrap_or(crate::DEF_EPSILON),
                maxiters.unwrap_or(crate::DEF_MAXITERS),
            )
        },
        Method::Forward { trial, epsilon, maxiters } => {
            solve_forward(
                grid,
                nodes,
                trial,
                epsilon.unwrap_or(crate::DEF_EPSILON),
                maxiters.unwrap_or(crate::DEF_MAXITERS),
            )
        },
    }
}
