#![allow(dead_code, non_snake_case)]

//! Computes bound-state eigenvalues and eigenfunctions of the one-dimensional,
//! time-independent Schrödinger equation for even, single-well potentials
//! (specialized in the shipped binary to the harmonic oscillator) using
//! Numerov's integration scheme driven by a shooting search on the energy.
//!
//! The search proceeds in two stages:
//! - Bisection on the energy using the node count of the outward-integrated
//!   solution as the feedback signal;
//! - Once the node count is correct, refinement using the discontinuity in the
//!   first derivative at the classical turning point, where the outward and
//!   inward branches of the solution are matched.
//!
//! A forward-only variant (outward integration across the whole grid, node
//! counting only, no matching) is available as [`solve::Method::Forward`].
//!
//! All quantities are dimensionless: for the harmonic oscillator,
//! x = (mK/ħ²)^(1/4) X and e = E/(ħω).
//!
//! See [`docs`] for theoretical background.
//!
//! ```
//! use numerov1d::{ grid::Grid, solve };
//!
//! let grid = Grid::new(10.0, 500, |x| 0.5 * x * x).unwrap();
//! let sol = solve::solve_matched(&grid, 0, None, 1e-10, 1000).unwrap();
//! assert!((sol.e - 0.5).abs() < 1e-4);
//! ```

pub mod error;
pub mod grid;
pub mod solve;
pub mod density;
pub mod output;
pub mod utils;

pub mod docs;

/// Default bisection bracket-width tolerance.
pub const DEF_EPSILON: f64 = 1e-10;
/// Default shooting iteration budget.
pub const DEF_MAXITERS: usize = 1000;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
