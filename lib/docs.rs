//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Numerov's method](#numerovs-method)
//! - [Shooting and matching](#shooting-and-matching)
//! - [Classical density](#classical-density)
//!
//! # Background
//! Bound states of the one-dimensional time-independent Schrödinger equation
//! (TISE) are solutions of
//! ```text
//! ∂²y
//! --- = -Q(x) y(x),    Q(x) = 2 (E - V(x))
//! ∂x²
//! ```
//! in units where *ħ* = *m* = 1. For an even single-well potential every
//! eigenfunction has definite parity, so it suffices to integrate on the
//! non-negative half-axis and impose either `y(0) = 1, y'(0) = 0` (even
//! states) or `y(0) = 0, y'(0) ≠ 0` (odd states). The *n*-th excited state
//! has exactly *n* nodes, which is what lets a node count steer an energy
//! search.
//!
//! For the harmonic oscillator `V(x) = x²/2` used by the shipped binary, the
//! dimensionless reduction is `x = (mK/ħ²)^(1/4) X`, `e = E/(ħω)`, with exact
//! eigenvalues `e = n + 1/2`.
//!
//! # Numerov's method
//! Assuming a uniform discretization `x[i] = i δx`, Numerov's scheme advances
//! the solution through the three-point relation
//! ```text
//! f[i+1] y[i+1] = (12 - 10 f[i]) y[i] - f[i-1] y[i-1]
//!
//! f[i] = 1 - (δx²/12) Q(x[i])
//! ```
//! with a local error of *O*(*δx*⁶). The same relation solved for `y[i-1]`
//! integrates inward. The sign of `f[i] - 1` tracks the sign of
//! `V(x[i]) - E`: the last index where it changes is the classical turning
//! point separating the allowed region from the forbidden asymptotic region.
//!
//! # Shooting and matching
//! Outward integration from the origin is numerically stable only up to the
//! turning point; past it, the admixture of the exponentially growing
//! solution takes over. Inward integration from the outer edge (started from
//! the decaying assumption `y[mesh+1] = 0`) has the mirror property. The
//! two-sided scheme therefore integrates each branch on its stable side,
//! rescales the inward branch to agree with the outward one at the turning
//! point, and uses two signals to adjust the trial energy:
//!
//! - the node count of the outward branch, which brackets the eigenvalue
//!   between energies with too few and too many nodes;
//! - once the node count is correct, the discontinuity of the first
//!   derivative at the matching point,
//!   ```text
//!   δx·y'(icl⁺) - δx·y'(icl⁻) ≈ y[icl+1] + y[icl-1] - (14 - 12 f[icl]) y[icl]
//!   ```
//!   which vanishes exactly when the matched curve is a genuine
//!   eigenfunction. Its sign relative to `y[icl]` tells whether the trial
//!   energy is too high or too low, so plain bisection converges.
//!
//! The forward-only variant skips the inward branch entirely and bisects on
//! the node count alone; it reproduces the eigenvalues but its wavefunction
//! keeps the divergent forbidden-region tail and cannot be normalized.
//!
//! # Classical density
//! For visual comparison against `y²`, the solvers also report the density of
//! a classical particle oscillating with the same energy. The time spent near
//! a point is inversely proportional to the speed there, giving
//! ```text
//! p(x) = 1 / (π √(x_cl² - x²)),    x_cl = √(2e)
//! ```
//! inside the classically allowed region and zero outside, normalized to unit
//! integral. The quantum density oscillates around this curve and approaches
//! it (in the mean) for large node counts.
