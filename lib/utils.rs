//! Miscellaneous numerical tools.
//!
//! The symmetric-domain sums here exploit the parity of solutions sampled on
//! the non-negative half-axis: every point except the origin stands for two
//! points of the full domain `[-xmax, xmax]`.

use ndarray::{ self as nd, Ix1 };
use num_traits::Float;

/// Integrate using the trapezoidal rule.
///
/// *Panics if `y` has length less than 2*.
pub fn trapz<S, A>(y: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    let n: usize = y.len();
    let two = A::one() + A::one();
    (dx / two) * (
        y[0]
        + two * y.iter().skip(1).take(n - 2).copied().fold(A::zero(), A::add)
        + y[n - 1]
    )
}

/// Integrate a function sampled on the non-negative half-axis over the full
/// symmetric domain, assuming even symmetry.
///
/// Every sample except the origin is doubled; the origin is counted once.
pub fn sym_integral<S, A>(p: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    let two = A::one() + A::one();
    dx * (two * p.iter().copied().fold(A::zero(), A::add) - p[0])
}

/// Calculate the norm of a wavefunction sampled on the non-negative
/// half-axis over the full symmetric domain.
///
/// Valid for either parity, since the square of the wavefunction is even in
/// both cases.
pub fn wf_norm_sym<S, A>(q: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    let two = A::one() + A::one();
    dx * (
        two * q.iter().skip(1).map(|qk| qk.powi(2)).fold(A::zero(), A::add)
        + q[0].powi(2)
    )
}

/// Renormalize a half-axis wavefunction in place so that its squared integral
/// over the full symmetric domain is 1.
pub fn wf_renormalize_sym<S, A>(q: &mut nd::ArrayBase<S, Ix1>, dx: A)
where
    S: nd::DataMut<Elem = A>,
    A: Float,
{
    let norm = wf_norm_sym(q, dx).sqrt();
    q.iter_mut().for_each(|qk| { *qk = *qk / norm; });
}

/// Return a [renormalized][wf_renormalize_sym] copy of a half-axis
/// wavefunction.
pub fn wf_normalized_sym<S, A>(q: &nd::ArrayBase<S, Ix1>, dx: A)
    -> nd::Array1<A>
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    let norm = wf_norm_sym(q, dx).sqrt();
    q.mapv(|qk| qk / norm)
}
