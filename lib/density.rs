//! Classical (WKB-limit) probability density for a particle of fixed energy,
//! reported alongside the quantum density `y²` for comparison.

use std::f64::consts::PI;
use ndarray as nd;
use crate::{ Arr1, utils::sym_integral };

/// Compute the classical probability density at energy `e` on the half-axis
/// grid `x`, normalized so that its integral over the full symmetric domain
/// is 1.
///
/// The density of a classical oscillating particle is inversely proportional
/// to its speed, `p(x) ∝ 1/√(x_cl² − x²)` with the turning radius
/// `x_cl = √(2e)`; it vanishes in the classically forbidden region. Samples
/// at or beyond the turning-point index `icl` are set to zero.
pub fn classical_density<S>(x: &Arr1<S>, dx: f64, e: f64, icl: usize)
    -> nd::Array1<f64>
where S: nd::Data<Elem = f64>
{
    let xmcl = (2.0 * e).sqrt();
    let mut p: nd::Array1<f64> = nd::Array1::zeros(x.len());
    for (pk, &xk) in p.iter_mut().zip(x).take(icl) {
        let arg = xmcl.powi(2) - xk.powi(2);
        if arg > 0.0 { *pk = 1.0 / arg.sqrt() / PI; }
    }
    let norm = sym_integral(&p, dx);
    p.mapv_inplace(|pk| pk / norm);
    p
}
