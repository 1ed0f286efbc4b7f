//! Plottable-table emission.
//!
//! The emitted table covers the full symmetric domain by mirroring the
//! half-axis solution, with the wavefunction sign on the negative half-axis
//! fixed by the parity of the requested state. Lines starting with `#` and
//! the two blank lines terminating each block follow gnuplot conventions, so
//! successive searches can be appended to one file and plotted block by
//! block.

use std::io::{ self, Write };
use ndarray as nd;
use crate::{ Arr1, grid::Grid, solve::Solution };

/// Write one five-column block — position, wavefunction, quantum density,
/// classical density, potential — for rows running from `-xmax` to `+xmax`,
/// preceded by a comment-marked column header and terminated by two blank
/// lines.
pub fn write_table<W, S>(
    out: &mut W,
    grid: &Grid,
    sol: &Solution,
    p: &Arr1<S>,
) -> io::Result<()>
where
    W: Write,
    S: nd::Data<Elem = f64>,
{
    let x = grid.get_x();
    let V = grid.get_V();
    let y = &sol.wf;
    let mesh = grid.mesh();
    let parity = sol.parity();

    writeln!(out, "#   x       y(x)            y(x)^2       classical p(x)      V")?;
    for k in (1..=mesh).rev() {
        writeln!(
            out,
            "{:7.3}{:16.8e}{:16.8e}{:16.8e}{:12.6}",
            -x[k], parity * y[k], y[k] * y[k], p[k], V[k],
        )?;
    }
    for k in 0..=mesh {
        writeln!(
            out,
            "{:7.3}{:16.8e}{:16.8e}{:16.8e}{:12.6}",
            x[k], y[k], y[k] * y[k], p[k], V[k],
        )?;
    }
    writeln!(out)?;
    writeln!(out)
}
