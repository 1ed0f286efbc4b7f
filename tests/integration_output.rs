//! Integration tests: plottable-table emission and the classical density.

use approx::{ assert_abs_diff_eq, assert_relative_eq };
use numerov1d::{
    density::classical_density,
    grid::Grid,
    output::write_table,
    solve::{ self, Solution },
    utils,
};

fn solve_oscillator(mesh: usize, nodes: usize) -> (Grid, Solution) {
    let grid = Grid::new(10.0, mesh, |x| 0.5 * x * x).unwrap();
    let sol = solve::solve_matched(&grid, nodes, None, 1e-10, 1000).unwrap();
    (grid, sol)
}

fn render_table(grid: &Grid, sol: &Solution) -> String {
    let p = classical_density(grid.get_x(), grid.get_dx(), sol.e, sol.icl);
    let mut buf: Vec<u8> = Vec::new();
    write_table(&mut buf, grid, sol, &p).unwrap();
    String::from_utf8(buf).unwrap()
}

fn parse_rows(table: &str) -> Vec<Vec<f64>> {
    table.lines()
        .filter(|line| !line.starts_with('#') && !line.trim().is_empty())
        .map(|line| {
            line.split_whitespace()
                .map(|field| field.parse::<f64>().unwrap())
                .collect()
        })
        .collect()
}

#[test]
fn classical_density_integrates_to_one() {
    let (grid, sol) = solve_oscillator(500, 0);
    let p = classical_density(grid.get_x(), grid.get_dx(), sol.e, sol.icl);
    assert_relative_eq!(
        utils::sym_integral(&p, grid.get_dx()), 1.0, epsilon = 1e-12,
    );
}

#[test]
fn classical_density_vanishes_beyond_turning_point() {
    let (grid, sol) = solve_oscillator(500, 2);
    let p = classical_density(grid.get_x(), grid.get_dx(), sol.e, sol.icl);
    assert!(p.iter().take(sol.icl).any(|&pk| pk > 0.0));
    assert!(p.iter().skip(sol.icl).all(|&pk| pk == 0.0));
}

#[test]
fn table_has_header_rows_and_block_terminator() {
    let mesh = 100;
    let (grid, sol) = solve_oscillator(mesh, 0);
    let table = render_table(&grid, &sol);
    assert!(table.starts_with('#'), "header line must be a gnuplot comment");
    assert!(table.ends_with("\n\n\n"), "block ends with two blank lines");
    let rows = parse_rows(&table);
    assert_eq!(rows.len(), 2 * mesh + 1, "rows span -xmax..=xmax");
    assert!(rows.iter().all(|row| row.len() == 5), "five columns per row");
}

#[test]
fn table_rows_run_from_negative_to_positive_xmax() {
    let (grid, sol) = solve_oscillator(100, 0);
    let rows = parse_rows(&render_table(&grid, &sol));
    assert_abs_diff_eq!(rows.first().unwrap()[0], -10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(rows.last().unwrap()[0], 10.0, epsilon = 1e-9);
    for pair in rows.windows(2) {
        assert!(pair[0][0] < pair[1][0], "positions strictly increasing");
    }
}

#[test]
fn even_state_mirrors_symmetrically() {
    let (grid, sol) = solve_oscillator(100, 0);
    let rows = parse_rows(&render_table(&grid, &sol));
    let n = rows.len();
    for k in 0..n / 2 {
        let (neg, pos) = (&rows[k], &rows[n - 1 - k]);
        assert_abs_diff_eq!(neg[0], -pos[0], epsilon = 1e-9);
        assert_abs_diff_eq!(neg[1], pos[1], epsilon = 1e-12);
        assert_abs_diff_eq!(neg[4], pos[4], epsilon = 1e-9);
    }
}

#[test]
fn odd_state_mirrors_antisymmetrically() {
    let (grid, sol) = solve_oscillator(100, 1);
    let rows = parse_rows(&render_table(&grid, &sol));
    let n = rows.len();
    for k in 0..n / 2 {
        let (neg, pos) = (&rows[k], &rows[n - 1 - k]);
        assert_abs_diff_eq!(neg[1], -pos[1], epsilon = 1e-12);
        // the squared column stays even either way
        assert_abs_diff_eq!(neg[2], pos[2], epsilon = 1e-12);
    }
}

#[test]
fn sym_norm_agrees_with_trapezoid_on_the_mirrored_domain() {
    let (grid, sol) = solve_oscillator(500, 3);
    let dx = grid.get_dx();
    // mirror |y|² onto the full domain and integrate it the pedestrian way
    let y2: Vec<f64>
        = sol.wf.iter().skip(1).rev()
        .chain(sol.wf.iter())
        .map(|yk| yk * yk)
        .collect();
    let y2 = ndarray::Array1::from_vec(y2);
    assert_relative_eq!(
        utils::trapz(&y2, dx),
        utils::wf_norm_sym(&sol.wf, dx),
        epsilon = 1e-8,
    );
}
