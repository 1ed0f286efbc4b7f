use std::{
    fs::File,
    io::{ self, BufRead, BufWriter, Write },
    path::PathBuf,
    process::ExitCode,
    str::FromStr,
};
use anyhow::{ Context, Result };
use clap::Parser;
use tracing::{ error, info };
use tracing_subscriber::EnvFilter;
use numerov1d::{
    density::classical_density,
    grid::Grid,
    output::write_table,
    solve::Method,
};

/// Bound states of the one-dimensional harmonic oscillator via Numerov
/// integration and the shooting method.
///
/// Grid and output parameters are taken from the command line; eigenvalue
/// searches are then read interactively from stdin (prompts go to stderr)
/// until a negative node count ends the session. Each search appends one
/// gnuplot-ready block to the output file.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Half-width of the coordinate grid (typical value: 10)
    #[arg(long, default_value_t = 10.0)]
    xmax: f64,

    /// Number of grid intervals (typically a few hundred)
    #[arg(long, default_value_t = 500)]
    mesh: usize,

    /// Output file receiving the plottable table blocks
    #[arg(long, default_value = "harmonic.dat")]
    outfile: PathBuf,

    /// Skip the inward integration and matching stage (forward-only scheme)
    #[arg(long)]
    forward: bool,
}

// Prompt on stderr and parse one line of stdin; `None` on end of input.
fn read_value<R, T>(stdin: &mut R, msg: &str) -> Result<Option<T>>
where
    R: BufRead,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    eprint!("{msg}");
    let mut line = String::new();
    let n = stdin.read_line(&mut line).context("failed to read stdin")?;
    if n == 0 { return Ok(None); }
    let value = line.trim().parse::<T>()
        .with_context(|| format!("failed to parse input {:?}", line.trim()))?;
    Ok(Some(value))
}

fn run(args: Args) -> Result<()> {
    let grid = Grid::new(args.xmax, args.mesh, |x| 0.5 * x * x)?;
    let out = File::create(&args.outfile)
        .with_context(|| format!("failed to open {}", args.outfile.display()))?;
    let mut out = BufWriter::new(out);

    let stdin = io::stdin();
    let mut stdin = stdin.lock();
    loop {
        let nodes: i64
            = match read_value(&mut stdin, "Number of nodes (-1=exit) ? ")? {
                Some(nodes) => nodes,
                None => break,
            };
        if nodes < 0 { break; }
        let trial: f64
            = match read_value(
                &mut stdin,
                "Trial energy (0=search with bisection) ? ",
            )? {
                Some(trial) => trial,
                None => break,
            };
        let trial = (trial != 0.0).then_some(trial);

        let method
            = if args.forward {
                Method::Forward { trial, epsilon: None, maxiters: None }
            } else {
                Method::Matched { trial, epsilon: None, maxiters: None }
            };
        let sol = grid.solve(nodes as usize, method)?;
        info!(
            e = sol.e, iters = sol.iters, converged = sol.converged,
            "search finished",
        );

        let p = classical_density(grid.get_x(), grid.get_dx(), sol.e, sol.icl);
        write_table(&mut out, &grid, &sol, &p)
            .context("failed to write output table")?;
        out.flush().context("failed to flush output table")?;
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        },
    }
}
