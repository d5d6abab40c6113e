use std::io::{stdin, stdout};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use env_logger::Builder;
use log::info;

use dense_simplex::algorithm::Solve;
use dense_simplex::algorithm::settings::{DEFAULT_ITERATION_LIMIT, Settings};
use dense_simplex::algorithm::two_phase::Phase;
use dense_simplex::algorithm::two_phase::trace::{LogTrace, PivotCounter};
use dense_simplex::data::linear_program::Problem;
use dense_simplex::data::number_types::tolerance::{DEFAULT_EPSILON, Tolerance};
use dense_simplex::io;

/// Solve `max c^T x s.t. Ax <= b, x >= 0` with the two phase simplex method.
#[derive(Parser)]
#[command(version, about)]
struct Opts {
    /// File containing the problem description, standard input if absent
    problem_file: Option<PathBuf>,
    /// Values within this distance of zero are considered zero
    #[arg(long, default_value_t = DEFAULT_EPSILON)]
    epsilon: f64,
    /// Maximum number of pivots in a single phase
    #[arg(long, default_value_t = DEFAULT_ITERATION_LIMIT)]
    iteration_limit: usize,
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    Builder::new().filter_level(opts.verbose.log_level_filter()).init();

    let problem: Problem<f64> = match &opts.problem_file {
        Some(path) => io::import(path).with_context(|| format!("Reading problem file {:?}", path))?,
        None => io::read(stdin().lock()).context("Reading problem from standard input")?,
    };
    info!("Read a problem with {} constraints and {} variables", problem.nr_constraints(), problem.nr_variables());

    let tolerance = Tolerance::new(opts.epsilon)
        .ok_or_else(|| anyhow!("Epsilon should be positive and finite, got {}", opts.epsilon))?;
    let settings = Settings::default()
        .with_tolerance(tolerance)
        .with_iteration_limit(opts.iteration_limit);

    let mut counter = PivotCounter::default();
    let result = problem.solve_with(&settings, &mut (LogTrace, &mut counter))
        .context("Solving the problem")?;
    info!(
        "Solved after {} pivots in {} and {} in {}",
        counter.get(Phase::One), Phase::One, counter.get(Phase::Two), Phase::Two,
    );

    io::write(&result, &mut stdout().lock()).context("Writing the result")
}
