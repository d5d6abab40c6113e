//! # Small textbook problems
//!
//! Each problem is stored in the input format, next to this file.
use std::path::{Path, PathBuf};

use dense_simplex::algorithm::{OptimizationResult, Solve};
use dense_simplex::data::linear_program::Problem;
use dense_simplex::data::number_types::tolerance::Tolerance;
use dense_simplex::io::import;

/// # Generation and execution
#[allow(missing_docs)]
mod test;

/// Relative path of the folder where the problem files are stored.
///
/// The path is relative to the project root folder.
fn problem_file_directory() -> PathBuf {
    Path::new(file!()).parent().unwrap().to_path_buf()
}

/// Compute the path of the problem file, based on the problem name.
///
/// # Arguments
///
/// * `name`: Problem name without extension.
///
/// # Return value
///
/// File path relative to the project root folder.
fn get_test_file_path(name: &str) -> PathBuf {
    problem_file_directory().join(name).with_extension("txt")
}

/// Read a problem file.
fn problem(name: &str) -> Problem<f64> {
    import(&get_test_file_path(name)).unwrap()
}

/// Solve a problem file with the default settings and check the certificate of the result.
fn solve(name: &str) -> OptimizationResult<f64> {
    let problem = problem(name);
    let result = problem.solve().unwrap();

    // Reported values are rounded, so the check can't be as strict as the solve
    let tolerance = Tolerance::new(1e-5).unwrap();
    assert!(result.is_certified_for(&problem, &tolerance), "certificate rejected: {:?}", result);

    result
}
