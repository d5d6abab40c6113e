//! # Writing results
//!
//! The first line names the outcome, the following lines hold the values that prove it, space
//! separated:
//!
//! ```text
//! otima        ilimitada    inviavel
//! value        x            y
//! x            d
//! y
//! ```
use std::fmt::Display;
use std::io;

use itertools::Itertools;

use crate::algorithm::OptimizationResult;

/// First line for a finite optimum.
pub const OPTIMAL: &str = "otima";
/// First line for an unbounded problem.
pub const UNBOUNDED: &str = "ilimitada";
/// First line for an infeasible problem.
pub const INFEASIBLE: &str = "inviavel";

/// Write a result in the output format.
///
/// # Errors
///
/// Only when writing to `out` fails.
pub fn write<F: Display>(result: &OptimizationResult<F>, out: &mut impl io::Write) -> io::Result<()> {
    out.write_all(to_string(result).as_bytes())
}

/// Render a result in the output format, including the final newline.
pub fn to_string<F: Display>(result: &OptimizationResult<F>) -> String {
    let lines = match result {
        OptimizationResult::FiniteOptimum { value, x, certificate } => vec![
            OPTIMAL.to_string(),
            value.to_string(),
            x.iter().join(" "),
            certificate.iter().join(" "),
        ],
        OptimizationResult::Unbounded { x, ray } => vec![
            UNBOUNDED.to_string(),
            x.iter().join(" "),
            ray.iter().join(" "),
        ],
        OptimizationResult::Infeasible { certificate } => vec![
            INFEASIBLE.to_string(),
            certificate.iter().join(" "),
        ],
    };

    lines.into_iter().map(|line| line + "\n").collect()
}
