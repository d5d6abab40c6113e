//! A degenerate problem on which the textbook pivot rule cycles.
//!
//! From Chvátal, Linear Programming (1983), after Beale: `max 0.75 x0 - 20 x1 + 0.5 x2 - 6 x3`
//! subject to
//!
//! ```text
//! 0.25 x0 -  8 x1 -     x2 + 9 x3 <= 0
//!  0.5 x0 - 12 x1 - 0.5 x2 + 3 x3 <= 0
//!                       x2        <= 1
//! ```
//!
//! It cycles under the largest coefficient rule.
use crate::algorithm::{OptimizationResult, Solve};
use crate::algorithm::settings::Settings;
use crate::algorithm::two_phase::Phase;
use crate::algorithm::two_phase::trace::PivotCounter;
use crate::data::linear_program::Problem;
use crate::io::{parse, to_string};

type T = f64;

#[test]
fn terminates() {
    let problem = parse::<T>(PROBLEM_LITERAL_STRING).unwrap();
    assert_eq!(problem, self::problem());

    let mut counter = PivotCounter::default();
    let result = problem.solve_with(&Settings::default(), &mut counter).unwrap();
    assert_eq!(result, OptimizationResult::FiniteOptimum {
        value: 1.25f64,
        x: vec![1f64, 0f64, 1f64, 0f64],
        certificate: vec![0f64, 1.5f64, 1.25f64],
    });
    assert_eq!(to_string(&result), output());
    assert!(counter.get(Phase::One) + counter.get(Phase::Two) < 20);
}

#[test]
fn idempotent() {
    let problem = problem();
    assert_eq!(problem.solve(), problem.solve());
}

const PROBLEM_LITERAL_STRING: &str = "3 4
0.75 -20 0.5 -6
0.25 -8 -1 9 0
0.5 -12 -0.5 3 0
0 0 1 0 1
";

/// Build the expected `Problem` instance, corresponding to the problem file string.
pub fn problem() -> Problem<T> {
    Problem::new(
        3, 4,
        vec![
            vec![0.25f64, -8f64, -1f64, 9f64],
            vec![0.5f64, -12f64, -0.5f64, 3f64],
            vec![0f64, 0f64, 1f64, 0f64],
        ],
        vec![0f64, 0f64, 1f64],
        vec![0.75f64, -20f64, 0.5f64, -6f64],
    ).unwrap()
}

/// The expected output.
pub fn output() -> &'static str {
    "otima\n1.25\n1 0 1 0\n0 1.5 1.25\n"
}
