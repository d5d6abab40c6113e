use approx::assert_relative_eq;

use dense_simplex::algorithm::{OptimizationResult, Solve, SolveError};
use dense_simplex::algorithm::settings::Settings;
use dense_simplex::algorithm::two_phase::Phase;
use dense_simplex::algorithm::two_phase::trace::PivotCounter;
use dense_simplex::data::number_types::tolerance::Tolerance;
use dense_simplex::io::to_string;

use crate::textbook::{problem, solve};

#[test]
fn wyndor() {
    match solve("wyndor") {
        OptimizationResult::FiniteOptimum { value, x, certificate } => {
            assert_relative_eq!(value, 36f64);
            assert_relative_eq!(x[..], [2f64, 6f64][..]);
            assert_relative_eq!(certificate[..], [0f64, 1.5f64, 1f64][..]);
        },
        other => panic!("expected an optimum, got {:?}", other),
    }
}

#[test]
fn lower_bound() {
    // Many optimal solutions, only the value is fixed
    match solve("lower_bound") {
        OptimizationResult::FiniteOptimum { value, .. } => assert_relative_eq!(value, 5f64),
        other => panic!("expected an optimum, got {:?}", other),
    }
}

#[test]
fn infeasible() {
    let result = solve("infeasible");
    assert!(matches!(result, OptimizationResult::Infeasible { .. }));
    assert!(to_string(&result).starts_with("inviavel\n"));
}

#[test]
fn unbounded_after_phase_one() {
    match solve("unbounded_after_phase_one") {
        OptimizationResult::Unbounded { x, ray } => {
            assert_relative_eq!(x[..], [3f64, 2f64][..]);
            assert_relative_eq!(ray[..], [1f64, 0f64][..]);
        },
        other => panic!("expected an unbounded result, got {:?}", other),
    }
}

#[test]
fn redundant() {
    // The two constraints together are an equality
    match solve("redundant") {
        OptimizationResult::FiniteOptimum { value, x, .. } => {
            assert_relative_eq!(value, 4f64);
            assert_relative_eq!(x[..], [0f64, 2f64][..]);
        },
        other => panic!("expected an optimum, got {:?}", other),
    }
}

#[test]
fn degenerate_vertex() {
    match solve("degenerate_vertex") {
        OptimizationResult::FiniteOptimum { value, .. } => assert_relative_eq!(value, 1f64),
        other => panic!("expected an optimum, got {:?}", other),
    }
}

#[test]
fn transport() {
    let problem = problem("transport");

    let mut counter = PivotCounter::default();
    let result = problem.solve_with(&Settings::default(), &mut counter).unwrap();
    // Minimizing costs: the slack basis is dual feasible
    assert_eq!(counter.get(Phase::One), 0);
    match result {
        OptimizationResult::FiniteOptimum { value, x, .. } => {
            assert_relative_eq!(value, -20f64);
            assert_relative_eq!(x[..], [2f64, 0f64, 0f64, 4f64][..]);
        },
        other => panic!("expected an optimum, got {:?}", other),
    }
}

#[test]
fn idempotent() {
    for name in ["wyndor", "infeasible", "unbounded_after_phase_one", "transport"] {
        let problem = problem(name);
        assert_eq!(problem.solve(), problem.solve());
    }
}

#[test]
fn iteration_limit() {
    let problem = problem("wyndor");
    let settings = Settings::default().with_iteration_limit(0);

    let result = problem.solve_with(&settings, &mut ());
    assert_eq!(result, Err(SolveError::IterationLimit { phase: Phase::One, limit: 0 }));
}

#[test]
fn loose_epsilon() {
    // Only coarser rounding, the outcome doesn't change
    let problem = problem("wyndor");
    let settings = Settings::default().with_tolerance(Tolerance::new(1e-3).unwrap());

    match problem.solve_with(&settings, &mut ()).unwrap() {
        OptimizationResult::FiniteOptimum { value, .. } => assert_relative_eq!(value, 36f64),
        other => panic!("expected an optimum, got {:?}", other),
    }
}
