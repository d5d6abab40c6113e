//! # The Simplex algorithm
//!
//! This module contains all data structures and logic specific to the two phase simplex
//! algorithm on a dense tableau. The first phase finds a basic feasible solution by maximizing
//! minus the sum of artificial variables, or proves that there is none. The second phase starts
//! from that basis and optimizes the real objective.
//!
//! When the right-hand side has negative values but no variable would improve the objective, the
//! slack basis is dual feasible. In that case the first phase is skipped and the dual pivot rule
//! restores feasibility.
use std::fmt;

use enum_map::Enum;
use log::debug;

use crate::algorithm::{OptimizationResult, Solve, SolveError};
use crate::algorithm::settings::Settings;
use crate::algorithm::two_phase::phase_one::FeasibilityResult;
use crate::algorithm::two_phase::strategy::pivot_rule::{Bland, PivotRule};
use crate::algorithm::two_phase::tableau::Tableau;
use crate::algorithm::two_phase::trace::Trace;
use crate::data::linear_program::Problem;
use crate::data::number_types::tolerance::Tolerance;
use crate::data::number_types::traits::Scalar;

pub mod certificate;
pub mod extract;
pub mod phase_one;
pub mod phase_two;
pub(crate) mod simplex;
pub mod strategy;
pub mod tableau;
pub mod trace;

/// The two phases of the algorithm.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Enum)]
pub enum Phase {
    /// Finding a basic feasible solution using artificial variables.
    One,
    /// Optimizing the objective function.
    Two,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Phase::One => f.write_str("phase one"),
            Phase::Two => f.write_str("phase two"),
        }
    }
}

impl<F: Scalar> Solve<F> for Problem<F> {
    fn solve(&self) -> Result<OptimizationResult<F>, SolveError> {
        self.solve_with(&Settings::default(), &mut ())
    }

    fn solve_with<T: Trace<F>>(
        &self,
        settings: &Settings<F>,
        trace: &mut T,
    ) -> Result<OptimizationResult<F>, SolveError> {
        // TODO(ENHANCEMENT): Consider a rule that is faster than Bland's on non degenerate problems
        type PivotRule = Bland;

        solve::<_, PivotRule, _>(self, settings, trace)
    }
}

/// Solve a linear program with the two phase method.
///
/// # Arguments
///
/// * `problem`: Validated problem data.
/// * `settings`: Tolerance and iteration limit.
/// * `trace`: Observer that is called after every pivot.
///
/// # Return value
///
/// One of the three possible outcomes together with its certificate.
///
/// # Errors
///
/// When the iteration limit is reached in either phase, or when rounding errors made the tableau
/// inconsistent.
pub fn solve<F, PR, T>(
    problem: &Problem<F>,
    settings: &Settings<F>,
    trace: &mut T,
) -> Result<OptimizationResult<F>, SolveError>
where
    F: Scalar,
    PR: PivotRule<F>,
    T: Trace<F>,
{
    let tolerance = &settings.tolerance;

    let mut tableau = if starts_dual_feasible(problem, tolerance) {
        debug!("Slack basis is dual feasible, skipping {}", Phase::One);
        Tableau::with_slack_basis(problem)
    } else {
        debug!("Starting {} with {} constraints and {} variables", Phase::One, problem.nr_constraints(), problem.nr_variables());
        match phase_one::primal::<_, PR, _>(problem, settings, trace)? {
            FeasibilityResult::Feasible(artificial) => Tableau::from_artificial(&artificial, problem, tolerance),
            FeasibilityResult::Infeasible { certificate } => {
                debug!("Problem is infeasible according to {}", Phase::One);
                return Ok(OptimizationResult::Infeasible { certificate });
            },
        }
    };

    debug!("Starting {}", Phase::Two);
    phase_two::primal::<_, PR, _>(&mut tableau, settings, trace)
}

/// Whether the first phase can be skipped in favor of dual pivots on the slack basis.
///
/// This is the case when some right-hand side value is negative and no objective coefficient is
/// positive.
fn starts_dual_feasible<F: Scalar>(problem: &Problem<F>, tolerance: &Tolerance<F>) -> bool {
    problem.b().iter().any(|&b| tolerance.is_negative(b))
        && problem.c().iter().all(|&c| !tolerance.is_positive(c))
}

#[cfg(test)]
mod test {
    use crate::algorithm::two_phase::{Phase, starts_dual_feasible};
    use crate::data::linear_program::Problem;
    use crate::data::number_types::tolerance::Tolerance;

    #[test]
    fn dual_start_guard() {
        let tolerance = Tolerance::default();

        let problem = Problem::new(1, 2, vec![vec![-1f64, -1f64]], vec![-2f64], vec![-1f64, 0f64]).unwrap();
        assert!(starts_dual_feasible(&problem, &tolerance));

        // A positive cost needs the first phase
        let problem = Problem::new(1, 2, vec![vec![-1f64, -1f64]], vec![-2f64], vec![-1f64, 1f64]).unwrap();
        assert!(!starts_dual_feasible(&problem, &tolerance));

        // Cost at tolerance counts as zero
        let problem = Problem::new(1, 1, vec![vec![-1f64]], vec![-2f64], vec![1e-7f64]).unwrap();
        assert!(starts_dual_feasible(&problem, &tolerance));

        // Nothing to restore
        let problem = Problem::new(1, 1, vec![vec![1f64]], vec![2f64], vec![-1f64]).unwrap();
        assert!(!starts_dual_feasible(&problem, &tolerance));
    }

    #[test]
    fn display() {
        assert_eq!(Phase::One.to_string(), "phase one");
        assert_eq!(Phase::Two.to_string(), "phase two");
    }
}
