//! # Phase two: optimizing the objective
//!
//! Starting from a basis that is primal feasible (after the first phase) or dual feasible (the
//! slack basis when no objective coefficient is positive), pivot until the tableau is optimal or
//! proves unboundedness or infeasibility.
use log::debug;

use crate::algorithm::{OptimizationResult, SolveError};
use crate::algorithm::settings::Settings;
use crate::algorithm::two_phase::{certificate, extract};
use crate::algorithm::two_phase::Phase;
use crate::algorithm::two_phase::simplex::{run, Termination};
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::kind::Kind;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::algorithm::two_phase::trace::Trace;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::Problem;
use crate::data::number_types::tolerance::Tolerance;
use crate::data::number_types::traits::Scalar;

impl<F: Scalar> Tableau<F> {
    /// Create the tableau for the second phase from the result of the first.
    ///
    /// The constraint rows are copied without the artificial block and the basis is kept. The cost
    /// row is set to the real objective and brought into canonical form with respect to that basis.
    ///
    /// # Arguments
    ///
    /// * `artificial`: Tableau at the end of the first phase, without artificial basis columns.
    /// * `problem`: Problem that the tableau was created for, providing the objective.
    pub fn from_artificial(artificial: &Tableau<F>, problem: &Problem<F>, tolerance: &Tolerance<F>) -> Self {
        debug_assert_eq!(artificial.kind(), Kind::Artificial);
        debug_assert!(!artificial.has_artificial_in_basis());

        let nr_constraints = artificial.nr_constraints();
        let nr_variables = artificial.nr_variables();
        let structural_end = artificial.structural_columns().end;
        let rhs_column = artificial.rhs_column();

        let mut rows = Vec::with_capacity(1 + nr_constraints);
        rows.push(cost_row(problem));
        for row in 0..nr_constraints {
            let values = artificial.constraint_row(row);
            rows.push(values[..structural_end].iter().chain(&values[rhs_column..]).copied().collect());
        }

        let data = DenseMatrix::from_data(rows, structural_end + 1);
        let mut tableau = Tableau::new(data, nr_constraints, nr_variables, Kind::NonArtificial, artificial.basis().to_vec());
        tableau.canonicalize_cost_row(tolerance);

        tableau
    }

    /// Create a tableau with the slack variables as basis.
    ///
    /// This basis is primal feasible when `b >= 0` and dual feasible when `c <= 0`.
    pub fn with_slack_basis(problem: &Problem<F>) -> Self {
        let nr_constraints = problem.nr_constraints();
        let nr_variables = problem.nr_variables();

        let mut rows = Vec::with_capacity(1 + nr_constraints);
        rows.push(cost_row(problem));
        for i in 0..nr_constraints {
            let mut row = vec![F::zero(); nr_constraints];
            row[i] = F::one();
            row.extend_from_slice(problem.constraint(i));
            row.extend((0..nr_constraints).map(|k| if k == i { F::one() } else { F::zero() }));
            row.push(problem.b()[i]);
            rows.push(row);
        }

        let nr_columns = nr_constraints + nr_variables + nr_constraints + 1;
        let basis = ((nr_constraints + nr_variables)..(nr_constraints + nr_variables + nr_constraints)).collect();
        Tableau::new(DenseMatrix::from_data(rows, nr_columns), nr_constraints, nr_variables, Kind::NonArtificial, basis)
    }
}

/// `[0 | -c | 0 | 0]`: the objective before any pivot.
fn cost_row<F: Scalar>(problem: &Problem<F>) -> Vec<F> {
    let mut row = vec![F::zero(); problem.nr_constraints()];
    row.extend(problem.c().iter().map(|&c| -c));
    row.extend(vec![F::zero(); problem.nr_constraints() + 1]);
    row
}

/// Maximize the objective function.
///
/// While calling this method, the tableau should be in canonical form and be either primal
/// feasible, or dual feasible.
///
/// # Return value
///
/// An `OptimizationResult` with a certificate. Infeasibility can only be found when the tableau
/// was not primal feasible at the start.
pub fn primal<F, PR, T>(
    tableau: &mut Tableau<F>,
    settings: &Settings<F>,
    trace: &mut T,
) -> Result<OptimizationResult<F>, SolveError>
where
    F: Scalar,
    PR: PivotRule<F>,
    T: Trace<F>,
{
    debug_assert_eq!(tableau.kind(), Kind::NonArtificial);
    let tolerance = &settings.tolerance;

    let termination = run::<_, PR, _>(tableau, Phase::Two, settings, trace)?;
    debug!("{} terminated as {:?}", Phase::Two, termination);

    Ok(match termination {
        Termination::Optimal => {
            let solution = extract::current_bfs(tableau, tolerance);
            OptimizationResult::FiniteOptimum {
                value: tolerance.round(tableau.objective_function_value()),
                x: solution.values,
                certificate: certificate::dual_multipliers(tableau, tolerance),
            }
        },
        Termination::Unbounded { column } => {
            let solution = extract::current_bfs(tableau, tolerance);
            OptimizationResult::Unbounded {
                ray: certificate::unbounded_ray(tableau, column, &solution.basis, tolerance),
                x: solution.values,
            }
        },
        Termination::Infeasible { row } => OptimizationResult::Infeasible {
            certificate: certificate::farkas_from_row(tableau, row, tolerance),
        },
    })
}

#[cfg(test)]
mod test {
    use crate::algorithm::OptimizationResult;
    use crate::algorithm::settings::Settings;
    use crate::algorithm::two_phase::phase_one::{FeasibilityResult, primal as phase_one};
    use crate::algorithm::two_phase::phase_two::primal;
    use crate::algorithm::two_phase::strategy::pivot_rule::Bland;
    use crate::algorithm::two_phase::tableau::kind::Kind;
    use crate::algorithm::two_phase::tableau::Tableau;
    use crate::data::linear_program::Problem;
    use crate::data::number_types::tolerance::Tolerance;

    fn example() -> Problem<f64> {
        Problem::new(
            2, 2,
            vec![vec![1f64, 0f64], vec![0f64, 2f64]],
            vec![4f64, 12f64],
            vec![3f64, 5f64],
        ).unwrap()
    }

    #[test]
    fn with_slack_basis() {
        let tableau = Tableau::with_slack_basis(&example());

        assert_eq!(tableau.kind(), Kind::NonArtificial);
        assert_eq!(tableau.basis(), &[4, 5]);
        assert_eq!(tableau.cost_row(), &[0f64, 0f64, -3f64, -5f64, 0f64, 0f64, 0f64]);
        assert_eq!(tableau.constraint_row(1), &[0f64, 1f64, 0f64, 2f64, 0f64, 1f64, 12f64]);
        assert!(tableau.is_in_canonical_form());
    }

    #[test]
    fn from_artificial() {
        let problem = example();
        let settings = Settings::default();
        let artificial = match phase_one::<_, Bland, _>(&problem, &settings, &mut ()) {
            Ok(FeasibilityResult::Feasible(tableau)) => tableau,
            other => panic!("expected a feasible result, got {:?}", other),
        };

        let tableau = Tableau::from_artificial(&artificial, &problem, &settings.tolerance);
        assert_eq!(tableau.kind(), Kind::NonArtificial);
        assert_eq!(tableau.nr_columns(), 7);
        assert_eq!(tableau.basis(), artificial.basis());
        assert!(tableau.is_in_canonical_form());
        assert!(tableau.is_primal_feasible(&settings.tolerance));
    }

    #[test]
    fn optimal() {
        let mut tableau = Tableau::with_slack_basis(&example());

        let result = primal::<_, Bland, _>(&mut tableau, &Settings::default(), &mut ());
        assert_eq!(result, Ok(OptimizationResult::FiniteOptimum {
            value: 42f64,
            x: vec![4f64, 6f64],
            certificate: vec![3f64, 2.5f64],
        }));
    }

    #[test]
    fn unbounded() {
        let problem = Problem::new(1, 2, vec![vec![1f64, -1f64]], vec![0f64], vec![1f64, 1f64]).unwrap();
        let mut tableau = Tableau::with_slack_basis(&problem);

        let result = primal::<_, Bland, _>(&mut tableau, &Settings::default(), &mut ());
        assert_eq!(result, Ok(OptimizationResult::Unbounded {
            x: vec![0f64, 0f64],
            ray: vec![1f64, 1f64],
        }));
    }

    #[test]
    fn dual_start_infeasible() {
        // max -x0 s.t. x0 <= -1
        let problem = Problem::new(1, 1, vec![vec![1f64]], vec![-1f64], vec![-1f64]).unwrap();
        let mut tableau = Tableau::with_slack_basis(&problem);

        let result = primal::<_, Bland, _>(&mut tableau, &Settings::default(), &mut ());
        assert_eq!(result, Ok(OptimizationResult::Infeasible { certificate: vec![1f64] }));
        assert!(result.unwrap().is_certified_for(&problem, &Tolerance::default()));
    }
}
