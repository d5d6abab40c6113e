//! # Phase one: finding a basic feasible solution
//!
//! Every constraint gets an artificial variable, which together form the initial basis. Rows
//! with a negative right-hand side are negated first, such that this basis is feasible. The
//! auxiliary objective is to maximize minus the sum of the artificial variables: the original
//! problem is feasible if and only if that maximum is zero.
use log::debug;

use crate::algorithm::SolveError;
use crate::algorithm::settings::Settings;
use crate::algorithm::two_phase::certificate;
use crate::algorithm::two_phase::Phase;
use crate::algorithm::two_phase::simplex::{run, Termination};
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::kind::Kind;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::algorithm::two_phase::trace::{PivotEvent, PivotKind, Trace};
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::Problem;
use crate::data::number_types::tolerance::Tolerance;
use crate::data::number_types::traits::Scalar;

/// Outcome of the first phase.
#[derive(Clone, Debug, PartialEq)]
pub enum FeasibilityResult<F> {
    /// A basic feasible solution was found.
    ///
    /// The tableau still has its artificial columns, but none of them is basic anymore.
    Feasible(Tableau<F>),
    /// The artificial variables can't all be zero.
    Infeasible {
        /// Farkas multipliers, one per constraint.
        certificate: Vec<F>,
    },
}

impl<F: Scalar> Tableau<F> {
    /// Create the tableau of the auxiliary problem.
    ///
    /// Row `i` is `s_i [e_i | A_i | e_i | 0 | b_i]` with `s_i` the sign of `b_i` (one for zero),
    /// plus a one in artificial column `i`. The cost row is minus the sum of the constraint rows,
    /// which is the canonical form of "maximize minus the sum of the artificials" with respect to
    /// the artificial basis.
    pub fn auxiliary(problem: &Problem<F>) -> Self {
        let nr_constraints = problem.nr_constraints();
        let nr_variables = problem.nr_variables();
        let nr_columns = nr_constraints + nr_variables + 2 * nr_constraints + 1;

        let mut data = DenseMatrix::zeros(1 + nr_constraints, nr_columns);
        for i in 0..nr_constraints {
            let sign = if problem.b()[i] < F::zero() { -F::one() } else { F::one() };
            let row = 1 + i;

            data.set_value(row, i, sign);
            for (j, &value) in problem.constraint(i).iter().enumerate() {
                data.set_value(row, nr_constraints + j, sign * value);
            }
            data.set_value(row, nr_constraints + nr_variables + i, sign);
            data.set_value(row, nr_constraints + nr_variables + nr_constraints + i, F::one());
            data.set_value(row, nr_columns - 1, sign * problem.b()[i]);

            data.mul_add_rows(row, 0, -F::one());
        }

        let artificial_start = nr_constraints + nr_variables + nr_constraints;
        for i in 0..nr_constraints {
            data.set_value(0, artificial_start + i, F::zero());
        }

        let basis = (artificial_start..(artificial_start + nr_constraints)).collect();
        Tableau::new(data, nr_constraints, nr_variables, Kind::Artificial, basis)
    }
}

/// Maximize minus the sum of the artificial variables.
///
/// # Arguments
///
/// * `problem`: Problem to find a basic feasible solution for.
/// * `settings`: Tolerance and iteration limit.
/// * `trace`: Called after every pivot, including those removing artificial variables from the
/// basis.
///
/// # Return value
///
/// A tableau without artificial basis columns, or a Farkas certificate.
///
/// # Errors
///
/// When the iteration limit is reached, or when rounding errors lead to a state that isn't
/// possible for the auxiliary problem.
pub fn primal<F, PR, T>(
    problem: &Problem<F>,
    settings: &Settings<F>,
    trace: &mut T,
) -> Result<FeasibilityResult<F>, SolveError>
where
    F: Scalar,
    PR: PivotRule<F>,
    T: Trace<F>,
{
    let tolerance = &settings.tolerance;
    let mut tableau = Tableau::auxiliary(problem);

    match run::<_, PR, _>(&mut tableau, Phase::One, settings, trace)? {
        Termination::Optimal => {},
        Termination::Unbounded { column } => return Err(SolveError::NumericDegeneracy {
            phase: Phase::One,
            description: format!("auxiliary problem is unbounded in column {}", column),
        }),
        Termination::Infeasible { row } => return Err(SolveError::NumericDegeneracy {
            phase: Phase::One,
            description: format!("right-hand side of row {} became negative", row),
        }),
    }

    let value = tableau.objective_function_value();
    debug!("{} ended with value {}", Phase::One, value);
    if tolerance.is_negative(value) {
        let certificate = certificate::farkas_from_cost_row(&tableau, tolerance);
        return Ok(FeasibilityResult::Infeasible { certificate });
    }

    if tableau.has_artificial_in_basis() {
        remove_artificial_basis_variables(&mut tableau, settings, trace)?;
    }

    Ok(FeasibilityResult::Feasible(tableau))
}

/// Removes all artificial variables from the basis by pivoting "at zero level", that is, without
/// changing the value of the current solution.
///
/// For each row that still has an artificial basic variable, the structural column with the
/// lowest index and a nonzero entry in that row enters. The slack columns make such a column exist
/// in exact arithmetic.
///
/// # Errors
///
/// When no such column is found.
fn remove_artificial_basis_variables<F, T>(
    tableau: &mut Tableau<F>,
    settings: &Settings<F>,
    trace: &mut T,
) -> Result<(), SolveError>
where
    F: Scalar,
    T: Trace<F>,
{
    let tolerance: &Tolerance<F> = &settings.tolerance;

    for row in 0..tableau.nr_constraints() {
        if !tableau.is_artificial(tableau.basis_column_for_row(row)) {
            continue;
        }

        let column = tableau.structural_columns()
            .find(|&column| !tableau.is_in_basis(column) && !tolerance.is_zero(tableau.entry(row, column)))
            .ok_or_else(|| SolveError::NumericDegeneracy {
                phase: Phase::One,
                description: format!(
                    "artificial variable in row {} can't leave the basis: no nonzero structural entry",
                    row,
                ),
            })?;

        debug!("Removing artificial variable from row {} in favor of column {}", row, column);
        tableau.bring_into_basis(row, column);
        trace.after_pivot(&PivotEvent {
            phase: Phase::One,
            kind: PivotKind::ArtificialRemoval,
            row,
            column,
            tableau: &*tableau,
        });
    }

    debug_assert!(!tableau.has_artificial_in_basis());
    Ok(())
}
