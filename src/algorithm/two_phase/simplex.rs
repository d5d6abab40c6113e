//! # The pivoting loop
//!
//! Primal and dual simplex are two transition rules of the same state machine. In every state the
//! guard decides which one applies:
//!
//! * a right-hand side is negative and no reduced cost is: a dual pivot;
//! * all right-hand sides are non negative: a primal pivot, or termination as optimal or
//! unbounded.
//!
//! After the dual rule has restored primal feasibility, the primal rule takes over without the
//! tableau being rebuilt.
use crate::algorithm::SolveError;
use crate::algorithm::settings::Settings;
use crate::algorithm::two_phase::Phase;
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::algorithm::two_phase::trace::{PivotEvent, PivotKind, Trace};
use crate::data::number_types::tolerance::Tolerance;
use crate::data::number_types::traits::Scalar;

/// State in which the loop stopped.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Termination {
    /// No column has a negative reduced cost and the basic solution is feasible.
    Optimal,
    /// This column has a negative reduced cost but no positive entry.
    Unbounded {
        /// Entering column.
        column: usize,
    },
    /// This row has a negative right-hand side but no negative entry to pivot on.
    Infeasible {
        /// Constraint row.
        row: usize,
    },
}

/// One transition of the state machine.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Step {
    Pivot {
        kind: PivotKind,
        row: usize,
        column: usize,
    },
    Stop(Termination),
}

/// Pivot until a terminal state is reached.
///
/// While calling this method, the tableau should be in canonical form, and be either primal
/// feasible or dual feasible.
///
/// # Arguments
///
/// * `tableau`: Tableau to pivot on, in place.
/// * `phase`: Only used for reporting.
/// * `settings`: Tolerance and iteration limit.
/// * `trace`: Called after every pivot.
///
/// # Errors
///
/// When the iteration limit is reached, or when the tableau is neither primal nor dual feasible.
pub(crate) fn run<F, PR, T>(
    tableau: &mut Tableau<F>,
    phase: Phase,
    settings: &Settings<F>,
    trace: &mut T,
) -> Result<Termination, SolveError>
where
    F: Scalar,
    PR: PivotRule<F>,
    T: Trace<F>,
{
    let mut rule = PR::new();
    let mut nr_pivots = 0;
    loop {
        debug_assert!(tableau.is_in_canonical_form());

        match next_step(&mut rule, tableau, phase, &settings.tolerance)? {
            Step::Pivot { kind, row, column } => {
                if nr_pivots == settings.iteration_limit {
                    break Err(SolveError::IterationLimit { phase, limit: settings.iteration_limit });
                }

                tableau.bring_into_basis(row, column);
                nr_pivots += 1;
                trace.after_pivot(&PivotEvent { phase, kind, row, column, tableau: &*tableau });
            },
            Step::Stop(termination) => break Ok(termination),
        }
    }
}

/// Decide on the next transition.
fn next_step<F, PR>(
    rule: &mut PR,
    tableau: &Tableau<F>,
    phase: Phase,
    tolerance: &Tolerance<F>,
) -> Result<Step, SolveError>
where
    F: Scalar,
    PR: PivotRule<F>,
{
    if let Some(row) = rule.select_dual_pivot_row(tableau, tolerance) {
        if !tableau.is_dual_feasible(tolerance) {
            return Err(SolveError::NumericDegeneracy {
                phase,
                description: format!(
                    "row {} has a negative right-hand side while the tableau is not dual feasible",
                    row,
                ),
            });
        }

        return Ok(match tableau.select_dual_pivot_column(row, tolerance) {
            Some(column) => Step::Pivot { kind: PivotKind::Dual, row, column },
            None => Step::Stop(Termination::Infeasible { row }),
        });
    }

    Ok(match rule.select_primal_pivot_column(tableau, tolerance) {
        Some(column) => match tableau.select_primal_pivot_row(column, tolerance) {
            Some(row) => Step::Pivot { kind: PivotKind::Primal, row, column },
            None => Step::Stop(Termination::Unbounded { column }),
        },
        None => Step::Stop(Termination::Optimal),
    })
}
