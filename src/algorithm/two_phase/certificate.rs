//! # Certificates
//!
//! Reading the vectors that prove a result from a terminal tableau. Nothing is computed here
//! besides rounding: the tracking block already holds the row multipliers.
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::number_types::tolerance::Tolerance;
use crate::data::number_types::traits::Scalar;

/// Dual multipliers of an optimal tableau.
///
/// These satisfy `y >= 0`, `y^T A >= c` and `y^T b` equal to the optimal value.
pub fn dual_multipliers<F: Scalar>(tableau: &Tableau<F>, tolerance: &Tolerance<F>) -> Vec<F> {
    round_all(tableau.dual_multipliers(), tolerance)
}

/// Farkas multipliers of an auxiliary tableau that is optimal with a negative value.
///
/// The cost row is `[y | y^T A | y | 1 + .. | y^T b]` with `y^T b` the negative optimal value,
/// and all structural costs non negative.
pub fn farkas_from_cost_row<F: Scalar>(tableau: &Tableau<F>, tolerance: &Tolerance<F>) -> Vec<F> {
    round_all(tableau.dual_multipliers(), tolerance)
}

/// Farkas multipliers from a row with a negative right-hand side and no negative structural entry.
///
/// That row reads `[y | y^T A | y | y^T b]`, which is exactly the proof.
pub fn farkas_from_row<F: Scalar>(tableau: &Tableau<F>, row: usize, tolerance: &Tolerance<F>) -> Vec<F> {
    debug_assert!(tolerance.is_negative(tableau.constraint_value(row)));

    round_all(tableau.row_multipliers(row), tolerance)
}

/// Direction in which the objective grows without bound.
///
/// # Arguments
///
/// * `tableau`: Primal feasible tableau.
/// * `column`: Column with a negative cost and no positive entry.
/// * `basis`: `(variable, row)` pairs of the basic original variables.
///
/// # Return value
///
/// One value per original variable: one for the entering variable if it is an original
/// variable, minus the entering column's entry in its row for each basic variable, zero
/// otherwise.
pub fn unbounded_ray<F: Scalar>(
    tableau: &Tableau<F>,
    column: usize,
    basis: &[(usize, usize)],
    tolerance: &Tolerance<F>,
) -> Vec<F> {
    let direction = tableau.generate_column(column);
    let mut ray = vec![F::zero(); tableau.nr_variables()];

    let variables = tableau.nr_constraints()..(tableau.nr_constraints() + tableau.nr_variables());
    if variables.contains(&column) {
        ray[column - variables.start] = F::one();
    }
    for &(variable, row) in basis {
        ray[variable] = tolerance.round(-direction[row]);
    }

    ray
}

fn round_all<F: Scalar>(values: &[F], tolerance: &Tolerance<F>) -> Vec<F> {
    values.iter().map(|&value| tolerance.round(value)).collect()
}
