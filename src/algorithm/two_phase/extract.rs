//! # Reading a basic solution from a tableau
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::number_types::tolerance::Tolerance;
use crate::data::number_types::traits::Scalar;

/// Values of the original variables in the current basic solution.
#[derive(Clone, Debug, PartialEq)]
pub struct BasicSolution<F> {
    /// One value per original variable, rounded.
    pub values: Vec<F>,
    /// `(variable index, constraint row)` for every basic original variable.
    pub basis: Vec<(usize, usize)>,
}

/// Get the current basic solution.
///
/// A variable is basic when its column is a unit vector and its cost is zero, both within
/// tolerance. Its value is the right-hand side of the row of its one; all other variables are
/// zero. Each row is claimed by at most one variable, the one with the lowest index.
pub fn current_bfs<F: Scalar>(tableau: &Tableau<F>, tolerance: &Tolerance<F>) -> BasicSolution<F> {
    let mut claimed = vec![false; tableau.nr_constraints()];
    let mut values = vec![F::zero(); tableau.nr_variables()];
    let mut basis = Vec::new();

    for (j, value) in values.iter_mut().enumerate() {
        let column = tableau.variable_column(j);
        if !tolerance.is_zero(tableau.cost(column)) {
            continue;
        }

        if let Some(row) = tableau.unit_column_row(column, tolerance) {
            if !claimed[row] {
                claimed[row] = true;
                *value = tolerance.round(tableau.constraint_value(row));
                basis.push((j, row));
            }
        }
    }

    BasicSolution { values, basis }
}
