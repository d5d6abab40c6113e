//! # Pivot rules
//!
//! Strategies for moving from basis to basis, whether primal or dual.
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::number_types::tolerance::Tolerance;
use crate::data::number_types::traits::Scalar;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected for a primal pivot (or the row for a dual pivot), a row
/// (column) needs to be found. This decision is made by the ratio tests on the `Tableau`,
/// independent of the strategy.
pub trait PivotRule<F> {
    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// A structural column with a negative cost, or `None` if the tableau is optimal.
    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>, tolerance: &Tolerance<F>) -> Option<usize>;

    /// Row selection rule for the dual Simplex method.
    ///
    /// # Return value
    ///
    /// A constraint row with a negative right-hand side, or `None` if the tableau is primal
    /// feasible.
    fn select_dual_pivot_row(&mut self, tableau: &Tableau<F>, tolerance: &Tolerance<F>) -> Option<usize>;
}

/// Bland's rule: always take the eligible candidate with the smallest index.
///
/// Not the fastest rule, but it can't cycle, not even on degenerate problems.
pub struct Bland;

impl<F: Scalar> PivotRule<F> for Bland {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>, tolerance: &Tolerance<F>) -> Option<usize> {
        tableau.structural_columns()
            .find(|&column| tolerance.is_negative(tableau.cost(column)))
    }

    fn select_dual_pivot_row(&mut self, tableau: &Tableau<F>, tolerance: &Tolerance<F>) -> Option<usize> {
        (0..tableau.nr_constraints())
            .find(|&row| tolerance.is_negative(tableau.constraint_value(row)))
    }
}

impl<F: Scalar> Tableau<F> {
    /// Determine the row to pivot on, given the column.
    ///
    /// This is the row with the minimal ratio between the right-hand side and a strictly positive
    /// column entry. When there are multiple choices for the pivot row, the one whose basic column
    /// has the lowest index leaves (Bland's anti cycling rule).
    ///
    /// # Arguments
    ///
    /// * `column`: Entering column.
    ///
    /// # Return value
    ///
    /// Index of the constraint row to pivot on. If not found, the problem is unbounded in the
    /// direction of `column`.
    pub fn select_primal_pivot_row(&self, column: usize, tolerance: &Tolerance<F>) -> Option<usize> {
        // (chosen row, minimum ratio, corresponding leaving column)
        let mut min_values: Option<(usize, F, usize)> = None;
        for row in 0..self.nr_constraints() {
            let xij = self.entry(row, column);
            if !tolerance.is_positive(xij) {
                continue;
            }

            let ratio = self.constraint_value(row) / xij;
            let leaving_column = self.basis_column_for_row(row);
            match &mut min_values {
                Some((min_row, min_ratio, min_leaving_column)) => {
                    if ratio == *min_ratio && leaving_column < *min_leaving_column {
                        *min_row = row;
                        *min_leaving_column = leaving_column;
                    } else if ratio < *min_ratio {
                        *min_row = row;
                        *min_ratio = ratio;
                        *min_leaving_column = leaving_column;
                    }
                },
                None => min_values = Some((row, ratio, leaving_column)),
            }
        }

        min_values.map(|(row, _, _)| row)
    }

    /// Determine the column to pivot on, given a row with a negative right-hand side.
    ///
    /// Among the structural columns with a negative entry in the row and a non negative cost, this
    /// is the one minimizing `cost / -entry`, such that the cost row stays non negative. Ties go to
    /// the lowest column index.
    ///
    /// # Return value
    ///
    /// Index of the entering column. If not found, the row proves that the problem is infeasible.
    pub fn select_dual_pivot_column(&self, row: usize, tolerance: &Tolerance<F>) -> Option<usize> {
        let mut min_values: Option<(usize, F)> = None;
        for column in self.structural_columns() {
            let entry = self.entry(row, column);
            let cost = self.cost(column);
            if !tolerance.is_negative(entry) || tolerance.is_negative(cost) {
                continue;
            }

            let ratio = cost / -entry;
            match min_values {
                Some((_, min_ratio)) if ratio >= min_ratio => {},
                _ => min_values = Some((column, ratio)),
            }
        }

        min_values.map(|(column, _)| column)
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::two_phase::strategy::pivot_rule::{Bland, PivotRule};
    use crate::algorithm::two_phase::tableau::kind::Kind;
    use crate::algorithm::two_phase::tableau::Tableau;
    use crate::data::linear_algebra::matrix::DenseMatrix;
    use crate::data::number_types::tolerance::Tolerance;

    fn tableau(rows: Vec<Vec<f64>>, basis: Vec<usize>) -> Tableau<f64> {
        let nr_columns = rows[0].len();
        let nr_constraints = rows.len() - 1;
        let nr_variables = nr_columns - 1 - 2 * nr_constraints;
        Tableau::new(DenseMatrix::from_data(rows, nr_columns), nr_constraints, nr_variables, Kind::NonArtificial, basis)
    }

    #[test]
    fn smallest_negative_cost() {
        let tolerance = Tolerance::default();
        let t = tableau(vec![
            vec![-9f64, 0f64, -2f64, -5f64, 0f64, 0f64],
            vec![1f64, 1f64, 1f64, 1f64, 1f64, 1f64],
        ], vec![4]);
        // The tracking block is never considered, even though it is negative
        assert_eq!(Bland.select_primal_pivot_column(&t, &tolerance), Some(2));
    }

    #[test]
    fn right_hand_side_never_enters() {
        let tolerance = Tolerance::default();
        // Degenerate cost row: only the right-hand side cell is negative
        let t = tableau(vec![
            vec![0f64, 0f64, 1f64, 0f64, -4f64],
            vec![1f64, 1f64, 1f64, 1f64, 2f64],
        ], vec![3]);
        assert_eq!(Bland.select_primal_pivot_column(&t, &tolerance), None);
        assert!(t.is_dual_feasible(&tolerance));
    }

    #[test]
    fn cost_at_tolerance_is_not_negative() {
        let tolerance = Tolerance::default();
        let t = tableau(vec![
            vec![0f64, -1e-7, -2e-7, 0f64, 0f64],
            vec![1f64, 1f64, 1f64, 1f64, 2f64],
        ], vec![3]);
        assert_eq!(Bland.select_primal_pivot_column(&t, &tolerance), Some(2));
    }

    #[test]
    fn ratio_test() {
        let tolerance = Tolerance::default();
        let t = tableau(vec![
            vec![0f64, 0f64, 0f64, -1f64, 0f64, 0f64, 0f64, 0f64],
            vec![1f64, 0f64, 0f64, 2f64, 1f64, 0f64, 0f64, 6f64],
            vec![0f64, 1f64, 0f64, 1f64, 0f64, 1f64, 0f64, 2f64],
            vec![0f64, 0f64, 1f64, -1f64, 0f64, 0f64, 1f64, 1f64],
        ], vec![4, 5, 6]);
        // Ratios 3, 2 and not eligible
        assert_eq!(t.select_primal_pivot_row(3, &tolerance), Some(1));
    }

    #[test]
    fn ratio_tie_goes_to_lowest_leaving_column() {
        let tolerance = Tolerance::default();
        let t = tableau(vec![
            vec![0f64, 0f64, -1f64, 0f64, 0f64, 0f64],
            vec![1f64, 0f64, 1f64, 0f64, 1f64, 2f64],
            vec![0f64, 1f64, 2f64, 1f64, 0f64, 4f64],
        ], vec![4, 3]);
        // Both rows have ratio 2, row 1 has basic column 3 < 4
        assert_eq!(t.select_primal_pivot_row(2, &tolerance), Some(1));
    }

    #[test]
    fn unbounded_column() {
        let tolerance = Tolerance::default();
        let t = tableau(vec![
            vec![0f64, 0f64, -1f64, 0f64, 0f64, 0f64],
            vec![1f64, 0f64, -1f64, 1f64, 0f64, 2f64],
            vec![0f64, 1f64, 1e-7, 0f64, 1f64, 4f64],
        ], vec![3, 4]);
        // An entry exactly at tolerance is not positive
        assert_eq!(t.select_primal_pivot_row(2, &tolerance), None);
    }

    #[test]
    fn dual_selection() {
        let tolerance = Tolerance::default();
        let t = tableau(vec![
            vec![0f64, 0f64, 3f64, 1f64, 0f64, 0f64, 0f64],
            vec![1f64, 0f64, 1f64, 1f64, 1f64, 0f64, 4f64],
            vec![0f64, 1f64, -3f64, -2f64, 0f64, 1f64, -6f64],
        ], vec![4, 5]);
        assert_eq!(Bland.select_dual_pivot_row(&t, &tolerance), Some(1));
        // Ratios 3 / 3 = 1 and 1 / 2 = 0.5
        assert_eq!(t.select_dual_pivot_column(1, &tolerance), Some(3));
        assert_eq!(t.select_dual_pivot_column(0, &tolerance), None);
    }
}
