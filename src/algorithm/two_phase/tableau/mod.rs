//! # Data structures for Simplex
//!
//! Contains the simplex tableau and logic for elementary operations which can be performed upon
//! it.
//!
//! The tableau is dense and has `n + 1` rows: the cost row at index 0, followed by one row per
//! constraint. Its columns are laid out as
//!
//! ```text
//! [ tracking (n) | x (m) | slack (n) | artificial (n, first phase only) | rhs (1) ]
//! ```
//!
//! The tracking block starts out as (a signed) identity matrix and is never pivoted on. Because
//! all changes are row operations, it always holds the combination of original rows that each
//! current row is made of. Its entries in the cost row are the dual multipliers.
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::iter;
use std::ops::Range;

use crate::algorithm::two_phase::tableau::kind::Kind;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::number_types::tolerance::Tolerance;
use crate::data::number_types::traits::Scalar;

pub mod kind;

/// The most high-level data structure that is used by the Simplex algorithm: the Simplex tableau.
///
/// It is created by one of the builders in the `phase_one` and `phase_two` modules, changed in
/// place by pivots and finally read by the solution extractor.
#[derive(Clone, Debug, PartialEq)]
pub struct Tableau<F> {
    /// Cost row followed by the constraint rows.
    data: DenseMatrix<F>,
    /// Number of constraints `n` of the original problem.
    nr_constraints: usize,
    /// Number of variables `m` of the original problem.
    nr_variables: usize,
    /// Whether there is a block of artificial columns.
    kind: Kind,
    /// For each constraint row, the column that is basic in it.
    ///
    /// This attribute changes with a basis change.
    basis: Vec<usize>,
}

impl<F: Scalar> Tableau<F> {
    /// Wrap tableau data.
    ///
    /// # Arguments
    ///
    /// * `data`: Cost row and constraint rows, in canonical form with respect to `basis`.
    /// * `nr_constraints`: Number of constraints `n`.
    /// * `nr_variables`: Number of variables `m`.
    /// * `kind`: Whether `data` contains artificial columns.
    /// * `basis`: For each constraint row, the index of its basic column.
    pub(crate) fn new(
        data: DenseMatrix<F>,
        nr_constraints: usize,
        nr_variables: usize,
        kind: Kind,
        basis: Vec<usize>,
    ) -> Self {
        debug_assert_eq!(data.nr_rows(), 1 + nr_constraints);
        debug_assert_eq!(
            data.nr_columns(),
            nr_constraints + nr_variables + nr_constraints + kind.nr_artificial_columns(nr_constraints) + 1,
        );
        debug_assert_eq!(basis.len(), nr_constraints);

        Self { data, nr_constraints, nr_variables, kind, basis }
    }

    /// Brings a column into the basis with a Gauss-Jordan pivot.
    ///
    /// The pivot row is scaled such that the pivot becomes one, after which a multiple of it is
    /// subtracted from every other row (the cost row included) to make the rest of the pivot
    /// column zero. The entries of the pivot column are written exactly, such that basic columns
    /// are exact unit vectors.
    ///
    /// # Arguments
    ///
    /// * `pivot_row`: Index of the constraint row, in range `0` until `self.nr_constraints()`.
    /// * `pivot_column`: Index of the entering column. Should not be in the tracking block or be
    /// the right-hand side.
    pub fn bring_into_basis(&mut self, pivot_row: usize, pivot_column: usize) {
        debug_assert!(pivot_row < self.nr_constraints);
        debug_assert!(pivot_column >= self.nr_constraints && pivot_column < self.rhs_column());

        let row = 1 + pivot_row;
        let pivot = self.data.get_value(row, pivot_column);
        debug_assert!(pivot != F::zero());

        self.data.multiply_row(row, pivot.recip());
        self.data.set_value(row, pivot_column, F::one());

        for other in (0..self.data.nr_rows()).filter(|&i| i != row) {
            let factor = self.data.get_value(other, pivot_column);
            if factor != F::zero() {
                self.data.mul_add_rows(row, other, -factor);
                self.data.set_value(other, pivot_column, F::zero());
            }
        }

        self.basis[pivot_row] = pivot_column;
    }

    /// Make the cost row zero under all basic columns.
    ///
    /// For every basic column with a cost that is not zero within tolerance, that cost times the
    /// column's row is subtracted from the cost row. Because basic columns are unit vectors, this
    /// doesn't disturb the other basic columns, and no pivots are needed.
    pub(crate) fn canonicalize_cost_row(&mut self, tolerance: &Tolerance<F>) {
        for (row, &column) in self.basis.iter().enumerate() {
            let cost = self.data.get_value(0, column);
            if !tolerance.is_zero(cost) {
                self.data.mul_add_rows(1 + row, 0, -cost);
            }
            self.data.set_value(0, column, F::zero());
        }
    }

    /// Number of constraints `n` in the original problem, equal to the number of constraint rows.
    pub fn nr_constraints(&self) -> usize {
        self.nr_constraints
    }

    /// Number of variables `m` in the original problem.
    pub fn nr_variables(&self) -> usize {
        self.nr_variables
    }

    /// Number of columns, including the tracking block and the right-hand side.
    pub fn nr_columns(&self) -> usize {
        self.data.nr_columns()
    }

    /// Whether this tableau has artificial columns.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Column index of original variable `j`.
    pub fn variable_column(&self, j: usize) -> usize {
        debug_assert!(j < self.nr_variables);

        self.nr_constraints + j
    }

    /// Column index of the slack variable of constraint `i`.
    pub fn slack_column(&self, i: usize) -> usize {
        debug_assert!(i < self.nr_constraints);

        self.nr_constraints + self.nr_variables + i
    }

    /// Column index of the artificial variable of constraint `i`.
    pub fn artificial_column(&self, i: usize) -> usize {
        debug_assert_eq!(self.kind, Kind::Artificial);
        debug_assert!(i < self.nr_constraints);

        self.nr_constraints + self.nr_variables + self.nr_constraints + i
    }

    /// Column index of the right-hand side.
    pub fn rhs_column(&self) -> usize {
        self.data.nr_columns() - 1
    }

    /// Original and slack variables: the only columns that may enter the basis.
    ///
    /// Excludes the tracking block, the artificial variables and the right-hand side.
    pub fn structural_columns(&self) -> Range<usize> {
        self.nr_constraints..(self.nr_constraints + self.nr_variables + self.nr_constraints)
    }

    /// Artificial variables, empty for a tableau without them.
    pub fn artificial_columns(&self) -> Range<usize> {
        let start = self.structural_columns().end;
        start..(start + self.kind.nr_artificial_columns(self.nr_constraints))
    }

    /// Whether a column belongs to an artificial variable.
    pub fn is_artificial(&self, column: usize) -> bool {
        self.artificial_columns().contains(&column)
    }

    /// Entry of the cost row: the negated reduced cost of a column.
    pub fn cost(&self, column: usize) -> F {
        self.data.get_value(0, column)
    }

    /// The entire cost row, including tracking block and right-hand side.
    pub fn cost_row(&self) -> &[F] {
        self.data.row(0)
    }

    /// Get the value of the objective function of the current basic solution.
    ///
    /// # Note
    ///
    /// This function works for both artificial and non-artificial tableaus. For the former, this
    /// is minus the sum of the artificial variables.
    pub fn objective_function_value(&self) -> F {
        self.cost(self.rhs_column())
    }

    /// Entry of constraint row `row` in column `column`.
    pub fn entry(&self, row: usize, column: usize) -> F {
        debug_assert!(row < self.nr_constraints);

        self.data.get_value(1 + row, column)
    }

    /// The entire constraint row, including tracking block and right-hand side.
    pub fn constraint_row(&self, row: usize) -> &[F] {
        debug_assert!(row < self.nr_constraints);

        self.data.row(1 + row)
    }

    /// Right-hand side of constraint row `row`: the value of its basic variable.
    pub fn constraint_value(&self, row: usize) -> F {
        self.entry(row, self.rhs_column())
    }

    /// Column `column` with respect to the current basis, without the cost row.
    pub fn generate_column(&self, column: usize) -> Vec<F> {
        (0..self.nr_constraints).map(|row| self.entry(row, column)).collect()
    }

    /// Cost row entries of the tracking block: the current dual multipliers.
    pub fn dual_multipliers(&self) -> &[F] {
        &self.cost_row()[..self.nr_constraints]
    }

    /// Tracking block entries of a constraint row: the combination of original rows it is made of.
    pub fn row_multipliers(&self, row: usize) -> &[F] {
        &self.constraint_row(row)[..self.nr_constraints]
    }

    /// For each constraint row, the basic column.
    pub fn basis(&self) -> &[usize] {
        &self.basis
    }

    /// Column that is basic in constraint row `row`.
    pub fn basis_column_for_row(&self, row: usize) -> usize {
        self.basis[row]
    }

    /// Whether a column is in the basis.
    pub fn is_in_basis(&self, column: usize) -> bool {
        self.basis.contains(&column)
    }

    /// Whether an artificial variable is still basic.
    pub fn has_artificial_in_basis(&self) -> bool {
        self.basis.iter().any(|&column| self.is_artificial(column))
    }

    /// Whether all basic variables are non negative, within tolerance.
    pub fn is_primal_feasible(&self, tolerance: &Tolerance<F>) -> bool {
        (0..self.nr_constraints).all(|row| !tolerance.is_negative(self.constraint_value(row)))
    }

    /// Whether no structural column has a negative cost, within tolerance.
    ///
    /// The right-hand side is never considered.
    pub fn is_dual_feasible(&self, tolerance: &Tolerance<F>) -> bool {
        self.structural_columns().all(|column| !tolerance.is_negative(self.cost(column)))
    }

    /// If a column is a unit vector within tolerance, the row of its one.
    ///
    /// The cost row is not considered.
    pub fn unit_column_row(&self, column: usize, tolerance: &Tolerance<F>) -> Option<usize> {
        let mut one_at = None;
        for row in 0..self.nr_constraints {
            let value = self.entry(row, column);
            if tolerance.is_zero(value) {
                continue;
            }
            if one_at.is_some() || !tolerance.is_one(value) {
                return None;
            }
            one_at = Some(row);
        }

        one_at
    }

    /// Whether the basis is consistent with the data.
    ///
    /// Each basic column is exactly a unit vector with its one in its own row and a zero cost, and
    /// no column is basic twice. Only used for debug purposes.
    pub(crate) fn is_in_canonical_form(&self) -> bool {
        let unique = self.basis.iter().enumerate()
            .all(|(i, column)| !self.basis[..i].contains(column));

        unique && self.basis.iter().enumerate().all(|(row, &column)| {
            self.cost(column) == F::zero()
                && (0..self.nr_constraints).all(|i| {
                    self.entry(i, column) == if i == row { F::one() } else { F::zero() }
                })
        })
    }

    fn column_label(&self, column: usize) -> String {
        let structural = self.structural_columns();
        if column < structural.start {
            format!("y{}", column)
        } else if column < self.slack_column_start() {
            format!("x{}", column - structural.start)
        } else if column < structural.end {
            format!("s{}", column - self.slack_column_start())
        } else if column < self.rhs_column() {
            format!("a{}", column - structural.end)
        } else {
            "b".to_string()
        }
    }

    fn slack_column_start(&self) -> usize {
        self.nr_constraints + self.nr_variables
    }
}

impl<F: Scalar> Display for Tableau<F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        writeln!(f, "=== Tableau ===")?;

        let cells = self.data.rows()
            .map(|row| row.iter().map(ToString::to_string).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let labels = (0..self.nr_columns()).map(|j| self.column_label(j)).collect::<Vec<_>>();

        let row_counter_width = "cost".len().max(self.nr_constraints.to_string().len());
        let column_width = labels.iter().enumerate()
            .map(|(j, label)| {
                cells.iter().map(|row| row[j].len())
                    .chain(iter::once(label.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect::<Vec<_>>();
        let total_width = row_counter_width + 2 + column_width.iter().map(|width| 1 + width).sum::<usize>();

        // Column labels
        write!(f, "{0:>width$} |", "", width = row_counter_width)?;
        for (label, width) in labels.iter().zip(&column_width) {
            write!(f, " {0:^width$}", label, width = *width)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", "-".repeat(total_width))?;

        for (i, row) in cells.iter().enumerate() {
            let counter = if i == 0 { "cost".to_string() } else { (i - 1).to_string() };
            write!(f, "{0:>width$} |", counter, width = row_counter_width)?;
            for (value, width) in row.iter().zip(&column_width) {
                write!(f, " {0:^width$}", value, width = *width)?;
            }
            writeln!(f)?;

            if i == 0 {
                writeln!(f, "{}", "-".repeat(total_width))?;
            }
        }
        writeln!(f)?;

        writeln!(f, "=== Basis Columns ===")?;
        let basis = self.basis.iter().enumerate()
            .map(|(row, &column)| (row, self.column_label(column)))
            .collect::<Vec<_>>();
        writeln!(f, "{:?}", basis)
    }
}
