//! # Matrix implementations
//!
//! A dense, row major matrix. Rows are the unit of work for the simplex tableau: they get scaled
//! and added to each other, so they are stored contiguously.
use std::slice::Iter;

use crate::data::number_types::traits::Scalar;

/// Uses a `Vec<Vec<F>>` as underlying data structure. Dimensions are fixed at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix<F> {
    data: Vec<Vec<F>>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F: Scalar> DenseMatrix<F> {
    /// Create a `DenseMatrix` from the provided rows.
    ///
    /// # Arguments
    ///
    /// * `data`: Rows, each of length `nr_columns`.
    /// * `nr_columns`: Number of columns, needed explicitly because there might be no rows.
    pub fn from_data(data: Vec<Vec<F>>, nr_columns: usize) -> Self {
        debug_assert!(data.iter().all(|row| row.len() == nr_columns));

        let nr_rows = data.len();
        Self { data, nr_rows, nr_columns }
    }

    /// Create a dense matrix of zeros of dimension `rows` x `columns`.
    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self::from_data(vec![vec![F::zero(); columns]; rows], columns)
    }

    /// Get the value at coordinate (`i`, `j`).
    pub fn get_value(&self, i: usize, j: usize) -> F {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j]
    }

    /// Set the value at coordinate (`i`, `j`) to `value`.
    pub fn set_value(&mut self, i: usize, j: usize, value: F) {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j] = value;
    }

    /// Get all values in row `i` of this matrix.
    pub fn row(&self, i: usize) -> &[F] {
        debug_assert!(i < self.nr_rows);

        &self.data[i]
    }

    /// Iterate over the rows of this matrix.
    pub fn rows(&self) -> Iter<'_, Vec<F>> {
        self.data.iter()
    }

    /// Get all values in column `j` of this matrix.
    pub fn column(&self, j: usize) -> impl Iterator<Item = F> + '_ {
        debug_assert!(j < self.nr_columns);

        self.data.iter().map(move |row| row[j])
    }

    /// Multiply row `i` with a factor `factor`.
    pub fn multiply_row(&mut self, i: usize, factor: F) {
        debug_assert!(i < self.nr_rows);

        for value in &mut self.data[i] {
            *value = *value * factor;
        }
    }

    /// Add a multiple of row `read_row` to row `write_row`.
    ///
    /// # Arguments
    ///
    /// * `read_row`: Row that is read, not changed.
    /// * `write_row`: Row that gets `factor` times `read_row` added to it. Different from
    /// `read_row`.
    /// * `factor`: Multiple of `read_row` to add.
    pub fn mul_add_rows(&mut self, read_row: usize, write_row: usize, factor: F) {
        debug_assert!(read_row < self.nr_rows);
        debug_assert!(write_row < self.nr_rows);
        debug_assert_ne!(read_row, write_row);

        let (read, write) = if read_row < write_row {
            let (head, tail) = self.data.split_at_mut(write_row);
            (&head[read_row], &mut tail[0])
        } else {
            let (head, tail) = self.data.split_at_mut(read_row);
            (&tail[0], &mut head[write_row])
        };

        for (target, &value) in write.iter_mut().zip(read.iter()) {
            *target = *target + factor * value;
        }
    }

    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_algebra::matrix::DenseMatrix;

    fn matrix() -> DenseMatrix<f64> {
        DenseMatrix::from_data(vec![
            vec![1f64, 2f64, 0f64],
            vec![0f64, 5f64, 6f64],
            vec![7f64, 0f64, 9f64],
        ], 3)
    }

    #[test]
    fn zeros() {
        let zeros = DenseMatrix::<f64>::zeros(2, 3);
        assert_eq!(zeros.nr_rows(), 2);
        assert_eq!(zeros.nr_columns(), 3);
        assert!(zeros.rows().flatten().all(|&value| value == 0f64));
    }

    #[test]
    fn no_rows() {
        let empty = DenseMatrix::<f64>::zeros(0, 4);
        assert_eq!(empty.nr_rows(), 0);
        assert_eq!(empty.nr_columns(), 4);
        assert_eq!(empty.column(2).count(), 0);
    }

    #[test]
    fn multiply_row() {
        let mut m = matrix();
        m.multiply_row(1, 0.5f64);
        assert_eq!(m.row(1), &[0f64, 2.5f64, 3f64]);
        assert_eq!(m.row(0), &[1f64, 2f64, 0f64]);
    }

    #[test]
    fn mul_add_rows() {
        let mut m = matrix();
        m.mul_add_rows(0, 2, -7f64);
        assert_eq!(m.row(2), &[0f64, -14f64, 9f64]);

        m.mul_add_rows(2, 1, 1f64);
        assert_eq!(m.row(1), &[0f64, -9f64, 15f64]);
        assert_eq!(m.row(0), &[1f64, 2f64, 0f64]);
    }

    #[test]
    fn column() {
        let m = matrix();
        assert_eq!(m.column(2).collect::<Vec<_>>(), vec![0f64, 6f64, 9f64]);
        assert_eq!(m.rows().count(), 3);
    }
}
