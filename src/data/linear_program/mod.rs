//! # Representing linear programs
//!
//! A linear program in standard inequality form:
//!
//! ```text
//! maximize    c^T x
//! subject to  A x <= b
//!             x >= 0
//! ```
//!
//! with `A` of size `n x m`. The representation is validated once, at construction, so that the
//! algorithms never have to deal with inconsistent dimensions.
use std::error::Error;
use std::fmt;

use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::number_types::traits::Scalar;

pub mod solution;

/// A validated linear program `max c^T x s.t. Ax <= b, x >= 0`.
#[derive(Clone, Debug, PartialEq)]
pub struct Problem<F> {
    /// Matrix `A`, `n` rows and `m` columns.
    constraints: DenseMatrix<F>,
    /// Right-hand side `b`, length `n`.
    b: Vec<F>,
    /// Objective coefficients `c`, length `m`.
    c: Vec<F>,
}

impl<F: Scalar> Problem<F> {
    /// Create a new linear program.
    ///
    /// # Arguments
    ///
    /// * `nr_constraints`: Declared number of constraints `n`.
    /// * `nr_variables`: Declared number of variables `m`.
    /// * `constraints`: Rows of `A`.
    /// * `b`: Right-hand side.
    /// * `c`: Objective coefficients, to be maximized.
    ///
    /// # Errors
    ///
    /// A `ShapeError` if any of the supplied data doesn't match the declared dimensions, or if a
    /// value is not finite.
    pub fn new(
        nr_constraints: usize,
        nr_variables: usize,
        constraints: Vec<Vec<F>>,
        b: Vec<F>,
        c: Vec<F>,
    ) -> Result<Self, ShapeError> {
        if c.len() != nr_variables {
            return Err(ShapeError::new(format!(
                "expected {} objective coefficients, got {}", nr_variables, c.len(),
            )));
        }
        if constraints.len() != nr_constraints {
            return Err(ShapeError::new(format!(
                "expected {} constraint rows, got {}", nr_constraints, constraints.len(),
            )));
        }
        if b.len() != nr_constraints {
            return Err(ShapeError::new(format!(
                "expected {} right-hand side values, got {}", nr_constraints, b.len(),
            )));
        }
        if let Some((i, row)) = constraints.iter().enumerate().find(|(_, row)| row.len() != nr_variables) {
            return Err(ShapeError::new(format!(
                "constraint row {} has {} coefficients, expected {}", i, row.len(), nr_variables,
            )));
        }

        let all_finite = constraints.iter().flatten()
            .chain(b.iter())
            .chain(c.iter())
            .all(|value| value.is_finite());
        if !all_finite {
            return Err(ShapeError::new("all coefficients need to be finite"));
        }

        Ok(Self {
            constraints: DenseMatrix::from_data(constraints, nr_variables),
            b,
            c,
        })
    }

    /// Number of constraints `n`.
    pub fn nr_constraints(&self) -> usize {
        self.b.len()
    }

    /// Number of variables `m`.
    pub fn nr_variables(&self) -> usize {
        self.c.len()
    }

    /// The constraint matrix `A`.
    pub fn constraints(&self) -> &DenseMatrix<F> {
        &self.constraints
    }

    /// Row `i` of `A`.
    pub fn constraint(&self, i: usize) -> &[F] {
        self.constraints.row(i)
    }

    /// The right-hand side `b`.
    pub fn b(&self) -> &[F] {
        &self.b
    }

    /// The objective coefficients `c`.
    pub fn c(&self) -> &[F] {
        &self.c
    }
}

/// Created when the data of a linear program doesn't match its declared dimensions.
///
/// Checked before any pivoting happens.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShapeError {
    description: String,
}

impl ShapeError {
    /// Wrap a text in a `ShapeError`.
    ///
    /// # Arguments
    ///
    /// * `description`: A human-readable text meant for the end user.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into() }
    }
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ShapeError: {}", self.description)
    }
}

impl Error for ShapeError {}
