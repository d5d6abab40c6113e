//! # Linear algebra primitives
//!
//! Dense storage for the constraint matrix and the simplex tableau.
pub mod matrix;
