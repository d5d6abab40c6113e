//! # A linear program solver
//!
//! Linear programs of the form `max c^T x s.t. Ax <= b, x >= 0` are solved using the two phase
//! Simplex Method on a dense tableau, as described in the book Combinatorial Optimization by
//! Christos H. Papadimitriou and Kenneth Steiglitz.
//!
//! Every result comes with a certificate: dual multipliers for an optimum, a ray for an unbounded
//! problem and Farkas multipliers for an infeasible one.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;

#[cfg(test)]
mod tests;
