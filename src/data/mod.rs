//! # Storing of linear programs in memory
//!
//! This module provides the data structures used to represent linear programs in memory. Data
//! structures that only make sense inside an algorithm, like the simplex tableau, live in
//! `algorithm::two_phase` instead.

pub mod linear_algebra;
pub mod linear_program;
pub mod number_types;
