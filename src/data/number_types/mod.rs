//! # Number types
//!
//! The tableau is dense and solved with floating point numbers. Rather than hard coding `f64`,
//! algorithms are written against the `Scalar` trait, such that `f32` can be used as well.
//!
//! Floating point computations accumulate rounding errors, so every comparison against zero goes
//! through a single `Tolerance`.
pub mod tolerance;
pub mod traits;
