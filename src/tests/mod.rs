//! # Integration tests that require a look inside the crate.
//!
//! Convention for function names:
//!
//! * `const PROBLEM_LITERAL_STRING`
//! * `fn problem()`
//! * `fn artificial_tableau_form()`
//! * `fn tableau_form()`
//! * `fn output()`
pub mod problem_5;
