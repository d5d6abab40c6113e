//! # Reading and writing of linear programs
//!
//! This module provides read functionality for the problem format and write functionality for
//! the result format.
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::data::linear_program::Problem;
use crate::data::number_types::traits::Scalar;

pub use crate::io::error::{ImportError, ParseError};
pub use crate::io::parse::parse;
pub use crate::io::write::{to_string, write};

pub mod error;
pub mod parse;
pub mod write;

/// Import a problem from a file.
///
/// # Errors
///
/// When the file cannot be found or read, or its contents are not a valid problem.
pub fn import<F: Scalar>(file_path: &Path) -> Result<Problem<F>, ImportError> {
    let file = File::open(file_path)?;
    read(file)
}

/// Read a problem from any reader, for example standard input.
///
/// # Errors
///
/// When reading fails, or the contents are not a valid problem.
pub fn read<F: Scalar>(mut reader: impl Read) -> Result<Problem<F>, ImportError> {
    let mut program = String::new();
    reader.read_to_string(&mut program)?;

    parse(&program)
}
