//! # Parsing problem files
//!
//! The format is line oriented:
//!
//! ```text
//! n m
//! c_1 ... c_m
//! a_11 ... a_1m b_1
//! ...
//! a_n1 ... a_nm b_n
//! ```
//!
//! Values are separated by whitespace and empty lines are skipped. Only the syntax is checked
//! here; whether the numbers fit the declared dimensions is checked when the `Problem` is created.
use crate::data::linear_program::Problem;
use crate::data::number_types::traits::Scalar;
use crate::io::error::{FileLocation, ImportError, ParseError};

/// Parse a problem from the contents of a problem file.
///
/// # Arguments
///
/// * `program`: Entire file contents.
///
/// # Errors
///
/// A `Parse` error when the header is missing or malformed, a value is not a number or there are
/// more lines than the header announces. A `Shape` error when the numbers don't match the
/// dimensions in the header.
pub fn parse<F: Scalar>(program: &str) -> Result<Problem<F>, ImportError> {
    let mut lines = into_lines(program);

    let (nr_constraints, nr_variables) = parse_header(lines.next())
        .map_err(|error| ParseError::with_cause("Error while reading the dimensions.", error))?;

    // An empty objective line is skipped like any other empty line
    let c = if nr_variables == 0 {
        Vec::new()
    } else {
        match lines.next() {
            Some(location) => parse_values(location)
                .map_err(|error| ParseError::with_cause("Error while reading the objective function.", error))?,
            None => return Err(ParseError::new("File ended before the objective function.").into()),
        }
    };

    let mut constraints = Vec::with_capacity(nr_constraints);
    let mut b = Vec::with_capacity(nr_constraints);
    for (i, location) in lines.by_ref().take(nr_constraints).enumerate() {
        let mut row = parse_values(location)
            .map_err(|error| ParseError::with_cause(format!("Error while reading constraint {}.", i), error))?;
        let value = row.pop()
            .ok_or_else(|| ParseError::with_file_location("Expected a right-hand side value.", location))?;
        b.push(value);
        constraints.push(row);
    }

    if let Some(location) = lines.next() {
        return Err(ParseError::with_file_location(
            "File has nonempty lines after the last constraint.", location,
        ).into());
    }

    Ok(Problem::new(nr_constraints, nr_variables, constraints, b, c)?)
}

/// Split a problem into numbered lines, skipping the empty ones.
///
/// # Return value
///
/// An iterator over lines, numbered from one.
fn into_lines(text: &str) -> impl Iterator<Item = FileLocation<'_>> {
    text.lines()
        .enumerate()
        .map(|(number, line)| (number + 1, line)) // Count from 1
        .filter(|(_, line)| !line.trim().is_empty())
}

/// Read the number of constraints and variables.
fn parse_header(location: Option<FileLocation>) -> Result<(usize, usize), ParseError> {
    let location = location.ok_or_else(|| ParseError::new("File is empty."))?;
    let (_, line) = location;

    let mut parts = line.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(n), Some(m), None) => {
            let parse_dimension = |text: &str| text.parse::<usize>().map_err(|_| ParseError::with_file_location(
                format!("Dimension \"{}\" is not a non negative integer.", text), location,
            ));
            Ok((parse_dimension(n)?, parse_dimension(m)?))
        },
        _ => Err(ParseError::with_file_location("Expected exactly two dimensions.", location)),
    }
}

/// Read all values on a line.
fn parse_values<F: Scalar>(location: FileLocation) -> Result<Vec<F>, ParseError> {
    let (_, line) = location;

    line.split_whitespace()
        .map(|text| text.parse::<F>().map_err(|_| ParseError::with_file_location(
            format!("Value \"{}\" is not a number.", text), location,
        )))
        .collect()
}
