//! # Error reporting for reading of linear program files
//!
//! A collection of enums and structures describing any problems encountered during reading and
//! parsing.
use std::error::Error;
use std::fmt;
use std::io;

use crate::data::linear_program::ShapeError;

/// An `ImportError` is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Debug)]
pub enum ImportError {
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    IO(io::Error),
    /// Contents of the file could not be parsed into numbers.
    ///
    /// # Note
    ///
    /// If the numbers don't fit the declared dimensions, that will not be represented with this
    /// error. This variant should only be created for syntactically incorrect files.
    Parse(ParseError),
    /// The numbers in the file don't describe a linear program of the declared size.
    Shape(ShapeError),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ImportError::IO(error) => error.fmt(f),
            ImportError::Parse(error) => error.fmt(f),
            ImportError::Shape(error) => error.fmt(f),
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ImportError::IO(error) => Some(error),
            ImportError::Parse(error) => Some(error),
            ImportError::Shape(error) => Some(error),
        }
    }
}

impl From<io::Error> for ImportError {
    fn from(error: io::Error) -> Self {
        ImportError::IO(error)
    }
}

impl From<ParseError> for ImportError {
    fn from(error: ParseError) -> Self {
        ImportError::Parse(error)
    }
}

impl From<ShapeError> for ImportError {
    fn from(error: ShapeError) -> Self {
        ImportError::Shape(error)
    }
}

/// A `ParseError` represents all errors encountered during parsing.
///
/// It may recursively hold more ParseErrors to provide more detail. At the end of this chain, there
/// may be a file location containing a line number and line, at which the error was caused.
#[derive(Debug, Eq, PartialEq)]
pub struct ParseError {
    description: String,
    source: Option<ParseErrorSource>,
}

/// A `ParseErrorSource` can be used with a `ParseError` to describe its cause.
///
/// It can be either a file line number and line contents, or another `ParseError` with its own
/// description and optionally, a cause.
#[derive(Debug, Eq, PartialEq)]
enum ParseErrorSource {
    FileLocation(usize, String),
    Nested(Box<ParseError>),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ParseError: {}", self.description)?;
        if let Some(ParseErrorSource::FileLocation(line_number, line)) = &self.source {
            write!(f, " (line {}: \"{}\")", line_number, line)?;
        }

        Ok(())
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        if let Some(ParseErrorSource::Nested(error)) = &self.source {
            Some(error.as_ref())
        } else {
            None
        }
    }
}

impl ParseError {
    /// Create a new `ParseError` with only a description.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    pub fn new(description: impl Into<String>) -> ParseError {
        ParseError { description: description.into(), source: None }
    }

    /// Create a new `ParseError` instance with a `FileLocation` as a cause.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    /// * `file_location`: A reference to a line number and line that caused the error.
    pub fn with_file_location(
        description: impl Into<String>,
        file_location: FileLocation,
    ) -> ParseError {
        let (line_number, line) = file_location;
        ParseError {
            description: description.into(),
            source: Some(ParseErrorSource::FileLocation(line_number, line.to_string())),
        }
    }

    /// Wrap a new `ParseError` around an existing one.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    /// * `parse_error`: What caused this `ParseError`.
    pub fn with_cause(description: impl Into<String>, parse_error: ParseError) -> ParseError {
        ParseError {
            description: description.into(),
            source: Some(ParseErrorSource::Nested(Box::new(parse_error))),
        }
    }

    /// Line number at which the error was caused, if known.
    ///
    /// Follows nested errors down to the original cause.
    pub fn line_number(&self) -> Option<usize> {
        match &self.source {
            Some(ParseErrorSource::FileLocation(line_number, _)) => Some(*line_number),
            Some(ParseErrorSource::Nested(error)) => error.line_number(),
            None => None,
        }
    }
}

/// A `FileLocation` references a line in the file by its line number, counting from one, and
/// contains a reference to the line itself.
pub(super) type FileLocation<'a> = (usize, &'a str);

#[cfg(test)]
mod test {
    use std::error::Error;

    use crate::io::error::ParseError;

    #[test]
    fn display() {
        let error = ParseError::with_file_location("expected a number", (3, "1 x 2"));
        assert_eq!(error.to_string(), "ParseError: expected a number (line 3: \"1 x 2\")");
        assert_eq!(error.line_number(), Some(3));
        assert!(error.source().is_none());
    }

    #[test]
    fn nested() {
        let cause = ParseError::with_file_location("expected a number", (2, "a"));
        let error = ParseError::with_cause("objective function", cause);

        assert_eq!(error.to_string(), "ParseError: objective function");
        assert_eq!(error.line_number(), Some(2));
        assert_eq!(error.source().map(|source| source.to_string()), Some("ParseError: expected a number (line 2: \"a\")".to_string()));
    }
}
