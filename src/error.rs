//! All kinds of errors in this crate.
//!
//! Only loading can fail. Stepping is infallible.

use std::fmt;
use std::io;
use thiserror::Error;

/// Coordinate field of a data line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("X"),
            Axis::Y => f.write_str("Y"),
        }
    }
}

/// Malformed Life 1.06 input. Line numbers are 1-based.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The first line is not `#Life 1.06`.
    #[error("Invalid header: expected `#Life 1.06`, found {found:?}")]
    InvalidHeader { found: String },
    /// A data line does not hold exactly two tokens.
    #[error("Invalid line {line}: {content:?}")]
    InvalidLine { line: usize, content: String },
    /// A token is not a signed 64-bit integer.
    #[error("{axis} is not numeric on line {line}: {token:?}")]
    NotNumeric {
        axis: Axis,
        line: usize,
        token: String,
    },
}

/// Failure while reading or parsing the initial pattern.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}
