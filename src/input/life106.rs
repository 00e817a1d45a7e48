//! Life 1.06 text format.
//!
//! ```text
//! #Life 1.06
//! 0 -1
//! 0 0
//! 0 1
//! ```
//!
//! One `X Y` pair per line after the header, separated by a single space.

use crate::domain::{Cell, CellSet};
use crate::error::{Axis, FormatError};

/// Required first line of a Life 1.06 document
pub const HEADER: &str = "#Life 1.06";

/// Parse a document into its cell records, in input order.
/// Duplicate coordinates are kept. Fails on the first bad line.
pub fn parse_records<I, S>(lines: I) -> Result<Vec<Cell>, FormatError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut lines = lines
        .into_iter()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line))
        .skip_while(|(_, line)| is_blank(line.as_ref()));

    match lines.next() {
        Some((_, line)) if line.as_ref().trim() == HEADER => {}
        Some((_, line)) => {
            return Err(FormatError::InvalidHeader {
                found: line.as_ref().trim().to_owned(),
            });
        }
        None => return Err(FormatError::InvalidHeader { found: String::new() }),
    }

    let mut cells = Vec::new();
    for (line_no, line) in lines {
        if let Some(cell) = parse_record(line_no, line.as_ref())? {
            cells.push(cell);
        }
    }
    Ok(cells)
}

/// Parse a document straight into a live-cell set
pub fn parse<I, S>(lines: I) -> Result<CellSet, FormatError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Ok(parse_records(lines)?.into_iter().collect())
}

/// Parse one data line. Blank lines yield `None`.
pub fn parse_record(line_no: usize, line: &str) -> Result<Option<Cell>, FormatError> {
    if is_blank(line) {
        return Ok(None);
    }
    let line = line.trim();

    let tokens: Vec<&str> = line.split(' ').collect();
    let [x, y] = tokens.as_slice() else {
        return Err(FormatError::InvalidLine {
            line: line_no,
            content: line.to_owned(),
        });
    };

    let x = parse_coordinate(Axis::X, line_no, x)?;
    let y = parse_coordinate(Axis::Y, line_no, y)?;
    Ok(Some(Cell::new(x, y)))
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn parse_coordinate(axis: Axis, line: usize, token: &str) -> Result<i64, FormatError> {
    token.parse().map_err(|_| FormatError::NotNumeric {
        axis,
        line,
        token: token.to_owned(),
    })
}
