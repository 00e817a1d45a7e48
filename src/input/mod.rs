//! Loading the initial generation.

pub mod life106;

use crate::domain::CellSet;
use crate::error::LoadError;
use std::fmt;
use std::fs;
use std::io::{self, BufRead, IsTerminal};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File picked up from the working directory when no input is given
pub const DEFAULT_INPUT_FILE: &str = "data.life";

/// Where the initial pattern comes from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSource {
    /// Read the whole file
    File(PathBuf),
    /// Read standard input until a blank line or end of stream
    Interactive,
}

impl InputSource {
    /// Use `data.life` in `dir` if it exists, standard input otherwise
    pub fn detect(dir: &Path) -> Self {
        let candidate = dir.join(DEFAULT_INPUT_FILE);
        if candidate.is_file() {
            debug!(path = %candidate.display(), "found default input file");
            Self::File(candidate)
        } else {
            debug!("no {DEFAULT_INPUT_FILE} in {}, reading stdin", dir.display());
            Self::Interactive
        }
    }

    /// Raw lines of the source
    pub fn read_lines(&self) -> Result<Vec<String>, LoadError> {
        match self {
            Self::File(path) => {
                let text = fs::read_to_string(path)?;
                Ok(text.lines().map(str::to_owned).collect())
            }
            Self::Interactive => {
                let stdin = io::stdin();
                if stdin.is_terminal() {
                    eprintln!("Enter a {} pattern, finish with an empty line:", life106::HEADER);
                }
                Ok(read_interactive(stdin.lock())?)
            }
        }
    }

    /// Read and parse the source into the first generation
    pub fn load(&self) -> Result<CellSet, LoadError> {
        let lines = self.read_lines()?;
        let cells = life106::parse(&lines)?;
        info!(source = %self, lines = lines.len(), population = cells.len(), "loaded pattern");
        Ok(cells)
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Interactive => f.write_str("standard input"),
        }
    }
}

/// Collect lines until the first blank line or end of stream
pub fn read_interactive<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;
    use crate::error::FormatError;
    use std::io::Cursor;

    #[test]
    fn test_interactive_stops_at_blank_line() {
        let input = Cursor::new("#Life 1.06\n1 2\n\n3 4\n");
        let lines = read_interactive(input).unwrap();
        assert_eq!(lines, vec!["#Life 1.06", "1 2"]);
    }

    #[test]
    fn test_interactive_stops_at_eof() {
        let input = Cursor::new("#Life 1.06\n1 2\n3 4");
        let lines = read_interactive(input).unwrap();
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_detect_prefers_data_file() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(InputSource::detect(dir.path()), InputSource::Interactive);

        let path = dir.path().join(DEFAULT_INPUT_FILE);
        fs::write(&path, "#Life 1.06\n0 0\n").unwrap();
        assert_eq!(InputSource::detect(dir.path()), InputSource::File(path));
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("glider.life");
        fs::write(&path, "#Life 1.06\n1 0\n2 1\n0 2\n1 2\n2 2\n").unwrap();

        let cells = InputSource::File(path).load().unwrap();
        assert_eq!(cells.len(), 5);
        assert!(cells.contains(Cell::new(2, 1)));
    }

    #[test]
    fn test_load_reports_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.life");
        fs::write(&path, "#Life 1.06\n1 x\n").unwrap();

        let err = InputSource::File(path).load().unwrap_err();
        assert!(matches!(
            err,
            LoadError::Format(FormatError::NotNumeric { line: 2, .. })
        ));
    }

    #[test]
    fn test_display_names_the_source() {
        assert_eq!(InputSource::Interactive.to_string(), "standard input");
        let path = PathBuf::from("patterns").join("glider.life");
        assert_eq!(InputSource::File(path.clone()).to_string(), path.display().to_string());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = InputSource::File(dir.path().join("nope.life")).load().unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
