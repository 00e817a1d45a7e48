//! Output sink for the final generation.

use crate::domain::{Cell, CellSet};
use crate::input::life106::HEADER;
use std::io::{self, Write};

/// How the final generation is written
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutputOptions {
    /// Order cells by x, then y, instead of set order
    pub sort: bool,
    /// Emit the `#Life 1.06` header so the output can be loaded again
    pub header: bool,
}

/// Write one `X Y` line per live cell
pub fn write_cells<W: Write>(out: &mut W, cells: &CellSet, options: OutputOptions) -> io::Result<()> {
    if options.header {
        writeln!(out, "{HEADER}")?;
    }

    if options.sort {
        write_lines(out, cells.sorted().iter())?;
    } else {
        write_lines(out, cells.iter())?;
    }
    out.flush()
}

fn write_lines<'a, W: Write>(out: &mut W, cells: impl Iterator<Item = &'a Cell>) -> io::Result<()> {
    for cell in cells {
        writeln!(out, "{cell}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;
    use crate::input::life106;

    fn render(cells: &CellSet, options: OutputOptions) -> String {
        let mut buf = Vec::new();
        write_cells(&mut buf, cells, options).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_sorted_lines() {
        let cells = presets::blinker().cells;
        let text = render(&cells, OutputOptions { sort: true, header: false });
        assert_eq!(text, "0 -1\n0 0\n0 1\n");
    }

    #[test]
    fn test_unsorted_has_one_line_per_cell() {
        let cells = presets::acorn().cells;
        let text = render(&cells, OutputOptions::default());
        let mut lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), cells.len());

        lines.sort();
        let mut expected: Vec<_> = cells.iter().map(|c| c.to_string()).collect();
        expected.sort();
        assert_eq!(lines, expected);
    }

    #[test]
    fn test_header() {
        let cells = presets::block().cells;
        let text = render(&cells, OutputOptions { sort: true, header: true });
        assert_eq!(text, "#Life 1.06\n0 0\n0 1\n1 0\n1 1\n");
    }

    #[test]
    fn test_header_output_loads_back() {
        let cells = presets::acorn().cells;
        let text = render(&cells, OutputOptions { sort: false, header: true });
        assert_eq!(life106::parse(text.lines()).unwrap(), cells);
    }

    #[test]
    fn test_empty_set_writes_nothing() {
        assert_eq!(render(&CellSet::new(), OutputOptions::default()), "");
    }
}
