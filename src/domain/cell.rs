use std::fmt;

/// Offsets of the 8 cells surrounding a cell (Moore neighborhood).
pub const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Cell is a coordinate on the unbounded plane.
/// Cells are plain values: equal coordinates mean the same cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Cell {
    x: i64,
    y: i64,
}

impl Cell {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub const fn x(self) -> i64 {
        self.x
    }

    pub const fn y(self) -> i64 {
        self.y
    }

    /// Shift by `(dx, dy)`, or `None` if either axis leaves the i64 range
    #[inline]
    pub fn offset(self, dx: i64, dy: i64) -> Option<Self> {
        Some(Self::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }

    /// Iterate the neighbors that exist inside the coordinate range.
    /// Cells on the i64 boundary yield fewer than 8.
    pub fn neighbors(self) -> impl Iterator<Item = Cell> {
        NEIGHBOR_OFFSETS
            .into_iter()
            .filter_map(move |(dx, dy)| self.offset(dx, dy))
    }
}

impl From<(i64, i64)> for Cell {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_structural() {
        assert_eq!(Cell::new(3, -4), Cell::from((3, -4)));
        assert_ne!(Cell::new(3, -4), Cell::new(-4, 3));
    }

    #[test]
    fn test_interior_cell_has_eight_neighbors() {
        let neighbors: Vec<_> = Cell::new(0, 0).neighbors().collect();
        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&Cell::new(0, 0)));
        assert!(neighbors.contains(&Cell::new(-1, -1)));
        assert!(neighbors.contains(&Cell::new(1, 1)));
    }

    #[test]
    fn test_offset_overflow_is_none() {
        assert_eq!(Cell::new(i64::MAX, 0).offset(1, 0), None);
        assert_eq!(Cell::new(0, i64::MIN).offset(0, -1), None);
        assert_eq!(
            Cell::new(i64::MAX, 0).offset(-1, 0),
            Some(Cell::new(i64::MAX - 1, 0))
        );
    }

    #[test]
    fn test_corner_cells_have_three_neighbors() {
        assert_eq!(Cell::new(i64::MAX, i64::MAX).neighbors().count(), 3);
        assert_eq!(Cell::new(i64::MIN, i64::MIN).neighbors().count(), 3);
        assert_eq!(Cell::new(i64::MIN, 0).neighbors().count(), 5);
    }

    #[test]
    fn test_display() {
        assert_eq!(Cell::new(-7, 12).to_string(), "-7 12");
    }
}
