//! Sparse set of cells.
//! Only the coordinates present are stored, so patterns anywhere in the
//! i64 plane cost memory proportional to their population.

use super::Cell;
use rayon::prelude::*;
use std::collections::HashSet;
use std::collections::hash_set;

/// Hash set of cells with O(1) membership.
/// Used both for the live cells of a generation and for candidate pools.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct CellSet {
    cells: HashSet<Cell>,
}

impl CellSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a cell, returning false if it was already present
    pub fn insert(&mut self, cell: Cell) -> bool {
        self.cells.insert(cell)
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate cells in hash order
    pub fn iter(&self) -> hash_set::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Parallel iteration over a read-only snapshot
    pub fn par_iter(&self) -> rayon::collections::hash_set::Iter<'_, Cell> {
        self.cells.par_iter()
    }

    /// Cells ordered by x, then y
    pub fn sorted(&self) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self.cells.iter().copied().collect();
        cells.sort_unstable();
        cells
    }

    /// True if no cell is in both sets
    pub fn is_disjoint(&self, other: &CellSet) -> bool {
        self.cells.is_disjoint(&other.cells)
    }

    /// Consume both sets and return their union
    pub fn union(mut self, other: CellSet) -> CellSet {
        // Extend the larger set to avoid rehashing it
        if self.len() < other.len() {
            return other.union(self);
        }
        self.extend(other);
        self
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<T: IntoIterator<Item = Cell>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl FromParallelIterator<Cell> for CellSet {
    fn from_par_iter<I: IntoParallelIterator<Item = Cell>>(par_iter: I) -> Self {
        Self {
            cells: par_iter.into_par_iter().collect(),
        }
    }
}

impl Extend<Cell> for CellSet {
    fn extend<T: IntoIterator<Item = Cell>>(&mut self, iter: T) {
        self.cells.extend(iter);
    }
}

impl IntoIterator for CellSet {
    type Item = Cell;
    type IntoIter = hash_set::IntoIter<Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a> IntoIterator for &'a CellSet {
    type Item = &'a Cell;
    type IntoIter = hash_set::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
