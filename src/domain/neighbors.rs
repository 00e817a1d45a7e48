//! Neighbor counting and candidate enumeration over a sparse set.
//!
//! Neighbor offsets that would overflow i64 on either axis are skipped,
//! never counted and never reported as candidates.

use super::{Cell, CellSet};
use rayon::prelude::*;

/// Count how many of the neighbors of `cell` are in `live` (0..=8)
pub fn count_living_neighbors(live: &CellSet, cell: Cell) -> u8 {
    cell.neighbors()
        .filter(|&neighbor| live.contains(neighbor))
        .count() as u8
}

/// Neighbors of `cell` that are not in `live`
fn dead_neighbors(live: &CellSet, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
    cell.neighbors().filter(move |&neighbor| !live.contains(neighbor))
}

/// Set of dead cells adjacent to `cell` (0 to 8 elements)
pub fn dead_neighbors_of(live: &CellSet, cell: Cell) -> CellSet {
    dead_neighbors(live, cell).collect()
}

/// Every dead cell adjacent to at least one live cell, each exactly once.
/// This is the only place a new cell can be born.
pub fn all_dead_neighbors(live: &CellSet) -> CellSet {
    live.iter()
        .flat_map(|&cell| dead_neighbors(live, cell))
        .collect()
}

/// Parallel version of [`all_dead_neighbors`]
pub fn all_dead_neighbors_parallel(live: &CellSet) -> CellSet {
    live.par_iter()
        .flat_map_iter(|&cell| dead_neighbors(live, cell))
        .collect()
}
