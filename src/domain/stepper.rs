//! Generation stepping over a sparse live-cell set.
//!
//! Survivors and spawns are both computed from the same input snapshot,
//! so every cell sees the previous generation only. The input is never
//! mutated; each step returns a freshly owned set.

use super::neighbors::{all_dead_neighbors, all_dead_neighbors_parallel, count_living_neighbors};
use super::rules::{spawns as is_born, survives};
use super::CellSet;
use rayon::prelude::*;

/// Live cells with 2 or 3 living neighbors
pub fn survivors(live: &CellSet) -> CellSet {
    live.iter()
        .copied()
        .filter(|&cell| survives(count_living_neighbors(live, cell)))
        .collect()
}

/// Dead cells adjacent to the live set with exactly 3 living neighbors
pub fn spawns(live: &CellSet) -> CellSet {
    all_dead_neighbors(live)
        .into_iter()
        .filter(|&cell| is_born(count_living_neighbors(live, cell)))
        .collect()
}

/// Parallel version of [`survivors`]
pub fn survivors_parallel(live: &CellSet) -> CellSet {
    live.par_iter()
        .copied()
        .filter(|&cell| survives(count_living_neighbors(live, cell)))
        .collect()
}

/// Parallel version of [`spawns`]
pub fn spawns_parallel(live: &CellSet) -> CellSet {
    all_dead_neighbors_parallel(live)
        .par_iter()
        .copied()
        .filter(|&cell| is_born(count_living_neighbors(live, cell)))
        .collect()
}

/// Combine the two halves of a step into the next generation.
/// Survivors are live and spawns are dead in the same snapshot, so the
/// sets never overlap.
pub fn merge(survivors: CellSet, spawns: CellSet) -> CellSet {
    debug_assert!(survivors.is_disjoint(&spawns));
    survivors.union(spawns)
}

/// Compute the next generation
pub fn step(live: &CellSet) -> CellSet {
    merge(survivors(live), spawns(live))
}

/// Parallel evolution using rayon for large populations
pub fn step_parallel(live: &CellSet) -> CellSet {
    let (survivors, spawns) = rayon::join(|| survivors_parallel(live), || spawns_parallel(live));
    merge(survivors, spawns)
}
