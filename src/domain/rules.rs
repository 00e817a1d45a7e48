//! Conway's Game of Life (B3/S23) transition rules.
//!
//! Rules are evaluated against a snapshot: the counts passed in here
//! always come from the previous generation.

/// A live cell with 2 or 3 living neighbors stays alive
pub const fn survives(neighbors: u8) -> bool {
    matches!(neighbors, 2 | 3)
}

/// A dead cell with exactly 3 living neighbors is born
pub const fn spawns(neighbors: u8) -> bool {
    neighbors == 3
}
