//! Conway's Game of Life on the unbounded i64 plane.
//!
//! Only live cells are stored. Each generation is computed from a
//! read-only snapshot of the previous one and returned as a new set.

// Domain layer - pure stepping logic, no I/O
pub mod domain;

// Application layer - simulation state and run coordination
pub mod application;

// Infrastructure layer - input, output, diagnostics
pub mod error;
pub mod input;
pub mod logging;
pub mod output;

// Re-exports for convenience
pub use application::{Config, Runner, Simulation, execute};
pub use domain::{Algorithm, Cell, CellSet, all_dead_neighbors, count_living_neighbors, dead_neighbors_of, step};
pub use error::{Axis, FormatError, LoadError};
pub use input::InputSource;
