mod cell;
mod cell_set;
pub mod rules;
mod algorithm;
pub mod neighbors;
pub mod patterns;
pub mod stepper;

pub use cell::{Cell, NEIGHBOR_OFFSETS};
pub use cell_set::CellSet;
pub use neighbors::{all_dead_neighbors, count_living_neighbors, dead_neighbors_of};
pub use patterns::{Pattern, presets, random_soup};
pub use stepper::step;
pub use algorithm::Algorithm;
