//! Algorithm enum for selecting the stepping implementation.
//!
//! Both variants evaluate the same pure functions over a read-only
//! snapshot and produce identical generations.

use super::CellSet;
use super::stepper;

/// Available stepping algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Single-threaded iteration over the set
    #[default]
    Serial,
    /// Per-cell counts spread over the rayon thread pool
    Parallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Serial, Algorithm::Parallel]
    }

    /// Display name for logs and the benchmark table
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Serial",
            Algorithm::Parallel => "Parallel",
        }
    }

    /// Live cells that stay alive
    pub fn survivors(&self, live: &CellSet) -> CellSet {
        match self {
            Algorithm::Serial => stepper::survivors(live),
            Algorithm::Parallel => stepper::survivors_parallel(live),
        }
    }

    /// Dead cells that come alive
    pub fn spawns(&self, live: &CellSet) -> CellSet {
        match self {
            Algorithm::Serial => stepper::spawns(live),
            Algorithm::Parallel => stepper::spawns_parallel(live),
        }
    }

    /// Next generation
    pub fn step(&self, live: &CellSet) -> CellSet {
        match self {
            Algorithm::Serial => stepper::step(live),
            Algorithm::Parallel => stepper::step_parallel(live),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::patterns::presets;

    #[test]
    fn test_default_is_serial() {
        assert_eq!(Algorithm::default(), Algorithm::Serial);
    }

    #[test]
    fn test_names_are_unique() {
        let names: Vec<_> = Algorithm::all().iter().map(|a| a.name()).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn test_all_algorithms_agree() {
        let live = presets::acorn().cells;
        let expected = stepper::step(&live);
        for algorithm in Algorithm::all() {
            assert_eq!(algorithm.step(&live), expected, "{}", algorithm.name());
            assert_eq!(
                stepper::merge(algorithm.survivors(&live), algorithm.spawns(&live)),
                expected,
            );
        }
    }
}
