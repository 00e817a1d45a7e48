use super::Simulation;
use super::observer::StepObserver;
use crate::domain::{Algorithm, CellSet};
use std::time::Instant;
use tracing::{debug, info};

/// Generations computed when no count is configured
pub const DEFAULT_GENERATIONS: u64 = 10;

/// Runner drives a simulation through a fixed number of generations.
/// It never stops early: extinct or stable patterns keep stepping.
#[derive(Clone, Copy, Debug)]
pub struct Runner {
    generations: u64,
    algorithm: Algorithm,
}

impl Default for Runner {
    fn default() -> Self {
        Self::new(DEFAULT_GENERATIONS)
    }
}

impl Runner {
    pub fn new(generations: u64) -> Self {
        Self {
            generations,
            algorithm: Algorithm::default(),
        }
    }

    /// Set the stepping algorithm (builder pattern)
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn generations(&self) -> u64 {
        self.generations
    }

    /// Step `initial` forward and return the final generation
    pub fn run(&self, initial: CellSet) -> CellSet {
        self.drive(initial, None)
    }

    /// Like [`Runner::run`], reporting every phase to `observer`
    pub fn run_observed(&self, initial: CellSet, observer: &mut dyn StepObserver) -> CellSet {
        self.drive(initial, Some(observer))
    }

    fn drive(&self, initial: CellSet, mut observer: Option<&mut dyn StepObserver>) -> CellSet {
        let start = Instant::now();
        info!(
            generations = self.generations,
            algorithm = self.algorithm.name(),
            population = initial.len(),
            "starting run"
        );

        let mut sim = Simulation::new(initial).with_algorithm(self.algorithm);
        for _ in 0..self.generations {
            sim = match observer.as_deref_mut() {
                Some(observer) => sim.step_observed(observer),
                None => sim.step(),
            };
            debug!(
                generation = sim.generation,
                population = sim.population(),
                step_ms = sim.last_step_time_ms,
                "generation done"
            );
        }

        info!(
            population = sim.population(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "run finished"
        );
        sim.cells
    }
}
