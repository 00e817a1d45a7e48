use super::observer::{Phase, StepEvent, StepObserver};
use crate::domain::{Algorithm, CellSet, stepper};
use std::time::Instant;

/// Simulation owns the current generation.
/// Each step replaces the whole live set with a freshly computed one.
#[derive(Clone, Debug)]
pub struct Simulation {
    pub cells: CellSet,
    pub algorithm: Algorithm,
    pub generation: u64,
    pub last_step_time_ms: f32,
}

impl Simulation {
    /// Start at generation 0 with the given live cells
    pub fn new(cells: CellSet) -> Self {
        Self {
            cells,
            algorithm: Algorithm::default(),
            generation: 0,
            last_step_time_ms: 0.0,
        }
    }

    /// Set the stepping algorithm (builder pattern)
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn population(&self) -> usize {
        self.cells.len()
    }

    /// Advance one generation
    pub fn step(mut self) -> Self {
        let start = Instant::now();
        self.cells = self.algorithm.step(&self.cells);
        self.finish_step(start)
    }

    /// Advance one generation, reporting each phase to `observer`
    pub fn step_observed(mut self, observer: &mut dyn StepObserver) -> Self {
        let start = Instant::now();
        let generation = self.generation + 1;

        let survivors = self.algorithm.survivors(&self.cells);
        observer.observe(&StepEvent { generation, phase: Phase::Survivors, cells: &survivors });

        // Spawns read the untouched previous generation
        let spawns = self.algorithm.spawns(&self.cells);
        observer.observe(&StepEvent { generation, phase: Phase::Spawns, cells: &spawns });

        self.cells = stepper::merge(survivors, spawns);
        observer.observe(&StepEvent { generation, phase: Phase::Merged, cells: &self.cells });

        self.finish_step(start)
    }

    fn finish_step(mut self, start: Instant) -> Self {
        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.generation += 1;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Cell, presets};

    #[test]
    fn test_step_counts_generations() {
        let sim = Simulation::new(presets::block().cells).step().step();
        assert_eq!(sim.generation, 2);
        assert_eq!(sim.population(), 4);
    }

    #[test]
    fn test_observed_step_reports_phases_in_order() {
        let mut events = Vec::new();
        let mut observer = |event: &StepEvent<'_>| {
            events.push((event.generation, event.phase, event.cells.clone()));
        };

        let sim = Simulation::new(presets::blinker().cells).step_observed(&mut observer);

        let phases: Vec<_> = events.iter().map(|(g, p, _)| (*g, *p)).collect();
        assert_eq!(
            phases,
            vec![(1, Phase::Survivors), (1, Phase::Spawns), (1, Phase::Merged)]
        );

        // Only the center survives, the two side cells are born
        let survivors: CellSet = [Cell::new(0, 0)].into_iter().collect();
        let spawns: CellSet = [Cell::new(-1, 0), Cell::new(1, 0)].into_iter().collect();
        assert_eq!(events[0].2, survivors);
        assert_eq!(events[1].2, spawns);
        assert_eq!(events[2].2, sim.cells);
    }

    #[test]
    fn test_observed_matches_plain_step() {
        let cells = presets::r_pentomino().cells;
        let mut plain = Simulation::new(cells.clone());
        let mut observed = Simulation::new(cells).with_algorithm(Algorithm::Parallel);
        let mut ignore = |_: &StepEvent<'_>| {};

        for _ in 0..20 {
            plain = plain.step();
            observed = observed.step_observed(&mut ignore);
        }
        assert_eq!(plain.cells, observed.cells);
        assert_eq!(plain.generation, observed.generation);
    }
}
