//! Optional hooks into the phases of a step.
//!
//! The domain functions never call observers. [`Simulation`] reports each
//! phase after computing it.
//!
//! [`Simulation`]: super::Simulation

use crate::domain::CellSet;
use std::fmt;
use tracing::{debug, trace};

/// Phase of a single generation step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Live cells that stay alive were computed
    Survivors,
    /// Dead cells that come alive were computed
    Spawns,
    /// Survivors and spawns were merged into the next generation
    Merged,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Survivors => "survivors",
            Phase::Spawns => "spawns",
            Phase::Merged => "merged",
        };
        f.write_str(name)
    }
}

/// What an observer sees after each phase
#[derive(Clone, Copy, Debug)]
pub struct StepEvent<'a> {
    /// Generation being produced, starting at 1
    pub generation: u64,
    pub phase: Phase,
    pub cells: &'a CellSet,
}

/// Receives [`StepEvent`]s while a simulation advances
pub trait StepObserver {
    fn observe(&mut self, event: &StepEvent<'_>);
}

impl<F> StepObserver for F
where
    F: FnMut(&StepEvent<'_>),
{
    fn observe(&mut self, event: &StepEvent<'_>) {
        self(event);
    }
}

/// Logs every phase: population at debug level, the cells at trace level
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl StepObserver for TracingObserver {
    fn observe(&mut self, event: &StepEvent<'_>) {
        debug!(
            generation = event.generation,
            phase = %event.phase,
            population = event.cells.len(),
            "step phase"
        );
        trace!(generation = event.generation, phase = %event.phase, cells = ?event.cells.sorted());
    }
}
