use super::runner::{DEFAULT_GENERATIONS, Runner};
use crate::domain::Algorithm;
use crate::input::InputSource;
use crate::output::OutputOptions;
use std::path::Path;

/// Everything a run needs, assembled by the CLI
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub input: InputSource,
    pub generations: u64,
    pub algorithm: Algorithm,
    pub output: OutputOptions,
    /// Report every step phase through the tracing observer
    pub trace: bool,
}

impl Config {
    /// Defaults for the given input source: 10 serial generations,
    /// unsorted output without header, no phase tracing
    pub fn new(input: InputSource) -> Self {
        Self {
            input,
            generations: DEFAULT_GENERATIONS,
            algorithm: Algorithm::default(),
            output: OutputOptions::default(),
            trace: false,
        }
    }

    /// Defaults with the input source detected in `dir`
    pub fn detect(dir: &Path) -> Self {
        Self::new(InputSource::detect(dir))
    }

    pub fn runner(&self) -> Runner {
        Runner::new(self.generations).with_algorithm(self.algorithm)
    }
}
