mod config;
pub mod observer;
pub mod runner;
mod simulation;

pub use config::Config;
pub use observer::{Phase, StepEvent, StepObserver, TracingObserver};
pub use runner::{DEFAULT_GENERATIONS, Runner};
pub use simulation::Simulation;

use crate::domain::CellSet;
use crate::output;
use anyhow::{Context, Result};
use std::io::Write;

/// Load, run and write out the final generation.
/// Input errors abort before anything is written.
pub fn execute<W: Write>(config: &Config, out: &mut W) -> Result<CellSet> {
    let initial = config
        .input
        .load()
        .with_context(|| format!("load initial pattern from {}", config.input))?;

    let runner = config.runner();
    let last = if config.trace {
        runner.run_observed(initial, &mut TracingObserver)
    } else {
        runner.run(initial)
    };

    output::write_cells(out, &last, config.output).context("write final generation")?;
    Ok(last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FormatError, LoadError};
    use crate::input::InputSource;
    use crate::output::OutputOptions;
    use std::fs;

    fn config_for(doc: &str) -> (tempfile::TempDir, Config) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("data.life"), doc).unwrap();
        let mut config = Config::detect(dir.path());
        config.output = OutputOptions { sort: true, header: false };
        (dir, config)
    }

    #[test]
    fn test_execute_blinker() {
        let (_dir, config) = config_for("#Life 1.06\n0 -1\n0 0\n0 1\n");
        let mut out = Vec::new();
        execute(&config, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0 -1\n0 0\n0 1\n");
    }

    #[test]
    fn test_execute_with_trace_matches() {
        let (_dir, mut config) = config_for("#Life 1.06\n1 0\n2 1\n0 2\n1 2\n2 2\n");
        let plain = execute(&config, &mut Vec::new()).unwrap();
        config.trace = true;
        let traced = execute(&config, &mut Vec::new()).unwrap();
        assert_eq!(plain, traced);
    }

    #[test]
    fn test_malformed_input_writes_nothing() {
        let (_dir, config) = config_for("#Life 1.06\n0 0\n0 zero\n");
        let mut out = Vec::new();
        let err = execute(&config, &mut out).unwrap_err();

        assert!(out.is_empty());
        let message = format!("{err:#}");
        assert!(message.starts_with("load initial pattern from "), "{message}");
        assert!(message.contains("data.life"), "{message}");
        assert!(!message.contains("File("), "{message}");
        let load = err.downcast_ref::<LoadError>().unwrap();
        assert!(matches!(
            load,
            LoadError::Format(FormatError::NotNumeric { line: 3, .. })
        ));
    }

    #[test]
    fn test_explicit_file_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("block.life");
        fs::write(&path, "#Life 1.06\n0 0\n1 0\n0 1\n1 1\n").unwrap();

        let config = Config::new(InputSource::File(path));
        let last = execute(&config, &mut Vec::new()).unwrap();
        assert_eq!(last.len(), 4);
    }
}
