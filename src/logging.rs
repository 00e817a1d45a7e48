//! Diagnostics on stderr.
//!
//! Stdout carries only the final generation, so every log line goes to
//! stderr. The level comes from the CLI, not from the environment.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Map `-v` occurrences to a level: warn, info, debug, then trace
pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialize the tracing subscriber at `level` for this crate.
pub fn init(level: Level) {
    let filter = EnvFilter::new(format!("warn,sparse_life={level}"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
