use anyhow::{Context, Result};
use clap::Parser;
use sparse_life::application::{Config, execute};
use sparse_life::domain::Algorithm;
use sparse_life::input::InputSource;
use sparse_life::logging;
use sparse_life::output::OutputOptions;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "sparse_life",
    version,
    about = "Run Conway's Game of Life on a Life 1.06 pattern and print the survivors"
)]
struct Cli {
    /// Pattern file. Defaults to `data.life` in the working directory,
    /// then to standard input.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Number of generations to compute.
    #[arg(short, long, default_value_t = sparse_life::application::DEFAULT_GENERATIONS)]
    generations: u64,

    /// Step with the rayon thread pool.
    #[arg(long)]
    parallel: bool,

    /// Sort output by x, then y.
    #[arg(long)]
    sort: bool,

    /// Print the `#Life 1.06` header before the cells.
    #[arg(long)]
    header: bool,

    /// Log every step phase (implies at least debug verbosity).
    #[arg(long)]
    trace: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn log_level(&self) -> Level {
        let level = logging::level_for(self.verbose);
        if self.trace { level.max(Level::DEBUG) } else { level }
    }

    fn into_config(self) -> Result<Config> {
        let mut config = match self.input {
            Some(path) => Config::new(InputSource::File(path)),
            None => {
                let cwd = std::env::current_dir().context("resolve working directory")?;
                Config::detect(&cwd)
            }
        };

        config.generations = self.generations;
        if self.parallel {
            config.algorithm = Algorithm::Parallel;
        }
        config.output = OutputOptions {
            sort: self.sort,
            header: self.header,
        };
        config.trace = self.trace;
        Ok(config)
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level());

    let config = cli.into_config()?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    execute(&config, &mut out)?;
    Ok(())
}
