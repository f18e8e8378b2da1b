//! Experiment driver.
//!
//! Loads a configuration file, seeds one pseudorandom stream for the whole
//! process, sweeps the configured dimension x problem x algorithm product,
//! and appends per-iteration results to a CSV file. Exit codes are distinct
//! per failure class:
//!
//! - 0: success
//! - 2: usage error (clap)
//! - 3: configuration load or parse failure
//! - 4: invalid domain bounds
//! - 5: output sink failure
//! - 6: unsupported algorithm selection
//! - 7: allocation failure
//! - 8: algorithm failure

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use stochbench::blind::BlindRunner;
use stochbench::config::{Algorithm, ConfigError, RunConfig};
use stochbench::error::SearchError;
use stochbench::problem::Benchmark;
use stochbench::repeated::RepeatedRunner;
use stochbench::report::{CsvSink, ResultRow};
use stochbench::rng::Mt19937;
use thiserror::Error;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(
    name = "stochbench",
    about = "Runs stochastic search experiments over benchmark objective functions"
)]
struct Cli {
    /// Path to the JSON configuration file.
    config: PathBuf,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to load configuration: {0}")]
    Config(ConfigError),

    #[error("{0}")]
    Bounds(ConfigError),

    #[error("failed to write output: {0}")]
    Sink(std::io::Error),

    #[error("unsupported algorithm: {0}")]
    Unsupported(String),

    #[error("allocation failure")]
    Allocation,

    #[error("algorithm failed: {0}")]
    Algorithm(SearchError),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            CliError::Config(_) => 3,
            CliError::Bounds(_) => 4,
            CliError::Sink(_) => 5,
            CliError::Unsupported(_) => 6,
            CliError::Allocation => 7,
            CliError::Algorithm(_) => 8,
        }
    }
}

impl From<SearchError> for CliError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::Allocation => CliError::Allocation,
            SearchError::UnsupportedAlgorithm(name) => CliError::Unsupported(name),
            other => CliError::Algorithm(other),
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let config = RunConfig::load(&cli.config).map_err(CliError::Config)?;
    config.validate().map_err(|err| match err {
        ConfigError::InvalidBounds { .. } => CliError::Bounds(err),
        other => CliError::Config(other),
    })?;

    let dimensions = config.dimension.dimensions();
    let problems = config.problem.problems().map_err(CliError::Config)?;
    let algorithms = config
        .algorithm
        .algorithms()
        .map_err(|err| CliError::Unsupported(err.to_string()))?;

    let seed = config.resolved_seed();
    let mut rng = Mt19937::seeded(seed);
    let mut sink = CsvSink::create(&config.output).map_err(CliError::Sink)?;

    info!(
        seed,
        output = %config.output.display(),
        runs = dimensions.len() * problems.len() * algorithms.len(),
        "starting experiment sweep"
    );

    for &dimension in &dimensions {
        for &benchmark in &problems {
            for &algorithm in &algorithms {
                execute(algorithm, benchmark, dimension, &config, &mut rng, &mut sink)?;
            }
        }
    }

    sink.flush().map_err(CliError::Sink)?;
    Ok(())
}

fn execute(
    algorithm: Algorithm,
    benchmark: Benchmark,
    dimension: usize,
    config: &RunConfig,
    rng: &mut Mt19937,
    sink: &mut CsvSink,
) -> Result<(), CliError> {
    let (trace, best, time_ms) = match algorithm {
        Algorithm::Blind => {
            let result = BlindRunner::run(benchmark, &config.blind_config(dimension), rng)?;
            (result.trace, result.best, result.elapsed_ms)
        }
        Algorithm::RepeatedLocal => {
            let result = RepeatedRunner::run(benchmark, &config.repeated_config(dimension), rng)?;
            (result.trace, result.best, result.elapsed_ms)
        }
        Algorithm::Local => {
            // Single-run local search has no per-iteration trace to persist;
            // it stays a library-only entry point.
            return Err(CliError::Unsupported("local".into()));
        }
    };

    for (iteration, &fitness) in trace.iter().enumerate() {
        sink.append(&ResultRow {
            algorithm: algorithm.name(),
            problem: benchmark.short_name(),
            dimension,
            iteration,
            fitness,
            time_ms,
        })
        .map_err(CliError::Sink)?;
    }

    info!(
        algorithm = algorithm.name(),
        problem = benchmark.name(),
        dimension,
        best,
        time_ms,
        "run complete"
    );
    Ok(())
}
