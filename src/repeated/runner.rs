//! Repeated local search execution loop.

use super::config::RepeatedConfig;
use crate::error::{Result, SearchError};
use crate::local::descend;
use crate::problem::Benchmark;
use crate::rng::Mt19937;
use std::time::Instant;

/// Result of a repeated local search run.
#[derive(Debug, Clone)]
pub struct RepeatedResult {
    /// Final fitness of each restart's descent, in restart order.
    pub trace: Vec<f64>,

    /// Best (minimum) fitness across all restarts.
    pub best: f64,

    /// Total objective evaluations across all descents.
    pub evaluations: f64,

    /// Wall time spent across all restarts, in milliseconds.
    pub elapsed_ms: f64,
}

/// Executes repeated local search.
pub struct RepeatedRunner;

impl RepeatedRunner {
    /// Runs `restarts` independent descents from fresh uniform starts.
    ///
    /// Draw order per restart: `dimension` draws for the starting vector,
    /// then the descent's own draws.
    pub fn run(
        benchmark: Benchmark,
        config: &RepeatedConfig,
        rng: &mut Mt19937,
    ) -> Result<RepeatedResult> {
        config.validate()?;
        let local = config.local();

        let mut trace = Vec::new();
        trace
            .try_reserve_exact(config.restarts)
            .map_err(|_| SearchError::Allocation)?;

        let mut x0 = vec![0.0; config.dimension];
        let mut best = f64::INFINITY;
        let mut evaluations = 0.0;

        let started = Instant::now();
        for _ in 0..config.restarts {
            rng.fill_uniform(&mut x0, config.lower, config.upper);
            let run = descend(benchmark, &local, &x0, rng);

            trace.push(run.best);
            evaluations += run.evaluations;
            if run.best < best {
                best = run.best;
            }
        }
        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

        Ok(RepeatedResult {
            trace,
            best,
            evaluations,
            elapsed_ms,
        })
    }
}
