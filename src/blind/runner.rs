//! Blind search execution loop.

use super::config::BlindConfig;
use crate::error::{Result, SearchError};
use crate::problem::Benchmark;
use crate::rng::Mt19937;
use std::time::Instant;

/// Result of a blind search run.
#[derive(Debug, Clone)]
pub struct BlindResult {
    /// Fitness of every sampled candidate, in draw order.
    pub trace: Vec<f64>,

    /// Best (minimum) fitness found.
    pub best: f64,

    /// Number of objective evaluations performed.
    pub evaluations: f64,

    /// Wall time spent in the sampling-and-evaluation loop, in milliseconds.
    pub elapsed_ms: f64,
}

/// Executes blind search.
pub struct BlindRunner;

impl BlindRunner {
    /// Samples `iterations` uniform candidates and tracks the running
    /// minimum. Draw order: one vector per iteration, component 0 first.
    pub fn run(
        benchmark: Benchmark,
        config: &BlindConfig,
        rng: &mut Mt19937,
    ) -> Result<BlindResult> {
        config.validate()?;

        let mut trace = Vec::new();
        trace
            .try_reserve_exact(config.iterations)
            .map_err(|_| SearchError::Allocation)?;

        let mut candidate = vec![0.0; config.dimension];
        let mut best = f64::INFINITY;

        let started = Instant::now();
        for _ in 0..config.iterations {
            rng.fill_uniform(&mut candidate, config.lower, config.upper);
            let f = benchmark.evaluate(&candidate);
            trace.push(f);
            if f < best {
                best = f;
            }
        }
        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

        Ok(BlindResult {
            trace,
            best,
            evaluations: config.iterations as f64,
            elapsed_ms,
        })
    }
}
