//! Local search execution loop.

use super::config::LocalConfig;
use crate::error::{Result, SearchError};
use crate::problem::Benchmark;
use crate::rng::Mt19937;
use std::time::Instant;

/// Result of a single local search descent.
#[derive(Debug, Clone)]
pub struct LocalResult {
    /// Best (minimum) fitness found.
    pub best: f64,

    /// Refinement steps executed, including the terminal non-improving one.
    pub steps: usize,

    /// Objective evaluations performed (1 for the start vector, plus
    /// `neighbors` per executed step).
    pub evaluations: f64,

    /// Best fitness after each executed step, in step order. Non-increasing.
    pub history: Vec<f64>,

    /// Wall time spent in the descent, in milliseconds.
    pub elapsed_ms: f64,
}

/// Executes a single local search run.
pub struct LocalRunner;

impl LocalRunner {
    /// Refines `x0` until a step improves nothing or the step cap is hit.
    ///
    /// Draw order per step: for each neighbor, one uniform draw in
    /// `[-step, step)` per dimension, component 0 first. An improving
    /// neighbor replaces the working best immediately, so later neighbors in
    /// the same step perturb the updated vector.
    pub fn run(
        benchmark: Benchmark,
        config: &LocalConfig,
        x0: &[f64],
        rng: &mut Mt19937,
    ) -> Result<LocalResult> {
        config.validate()?;
        if x0.len() != config.dimension {
            return Err(SearchError::InvalidArgument(format!(
                "starting vector has {} components, expected {}",
                x0.len(),
                config.dimension
            )));
        }

        let started = Instant::now();
        let mut result = descend(benchmark, config, x0, rng);
        result.elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
        Ok(result)
    }
}

/// The descent itself, shared with the repeated variant (which validates and
/// times at its own level).
pub(crate) fn descend(
    benchmark: Benchmark,
    config: &LocalConfig,
    x0: &[f64],
    rng: &mut Mt19937,
) -> LocalResult {
    let step = config.step();

    let mut best = x0.to_vec();
    let mut f_best = benchmark.evaluate(&best);
    let mut evaluations = 1.0;

    let mut candidate = vec![0.0; config.dimension];
    let mut history = Vec::new();

    let mut steps = 0;
    let mut improved = true;

    while improved && steps < config.max_steps {
        improved = false;
        let mut f_step_best = f_best;

        for _ in 0..config.neighbors {
            candidate.copy_from_slice(&best);
            for value in candidate.iter_mut() {
                *value += rng.uniform(-step, step);
            }
            clamp(&mut candidate, config.lower, config.upper);

            let f = benchmark.evaluate(&candidate);
            evaluations += 1.0;

            if f < f_step_best {
                f_step_best = f;
                best.copy_from_slice(&candidate);
                improved = true;
            }
        }

        if improved {
            f_best = f_step_best;
        }
        steps += 1;
        history.push(f_best);
    }

    LocalResult {
        best: f_best,
        steps,
        evaluations,
        history,
        elapsed_ms: 0.0,
    }
}

/// Clamps every component into `[lower, upper]`.
fn clamp(x: &mut [f64], lower: f64, upper: f64) {
    for value in x.iter_mut() {
        *value = value.clamp(lower, upper);
    }
}
