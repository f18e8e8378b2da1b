//! Experiment configuration.
//!
//! Loads a JSON configuration file into [`RunConfig`]. Selector fields
//! accept either a concrete value or `"all"` to sweep the reference sets
//! (dimensions {10, 20, 30}, all ten problems, both batch algorithms), and
//! the key aliases of the original key=value format are honored.

use crate::blind::BlindConfig;
use crate::problem::Benchmark;
use crate::repeated::RepeatedConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Errors from loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid JSON for [`RunConfig`].
    #[error("cannot parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// `lower >= upper`.
    #[error("invalid range: lower ({lower}) must be < upper ({upper})")]
    InvalidBounds {
        /// Configured lower bound.
        lower: f64,
        /// Configured upper bound.
        upper: f64,
    },

    /// A count or fraction that must be positive is not.
    #[error("{field} must be positive")]
    NonPositive {
        /// Name of the offending field.
        field: &'static str,
    },

    /// A numeric problem selector outside 1..=10.
    #[error("unknown problem index: {0}")]
    UnknownProblem(usize),

    /// A numeric algorithm selector outside 1..=3.
    #[error("unknown algorithm index: {0}")]
    UnknownAlgorithm(usize),
}

/// The `"all"` marker accepted in selector positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AllTag {
    All,
}

/// Dimension selector: a fixed value or the reference sweep {10, 20, 30}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum DimensionSpec {
    Fixed(usize),
    Sweep(AllTag),
}

impl Default for DimensionSpec {
    fn default() -> Self {
        DimensionSpec::Sweep(AllTag::All)
    }
}

impl DimensionSpec {
    /// The dimensions this selector expands to.
    pub fn dimensions(self) -> Vec<usize> {
        match self {
            DimensionSpec::Fixed(m) => vec![m],
            DimensionSpec::Sweep(_) => vec![10, 20, 30],
        }
    }
}

/// Problem selector: a benchmark name, a 1-based index, or `"all"`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ProblemSpec {
    Named(Benchmark),
    Index(usize),
    Sweep(AllTag),
}

impl Default for ProblemSpec {
    fn default() -> Self {
        ProblemSpec::Sweep(AllTag::All)
    }
}

impl ProblemSpec {
    /// The benchmarks this selector expands to.
    pub fn problems(self) -> Result<Vec<Benchmark>, ConfigError> {
        match self {
            ProblemSpec::Named(benchmark) => Ok(vec![benchmark]),
            ProblemSpec::Index(index) => Benchmark::from_index(index)
                .map(|b| vec![b])
                .ok_or(ConfigError::UnknownProblem(index)),
            ProblemSpec::Sweep(_) => Ok(Benchmark::ALL.to_vec()),
        }
    }
}

/// A runnable search algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    #[serde(alias = "random_walk", alias = "randomwalk")]
    Blind,
    #[serde(alias = "ls")]
    Local,
    #[serde(alias = "rls", alias = "repeated")]
    RepeatedLocal,
}

impl Algorithm {
    /// Name used in tabular output.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Blind => "Blind",
            Algorithm::Local => "LocalSearch",
            Algorithm::RepeatedLocal => "RepeatedLocalSearch",
        }
    }
}

/// Algorithm selector: a name, a 1-based index, or `"all"`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AlgorithmSpec {
    Named(Algorithm),
    Index(usize),
    Sweep(AllTag),
}

impl Default for AlgorithmSpec {
    fn default() -> Self {
        AlgorithmSpec::Sweep(AllTag::All)
    }
}

impl AlgorithmSpec {
    /// The algorithms this selector expands to.
    ///
    /// `"all"` expands to the two batch algorithms the experiment harness
    /// sweeps (blind and repeated local search); the single-run local
    /// variant is only selectable explicitly.
    pub fn algorithms(self) -> Result<Vec<Algorithm>, ConfigError> {
        match self {
            AlgorithmSpec::Named(algorithm) => Ok(vec![algorithm]),
            AlgorithmSpec::Index(1) => Ok(vec![Algorithm::Blind]),
            AlgorithmSpec::Index(2) => Ok(vec![Algorithm::Local]),
            AlgorithmSpec::Index(3) => Ok(vec![Algorithm::RepeatedLocal]),
            AlgorithmSpec::Index(other) => Err(ConfigError::UnknownAlgorithm(other)),
            AlgorithmSpec::Sweep(_) => Ok(vec![Algorithm::Blind, Algorithm::RepeatedLocal]),
        }
    }
}

/// One experiment run's configuration.
///
/// Field defaults match the reference configuration: 30 iterations, 30
/// neighbors, step fraction 0.05, 200 local-search steps, domain
/// `[-100, 100]`, output `results.csv`, and `"all"` sweeps for dimension,
/// problem, and algorithm. A zero seed means "derive from system time".
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Dimension selector.
    #[serde(alias = "m", alias = "dim")]
    pub dimension: DimensionSpec,

    /// Iterations (blind) or restarts (repeated local) per run.
    #[serde(alias = "n", alias = "iters")]
    pub iterations: usize,

    /// Problem selector.
    #[serde(alias = "problem_type")]
    pub problem: ProblemSpec,

    /// Algorithm selector.
    #[serde(alias = "alg")]
    pub algorithm: AlgorithmSpec,

    /// Neighbors sampled per local-search step.
    #[serde(alias = "k")]
    pub neighbors: usize,

    /// Perturbation magnitude as a fraction of the domain width.
    #[serde(alias = "step")]
    pub step_frac: f64,

    /// Step cap per local-search descent.
    #[serde(alias = "ls_steps")]
    pub max_ls_steps: usize,

    /// Stream seed; 0 selects the current system time.
    pub seed: u32,

    /// Lower domain bound.
    #[serde(alias = "min")]
    pub lower: f64,

    /// Upper domain bound.
    #[serde(alias = "max")]
    pub upper: f64,

    /// Output CSV path.
    #[serde(alias = "output_csv")]
    pub output: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            dimension: DimensionSpec::default(),
            iterations: 30,
            problem: ProblemSpec::default(),
            algorithm: AlgorithmSpec::default(),
            neighbors: 30,
            step_frac: 0.05,
            max_ls_steps: 200,
            seed: 0,
            lower: -100.0,
            upper: 100.0,
            output: PathBuf::from("results.csv"),
        }
    }
}

impl RunConfig {
    /// Loads and parses a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config: RunConfig = serde_json::from_str(&text)?;
        Ok(config)
    }

    /// Validates bounds and counts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.lower < self.upper) {
            return Err(ConfigError::InvalidBounds {
                lower: self.lower,
                upper: self.upper,
            });
        }
        if self.iterations == 0 {
            return Err(ConfigError::NonPositive {
                field: "iterations",
            });
        }
        if self.neighbors == 0 {
            return Err(ConfigError::NonPositive { field: "neighbors" });
        }
        if !(self.step_frac > 0.0) {
            return Err(ConfigError::NonPositive { field: "step_frac" });
        }
        if self.max_ls_steps == 0 {
            return Err(ConfigError::NonPositive {
                field: "max_ls_steps",
            });
        }
        for &m in &self.dimension.dimensions() {
            if m == 0 {
                return Err(ConfigError::NonPositive { field: "dimension" });
            }
        }
        Ok(())
    }

    /// The effective stream seed. A configured zero picks the current
    /// system time; call once per process so every run shares one stream.
    pub fn resolved_seed(&self) -> u32 {
        if self.seed != 0 {
            return self.seed;
        }
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        now.as_secs() as u32
    }

    /// Blind search configuration for one swept dimension.
    pub fn blind_config(&self, dimension: usize) -> BlindConfig {
        BlindConfig::new(dimension, self.iterations).with_bounds(self.lower, self.upper)
    }

    /// Repeated local search configuration for one swept dimension.
    pub fn repeated_config(&self, dimension: usize) -> RepeatedConfig {
        RepeatedConfig::new(dimension, self.iterations)
            .with_neighbors(self.neighbors)
            .with_step_frac(self.step_frac)
            .with_max_steps(self.max_ls_steps)
            .with_bounds(self.lower, self.upper)
    }
}
