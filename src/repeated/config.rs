//! Repeated local search configuration.

use crate::error::{Result, SearchError};
use crate::local::LocalConfig;

/// Configuration for a repeated local search run.
///
/// # Examples
///
/// ```
/// use stochbench::repeated::RepeatedConfig;
///
/// let config = RepeatedConfig::new(10, 30)
///     .with_neighbors(30)
///     .with_step_frac(0.05)
///     .with_max_steps(200)
///     .with_bounds(-100.0, 100.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct RepeatedConfig {
    /// Dimension of every solution vector.
    pub dimension: usize,

    /// Number of independent restarts.
    pub restarts: usize,

    /// Neighbors sampled per local search step.
    pub neighbors: usize,

    /// Perturbation magnitude as a fraction of the domain width.
    pub step_frac: f64,

    /// Step cap for each descent.
    pub max_steps: usize,

    /// Lower domain bound applied to every component.
    pub lower: f64,

    /// Upper domain bound applied to every component.
    pub upper: f64,
}

impl RepeatedConfig {
    /// Creates a configuration with the reference defaults.
    pub fn new(dimension: usize, restarts: usize) -> Self {
        let local = LocalConfig::new(dimension);
        Self {
            dimension,
            restarts,
            neighbors: local.neighbors,
            step_frac: local.step_frac,
            max_steps: local.max_steps,
            lower: local.lower,
            upper: local.upper,
        }
    }

    /// Sets the number of neighbors sampled per step.
    pub fn with_neighbors(mut self, neighbors: usize) -> Self {
        self.neighbors = neighbors;
        self
    }

    /// Sets the step fraction.
    pub fn with_step_frac(mut self, step_frac: f64) -> Self {
        self.step_frac = step_frac;
        self
    }

    /// Sets the per-descent step cap.
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Sets the component-wise domain bounds.
    pub fn with_bounds(mut self, lower: f64, upper: f64) -> Self {
        self.lower = lower;
        self.upper = upper;
        self
    }

    /// The equivalent single-descent configuration.
    pub fn local(&self) -> LocalConfig {
        LocalConfig {
            dimension: self.dimension,
            neighbors: self.neighbors,
            step_frac: self.step_frac,
            max_steps: self.max_steps,
            lower: self.lower,
            upper: self.upper,
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.restarts == 0 {
            return Err(SearchError::InvalidArgument(
                "restarts must be at least 1".into(),
            ));
        }
        self.local().validate()
    }
}
