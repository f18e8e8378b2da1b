//! Local search configuration.

use crate::error::{Result, SearchError};

/// Configuration for one local search descent.
///
/// The perturbation half-width is `step_frac * (upper - lower)`; each
/// neighbor adds an independent uniform draw from that interval to every
/// component of the working best, then clamps into `[lower, upper]`.
///
/// # Examples
///
/// ```
/// use stochbench::local::LocalConfig;
///
/// let config = LocalConfig::new(10)
///     .with_neighbors(30)
///     .with_step_frac(0.05)
///     .with_max_steps(200)
///     .with_bounds(-100.0, 100.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct LocalConfig {
    /// Dimension of the solution vector.
    pub dimension: usize,

    /// Neighbors sampled per step.
    pub neighbors: usize,

    /// Perturbation magnitude as a fraction of the domain width.
    pub step_frac: f64,

    /// Hard cap on refinement steps.
    pub max_steps: usize,

    /// Lower domain bound applied to every component.
    pub lower: f64,

    /// Upper domain bound applied to every component.
    pub upper: f64,
}

impl LocalConfig {
    /// Creates a configuration with the reference defaults: 30 neighbors,
    /// step fraction 0.05, 200 steps, `[-100, 100]` domain.
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            neighbors: 30,
            step_frac: 0.05,
            max_steps: 200,
            lower: -100.0,
            upper: 100.0,
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

    /// Sets the step cap.
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

    /// The perturbation half-width in domain units.
    pub fn step(&self) -> f64 {
        self.step_frac * (self.upper - self.lower)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.dimension == 0 {
            return Err(SearchError::InvalidArgument(
                "dimension must be at least 1".into(),
            ));
        }
        if self.neighbors == 0 {
            return Err(SearchError::InvalidArgument(
                "neighbors must be at least 1".into(),
            ));
        }
        if !(self.step_frac > 0.0) || !self.step_frac.is_finite() {
            return Err(SearchError::InvalidArgument(format!(
                "step_frac must be positive and finite, got {}",
                self.step_frac
            )));
        }
        if self.max_steps == 0 {
            return Err(SearchError::InvalidArgument(
                "max_steps must be at least 1".into(),
            ));
        }
        if !(self.lower < self.upper) {
            return Err(SearchError::InvalidArgument(format!(
                "lower ({}) must be < upper ({})",
                self.lower, self.upper
            )));
        }
        Ok(())
    }
}
