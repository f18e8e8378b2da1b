//! Blind search configuration.

use crate::error::{Result, SearchError};

/// Configuration for one blind search run.
///
/// # Examples
///
/// ```
/// use stochbench::blind::BlindConfig;
///
/// let config = BlindConfig::new(10, 30)
///     .with_bounds(-5.0, 5.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct BlindConfig {
    /// Dimension of every candidate vector.
    pub dimension: usize,

    /// Number of independent samples to draw.
    pub iterations: usize,

    /// Lower domain bound applied to every component.
    pub lower: f64,

    /// Upper domain bound applied to every component.
    pub upper: f64,
}

impl BlindConfig {
    /// Creates a configuration with the default `[-100, 100]` domain.
    pub fn new(dimension: usize, iterations: usize) -> Self {
        Self {
            dimension,
            iterations,
            lower: -100.0,
            upper: 100.0,
        }
    }

    /// Sets the component-wise domain bounds.
    pub fn with_bounds(mut self, lower: f64, upper: f64) -> Self {
        self.lower = lower;
        self.upper = upper;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.dimension == 0 {
            return Err(SearchError::InvalidArgument(
                "dimension must be at least 1".into(),
            ));
        }
        if self.iterations == 0 {
            return Err(SearchError::InvalidArgument(
                "iterations must be at least 1".into(),
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
