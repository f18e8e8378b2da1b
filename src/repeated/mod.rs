//! Repeated local search with random restarts.
//!
//! Runs many independent local search descents, each from a freshly drawn
//! uniform starting vector, and tracks the best fitness across all restarts.

mod config;
mod runner;

pub use config::RepeatedConfig;
pub use runner::{RepeatedResult, RepeatedRunner};
