//! Local search (single-run iterative neighborhood refinement).
//!
//! Keeps one working best vector, samples a fixed number of perturbed
//! neighbors per step, and moves only on strict improvement. Plateaus are
//! never traversed; equal fitness does not trigger a move. The run stops at
//! the first step that improves nothing, or at the step cap.

mod config;
mod runner;

pub use config::LocalConfig;
pub use runner::{LocalResult, LocalRunner};

pub(crate) use runner::descend;
