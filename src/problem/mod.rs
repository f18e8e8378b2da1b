//! Benchmark objective functions.
//!
//! Ten classic nonlinear minimization benchmarks behind one closed enum.
//! Evaluation is pure and stateless: a [`Benchmark`] carries no numeric
//! state, never mutates its input, and the same vector always yields the
//! same fitness.

mod eval;
mod types;

pub use types::Benchmark;
