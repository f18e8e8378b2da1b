//! Stochastic search heuristics evaluated over classic nonlinear benchmark
//! objective functions.
//!
//! Provides a deterministic optimization engine and the adapters around it:
//!
//! - **Pseudorandom stream**: an explicitly owned MT19937 handle; every
//!   randomized behavior is a pure function of its seed and draw order.
//! - **Benchmark problems**: ten closed-form minimization objectives
//!   (Schwefel, De Jong 1, Rosenbrock, Rastrigin, Griewangk, Sine Envelope
//!   Sine Wave, Stretch V Sine Wave, Ackley One/Two, Egg Holder) behind one
//!   exhaustively matched enum.
//! - **Blind search**: independent uniform sampling, the comparison
//!   baseline.
//! - **Local search**: single-run neighborhood refinement with
//!   strict-improvement moves and bounded steps.
//! - **Repeated local search**: random-restart orchestration over the
//!   descent with a global best across restarts.
//! - **Population**: bounds-checked batch storage for population-style
//!   callers.
//! - **Config / report**: the configuration and CSV adapters used by the
//!   experiment driver binary.
//!
//! # Reproducibility
//!
//! For a fixed seed and a fixed sequence of draw calls, every candidate
//! vector, fitness trace, and best-of-run result is bit-identical across
//! runs. Algorithms take the stream by `&mut`, so sequencing is explicit in
//! the call chain and nothing is hidden in process-wide state.
//!
//! # Examples
//!
//! ```
//! use stochbench::problem::Benchmark;
//! use stochbench::repeated::{RepeatedConfig, RepeatedRunner};
//! use stochbench::rng::Mt19937;
//!
//! let mut rng = Mt19937::seeded(42);
//! let config = RepeatedConfig::new(10, 30).with_bounds(-5.12, 5.12);
//! let result = RepeatedRunner::run(Benchmark::Rastrigin, &config, &mut rng).unwrap();
//! assert_eq!(result.trace.len(), 30);
//! ```

pub mod blind;
pub mod config;
pub mod error;
pub mod local;
pub mod population;
pub mod problem;
pub mod repeated;
pub mod report;
pub mod rng;
