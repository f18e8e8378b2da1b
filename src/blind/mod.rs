//! Blind (random) search.
//!
//! Draws independent uniform candidate vectors and evaluates them; no state
//! is carried between draws. Serves as the baseline the local-search
//! variants are compared against.

mod config;
mod runner;

pub use config::BlindConfig;
pub use runner::{BlindResult, BlindRunner};
