//! Deterministic pseudorandom stream.
//!
//! Every randomized behavior in the engine is a pure function of one
//! [`Mt19937`] stream's seed and draw order. The stream is an owned handle
//! passed explicitly through the call chain; there is no process-wide
//! generator state, so repeated or concurrent runs stay reproducible without
//! external locking.

mod mt19937;

pub use mt19937::Mt19937;
