//! Deterministic pseudorandom sampling based on ChaCha8.
//!
//! A [`Source`] is the single randomness primitive used by the runtimes of this
//! workspace: it draws the encrypted random words requested through
//! `FheRandom` and derives the identifiers of freshly created modules.

mod source;

pub use rand_core::RngCore;
pub use source::*;
