//! # obliv-core
//!
//! Oblivious numeric algorithms over an encrypted integer runtime, written once
//! against the [`obliv_backend::api`] traits and runnable on any backend.
//!
//! ## Overview
//!
//! Every value handled here may be a ciphertext whose plaintext is hidden from
//! the code manipulating it. Control flow therefore never depends on a secret:
//! each decision that would normally be an `if` is an encrypted predicate fed
//! into an encrypted selection, and each algorithm issues the same sequence of
//! runtime primitives for every input of a given (public) shape.
//!
//! - **Bounded random** ([`FheBoundedRandom`]): an encrypted value drawn from a
//!   plaintext inclusive range `[min, max]` by modulo reduction of a full-width
//!   encrypted random word.
//! - **Ordering and sorting** ([`FheOrder`], [`FheSort`]): oblivious
//!   compare-and-swap of two ciphertexts, extended to a fixed-cost bubble sort
//!   and to array minimum/maximum.
//! - **Safe narrowing cast** ([`FheSafeCast`]): re-encryption at a narrower width
//!   together with an encrypted overflow flag. Sources are ciphertexts of any
//!   width, or plaintexts up to 256 bits ([`U256`]).
//!
//! All algorithms are generic over the width `T` (`u8` to `u128`); the
//! per-width entry points in [`widths`] are thin instantiations.
//!
//! ## Errors
//!
//! The only failure originating here is [`ObliviousError::InvalidRange`], raised
//! before any runtime call when a plaintext range is malformed. Runtime failures
//! are forwarded unchanged as [`ObliviousError::Runtime`].
//!
//! ## Non-Goals
//!
//! - Key management, decryption policy and the cryptographic scheme of the
//!   runtime are out of scope.
//! - Sorting is not stable; equal values may exchange positions.

mod bounded_random;
mod error;
mod order;
mod safe_cast;
mod sort;

pub mod widths;

pub use bounded_random::*;
pub use crypto_bigint::U256;
pub use error::*;
pub use order::*;
pub use safe_cast::*;
pub use sort::*;
