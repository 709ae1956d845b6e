//! # obliv-backend
//!
//! A trait-based abstraction layer over an *encrypted integer runtime*: a
//! coprocessor (or a simulation of one) that stores ciphertexts of fixed-width
//! unsigned integers and evaluates a small set of primitive operations on them
//! without ever exposing their plaintext to the calling code.
//!
//! ## Core Concepts
//!
//! **Handles:** A ciphertext is only ever seen through an opaque [`layouts::Handle`].
//! Typed views [`layouts::FheUint<T>`] and [`layouts::FheBool`] bind a handle to
//! its plaintext width. Handles are immutable: every operation yields a fresh one.
//!
//! **Widths:** Plaintext widths are the Rust primitives `u8`, `u16`, `u32`, `u64`
//! and `u128`, abstracted by [`layouts::UnsignedInteger`].
//!
//! **Module:** A [`layouts::Module`] owns the backend state (ciphertext store,
//! randomness, connection to a coprocessor, ...). All primitives are methods on it.
//!
//! ## Architecture
//!
//! The crate follows a three-layer stack:
//!
//! 1. **[`api`]** -- Safe, user-facing trait definitions (e.g. [`api::FheLe`],
//!    [`api::FheSelect`]). Oblivious algorithms program against these.
//! 2. **[`oep`]** -- Unsafe extension-point traits mirroring the API (e.g.
//!    [`oep::FheLeImpl`]). Backend crates implement these.
//! 3. **[`delegates`]** -- Blanket `impl` glue that connects each [`api`] trait to
//!    the corresponding [`oep`] trait on [`layouts::Module`].
//!
//! ## Safety Contract
//!
//! All [`oep`] traits are `unsafe` to implement. Implementors must uphold the
//! contract documented in [`doc::backend_safety`], covering handle validity,
//! freshness, width fidelity and obliviousness.
//!
//! ## Non-Goals
//!
//! - This crate does not implement any cryptographic scheme, key management or
//!   decryption policy. A backend decides who may hold a
//!   [`layouts::Backend::DecryptionKey`].
//! - It does not enforce constant-time execution. Obliviousness of the
//!   primitives is the responsibility of the backend.

/// Safe, user-facing trait definitions for encrypted integer primitives.
pub mod api;

/// Blanket implementations connecting [`api`] traits to [`oep`] traits on
/// [`layouts::Module`].
pub mod delegates;

/// Handle types, the [`layouts::Backend`] trait, [`layouts::Module`] and the
/// runtime configuration.
pub mod layouts;

/// Open Extension Points: `unsafe` traits that backend crates implement.
///
/// Each trait mirrors a corresponding [`api`] trait and carries the `Impl`
/// suffix. See [`doc::backend_safety`] for the safety contract.
pub mod oep;

mod error;

pub use error::*;

/// Embedded safety contract documentation for backend implementors.
pub mod doc {
    /// Safety contract that all [`crate::oep`] trait implementations must uphold.
    #[doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/docs/backend_safety_contract.md"))]
    pub mod backend_safety {
        pub const _PLACEHOLDER: () = ();
    }
}
