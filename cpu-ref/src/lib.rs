//! Reference runtime for `obliv-backend`.
//!
//! [`PlainRef`] keeps every "ciphertext" as a width-tagged plaintext in an
//! in-memory store and answers primitive requests by computing on it directly.
//! It plays the role of an FHE coprocessor running in mock mode: handles,
//! widths, wrapping semantics and decryption authorization behave as they would
//! against a real runtime, which makes it the correctness oracle for the
//! oblivious algorithms built on top. It offers no confidentiality.

mod arithmetic;
mod cast;
mod compare;
mod encryption;
mod module;
mod random;
mod store;


pub use module::*;

pub struct PlainRef {}
