use crate::{
    RuntimeResult,
    layouts::{FheUint, UnsignedInteger},
};

pub trait FheCast {
    /// Re-encrypts `a` at width `T`: `a mod 2^T::BITS` when narrowing,
    /// zero extension when widening.
    fn fhe_cast<S: UnsignedInteger, T: UnsignedInteger>(&self, a: &FheUint<S>) -> RuntimeResult<FheUint<T>>;
}
