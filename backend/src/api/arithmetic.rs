use crate::{
    RuntimeResult,
    layouts::{FheUint, UnsignedInteger},
};

pub trait FheAdd {
    /// Encrypts `a + b mod 2^T::BITS`.
    fn fhe_add<T: UnsignedInteger>(&self, a: &FheUint<T>, b: &FheUint<T>) -> RuntimeResult<FheUint<T>>;
}

pub trait FheAddScalar {
    /// Encrypts `a + b mod 2^T::BITS` for a plaintext `b`.
    fn fhe_add_scalar<T: UnsignedInteger>(&self, a: &FheUint<T>, b: T) -> RuntimeResult<FheUint<T>>;
}

pub trait FheSub {
    /// Encrypts `a - b mod 2^T::BITS`.
    fn fhe_sub<T: UnsignedInteger>(&self, a: &FheUint<T>, b: &FheUint<T>) -> RuntimeResult<FheUint<T>>;
}

pub trait FheRemScalar {
    /// Encrypts `a mod b` for a plaintext, non-zero `b`.
    fn fhe_rem_scalar<T: UnsignedInteger>(&self, a: &FheUint<T>, b: T) -> RuntimeResult<FheUint<T>>;
}
