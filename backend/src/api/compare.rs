use crate::{
    RuntimeResult,
    layouts::{FheBool, FheUint, UnsignedInteger},
};

pub trait FheLe {
    /// Encrypts `a <= b`.
    fn fhe_le<T: UnsignedInteger>(&self, a: &FheUint<T>, b: &FheUint<T>) -> RuntimeResult<FheBool>;
}

pub trait FheLt {
    /// Encrypts `a < b`.
    fn fhe_lt<T: UnsignedInteger>(&self, a: &FheUint<T>, b: &FheUint<T>) -> RuntimeResult<FheBool>;
}

pub trait FheGtScalar {
    /// Encrypts `a > b` for a plaintext `b`.
    fn fhe_gt_scalar<T: UnsignedInteger>(&self, a: &FheUint<T>, b: T) -> RuntimeResult<FheBool>;
}

pub trait FheSelect {
    /// Returns a fresh ciphertext encrypting `a` if `cond` encrypts true, `b` otherwise.
    fn fhe_select<T: UnsignedInteger>(&self, cond: &FheBool, a: &FheUint<T>, b: &FheUint<T>) -> RuntimeResult<FheUint<T>>;
}
