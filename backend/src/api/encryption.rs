use crate::{
    RuntimeResult,
    layouts::{Backend, FheBool, FheUint, UnsignedInteger},
};

pub trait FheEncryptTrivial {
    /// Coerces a plaintext into a ciphertext of the same width.
    fn fhe_encrypt_trivial<T: UnsignedInteger>(&self, value: T) -> RuntimeResult<FheUint<T>>;
}

pub trait FheDecrypt<B: Backend> {
    /// Resolves `a` to its plaintext, provided `key` is authorized for this module.
    fn fhe_decrypt<T: UnsignedInteger>(&self, key: &B::DecryptionKey, a: &FheUint<T>) -> RuntimeResult<T>;

    /// Resolves the encrypted bit `a`, provided `key` is authorized for this module.
    fn fhe_decrypt_bool(&self, key: &B::DecryptionKey, a: &FheBool) -> RuntimeResult<bool>;
}
