use crate::{
    RuntimeResult,
    api::{FheDecrypt, FheEncryptTrivial},
    layouts::{Backend, FheBool, FheUint, Module, UnsignedInteger},
    oep::{FheDecryptImpl, FheEncryptTrivialImpl},
};

impl<B> FheEncryptTrivial for Module<B>
where
    B: Backend + FheEncryptTrivialImpl<B>,
{
    fn fhe_encrypt_trivial<T: UnsignedInteger>(&self, value: T) -> RuntimeResult<FheUint<T>> {
        B::fhe_encrypt_trivial_impl(self, value)
    }
}

impl<B> FheDecrypt<B> for Module<B>
where
    B: Backend + FheDecryptImpl<B>,
{
    fn fhe_decrypt<T: UnsignedInteger>(&self, key: &B::DecryptionKey, a: &FheUint<T>) -> RuntimeResult<T> {
        B::fhe_decrypt_impl(self, key, a)
    }

    fn fhe_decrypt_bool(&self, key: &B::DecryptionKey, a: &FheBool) -> RuntimeResult<bool> {
        B::fhe_decrypt_bool_impl(self, key, a)
    }
}
