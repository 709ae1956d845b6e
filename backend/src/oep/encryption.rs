use crate::{
    RuntimeResult,
    layouts::{Backend, FheBool, FheUint, Module, UnsignedInteger},
};

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::api::FheEncryptTrivial] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait FheEncryptTrivialImpl<B: Backend> {
    fn fhe_encrypt_trivial_impl<T: UnsignedInteger>(module: &Module<B>, value: T) -> RuntimeResult<FheUint<T>>;
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::api::FheDecrypt] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait FheDecryptImpl<B: Backend> {
    fn fhe_decrypt_impl<T: UnsignedInteger>(module: &Module<B>, key: &B::DecryptionKey, a: &FheUint<T>) -> RuntimeResult<T>;

    fn fhe_decrypt_bool_impl(module: &Module<B>, key: &B::DecryptionKey, a: &FheBool) -> RuntimeResult<bool>;
}
