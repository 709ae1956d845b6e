use obliv_backend::{
    RuntimeResult,
    layouts::{FheBool, FheUint, Handle, Module, UnsignedInteger},
    oep::{FheDecryptImpl, FheEncryptTrivialImpl},
};

use crate::{
    PlainRef, PlainRefDecryptionKey,
    store::{BOOL_BITS, Store},
};

unsafe impl FheEncryptTrivialImpl<Self> for PlainRef {
    fn fhe_encrypt_trivial_impl<T: UnsignedInteger>(module: &Module<Self>, value: T) -> RuntimeResult<FheUint<T>> {
        let res: Handle = module
            .handle()
            .with_store(|store: &mut Store| Ok(store.insert(T::BITS, value.to_u128())))?;
        tracing::trace!(bits = T::BITS, %res, "encrypt_trivial");
        Ok(FheUint::from_handle(res))
    }
}

unsafe impl FheDecryptImpl<Self> for PlainRef {
    fn fhe_decrypt_impl<T: UnsignedInteger>(
        module: &Module<Self>,
        key: &PlainRefDecryptionKey,
        a: &FheUint<T>,
    ) -> RuntimeResult<T> {
        key.authorize(module)?;
        let value: u128 = module.handle().with_store(|store| store.get(a.handle(), T::BITS))?;
        Ok(T::from_u128_wrapping(value))
    }

    fn fhe_decrypt_bool_impl(module: &Module<Self>, key: &PlainRefDecryptionKey, a: &FheBool) -> RuntimeResult<bool> {
        key.authorize(module)?;
        let value: u128 = module.handle().with_store(|store| store.get(a.handle(), BOOL_BITS))?;
        Ok(value == 1)
    }
}
