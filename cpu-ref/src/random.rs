use obliv_backend::{
    RuntimeResult,
    layouts::{FheUint, Handle, Module, UnsignedInteger},
    oep::FheRandomImpl,
};

use crate::PlainRef;

unsafe impl FheRandomImpl<Self> for PlainRef {
    fn fhe_random_impl<T: UnsignedInteger>(module: &Module<Self>) -> RuntimeResult<FheUint<T>> {
        let res: Handle = module.handle().with_store(|store| Ok(store.random(T::BITS)))?;
        tracing::trace!(bits = T::BITS, %res, "random");
        Ok(FheUint::from_handle(res))
    }
}
