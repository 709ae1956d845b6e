use obliv_backend::{
    RuntimeResult,
    layouts::{FheUint, Handle, Module, UnsignedInteger},
    oep::FheCastImpl,
};

use crate::PlainRef;

unsafe impl FheCastImpl<Self> for PlainRef {
    fn fhe_cast_impl<S: UnsignedInteger, T: UnsignedInteger>(module: &Module<Self>, a: &FheUint<S>) -> RuntimeResult<FheUint<T>> {
        // The store masks on insertion, which truncates when narrowing.
        let res: Handle = module
            .handle()
            .with_store(|store| store.unary(a.handle(), S::BITS, T::BITS, Ok))?;
        tracing::trace!(from = S::BITS, to = T::BITS, a = %a.handle(), %res, "cast");
        Ok(FheUint::from_handle(res))
    }
}
