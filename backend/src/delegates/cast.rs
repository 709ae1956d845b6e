use crate::{
    RuntimeResult,
    api::FheCast,
    layouts::{Backend, FheUint, Module, UnsignedInteger},
    oep::FheCastImpl,
};

impl<B> FheCast for Module<B>
where
    B: Backend + FheCastImpl<B>,
{
    fn fhe_cast<S: UnsignedInteger, T: UnsignedInteger>(&self, a: &FheUint<S>) -> RuntimeResult<FheUint<T>> {
        B::fhe_cast_impl(self, a)
    }
}
