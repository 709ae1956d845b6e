use crate::{
    RuntimeResult,
    api::FheRandom,
    layouts::{Backend, FheUint, Module, UnsignedInteger},
    oep::FheRandomImpl,
};

impl<B> FheRandom for Module<B>
where
    B: Backend + FheRandomImpl<B>,
{
    fn fhe_random<T: UnsignedInteger>(&self) -> RuntimeResult<FheUint<T>> {
        B::fhe_random_impl(self)
    }
}
