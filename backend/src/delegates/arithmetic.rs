use crate::{
    RuntimeResult,
    api::{FheAdd, FheAddScalar, FheRemScalar, FheSub},
    layouts::{Backend, FheUint, Module, UnsignedInteger},
    oep::{FheAddImpl, FheAddScalarImpl, FheRemScalarImpl, FheSubImpl},
};

impl<B> FheAdd for Module<B>
where
    B: Backend + FheAddImpl<B>,
{
    fn fhe_add<T: UnsignedInteger>(&self, a: &FheUint<T>, b: &FheUint<T>) -> RuntimeResult<FheUint<T>> {
        B::fhe_add_impl(self, a, b)
    }
}

impl<B> FheAddScalar for Module<B>
where
    B: Backend + FheAddScalarImpl<B>,
{
    fn fhe_add_scalar<T: UnsignedInteger>(&self, a: &FheUint<T>, b: T) -> RuntimeResult<FheUint<T>> {
        B::fhe_add_scalar_impl(self, a, b)
    }
}

impl<B> FheSub for Module<B>
where
    B: Backend + FheSubImpl<B>,
{
    fn fhe_sub<T: UnsignedInteger>(&self, a: &FheUint<T>, b: &FheUint<T>) -> RuntimeResult<FheUint<T>> {
        B::fhe_sub_impl(self, a, b)
    }
}

impl<B> FheRemScalar for Module<B>
where
    B: Backend + FheRemScalarImpl<B>,
{
    fn fhe_rem_scalar<T: UnsignedInteger>(&self, a: &FheUint<T>, b: T) -> RuntimeResult<FheUint<T>> {
        B::fhe_rem_scalar_impl(self, a, b)
    }
}
