use crate::{
    RuntimeResult,
    api::{FheGtScalar, FheLe, FheLt, FheSelect},
    layouts::{Backend, FheBool, FheUint, Module, UnsignedInteger},
    oep::{FheGtScalarImpl, FheLeImpl, FheLtImpl, FheSelectImpl},
};

impl<B> FheLe for Module<B>
where
    B: Backend + FheLeImpl<B>,
{
    fn fhe_le<T: UnsignedInteger>(&self, a: &FheUint<T>, b: &FheUint<T>) -> RuntimeResult<FheBool> {
        B::fhe_le_impl(self, a, b)
    }
}

impl<B> FheLt for Module<B>
where
    B: Backend + FheLtImpl<B>,
{
    fn fhe_lt<T: UnsignedInteger>(&self, a: &FheUint<T>, b: &FheUint<T>) -> RuntimeResult<FheBool> {
        B::fhe_lt_impl(self, a, b)
    }
}

impl<B> FheGtScalar for Module<B>
where
    B: Backend + FheGtScalarImpl<B>,
{
    fn fhe_gt_scalar<T: UnsignedInteger>(&self, a: &FheUint<T>, b: T) -> RuntimeResult<FheBool> {
        B::fhe_gt_scalar_impl(self, a, b)
    }
}

impl<B> FheSelect for Module<B>
where
    B: Backend + FheSelectImpl<B>,
{
    fn fhe_select<T: UnsignedInteger>(&self, cond: &FheBool, a: &FheUint<T>, b: &FheUint<T>) -> RuntimeResult<FheUint<T>> {
        B::fhe_select_impl(self, cond, a, b)
    }
}
