use obliv_backend::{
    RuntimeResult,
    layouts::{FheBool, FheUint, Handle, Module, UnsignedInteger},
    oep::{FheGtScalarImpl, FheLeImpl, FheLtImpl, FheSelectImpl},
};

use crate::{PlainRef, store::BOOL_BITS};

unsafe impl FheLeImpl<Self> for PlainRef {
    fn fhe_le_impl<T: UnsignedInteger>(module: &Module<Self>, a: &FheUint<T>, b: &FheUint<T>) -> RuntimeResult<FheBool> {
        let res: Handle = module.handle().with_store(|store| {
            store.binary(a.handle(), b.handle(), T::BITS, BOOL_BITS, |a, b| (a <= b) as u128)
        })?;
        tracing::trace!(bits = T::BITS, a = %a.handle(), b = %b.handle(), %res, "le");
        Ok(FheBool::from_handle(res))
    }
}

unsafe impl FheLtImpl<Self> for PlainRef {
    fn fhe_lt_impl<T: UnsignedInteger>(module: &Module<Self>, a: &FheUint<T>, b: &FheUint<T>) -> RuntimeResult<FheBool> {
        let res: Handle = module.handle().with_store(|store| {
            store.binary(a.handle(), b.handle(), T::BITS, BOOL_BITS, |a, b| (a < b) as u128)
        })?;
        tracing::trace!(bits = T::BITS, a = %a.handle(), b = %b.handle(), %res, "lt");
        Ok(FheBool::from_handle(res))
    }
}

unsafe impl FheGtScalarImpl<Self> for PlainRef {
    fn fhe_gt_scalar_impl<T: UnsignedInteger>(module: &Module<Self>, a: &FheUint<T>, b: T) -> RuntimeResult<FheBool> {
        let b: u128 = b.to_u128();
        let res: Handle = module
            .handle()
            .with_store(|store| store.unary(a.handle(), T::BITS, BOOL_BITS, |a| Ok((a > b) as u128)))?;
        tracing::trace!(bits = T::BITS, a = %a.handle(), %res, "gt_scalar");
        Ok(FheBool::from_handle(res))
    }
}

unsafe impl FheSelectImpl<Self> for PlainRef {
    fn fhe_select_impl<T: UnsignedInteger>(
        module: &Module<Self>,
        cond: &FheBool,
        a: &FheUint<T>,
        b: &FheUint<T>,
    ) -> RuntimeResult<FheUint<T>> {
        let res: Handle = module
            .handle()
            .with_store(|store| store.select(cond.handle(), a.handle(), b.handle(), T::BITS))?;
        tracing::trace!(bits = T::BITS, cond = %cond.handle(), a = %a.handle(), b = %b.handle(), %res, "select");
        Ok(FheUint::from_handle(res))
    }
}
