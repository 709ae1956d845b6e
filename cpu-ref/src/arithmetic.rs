use obliv_backend::{
    RuntimeError, RuntimeResult,
    layouts::{FheUint, Handle, Module, UnsignedInteger},
    oep::{FheAddImpl, FheAddScalarImpl, FheRemScalarImpl, FheSubImpl},
};

use crate::PlainRef;

unsafe impl FheAddImpl<Self> for PlainRef {
    fn fhe_add_impl<T: UnsignedInteger>(module: &Module<Self>, a: &FheUint<T>, b: &FheUint<T>) -> RuntimeResult<FheUint<T>> {
        let res: Handle = module
            .handle()
            .with_store(|store| store.binary(a.handle(), b.handle(), T::BITS, T::BITS, u128::wrapping_add))?;
        tracing::trace!(bits = T::BITS, a = %a.handle(), b = %b.handle(), %res, "add");
        Ok(FheUint::from_handle(res))
    }
}

unsafe impl FheAddScalarImpl<Self> for PlainRef {
    fn fhe_add_scalar_impl<T: UnsignedInteger>(module: &Module<Self>, a: &FheUint<T>, b: T) -> RuntimeResult<FheUint<T>> {
        let b: u128 = b.to_u128();
        let res: Handle = module
            .handle()
            .with_store(|store| store.unary(a.handle(), T::BITS, T::BITS, |a| Ok(a.wrapping_add(b))))?;
        tracing::trace!(bits = T::BITS, a = %a.handle(), %res, "add_scalar");
        Ok(FheUint::from_handle(res))
    }
}

unsafe impl FheSubImpl<Self> for PlainRef {
    fn fhe_sub_impl<T: UnsignedInteger>(module: &Module<Self>, a: &FheUint<T>, b: &FheUint<T>) -> RuntimeResult<FheUint<T>> {
        let res: Handle = module
            .handle()
            .with_store(|store| store.binary(a.handle(), b.handle(), T::BITS, T::BITS, u128::wrapping_sub))?;
        tracing::trace!(bits = T::BITS, a = %a.handle(), b = %b.handle(), %res, "sub");
        Ok(FheUint::from_handle(res))
    }
}

unsafe impl FheRemScalarImpl<Self> for PlainRef {
    fn fhe_rem_scalar_impl<T: UnsignedInteger>(module: &Module<Self>, a: &FheUint<T>, b: T) -> RuntimeResult<FheUint<T>> {
        let b: u128 = b.to_u128();
        if b == 0 {
            return Err(RuntimeError::DivisionByZero);
        }
        let res: Handle = module
            .handle()
            .with_store(|store| store.unary(a.handle(), T::BITS, T::BITS, |a| Ok(a % b)))?;
        tracing::trace!(bits = T::BITS, a = %a.handle(), %res, "rem_scalar");
        Ok(FheUint::from_handle(res))
    }
}
