use crate::{
    RuntimeResult,
    layouts::{Backend, FheUint, Module, UnsignedInteger},
};

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::api::FheAdd] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait FheAddImpl<B: Backend> {
    fn fhe_add_impl<T: UnsignedInteger>(module: &Module<B>, a: &FheUint<T>, b: &FheUint<T>) -> RuntimeResult<FheUint<T>>;
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::api::FheAddScalar] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait FheAddScalarImpl<B: Backend> {
    fn fhe_add_scalar_impl<T: UnsignedInteger>(module: &Module<B>, a: &FheUint<T>, b: T) -> RuntimeResult<FheUint<T>>;
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::api::FheSub] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait FheSubImpl<B: Backend> {
    fn fhe_sub_impl<T: UnsignedInteger>(module: &Module<B>, a: &FheUint<T>, b: &FheUint<T>) -> RuntimeResult<FheUint<T>>;
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::api::FheRemScalar] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait FheRemScalarImpl<B: Backend> {
    fn fhe_rem_scalar_impl<T: UnsignedInteger>(module: &Module<B>, a: &FheUint<T>, b: T) -> RuntimeResult<FheUint<T>>;
}
