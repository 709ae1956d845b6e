use crate::{
    RuntimeResult,
    layouts::{Backend, FheBool, FheUint, Module, UnsignedInteger},
};

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::api::FheLe] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait FheLeImpl<B: Backend> {
    fn fhe_le_impl<T: UnsignedInteger>(module: &Module<B>, a: &FheUint<T>, b: &FheUint<T>) -> RuntimeResult<FheBool>;
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::api::FheLt] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait FheLtImpl<B: Backend> {
    fn fhe_lt_impl<T: UnsignedInteger>(module: &Module<B>, a: &FheUint<T>, b: &FheUint<T>) -> RuntimeResult<FheBool>;
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::api::FheGtScalar] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait FheGtScalarImpl<B: Backend> {
    fn fhe_gt_scalar_impl<T: UnsignedInteger>(module: &Module<B>, a: &FheUint<T>, b: T) -> RuntimeResult<FheBool>;
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::api::FheSelect] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait FheSelectImpl<B: Backend> {
    fn fhe_select_impl<T: UnsignedInteger>(
        module: &Module<B>,
        cond: &FheBool,
        a: &FheUint<T>,
        b: &FheUint<T>,
    ) -> RuntimeResult<FheUint<T>>;
}
