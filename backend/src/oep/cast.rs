use crate::{
    RuntimeResult,
    layouts::{Backend, FheUint, Module, UnsignedInteger},
};

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::api::FheCast] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait FheCastImpl<B: Backend> {
    fn fhe_cast_impl<S: UnsignedInteger, T: UnsignedInteger>(module: &Module<B>, a: &FheUint<S>) -> RuntimeResult<FheUint<T>>;
}
