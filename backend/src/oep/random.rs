use crate::{
    RuntimeResult,
    layouts::{Backend, FheUint, Module, UnsignedInteger},
};

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::api::FheRandom] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait FheRandomImpl<B: Backend> {
    fn fhe_random_impl<T: UnsignedInteger>(module: &Module<B>) -> RuntimeResult<FheUint<T>>;
}
