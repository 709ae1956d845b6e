use crate::layouts::{Backend, Module, RuntimeConfig};

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::api::ModuleNew] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait ModuleNewImpl<B: Backend> {
    fn new_impl(config: &RuntimeConfig) -> Module<B>;
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::api::ModuleDecryptionKey] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait ModuleDecryptionKeyImpl<B: Backend> {
    fn decryption_key_impl(module: &Module<B>) -> B::DecryptionKey;
}
