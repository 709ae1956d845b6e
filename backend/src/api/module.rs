use crate::layouts::{Backend, RuntimeConfig};

/// Instantiate a new [crate::layouts::Module].
pub trait ModuleNew<B: Backend> {
    fn new(config: &RuntimeConfig) -> Self;
}

/// Hands out the capability needed to decrypt ciphertexts of this module.
pub trait ModuleDecryptionKey<B: Backend> {
    fn decryption_key(&self) -> B::DecryptionKey;
}
