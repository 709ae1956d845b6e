use crate::{
    api::{ModuleDecryptionKey, ModuleNew},
    layouts::{Backend, Module, RuntimeConfig},
    oep::{ModuleDecryptionKeyImpl, ModuleNewImpl},
};

impl<B> ModuleNew<B> for Module<B>
where
    B: Backend + ModuleNewImpl<B>,
{
    fn new(config: &RuntimeConfig) -> Self {
        B::new_impl(config)
    }
}

impl<B> ModuleDecryptionKey<B> for Module<B>
where
    B: Backend + ModuleDecryptionKeyImpl<B>,
{
    fn decryption_key(&self) -> B::DecryptionKey {
        B::decryption_key_impl(self)
    }
}
