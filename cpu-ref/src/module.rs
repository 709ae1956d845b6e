//! Backend handle and module initialization for [`PlainRef`](crate::PlainRef).

use std::sync::{Mutex, MutexGuard};

use obliv_backend::{
    RuntimeError, RuntimeResult,
    layouts::{Backend, Handle, Module, RuntimeConfig},
    oep::{ModuleDecryptionKeyImpl, ModuleNewImpl},
};
use obliv_sampling::{RngCore, Source};

use crate::{PlainRef, store::Store};

/// Opaque handle stored inside a `Module<PlainRef>`.
///
/// Every primitive adds an entry to the store and nothing removes one
/// implicitly, so a long-lived module grows with each intermediate ciphertext.
/// Callers that no longer need a ciphertext drop it with
/// [`PlainRefHandle::release`].
pub struct PlainRefHandle {
    id: u64,
    store: Mutex<Store>,
}

impl PlainRefHandle {
    /// Identifier binding decryption keys to this module.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Number of live ciphertexts, including inputs.
    pub fn ciphertext_count(&self) -> RuntimeResult<usize> {
        Ok(self.lock()?.len())
    }

    /// Removes a ciphertext from the store. Its handle is never reallocated,
    /// so later uses fail with [`RuntimeError::UnknownHandle`].
    pub fn release(&self, handle: Handle) -> RuntimeResult<()> {
        self.lock()?.release(handle)?;
        tracing::trace!(%handle, "release");
        Ok(())
    }

    fn lock(&self) -> RuntimeResult<MutexGuard<'_, Store>> {
        self.store.lock().map_err(|_| RuntimeError::Poisoned)
    }

    pub(crate) fn with_store<R, F>(&self, f: F) -> RuntimeResult<R>
    where
        F: FnOnce(&mut Store) -> RuntimeResult<R>,
    {
        let mut store: MutexGuard<'_, Store> = self.lock()?;
        f(&mut store)
    }
}

/// Decryption capability for a single `Module<PlainRef>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainRefDecryptionKey {
    pub(crate) module_id: u64,
}

impl PlainRefDecryptionKey {
    pub(crate) fn authorize(&self, module: &Module<PlainRef>) -> RuntimeResult<()> {
        if self.module_id != module.handle().id {
            return Err(RuntimeError::Unauthorized);
        }
        Ok(())
    }
}

impl Backend for PlainRef {
    type Handle = PlainRefHandle;
    type DecryptionKey = PlainRefDecryptionKey;

    fn name() -> &'static str {
        "plain-ref"
    }
}

/// # Safety
///
/// The returned `Module` owns its store; handles are allocated monotonically
/// and never released while the module is alive.
unsafe impl ModuleNewImpl<Self> for PlainRef {
    fn new_impl(config: &RuntimeConfig) -> Module<Self> {
        let mut source: Source = Source::new(config.resolve_seed());
        let id: u64 = source.next_u64();
        let (_, store_source) = source.branch();
        tracing::debug!(backend = Self::name(), id, "module created");
        Module::from_handle(PlainRefHandle {
            id,
            store: Mutex::new(Store::new(store_source)),
        })
    }
}

unsafe impl ModuleDecryptionKeyImpl<Self> for PlainRef {
    fn decryption_key_impl(module: &Module<Self>) -> PlainRefDecryptionKey {
        PlainRefDecryptionKey {
            module_id: module.handle().id,
        }
    }
}
