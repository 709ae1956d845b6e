use std::marker::PhantomData;

/// An encrypted integer runtime.
///
/// `Handle` is the backend state owned by a [`Module`]; it is shared by
/// reference across threads and must synchronize its own interior state.
pub trait Backend: Sized + Sync + Send {
    type Handle: Send + Sync + 'static;
    /// Opaque capability resolving ciphertexts back to plaintext.
    type DecryptionKey: Send + Sync;
    fn name() -> &'static str;
}

pub struct Module<B: Backend> {
    handle: B::Handle,
    _marker: PhantomData<B>,
}

impl<B: Backend> Module<B> {
    #[inline]
    pub fn from_handle(handle: B::Handle) -> Self {
        Self {
            handle,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn handle(&self) -> &B::Handle {
        &self.handle
    }
}
