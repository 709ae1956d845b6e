use std::{fmt, marker::PhantomData};

use crate::layouts::UnsignedInteger;

/// Opaque reference to a ciphertext held by a runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(pub u64);

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A ciphertext encrypting a `T`.
///
/// The handle is never written through: runtime operations take `&FheUint<T>`
/// and return a new `FheUint<T>`. Two distinct handles may encrypt the same
/// plaintext, so handle identity carries no information about the value.
pub struct FheUint<T: UnsignedInteger> {
    handle: Handle,
    _phantom: PhantomData<T>,
}

impl<T: UnsignedInteger> FheUint<T> {
    /// Wraps a raw handle. Only backends should mint handles.
    #[inline]
    pub fn from_handle(handle: Handle) -> Self {
        Self {
            handle,
            _phantom: PhantomData,
        }
    }

    #[inline]
    pub fn handle(&self) -> Handle {
        self.handle
    }

    #[inline]
    pub fn bits(&self) -> u32 {
        T::BITS
    }
}

impl<T: UnsignedInteger> Clone for FheUint<T> {
    fn clone(&self) -> Self {
        Self::from_handle(self.handle)
    }
}

impl<T: UnsignedInteger> fmt::Debug for FheUint<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FheUint<u{}>({})", T::BITS, self.handle)
    }
}

/// A ciphertext encrypting a single bit, produced by encrypted predicates.
#[derive(Clone)]
pub struct FheBool {
    handle: Handle,
}

impl FheBool {
    #[inline]
    pub fn from_handle(handle: Handle) -> Self {
        Self { handle }
    }

    #[inline]
    pub fn handle(&self) -> Handle {
        self.handle
    }
}

impl fmt::Debug for FheBool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FheBool({})", self.handle)
    }
}
