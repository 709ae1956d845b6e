use crate::layouts::Handle;

/// Failure reported by an encrypted integer runtime.
///
/// Payloads only ever carry handle identities and widths, never plaintext.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    #[error("unknown ciphertext handle {0}")]
    UnknownHandle(Handle),
    #[error("ciphertext handle {handle} carries {found} bits, expected {expected}")]
    WidthMismatch { handle: Handle, expected: u32, found: u32 },
    #[error("decryption key is not authorized for this module")]
    Unauthorized,
    #[error("plaintext modulus must be non-zero")]
    DivisionByZero,
    #[error("runtime state poisoned by a panicking thread")]
    Poisoned,
}

pub type RuntimeResult<T> = Result<T, RuntimeError>;
