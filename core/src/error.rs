use obliv_backend::RuntimeError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ObliviousError {
    /// A plaintext range with `min > max` was requested. Raised before any
    /// runtime primitive is invoked.
    #[error("invalid u{bits} range: min {min} is greater than max {max}")]
    InvalidRange { bits: u32, min: u128, max: u128 },
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

pub type ObliviousResult<T> = Result<T, ObliviousError>;
