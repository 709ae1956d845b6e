use crate::{
    RuntimeResult,
    layouts::{FheUint, UnsignedInteger},
};

pub trait FheRandom {
    /// Returns a ciphertext encrypting `T::BITS` uniformly random bits.
    fn fhe_random<T: UnsignedInteger>(&self) -> RuntimeResult<FheUint<T>>;
}
