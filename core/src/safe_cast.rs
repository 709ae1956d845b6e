use crypto_bigint::{Encoding, U256};
use obliv_backend::{
    api::{FheCast, FheEncryptTrivial, FheGtScalar},
    layouts::{Backend, FheBool, FheUint, Module, UnsignedInteger},
};
use tracing::instrument;

use crate::ObliviousResult;

/// Result of [`FheSafeCast`].
///
/// `value` always encrypts the source modulo `2^T::BITS`, whether or not the
/// source overflowed; `overflow` encrypts `source > T::MAX`. Callers wanting
/// saturation or rejection combine the two with an encrypted selection.
#[derive(Debug, Clone)]
pub struct CastResult<T: UnsignedInteger> {
    pub value: FheUint<T>,
    pub overflow: FheBool,
}

/// Width conversion with encrypted overflow detection.
pub trait FheSafeCast {
    /// Casts an encrypted `S` to an encrypted `T`.
    ///
    /// The flag and the truncated value are two independent runtime calls on
    /// the same source. When `T` is at least as wide as `S` the flag is still
    /// computed, against `S::MAX`, and always encrypts false.
    fn fhe_safe_cast<S, T>(&self, source: &FheUint<S>) -> ObliviousResult<CastResult<T>>
    where
        S: UnsignedInteger,
        T: UnsignedInteger;

    /// Casts a plaintext `S` to an encrypted `T`.
    ///
    /// The plaintext is first coerced into a ciphertext, so the overflow flag
    /// is an encrypted comparison result like any other.
    fn fhe_safe_cast_scalar<S, T>(&self, source: S) -> ObliviousResult<CastResult<T>>
    where
        S: UnsignedInteger,
        T: UnsignedInteger;

    /// Casts a 256-bit plaintext to an encrypted `T`.
    ///
    /// Covers sources no ciphertext width can hold, such as `2^128` cast to
    /// `u128`. The value is the low 128 bits of `source` cast to `T`; the flag
    /// is an encrypted comparison of `source >> T::BITS` (saturated to 128
    /// bits) against zero.
    fn fhe_safe_cast_u256<T: UnsignedInteger>(&self, source: &U256) -> ObliviousResult<CastResult<T>>;
}

/// Splits `source` into its high and low 128-bit halves.
pub(crate) fn split_u256(source: &U256) -> (u128, u128) {
    let bytes: [u8; 32] = source.to_be_bytes();
    let mut hi: [u8; 16] = [0u8; 16];
    let mut lo: [u8; 16] = [0u8; 16];
    hi.copy_from_slice(&bytes[..16]);
    lo.copy_from_slice(&bytes[16..]);
    (u128::from_be_bytes(hi), u128::from_be_bytes(lo))
}

/// `(hi:lo) >> T::BITS`, saturated to `u128`. Non-zero iff the source exceeds `T::MAX`.
pub(crate) fn excess_bits<T: UnsignedInteger>(hi: u128, lo: u128) -> u128 {
    if T::BITS == u128::BITS {
        hi
    } else if hi != 0 {
        u128::MAX
    } else {
        lo >> T::BITS
    }
}

/// Largest `S` value that `T` represents, expressed in `S`.
#[inline(always)]
pub(crate) fn overflow_bound<S: UnsignedInteger, T: UnsignedInteger>() -> S {
    S::from_u128_wrapping(T::mask().min(S::mask()))
}

impl<BE: Backend> FheSafeCast for Module<BE>
where
    Self: FheGtScalar + FheCast + FheEncryptTrivial,
{
    #[instrument(level = "debug", skip_all, fields(from = S::BITS, to = T::BITS))]
    fn fhe_safe_cast<S, T>(&self, source: &FheUint<S>) -> ObliviousResult<CastResult<T>>
    where
        S: UnsignedInteger,
        T: UnsignedInteger,
    {
        let overflow: FheBool = self.fhe_gt_scalar(source, overflow_bound::<S, T>())?;
        let value: FheUint<T> = self.fhe_cast(source)?;
        Ok(CastResult { value, overflow })
    }

    fn fhe_safe_cast_scalar<S, T>(&self, source: S) -> ObliviousResult<CastResult<T>>
    where
        S: UnsignedInteger,
        T: UnsignedInteger,
    {
        let source: FheUint<S> = self.fhe_encrypt_trivial(source)?;
        self.fhe_safe_cast(&source)
    }

    #[instrument(level = "debug", skip_all, fields(from = 256, to = T::BITS))]
    fn fhe_safe_cast_u256<T: UnsignedInteger>(&self, source: &U256) -> ObliviousResult<CastResult<T>> {
        let (hi, lo) = split_u256(source);

        let excess: FheUint<u128> = self.fhe_encrypt_trivial(excess_bits::<T>(hi, lo))?;
        let overflow: FheBool = self.fhe_gt_scalar(&excess, 0u128)?;

        let low: FheUint<u128> = self.fhe_encrypt_trivial(lo)?;
        let value: FheUint<T> = self.fhe_cast(&low)?;
        Ok(CastResult { value, overflow })
    }
}
