use obliv_backend::{
    api::{FheAddScalar, FheRandom, FheRemScalar},
    layouts::{Backend, FheUint, Module, UnsignedInteger},
};
use tracing::instrument;

use crate::{ObliviousError, ObliviousResult};

/// Encrypted sampling from a plaintext inclusive range.
pub trait FheBoundedRandom {
    /// Returns a ciphertext encrypting a value in `[min, max]`.
    ///
    /// A full-width random word `r` is drawn and mapped to `min + r mod span`
    /// with `span = max - min + 1`. Modulo reduction is slightly biased towards
    /// the low residues unless `span` divides `2^T::BITS`; this is accepted in
    /// exchange for a fixed, branch-free cost.
    ///
    /// # Errors
    ///
    /// [`ObliviousError::InvalidRange`] if `min > max`, before any randomness is
    /// drawn. Runtime failures are forwarded.
    fn fhe_bounded_random<T: UnsignedInteger>(&self, min: T, max: T) -> ObliviousResult<FheUint<T>>;
}

impl<BE: Backend> FheBoundedRandom for Module<BE>
where
    Self: FheRandom + FheRemScalar + FheAddScalar,
{
    #[instrument(level = "debug", skip_all, fields(bits = T::BITS))]
    fn fhe_bounded_random<T: UnsignedInteger>(&self, min: T, max: T) -> ObliviousResult<FheUint<T>> {
        // Bounds are public: this is the only plaintext branch of the algorithm.
        if min > max {
            tracing::debug!(%min, %max, "rejected range");
            return Err(ObliviousError::InvalidRange {
                bits: T::BITS,
                min: min.to_u128(),
                max: max.to_u128(),
            });
        }

        let r: FheUint<T> = self.fhe_random()?;

        // span = 2^BITS is not representable, and needs no reduction.
        match max.wrapping_sub(min).checked_add(T::ONE) {
            None => Ok(r),
            Some(span) => {
                let reduced: FheUint<T> = self.fhe_rem_scalar(&r, span)?;
                Ok(self.fhe_add_scalar(&reduced, min)?)
            }
        }
    }
}
