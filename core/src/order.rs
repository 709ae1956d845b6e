use obliv_backend::{
    api::{FheLe, FheSelect},
    layouts::{Backend, FheBool, FheUint, Module, UnsignedInteger},
};

use crate::ObliviousResult;

/// Oblivious ordering of two ciphertexts.
pub trait FheOrder {
    /// Returns `(lower, upper)`, fresh ciphertexts encrypting `min(a, b)` and
    /// `max(a, b)`. On ties `a` is taken as the lower value.
    ///
    /// Always costs one encrypted comparison and two encrypted selections.
    fn fhe_order<T: UnsignedInteger>(&self, a: &FheUint<T>, b: &FheUint<T>) -> ObliviousResult<(FheUint<T>, FheUint<T>)>;

    /// Returns a fresh ciphertext encrypting `min(a, b)`.
    fn fhe_min<T: UnsignedInteger>(&self, a: &FheUint<T>, b: &FheUint<T>) -> ObliviousResult<FheUint<T>>;

    /// Returns a fresh ciphertext encrypting `max(a, b)`.
    fn fhe_max<T: UnsignedInteger>(&self, a: &FheUint<T>, b: &FheUint<T>) -> ObliviousResult<FheUint<T>>;
}

impl<BE: Backend> FheOrder for Module<BE>
where
    Self: FheLe + FheSelect,
{
    fn fhe_order<T: UnsignedInteger>(&self, a: &FheUint<T>, b: &FheUint<T>) -> ObliviousResult<(FheUint<T>, FheUint<T>)> {
        let a_le_b: FheBool = self.fhe_le(a, b)?;
        let lower: FheUint<T> = self.fhe_select(&a_le_b, a, b)?;
        let upper: FheUint<T> = self.fhe_select(&a_le_b, b, a)?;
        Ok((lower, upper))
    }

    fn fhe_min<T: UnsignedInteger>(&self, a: &FheUint<T>, b: &FheUint<T>) -> ObliviousResult<FheUint<T>> {
        let a_le_b: FheBool = self.fhe_le(a, b)?;
        Ok(self.fhe_select(&a_le_b, a, b)?)
    }

    fn fhe_max<T: UnsignedInteger>(&self, a: &FheUint<T>, b: &FheUint<T>) -> ObliviousResult<FheUint<T>> {
        let a_le_b: FheBool = self.fhe_le(a, b)?;
        Ok(self.fhe_select(&a_le_b, b, a)?)
    }
}
