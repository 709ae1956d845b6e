use obliv_backend::layouts::{Backend, FheUint, Module, UnsignedInteger};
use tracing::instrument;

use crate::{FheOrder, ObliviousResult};

/// Oblivious sorting and array reductions.
///
/// The length of the array is public; the number and order of runtime calls
/// depend on it alone.
pub trait FheSort {
    /// Returns the elements of `items` in ascending order of their plaintexts.
    ///
    /// Bubble sort without early exit: `n - 1` passes over all `n - 1`
    /// adjacent pairs, each an [`FheOrder::fhe_order`]. Empty and single
    /// element inputs are returned as is, without any runtime call. Not stable.
    fn fhe_sort<T: UnsignedInteger>(&self, items: &[FheUint<T>]) -> ObliviousResult<Vec<FheUint<T>>>;

    /// In-place variant of [`FheSort::fhe_sort`]. On error, `items` may hold a
    /// partially sorted permutation of its input handles.
    fn fhe_sort_inplace<T: UnsignedInteger>(&self, items: &mut [FheUint<T>]) -> ObliviousResult<()>;

    /// Returns a ciphertext encrypting the smallest element, `None` if empty.
    fn fhe_array_min<T: UnsignedInteger>(&self, items: &[FheUint<T>]) -> ObliviousResult<Option<FheUint<T>>>;

    /// Returns a ciphertext encrypting the largest element, `None` if empty.
    fn fhe_array_max<T: UnsignedInteger>(&self, items: &[FheUint<T>]) -> ObliviousResult<Option<FheUint<T>>>;
}

impl<BE: Backend> FheSort for Module<BE>
where
    Self: FheOrder,
{
    fn fhe_sort<T: UnsignedInteger>(&self, items: &[FheUint<T>]) -> ObliviousResult<Vec<FheUint<T>>> {
        let mut sorted: Vec<FheUint<T>> = items.to_vec();
        self.fhe_sort_inplace(&mut sorted)?;
        Ok(sorted)
    }

    #[instrument(level = "debug", skip_all, fields(bits = T::BITS, len = items.len()))]
    fn fhe_sort_inplace<T: UnsignedInteger>(&self, items: &mut [FheUint<T>]) -> ObliviousResult<()> {
        let n: usize = items.len();
        if n < 2 {
            return Ok(());
        }

        for pass in 0..n - 1 {
            tracing::trace!(pass, "bubble pass");
            for i in 0..n - 1 {
                let (lower, upper) = self.fhe_order(&items[i], &items[i + 1])?;
                items[i] = lower;
                items[i + 1] = upper;
            }
        }

        Ok(())
    }

    fn fhe_array_min<T: UnsignedInteger>(&self, items: &[FheUint<T>]) -> ObliviousResult<Option<FheUint<T>>> {
        let Some((first, rest)) = items.split_first() else {
            return Ok(None);
        };
        let mut acc: FheUint<T> = first.clone();
        for item in rest {
            acc = self.fhe_min(&acc, item)?;
        }
        Ok(Some(acc))
    }

    fn fhe_array_max<T: UnsignedInteger>(&self, items: &[FheUint<T>]) -> ObliviousResult<Option<FheUint<T>>> {
        let Some((first, rest)) = items.split_first() else {
            return Ok(None);
        };
        let mut acc: FheUint<T> = first.clone();
        for item in rest {
            acc = self.fhe_max(&acc, item)?;
        }
        Ok(Some(acc))
    }
}
