use std::fmt::{Debug, Display};

/// Plaintext type of an encrypted unsigned integer.
///
/// Implemented for `u8`, `u16`, `u32`, `u64`, and `u128`. Backends move values
/// through `u128`, the widest width, and truncate on the way back.
pub trait UnsignedInteger: Copy + Ord + Debug + Display + Default + Sync + Send + 'static {
    /// Total number of bits in this integer type.
    const BITS: u32;
    const MAX: Self;
    const ZERO: Self;
    const ONE: Self;

    fn to_u128(self) -> u128;

    /// Keeps the low `BITS` bits of `value`.
    fn from_u128_wrapping(value: u128) -> Self;

    fn checked_add(self, rhs: Self) -> Option<Self>;

    fn wrapping_sub(self, rhs: Self) -> Self;

    /// `2^BITS - 1` as a `u128`.
    #[inline(always)]
    fn mask() -> u128 {
        Self::MAX.to_u128()
    }
}

macro_rules! impl_unsigned_integer {
    ($($t:ty),*) => {
        $(
            impl UnsignedInteger for $t {
                const BITS: u32 = <$t>::BITS;
                const MAX: Self = <$t>::MAX;
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline(always)]
                fn to_u128(self) -> u128 {
                    self as u128
                }

                #[inline(always)]
                fn from_u128_wrapping(value: u128) -> Self {
                    value as $t
                }

                #[inline(always)]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }

                #[inline(always)]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$t>::wrapping_sub(self, rhs)
                }
            }
        )*
    };
}

impl_unsigned_integer!(u8, u16, u32, u64, u128);
