//! Per-width entry points.
//!
//! Each function is a monomorphic instantiation of the generic algorithm of
//! the same family ([`FheBoundedRandom`], [`FheOrder`], [`FheSort`],
//! [`FheSafeCast`]) for one of the five supported widths.

use obliv_backend::layouts::{Backend, FheUint, Module, UnsignedInteger};

use crate::{CastResult, FheBoundedRandom, FheOrder, FheSafeCast, FheSort, ObliviousResult, U256};

macro_rules! impl_width_entry_points {
    ($($t:ty => $bounded_random:ident, $order:ident, $sort:ident, $cast_to:ident, $cast_scalar_to:ident, $cast_u256_to:ident;)*) => {
        $(
            #[doc = concat!("[`FheBoundedRandom::fhe_bounded_random`] at width `", stringify!($t), "`.")]
            pub fn $bounded_random<BE: Backend>(module: &Module<BE>, min: $t, max: $t) -> ObliviousResult<FheUint<$t>>
            where
                Module<BE>: FheBoundedRandom,
            {
                module.fhe_bounded_random(min, max)
            }

            #[doc = concat!("[`FheOrder::fhe_order`] at width `", stringify!($t), "`.")]
            pub fn $order<BE: Backend>(
                module: &Module<BE>,
                a: &FheUint<$t>,
                b: &FheUint<$t>,
            ) -> ObliviousResult<(FheUint<$t>, FheUint<$t>)>
            where
                Module<BE>: FheOrder,
            {
                module.fhe_order(a, b)
            }

            #[doc = concat!("[`FheSort::fhe_sort`] at width `", stringify!($t), "`.")]
            pub fn $sort<BE: Backend>(module: &Module<BE>, items: &[FheUint<$t>]) -> ObliviousResult<Vec<FheUint<$t>>>
            where
                Module<BE>: FheSort,
            {
                module.fhe_sort(items)
            }

            #[doc = concat!("[`FheSafeCast::fhe_safe_cast`] to width `", stringify!($t), "`.")]
            pub fn $cast_to<BE: Backend, S: UnsignedInteger>(
                module: &Module<BE>,
                source: &FheUint<S>,
            ) -> ObliviousResult<CastResult<$t>>
            where
                Module<BE>: FheSafeCast,
            {
                module.fhe_safe_cast::<S, $t>(source)
            }

            #[doc = concat!("[`FheSafeCast::fhe_safe_cast_scalar`] to width `", stringify!($t), "`.")]
            pub fn $cast_scalar_to<BE: Backend, S: UnsignedInteger>(
                module: &Module<BE>,
                source: S,
            ) -> ObliviousResult<CastResult<$t>>
            where
                Module<BE>: FheSafeCast,
            {
                module.fhe_safe_cast_scalar::<S, $t>(source)
            }

            #[doc = concat!("[`FheSafeCast::fhe_safe_cast_u256`] to width `", stringify!($t), "`.")]
            pub fn $cast_u256_to<BE: Backend>(module: &Module<BE>, source: &U256) -> ObliviousResult<CastResult<$t>>
            where
                Module<BE>: FheSafeCast,
            {
                module.fhe_safe_cast_u256::<$t>(source)
            }
        )*
    };
}

impl_width_entry_points! {
    u8 => bounded_random_u8, order_u8, sort_u8, cast_to_u8, cast_scalar_to_u8, cast_u256_to_u8;
    u16 => bounded_random_u16, order_u16, sort_u16, cast_to_u16, cast_scalar_to_u16, cast_u256_to_u16;
    u32 => bounded_random_u32, order_u32, sort_u32, cast_to_u32, cast_scalar_to_u32, cast_u256_to_u32;
    u64 => bounded_random_u64, order_u64, sort_u64, cast_to_u64, cast_scalar_to_u64, cast_u256_to_u64;
    u128 => bounded_random_u128, order_u128, sort_u128, cast_to_u128, cast_scalar_to_u128, cast_u256_to_u128;
}
