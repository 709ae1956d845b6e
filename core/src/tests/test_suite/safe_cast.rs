use obliv_backend::{
    api::{FheDecrypt, FheEncryptTrivial},
    layouts::{Backend, FheUint, Module, UnsignedInteger},
};

use crate::{CastResult, FheSafeCast, U256, tests::test_suite::{TestContext, u256}};

fn check_cast<S: UnsignedInteger, T: UnsignedInteger, BE: Backend>(test_context: &TestContext<BE>, source: S)
where
    Module<BE>: FheSafeCast + FheEncryptTrivial + FheDecrypt<BE>,
{
    let want_value: T = T::from_u128_wrapping(source.to_u128());
    let want_overflow: bool = source.to_u128() > T::mask();

    let source_enc: FheUint<S> = test_context.encrypt(source);
    let res: CastResult<T> = test_context.module.fhe_safe_cast(&source_enc).unwrap();
    assert_eq!(test_context.decrypt(&res.value), want_value, "u{} -> u{} of {source}", S::BITS, T::BITS);
    assert_eq!(
        test_context.decrypt_bool(&res.overflow),
        want_overflow,
        "u{} -> u{} overflow of {source}",
        S::BITS,
        T::BITS
    );

    let res: CastResult<T> = test_context.module.fhe_safe_cast_scalar(source).unwrap();
    assert_eq!(test_context.decrypt(&res.value), want_value);
    assert_eq!(test_context.decrypt_bool(&res.overflow), want_overflow);
}

/// Plaintext sources cast to each width, within bounds and one past them.
pub fn test_cast_scalar<BE: Backend>(test_context: &TestContext<BE>)
where
    Module<BE>: FheSafeCast + FheEncryptTrivial + FheDecrypt<BE>,
{
    let res: CastResult<u8> = test_context.module.fhe_safe_cast_scalar(200u16).unwrap();
    assert_eq!(test_context.decrypt(&res.value), 200);
    assert!(!test_context.decrypt_bool(&res.overflow));

    let res: CastResult<u8> = test_context.module.fhe_safe_cast_scalar(256u16).unwrap();
    assert!(test_context.decrypt_bool(&res.overflow));
    assert_eq!(test_context.decrypt(&res.value), 0);

    check_cast::<u32, u16, BE>(test_context, 65_535);
    check_cast::<u32, u16, BE>(test_context, 65_536);
    check_cast::<u64, u32, BE>(test_context, 4_294_967_295);
    check_cast::<u64, u32, BE>(test_context, 4_294_967_296);
    check_cast::<u128, u64, BE>(test_context, 123_456_789);
    check_cast::<u128, u64, BE>(test_context, 1 << 64);
    check_cast::<u128, u128, BE>(test_context, (1 << 100) + 5);
    check_cast::<u128, u128, BE>(test_context, u128::MAX);
}

/// `2^W - 1` fits, `2^W` overflows and truncates to zero, for every source
/// width able to represent `2^W`.
pub fn test_cast_boundaries<BE: Backend>(test_context: &TestContext<BE>)
where
    Module<BE>: FheSafeCast + FheEncryptTrivial + FheDecrypt<BE>,
{
    fn check_boundary<S: UnsignedInteger, T: UnsignedInteger, BE: Backend>(test_context: &TestContext<BE>)
    where
        Module<BE>: FheSafeCast + FheEncryptTrivial + FheDecrypt<BE>,
    {
        let max: u128 = T::mask();
        check_cast::<S, T, BE>(test_context, S::from_u128_wrapping(max));
        check_cast::<S, T, BE>(test_context, S::from_u128_wrapping(max + 1));
        check_cast::<S, T, BE>(test_context, S::MAX);
        check_cast::<S, T, BE>(test_context, S::ZERO);
    }

    check_boundary::<u16, u8, BE>(test_context);
    check_boundary::<u32, u8, BE>(test_context);
    check_boundary::<u128, u8, BE>(test_context);
    check_boundary::<u32, u16, BE>(test_context);
    check_boundary::<u64, u16, BE>(test_context);
    check_boundary::<u64, u32, BE>(test_context);
    check_boundary::<u128, u32, BE>(test_context);
    check_boundary::<u128, u64, BE>(test_context);
}

/// The truncated value is returned whatever the flag says.
pub fn test_cast_value_independent_of_flag<BE: Backend>(test_context: &TestContext<BE>)
where
    Module<BE>: FheSafeCast + FheEncryptTrivial + FheDecrypt<BE>,
{
    let source: FheUint<u64> = test_context.encrypt(0xDEAD_BEEF_0000_0123u64);

    let res: CastResult<u8> = test_context.module.fhe_safe_cast(&source).unwrap();
    assert!(test_context.decrypt_bool(&res.overflow));
    assert_eq!(test_context.decrypt(&res.value), 0x23);

    let res: CastResult<u16> = test_context.module.fhe_safe_cast(&source).unwrap();
    assert!(test_context.decrypt_bool(&res.overflow));
    assert_eq!(test_context.decrypt(&res.value), 0x0123);

    let res: CastResult<u32> = test_context.module.fhe_safe_cast(&source).unwrap();
    assert!(test_context.decrypt_bool(&res.overflow));
    assert_eq!(test_context.decrypt(&res.value), 0x0000_0123);
}

/// Equal or wider targets never overflow.
pub fn test_cast_widening<BE: Backend>(test_context: &TestContext<BE>)
where
    Module<BE>: FheSafeCast + FheEncryptTrivial + FheDecrypt<BE>,
{
    check_cast::<u8, u8, BE>(test_context, u8::MAX);
    check_cast::<u8, u32, BE>(test_context, u8::MAX);
    check_cast::<u16, u128, BE>(test_context, 0xBEEF);
    check_cast::<u64, u128, BE>(test_context, u64::MAX);
}

fn check_cast_u256<T: UnsignedInteger, BE: Backend>(test_context: &TestContext<BE>, hi: u128, lo: u128)
where
    Module<BE>: FheSafeCast + FheEncryptTrivial + FheDecrypt<BE>,
{
    let want_value: T = T::from_u128_wrapping(lo);
    let want_overflow: bool = hi != 0 || lo > T::mask();

    let source: U256 = u256(hi, lo);
    let res: CastResult<T> = test_context.module.fhe_safe_cast_u256(&source).unwrap();
    assert_eq!(test_context.decrypt(&res.value), want_value, "u256 -> u{} of ({hi}, {lo})", T::BITS);
    assert_eq!(
        test_context.decrypt_bool(&res.overflow),
        want_overflow,
        "u256 -> u{} overflow of ({hi}, {lo})",
        T::BITS
    );
}

/// 256-bit plaintexts reach the `2^W` boundary of every width, `u128` included.
pub fn test_cast_u256<BE: Backend>(test_context: &TestContext<BE>)
where
    Module<BE>: FheSafeCast + FheEncryptTrivial + FheDecrypt<BE>,
{
    let res: CastResult<u128> = test_context.module.fhe_safe_cast_u256(&u256(1, 0)).unwrap();
    assert!(test_context.decrypt_bool(&res.overflow));
    assert_eq!(test_context.decrypt(&res.value), 0);

    let res: CastResult<u128> = test_context.module.fhe_safe_cast_u256(&u256(0, u128::MAX)).unwrap();
    assert!(!test_context.decrypt_bool(&res.overflow));
    assert_eq!(test_context.decrypt(&res.value), u128::MAX);

    check_cast_u256::<u128, BE>(test_context, 0, (1 << 100) + 5);
    check_cast_u256::<u128, BE>(test_context, u128::MAX, u128::MAX);

    check_cast_u256::<u8, BE>(test_context, 0, 255);
    check_cast_u256::<u8, BE>(test_context, 0, 256);
    check_cast_u256::<u8, BE>(test_context, 1, 5);
    check_cast_u256::<u16, BE>(test_context, 0, 65_535);
    check_cast_u256::<u16, BE>(test_context, 0, 65_536);
    check_cast_u256::<u32, BE>(test_context, 0, 4_294_967_296);
    check_cast_u256::<u64, BE>(test_context, 0, u64::MAX as u128);
    check_cast_u256::<u64, BE>(test_context, 0, 1 << 64);
    check_cast_u256::<u64, BE>(test_context, u128::MAX, u128::MAX);
}
