use itertools::Itertools;
use obliv_backend::{
    api::{FheDecrypt, FheEncryptTrivial},
    layouts::{Backend, FheUint, Module, UnsignedInteger},
};
use obliv_sampling::Source;
use rand::Rng;

use crate::{
    FheSort,
    tests::test_suite::{TEST_INPUT_SEED, TestContext},
};

fn check_sort<T: UnsignedInteger, BE: Backend>(test_context: &TestContext<BE>, values: &[T])
where
    Module<BE>: FheSort + FheEncryptTrivial + FheDecrypt<BE>,
{
    let enc: Vec<FheUint<T>> = test_context.encrypt_all(values);

    let sorted: Vec<FheUint<T>> = test_context.module.fhe_sort(&enc).unwrap();
    let have: Vec<T> = test_context.decrypt_all(&sorted);
    let want: Vec<T> = values.iter().copied().sorted().collect();
    assert_eq!(have, want, "u{} sort of {values:?}", T::BITS);

    // Sorting a sorted array changes nothing.
    let resorted: Vec<FheUint<T>> = test_context.module.fhe_sort(&sorted).unwrap();
    assert_eq!(test_context.decrypt_all(&resorted), want);
}

pub fn test_sort<BE: Backend>(test_context: &TestContext<BE>)
where
    Module<BE>: FheSort + FheEncryptTrivial + FheDecrypt<BE>,
{
    check_sort::<u8, BE>(test_context, &[5, 1, 3, 3]);
    check_sort::<u16, BE>(test_context, &[6000, 42, 4096]);
    check_sort::<u32, BE>(test_context, &[10_000_000, 5, 7_000]);
    check_sort::<u64, BE>(test_context, &[1 << 50, 123, (1 << 40) + 1]);
    check_sort::<u128, BE>(test_context, &[(1 << 120) + 7, 99, 1 << 60]);

    check_sort::<u8, BE>(test_context, &[9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
    check_sort::<u32, BE>(test_context, &[u32::MAX, 0, u32::MAX, 0]);
}

pub fn test_sort_degenerate<BE: Backend>(test_context: &TestContext<BE>)
where
    Module<BE>: FheSort + FheEncryptTrivial + FheDecrypt<BE>,
{
    let empty: Vec<FheUint<u8>> = test_context.module.fhe_sort(&[]).unwrap();
    assert!(empty.is_empty());

    let single8: Vec<FheUint<u8>> = test_context.encrypt_all(&[55u8]);
    let sorted8: Vec<FheUint<u8>> = test_context.module.fhe_sort(&single8).unwrap();
    assert_eq!(test_context.decrypt_all(&sorted8), vec![55]);
    assert_eq!(sorted8[0].handle(), single8[0].handle());

    let single32: Vec<FheUint<u32>> = test_context.encrypt_all(&[123_456u32]);
    let sorted32: Vec<FheUint<u32>> = test_context.module.fhe_sort(&single32).unwrap();
    assert_eq!(test_context.decrypt_all(&sorted32), vec![123_456]);
}

pub fn test_sort_random<BE: Backend>(test_context: &TestContext<BE>)
where
    Module<BE>: FheSort + FheEncryptTrivial + FheDecrypt<BE>,
{
    let mut source: Source = Source::new(TEST_INPUT_SEED);
    for len in 0..12 {
        // Narrow range to force duplicates.
        let values: Vec<u16> = (0..len).map(|_| source.random_range(0..16u16)).collect();
        check_sort::<u16, BE>(test_context, &values);

        let values: Vec<u64> = (0..len).map(|_| source.random()).collect();
        check_sort::<u64, BE>(test_context, &values);
    }
}

pub fn test_sort_inplace<BE: Backend>(test_context: &TestContext<BE>)
where
    Module<BE>: FheSort + FheEncryptTrivial + FheDecrypt<BE>,
{
    let values: [u32; 5] = [40, 10, 30, 20, 10];
    let mut enc: Vec<FheUint<u32>> = test_context.encrypt_all(&values);
    test_context.module.fhe_sort_inplace(&mut enc).unwrap();
    let have: Vec<u32> = test_context.decrypt_all(&enc);
    assert!(have.iter().tuple_windows().all(|(a, b)| a <= b), "{have:?}");
    assert_eq!(have, vec![10, 10, 20, 30, 40]);
}

pub fn test_array_min_max<BE: Backend>(test_context: &TestContext<BE>)
where
    Module<BE>: FheSort + FheEncryptTrivial + FheDecrypt<BE>,
{
    assert!(test_context.module.fhe_array_min::<u8>(&[]).unwrap().is_none());
    assert!(test_context.module.fhe_array_max::<u8>(&[]).unwrap().is_none());

    let mut source: Source = Source::new(TEST_INPUT_SEED);
    for len in 1..10 {
        let values: Vec<u32> = (0..len).map(|_| source.random()).collect();
        let enc: Vec<FheUint<u32>> = test_context.encrypt_all(&values);

        let min: FheUint<u32> = test_context.module.fhe_array_min(&enc).unwrap().unwrap();
        let max: FheUint<u32> = test_context.module.fhe_array_max(&enc).unwrap().unwrap();

        let (want_min, want_max) = values.iter().copied().minmax().into_option().unwrap();
        assert_eq!(test_context.decrypt(&min), want_min);
        assert_eq!(test_context.decrypt(&max), want_max);
    }
}
