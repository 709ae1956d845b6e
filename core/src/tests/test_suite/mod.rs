mod safe_cast;
mod sort;

pub use bounded_random::*;
pub use order::*;
pub use safe_cast::*;
pub use sort::*;

use crypto_bigint::{Encoding, U256};
use obliv_backend::{
    api::{FheDecrypt, FheEncryptTrivial, ModuleDecryptionKey, ModuleNew},
    layouts::{Backend, FheBool, FheUint, Module, RuntimeConfig, UnsignedInteger},
};

/// Seed of the runtime randomness in every test context.
pub const TEST_SEED: [u8; 32] = [42u8; 32];

/// Seed of the plaintext inputs generated by the randomized tests.
pub const TEST_INPUT_SEED: [u8; 32] = [7u8; 32];

/// Builds `hi * 2^128 + lo`.
pub fn u256(hi: u128, lo: u128) -> U256 {
    let mut bytes: [u8; 32] = [0u8; 32];
    bytes[..16].copy_from_slice(&hi.to_be_bytes());
    bytes[16..].copy_from_slice(&lo.to_be_bytes());
    U256::from_be_bytes(bytes)
}

pub struct TestContext<BE: Backend> {
    pub module: Module<BE>,
    pub key: BE::DecryptionKey,
}

impl<BE: Backend> Default for TestContext<BE>
where
    Module<BE>: ModuleNew<BE> + ModuleDecryptionKey<BE>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<BE: Backend> TestContext<BE>
where
    Module<BE>: ModuleNew<BE> + ModuleDecryptionKey<BE>,
{
    pub fn new() -> Self {
        let module: Module<BE> = Module::<BE>::new(&RuntimeConfig::seeded(TEST_SEED));
        let key: BE::DecryptionKey = module.decryption_key();
        Self { module, key }
    }
}

impl<BE: Backend> TestContext<BE>
where
    Module<BE>: FheEncryptTrivial + FheDecrypt<BE>,
{
    pub fn encrypt<T: UnsignedInteger>(&self, value: T) -> FheUint<T> {
        self.module.fhe_encrypt_trivial(value).unwrap()
    }

    pub fn encrypt_all<T: UnsignedInteger>(&self, values: &[T]) -> Vec<FheUint<T>> {
        values.iter().map(|v| self.encrypt(*v)).collect()
    }

    pub fn decrypt<T: UnsignedInteger>(&self, a: &FheUint<T>) -> T {
        self.module.fhe_decrypt(&self.key, a).unwrap()
    }

    pub fn decrypt_all<T: UnsignedInteger>(&self, a: &[FheUint<T>]) -> Vec<T> {
        a.iter().map(|ct| self.decrypt(ct)).collect()
    }

    pub fn decrypt_bool(&self, a: &FheBool) -> bool {
        self.module.fhe_decrypt_bool(&self.key, a).unwrap()
    }
}
