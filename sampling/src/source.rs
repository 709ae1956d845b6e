use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};
use rand_core::RngCore;

/// Returns a fresh 32-byte seed drawn from the thread-local OS-seeded generator.
pub fn new_seed() -> [u8; 32] {
    let mut seed: [u8; 32] = [0u8; 32];
    rand::rng().fill_bytes(&mut seed);
    seed
}

pub struct Source {
    source: ChaCha8Rng,
}

impl Source {
    pub fn new(seed: [u8; 32]) -> Source {
        Source {
            source: ChaCha8Rng::from_seed(seed),
        }
    }

    pub fn branch(&mut self) -> ([u8; 32], Self) {
        let seed: [u8; 32] = self.new_seed();
        (seed, Source::new(seed))
    }

    pub fn new_seed(&mut self) -> [u8; 32] {
        let mut seed: [u8; 32] = [0u8; 32];
        self.fill_bytes(&mut seed);
        seed
    }

    /// Returns 128 uniformly random bits, high word drawn first.
    #[inline(always)]
    pub fn next_u128(&mut self) -> u128 {
        let hi: u128 = self.next_u64() as u128;
        let lo: u128 = self.next_u64() as u128;
        (hi << 64) | lo
    }

    /// Returns the `bits` low bits of [`Source::next_u128`].
    #[inline(always)]
    pub fn next_u128_masked(&mut self, bits: u32) -> u128 {
        debug_assert!(bits > 0 && bits <= u128::BITS, "invalid bit count: {bits}");
        let x: u128 = self.next_u128();
        if bits == u128::BITS { x } else { x & ((1u128 << bits) - 1) }
    }
}

impl RngCore for Source {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.source.next_u32()
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.source.next_u64()
    }

    #[inline(always)]
    fn fill_bytes(&mut self, bytes: &mut [u8]) {
        self.source.fill_bytes(bytes)
    }
}
