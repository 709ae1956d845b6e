/// Parameters used to instantiate a [`crate::layouts::Module`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Seed of the runtime randomness. `None` draws a fresh seed from OS entropy.
    pub seed: Option<[u8; 32]>,
}

impl RuntimeConfig {
    pub fn seeded(seed: [u8; 32]) -> Self {
        Self { seed: Some(seed) }
    }

    /// Returns the configured seed, or a fresh one.
    pub fn resolve_seed(&self) -> [u8; 32] {
        self.seed.unwrap_or_else(|| {
            tracing::debug!("no runtime seed configured, drawing one from OS entropy");
            obliv_sampling::new_seed()
        })
    }
}
