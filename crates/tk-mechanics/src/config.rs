//! Engine configuration.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::check::Difficulty;

/// Settings shared by a run of the resolution engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// RNG seed for reproducible rolls. `None` draws a seed from the OS.
    pub seed: Option<u64>,
    /// DC used when a vs-DC check is requested without one.
    pub default_dc: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            default_dc: Difficulty::Medium.dc(),
        }
    }
}

impl EngineConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the fallback DC.
    pub fn with_default_dc(mut self, dc: i32) -> Self {
        self.default_dc = dc;
        self
    }

    /// Build the random source for this configuration.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
