//! The engine's random stream.
//!
//! # Determinism strategy
//!
//! Every engine owns exactly one `SimRng`.  All draws (interarrival gaps and
//! service durations) come from it in a fixed order: station service draws
//! in ascending station order, then the arrival draw.  Two engines built
//! from the same seed and mode therefore produce identical runs.
//!
//! Unseeded runs use [`SimRng::from_entropy`]; reproducible runs inject a
//! seed through the configuration or `SimBuilder::rng`.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::TimeRange;

/// Simulation-level RNG.
///
/// Used only from the single thread that drives `advance()`.  Engines that
/// run side by side each get their own, built from the same seed.
#[derive(Clone, Debug)]
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// An unseeded stream drawn from OS entropy.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    /// Seeded when `seed` is `Some`, entropy-backed otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => SimRng::new(s),
            None    => SimRng::from_entropy(),
        }
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Draw uniformly from the half-open interval `[range.min, range.max)`.
    #[inline]
    pub fn sample_minutes(&mut self, range: TimeRange) -> f64 {
        self.0.gen_range(range.min..range.max)
    }
}
