use crate::foundation::rng::Rng64;

/// Explicitly constructed per-sketch simulation context.
///
/// Holds the seeded generator every random decision draws from. Each sketch
/// instance owns one, so independent instances never interfere and test runs
/// can execute in parallel.
#[derive(Clone, Copy, Debug)]
pub struct SimContext {
    seed: u64,
    rng: Rng64,
}

impl SimContext {
    /// Create a context from a seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Rng64::new(seed),
        }
    }

    /// The seed this context was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The generator. All engine randomness goes through here.
    pub fn rng(&mut self) -> &mut Rng64 {
        &mut self.rng
    }

    /// Derive an independent context for a sub-stream (e.g. one clipped
    /// region of a composition), keyed by a stable label.
    pub fn fork(&self, label: u64) -> SimContext {
        SimContext::new(self.seed ^ label.wrapping_mul(0xD6E8_FEB8_6659_FD93))
    }
}
