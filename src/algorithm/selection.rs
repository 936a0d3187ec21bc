//! Seeded random selection for reproducible generation

use rand::seq::{SliceRandom, index};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Seeded random selector for reproducible stochastic choices
///
/// Every random decision of a generation run goes through one selector, so two
/// runs with the same seed make identical choices.
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Shuffle a slice in place
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    /// Pick `amount` distinct items uniformly, in selection order
    ///
    /// Returns fewer items when `amount` exceeds the candidates.
    pub fn choose_distinct<T: Copy>(&mut self, candidates: &[T], amount: usize) -> Vec<T> {
        let amount = amount.min(candidates.len());
        index::sample(&mut self.rng, candidates.len(), amount)
            .into_iter()
            .filter_map(|i| candidates.get(i).copied())
            .collect()
    }

    /// Uniform integer in an inclusive range
    pub fn between(&mut self, low: u8, high: u8) -> u8 {
        if low >= high {
            return low;
        }
        self.rng.random_range(low..=high)
    }
}
