//! Seeded random selection used throughout generation
//!
//! All randomness flows through [`RandomSelector`] so a maze is fully
//! determined by its configuration seed.

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Seeded random selector for reproducible stochastic choices
#[derive(Debug, Clone)]
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

    /// Uniform index in `0..len`, or `None` for an empty range
    pub fn index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.rng.random_range(0..len))
    }

    /// Uniformly chosen element
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }

    /// Up to `amount` distinct elements, uniformly, without replacement
    ///
    /// Asking for more than `items.len()` yields every element.
    pub fn sample<T: Clone>(&mut self, items: &[T], amount: usize) -> Vec<T> {
        items
            .choose_multiple(&mut self.rng, amount)
            .cloned()
            .collect()
    }
}

/// Number of items a fraction of `total` selects, rounded down
pub fn fraction_of(total: usize, fraction: f64) -> usize {
    (total as f64 * fraction).floor() as usize
}

/// Rounded share of `total`, never below one unless `total` or `ratio` is zero
pub fn at_least_one(total: usize, ratio: f64) -> usize {
    if total == 0 || ratio <= 0.0 {
        return 0;
    }
    ((total as f64 * ratio).round() as usize).clamp(1, total)
}
