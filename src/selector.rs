use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draws bank indices that have not been used yet in the current session.
pub struct QuestionSelector {
    rng: StdRng,
}

impl QuestionSelector {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Rejection-samples `[0, bank_size)` until an index outside `used`
    /// comes up. Returns `None` once every index has been used, so callers
    /// never spin on an exhausted bank. The caller records the result.
    pub fn pick(&mut self, bank_size: usize, used: &HashSet<usize>) -> Option<usize> {
        if (0..bank_size).all(|idx| used.contains(&idx)) {
            return None;
        }

        loop {
            let candidate = self.rng.gen_range(0..bank_size);
            if !used.contains(&candidate) {
                return Some(candidate);
            }
        }
    }
}

impl Default for QuestionSelector {
    fn default() -> Self {
        Self::new()
    }
}
