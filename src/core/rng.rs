//! Seeded randomness for deals, cheers and decoration.
//!
//! A session owns one `GameRng`. Each consumer that must not disturb the
//! others derives its own stream with [`GameRng::for_context`]: level `n`
//! is dealt from `"deal-{n}"` and the background uses `"bubbles"`, so how
//! many cheers were drawn never changes the next board.
//!
//! ```
//! use memory_lab::core::GameRng;
//!
//! let session = GameRng::new(42);
//! let mut a = [1, 2, 3, 4, 5, 6];
//! let mut b = a;
//!
//! session.for_context("deal-1").shuffle(&mut a);
//! GameRng::new(42).for_context("deal-1").shuffle(&mut b);
//! assert_eq!(a, b);
//! ```

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::ops::Range;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// ChaCha8 stream that remembers its seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fresh stream keyed by `(seed, context)`. Independent of how far
    /// `self` has advanced.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    pub fn gen_range_f32(&mut self, range: Range<f32>) -> f32 {
        self.inner.gen_range(range)
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }

    /// Pick one entry, `None` for an empty slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shuffled(rng: &mut GameRng) -> Vec<u8> {
        let mut symbols: Vec<u8> = (0..16).collect();
        rng.shuffle(&mut symbols);
        symbols
    }

    #[test]
    fn test_same_seed_same_shuffle() {
        assert_eq!(shuffled(&mut GameRng::new(42)), shuffled(&mut GameRng::new(42)));
        assert_ne!(shuffled(&mut GameRng::new(1)), shuffled(&mut GameRng::new(2)));
    }

    #[test]
    fn test_context_ignores_advancement() {
        let mut session = GameRng::new(42);
        let cheers = ["Great!", "Brilliant!", "Eureka!"];
        for _ in 0..50 {
            session.choose(&cheers);
        }

        let mut after = session.for_context("deal-2");
        let mut fresh = GameRng::new(42).for_context("deal-2");
        assert_eq!(shuffled(&mut after), shuffled(&mut fresh));
        assert_eq!(after.seed(), fresh.seed());
    }

    #[test]
    fn test_contexts_differ() {
        let session = GameRng::new(42);
        assert_ne!(
            shuffled(&mut session.for_context("deal-1")),
            shuffled(&mut session.for_context("deal-2"))
        );
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut symbols = shuffled(&mut GameRng::new(9));
        symbols.sort_unstable();
        assert_eq!(symbols, (0..16).collect::<Vec<_>>());
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let cheers = ["Great!", "Brilliant!", "Eureka!"];
        assert!(rng.choose(&cheers).is_some_and(|c| cheers.contains(c)));

        let none: [&str; 0] = [];
        assert!(rng.choose(&none).is_none());
    }

    #[test]
    fn test_gen_range_f32_bounds() {
        let mut rng = GameRng::new(7);
        for _ in 0..100 {
            let v = rng.gen_range_f32(0.5..2.0);
            assert!((0.5..2.0).contains(&v));
        }
    }
}
