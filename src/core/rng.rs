//! Deterministic shuffling with one forked stream per game.
//!
//! The table keeps a root `GameRng` seeded from `TableConfig::seed`. Each new
//! game, including every reset, forks the root. That makes the N-th deal of a
//! session reproducible from the seed alone.
//!
//! ```
//! use solitaire_table::core::GameRng;
//!
//! let mut root = GameRng::new(42);
//! let mut first_game = root.fork();
//! let mut second_game = root.fork();
//!
//! let mut a: Vec<u32> = (0..52).collect();
//! let mut b = a.clone();
//! first_game.shuffle(&mut a);
//! second_game.shuffle(&mut b);
//! assert_ne!(a, b);
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG with forking.
///
/// Uses ChaCha8, which is fast and gives good statistical quality for shuffles.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork an independent stream.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
