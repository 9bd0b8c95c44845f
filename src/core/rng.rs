//! Deterministic random number generation for puzzle setup.
//!
//! Same seed, same scramble. Named contexts give independent streams from
//! one seed, so each level of a session (and the Cosmic Recall side game)
//! draws from its own sequence. Context seeds are mixed with `FxHasher`,
//! which is fixed across Rust releases but depends on pointer width.
//!
//! ```
//! use mandala_path::core::PuzzleRng;
//!
//! let mut a = PuzzleRng::new(7);
//! let mut b = PuzzleRng::new(7);
//! assert_eq!(a.gen_rotation(12), b.gen_rotation(12));
//! ```

use std::hash::{Hash, Hasher};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;

/// Deterministic RNG used to scramble puzzles.
#[derive(Clone, Debug)]
pub struct PuzzleRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl PuzzleRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from the operating system's entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive an independent stream for a named purpose.
    ///
    /// The same context always yields the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = FxHasher::default();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Draw a uniform rotation in `[0, segment_count)`.
    ///
    /// `segment_count` must be non-zero.
    pub fn gen_rotation(&mut self, segment_count: usize) -> usize {
        self.inner.gen_range(0..segment_count)
    }

    /// Draw a uniform index in `range`, which must be non-empty.
    pub fn gen_index(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }
}
