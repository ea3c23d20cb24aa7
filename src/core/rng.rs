//! Random number sources for dice.
//!
//! ## Key Features
//!
//! - **Pluggable**: dice draw from any `RandomSource`
//! - **Deterministic**: `GameRng` produces the same sequence for the same seed
//! - **Forkable**: each die gets its own independent, reproducible stream
//! - **Scriptable**: `SequenceSource` replays fixed values for tests and demos
//!
//! ## Usage
//!
//! ```
//! use knockout_dice::core::{GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//!
//! // Fork a stream for each die
//! let mut first = rng.fork();
//! let mut second = rng.fork();
//!
//! // Forks are deterministic - same fork counter = same sequence
//! let mut again = GameRng::new(42);
//! assert_eq!(first.next_value(), again.fork().next_value());
//! assert_eq!(second.next_value(), again.fork().next_value());
//! ```

use std::fmt;

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A source of non-negative integers.
///
/// Dice reduce the value modulo their side count, so a source only needs to
/// cover a range at least as wide as the largest die it feeds.
pub trait RandomSource: fmt::Debug {
    /// Produce the next value.
    fn next_value(&mut self) -> u32;
}

/// Deterministic RNG with forking for independent dice streams.
///
/// Uses ChaCha8 for speed while keeping well-distributed output.
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

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Generate a random integer in the given inclusive range.
    pub fn gen_range(&mut self, range: std::ops::RangeInclusive<u32>) -> u32 {
        self.inner.gen_range(range)
    }
}

impl RandomSource for GameRng {
    fn next_value(&mut self) -> u32 {
        self.inner.next_u32()
    }
}

/// Replays a fixed list of values, wrapping around at the end.
///
/// Handy for scripting games: `SequenceSource::from_faces(&[3, 4])` makes a
/// die of six or more sides roll 3, 4, 3, 4, ...
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceSource {
    values: Vec<u32>,
    cursor: usize,
}

impl SequenceSource {
    /// Create a source that yields `values` in order, then repeats.
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "Sequence must not be empty");
        Self { values, cursor: 0 }
    }

    /// Create a source whose values land on the given die faces.
    ///
    /// A die computes `value % sides + 1`, so face `f` is stored as `f - 1`.
    /// Faces must be at least 1 and no larger than the die they feed.
    pub fn from_faces(faces: &[u32]) -> Self {
        assert!(faces.iter().all(|&f| f >= 1), "Die faces start at 1");
        Self::new(faces.iter().map(|f| f - 1).collect::<Vec<_>>())
    }
}

impl RandomSource for SequenceSource {
    fn next_value(&mut self) -> u32 {
        let value = self.values[self.cursor];
        self.cursor = (self.cursor + 1) % self.values.len();
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.next_value(), rng2.next_value());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.next_value()).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.next_value()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = GameRng::new(42);
        let mut forked = rng.fork();

        let seq1: Vec<_> = (0..10).map(|_| rng.next_value()).collect();
        let seq2: Vec<_> = (0..10).map(|_| forked.next_value()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let forked1 = rng1.fork();
        let forked2 = rng2.fork();

        assert_eq!(forked1.seed, forked2.seed);
    }

    #[test]
    fn test_sibling_forks_differ() {
        let mut rng = GameRng::new(7);
        let first = rng.fork();
        let second = rng.fork();

        assert_ne!(first.seed, second.seed);
    }

    #[test]
    fn test_gen_range_inclusive() {
        let mut rng = GameRng::new(42);
        let draws: Vec<_> = (0..500).map(|_| rng.gen_range(6..=9)).collect();

        assert!(draws.iter().all(|d| (6..=9).contains(d)));
        for n in 6..=9 {
            assert!(draws.contains(&n), "{} never drawn", n);
        }
    }

    #[test]
    fn test_sequence_wraps() {
        let mut source = SequenceSource::new(vec![1, 2, 3]);
        let seq: Vec<_> = (0..7).map(|_| source.next_value()).collect();
        assert_eq!(seq, vec![1, 2, 3, 1, 2, 3, 1]);
    }

    #[test]
    fn test_sequence_from_faces() {
        let mut source = SequenceSource::from_faces(&[1, 6]);
        assert_eq!(source.next_value(), 0);
        assert_eq!(source.next_value(), 5);
    }

    #[test]
    #[should_panic(expected = "Sequence must not be empty")]
    fn test_sequence_empty() {
        let _ = SequenceSource::new(Vec::new());
    }
}
