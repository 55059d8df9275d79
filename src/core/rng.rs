//! Deterministic random number generation and dice.
//!
//! Dice rolls and card draws are the only non-deterministic inputs to the
//! engine, and both flow through `GameRng`. Seeding the RNG makes an entire
//! game replayable: the same seed and the same command sequence produce the
//! same rolls, draws, and final state.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Forkable**: Independent streams (deck shuffles vs. dice)
//! - **Serializable**: O(1) state capture and restore for checkpoints
//!
//! ## Replay Usage
//!
//! ```
//! use monopoly_engine::core::{DiceRoll, GameRng};
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//!
//! // Same seed, same rolls.
//! assert_eq!(DiceRoll::roll(&mut rng1), DiceRoll::roll(&mut rng2));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG for dice rolls and deck operations.
///
/// Uses ChaCha8 for speed while maintaining high-quality randomness.
/// Supports forking so construction-time shuffles do not perturb the
/// per-turn dice stream.
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

    /// Fork this RNG to create an independent stream.
    ///
    /// Each fork produces a different but deterministic sequence. Used to
    /// isolate deck shuffling from the dice stream so adding a deck never
    /// changes the dice a seed produces.
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

    /// Roll one six-sided die.
    pub fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=6)
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}

/// The result of rolling two six-sided dice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceRoll {
    /// First die, 1..=6.
    pub die1: u8,
    /// Second die, 1..=6.
    pub die2: u8,
}

impl DiceRoll {
    /// Roll both dice from the given RNG.
    #[must_use]
    pub fn roll(rng: &mut GameRng) -> Self {
        Self {
            die1: rng.roll_die(),
            die2: rng.roll_die(),
        }
    }

    /// Construct a specific roll. Handy in tests.
    #[must_use]
    pub const fn of(die1: u8, die2: u8) -> Self {
        Self { die1, die2 }
    }

    /// Combined pip count, 2..=12.
    #[must_use]
    pub const fn total(self) -> u8 {
        self.die1 + self.die2
    }

    /// Both dice showing the same value.
    #[must_use]
    pub const fn is_double(self) -> bool {
        self.die1 == self.die2
    }
}

impl std::fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}+{}", self.die1, self.die2)
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
            assert_eq!(rng1.roll_die(), rng2.roll_die());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| rng1.roll_die()).collect();
        let seq2: Vec<_> = (0..20).map(|_| rng2.roll_die()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_die_range() {
        let mut rng = GameRng::new(7);
        for _ in 0..1000 {
            let v = rng.roll_die();
            assert!((1..=6).contains(&v), "Die value {v} out of range");
        }
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = GameRng::new(42);
        let mut forked = rng.fork();

        let seq1: Vec<_> = (0..10).map(|_| rng.roll_die()).collect();
        let seq2: Vec<_> = (0..10).map(|_| forked.roll_die()).collect();

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
    fn test_shuffle() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        // Same elements, different order (very likely with 10 elements).
        assert_eq!(data.len(), original.len());
        assert_ne!(data, original);

        data.sort();
        assert_eq!(data, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_state_restore() {
        let mut rng = GameRng::new(42);

        // Advance the RNG.
        for _ in 0..100 {
            rng.roll_die();
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.roll_die()).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.roll_die()).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
            fork_counter: 5,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }

    #[test]
    fn test_dice_total_and_doubles() {
        let roll = DiceRoll::of(3, 4);
        assert_eq!(roll.total(), 7);
        assert!(!roll.is_double());

        let double = DiceRoll::of(5, 5);
        assert_eq!(double.total(), 10);
        assert!(double.is_double());

        assert_eq!(format!("{}", double), "5+5");
    }

    #[test]
    fn test_dice_roll_in_range() {
        let mut rng = GameRng::new(99);
        for _ in 0..200 {
            let roll = DiceRoll::roll(&mut rng);
            assert!((1..=6).contains(&roll.die1));
            assert!((1..=6).contains(&roll.die2));
            assert!((2..=12).contains(&roll.total()));
        }
    }
}
