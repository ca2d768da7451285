//! Deterministic random number generation for bot moves.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Serializable**: O(1) state capture and restore
//! - **Context streams**: Independent sequences for different purposes
//!
//! Bot moves are drawn through the [`MoveSource`] trait so the round
//! evaluator never touches randomness, and tests can swap in
//! [`ScriptedMoves`].
//!
//! ```
//! use rps_arena::core::{GameRng, MoveSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.next_move(), b.next_move());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use super::moves::Move;

/// Anything that can pick a move for a bot participant.
pub trait MoveSource {
    /// Produce the next move.
    fn next_move(&mut self) -> Move;
}

/// Deterministic RNG for bot moves.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        let context_seed = hasher.finish();

        Self {
            inner: ChaCha8Rng::seed_from_u64(context_seed),
            seed: context_seed,
        }
    }

    fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
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
        }
    }
}

impl MoveSource for GameRng {
    /// Uniform over [`Move::ALL`].
    fn next_move(&mut self) -> Move {
        Move::ALL[self.gen_range_usize(0..Move::ALL.len())]
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many moves have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// A fixed, cycling sequence of moves.
#[derive(Clone, Debug)]
pub struct ScriptedMoves {
    moves: Vec<Move>,
    cursor: usize,
}

impl ScriptedMoves {
    /// Build a script. Returns `None` for an empty sequence.
    #[must_use]
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Option<Self> {
        let moves: Vec<Move> = moves.into_iter().collect();
        if moves.is_empty() {
            return None;
        }
        Some(Self { moves, cursor: 0 })
    }

    /// Always play the same move.
    #[must_use]
    pub fn constant(m: Move) -> Self {
        Self { moves: vec![m], cursor: 0 }
    }
}

impl MoveSource for ScriptedMoves {
    fn next_move(&mut self) -> Move {
        let m = self.moves[self.cursor];
        self.cursor = (self.cursor + 1) % self.moves.len();
        m
    }
}

impl<S: MoveSource + ?Sized> MoveSource for &mut S {
    fn next_move(&mut self) -> Move {
        (**self).next_move()
    }
}
