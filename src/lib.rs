//! # rps-arena
//!
//! Rock-Paper-Scissors for any number of local players sharing one screen,
//! with an optional bot.
//!
//! ## Scoring
//!
//! Every pair of participants plays one matchup per round. Beating an
//! opponent is worth +1, so a player's round delta is the number of
//! opponents they beat. Whoever holds the highest delta wins; several
//! players can share a victory. If nobody beat anybody the round is a draw.
//!
//! ## Design Principles
//!
//! 1. **Pure core**: `rules::evaluate_round` has no state and no randomness.
//!    Bot moves come from a [`MoveSource`] chosen by the caller.
//!
//! 2. **N-Player First**: two players is just the smallest case.
//!
//! 3. **Forgiving persistence**: stored rosters are sanitized on load,
//!    never rejected.
//!
//! ## Modules
//!
//! - `core`: player ids, moves, RNG and move sources, configuration
//! - `rules`: round evaluation and results
//! - `roster`: persisted player records
//! - `store`: key-value persistence
//! - `arena`: the playable session

pub mod core;
pub mod rules;
pub mod roster;
pub mod store;
pub mod arena;

// Re-export commonly used types
pub use crate::core::{
    ArenaConfig, GameRng, GameRngState, Matchup, Move, MoveSource, ParseMoveError, PlayerId,
    ScriptedMoves,
};

pub use crate::rules::{
    evaluate_round, Choice, GameResult, RoundDelta, RoundError, RoundEvaluation, MIN_PARTICIPANTS,
};

pub use crate::roster::{PlayerRecord, Roster, RosterError};

pub use crate::store::{
    load_roster, load_session, save_roster, save_session, FileStore, KeyValueStore, MemoryStore,
    SessionState, StoreError,
};

pub use crate::arena::{Arena, ArenaError, BreakdownRow, RoundReport};
