//! Core types: players, moves, RNG and move sources, configuration.
//!
//! Nothing here knows how a round is scored; that lives in `rules`.

pub mod player;
pub mod moves;
pub mod rng;
pub mod config;

pub use player::PlayerId;
pub use moves::{Matchup, Move, ParseMoveError};
pub use rng::{GameRng, GameRngState, MoveSource, ScriptedMoves};
pub use config::ArenaConfig;
