//! Round rules.
//!
//! - `evaluator`: pairwise scoring of simultaneous choices
//! - `result`: the round outcome as Winner / Winners / Draw
//!
//! Evaluation is pure: no state between calls, no randomness. Bot moves
//! are chosen by the caller through a `MoveSource` beforehand.

pub mod evaluator;
pub mod result;

pub use evaluator::{
    evaluate_round, Choice, RoundDelta, RoundError, RoundEvaluation, Winners, MIN_PARTICIPANTS,
};
pub use result::GameResult;
