//! Round outcome as a closed enum.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Result of a resolved round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Draw (no winner).
    Draw,
    /// Multiple winners (shared victory).
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Build from a winner list; empty means a draw.
    #[must_use]
    pub fn from_winners(winners: &[PlayerId]) -> Self {
        match winners {
            [] => GameResult::Draw,
            [only] => GameResult::Winner(*only),
            many => GameResult::Winners(many.to_vec()),
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
            GameResult::Draw => false,
        }
    }

    #[must_use]
    pub fn is_draw(&self) -> bool {
        matches!(self, GameResult::Draw)
    }
}
