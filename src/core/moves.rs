//! Moves and the beats relation.
//!
//! Rock beats scissors, scissors beats paper, paper beats rock.
//! Identical moves tie.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A hand a player can throw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

/// Outcome of a single pairwise matchup, seen from the left-hand move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Matchup {
    /// Same move on both sides.
    Tie,
    /// The first (left-hand) move wins.
    First,
    /// The second (right-hand) move wins.
    Second,
}

impl Move {
    /// All moves in canonical display order.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// The move this one defeats.
    #[must_use]
    pub const fn defeats(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }

    /// Does `self` beat `other`?
    #[must_use]
    pub fn beats(self, other: Move) -> bool {
        self.defeats() == other
    }

    /// Resolve `self` against `other`.
    ///
    /// ```
    /// use rps_arena::core::{Matchup, Move};
    ///
    /// assert_eq!(Move::Rock.versus(Move::Scissors), Matchup::First);
    /// assert_eq!(Move::Rock.versus(Move::Paper), Matchup::Second);
    /// assert_eq!(Move::Rock.versus(Move::Rock), Matchup::Tie);
    /// ```
    #[must_use]
    pub fn versus(self, other: Move) -> Matchup {
        if self == other {
            Matchup::Tie
        } else if self.beats(other) {
            Matchup::First
        } else {
            Matchup::Second
        }
    }

    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string does not name a move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseMoveError(pub String);

impl std::fmt::Display for ParseMoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown move: {:?} (expected rock, paper or scissors)", self.0)
    }
}

impl std::error::Error for ParseMoveError {}

impl FromStr for Move {
    type Err = ParseMoveError;

    /// Accepts full names or single letters, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" | "r" => Ok(Move::Rock),
            "paper" | "p" => Ok(Move::Paper),
            "scissors" | "s" => Ok(Move::Scissors),
            _ => Err(ParseMoveError(s.to_string())),
        }
    }
}
