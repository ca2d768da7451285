//! N-player round resolution by pairwise win counting.
//!
//! Every unordered pair of participants plays one matchup. The winner of
//! a matchup earns +1; ties earn nothing. A player's delta is the number
//! of opponents they beat.
//!
//! The round is won by everyone holding the maximum delta, unless that
//! maximum is zero, which is a draw. With three or more players this
//! yields shared victories: rock, paper and scissors all thrown once
//! gives every player a delta of 1 and all three win.
//!
//! ```
//! use rps_arena::core::{Move, PlayerId};
//! use rps_arena::rules::{evaluate_round, Choice};
//!
//! let eval = evaluate_round(&[
//!     Choice::new(PlayerId::new(1), Move::Rock),
//!     Choice::new(PlayerId::new(2), Move::Scissors),
//! ]).unwrap();
//!
//! assert_eq!(eval.winners.as_slice(), &[PlayerId::new(1)]);
//! assert!(!eval.is_draw);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::result::GameResult;
use crate::core::{Matchup, Move, PlayerId};

/// Fewest choices a round can be evaluated with.
pub const MIN_PARTICIPANTS: usize = 2;

/// A player's submitted move for a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Choice {
    pub id: PlayerId,
    #[serde(rename = "move")]
    pub hand: Move,
}

impl Choice {
    #[must_use]
    pub const fn new(id: PlayerId, hand: Move) -> Self {
        Self { id, hand }
    }
}

/// Score earned by one participant in one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundDelta {
    pub id: PlayerId,
    #[serde(rename = "move")]
    pub hand: Move,
    /// Number of opponents beaten.
    pub delta: u32,
}

/// Winner ids. Rounds rarely have more than a handful of players.
pub type Winners = SmallVec<[PlayerId; 4]>;

/// Outcome of [`evaluate_round`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundEvaluation {
    /// One entry per input choice, in input order.
    pub deltas: Vec<RoundDelta>,
    /// Players holding the maximum delta, in input order. Empty on a draw.
    pub winners: Winners,
    /// True when nobody won a single matchup.
    pub is_draw: bool,
}

impl RoundEvaluation {
    /// The delta earned by `id`, if it took part.
    #[must_use]
    pub fn delta_of(&self, id: PlayerId) -> Option<u32> {
        self.deltas.iter().find(|d| d.id == id).map(|d| d.delta)
    }

    #[must_use]
    pub fn is_winner(&self, id: PlayerId) -> bool {
        self.winners.contains(&id)
    }

    /// Moves thrown by the winners, in input order.
    pub fn winning_moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.deltas
            .iter()
            .filter(|d| self.is_winner(d.id))
            .map(|d| d.hand)
    }

    /// Highest delta of the round.
    #[must_use]
    pub fn max_delta(&self) -> u32 {
        self.deltas.iter().map(|d| d.delta).max().unwrap_or(0)
    }

    /// Collapse into a [`GameResult`].
    #[must_use]
    pub fn result(&self) -> GameResult {
        GameResult::from_winners(&self.winners)
    }
}

/// Errors from [`evaluate_round`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundError {
    /// Fewer than [`MIN_PARTICIPANTS`] choices were submitted.
    InsufficientParticipants { found: usize },
}

impl std::fmt::Display for RoundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsufficientParticipants { found } => write!(
                f,
                "insufficient participants: a round needs at least {} choices, got {}",
                MIN_PARTICIPANTS, found
            ),
        }
    }
}

impl std::error::Error for RoundError {}

/// Resolve a round of simultaneous choices.
///
/// Ids are expected to be unique. Duplicates are not rejected; each entry
/// is scored as its own participant.
pub fn evaluate_round(choices: &[Choice]) -> Result<RoundEvaluation, RoundError> {
    if choices.len() < MIN_PARTICIPANTS {
        return Err(RoundError::InsufficientParticipants {
            found: choices.len(),
        });
    }

    let mut wins = vec![0u32; choices.len()];
    for (i, a) in choices.iter().enumerate() {
        for (j, b) in choices.iter().enumerate().skip(i + 1) {
            match a.hand.versus(b.hand) {
                Matchup::First => wins[i] += 1,
                Matchup::Second => wins[j] += 1,
                Matchup::Tie => {}
            }
        }
    }

    let max = wins.iter().copied().max().unwrap_or(0);
    let is_draw = max == 0;
    let winners: Winners = if is_draw {
        SmallVec::new()
    } else {
        choices
            .iter()
            .zip(&wins)
            .filter(|(_, &w)| w == max)
            .map(|(c, _)| c.id)
            .collect()
    };

    let deltas = choices
        .iter()
        .zip(wins)
        .map(|(c, delta)| RoundDelta {
            id: c.id,
            hand: c.hand,
            delta,
        })
        .collect();

    log::debug!(
        "evaluated {} choices: max delta {}, {} winner(s)",
        choices.len(),
        max,
        winners.len()
    );

    Ok(RoundEvaluation {
        deltas,
        winners,
        is_draw,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choices(hands: &[Move]) -> Vec<Choice> {
        hands
            .iter()
            .enumerate()
            .map(|(i, &h)| Choice::new(PlayerId::new(i as u32 + 1), h))
            .collect()
    }

    fn deltas(eval: &RoundEvaluation) -> Vec<u32> {
        eval.deltas.iter().map(|d| d.delta).collect()
    }

    #[test]
    fn test_rock_beats_scissors() {
        let eval = evaluate_round(&choices(&[Move::Rock, Move::Scissors])).unwrap();

        assert_eq!(deltas(&eval), vec![1, 0]);
        assert_eq!(eval.winners.as_slice(), &[PlayerId::new(1)]);
        assert!(!eval.is_draw);
        assert_eq!(eval.result(), GameResult::Winner(PlayerId::new(1)));
    }

    #[test]
    fn test_second_player_can_win() {
        let eval = evaluate_round(&choices(&[Move::Rock, Move::Paper])).unwrap();

        assert_eq!(deltas(&eval), vec![0, 1]);
        assert_eq!(eval.winners.as_slice(), &[PlayerId::new(2)]);
    }

    #[test]
    fn test_same_move_is_draw() {
        for m in Move::ALL {
            let eval = evaluate_round(&choices(&[m, m])).unwrap();

            assert_eq!(deltas(&eval), vec![0, 0]);
            assert!(eval.winners.is_empty());
            assert!(eval.is_draw);
            assert_eq!(eval.result(), GameResult::Draw);
        }
    }

    #[test]
    fn test_all_three_moves_is_three_way_win() {
        // Each player beats exactly one opponent. Max delta is 1, not 0,
        // so this is a shared victory rather than a draw.
        let eval = evaluate_round(&choices(&[Move::Rock, Move::Paper, Move::Scissors])).unwrap();

        assert_eq!(deltas(&eval), vec![1, 1, 1]);
        assert!(!eval.is_draw);
        assert_eq!(
            eval.winners.as_slice(),
            &[PlayerId::new(1), PlayerId::new(2), PlayerId::new(3)]
        );
    }

    #[test]
    fn test_four_players_single_winner() {
        let eval = evaluate_round(&choices(&[
            Move::Rock,
            Move::Rock,
            Move::Paper,
            Move::Scissors,
        ]))
        .unwrap();

        assert_eq!(deltas(&eval), vec![1, 1, 2, 0]);
        assert_eq!(eval.winners.as_slice(), &[PlayerId::new(3)]);
        assert_eq!(eval.max_delta(), 2);
    }

    #[test]
    fn test_two_way_shared_victory() {
        let eval = evaluate_round(&choices(&[Move::Paper, Move::Paper, Move::Rock])).unwrap();

        assert_eq!(deltas(&eval), vec![1, 1, 0]);
        assert_eq!(
            eval.result(),
            GameResult::Winners(vec![PlayerId::new(1), PlayerId::new(2)])
        );
    }

    #[test]
    fn test_preserves_input_order() {
        let input = vec![
            Choice::new(PlayerId::new(9), Move::Scissors),
            Choice::new(PlayerId::new(0), Move::Rock),
            Choice::new(PlayerId::new(4), Move::Paper),
        ];
        let eval = evaluate_round(&input).unwrap();

        let ids: Vec<_> = eval.deltas.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![PlayerId::new(9), PlayerId::new(0), PlayerId::new(4)]);
        let hands: Vec<_> = eval.deltas.iter().map(|d| d.hand).collect();
        assert_eq!(hands, vec![Move::Scissors, Move::Rock, Move::Paper]);
    }

    #[test]
    fn test_insufficient_participants() {
        assert_eq!(
            evaluate_round(&[]),
            Err(RoundError::InsufficientParticipants { found: 0 })
        );
        assert_eq!(
            evaluate_round(&choices(&[Move::Rock])),
            Err(RoundError::InsufficientParticipants { found: 1 })
        );
    }

    #[test]
    fn test_error_message() {
        let err = RoundError::InsufficientParticipants { found: 1 };
        assert!(err.to_string().contains("insufficient participants"));
    }

    #[test]
    fn test_deterministic() {
        let input = choices(&[Move::Paper, Move::Scissors, Move::Scissors, Move::Rock]);
        assert_eq!(evaluate_round(&input), evaluate_round(&input));
    }

    #[test]
    fn test_lookup_helpers() {
        let eval = evaluate_round(&choices(&[Move::Rock, Move::Scissors, Move::Rock])).unwrap();

        assert_eq!(eval.delta_of(PlayerId::new(1)), Some(1));
        assert_eq!(eval.delta_of(PlayerId::new(2)), Some(0));
        assert_eq!(eval.delta_of(PlayerId::new(99)), None);
        assert!(eval.is_winner(PlayerId::new(3)));
        assert_eq!(eval.winning_moves().collect::<Vec<_>>(), vec![Move::Rock, Move::Rock]);
    }

    #[test]
    fn test_serializes_move_field() {
        let eval = evaluate_round(&choices(&[Move::Rock, Move::Scissors])).unwrap();
        let json = serde_json::to_value(&eval).unwrap();

        assert_eq!(json["deltas"][0]["move"], "rock");
        assert_eq!(json["winners"][0], 1);
        assert_eq!(json["is_draw"], false);
    }
}
