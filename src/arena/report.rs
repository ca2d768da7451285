//! Presentable summary of a played round.

use serde::{Deserialize, Serialize};

use crate::core::{Move, PlayerId};
use crate::roster::Roster;
use crate::rules::{GameResult, RoundEvaluation};

/// One participant's line in a round summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownRow {
    pub id: PlayerId,
    pub name: String,
    #[serde(rename = "move")]
    pub hand: Move,
    pub delta: u32,
}

/// What the players see after a round is revealed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    pub round: u32,
    pub headline: String,
    pub flavor: String,
    pub breakdown: Vec<BreakdownRow>,
    pub result: GameResult,
}

impl RoundReport {
    /// Describe `evaluation` using the names in `roster`.
    #[must_use]
    pub fn new(round: u32, evaluation: &RoundEvaluation, roster: &Roster) -> Self {
        let breakdown = evaluation
            .deltas
            .iter()
            .map(|d| BreakdownRow {
                id: d.id,
                name: roster.name_of(d.id),
                hand: d.hand,
                delta: d.delta,
            })
            .collect();

        Self {
            round,
            headline: headline(evaluation, roster),
            flavor: flavor(evaluation),
            breakdown,
            result: evaluation.result(),
        }
    }
}

fn headline(evaluation: &RoundEvaluation, roster: &Roster) -> String {
    let names = evaluation
        .winners
        .iter()
        .map(|&id| roster.name_of(id))
        .collect::<Vec<_>>()
        .join(" & ");

    match evaluation.winners.len() {
        0 => "Perfect draw".to_string(),
        1 => format!("{} dominates the arena", names),
        _ => format!("Shared victory for {}", names),
    }
}

fn flavor(evaluation: &RoundEvaluation) -> String {
    if evaluation.is_draw {
        return "Nobody gives ground; get ready for another battle.".to_string();
    }
    let moves = evaluation
        .winning_moves()
        .map(Move::name)
        .collect::<Vec<_>>()
        .join(" and ");
    format!("The winning hand played {} to claim the round.", moves)
}

impl std::fmt::Display for RoundReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Round {}: {}", self.round, self.headline)?;
        writeln!(f, "{}", self.flavor)?;
        for row in &self.breakdown {
            writeln!(f, "  {:<20} {:<9} +{}", row.name, row.hand.name(), row.delta)?;
        }
        Ok(())
    }
}
