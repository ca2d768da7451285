//! Round evaluation tests.
//!
//! Fixed scenarios for the classic and multi-player cases, then property
//! tests over arbitrary rounds.

use proptest::prelude::*;
use rps_arena::core::{Move, PlayerId};
use rps_arena::rules::{evaluate_round, Choice, GameResult, RoundError};

fn round(hands: &[Move]) -> Vec<Choice> {
    hands
        .iter()
        .enumerate()
        .map(|(i, &h)| Choice::new(PlayerId::new(i as u32 + 1), h))
        .collect()
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_classic_two_player_table() {
    use Move::*;
    let table = [
        (Rock, Scissors, [1, 0]),
        (Scissors, Paper, [1, 0]),
        (Paper, Rock, [1, 0]),
        (Scissors, Rock, [0, 1]),
        (Paper, Scissors, [0, 1]),
        (Rock, Paper, [0, 1]),
    ];

    for (a, b, expected) in table {
        let eval = evaluate_round(&round(&[a, b])).unwrap();
        let deltas: Vec<u32> = eval.deltas.iter().map(|d| d.delta).collect();
        assert_eq!(deltas, expected, "{} vs {}", a, b);
        assert_eq!(eval.winners.len(), 1);
        assert!(!eval.is_draw);
    }
}

#[test]
fn test_three_distinct_moves_all_win() {
    let eval = evaluate_round(&round(&[Move::Rock, Move::Paper, Move::Scissors])).unwrap();

    assert!(eval.deltas.iter().all(|d| d.delta == 1));
    assert!(!eval.is_draw);
    assert_eq!(
        eval.result(),
        GameResult::Winners(vec![PlayerId::new(1), PlayerId::new(2), PlayerId::new(3)])
    );
}

#[test]
fn test_four_player_paper_takes_it() {
    let eval = evaluate_round(&round(&[Move::Rock, Move::Rock, Move::Paper, Move::Scissors])).unwrap();

    let deltas: Vec<u32> = eval.deltas.iter().map(|d| d.delta).collect();
    assert_eq!(deltas, vec![1, 1, 2, 0]);
    assert_eq!(eval.result(), GameResult::Winner(PlayerId::new(3)));
}

#[test]
fn test_everyone_same_move_is_draw() {
    let eval = evaluate_round(&round(&[Move::Paper; 6])).unwrap();

    assert!(eval.is_draw);
    assert!(eval.winners.is_empty());
    assert_eq!(eval.max_delta(), 0);
}

#[test]
fn test_one_choice_is_rejected() {
    let err = evaluate_round(&round(&[Move::Rock])).unwrap_err();
    assert_eq!(err, RoundError::InsufficientParticipants { found: 1 });
}

// =============================================================================
// Properties
// =============================================================================

fn any_move() -> impl Strategy<Value = Move> {
    prop_oneof![Just(Move::Rock), Just(Move::Paper), Just(Move::Scissors)]
}

proptest! {
    #[test]
    fn prop_deltas_mirror_input(hands in prop::collection::vec(any_move(), 2..12)) {
        let choices = round(&hands);
        let eval = evaluate_round(&choices).unwrap();

        prop_assert_eq!(eval.deltas.len(), choices.len());
        for (delta, choice) in eval.deltas.iter().zip(&choices) {
            prop_assert_eq!(delta.id, choice.id);
            prop_assert_eq!(delta.hand, choice.hand);
            prop_assert!(delta.delta < choices.len() as u32);
        }
    }

    #[test]
    fn prop_total_delta_counts_decisive_pairs(hands in prop::collection::vec(any_move(), 2..12)) {
        let eval = evaluate_round(&round(&hands)).unwrap();

        let mut decisive = 0u32;
        for i in 0..hands.len() {
            for j in (i + 1)..hands.len() {
                if hands[i] != hands[j] {
                    decisive += 1;
                }
            }
        }
        let total: u32 = eval.deltas.iter().map(|d| d.delta).sum();
        prop_assert_eq!(total, decisive);
    }

    #[test]
    fn prop_winners_hold_the_max(hands in prop::collection::vec(any_move(), 2..12)) {
        let eval = evaluate_round(&round(&hands)).unwrap();
        let max = eval.max_delta();

        prop_assert_eq!(eval.is_draw, max == 0);
        prop_assert_eq!(eval.winners.is_empty(), eval.is_draw);
        for d in &eval.deltas {
            prop_assert_eq!(eval.is_winner(d.id), max > 0 && d.delta == max);
        }
    }

    #[test]
    fn prop_deterministic(hands in prop::collection::vec(any_move(), 0..10)) {
        let choices = round(&hands);
        prop_assert_eq!(evaluate_round(&choices), evaluate_round(&choices));
    }

    #[test]
    fn prop_draw_iff_single_distinct_move(hands in prop::collection::vec(any_move(), 2..12)) {
        let eval = evaluate_round(&round(&hands)).unwrap();
        let distinct = Move::ALL.iter().filter(|m| hands.contains(*m)).count();

        // Exactly two distinct moves always has a strict beater.
        prop_assert_eq!(eval.is_draw, distinct == 1);
        if distinct == 3 {
            prop_assert!(!eval.winners.is_empty());
        }
    }
}
