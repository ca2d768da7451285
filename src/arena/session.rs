//! A local multiplayer session.
//!
//! Humans pick their moves one at a time; once everybody active has
//! chosen, the round is revealed in one go. The bot's move is drawn from
//! a [`MoveSource`] at reveal time: either one the caller passes in, or
//! the session's own seeded [`GameRng`], which is saved with the roster.

use rustc_hash::FxHashMap;

use super::report::RoundReport;
use crate::core::{ArenaConfig, GameRng, Move, MoveSource, PlayerId};
use crate::roster::{PlayerRecord, Roster, RosterError};
use crate::rules::{evaluate_round, Choice, RoundError, MIN_PARTICIPANTS};
use crate::store::{
    load_roster, load_session, save_roster, save_session, KeyValueStore, SessionState, StoreError,
};

/// Errors from session operations.
#[derive(Debug)]
pub enum ArenaError {
    /// Too few players are active for a round.
    NotEnoughPlayers { active: usize, required: usize },
    /// These active humans have not picked a move yet.
    MissingSelections(Vec<PlayerId>),
    /// No player with this id.
    UnknownPlayer(PlayerId),
    /// The bot's move is never chosen by hand.
    BotSelection,
    Round(RoundError),
    Roster(RosterError),
    Store(StoreError),
}

impl std::fmt::Display for ArenaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotEnoughPlayers { active, required } => write!(
                f,
                "not enough players: {} active, {} required",
                active, required
            ),
            Self::MissingSelections(ids) => {
                let ids = ids.iter().map(|id| id.to_string()).collect::<Vec<_>>();
                write!(f, "moves still missing for {}", ids.join(", "))
            }
            Self::UnknownPlayer(id) => write!(f, "unknown player: {}", id),
            Self::BotSelection => write!(f, "the bot picks its own move"),
            Self::Round(e) => write!(f, "{}", e),
            Self::Roster(e) => write!(f, "{}", e),
            Self::Store(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ArenaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Round(e) => Some(e),
            Self::Roster(e) => Some(e),
            Self::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RoundError> for ArenaError {
    fn from(e: RoundError) -> Self {
        Self::Round(e)
    }
}

impl From<RosterError> for ArenaError {
    fn from(e: RosterError) -> Self {
        Self::Roster(e)
    }
}

impl From<StoreError> for ArenaError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

/// Session state: roster, pending moves, bot toggle, round counter and
/// the bot's move stream.
#[derive(Clone, Debug)]
pub struct Arena {
    config: ArenaConfig,
    roster: Roster,
    include_bot: bool,
    selections: FxHashMap<PlayerId, Move>,
    round: u32,
    bot: GameRng,
}

impl Arena {
    /// A fresh session with a bot-only roster.
    #[must_use]
    pub fn new(config: ArenaConfig) -> Self {
        let roster = Roster::new(&config);
        Self::with_roster(config, roster)
    }

    /// A session over an existing roster. The bot's moves are seeded
    /// from `config.seed`.
    #[must_use]
    pub fn with_roster(config: ArenaConfig, roster: Roster) -> Self {
        Self {
            include_bot: config.include_bot,
            bot: GameRng::new(config.seed).for_context("bot"),
            config,
            roster,
            selections: FxHashMap::default(),
            round: 1,
        }
    }

    /// Resume from whatever `store` holds.
    ///
    /// A stored session restores the round number and the bot's move
    /// stream; `config.seed` only seeds sessions with nothing stored.
    pub fn load(store: &impl KeyValueStore, config: ArenaConfig) -> Self {
        let roster = load_roster(store, &config);
        let mut arena = Self::with_roster(config, roster);
        if let Some(state) = load_session(store, &arena.config) {
            arena.restore(&state);
        }
        arena
    }

    /// Persist the roster and the session progress.
    pub fn save(&self, store: &mut impl KeyValueStore) -> Result<(), ArenaError> {
        save_roster(store, &self.config, &self.roster)?;
        save_session(store, &self.config, &self.session_state())?;
        Ok(())
    }

    /// Round number and bot RNG position, as persisted by [`Arena::save`].
    #[must_use]
    pub fn session_state(&self) -> SessionState {
        SessionState {
            round: self.round,
            bot: self.bot.state(),
        }
    }

    fn restore(&mut self, state: &SessionState) {
        self.round = state.round.max(1);
        self.bot = GameRng::from_state(&state.bot);
        log::debug!("resumed session at round {}", self.round);
    }

    #[must_use]
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Number of the next round to be played, starting at 1.
    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn include_bot(&self) -> bool {
        self.include_bot
    }

    /// Flip whether the bot plays. Returns the new setting.
    pub fn toggle_bot(&mut self) -> bool {
        self.include_bot = !self.include_bot;
        log::info!("bot {}", if self.include_bot { "active" } else { "paused" });
        self.include_bot
    }

    pub fn add_player(&mut self, name: &str) -> PlayerId {
        self.roster.add(name)
    }

    /// Remove a human, dropping any move they had picked.
    pub fn remove_player(&mut self, id: PlayerId) -> Result<PlayerRecord, ArenaError> {
        let removed = self.roster.remove(id)?;
        self.selections.remove(&id);
        Ok(removed)
    }

    pub fn rename_player(&mut self, id: PlayerId, name: &str) -> Result<(), ArenaError> {
        self.roster.rename(id, name)?;
        Ok(())
    }

    /// Zero all scores and restart the round count.
    pub fn reset_scores(&mut self) {
        self.roster.reset_scores();
        self.round = 1;
    }

    /// Record a human's move for the upcoming round. Picking again
    /// replaces the previous choice.
    pub fn select(&mut self, id: PlayerId, hand: Move) -> Result<(), ArenaError> {
        let player = self.roster.get(id).ok_or(ArenaError::UnknownPlayer(id))?;
        if player.is_bot {
            return Err(ArenaError::BotSelection);
        }
        self.selections.insert(id, hand);
        Ok(())
    }

    /// The move `id` has picked, if any.
    #[must_use]
    pub fn selection(&self, id: PlayerId) -> Option<Move> {
        self.selections.get(&id).copied()
    }

    /// Active humans still to pick, in roster order.
    #[must_use]
    pub fn pending(&self) -> Vec<PlayerId> {
        self.roster
            .active(self.include_bot)
            .filter(|p| !p.is_bot && !self.selections.contains_key(&p.id))
            .map(|p| p.id)
            .collect()
    }

    fn required_players(&self) -> usize {
        self.config.min_participants.max(MIN_PARTICIPANTS)
    }

    /// Enough players are active and every active human has chosen.
    #[must_use]
    pub fn can_play_round(&self) -> bool {
        self.roster.active(self.include_bot).count() >= self.required_players()
            && self.pending().is_empty()
    }

    /// Reveal the round: draw the bot's move, score everyone, update
    /// the roster and clear the selections.
    pub fn play_round(&mut self, bot: &mut impl MoveSource) -> Result<RoundReport, ArenaError> {
        let active = self.roster.active(self.include_bot).count();
        let required = self.required_players();
        if active < required {
            return Err(ArenaError::NotEnoughPlayers { active, required });
        }
        let pending = self.pending();
        if !pending.is_empty() {
            return Err(ArenaError::MissingSelections(pending));
        }

        let choices: Vec<Choice> = self
            .roster
            .active(self.include_bot)
            .filter_map(|p| {
                let hand = if p.is_bot {
                    bot.next_move()
                } else {
                    self.selections.get(&p.id).copied()?
                };
                Some(Choice::new(p.id, hand))
            })
            .collect();

        let evaluation = evaluate_round(&choices)?;
        self.roster.apply(&evaluation);

        let report = RoundReport::new(self.round, &evaluation, &self.roster);
        log::info!("round {}: {}", self.round, report.headline);

        self.round = self.round.saturating_add(1);
        self.selections.clear();
        Ok(report)
    }

    /// [`Arena::play_round`] with the session's own bot RNG. The RNG only
    /// advances when the round is played.
    pub fn play_round_seeded(&mut self) -> Result<RoundReport, ArenaError> {
        let mut bot = self.bot.clone();
        let report = self.play_round(&mut bot)?;
        self.bot = bot;
        Ok(report)
    }
}
