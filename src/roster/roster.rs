//! Ordered player list with bot enforcement and score bookkeeping.

use rustc_hash::FxHashSet;
use serde_json::Value;

use super::record::PlayerRecord;
use crate::core::{ArenaConfig, PlayerId};
use crate::rules::RoundEvaluation;

/// Errors from roster mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RosterError {
    /// No record with this id.
    UnknownPlayer(PlayerId),
    /// The bot is permanent; it can only be left out of rounds.
    BotNotRemovable,
}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownPlayer(id) => write!(f, "unknown player: {}", id),
            Self::BotNotRemovable => write!(f, "the bot cannot be removed"),
        }
    }
}

impl std::error::Error for RosterError {}

/// The players known to the arena, in registration order.
///
/// Always holds exactly one bot record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Roster {
    players: Vec<PlayerRecord>,
    config: ArenaConfig,
}

impl Roster {
    /// A roster containing only the bot.
    #[must_use]
    pub fn new(config: &ArenaConfig) -> Self {
        Self {
            players: vec![PlayerRecord::bot(config)],
            config: config.clone(),
        }
    }

    /// Build from records, enforcing bot presence and unique ids.
    #[must_use]
    pub fn from_records(records: Vec<PlayerRecord>, config: &ArenaConfig) -> Self {
        let mut players = ensure_bot_presence(records, config);
        reassign_colliding_ids(&mut players);
        Self {
            players,
            config: config.clone(),
        }
    }

    /// Build from untrusted persisted data.
    ///
    /// Anything that is not an array yields a bot-only roster. Entries
    /// without a numeric id are dropped; missing or blank names become
    /// `"<prefix> <id>"`; non-numeric scores become 0.
    #[must_use]
    pub fn sanitize(raw: &Value, config: &ArenaConfig) -> Self {
        let Some(entries) = raw.as_array() else {
            log::warn!("stored roster is not a list, starting fresh");
            return Self::new(config);
        };

        let cleaned: Vec<PlayerRecord> = entries
            .iter()
            .filter_map(|entry| sanitize_entry(entry, config))
            .collect();

        if cleaned.len() != entries.len() {
            log::warn!(
                "dropped {} stored player(s) without a numeric id",
                entries.len() - cleaned.len()
            );
        }

        Self::from_records(cleaned, config)
    }

    /// All records, in order.
    #[must_use]
    pub fn records(&self) -> &[PlayerRecord] {
        &self.players
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&PlayerRecord> {
        self.players.iter().find(|p| p.id == id)
    }

    /// The bot record.
    #[must_use]
    pub fn bot(&self) -> Option<&PlayerRecord> {
        self.players.iter().find(|p| p.is_bot)
    }

    /// Display name for `id`, falling back to the generated name.
    #[must_use]
    pub fn name_of(&self, id: PlayerId) -> String {
        match self.get(id) {
            Some(p) => p.name.clone(),
            None => self.config.default_name(id),
        }
    }

    /// Players taking part in a round, in roster order.
    pub fn active(&self, include_bot: bool) -> impl Iterator<Item = &PlayerRecord> + '_ {
        self.players.iter().filter(move |p| include_bot || !p.is_bot)
    }

    /// One past the largest id in use.
    #[must_use]
    pub fn next_id(&self) -> PlayerId {
        self.players
            .iter()
            .map(|p| p.id)
            .max()
            .unwrap_or(PlayerId::BOT)
            .next()
    }

    /// Register a human player. Blank names get a generated one.
    pub fn add(&mut self, name: &str) -> PlayerId {
        let id = self.next_id();
        let trimmed = name.trim();
        let name = if trimmed.is_empty() {
            self.config.default_name(id)
        } else {
            trimmed.to_string()
        };

        log::info!("added player {} ({})", id, name);
        self.players.push(PlayerRecord::human(id, name));
        id
    }

    /// Remove a human player.
    pub fn remove(&mut self, id: PlayerId) -> Result<PlayerRecord, RosterError> {
        let index = self
            .players
            .iter()
            .position(|p| p.id == id)
            .ok_or(RosterError::UnknownPlayer(id))?;

        if self.players[index].is_bot {
            return Err(RosterError::BotNotRemovable);
        }

        let removed = self.players.remove(index);
        log::info!("removed player {} ({})", removed.id, removed.name);
        Ok(removed)
    }

    /// Rename a player. A blank name leaves the current one in place.
    pub fn rename(&mut self, id: PlayerId, name: &str) -> Result<(), RosterError> {
        let player = self
            .players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RosterError::UnknownPlayer(id))?;

        let trimmed = name.trim();
        if !trimmed.is_empty() {
            log::info!("renamed player {}: {} -> {}", id, player.name, trimmed);
            player.name = trimmed.to_string();
        }
        Ok(())
    }

    /// Zero every score.
    pub fn reset_scores(&mut self) {
        for player in &mut self.players {
            player.score = 0;
        }
        log::info!("scores reset");
    }

    /// Add a round's deltas to the matching players' scores.
    pub fn apply(&mut self, evaluation: &RoundEvaluation) {
        for delta in evaluation.deltas.iter().filter(|d| d.delta > 0) {
            if let Some(player) = self.players.iter_mut().find(|p| p.id == delta.id) {
                player.score = player.score.saturating_add(i64::from(delta.delta));
            }
        }
    }

    /// Records sorted by score, highest first. Ties keep roster order.
    #[must_use]
    pub fn leaderboard(&self) -> Vec<&PlayerRecord> {
        let mut sorted: Vec<&PlayerRecord> = self.players.iter().collect();
        sorted.sort_by(|a, b| b.score.cmp(&a.score));
        sorted
    }
}

/// Normalize bot records to the template, keeping the first one's score,
/// or prepend a fresh bot when none exists.
fn ensure_bot_presence(records: Vec<PlayerRecord>, config: &ArenaConfig) -> Vec<PlayerRecord> {
    if !records.iter().any(|p| p.is_bot) {
        let mut players = Vec::with_capacity(records.len() + 1);
        players.push(PlayerRecord::bot(config));
        players.extend(records);
        return players;
    }

    let mut seen_bot = false;
    records
        .into_iter()
        .filter_map(|p| {
            if !p.is_bot {
                return Some(p);
            }
            if seen_bot {
                return None;
            }
            seen_bot = true;
            Some(p.normalized_bot(config))
        })
        .collect()
}

/// Give a fresh id to every human whose id belongs to the bot or to an
/// earlier record. Fresh ids continue past the largest id in use.
fn reassign_colliding_ids(players: &mut [PlayerRecord]) {
    let mut next = players
        .iter()
        .map(|p| p.id)
        .max()
        .unwrap_or(PlayerId::BOT)
        .next();
    let mut taken = FxHashSet::default();
    taken.insert(PlayerId::BOT);

    for player in players.iter_mut().filter(|p| !p.is_bot) {
        if taken.insert(player.id) {
            continue;
        }
        log::warn!(
            "stored player {} reuses id {}, moved to {}",
            player.name,
            player.id,
            next
        );
        player.id = next;
        taken.insert(next);
        next = next.next();
    }
}

fn sanitize_entry(entry: &Value, config: &ArenaConfig) -> Option<PlayerRecord> {
    let id = entry.get("id").and_then(as_player_id)?;

    let name = match entry.get("name").and_then(Value::as_str) {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => config.default_name(id),
    };

    let score = entry
        .get("score")
        .and_then(Value::as_f64)
        .filter(|s| s.is_finite())
        // `as` saturates out-of-range floats at i64::MIN / i64::MAX.
        .map(|s| s.trunc() as i64)
        .unwrap_or(0);

    let is_bot = entry.get("isBot") == Some(&Value::Bool(true));

    Some(PlayerRecord {
        id,
        name,
        score,
        is_bot,
    })
}

fn as_player_id(value: &Value) -> Option<PlayerId> {
    if let Some(n) = value.as_u64() {
        return u32::try_from(n).ok().map(PlayerId::new);
    }
    value
        .as_f64()
        .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= f64::from(u32::MAX))
        .map(|f| PlayerId::new(f as u32))
}
