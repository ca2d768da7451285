//! A single persisted player.

use serde::{Deserialize, Serialize};

use crate::core::{ArenaConfig, PlayerId};

/// One row of the roster.
///
/// Field names follow the persisted `{id, name, score, isBot}` layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub name: String,
    pub score: i64,
    #[serde(default)]
    pub is_bot: bool,
}

impl PlayerRecord {
    /// A human player with a zero score.
    #[must_use]
    pub fn human(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            score: 0,
            is_bot: false,
        }
    }

    /// The canonical bot record.
    #[must_use]
    pub fn bot(config: &ArenaConfig) -> Self {
        Self {
            id: PlayerId::BOT,
            name: config.bot_name.clone(),
            score: 0,
            is_bot: true,
        }
    }

    /// Replace everything but the score with the canonical bot template.
    #[must_use]
    pub fn normalized_bot(&self, config: &ArenaConfig) -> Self {
        Self {
            score: self.score,
            ..Self::bot(config)
        }
    }
}
