//! Arena configuration.
//!
//! Everything the roster, store and session need to know that is not
//! part of the game rules: where the roster is persisted, what the bot is
//! called, how unnamed players are labelled, and the default RNG seed.

use serde::{Deserialize, Serialize};

/// Arena configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Key the roster is stored under in a `KeyValueStore`.
    pub storage_key: String,

    /// Display name of the bot participant.
    pub bot_name: String,

    /// Prefix for generated names (`"<prefix> <id>"`).
    pub name_prefix: String,

    /// Whether the bot takes part in rounds when a session starts.
    pub include_bot: bool,

    /// Random seed for bot moves.
    /// Same seed produces the same bot moves.
    pub seed: u64,

    /// Minimum number of choices a round needs.
    pub min_participants: usize,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            storage_key: "rps:players".to_string(),
            bot_name: "CPU Nova".to_string(),
            name_prefix: "Player".to_string(),
            include_bot: true,
            seed: 42,
            min_participants: crate::rules::MIN_PARTICIPANTS,
        }
    }
}

impl ArenaConfig {
    /// Create a new config with a custom storage key.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Create a new config with a custom bot name.
    pub fn with_bot_name(mut self, name: impl Into<String>) -> Self {
        self.bot_name = name.into();
        self
    }

    /// Create a new config with a custom name prefix.
    pub fn with_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.name_prefix = prefix.into();
        self
    }

    /// Create a new config with the bot included or left out.
    pub fn with_bot(mut self, include: bool) -> Self {
        self.include_bot = include;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Key the round counter and bot RNG state are stored under.
    #[must_use]
    pub fn session_key(&self) -> String {
        format!("{}:session", self.storage_key)
    }

    /// Generated display name for a player without one.
    #[must_use]
    pub fn default_name(&self, id: crate::core::PlayerId) -> String {
        format!("{} {}", self.name_prefix, id.raw())
    }
}
