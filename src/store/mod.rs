//! Key-value persistence for the roster.
//!
//! A [`KeyValueStore`] maps string keys to string values, like browser
//! local storage. The roster is kept as a JSON array under
//! [`ArenaConfig::storage_key`] and rewritten after every mutation. The
//! round counter and bot RNG position live next to it under
//! [`ArenaConfig::session_key`].
//!
//! ## Implementations
//!
//! - [`MemoryStore`]: in-process map, for tests and throwaway sessions
//! - [`FileStore`]: one JSON file per key in a directory

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde::{Deserialize, Serialize};

use crate::core::{ArenaConfig, GameRngState};
use crate::roster::Roster;

/// Errors from a backing store.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Serialize(serde_json::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "storage i/o failed: {}", e),
            Self::Serialize(e) => write!(f, "could not encode stored data: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Serialize(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialize(e)
    }
}

/// String key-value storage.
pub trait KeyValueStore {
    /// Read a value. `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Load the roster stored under the configured key.
///
/// Never fails: a missing key, unreadable storage or unparsable JSON all
/// produce a bot-only roster, the latter two with a warning.
pub fn load_roster(store: &impl KeyValueStore, config: &ArenaConfig) -> Roster {
    let raw = match store.get(&config.storage_key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Roster::new(config),
        Err(e) => {
            log::warn!("could not read stored players: {}", e);
            return Roster::new(config);
        }
    };

    match serde_json::from_str::<serde_json::Value>(&raw) {
        Ok(value) => Roster::sanitize(&value, config),
        Err(e) => {
            log::warn!("could not parse stored players: {}", e);
            Roster::new(config)
        }
    }
}

/// Write the roster under the configured key.
pub fn save_roster(
    store: &mut impl KeyValueStore,
    config: &ArenaConfig,
    roster: &Roster,
) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(roster.records())?;
    store.set(&config.storage_key, &json)?;
    log::debug!("saved {} player(s) under {:?}", roster.len(), config.storage_key);
    Ok(())
}

/// Session progress persisted between runs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    /// Number of the next round, starting at 1.
    pub round: u32,
    /// Position of the bot's move stream.
    pub bot: GameRngState,
}

/// Load the session stored under the configured session key.
///
/// `None` when nothing usable is stored; unreadable or unparsable data
/// is logged and ignored like a bad roster.
pub fn load_session(store: &impl KeyValueStore, config: &ArenaConfig) -> Option<SessionState> {
    let raw = match store.get(&config.session_key()) {
        Ok(raw) => raw?,
        Err(e) => {
            log::warn!("could not read stored session: {}", e);
            return None;
        }
    };

    match serde_json::from_str::<SessionState>(&raw) {
        Ok(state) if state.round >= 1 => Some(state),
        Ok(state) => {
            log::warn!("stored session has invalid round {}, starting fresh", state.round);
            None
        }
        Err(e) => {
            log::warn!("could not parse stored session: {}", e);
            None
        }
    }
}

/// Write the session under the configured session key.
pub fn save_session(
    store: &mut impl KeyValueStore,
    config: &ArenaConfig,
    state: &SessionState,
) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(state)?;
    store.set(&config.session_key(), &json)?;
    log::debug!("saved session at round {}", state.round);
    Ok(())
}
