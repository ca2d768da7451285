//! Player roster.
//!
//! The roster is what gets persisted between sessions: an ordered list of
//! `{id, name, score, isBot}` records. Loading goes through
//! [`Roster::sanitize`], which never fails; bad entries are dropped or
//! defaulted, and exactly one bot is guaranteed.

pub mod record;
#[allow(clippy::module_inception)]
pub mod roster;

pub use record::PlayerRecord;
pub use roster::{Roster, RosterError};
