//! Player identification.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Ids are assigned by the roster and are
//! unique within it; they are not dense indices, since players can be
//! removed and ids are never reused while a larger one exists.

use serde::{Deserialize, Serialize};

/// Player identifier.
///
/// The bot always owns [`PlayerId::BOT`]. Human players start at 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Canonical id of the bot participant.
    pub const BOT: PlayerId = PlayerId(0);

    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The id following this one.
    ///
    /// ```
    /// use rps_arena::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(3).next(), PlayerId::new(4));
    /// ```
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl From<u32> for PlayerId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p7 = PlayerId::new(7);

        assert_eq!(p0, PlayerId::BOT);
        assert_eq!(p7.raw(), 7);
        assert_eq!(format!("{}", p7), "#7");
    }

    #[test]
    fn test_player_id_next_saturates() {
        assert_eq!(PlayerId::new(1).next(), PlayerId::new(2));
        assert_eq!(PlayerId::new(u32::MAX).next(), PlayerId::new(u32::MAX));
    }

    #[test]
    fn test_player_id_ordering() {
        let mut ids = vec![PlayerId::new(3), PlayerId::new(1), PlayerId::new(2)];
        ids.sort();
        assert_eq!(ids, vec![PlayerId::new(1), PlayerId::new(2), PlayerId::new(3)]);
    }

    #[test]
    fn test_player_id_serializes_as_number() {
        let json = serde_json::to_string(&PlayerId::new(12)).unwrap();
        assert_eq!(json, "12");

        let back: PlayerId = serde_json::from_str("12").unwrap();
        assert_eq!(back, PlayerId::new(12));
    }
}
