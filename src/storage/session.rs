//! Persistence of the in-progress match.

use tracing::{debug, warn};

use crate::session::Match;

use super::error::StoreError;
use super::store::{load_json, save_json, KeyValueStore};

/// Reads and writes the single in-progress match under a fixed key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionStore {
    key: String,
}

impl SessionStore {
    /// Create a session store using `key`.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Key the session is stored under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the stored match.
    ///
    /// Missing, undecodable or inconsistent sessions yield `None`.
    pub fn load<S: KeyValueStore + ?Sized>(&self, store: &S) -> Option<Match> {
        let game: Match = load_json(store, &self.key)?;
        if !game.is_consistent() {
            warn!(key = %self.key, "discarding inconsistent session");
            return None;
        }
        Some(game)
    }

    /// Persist `game`, replacing any stored match.
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S, game: &Match) -> Result<(), StoreError> {
        save_json(store, &self.key, game)
    }

    /// Forget the stored match.
    pub fn clear<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<(), StoreError> {
        debug!(key = %self.key, "clearing session");
        store.remove(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Variant;
    use crate::session::{create_initial_match, MatchSetup};
    use crate::storage::MemoryStore;

    #[test]
    fn test_save_load_clear() {
        let mut store = MemoryStore::new();
        let sessions = SessionStore::new("game");
        assert_eq!(sessions.load(&store), None);

        let mut game = create_initial_match(&MatchSetup::against_computer(Variant::ThreeMoves, "Ada")).unwrap();
        game.apply_move(4);
        sessions.save(&mut store, &game).unwrap();
        assert_eq!(sessions.load(&store), Some(game));

        sessions.clear(&mut store).unwrap();
        assert_eq!(sessions.load(&store), None);
    }

    #[test]
    fn test_corrupt_session_is_no_session() {
        let mut store = MemoryStore::new();
        store.set("game", r#"{"variant":"classic"}"#.to_string()).unwrap();
        assert_eq!(SessionStore::new("game").load(&store), None);
    }

    fn tampered(game: &Match, edit: impl FnOnce(&mut serde_json::Value)) -> MemoryStore {
        let mut value = serde_json::to_value(game).unwrap();
        edit(&mut value);
        let mut store = MemoryStore::new();
        store.set("game", value.to_string()).unwrap();
        store
    }

    #[test]
    fn test_inconsistent_session_is_no_session() {
        let sessions = SessionStore::new("game");
        let mut game = create_initial_match(&MatchSetup::local(Variant::ThreeMoves, "A", "B")).unwrap();
        for index in [0, 4, 1] {
            game.apply_move(index);
        }
        assert_eq!(sessions.load(&tampered(&game, |_| {})), Some(game.clone()));

        let store = tampered(&game, |v| v["move_order"]["X"] = serde_json::json!([9, 0, 1]));
        assert_eq!(sessions.load(&store), None);

        let store = tampered(&game, |v| v["move_order"]["X"] = serde_json::json!([0, 1, 2, 3, 5]));
        assert_eq!(sessions.load(&store), None);

        let store = tampered(&game, |v| v["is_finished"] = serde_json::json!(true));
        assert_eq!(sessions.load(&store), None);
    }
}
