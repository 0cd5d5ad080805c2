//! Best-effort persistence over a key-value store
//!
//! Features:
//! - `Store` capability (LocalStorage on web, in-memory elsewhere)
//! - JSON game snapshot with one level of undo
//! - Storage faults are logged and swallowed, never surfaced to gameplay

use std::collections::HashMap;

pub mod saved_game;

pub use saved_game::{SavedGame, clear_saved_game, load_game_state, save_game_state};

/// Fixed storage keys
pub mod keys {
    pub const SAVED_GAME: &str = "savedGameState";
    pub const HIGH_SCORE: &str = "highScore";
    pub const BOARD_SIZE: &str = "boardSize";
    pub const SFX_MUTED: &str = "sfxMuted";
    pub const THEME: &str = "theme";
}

/// Storage failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage rejected write: {0}")]
    Rejected(String),
}

/// String key-value storage capability
pub trait Store {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-process store (native builds and tests)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Read a key, treating any storage fault as a missing entry
pub fn read_entry<S: Store + ?Sized>(store: &S, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Could not read {key}: {e}");
            None
        }
    }
}

/// Write a key, ignoring storage faults
pub fn write_entry<S: Store + ?Sized>(store: &mut S, key: &str, value: &str) {
    if let Err(e) = store.set(key, value) {
        log::warn!("Could not write {key}: {e}");
    }
}

/// Remove a key, ignoring storage faults
pub fn remove_entry<S: Store + ?Sized>(store: &mut S, key: &str) {
    if let Err(e) = store.remove(key) {
        log::warn!("Could not remove {key}: {e}");
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::{Store, StoreError};

    /// Store where every operation fails
    pub struct BrokenStore;

    impl Store for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Rejected("quota exceeded".to_string()))
        }

        fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable)
        }
    }
}
