//! Best score
//!
//! Persisted to LocalStorage as a plain decimal string.

use crate::persistence::{Store, keys, read_entry, write_entry};

/// Highest score reached on this device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HighScore {
    best: u64,
}

impl HighScore {
    pub fn new() -> Self {
        Self { best: 0 }
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    /// Check if a score beats the current best
    pub fn qualifies(&self, score: u64) -> bool {
        score > self.best
    }

    /// Record a score, persisting it when it is a new best
    ///
    /// Returns true if the best score changed.
    pub fn observe<S: Store + ?Sized>(&mut self, score: u64, store: &mut S) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        self.best = score;
        write_entry(store, keys::HIGH_SCORE, &score.to_string());
        true
    }

    /// Load the best score; missing or unreadable values count as 0
    pub fn load<S: Store + ?Sized>(store: &S) -> Self {
        match read_entry(store, keys::HIGH_SCORE).map(|s| s.trim().parse::<u64>()) {
            Some(Ok(best)) => {
                log::info!("Loaded high score {best}");
                Self { best }
            }
            Some(Err(e)) => {
                log::warn!("Ignoring unreadable high score: {e}");
                Self::new()
            }
            None => {
                log::info!("No high score found, starting fresh");
                Self::new()
            }
        }
    }
}
