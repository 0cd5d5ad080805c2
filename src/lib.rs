//! Slide 2048 - rule engine for a sliding tile merge puzzle
//!
//! Core modules:
//! - `board`: Pure grid model, move transform, spawning and terminal checks
//! - `session`: Move serialization, undo and game-over bookkeeping
//! - `persistence`: Best-effort save/load over a key-value store
//! - `platform`: Browser/native storage and RNG seeding
//! - `settings`: Persisted player preferences
//! - `highscores`: Persisted best score

pub mod board;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod session;
pub mod settings;

pub use board::{
    Coord, Direction, Grid, GridError, MoveRecord, MoveResult, apply_move, has_any_move,
    place_random_tile, score, seed_grid,
};
pub use highscores::HighScore;
pub use persistence::{
    MemoryStore, SavedGame, Store, StoreError, clear_saved_game, load_game_state,
    save_game_state,
};
pub use session::{GameSession, SessionPhase};
pub use settings::{Preferences, Theme};

/// Game configuration constants
pub mod consts {
    /// Smallest playable board
    pub const MIN_BOARD_SIZE: usize = 3;
    /// Largest playable board
    pub const MAX_BOARD_SIZE: usize = 6;
    /// Board size for a first launch
    pub const DEFAULT_BOARD_SIZE: usize = 4;

    /// Largest tile a saved board may hold (far beyond any reachable tile)
    pub const MAX_TILE: u64 = 1 << 40;

    /// Chance that a spawned tile is a 2 (otherwise 4)
    pub const SPAWN_TWO_PROBABILITY: f64 = 0.6;

    /// Slide animation length the front end waits before settling a move (ms)
    pub const SLIDE_ANIM_MS: u32 = 150;
}

/// Clamp a requested board size into the playable range
#[inline]
pub fn clamp_board_size(size: usize) -> usize {
    size.clamp(consts::MIN_BOARD_SIZE, consts::MAX_BOARD_SIZE)
}
