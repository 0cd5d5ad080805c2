//! Saved game snapshot (`savedGameState`)

use serde::{Deserialize, Serialize};

use super::{Store, keys, read_entry, remove_entry, write_entry};
use crate::board::Grid;
use crate::consts::{MAX_BOARD_SIZE, MAX_TILE, MIN_BOARD_SIZE};

/// Persisted board plus its one-level undo snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    pub board: Grid,
    #[serde(rename = "prevBoard", default)]
    pub prev_board: Option<Grid>,
}

impl SavedGame {
    /// Decode and sanity-check a stored snapshot
    ///
    /// Tiles must be 0 or powers of two up to `MAX_TILE`. An unusable undo
    /// board is dropped rather than failing the load.
    pub fn from_json(json: &str) -> Option<Self> {
        let mut saved: SavedGame = match serde_json::from_str(json) {
            Ok(saved) => saved,
            Err(e) => {
                log::warn!("Discarding unreadable saved game: {e}");
                return None;
            }
        };

        let size = saved.board.size();
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            log::warn!("Discarding saved game with board size {size}");
            return None;
        }
        if !saved.board.tiles_within(MAX_TILE) {
            log::warn!("Discarding saved game with impossible tile values");
            return None;
        }
        if saved
            .prev_board
            .as_ref()
            .is_some_and(|p| p.size() != size || !p.tiles_within(MAX_TILE))
        {
            log::warn!("Dropping unusable undo snapshot");
            saved.prev_board = None;
        }
        Some(saved)
    }
}

/// Persist the current board and optional undo snapshot
pub fn save_game_state<S: Store + ?Sized>(store: &mut S, board: &Grid, prev_board: Option<&Grid>) {
    #[derive(Serialize)]
    struct Snapshot<'a> {
        board: &'a Grid,
        #[serde(rename = "prevBoard")]
        prev_board: Option<&'a Grid>,
    }

    match serde_json::to_string(&Snapshot { board, prev_board }) {
        Ok(json) => {
            write_entry(store, keys::SAVED_GAME, &json);
            log::debug!("Game saved ({}x{}, score {})", board.size(), board.size(), board.score());
        }
        Err(e) => log::warn!("Could not encode game state: {e}"),
    }
}

/// Load the saved game, or `None` when absent or malformed
pub fn load_game_state<S: Store + ?Sized>(store: &S) -> Option<SavedGame> {
    let json = read_entry(store, keys::SAVED_GAME)?;
    let saved = SavedGame::from_json(&json)?;
    log::info!("Loaded saved {}x{} game", saved.board.size(), saved.board.size());
    Some(saved)
}

/// Forget the saved game
pub fn clear_saved_game<S: Store + ?Sized>(store: &mut S) {
    remove_entry(store, keys::SAVED_GAME);
    log::info!("Saved game cleared");
}
