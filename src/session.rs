//! Game session bookkeeping
//!
//! Serializes moves, keeps one level of undo and tracks game over. The
//! session does no I/O; callers persist [`GameSession::snapshot`] themselves.

use rand::Rng;

use crate::board::{Direction, Grid, MoveResult, apply_move, place_random_tile, seed_grid};
use crate::clamp_board_size;
use crate::persistence::SavedGame;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Waiting for a move
    Ready,
    /// A move was accepted and awaits [`GameSession::finish_move`]
    Sliding,
    /// No move remains
    GameOver,
}

/// A single game in progress
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Grid,
    prev_board: Option<Grid>,
    /// Slid board waiting for its spawn
    pending: Option<Grid>,
    phase: SessionPhase,
}

impl GameSession {
    /// Fresh game; `size` is clamped to the playable range
    pub fn new<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        Self::from_board(seed_grid(clamp_board_size(size), rng), None)
    }

    /// Resume a saved game
    pub fn restore(saved: SavedGame) -> Self {
        Self::from_board(saved.board, saved.prev_board)
    }

    /// Resume `saved` if there is one, otherwise start a `size` game
    pub fn resume_or_new<R: Rng + ?Sized>(
        saved: Option<SavedGame>,
        size: usize,
        rng: &mut R,
    ) -> Self {
        match saved {
            Some(saved) => Self::restore(saved),
            None => Self::new(size, rng),
        }
    }

    fn from_board(board: Grid, prev_board: Option<Grid>) -> Self {
        let mut session = Self {
            board,
            prev_board,
            pending: None,
            phase: SessionPhase::Ready,
        };
        session.check_game_over();
        session
    }

    /// Enter game over (and drop undo) if the board is stuck
    fn check_game_over(&mut self) {
        if !self.board.has_any_move() {
            self.phase = SessionPhase::GameOver;
            self.prev_board = None;
            log::info!("Game over with score {}", self.board.score());
        }
    }

    pub fn board(&self) -> &Grid {
        &self.board
    }

    pub fn prev_board(&self) -> Option<&Grid> {
        self.prev_board.as_ref()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn score(&self) -> u64 {
        self.board.score()
    }

    pub fn is_over(&self) -> bool {
        self.phase == SessionPhase::GameOver
    }

    pub fn can_undo(&self) -> bool {
        self.phase == SessionPhase::Ready && self.prev_board.is_some()
    }

    /// Start a move
    ///
    /// Returns the slide for animation, or `None` when the request is
    /// ignored (not ready, or nothing would move).
    pub fn begin_move(&mut self, direction: Direction) -> Option<MoveResult> {
        if self.phase != SessionPhase::Ready {
            return None;
        }
        let result = apply_move(&self.board, direction);
        if !result.moved {
            return None;
        }
        self.pending = Some(result.next.clone());
        self.phase = SessionPhase::Sliding;
        Some(result)
    }

    /// Settle the move started by [`GameSession::begin_move`]
    ///
    /// Spawns a tile, commits the board and checks for game over. Returns
    /// false if no move was pending.
    pub fn finish_move<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let Some(next) = self.pending.take() else {
            return false;
        };
        let spawned = place_random_tile(&next, rng);
        self.prev_board = Some(std::mem::replace(&mut self.board, spawned));
        self.phase = SessionPhase::Ready;
        self.check_game_over();
        true
    }

    /// Revert the last committed move (one level only)
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        if let Some(prev) = self.prev_board.take() {
            self.board = prev;
        }
        true
    }

    /// Start over at the current size
    pub fn new_game<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let size = self.size();
        *self = Self::new(size, rng);
    }

    /// Start over at a new size, returning the clamped size
    pub fn resize<R: Rng + ?Sized>(&mut self, size: usize, rng: &mut R) -> usize {
        *self = Self::new(size, rng);
        self.size()
    }

    /// State to persist; a finished game carries no undo
    pub fn snapshot(&self) -> SavedGame {
        SavedGame {
            board: self.board.clone(),
            prev_board: if self.is_over() {
                None
            } else {
                self.prev_board.clone()
            },
        }
    }
}
