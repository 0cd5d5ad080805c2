//! Board engine
//!
//! All rule logic lives here. Every function is a pure function of its
//! arguments:
//! - Grids are never mutated in place
//! - Randomness only through a caller-supplied `Rng`
//! - No storage or platform dependencies

pub mod grid;
pub mod moves;
pub mod spawn;

pub use grid::{Coord, Grid, GridError, Tile, has_any_move, score};
pub use moves::{Direction, MoveRecord, MoveResult, apply_move};
pub use spawn::{place_random_tile, rng_from_seed, seed_grid};
