//! Random tile placement
//!
//! The random source is always passed in, so callers can substitute a
//! seeded generator.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::grid::{Grid, Tile};
use crate::consts::SPAWN_TWO_PROBABILITY;

/// Seeded generator used for tile spawning
pub fn rng_from_seed(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// 2 with probability 0.6, otherwise 4
fn random_tile_value<R: Rng + ?Sized>(rng: &mut R) -> Tile {
    if rng.random_bool(SPAWN_TWO_PROBABILITY) {
        2
    } else {
        4
    }
}

/// Drop a 2 or 4 onto a uniformly chosen empty cell
///
/// A full grid is returned unchanged.
pub fn place_random_tile<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Grid {
    let cells = grid.empty_cells();
    if cells.is_empty() {
        return grid.clone();
    }
    let at = cells[rng.random_range(0..cells.len())];
    grid.with_tile(at, random_tile_value(rng))
}

/// Empty grid with two spawned tiles
pub fn seed_grid<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Grid {
    let grid = Grid::new(size);
    let grid = place_random_tile(&grid, rng);
    place_random_tile(&grid, rng)
}
