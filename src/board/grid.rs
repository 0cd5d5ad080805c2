//! Grid model and structural queries
//!
//! A grid is a square matrix of tile values where `0` marks an empty cell.
//! Grids are values: every transform here returns a new grid.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tile value (0 = empty cell)
pub type Tile = u64;

/// Cell position, row 0 at the top and col 0 at the left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Rejected grid shapes
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid has no rows")]
    Empty,
    #[error("row {row} has {len} cells, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
}

/// Square board of tiles
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Tile>>", into = "Vec<Vec<Tile>>")]
pub struct Grid {
    cells: Vec<Vec<Tile>>,
}

impl Grid {
    /// All-empty grid of the given size
    pub fn new(size: usize) -> Self {
        Self {
            cells: vec![vec![0; size]; size],
        }
    }

    /// Build a grid from rows, rejecting empty or ragged input
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, GridError> {
        if rows.is_empty() {
            return Err(GridError::Empty);
        }
        let expected = rows.len();
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(GridError::NotSquare {
                row,
                len: r.len(),
                expected,
            });
        }
        Ok(Self { cells: rows })
    }

    /// Side length
    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn get(&self, at: Coord) -> Tile {
        self.cells[at.row][at.col]
    }

    #[inline]
    pub(crate) fn set(&mut self, at: Coord, value: Tile) {
        self.cells[at.row][at.col] = value;
    }

    /// Copy of this grid with one cell replaced
    pub fn with_tile(&self, at: Coord, value: Tile) -> Self {
        let mut next = self.clone();
        next.set(at, value);
        next
    }

    pub fn rows(&self) -> &[Vec<Tile>] {
        &self.cells
    }

    pub fn row(&self, row: usize) -> &[Tile] {
        &self.cells[row]
    }

    #[inline]
    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [Tile] {
        &mut self.cells[row]
    }

    /// Every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Tile)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, &v)| (Coord::new(r, c), v))
        })
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.cells()
            .filter(|&(_, v)| v == 0)
            .map(|(at, _)| at)
            .collect()
    }

    /// Number of occupied cells
    pub fn tile_count(&self) -> usize {
        self.cells().filter(|&(_, v)| v != 0).count()
    }

    pub fn has_empty_cell(&self) -> bool {
        self.cells.iter().flatten().any(|&v| v == 0)
    }

    /// Whether any two orthogonal neighbours hold the same non-zero value
    pub fn can_merge(&self) -> bool {
        let n = self.size();
        for r in 0..n {
            for c in 0..n {
                let v = self.cells[r][c];
                if v == 0 {
                    continue;
                }
                if c + 1 < n && self.cells[r][c + 1] == v {
                    return true;
                }
                if r + 1 < n && self.cells[r + 1][c] == v {
                    return true;
                }
            }
        }
        false
    }

    /// Whether any direction can still change the board
    pub fn has_any_move(&self) -> bool {
        self.has_empty_cell() || self.can_merge()
    }

    /// Whether every cell is empty or a power of two from 2 up to `max_tile`
    pub fn tiles_within(&self, max_tile: Tile) -> bool {
        self.cells
            .iter()
            .flatten()
            .all(|&v| v == 0 || (v >= 2 && v <= max_tile && v.is_power_of_two()))
    }

    /// Sum of all tile values (saturates instead of wrapping)
    pub fn score(&self) -> u64 {
        self.cells
            .iter()
            .flatten()
            .fold(0u64, |acc, &v| acc.saturating_add(v))
    }

    /// Rotate 90° counter-clockwise: (r, c) lands on (n-1-c, r)
    pub fn rotate_left(&self) -> Self {
        let n = self.size();
        let mut out = Self::new(n);
        for r in 0..n {
            for c in 0..n {
                out.cells[n - 1 - c][r] = self.cells[r][c];
            }
        }
        out
    }

    /// Rotate 90° clockwise: (r, c) lands on (c, n-1-r)
    pub fn rotate_right(&self) -> Self {
        let n = self.size();
        let mut out = Self::new(n);
        for r in 0..n {
            for c in 0..n {
                out.cells[c][n - 1 - r] = self.cells[r][c];
            }
        }
        out
    }

    /// Mirror every row: (r, c) lands on (r, n-1-c)
    pub fn reverse_rows(&self) -> Self {
        Self {
            cells: self
                .cells
                .iter()
                .map(|row| row.iter().rev().copied().collect())
                .collect(),
        }
    }
}

impl TryFrom<Vec<Vec<Tile>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<Tile>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<Tile>> {
    fn from(grid: Grid) -> Self {
        grid.cells
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row
                .iter()
                .map(|&v| {
                    if v == 0 {
                        format!("{:>5}", ".")
                    } else {
                        format!("{v:>5}")
                    }
                })
                .collect();
            writeln!(f, "{}", line.join(""))?;
        }
        Ok(())
    }
}

/// Whether any move remains (empty cell or adjacent pair)
#[inline]
pub fn has_any_move(grid: &Grid) -> bool {
    grid.has_any_move()
}

/// Board score: the sum of every tile
#[inline]
pub fn score(grid: &Grid) -> u64 {
    grid.score()
}
