//! Directional move transform
//!
//! Every direction is computed as a slide to the left: the grid is
//! reoriented so the requested direction points left, each row is compacted
//! and merged, then grid and move records are mapped back.

use serde::{Deserialize, Serialize};

use super::grid::{Coord, Grid, Tile};

/// Slide direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Map a browser `KeyboardEvent.key` value (arrow keys only)
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Direction::Up),
            "ArrowDown" => Some(Direction::Down),
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Turn the grid so this direction becomes a left slide
    fn orient(&self, grid: &Grid) -> Grid {
        match self {
            Direction::Up => grid.rotate_left(),
            Direction::Down => grid.rotate_right(),
            Direction::Right => grid.reverse_rows(),
            Direction::Left => grid.clone(),
        }
    }

    /// Inverse of [`Direction::orient`]
    fn deorient(&self, grid: &Grid) -> Grid {
        match self {
            Direction::Up => grid.rotate_right(),
            Direction::Down => grid.rotate_left(),
            Direction::Right => grid.reverse_rows(),
            Direction::Left => grid.clone(),
        }
    }

    /// Where a cell of the oriented grid sits after [`Direction::deorient`]
    fn deorient_coord(&self, at: Coord, n: usize) -> Coord {
        match self {
            Direction::Up => Coord::new(at.col, n - 1 - at.row),
            Direction::Down => Coord::new(n - 1 - at.col, at.row),
            Direction::Right => Coord::new(at.row, n - 1 - at.col),
            Direction::Left => at,
        }
    }
}

/// One tile's displacement during a move
///
/// Two records with the same `to` describe a merge into that cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub from: Coord,
    pub to: Coord,
    /// Value before the move
    pub value: Tile,
}

impl MoveRecord {
    pub fn is_stationary(&self) -> bool {
        self.from == self.to
    }
}

/// Outcome of [`apply_move`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Board after the slide (before any spawn)
    pub next: Grid,
    /// Per-tile displacements, empty when nothing moved
    pub moves: Vec<MoveRecord>,
    /// Whether `next` differs from the input
    pub moved: bool,
    /// Whether at least one merge happened
    pub merged: bool,
}

impl MoveResult {
    /// Number of cells that received a merged tile
    pub fn merge_count(&self) -> usize {
        self.moves
            .windows(2)
            .filter(|pair| pair[0].to == pair[1].to)
            .count()
    }
}

/// Compact one row to the left, merging each equal pair once
///
/// Records are emitted in the row's own frame with `row` as given.
fn slide_row(row: usize, cells: &[Tile], out: &mut [Tile], records: &mut Vec<MoveRecord>) -> bool {
    let tiles: Vec<(usize, Tile)> = cells
        .iter()
        .enumerate()
        .filter(|&(_, &v)| v != 0)
        .map(|(c, &v)| (c, v))
        .collect();

    let mut merged = false;
    let mut target = 0;
    let mut i = 0;
    while i < tiles.len() {
        let (col, value) = tiles[i];
        let to = Coord::new(row, target);
        match tiles.get(i + 1) {
            Some(&(next_col, next_value)) if next_value == value => {
                records.push(MoveRecord {
                    from: Coord::new(row, col),
                    to,
                    value,
                });
                records.push(MoveRecord {
                    from: Coord::new(row, next_col),
                    to,
                    value: next_value,
                });
                out[target] = value.saturating_mul(2);
                merged = true;
                i += 2;
            }
            _ => {
                records.push(MoveRecord {
                    from: Coord::new(row, col),
                    to,
                    value,
                });
                out[target] = value;
                i += 1;
            }
        }
        target += 1;
    }
    merged
}

/// Slide every tile of `grid` toward `direction`
pub fn apply_move(grid: &Grid, direction: Direction) -> MoveResult {
    let n = grid.size();
    let work = direction.orient(grid);

    let mut slid = Grid::new(n);
    let mut oriented_moves = Vec::new();
    let mut merged = false;
    for r in 0..n {
        merged |= slide_row(r, work.row(r), slid.row_mut(r), &mut oriented_moves);
    }
    let next = direction.deorient(&slid);

    let moved = next != *grid;
    let moves = if moved {
        oriented_moves
            .into_iter()
            .map(|m| MoveRecord {
                from: direction.deorient_coord(m.from, n),
                to: direction.deorient_coord(m.to, n),
                value: m.value,
            })
            .collect()
    } else {
        Vec::new()
    };

    MoveResult {
        next,
        moves,
        moved,
        merged: moved && merged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[Tile]]) -> Grid {
        Grid::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    fn slide_single_row(row: &[Tile]) -> Vec<Tile> {
        let n = row.len();
        let mut rows = vec![row.to_vec()];
        rows.extend((1..n).map(|_| vec![0; n]));
        let result = apply_move(&Grid::from_rows(rows).unwrap(), Direction::Left);
        result.next.row(0).to_vec()
    }

    #[test]
    fn test_leftmost_pair_wins() {
        assert_eq!(slide_single_row(&[2, 2, 2, 0]), vec![4, 2, 0, 0]);
    }

    #[test]
    fn test_two_pairs_merge_independently() {
        assert_eq!(slide_single_row(&[2, 2, 2, 2]), vec![4, 4, 0, 0]);
    }

    #[test]
    fn test_merge_across_gap() {
        assert_eq!(slide_single_row(&[2, 0, 2, 4]), vec![4, 4, 0, 0]);
    }

    #[test]
    fn test_merged_tile_not_remerged() {
        assert_eq!(slide_single_row(&[4, 2, 2, 0]), vec![4, 4, 0, 0]);
        assert_eq!(slide_single_row(&[2, 2, 4, 8]), vec![4, 4, 8, 0]);
    }

    #[test]
    fn test_no_skip_over_other_tile() {
        assert_eq!(slide_single_row(&[2, 4, 2, 0]), vec![2, 4, 2, 0]);
    }

    #[test]
    fn test_right_up_down() {
        let g = grid(&[&[2, 0, 2, 0], &[0, 0, 0, 0], &[2, 0, 0, 4], &[0, 0, 0, 4]]);

        let right = apply_move(&g, Direction::Right);
        assert_eq!(
            right.next,
            grid(&[&[0, 0, 0, 4], &[0, 0, 0, 0], &[0, 0, 2, 4], &[0, 0, 0, 4]])
        );

        let up = apply_move(&g, Direction::Up);
        assert_eq!(
            up.next,
            grid(&[&[4, 0, 2, 8], &[0, 0, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0]])
        );

        let down = apply_move(&g, Direction::Down);
        assert_eq!(
            down.next,
            grid(&[&[0, 0, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0], &[4, 0, 2, 8]])
        );
        assert!(down.merged);
    }

    #[test]
    fn test_full_row_with_merge_moves() {
        let g = grid(&[&[2, 2, 4], &[8, 16, 32], &[64, 128, 256]]);
        let result = apply_move(&g, Direction::Left);
        assert!(result.moved);
        assert!(result.merged);
        assert_eq!(result.next.row(0), &[4, 4, 0]);
    }

    #[test]
    fn test_blocked_move_reports_nothing() {
        let g = grid(&[&[2, 4, 0], &[8, 0, 0], &[0, 0, 0]]);
        let result = apply_move(&g, Direction::Left);
        assert!(!result.moved);
        assert!(!result.merged);
        assert!(result.moves.is_empty());
        assert_eq!(result.next, g);
    }

    #[test]
    fn test_records_for_merge_share_destination() {
        let g = grid(&[&[0, 0, 0], &[0, 2, 2], &[0, 0, 0]]);
        let result = apply_move(&g, Direction::Right);
        assert_eq!(
            result.moves,
            vec![
                MoveRecord {
                    from: Coord::new(1, 2),
                    to: Coord::new(1, 2),
                    value: 2
                },
                MoveRecord {
                    from: Coord::new(1, 1),
                    to: Coord::new(1, 2),
                    value: 2
                },
            ]
        );
        assert_eq!(result.merge_count(), 1);
        assert!(result.moves[0].is_stationary());
    }

    #[test]
    fn test_records_map_back_through_rotation() {
        let g = grid(&[&[0, 0, 0], &[0, 0, 0], &[0, 8, 0]]);
        let up = apply_move(&g, Direction::Up);
        assert_eq!(
            up.moves,
            vec![MoveRecord {
                from: Coord::new(2, 1),
                to: Coord::new(0, 1),
                value: 8
            }]
        );

        let g = grid(&[&[0, 4, 0], &[0, 0, 0], &[0, 0, 0]]);
        let down = apply_move(&g, Direction::Down);
        assert_eq!(
            down.moves,
            vec![MoveRecord {
                from: Coord::new(0, 1),
                to: Coord::new(2, 1),
                value: 4
            }]
        );
    }

    #[test]
    fn test_deorient_coord_matches_marker() {
        let n = 5;
        for dir in Direction::ALL {
            for r in 0..n {
                for c in 0..n {
                    let marker = Grid::new(n).with_tile(Coord::new(r, c), 1);
                    let back = dir.deorient(&marker);
                    let expected = back
                        .cells()
                        .find(|&(_, v)| v == 1)
                        .map(|(at, _)| at)
                        .unwrap();
                    assert_eq!(dir.deorient_coord(Coord::new(r, c), n), expected);
                }
            }
        }
    }

    #[test]
    fn test_huge_merge_saturates() {
        let big = 1u64 << 63;
        let g = grid(&[&[big, big, 0], &[0, 0, 0], &[0, 0, 0]]);
        let result = apply_move(&g, Direction::Left);
        assert!(result.merged);
        assert_eq!(result.next.row(0), &[u64::MAX, 0, 0]);
    }

    #[test]
    fn test_input_not_mutated() {
        let g = grid(&[&[2, 2, 0], &[0, 0, 0], &[0, 0, 4]]);
        let copy = g.clone();
        let _ = apply_move(&g, Direction::Left);
        assert_eq!(g, copy);
    }

    #[test]
    fn test_direction_parsing() {
        assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
        assert_eq!(Direction::from_str("sideways"), None);
        assert_eq!(Direction::from_key("ArrowRight"), Some(Direction::Right));
        assert_eq!(Direction::from_key("d"), None);
        for dir in Direction::ALL {
            assert_eq!(Direction::from_str(dir.as_str()), Some(dir));
        }
    }
}
