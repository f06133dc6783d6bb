//! Immutable sliding-tile board.
//!
//! Tiles are stored as a flat row-major slice where 0 marks the blank.
//! A board is validated once at construction; boards derived from it
//! (neighbours and the twin) are permutations of a valid board and skip
//! validation. Heuristic scores are computed lazily and cached.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use smallvec::SmallVec;

use crate::error::BoardError;

/// Smallest supported board dimension (a 1x1 board has no twin).
pub const MIN_DIMENSION: usize = 2;

/// Largest supported board dimension, so that every tile fits in a `u16`.
pub const MAX_DIMENSION: usize = 256;

/// The value stored in the empty cell.
pub const BLANK: u16 = 0;

/// Boards reachable by a single slide. At most four, so kept inline.
pub type Neighbors = SmallVec<[Board; 4]>;

/// Blank displacements in enumeration order: up, left, right, down.
const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

/// An N x N sliding puzzle position.
#[derive(Debug, Clone)]
pub struct Board {
    dimension: usize,
    /// Row-major tile values, `dimension * dimension` long.
    tiles: Box<[u16]>,
    /// Flat index of the blank cell.
    blank: usize,
    hamming: OnceLock<u32>,
    manhattan: OnceLock<u32>,
}

/// Converts (row, col) to a flat row-major index.
#[inline(always)]
const fn to_index(dimension: usize, row: usize, col: usize) -> usize {
    row * dimension + col
}

/// Converts a flat row-major index to (row, col).
#[inline(always)]
const fn to_coord(dimension: usize, index: usize) -> (usize, usize) {
    (index / dimension, index % dimension)
}

/// Returns the (row, col) where a non-blank tile belongs on the goal board.
#[inline(always)]
const fn goal_coord(dimension: usize, tile: u16) -> (usize, usize) {
    to_coord(dimension, tile as usize - 1)
}

impl Board {
    /// Builds a board from rows of tiles.
    ///
    /// The grid must be square with a dimension in `2..=256`, and contain
    /// every value in `0..N*N` exactly once.
    pub fn new<R: AsRef<[u16]>>(grid: &[R]) -> Result<Self, BoardError> {
        let dimension = grid.len();
        check_dimension(dimension)?;

        let mut tiles = Vec::with_capacity(dimension * dimension);
        for (row, cells) in grid.iter().enumerate() {
            let cells = cells.as_ref();
            if cells.len() != dimension {
                return Err(BoardError::NotSquare {
                    row,
                    len: cells.len(),
                    dimension,
                });
            }
            tiles.extend_from_slice(cells);
        }

        Self::from_tiles(dimension, tiles)
    }

    /// Builds a board from a flat row-major tile vector.
    pub fn from_tiles(dimension: usize, tiles: Vec<u16>) -> Result<Self, BoardError> {
        check_dimension(dimension)?;
        let expected = dimension * dimension;
        if tiles.len() != expected {
            return Err(BoardError::WrongCellCount {
                expected,
                found: tiles.len(),
            });
        }

        let max = (expected - 1) as u16;
        let mut seen = vec![false; expected];
        let mut blank = 0;
        for (index, &tile) in tiles.iter().enumerate() {
            if tile > max {
                return Err(BoardError::TileOutOfRange { tile, max });
            }
            if std::mem::replace(&mut seen[tile as usize], true) {
                return Err(BoardError::DuplicateTile { tile });
            }
            if tile == BLANK {
                blank = index;
            }
        }

        // N*N distinct values drawn from 0..N*N is a permutation, so the
        // blank was necessarily found.
        Ok(Self::from_parts(dimension, tiles.into_boxed_slice(), blank))
    }

    /// Returns the goal board for the given dimension.
    pub fn goal(dimension: usize) -> Result<Self, BoardError> {
        check_dimension(dimension)?;
        let cells = dimension * dimension;
        let tiles: Vec<u16> = (1..cells)
            .map(|tile| tile as u16)
            .chain(std::iter::once(BLANK))
            .collect();
        Ok(Self::from_parts(dimension, tiles.into_boxed_slice(), cells - 1))
    }

    /// Wraps already-valid tiles without re-checking them.
    fn from_parts(dimension: usize, tiles: Box<[u16]>, blank: usize) -> Self {
        Self {
            dimension,
            tiles,
            blank,
            hamming: OnceLock::new(),
            manhattan: OnceLock::new(),
        }
    }

    /// Board dimension N.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// The tile at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside the board.
    pub fn tile(&self, row: usize, col: usize) -> u16 {
        assert!(row < self.dimension && col < self.dimension);
        self.tiles[to_index(self.dimension, row, col)]
    }

    /// The (row, col) of the blank.
    pub fn blank(&self) -> (usize, usize) {
        to_coord(self.dimension, self.blank)
    }

    /// Iterates over the rows of the board, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u16]> {
        self.tiles.chunks(self.dimension)
    }

    /// Number of non-blank tiles out of place.
    pub fn hamming(&self) -> u32 {
        *self.hamming.get_or_init(|| {
            self.tiles
                .iter()
                .enumerate()
                .filter(|&(index, &tile)| tile != BLANK && tile as usize != index + 1)
                .count() as u32
        })
    }

    /// Sum of the Manhattan distances of non-blank tiles from their goal cells.
    pub fn manhattan(&self) -> u32 {
        *self.manhattan.get_or_init(|| {
            self.tiles
                .iter()
                .enumerate()
                .filter(|&(_, &tile)| tile != BLANK)
                .map(|(index, &tile)| {
                    let (row, col) = to_coord(self.dimension, index);
                    let (goal_row, goal_col) = goal_coord(self.dimension, tile);
                    (row.abs_diff(goal_row) + col.abs_diff(goal_col)) as u32
                })
                .sum()
        })
    }

    /// Whether every tile is in its goal cell.
    pub fn is_goal(&self) -> bool {
        if let Some(&cached) = self.hamming.get() {
            return cached == 0;
        }
        let last = self.tiles.len() - 1;
        self.blank == last
            && self.tiles[..last]
                .iter()
                .enumerate()
                .all(|(index, &tile)| tile as usize == index + 1)
    }

    /// All boards reachable by sliding one tile into the blank.
    ///
    /// Yields two boards for a corner blank, three on an edge, four inside.
    /// Callers must not rely on the enumeration order.
    pub fn neighbors(&self) -> Neighbors {
        let (row, col) = self.blank();
        let last = self.dimension - 1;

        DIRECTIONS
            .iter()
            .filter_map(|&(row_step, col_step)| {
                let next_row = row.checked_add_signed(row_step).filter(|&r| r <= last)?;
                let next_col = col.checked_add_signed(col_step).filter(|&c| c <= last)?;
                Some(self.slide_from(to_index(self.dimension, next_row, next_col)))
            })
            .collect()
    }

    /// A board with two horizontally adjacent non-blank tiles exchanged.
    ///
    /// Picks the first such pair in row-major order. The swap flips the
    /// permutation parity, so exactly one of a board and its twin is solvable.
    pub fn twin(&self) -> Board {
        // a row without the blank always holds a pair, so the fallback (the
        // first pair of such a row) is never reached on a valid board
        let first = (0..self.tiles.len() - 1)
            .filter(|&index| index % self.dimension != self.dimension - 1)
            .find(|&index| self.tiles[index] != BLANK && self.tiles[index + 1] != BLANK)
            .unwrap_or(if self.blank < self.dimension {
                self.dimension
            } else {
                0
            });

        let mut tiles = self.tiles.clone();
        tiles.swap(first, first + 1);
        Self::from_parts(self.dimension, tiles, self.blank)
    }

    /// Moves the tile at `from` into the blank.
    fn slide_from(&self, from: usize) -> Board {
        let mut tiles = self.tiles.clone();
        tiles.swap(from, self.blank);
        Self::from_parts(self.dimension, tiles, from)
    }
}

/// Rejects dimensions outside `MIN_DIMENSION..=MAX_DIMENSION`.
fn check_dimension(dimension: usize) -> Result<(), BoardError> {
    if dimension < MIN_DIMENSION {
        return Err(BoardError::DegenerateDimension { dimension });
    }
    if dimension > MAX_DIMENSION {
        return Err(BoardError::DimensionTooLarge {
            dimension,
            max: MAX_DIMENSION,
        });
    }
    Ok(())
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.dimension == other.dimension && self.tiles == other.tiles
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.dimension.hash(state);
        self.tiles.hash(state);
    }
}

impl fmt::Display for Board {
    /// First line is N, then one line per row with right-aligned cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let largest = self.tiles.len() - 1;
        let width = largest.to_string().len().max(2);

        writeln!(f, "{}", self.dimension)?;
        for row in self.rows() {
            for (col, tile) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{:>width$}", tile, width = width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
