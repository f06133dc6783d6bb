//! Error types for board construction and board-file parsing.

use thiserror::Error;

/// Reasons a grid cannot be turned into a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Boards smaller than 2x2 have no twin and are rejected outright.
    #[error("board dimension {dimension} is too small (minimum is 2)")]
    DegenerateDimension { dimension: usize },

    /// Tile values must fit in a `u16`.
    #[error("board dimension {dimension} is too large (maximum is {max})")]
    DimensionTooLarge { dimension: usize, max: usize },

    #[error("row {row} has {len} cells, expected {dimension}")]
    NotSquare {
        row: usize,
        len: usize,
        dimension: usize,
    },

    #[error("expected {expected} cells, found {found}")]
    WrongCellCount { expected: usize, found: usize },

    #[error("tile {tile} is out of range 0..={max}")]
    TileOutOfRange { tile: u16, max: u16 },

    #[error("tile {tile} appears more than once")]
    DuplicateTile { tile: u16 },
}

/// Failures while reading a textual board description.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read board file")]
    Io(#[from] std::io::Error),

    #[error("board file is empty, expected a dimension")]
    MissingDimension,

    #[error("invalid token {token:?}")]
    InvalidToken { token: String },

    #[error("expected {expected} tiles, found {found}")]
    WrongTileCount { expected: usize, found: usize },

    #[error(transparent)]
    Board(#[from] BoardError),
}
