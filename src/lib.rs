//! Sliding-Tile Puzzle Solver Library
//!
//! Finds shortest solutions to the generalised N-puzzle with A* search, or
//! proves a board unsolvable by racing it against its twin.

pub mod board;
pub mod error;
pub mod input;
pub mod solver;

pub use board::Board;
pub use error::{BoardError, ParseError};
pub use solver::{SearchStats, Solver};
