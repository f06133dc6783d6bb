//! Reading boards from text.
//!
//! Board file format (whitespace separated, line breaks insignificant):
//! - the dimension N
//! - N*N tiles in row-major order, 0 for the blank
//!
//! ```text
//! 3
//!  0  1  3
//!  4  2  5
//!  7  8  6
//! ```

use std::fs;
use std::path::Path;

use log::debug;

use crate::board::Board;
use crate::error::ParseError;

/// Parses a board from its textual description.
pub fn parse_board(text: &str) -> Result<Board, ParseError> {
    let mut tokens = text.split_whitespace();

    let dimension: usize = parse_token(tokens.next().ok_or(ParseError::MissingDimension)?)?;
    let tiles = tokens.map(parse_token).collect::<Result<Vec<u16>, _>>()?;

    // an absurd dimension shouldn't overflow the check below
    let expected = dimension.checked_mul(dimension).unwrap_or(usize::MAX);
    if tiles.len() != expected {
        return Err(ParseError::WrongTileCount {
            expected,
            found: tiles.len(),
        });
    }

    Ok(Board::from_tiles(dimension, tiles)?)
}

/// Reads and parses a board file.
pub fn read_board(path: impl AsRef<Path>) -> Result<Board, ParseError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let board = parse_board(&text)?;
    debug!("Read {}x{} board from {}", board.dimension(), board.dimension(), path.display());
    Ok(board)
}

fn parse_token<T: std::str::FromStr>(token: &str) -> Result<T, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidToken {
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;

    #[test]
    fn test_parse_board() {
        let board = parse_board("3\n 0  1  3\n 4  2  5\n 7  8  6\n").unwrap();
        assert_eq!(board, Board::new(&[[0, 1, 3], [4, 2, 5], [7, 8, 6]]).unwrap());
    }

    #[test]
    fn test_parse_ignores_layout() {
        let board = parse_board("2 1 2\n3\t0").unwrap();
        assert!(board.is_goal());
    }

    #[test]
    fn test_display_roundtrip() {
        let board = Board::new(&[[8, 1, 3], [4, 0, 2], [7, 6, 5]]).unwrap();
        assert_eq!(parse_board(&board.to_string()).unwrap(), board);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_board("  \n"), Err(ParseError::MissingDimension)));
        assert!(matches!(
            parse_board("3\n1 2 3\n4 x 6\n7 8 0"),
            Err(ParseError::InvalidToken { token }) if token == "x"
        ));
        assert!(matches!(
            parse_board("2\n1 -2 3 0"),
            Err(ParseError::InvalidToken { .. })
        ));
        assert!(matches!(
            parse_board("3\n1 2 3\n4 5 6\n7 8"),
            Err(ParseError::WrongTileCount {
                expected: 9,
                found: 8
            })
        ));
        assert!(matches!(
            parse_board("2\n1 1 3 0"),
            Err(ParseError::Board(BoardError::DuplicateTile { tile: 1 }))
        ));
        assert!(matches!(
            parse_board("1\n0"),
            Err(ParseError::Board(BoardError::DegenerateDimension {
                dimension: 1
            }))
        ));
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_board("definitely/not/a/board.txt");
        assert!(matches!(result, Err(ParseError::Io(_))));
    }
}
