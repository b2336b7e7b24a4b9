//! Utility functions for building boards from text.

use thiserror::Error;

use crate::engine::{Board, Cell, BOARD_SIZE};

/// Failures while parsing a textual board description.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BoardParseError {
    /// More rows were supplied than the board has.
    #[error("expected at most {BOARD_SIZE} rows, found {0}")]
    TooManyRows(usize),
    /// A row string was longer than the board is wide.
    #[error("row {row} is too long: expected at most {BOARD_SIZE} characters, found {len}")]
    RowTooLong { row: usize, len: usize },
    /// A character other than `O` or `.` was encountered.
    #[error("unrecognized character '{ch}' in row {row} col {col}")]
    UnrecognizedCharacter { ch: char, row: usize, col: usize },
}

/// Parses an array of string slices into a [`Board`].
///
/// Each string slice represents one row, starting from row 0. Valid
/// characters are `O` for a coin and `.` for an empty cell. Rows omitted at
/// the end, and characters omitted at the end of a row, default to empty
/// cells. No coin-count check is performed, so arbitrary test positions can
/// be described.
///
/// # Examples
/// ```
/// use coinslide_solver::engine::{Cell, Position};
/// use coinslide_solver::utils::board_from_str_array;
///
/// let board = board_from_str_array(&[
///     "....", //
///     ".OO.", //
///     ".OO.", //
///     "....",
/// ])
/// .unwrap();
/// assert_eq!(board.cell_at(Position::new(1, 1)), Ok(Cell::Coin));
/// assert_eq!(board.cell_at(Position::new(0, 0)), Ok(Cell::Empty));
///
/// assert!(board_from_str_array(&["OXO."]).is_err());
/// ```
///
/// # Errors
/// Returns a [`BoardParseError`] when more than [`BOARD_SIZE`] rows are
/// given, a row exceeds [`BOARD_SIZE`] characters, or an unrecognized
/// character is encountered.
pub fn board_from_str_array(s: &[&str]) -> Result<Board, BoardParseError> {
    if s.len() > BOARD_SIZE {
        return Err(BoardParseError::TooManyRows(s.len()));
    }

    let mut grid = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
    for (row, row_str) in s.iter().enumerate() {
        let len = row_str.chars().count();
        if len > BOARD_SIZE {
            return Err(BoardParseError::RowTooLong { row, len });
        }
        for (col, ch) in row_str.chars().enumerate() {
            grid[row][col] = match ch {
                'O' => Cell::Coin,
                '.' => Cell::Empty,
                _ => return Err(BoardParseError::UnrecognizedCharacter { ch, row, col }),
            };
        }
    }
    Ok(Board::from_grid(grid))
}
