//! Core rules engine for the sliding-coin puzzle.
//!
//! This module defines the game's fundamental components:
//! - `Position`: a (row, column) coordinate on the board.
//! - `Cell`: the content of one board square, empty or holding a coin.
//! - `Board`: the 4x4 puzzle state with move legality, goal and terminal
//!   tests, and a pure `apply_move`.
//! - `Game`: a thin wrapper for one live interactive game, tracking the
//!   current board and the number of committed moves.
//!
//! The puzzle starts with four coins in the four central cells and is solved
//! when all four corners hold a coin. A coin may slide along its rank or file
//! across empty cells only, and only while it still touches another coin
//! orthogonally.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;
use tracing::{debug, trace};

use crate::state::{StateSpace, TwoPhaseMove};

/// Defines the side length of the game board. The board is always square,
/// so a `BOARD_SIZE` of 4 means a 4x4 grid.
pub const BOARD_SIZE: usize = 4;

/// Number of coins on the board, invariant across any sequence of legal moves.
pub const COIN_COUNT: usize = 4;

/// The four orthogonal step directions as (row delta, column delta).
const DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A (row, column) coordinate on the puzzle board.
///
/// Coordinates are signed so that off-board probes (for example the upward
/// neighbor of row 0) are representable; [`Board::is_on_board`] decides
/// validity. Equality and hashing are by value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Row index, 0 at the top.
    pub row: i32,
    /// Column index, 0 at the left.
    pub col: i32,
}

impl Position {
    /// Creates a position at the given row and column.
    pub fn new(row: i32, col: i32) -> Self {
        Position { row, col }
    }

    /// The position one step away in direction `(dr, dc)`.
    fn step(&self, dr: i32, dc: i32) -> Position {
        Position::new(self.row + dr, self.col + dc)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The content of a single board square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    /// An empty square.
    #[default]
    Empty,
    /// A square holding a coin.
    Coin,
}

impl Cell {
    /// Converts the cell to its character representation, as used by
    /// [`Board`]'s `Display` impl and by [`crate::utils::board_from_str_array`].
    ///
    /// # Examples
    /// ```
    /// use coinslide_solver::engine::Cell;
    /// assert_eq!(Cell::Coin.to_char(), 'O');
    /// assert_eq!(Cell::Empty.to_char(), '.');
    /// ```
    pub fn to_char(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Coin => 'O',
        }
    }
}

/// A full move of one coin: source and destination positions.
pub type Move = TwoPhaseMove<Position>;

/// Contract violations on the rules-engine API.
///
/// These indicate a misbehaving caller (for example a UI layer passing an
/// unvalidated click through) and are surfaced as hard failures rather than
/// silently ignored. The solver never produces them because it only applies
/// moves it has itself enumerated.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum RulesError {
    /// A position outside the 4x4 grid was queried or used as a move endpoint.
    #[error("position {0} is outside the {BOARD_SIZE}x{BOARD_SIZE} board")]
    OutOfBounds(Position),
    /// `apply_move` was invoked with a move that fails `is_legal_move`.
    #[error("illegal move {0}")]
    IllegalMove(Move),
}

/// The puzzle state: a fixed 4x4 grid of [`Cell`]s.
///
/// `Board` has value semantics. Equality and hashing are structural over the
/// full grid, so two boards with identical cell contents compare equal
/// regardless of the move history that produced them, and [`Board::apply_move`]
/// returns a new board instead of mutating the receiver. This is what lets
/// the breadth-first solver key its visited map by board value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    grid: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates the standard starting board: coins in the four central cells
    /// `(1,1), (1,2), (2,1), (2,2)`, every other cell empty.
    pub fn new() -> Self {
        let mut grid = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for row in [1, 2] {
            for col in [1, 2] {
                grid[row][col] = Cell::Coin;
            }
        }
        Board { grid }
    }

    /// Creates a board from a predefined grid configuration.
    ///
    /// This is useful for testing or setting up specific puzzle scenarios;
    /// no coin-count check is performed.
    pub fn from_grid(grid: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Board { grid }
    }

    /// Creates a board with [`COIN_COUNT`] coins placed on random distinct
    /// cells, using the provided seed.
    ///
    /// The same seed always produces the same board, which makes generated
    /// positions reproducible in tests and on the command line. Random
    /// placements are not guaranteed to be solvable.
    pub fn random_with_seed(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut grid = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for index in rand::seq::index::sample(&mut rng, BOARD_SIZE * BOARD_SIZE, COIN_COUNT) {
            grid[index / BOARD_SIZE][index % BOARD_SIZE] = Cell::Coin;
        }
        Board { grid }
    }

    /// Whether both coordinates of `p` lie in `[0, BOARD_SIZE)`.
    pub fn is_on_board(&self, p: Position) -> bool {
        p.row >= 0 && p.row < BOARD_SIZE as i32 && p.col >= 0 && p.col < BOARD_SIZE as i32
    }

    /// Returns the cell at position `p`.
    ///
    /// # Errors
    /// Returns [`RulesError::OutOfBounds`] if `p` lies outside the grid.
    pub fn cell_at(&self, p: Position) -> Result<Cell, RulesError> {
        if self.is_on_board(p) {
            Ok(self.grid[p.row as usize][p.col as usize])
        } else {
            Err(RulesError::OutOfBounds(p))
        }
    }

    /// The cell at `p`, or `None` off board. Bounds-tolerant lookup used by
    /// the rules below so that off-board probes read as "not a coin".
    fn get(&self, p: Position) -> Option<Cell> {
        self.is_on_board(p)
            .then(|| self.grid[p.row as usize][p.col as usize])
    }

    fn is_empty(&self, p: Position) -> bool {
        self.get(p) == Some(Cell::Empty)
    }

    /// Whether at least one of the four orthogonal neighbors of `p` holds a coin.
    fn has_adjacent_coin(&self, p: Position) -> bool {
        DIRECTIONS
            .iter()
            .any(|&(dr, dc)| self.get(p.step(dr, dc)) == Some(Cell::Coin))
    }

    /// Whether `p` may initiate a move: it is on board, holds a coin, and has
    /// an orthogonally adjacent coin.
    ///
    /// A coin with no adjacent coin can never move; once a coin separates
    /// from the cluster it is parked for the rest of the game.
    pub fn is_legal_source(&self, p: Position) -> bool {
        self.get(p) == Some(Cell::Coin) && self.has_adjacent_coin(p)
    }

    /// Tests a single move for legality.
    ///
    /// A move is legal iff all of:
    /// 1. both endpoints are on board,
    /// 2. the source is a legal source cell per [`Board::is_legal_source`],
    /// 3. the destination is empty,
    /// 4. the move is purely horizontal or purely vertical, with distance
    ///    between 1 and `BOARD_SIZE - 1`,
    /// 5. every cell strictly between source and destination is empty.
    pub fn is_legal_move(&self, m: &Move) -> bool {
        if !self.is_on_board(m.from) || !self.is_on_board(m.to) {
            trace!(%m, "move endpoint off board");
            return false;
        }
        if !self.is_legal_source(m.from) || !self.is_empty(m.to) {
            trace!(%m, "source not movable or destination occupied");
            return false;
        }

        let row_diff = (m.to.row - m.from.row).abs();
        let col_diff = (m.to.col - m.from.col).abs();
        let max_dist = BOARD_SIZE as i32 - 1;
        let is_straight = (row_diff == 0 && (1..=max_dist).contains(&col_diff))
            || (col_diff == 0 && (1..=max_dist).contains(&row_diff));
        if !is_straight {
            trace!(%m, "move is not a straight slide");
            return false;
        }

        // Walk the cells strictly between the endpoints; the slide path must
        // be clear.
        let row_step = (m.to.row - m.from.row).signum();
        let col_step = (m.to.col - m.from.col).signum();
        for i in 1..row_diff.max(col_diff) {
            if !self.is_empty(m.from.step(row_step * i, col_step * i)) {
                trace!(%m, "slide path is blocked");
                return false;
            }
        }
        true
    }

    /// Enumerates the set of all legal moves in this state.
    ///
    /// Every legal source cell is scanned, and for each of the four
    /// directions every destination at distance 1 to `BOARD_SIZE - 1` is
    /// tested with [`Board::is_legal_move`]. The result is an unordered set.
    pub fn legal_moves(&self) -> HashSet<Move> {
        let mut moves = HashSet::new();
        for row in 0..BOARD_SIZE as i32 {
            for col in 0..BOARD_SIZE as i32 {
                let from = Position::new(row, col);
                if !self.is_legal_source(from) {
                    continue;
                }
                for (dr, dc) in DIRECTIONS {
                    for dist in 1..BOARD_SIZE as i32 {
                        let m = Move::new(from, from.step(dr * dist, dc * dist));
                        if self.is_on_board(m.to) && self.is_legal_move(&m) {
                            moves.insert(m);
                        }
                    }
                }
            }
        }
        moves
    }

    /// Applies a legal move, returning the successor board.
    ///
    /// The receiver is left untouched; the returned board is identical except
    /// that the destination cell holds the coin and the source cell is empty.
    /// Coin count is conserved.
    ///
    /// # Errors
    /// Returns [`RulesError::IllegalMove`] if `m` fails [`Board::is_legal_move`].
    pub fn apply_move(&self, m: &Move) -> Result<Board, RulesError> {
        if !self.is_legal_move(m) {
            return Err(RulesError::IllegalMove(*m));
        }
        let mut next = self.clone();
        next.grid[m.to.row as usize][m.to.col as usize] = Cell::Coin;
        next.grid[m.from.row as usize][m.from.col as usize] = Cell::Empty;
        debug!(%m, "applied move");
        Ok(next)
    }

    /// The number of coins currently on the board.
    pub fn coin_count(&self) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|&&c| c == Cell::Coin)
            .count()
    }

    /// Whether the puzzle is solved: all four corner cells hold a coin.
    pub fn is_goal(&self) -> bool {
        let max = BOARD_SIZE - 1;
        [(0, 0), (0, max), (max, 0), (max, max)]
            .iter()
            .all(|&(r, c)| self.grid[r][c] == Cell::Coin)
    }

    /// Whether no cell on the board is a legal source cell, i.e. no further
    /// move exists.
    ///
    /// This is independent of [`Board::is_goal`]: a terminal non-goal state
    /// is a stuck loss. Callers deciding a game outcome check the goal first,
    /// as [`Game::status`] does.
    pub fn is_terminal(&self) -> bool {
        (0..BOARD_SIZE as i32).all(|row| {
            (0..BOARD_SIZE as i32).all(|col| !self.is_legal_source(Position::new(row, col)))
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl StateSpace for Board {
    type Move = Move;

    fn legal_moves(&self) -> HashSet<Move> {
        Board::legal_moves(self)
    }

    fn is_legal_move(&self, m: &Move) -> bool {
        Board::is_legal_move(self, m)
    }

    fn apply(&self, m: &Move) -> Option<Board> {
        self.apply_move(m).ok()
    }

    fn is_goal(&self) -> bool {
        Board::is_goal(self)
    }
}

impl fmt::Display for Board {
    /// Formats the board with row and column headers, one character per cell.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {}", col)?;
        }
        for (row, cells) in self.grid.iter().enumerate() {
            write!(f, "\n{}", row)?;
            for cell in cells {
                write!(f, " {}", cell.to_char())?;
            }
        }
        Ok(())
    }
}

/// Outcome classification for a live game, goal checked before stuck.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// At least one legal move remains and the goal is not yet reached.
    InProgress,
    /// All four corners hold a coin.
    Solved,
    /// No legal move remains and the goal was not reached.
    Stuck,
}

/// One live interactive game: the current board plus a committed-move counter.
///
/// `Game` never hands out a mutable board. Each committed move replaces the
/// current board by value (`current = current.apply_move(m)`), keeping the
/// search-facing [`Board`] type free of in-place mutation.
#[derive(Clone, Debug, Default)]
pub struct Game {
    board: Board,
    moves_made: u32,
}

impl Game {
    /// Starts a game from the standard starting board.
    pub fn new() -> Self {
        Game::default()
    }

    /// Starts a game from a specific board.
    pub fn with_board(board: Board) -> Self {
        Game {
            board,
            moves_made: 0,
        }
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The number of moves committed so far.
    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    /// Commits a move, replacing the current board with its successor and
    /// incrementing the move counter.
    ///
    /// # Errors
    /// Returns [`RulesError::IllegalMove`] (leaving the game unchanged) if
    /// `m` is not legal on the current board.
    pub fn make_move(&mut self, m: &Move) -> Result<(), RulesError> {
        self.board = self.board.apply_move(m)?;
        self.moves_made += 1;
        debug!(%m, moves_made = self.moves_made, "committed move");
        Ok(())
    }

    /// Classifies the current position. The goal test takes precedence over
    /// the stuck test, so a position that is simultaneously goal-reached and
    /// move-less counts as [`GameStatus::Solved`].
    pub fn status(&self) -> GameStatus {
        if self.board.is_goal() {
            GameStatus::Solved
        } else if self.board.is_terminal() {
            GameStatus::Stuck
        } else {
            GameStatus::InProgress
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::board_from_str_array;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn mv(from: (i32, i32), to: (i32, i32)) -> Move {
        Move::new(Position::new(from.0, from.1), Position::new(to.0, to.1))
    }

    fn hash_of(board: &Board) -> u64 {
        let mut hasher = DefaultHasher::new();
        board.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_initial_state() {
        let board = Board::new();
        for row in 0..BOARD_SIZE as i32 {
            for col in 0..BOARD_SIZE as i32 {
                let expected = if (1..=2).contains(&row) && (1..=2).contains(&col) {
                    Cell::Coin
                } else {
                    Cell::Empty
                };
                assert_eq!(board.cell_at(Position::new(row, col)), Ok(expected));
            }
        }
        assert_eq!(board.coin_count(), COIN_COUNT);
        assert!(!board.is_goal());
        assert!(!board.is_terminal());
    }

    #[test]
    fn test_is_on_board() {
        let board = Board::new();
        assert!(board.is_on_board(Position::new(0, 2)));
        assert!(board.is_on_board(Position::new(3, 3)));
        assert!(!board.is_on_board(Position::new(4, 4)));
        assert!(!board.is_on_board(Position::new(-1, 0)));
    }

    #[test]
    fn test_cell_at_out_of_bounds() {
        let board = Board::new();
        let off = Position::new(0, 4);
        assert_eq!(board.cell_at(off), Err(RulesError::OutOfBounds(off)));
    }

    #[test]
    fn test_is_legal_source() {
        let board = Board::new();
        // Central coins touch each other.
        assert!(board.is_legal_source(Position::new(1, 1)));
        assert!(board.is_legal_source(Position::new(2, 2)));
        // Empty cells and off-board positions are not sources.
        assert!(!board.is_legal_source(Position::new(0, 2)));
        assert!(!board.is_legal_source(Position::new(-1, 0)));

        // An isolated coin has no adjacent coin and is parked.
        let lonely = board_from_str_array(&[
            "O...", //
            "....", //
            ".OO.", //
            "....",
        ])
        .unwrap();
        assert!(!lonely.is_legal_source(Position::new(0, 0)));
        assert!(lonely.is_legal_source(Position::new(2, 1)));
    }

    #[test]
    fn test_is_legal_move_accepts_straight_clear_slides() {
        let board = Board::new();
        assert!(board.is_legal_move(&mv((1, 1), (0, 1))));
        assert!(board.is_legal_move(&mv((1, 1), (1, 0))));
        assert!(board.is_legal_move(&mv((2, 2), (2, 3))));

        // Distance 2 across an empty intermediate cell.
        let spread = board_from_str_array(&[
            "....", //
            ".OO.", //
            "....", //
            "....",
        ])
        .unwrap();
        assert!(spread.is_legal_move(&mv((1, 1), (3, 1))));
    }

    #[test]
    fn test_is_legal_move_rejections() {
        let board = Board::new();
        // Off-board endpoints.
        assert!(!board.is_legal_move(&mv((1, 1), (1, 4))));
        assert!(!board.is_legal_move(&mv((-1, 1), (1, 1))));
        // Empty source.
        assert!(!board.is_legal_move(&mv((0, 1), (0, 2))));
        // Occupied destination.
        assert!(!board.is_legal_move(&mv((2, 1), (1, 1))));
        // Diagonal.
        assert!(!board.is_legal_move(&mv((1, 1), (0, 0))));
        // Zero-length.
        assert!(!board.is_legal_move(&mv((1, 1), (1, 1))));
        // Blocked intermediate cell: (1,1) -> (1,3) passes over the coin at (1,2).
        assert!(!board.is_legal_move(&mv((1, 1), (1, 3))));
        // Source coin with no adjacent coin.
        let lonely = board_from_str_array(&[
            "O...", //
            "....", //
            ".OO.", //
            "....",
        ])
        .unwrap();
        assert!(!lonely.is_legal_move(&mv((0, 0), (0, 3))));
    }

    #[test]
    fn test_legal_moves_matches_predicate() {
        // The enumerator and the single-move predicate must agree on every
        // conceivable on-board endpoint pair.
        for board in [
            Board::new(),
            board_from_str_array(&[
                "O..O", //
                "...O", //
                "....", //
                "..O.",
            ])
            .unwrap(),
        ] {
            let enumerated = board.legal_moves();
            for from_row in 0..BOARD_SIZE as i32 {
                for from_col in 0..BOARD_SIZE as i32 {
                    for to_row in 0..BOARD_SIZE as i32 {
                        for to_col in 0..BOARD_SIZE as i32 {
                            let m = mv((from_row, from_col), (to_row, to_col));
                            assert_eq!(
                                board.is_legal_move(&m),
                                enumerated.contains(&m),
                                "predicate/enumerator mismatch for {}",
                                m
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_legal_moves_initial_contents() {
        let moves = Board::new().legal_moves();
        assert!(moves.contains(&mv((1, 1), (0, 1))));
        assert!(!moves.contains(&mv((1, 1), (3, 3))));
    }

    #[test]
    fn test_apply_move_is_pure_and_conserving() {
        let board = Board::new();
        let m = mv((1, 1), (0, 1));
        let next = board.apply_move(&m).unwrap();

        // Receiver untouched.
        assert_eq!(board, Board::new());
        // Destination now holds the coin, source is empty, all else unchanged.
        assert_eq!(next.cell_at(Position::new(0, 1)), Ok(Cell::Coin));
        assert_eq!(next.cell_at(Position::new(1, 1)), Ok(Cell::Empty));
        assert_eq!(next.coin_count(), COIN_COUNT);
        for row in 0..BOARD_SIZE as i32 {
            for col in 0..BOARD_SIZE as i32 {
                let p = Position::new(row, col);
                if p != m.from && p != m.to {
                    assert_eq!(next.cell_at(p), board.cell_at(p));
                }
            }
        }
    }

    #[test]
    fn test_apply_move_rejects_illegal() {
        let board = Board::new();
        let m = mv((1, 1), (0, 0));
        assert_eq!(board.apply_move(&m), Err(RulesError::IllegalMove(m)));
    }

    #[test]
    fn test_coin_count_conserved_along_any_line() {
        let mut board = Board::new();
        // Drive a few arbitrary legal moves and watch the invariant hold.
        for _ in 0..6 {
            let Some(m) = board.legal_moves().into_iter().next() else {
                break;
            };
            board = board.apply_move(&m).unwrap();
            assert_eq!(board.coin_count(), COIN_COUNT);
        }
    }

    #[test]
    fn test_structural_equality_and_hash() {
        // Reach the same position along two different move orders.
        let root = Board::new();
        let a = root
            .apply_move(&mv((1, 1), (0, 1)))
            .unwrap()
            .apply_move(&mv((2, 2), (3, 2)))
            .unwrap();
        let b = root
            .apply_move(&mv((2, 2), (3, 2)))
            .unwrap()
            .apply_move(&mv((1, 1), (0, 1)))
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        // One differing cell breaks equality.
        let c = a.apply_move(&mv((1, 2), (1, 1))).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_is_goal() {
        let solved = board_from_str_array(&[
            "O..O", //
            "....", //
            "....", //
            "O..O",
        ])
        .unwrap();
        assert!(solved.is_goal());

        let missing_corner = board_from_str_array(&[
            "O...", //
            "....", //
            "....", //
            "O..O",
        ])
        .unwrap();
        assert!(!missing_corner.is_goal());
    }

    #[test]
    fn test_is_terminal() {
        // Four isolated coins: nothing may move, corners not reached.
        let stuck = board_from_str_array(&[
            "O.O.", //
            "....", //
            "O.O.", //
            "....",
        ])
        .unwrap();
        assert!(stuck.is_terminal());
        assert!(!stuck.is_goal());
        assert!(stuck.legal_moves().is_empty());

        // The solved position is also terminal; the two predicates stay
        // independent and callers check the goal first.
        let solved = board_from_str_array(&[
            "O..O", //
            "....", //
            "....", //
            "O..O",
        ])
        .unwrap();
        assert!(solved.is_terminal());
        assert!(solved.is_goal());
    }

    #[test]
    fn test_random_with_seed_is_deterministic() {
        let a = Board::random_with_seed(99);
        let b = Board::random_with_seed(99);
        assert_eq!(a, b);
        assert_eq!(a.coin_count(), COIN_COUNT);
    }

    #[test]
    fn test_display_formatting() {
        let rendered = format!("{}", Board::new());
        let expected = "  0 1 2 3\n\
                        0 . . . .\n\
                        1 . O O .\n\
                        2 . O O .\n\
                        3 . . . .";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_game_make_move_and_counter() {
        let mut game = Game::new();
        game.make_move(&mv((1, 1), (0, 1))).unwrap();
        assert_eq!(game.moves_made(), 1);
        assert_eq!(game.board().cell_at(Position::new(0, 1)), Ok(Cell::Coin));

        // An illegal move leaves the game untouched.
        let before = game.board().clone();
        assert!(game.make_move(&mv((0, 1), (0, 0))).is_err());
        assert_eq!(game.board(), &before);
        assert_eq!(game.moves_made(), 1);
    }

    #[test]
    fn test_game_status_precedence() {
        assert_eq!(Game::new().status(), GameStatus::InProgress);

        let solved = board_from_str_array(&[
            "O..O", //
            "....", //
            "....", //
            "O..O",
        ])
        .unwrap();
        // Goal-reached and move-less at once: goal wins.
        assert_eq!(Game::with_board(solved).status(), GameStatus::Solved);

        let stuck = board_from_str_array(&[
            "O.O.", //
            "....", //
            "O.O.", //
            "....",
        ])
        .unwrap();
        assert_eq!(Game::with_board(stuck).status(), GameStatus::Stuck);
    }
}
