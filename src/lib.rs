//! # Coinslide Solver Library
//!
//! This library provides the rules engine for a 4x4 sliding-coin puzzle and
//! a generic Breadth First Search (BFS) solver that finds a shortest
//! sequence of moves from any position to a solved one.
//!
//! Four coins start in the four central cells; the puzzle is solved when all
//! four corners hold a coin. A move slides one coin along its rank or file
//! over empty cells onto an empty cell, and a coin may only start a move
//! while it is orthogonally adjacent to another coin.
//!
//! It is used by two binaries:
//! - `human_player`: interactive gameplay via the command line, with a
//!   two-phase (source, then destination) selection flow and a JSON result
//!   history.
//! - `bfs_solver`: takes a board (standard start, a board file, or a random
//!   seed) and prints a shortest move sequence to the solved position, or
//!   reports that none exists.
//!
//! ## Modules
//! - `engine`: board representation (`Board`), value types (`Position`,
//!   `Cell`, `Move`), move legality, goal/terminal tests, and the live-game
//!   wrapper (`Game`).
//! - `state`: the `StateSpace` capability trait and the generic
//!   `TwoPhaseMove` type the solver is written against.
//! - `solver`: the `solve_bfs` shortest-path search with path
//!   reconstruction.
//! - `selector`: the two-phase move-selection state machine for interactive
//!   frontends.
//! - `results`: JSON-backed storage of finished-game results.
//! - `utils`: parsing board positions from text.

pub mod engine;
pub mod results;
pub mod selector;
pub mod solver;
pub mod state;
pub mod utils;
