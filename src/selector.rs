//! Two-phase move selection for interactive frontends.
//!
//! A player specifies a move with two clicks: first the source cell, then the
//! destination. [`MoveSelector`] sequences those clicks as a small state
//! machine over [`Phase`] and validates each pick against the rules engine.
//! An illegal pick is an expected event, not an error: the selector raises
//! its `invalid_selection` flag and stays in the current phase.

use tracing::{debug, warn};

use crate::engine::{Board, Game, Move, Position};

/// The phase of the two-phase selection sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for a legal source cell.
    #[default]
    SelectingSource,
    /// Source chosen; waiting for a destination that completes a legal move.
    SelectingDestination,
    /// Both endpoints chosen; the move can be committed.
    ReadyToCommit,
}

/// Sequences "pick source, pick destination, commit" over a [`Board`].
///
/// The selector holds no board of its own; every pick is validated against
/// the board passed in, and [`MoveSelector::commit`] applies the chosen move
/// to a [`Game`]. After a commit (or a [`MoveSelector::reset`]) the selector
/// is back in [`Phase::SelectingSource`].
#[derive(Clone, Debug, Default)]
pub struct MoveSelector {
    phase: Phase,
    from: Option<Position>,
    to: Option<Position>,
    invalid_selection: bool,
}

impl MoveSelector {
    /// Creates a selector in [`Phase::SelectingSource`].
    pub fn new() -> Self {
        MoveSelector::default()
    }

    /// The current selection phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether both endpoints are chosen and the move can be committed.
    pub fn is_ready(&self) -> bool {
        self.phase == Phase::ReadyToCommit
    }

    /// Whether the most recent pick was rejected.
    ///
    /// The flag is cleared again by the next accepted pick or by a reset.
    pub fn is_invalid_selection(&self) -> bool {
        self.invalid_selection
    }

    /// Routes a picked position to the current phase.
    ///
    /// In [`Phase::ReadyToCommit`] no further pick is accepted; the selection
    /// is marked invalid until the pending move is committed or the selector
    /// is reset.
    pub fn select(&mut self, board: &Board, p: Position) {
        match self.phase {
            Phase::SelectingSource => self.select_source(board, p),
            Phase::SelectingDestination => self.select_destination(board, p),
            Phase::ReadyToCommit => {
                warn!(%p, "pick ignored, a move is already pending");
                self.invalid_selection = true;
            }
        }
    }

    fn select_source(&mut self, board: &Board, p: Position) {
        if board.is_legal_source(p) {
            debug!(%p, "source selected");
            self.from = Some(p);
            self.phase = Phase::SelectingDestination;
            self.invalid_selection = false;
        } else {
            warn!(%p, "not a legal source cell");
            self.invalid_selection = true;
        }
    }

    fn select_destination(&mut self, board: &Board, p: Position) {
        // from is always set in this phase.
        let Some(from) = self.from else {
            self.invalid_selection = true;
            return;
        };
        let m = Move::new(from, p);
        if board.is_legal_move(&m) {
            debug!(%m, "destination selected");
            self.to = Some(p);
            self.phase = Phase::ReadyToCommit;
            self.invalid_selection = false;
        } else {
            warn!(%m, "not a legal move");
            self.invalid_selection = true;
        }
    }

    /// The fully selected move, available once the selector is ready.
    pub fn selected_move(&self) -> Option<Move> {
        match (self.phase, self.from, self.to) {
            (Phase::ReadyToCommit, Some(from), Some(to)) => Some(Move::new(from, to)),
            _ => None,
        }
    }

    /// Commits the pending move to `game` and resets the selector.
    ///
    /// Returns the committed move, or `None` if the selector is not ready or
    /// the game's board has changed since validation and now refuses the
    /// move (in which case the selection is marked invalid and cleared).
    pub fn commit(&mut self, game: &mut Game) -> Option<Move> {
        let m = self.selected_move()?;
        let committed = game.make_move(&m).is_ok();
        self.reset();
        if committed {
            Some(m)
        } else {
            warn!(%m, "pending move no longer legal");
            self.invalid_selection = true;
            None
        }
    }

    /// Abandons any selection in progress, returning to
    /// [`Phase::SelectingSource`] with the invalid flag cleared.
    pub fn reset(&mut self) {
        self.from = None;
        self.to = None;
        self.phase = Phase::SelectingSource;
        self.invalid_selection = false;
    }
}
