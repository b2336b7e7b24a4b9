//! Generic description of two-phase puzzle states.
//!
//! A *two-phase move* is specified by first choosing a source cell and then a
//! destination cell. Any state type that can enumerate such moves, test a
//! single move for legality, apply a move, and recognize a goal state can be
//! solved by the generic breadth-first solver in [`crate::solver`].

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

/// A full two-phase move: an ordered pair of endpoints.
///
/// `P` is the endpoint type (a grid position for the coin puzzle). Two moves
/// are equal iff both endpoints match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TwoPhaseMove<P> {
    /// Cell the piece moves out of.
    pub from: P,
    /// Cell the piece lands on.
    pub to: P,
}

impl<P> TwoPhaseMove<P> {
    /// Creates a move from `from` to `to`.
    pub fn new(from: P, to: P) -> Self {
        TwoPhaseMove { from, to }
    }
}

impl<P: fmt::Display> fmt::Display for TwoPhaseMove<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Capability contract required of a state for generic shortest-path search.
///
/// Implementors must have value semantics: `Eq` and `Hash` are derived from
/// the full state contents so that two independently constructed but
/// content-equal states collide in the solver's visited map, and [`apply`]
/// must return a fresh state instead of mutating the receiver.
///
/// [`apply`]: StateSpace::apply
pub trait StateSpace: Clone + Eq + Hash {
    /// The move type accepted by this state.
    type Move: Clone + Eq + Hash;

    /// Enumerates every legal move from this state. The result is a set;
    /// callers must not rely on any enumeration order.
    fn legal_moves(&self) -> HashSet<Self::Move>;

    /// Tests a single move for legality, consistent with [`legal_moves`]:
    /// `s.is_legal_move(&m)` holds iff `s.legal_moves()` contains `m`.
    ///
    /// [`legal_moves`]: StateSpace::legal_moves
    fn is_legal_move(&self, m: &Self::Move) -> bool;

    /// Applies `m`, yielding the successor state, or `None` if `m` is not
    /// legal in this state. Never mutates `self`.
    fn apply(&self, m: &Self::Move) -> Option<Self>;

    /// Whether this state satisfies the winning condition.
    fn is_goal(&self) -> bool;
}
