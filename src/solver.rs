//! Generic breadth-first shortest-path solver.
//!
//! [`solve_bfs`] works against the [`StateSpace`] contract only, so it can be
//! written and tested once and reused for any two-phase grid puzzle. States
//! are expanded level by level from the root; because every distinct state is
//! discovered at most once and the frontier is first-in-first-out, the first
//! goal state dequeued is reachable by a minimum-length move sequence.

use std::collections::{HashMap, VecDeque};
use tracing::{debug, info};

use crate::state::StateSpace;

/// A shortest move sequence found by the solver.
#[derive(Clone, Debug)]
pub struct Solution<M> {
    /// Moves from the root state to a goal state, in play order. Empty when
    /// the root is already a goal state.
    pub moves: Vec<M>,
    /// Number of distinct states discovered during the search, the root
    /// included.
    pub states_discovered: usize,
    /// Number of states dequeued and expanded before the goal was found.
    pub states_expanded: usize,
}

/// Searches breadth-first from `root` for a goal state.
///
/// Returns a minimum-length [`Solution`] when some goal state is reachable
/// from `root`, or `None` when the reachable component of the state space
/// contains no goal state. "No solution" is a normal outcome value, not an
/// error; the search itself never fails on a legally constructed root.
///
/// The visited map records, per discovered state, the predecessor state and
/// the move that produced it. It doubles as duplicate-state suppression and
/// as the trail for path reconstruction, and is keyed by state value, so two
/// different move orders reaching the same configuration collapse into one
/// entry.
pub fn solve_bfs<S: StateSpace>(root: &S) -> Option<Solution<S::Move>> {
    let mut visited: HashMap<S, Option<(S, S::Move)>> = HashMap::new();
    visited.insert(root.clone(), None);

    let mut frontier = VecDeque::new();
    frontier.push_back(root.clone());

    let mut expanded = 0usize;
    while let Some(state) = frontier.pop_front() {
        if state.is_goal() {
            let moves = reconstruct_path(&visited, &state);
            info!(
                length = moves.len(),
                discovered = visited.len(),
                expanded,
                "goal reached"
            );
            return Some(Solution {
                moves,
                states_discovered: visited.len(),
                states_expanded: expanded,
            });
        }
        expanded += 1;

        for m in state.legal_moves() {
            // The move came from the enumerator, so apply cannot refuse it;
            // skipping is still the right reaction for a misbehaving state
            // type.
            let Some(successor) = state.apply(&m) else {
                continue;
            };
            if visited.contains_key(&successor) {
                continue;
            }
            visited.insert(successor.clone(), Some((state.clone(), m)));
            frontier.push_back(successor);
        }
    }

    debug!(
        discovered = visited.len(),
        expanded, "state space exhausted without reaching a goal"
    );
    None
}

/// Follows predecessor links from `goal` back to the root (whose entry holds
/// no predecessor), then reverses the collected moves into play order.
fn reconstruct_path<S: StateSpace>(
    visited: &HashMap<S, Option<(S, S::Move)>>,
    goal: &S,
) -> Vec<S::Move> {
    let mut moves = Vec::new();
    let mut current = goal;
    while let Some(Some((predecessor, m))) = visited.get(current) {
        moves.push(m.clone());
        current = predecessor;
    }
    moves.reverse();
    moves
}
