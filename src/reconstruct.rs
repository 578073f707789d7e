//! Walks parent links from goal back to start and reverses them into a
//! start-to-goal path (spec §4.7).

use crate::closed_state::ClosedState;
use crate::error::PathError;
use crate::topology::{Coord, Topology};

/// Reconstruct the path ending at `goal`, given the closed-state table that
/// the search populated. Returns `(path, cost)` where `cost` is
/// `g(goal)` — equivalently the sum of destination-cell costs along the
/// path after the start (invariant, §4.7).
pub fn reconstruct(
    topology: &dyn Topology,
    closed: &ClosedState,
    start: Coord,
    goal: Coord,
) -> Result<(Vec<Coord>, u64), PathError> {
    let goal_index = topology.index(goal);
    let cost = closed.g(goal_index);

    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        let index = topology.index(current);
        match closed.parent(index) {
            Some(parent) => {
                path.push(parent);
                current = parent;
            }
            None => {
                return Err(PathError::Internal {
                    reason: format!(
                        "parent chain from goal {goal:?} broke at {current:?} before reaching start {start:?}"
                    ),
                });
            }
        }
    }
    path.reverse();
    Ok((path, cost as u64))
}
