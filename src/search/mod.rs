//! The three search strategies sharing one driver loop (spec §4.6).
//!
//! Dijkstra and A* differ only in their heuristic and reopening policy, so
//! both are thin callers of [`run_priority_search`]. Fringe's iterative
//! deepening has no common ground with the heap-based driver and gets its
//! own loop in [`fringe`].

pub mod astar;
pub mod dijkstra;
pub mod fringe;

use crate::closed_state::ClosedState;
use crate::cost_field::CostField;
use crate::error::PathError;
use crate::heuristic::Heuristic;
use crate::open_set::OpenSet;
use crate::reconstruct::reconstruct;
use crate::topology::{Coord, Topology};

/// Shared driver for Dijkstra and A*: a standard decrease-key-free
/// Dijkstra/A* loop over [`OpenSet`] and [`ClosedState`], differing only in
/// whether `heuristic` is the zero heuristic and whether closed nodes may
/// be reopened on strict improvement.
pub(crate) fn run_priority_search(
    field: &CostField,
    topology: &dyn Topology,
    heuristic: &dyn Heuristic,
    start: Coord,
    goal: Coord,
    allow_reopen: bool,
) -> Result<Option<(Vec<Coord>, u64)>, PathError> {
    let mut closed = ClosedState::new(topology.node_count());
    let mut open = OpenSet::new();

    let start_index = topology.index(start);
    closed.seed(start_index);
    open.push(start, start_index, heuristic.estimate(start, goal), 0);

    let mut successors = Vec::new();
    while let Some((coord, index, f)) = open.pop() {
        let g = closed.g(index);
        let h = heuristic.estimate(coord, goal);
        // Stale entry: a cheaper path to this node was found after this
        // heap entry was pushed. Discard rather than re-expand.
        if f != g.saturating_add(h) {
            continue;
        }
        if closed.is_closed(index) {
            continue;
        }

        if coord == goal {
            closed.close(index);
            return reconstruct(topology, &closed, start, goal).map(Some);
        }

        closed.close(index);

        successors.clear();
        topology.successors(field, coord, &mut successors);
        for &succ in successors.iter() {
            let succ_index = topology.index(succ);
            if closed.is_closed(succ_index) && !allow_reopen {
                continue;
            }
            let g_succ = g + field.edge_weight(succ.0, succ.1, succ.2);
            if g_succ < closed.g(succ_index) {
                // `relax` already marks the record `Open`, which is the same
                // transition `reopen` would make for an already-closed node —
                // A*'s reopening policy falls out of this unconditionally.
                closed.relax(succ_index, g_succ, coord);
                let h_succ = heuristic.estimate(succ, goal);
                open.push(succ, succ_index, g_succ + h_succ, h_succ);
            }
        }
    }

    Ok(None)
}
