//! Fringe search: iterative deepening over `f`-thresholds with two FIFO
//! frontiers instead of a heap (spec §4.6 "Fringe Search"), grounded on the
//! reference `fringe` implementation shipped by the `pathfinding` crate.

use std::collections::VecDeque;

use crate::closed_state::ClosedState;
use crate::cost_field::CostField;
use crate::error::PathError;
use crate::heuristic::Heuristic;
use crate::reconstruct::reconstruct;
use crate::topology::{Coord, Topology};

pub fn search(
    field: &CostField,
    topology: &dyn Topology,
    heuristic: &dyn Heuristic,
    start: Coord,
    goal: Coord,
) -> Result<Option<(Vec<Coord>, u64)>, PathError> {
    let mut closed = ClosedState::new(topology.node_count());
    let mut now: VecDeque<Coord> = VecDeque::new();
    let mut later: VecDeque<Coord> = VecDeque::new();

    let start_index = topology.index(start);
    closed.seed(start_index);
    now.push_back(start);
    let mut flimit = heuristic.estimate(start, goal);

    let mut successors = Vec::new();
    loop {
        if now.is_empty() {
            return Ok(None);
        }
        let mut fmin = u32::MAX;
        while let Some(coord) = now.pop_front() {
            let index = topology.index(coord);
            let g = closed.g(index);
            let f = g + heuristic.estimate(coord, goal);
            if f > flimit {
                if f < fmin {
                    fmin = f;
                }
                later.push_back(coord);
                continue;
            }
            if coord == goal {
                closed.close(index);
                return reconstruct(topology, &closed, start, goal).map(Some);
            }

            successors.clear();
            topology.successors(field, coord, &mut successors);
            for &succ in successors.iter() {
                let succ_index = topology.index(succ);
                let g_succ = g + field.edge_weight(succ.0, succ.1, succ.2);
                if g_succ < closed.g(succ_index) {
                    closed.relax(succ_index, g_succ, coord);
                    if !remove(&mut later, succ) {
                        remove(&mut now, succ);
                    }
                    now.push_front(succ);
                }
            }
        }
        std::mem::swap(&mut now, &mut later);
        flimit = fmin;
    }
}

fn remove(deque: &mut VecDeque<Coord>, target: Coord) -> bool {
    deque.iter().position(|&c| c == target).is_some_and(|i| {
        deque.remove(i);
        true
    })
}
