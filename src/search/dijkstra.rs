//! Dijkstra's algorithm: A* with the heuristic held at zero everywhere, and
//! closed nodes never reopened — a node's `g` is proven optimal the moment
//! it is popped (spec §4.6 "Dijkstra").

use crate::cost_field::CostField;
use crate::error::PathError;
use crate::heuristic::Zero;
use crate::topology::{Coord, Topology};

use super::run_priority_search;

pub fn search(
    field: &CostField,
    topology: &dyn Topology,
    start: Coord,
    goal: Coord,
) -> Result<Option<(Vec<Coord>, u64)>, PathError> {
    run_priority_search(field, topology, &Zero, start, goal, false)
}
