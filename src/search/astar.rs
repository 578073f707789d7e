//! A*: Dijkstra with an admissible heuristic and reopening on strict
//! improvement (spec §4.6 "A*"). The heuristic is topology-specific, so the
//! caller supplies it rather than this module hard-coding one.

use crate::cost_field::CostField;
use crate::error::PathError;
use crate::heuristic::Heuristic;
use crate::topology::{Coord, Topology};

use super::run_priority_search;

pub fn search(
    field: &CostField,
    topology: &dyn Topology,
    heuristic: &dyn Heuristic,
    start: Coord,
    goal: Coord,
) -> Result<Option<(Vec<Coord>, u64)>, PathError> {
    run_priority_search(field, topology, heuristic, start, goal, true)
}
