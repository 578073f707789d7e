//! Validates inputs, selects topology + strategy, drives the search, and
//! maps the outcome back to the caller's coordinate convention (spec §4.8).
//!
//! This is the only module that knows about both "the public API shape"
//! and "the engine's internal shape" — everything below it works purely in
//! canonical `(x, y[, t])` terms.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::cost_field::CostField;
use crate::error::PathError;
use crate::heuristic::{Grid2DHeuristic, Temporal3DHeuristic};
use crate::search::{astar, dijkstra, fringe};
use crate::topology::{Grid2D, Temporal3D};

/// Options accepted by [`find_route_temporal`], split out from positional
/// parameters so the HTTP and CLI surfaces can deserialize a request body
/// or parse flags directly into this type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TemporalOptions {
    #[serde(default = "default_reach")]
    pub reach: usize,
    #[serde(default = "default_axis")]
    pub axis: usize,
}

const fn default_reach() -> usize {
    1
}

const fn default_axis() -> usize {
    2
}

impl Default for TemporalOptions {
    fn default() -> Self {
        TemporalOptions {
            reach: default_reach(),
            axis: default_axis(),
        }
    }
}

const GRID_ALGORITHMS: &[&str] = &["astar", "dijkstra", "fringe"];
const TEMPORAL_ALGORITHMS: &[&str] = &["astar", "dijkstra"];

/// Find a minimum-cost path across a dense 2D cost array, 8-connected, with
/// the destination cell's `max(1, cost)` charged per move (spec §6).
#[instrument(skip(array), fields(w, h, algorithm))]
pub fn find_path_2d(
    array: &[u8],
    w: usize,
    h: usize,
    start: (usize, usize),
    end: (usize, usize),
    algorithm: &str,
) -> Result<Option<(Vec<(usize, usize)>, u64)>, PathError> {
    if !GRID_ALGORITHMS.contains(&algorithm) {
        return Err(PathError::UnknownAlgorithm {
            algorithm: algorithm.to_string(),
            topology: "grid2d",
        });
    }
    if array.len() != w * h {
        return Err(PathError::BadShape {
            reason: format!(
                "2D array length {} does not match w*h = {}",
                array.len(),
                w * h
            ),
        });
    }
    check_in_bounds_2d(start, w, h)?;
    check_in_bounds_2d(end, w, h)?;

    let field = CostField::new_2d(array, w, h)?;
    let topology = Grid2D::new(w, h);
    let start3 = (start.0, start.1, 0);
    let end3 = (end.0, end.1, 0);

    tracing::info!(algorithm, w, h, ?start, ?end, "dispatching grid2d search");

    let result = match algorithm {
        "dijkstra" => dijkstra::search(&field, &topology, start3, end3)?,
        "astar" => astar::search(&field, &topology, &Grid2DHeuristic, start3, end3)?,
        "fringe" => fringe::search(&field, &topology, &Grid2DHeuristic, start3, end3)?,
        _ => unreachable!("validated above"),
    };

    Ok(result.map(|(path, cost)| (path.into_iter().map(|(x, y, _)| (x, y)).collect(), cost)))
}

/// Find a minimum-cost trajectory through a dense 3D space-time cost
/// volume, time-monotone and reach-bounded (spec §6).
#[instrument(skip(volume), fields(algorithm, reach = options.reach, axis = options.axis))]
pub fn find_route_temporal(
    volume: &[u8],
    dims: [usize; 3],
    algorithm: &str,
    start: (usize, usize, usize),
    end: (usize, usize, usize),
    options: TemporalOptions,
) -> Result<Option<(Vec<(usize, usize, usize)>, u64)>, PathError> {
    if !TEMPORAL_ALGORITHMS.contains(&algorithm) {
        return Err(PathError::UnknownAlgorithm {
            algorithm: algorithm.to_string(),
            topology: "temporal3d",
        });
    }
    if options.reach < 1 {
        return Err(PathError::BadParameter {
            reason: format!("reach must be >= 1, got {}", options.reach),
        });
    }
    if options.axis > 2 {
        return Err(PathError::BadParameter {
            reason: format!("axis must be 0, 1 or 2, got {}", options.axis),
        });
    }
    let total: usize = dims.iter().product();
    if volume.len() != total {
        return Err(PathError::BadShape {
            reason: format!(
                "3D array length {} does not match dims {:?}",
                volume.len(),
                dims
            ),
        });
    }

    let field = CostField::new_3d(volume, dims, options.axis)?;
    let (w, h, t) = field.shape().as_triple();

    check_in_bounds_3d(start, w, h, t)?;
    check_in_bounds_3d(end, w, h, t)?;

    if end.2 < start.2 {
        return Err(PathError::BadParameter {
            reason: format!("t_end ({}) must be >= t_start ({})", end.2, start.2),
        });
    }

    tracing::info!(
        algorithm,
        w,
        h,
        t,
        reach = options.reach,
        ?start,
        ?end,
        "dispatching temporal3d search"
    );

    // Reject trajectories that cannot possibly satisfy the reach bound
    // before running the search at all (spec §4.3, invariant 7).
    let dt = end.2 - start.2;
    let dx = start.0.abs_diff(end.0);
    let dy = start.1.abs_diff(end.1);
    let spatial = dx.max(dy);
    if dt == 0 {
        if start.0 != end.0 || start.1 != end.1 {
            return Ok(None);
        }
    } else if spatial > options.reach * dt {
        return Ok(None);
    }

    let topology = Temporal3D::new(w, h, t, options.reach);
    let heuristic = Temporal3DHeuristic::new(options.reach as u32);

    let result = match algorithm {
        "dijkstra" => dijkstra::search(&field, &topology, start, end)?,
        "astar" => astar::search(&field, &topology, &heuristic, start, end)?,
        _ => unreachable!("validated above"),
    };

    Ok(result)
}

fn check_in_bounds_2d(coord: (usize, usize), w: usize, h: usize) -> Result<(), PathError> {
    if coord.0 >= w || coord.1 >= h {
        return Err(PathError::OutOfBounds {
            coord: (coord.0, coord.1, 0),
            shape: (w, h, 1),
        });
    }
    Ok(())
}

fn check_in_bounds_3d(
    coord: (usize, usize, usize),
    w: usize,
    h: usize,
    t: usize,
) -> Result<(), PathError> {
    if coord.0 >= w || coord.1 >= h || coord.2 >= t {
        return Err(PathError::OutOfBounds {
            coord,
            shape: (w, h, t),
        });
    }
    Ok(())
}
