//! Typed error taxonomy for the pathfinding core (spec §7).
//!
//! All preconditions are checked up front in [`crate::dispatch`] and surfaced
//! here. Reachability failure is *not* an error: it is represented by
//! `Ok(None)` from the dispatch entry points.

use thiserror::Error;

/// Everything that can go wrong validating or running a search, short of
/// "the goal is unreachable" (which is not an error).
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum PathError {
    /// The requested algorithm name is not one of the accepted set for the
    /// requested topology (e.g. `fringe` on a temporal volume).
    #[error("unknown algorithm {algorithm:?} for {topology}")]
    UnknownAlgorithm {
        algorithm: String,
        topology: &'static str,
    },

    /// A start or end coordinate lies outside the array bounds.
    #[error("coordinate {coord:?} out of bounds for shape {shape:?}")]
    OutOfBounds {
        coord: (usize, usize, usize),
        shape: (usize, usize, usize),
    },

    /// The array rank does not match the requested mode.
    #[error("bad shape: {reason}")]
    BadShape { reason: String },

    /// An out-of-range parameter: `reach < 1`, invalid `axis`, `t_end < t_start`.
    #[error("bad parameter: {reason}")]
    BadParameter { reason: String },

    /// The search finished in a state that violates an internal invariant
    /// (e.g. a parent-link chain that does not reach the start). This
    /// indicates a bug in the engine, not a caller error.
    #[error("internal invariant violated: {reason}")]
    Internal { reason: String },
}
