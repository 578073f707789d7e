//! Minimum-cost path search over dense scalar cost fields: static 2D grids
//! and 3D space-plus-time volumes, over three search strategies (A*,
//! Dijkstra, Fringe) sharing one graph abstraction.
//!
//! The entry points are [`dispatch::find_path_2d`] and
//! [`dispatch::find_route_temporal`]; everything else is the machinery
//! they assemble per call. No state is cached across calls (see
//! "Lifecycle" in the crate's design notes).

pub mod closed_state;
pub mod cost_field;
pub mod dispatch;
pub mod error;
pub mod heuristic;
pub mod open_set;
pub mod reconstruct;
pub mod search;
pub mod topology;

pub use dispatch::{find_path_2d, find_route_temporal, TemporalOptions};
pub use error::PathError;
