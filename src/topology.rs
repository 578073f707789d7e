//! Successor-generation policy over a [`CostField`] (spec §4.2).
//!
//! Two variants share one [`Topology`] trait: free 8-connected grid motion,
//! and reach-bounded motion that must strictly advance a time coordinate by
//! one step per move.

use crate::cost_field::CostField;

/// A node identity in the engine's canonical `(x, y, t)` terms. `t` is
/// always 0 for Grid2D.
pub type Coord = (usize, usize, usize);

/// Successor-generation policy. Implementors must only ever yield
/// in-bounds coordinates that are valid moves under their own rules — the
/// search strategies never re-check topology constraints themselves.
pub trait Topology {
    /// Append the successors of `from` to `out`, paired with the flat index
    /// used by [`crate::closed_state::ClosedState`].
    fn successors(&self, field: &CostField, from: Coord, out: &mut Vec<Coord>);

    /// Flat index for a coordinate, used to size and address the dense
    /// [`crate::closed_state::ClosedState`] table.
    fn index(&self, coord: Coord) -> usize;

    /// Total number of addressable nodes (`W*H` or `W*H*T`).
    fn node_count(&self) -> usize;
}

/// Free 8-connected motion over a single 2D plane (spec §4.2 "Grid2D").
pub struct Grid2D {
    w: usize,
    h: usize,
}

impl Grid2D {
    pub const fn new(w: usize, h: usize) -> Self {
        Grid2D { w, h }
    }
}

impl Topology for Grid2D {
    fn successors(&self, field: &CostField, from: Coord, out: &mut Vec<Coord>) {
        let (x, y, _) = from;
        for dy in -1i64..=1 {
            for dx in -1i64..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if nx < 0 || ny < 0 {
                    continue;
                }
                let (nx, ny) = (nx as usize, ny as usize);
                if field.in_bounds(nx, ny, 0) {
                    out.push((nx, ny, 0));
                }
            }
        }
    }

    #[inline]
    fn index(&self, (x, y, _): Coord) -> usize {
        y * self.w + x
    }

    fn node_count(&self) -> usize {
        self.w * self.h
    }
}

/// Reach-bounded, time-monotone motion over a 3D space-time volume (spec
/// §4.2 "Temporal3D"). From `(x, y, t)`, every `(x+dx, y+dy, t+1)` with
/// `|dx| <= reach`, `|dy| <= reach`, `(dx, dy) != (0, 0)` is a candidate
/// successor, filtered by bounds. Staying in place across frames
/// (`dx = dy = 0`) is never generated, guaranteeing a DAG under `Δt = +1`.
pub struct Temporal3D {
    w: usize,
    h: usize,
    t: usize,
    reach: i64,
}

impl Temporal3D {
    /// `reach` must be `>= 1`; callers validate this in
    /// [`crate::dispatch`] before construction.
    pub const fn new(w: usize, h: usize, t: usize, reach: usize) -> Self {
        Temporal3D {
            w,
            h,
            t,
            reach: reach as i64,
        }
    }
}

impl Topology for Temporal3D {
    fn successors(&self, field: &CostField, from: Coord, out: &mut Vec<Coord>) {
        let (x, y, t) = from;
        let nt = t + 1;
        if nt >= self.t {
            return;
        }
        for dy in -self.reach..=self.reach {
            for dx in -self.reach..=self.reach {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if nx < 0 || ny < 0 {
                    continue;
                }
                let (nx, ny) = (nx as usize, ny as usize);
                if field.in_bounds(nx, ny, nt) {
                    out.push((nx, ny, nt));
                }
            }
        }
    }

    #[inline]
    fn index(&self, (x, y, t): Coord) -> usize {
        (t * self.h + y) * self.w + x
    }

    fn node_count(&self) -> usize {
        self.w * self.h * self.t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost_field::CostField;

    #[test]
    fn grid2d_interior_cell_has_eight_neighbors() {
        let data = vec![1u8; 9];
        let field = CostField::new_2d(&data, 3, 3).unwrap();
        let topo = Grid2D::new(3, 3);
        let mut out = Vec::new();
        topo.successors(&field, (1, 1, 0), &mut out);
        assert_eq!(out.len(), 8);
    }

    #[test]
    fn grid2d_corner_cell_has_three_neighbors() {
        let data = vec![1u8; 9];
        let field = CostField::new_2d(&data, 3, 3).unwrap();
        let topo = Grid2D::new(3, 3);
        let mut out = Vec::new();
        topo.successors(&field, (0, 0, 0), &mut out);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn temporal_successors_strictly_advance_time_and_exclude_stationary() {
        let data = vec![1u8; 2 * 3 * 3];
        let field = CostField::new_3d(&data, [2, 3, 3], 0).unwrap();
        let topo = Temporal3D::new(3, 3, 2, 1);
        let mut out = Vec::new();
        topo.successors(&field, (1, 1, 0), &mut out);
        assert_eq!(out.len(), 8);
        assert!(out.iter().all(|&(_, _, t)| t == 1));
        assert!(!out.contains(&(1, 1, 1)));
    }

    #[test]
    fn temporal_last_frame_has_no_successors() {
        let data = vec![1u8; 2 * 3 * 3];
        let field = CostField::new_3d(&data, [2, 3, 3], 0).unwrap();
        let topo = Temporal3D::new(3, 3, 2, 1);
        let mut out = Vec::new();
        topo.successors(&field, (1, 1, 1), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn temporal_reach_two_widens_spatial_displacement() {
        let data = vec![1u8; 2 * 5 * 5];
        let field = CostField::new_3d(&data, [2, 5, 5], 0).unwrap();
        let topo = Temporal3D::new(5, 5, 2, 2);
        let mut out = Vec::new();
        topo.successors(&field, (2, 2, 0), &mut out);
        assert_eq!(out.len(), 24); // 5x5 minus the stationary cell
    }
}
