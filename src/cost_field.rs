//! Uniform read-only view over a dense 2D or 3D `u8` cost array (spec §3/§4.1).
//!
//! `CostField` owns no pixels: it borrows the caller's flat array for the
//! duration of the call and answers `cost`/`in_bounds` queries against it.
//! The 3D constructor normalizes the caller's axis convention once, at
//! construction, into three per-axis strides (`stride_x`, `stride_y`,
//! `stride_t`) so that every subsequent lookup is a single multiply-add with
//! no branching on `axis` (§9, "Axis convention").

use crate::error::PathError;

/// Shape of the array backing a [`CostField`], in the engine's canonical
/// `(x, y[, t])` terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    TwoD { w: usize, h: usize },
    ThreeD { w: usize, h: usize, t: usize },
}

impl Shape {
    pub const fn rank(self) -> usize {
        match self {
            Shape::TwoD { .. } => 2,
            Shape::ThreeD { .. } => 3,
        }
    }

    pub const fn as_triple(self) -> (usize, usize, usize) {
        match self {
            Shape::TwoD { w, h } => (w, h, 1),
            Shape::ThreeD { w, h, t } => (w, h, t),
        }
    }
}

/// Read-only view over a borrowed `u8` slice, indexed by canonical
/// `(x, y[, t])` coordinates regardless of how the caller laid out the
/// physical array.
pub struct CostField<'a> {
    data: &'a [u8],
    shape: Shape,
    stride_x: usize,
    stride_y: usize,
    stride_t: usize,
}

impl<'a> CostField<'a> {
    /// Build a 2D view over `data`, a row-major `h x w` array (`idx = y*w + x`).
    pub fn new_2d(data: &'a [u8], w: usize, h: usize) -> Result<Self, PathError> {
        if data.len() != w * h {
            return Err(PathError::BadShape {
                reason: format!(
                    "2D array length {} does not match w*h = {}",
                    data.len(),
                    w * h
                ),
            });
        }
        Ok(CostField {
            data,
            shape: Shape::TwoD { w, h },
            stride_x: 1,
            stride_y: w,
            stride_t: 0,
        })
    }

    /// Build a 3D view over `data`, a row-major array whose three physical
    /// dimension sizes are `dims` (in physical axis order 0, 1, 2), where
    /// physical axis `axis` is time. The remaining two physical axes map to
    /// canonical `y` (the lower-numbered remaining axis) and `x` (the
    /// higher-numbered one) — see DESIGN.md for why this resolves the
    /// otherwise-ambiguous axis convention.
    pub fn new_3d(data: &'a [u8], dims: [usize; 3], axis: usize) -> Result<Self, PathError> {
        if axis > 2 {
            return Err(PathError::BadParameter {
                reason: format!("axis must be 0, 1 or 2, got {axis}"),
            });
        }
        let total: usize = dims.iter().product();
        if data.len() != total {
            return Err(PathError::BadShape {
                reason: format!(
                    "3D array length {} does not match dims {:?}",
                    data.len(),
                    dims
                ),
            });
        }
        let phys_stride = [dims[1] * dims[2], dims[2], 1];
        let remaining: Vec<usize> = (0..3).filter(|&a| a != axis).collect();
        let (axis_y, axis_x) = (remaining[0], remaining[1]);

        Ok(CostField {
            data,
            shape: Shape::ThreeD {
                w: dims[axis_x],
                h: dims[axis_y],
                t: dims[axis],
            },
            stride_x: phys_stride[axis_x],
            stride_y: phys_stride[axis_y],
            stride_t: phys_stride[axis],
        })
    }

    pub const fn shape(&self) -> Shape {
        self.shape
    }

    /// Whether `(x, y, t)` lies within the field's bounds. `t` is ignored
    /// for 2D fields (always compared against 1).
    #[inline]
    pub fn in_bounds(&self, x: usize, y: usize, t: usize) -> bool {
        let (w, h, tt) = self.shape.as_triple();
        x < w && y < h && t < tt
    }

    /// Cost of the cell at `(x, y, t)`. Panics if out of bounds; callers
    /// must check `in_bounds` first (all engine callers do, via
    /// pre-validated successor sets).
    #[inline]
    pub fn cost(&self, x: usize, y: usize, t: usize) -> u8 {
        debug_assert!(self.in_bounds(x, y, t));
        self.data[x * self.stride_x + y * self.stride_y + t * self.stride_t]
    }

    /// The edge weight the engine charges for moving *into* `(x, y, t)`:
    /// `max(1, cost)`, so zero-cost cells never create free edges (§4.1,
    /// §9 "Zero-cost cells").
    #[inline]
    pub fn edge_weight(&self, x: usize, y: usize, t: usize) -> u32 {
        self.cost(x, y, t).max(1) as u32
    }
}
