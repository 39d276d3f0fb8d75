// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plot rectangle and axis placement.
//!
//! Layout runs in two steps:
//! - **Rect**: resolve the grid offsets against the viewport into the plot rectangle.
//! - **Place**: give every axis config a screen side and a slot on that side, then derive its
//!   pixel extent and the coordinate its line sits on.
//!
//! Placement is decided once per axis config, so an axis keeps its side in every Cartesian it
//! takes part in.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Rect, Size};

use crate::axis::AxisDim;
use crate::axis_spec::{AxisPosition, AxisSpec};
use crate::grid_spec::GridSpec;

/// Smallest width or height the plot rectangle is clamped to.
pub const MIN_GRID_EXTENT: f64 = 10.0;

/// Resolves the plot rectangle for `viewport`.
///
/// Without an explicit width, the width is what remains between the `x` and `x2` offsets (and
/// likewise for the height). Non-positive results clamp to [`MIN_GRID_EXTENT`].
pub(crate) fn resolve_rect(spec: &GridSpec, viewport: Size) -> Rect {
    let x = spec.x.resolve(viewport.width);
    let y = spec.y.resolve(viewport.height);
    let width = match spec.width {
        Some(w) => w.resolve(viewport.width),
        None => viewport.width - x - spec.x2.resolve(viewport.width),
    };
    let height = match spec.height {
        Some(h) => h.resolve(viewport.height),
        None => viewport.height - y - spec.y2.resolve(viewport.height),
    };
    let width = if width <= 0.0 { MIN_GRID_EXTENT } else { width };
    let height = if height <= 0.0 { MIN_GRID_EXTENT } else { height };
    Rect::new(x, y, x + width, y + height)
}

/// Returns the logical dimension that runs horizontally.
///
/// That is x, unless an x axis is explicitly on the left/right or a y axis explicitly on the
/// top/bottom.
pub(crate) fn horizontal_dim(x_axes: &[AxisSpec], y_axes: &[AxisSpec]) -> AxisDim {
    let x_vertical = x_axes
        .iter()
        .any(|a| a.position.is_some_and(|p| !p.is_horizontal()));
    let y_horizontal = y_axes
        .iter()
        .any(|a| a.position.is_some_and(AxisPosition::is_horizontal));
    if x_vertical || y_horizontal {
        AxisDim::Y
    } else {
        AxisDim::X
    }
}

/// Where an axis config was placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Placement {
    pub(crate) position: AxisPosition,
    /// How many axes were placed on the same side before this one.
    pub(crate) slot: usize,
}

/// Per-side occupancy counts, in `left, top, bottom, right` order.
#[derive(Clone, Copy, Debug, Default)]
struct Occupancy([usize; 4]);

impl Occupancy {
    fn index(position: AxisPosition) -> usize {
        match position {
            AxisPosition::Left => 0,
            AxisPosition::Top => 1,
            AxisPosition::Bottom => 2,
            AxisPosition::Right => 3,
        }
    }

    fn count(&self, position: AxisPosition) -> usize {
        self.0[Self::index(position)]
    }

    fn claim(&mut self, position: AxisPosition) -> Placement {
        let slot = &mut self.0[Self::index(position)];
        let placement = Placement {
            position,
            slot: *slot,
        };
        *slot += 1;
        placement
    }
}

/// Places every x config, then every y config.
///
/// Unpinned axes take their primary side (bottom for the horizontal dimension, left for the
/// other), or the opposite side when the primary is taken. When both are taken the axis goes
/// to the less crowded one, primary first, and takes the next slot there.
pub(crate) fn place_axes(
    x_axes: &[AxisSpec],
    y_axes: &[AxisSpec],
    horizontal: AxisDim,
) -> (Vec<Placement>, Vec<Placement>) {
    let mut occupancy = Occupancy::default();
    let mut place = |dim: AxisDim, axes: &[AxisSpec]| -> Vec<Placement> {
        let primary = if dim == horizontal {
            AxisPosition::Bottom
        } else {
            AxisPosition::Left
        };
        let secondary = primary.opposite();
        axes.iter()
            .enumerate()
            .map(|(index, spec)| {
                let side = spec.position.unwrap_or_else(|| {
                    let (p, s) = (occupancy.count(primary), occupancy.count(secondary));
                    if p == 0 || (s != 0 && p <= s) {
                        primary
                    } else {
                        secondary
                    }
                });
                let placement = occupancy.claim(side);
                if placement.slot > 0 {
                    log::warn!(
                        "{dim:?} axis {index} shares the {side:?} side; offset to slot {}",
                        placement.slot
                    );
                }
                placement
            })
            .collect()
    };
    let x = place(AxisDim::X, x_axes);
    let y = place(AxisDim::Y, y_axes);
    (x, y)
}

/// Returns the pixel extent of an axis at `placement` and the coordinate its line sits on.
///
/// Slot `k` moves the line outward by `k * axis_offset`.
pub(crate) fn coord_extent(rect: Rect, placement: Placement, axis_offset: f64) -> ((f64, f64), f64) {
    let shift = placement.slot as f64 * axis_offset;
    match placement.position {
        AxisPosition::Top => ((rect.x0, rect.x1), rect.y0 - shift),
        AxisPosition::Bottom => ((rect.x0, rect.x1), rect.y1 + shift),
        AxisPosition::Left => ((rect.y0, rect.y1), rect.x0 - shift),
        AxisPosition::Right => ((rect.y0, rect.y1), rect.x1 + shift),
    }
}

/// Insets `extent` by half a band on each end so categories sit at band centers.
///
/// An empty category list leaves the extent unchanged.
pub(crate) fn apply_boundary_gap(extent: (f64, f64), category_count: usize) -> (f64, f64) {
    if category_count == 0 {
        return extent;
    }
    let band = (extent.1 - extent.0) / category_count as f64;
    (extent.0 + band / 2.0, extent.1 - band / 2.0)
}
