// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The grid: plot rectangle, Cartesian coordinate systems and data-to-pixel queries.
//!
//! A [`Grid`] owns a [`ChartSpec`] and the layout derived from it. Every
//! [`refresh`](Grid::refresh) that actually runs rebuilds the layout from scratch:
//! 1. resolve the plot rectangle against the viewport,
//! 2. build one [`Cartesian`] per (x axis, y axis) pair with placed and oriented axes,
//! 3. assign series, stack their values and fit the axis scales,
//! 4. move `on_zero` axis lines onto the companion axis's zero.
//!
//! Queries borrow the grid, so they always see the last completed refresh.

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{Point, Rect, Size};
use peniko::Brush;

use crate::aggregate;
use crate::axis::{Axis, Axis2D, AxisDim};
use crate::axis_spec::{AxisKind, AxisPosition, AxisSpec};
use crate::cartesian::{Cartesian, CartesianId};
use crate::defaults::Defaults;
use crate::error::GridError;
use crate::grid_spec::{ChartSpec, GridSpec};
use crate::layout::{
    Placement, apply_boundary_gap, coord_extent, horizontal_dim, place_axes, resolve_rect,
};
use crate::length::sub_pixel_optimize;
use crate::scale::AxisScale;
use crate::series::{DataItem, SeriesSpec};
use crate::surface::{PLOT_BACKGROUND, RectRequest, StrokeStyle, Surface};

/// Cartesian grid layout for one chart.
#[derive(Clone, Debug)]
pub struct Grid {
    spec: ChartSpec,
    viewport: Option<Size>,
    dirty: bool,
    rect: Rect,
    cartesians: Vec<Cartesian>,
    index: HashMap<CartesianId, usize>,
}

impl Grid {
    /// Creates a grid for `spec`. Nothing is laid out until the first [`refresh`](Self::refresh).
    pub fn new(spec: ChartSpec) -> Self {
        Self {
            spec,
            viewport: None,
            dirty: true,
            rect: Rect::ZERO,
            cartesians: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Returns the chart spec.
    pub fn spec(&self) -> &ChartSpec {
        &self.spec
    }

    /// Installs a new chart spec. Returns `true` if it differs from the current one, in which case
    /// the next refresh rebuilds the layout.
    pub fn set_spec(&mut self, spec: ChartSpec) -> bool {
        if spec == self.spec {
            return false;
        }
        self.spec = spec;
        self.dirty = true;
        true
    }

    /// Lays the grid out in a viewport of `viewport` pixels.
    ///
    /// Returns `false` (keeping the previous layout) when neither the chart spec nor the viewport
    /// changed since the last refresh.
    pub fn refresh(&mut self, viewport: Size) -> bool {
        if !self.dirty && self.viewport == Some(viewport) {
            log::debug!("grid refresh skipped: nothing changed");
            return false;
        }
        self.viewport = Some(viewport);
        self.dirty = false;

        self.rect = resolve_rect(&self.spec.grid, viewport);
        self.build_cartesians();

        let collected = aggregate::collect(
            &mut self.cartesians,
            &self.index,
            &self.spec.series,
            &self.spec.defaults,
        );
        aggregate::apply_extents(&mut self.cartesians, &self.index, &collected);
        for cartesian in &mut self.cartesians {
            cartesian.align_on_zero();
        }

        log::debug!(
            "grid refreshed: viewport {}x{}, rect {:?}, {} coordinate systems",
            viewport.width,
            viewport.height,
            self.rect,
            self.cartesians.len()
        );
        true
    }

    fn build_cartesians(&mut self) {
        self.cartesians.clear();
        self.index.clear();

        let spec = &self.spec;
        let horizontal = horizontal_dim(&spec.x_axes, &spec.y_axes);
        let (x_placements, y_placements) = place_axes(&spec.x_axes, &spec.y_axes, horizontal);

        for (x_index, (x_spec, &x_placement)) in spec.x_axes.iter().zip(&x_placements).enumerate()
        {
            for (y_index, (y_spec, &y_placement)) in
                spec.y_axes.iter().zip(&y_placements).enumerate()
            {
                let id = CartesianId::new(x_index, y_index);
                let x = build_axis(
                    AxisDim::X,
                    x_spec,
                    x_placement,
                    self.rect,
                    &spec.grid,
                    &spec.defaults,
                    id,
                );
                let y = build_axis(
                    AxisDim::Y,
                    y_spec,
                    y_placement,
                    self.rect,
                    &spec.grid,
                    &spec.defaults,
                    id,
                );
                let mut cartesian = Cartesian::new(id, x, y);
                orient(&mut cartesian);
                self.index.insert(id, self.cartesians.len());
                self.cartesians.push(cartesian);
            }
        }
    }

    /// Returns the plot rectangle of the last refresh.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Left edge of the plot rectangle.
    pub fn x(&self) -> f64 {
        self.rect.x0
    }

    /// Top edge of the plot rectangle.
    pub fn y(&self) -> f64 {
        self.rect.y0
    }

    /// Width of the plot rectangle.
    pub fn width(&self) -> f64 {
        self.rect.width()
    }

    /// Height of the plot rectangle.
    pub fn height(&self) -> f64 {
        self.rect.height()
    }

    /// Right edge of the plot rectangle.
    pub fn x_end(&self) -> f64 {
        self.rect.x1
    }

    /// Bottom edge of the plot rectangle.
    pub fn y_end(&self) -> f64 {
        self.rect.y1
    }

    /// Returns the plot rectangle grown to include every axis line.
    ///
    /// Differs from [`rect`](Self::rect) when axes were offset outward from a shared side.
    pub fn bbox(&self) -> Rect {
        self.axes().fold(self.rect, |bounds, axis| {
            let c = axis.other_coord();
            if axis.is_horizontal() {
                bounds.union_pt(Point::new(bounds.x0, c))
            } else {
                bounds.union_pt(Point::new(c, bounds.y0))
            }
        })
    }

    /// Returns every Cartesian, in `(x_index, y_index)` order.
    pub fn all_cartesians(&self) -> &[Cartesian] {
        &self.cartesians
    }

    /// Returns the Cartesian built for the `(x_index, y_index)` axis pair.
    pub fn cartesian(&self, x_index: usize, y_index: usize) -> Result<&Cartesian, GridError> {
        if self.viewport.is_none() {
            return Err(GridError::NotLaidOut);
        }
        self.index
            .get(&CartesianId::new(x_index, y_index))
            .map(|&i| &self.cartesians[i])
            .ok_or(GridError::UnknownCartesian { x_index, y_index })
    }

    /// Returns every axis: the x then y axis of each Cartesian, in construction order.
    pub fn axes(&self) -> impl Iterator<Item = &Axis2D> {
        self.cartesians.iter().flat_map(|c| c.axes())
    }

    /// Returns the companion of `axis` in the Cartesian that owns it.
    pub fn other_axis(&self, axis: &Axis2D) -> Result<&Axis2D, GridError> {
        let id = axis.cartesian();
        Ok(self.cartesian(id.x_index, id.y_index)?.other_axis(axis.dim()))
    }

    /// Returns the series drawn against the Cartesian `id`, with their indices.
    pub fn cartesian_series(
        &self,
        id: CartesianId,
    ) -> Result<Vec<(usize, &SeriesSpec)>, GridError> {
        let cartesian = self.cartesian(id.x_index, id.y_index)?;
        Ok(cartesian
            .series()
            .iter()
            .filter_map(|&i| self.spec.series.get(i).map(|s| (i, s)))
            .collect())
    }

    /// Maps `data` to screen points in the Cartesian of the given axis pair (default `0, 0`).
    ///
    /// Returns one entry per item, `None` for missing items and items the Cartesian cannot
    /// place. Points are always `(screen x, screen y)`, whichever logical axis is horizontal.
    pub fn data_to_coords(
        &self,
        data: &[DataItem],
        x_index: Option<usize>,
        y_index: Option<usize>,
    ) -> Result<Vec<Option<Point>>, GridError> {
        let cartesian = self.cartesian(x_index.unwrap_or(0), y_index.unwrap_or(0))?;
        Ok(data
            .iter()
            .enumerate()
            .map(|(i, item)| item.value().and_then(|v| cartesian.data_to_point(i, v)))
            .collect())
    }

    /// Maps the single item found at data position `index` in the Cartesian `id`.
    pub fn data_to_coord(
        &self,
        item: &DataItem,
        index: usize,
        id: CartesianId,
    ) -> Result<Option<Point>, GridError> {
        let cartesian = self.cartesian(id.x_index, id.y_index)?;
        Ok(item.value().and_then(|v| cartesian.data_to_point(index, v)))
    }

    /// Describes the plot background.
    ///
    /// The origin is snapped with [`sub_pixel_optimize`] so the border renders crisply; the
    /// layout rectangle itself is left untouched.
    pub fn background_request(&self) -> Result<RectRequest, GridError> {
        if self.viewport.is_none() {
            return Err(GridError::NotLaidOut);
        }
        let grid = &self.spec.grid;
        let line_width = grid.border_width;
        let origin = Point::new(
            sub_pixel_optimize(self.rect.x0, line_width),
            sub_pixel_optimize(self.rect.y0, line_width),
        );
        Ok(RectRequest {
            rect: Rect::from_origin_size(origin, self.rect.size()),
            fill: Brush::Solid(grid.background),
            stroke: (line_width > 0.0).then(|| StrokeStyle::solid(grid.border_color, line_width)),
            z_index: PLOT_BACKGROUND,
        })
    }

    /// Draws the plot background onto `surface`.
    pub fn draw_background(&self, surface: &mut impl Surface) -> Result<(), GridError> {
        surface.draw_rect(&self.background_request()?);
        Ok(())
    }
}

fn build_axis(
    dim: AxisDim,
    spec: &AxisSpec,
    placement: Placement,
    rect: Rect,
    grid: &GridSpec,
    defaults: &Defaults,
    cartesian: CartesianId,
) -> Axis2D {
    let kind = spec.kind.unwrap_or(match dim {
        AxisDim::X => AxisKind::Category,
        AxisDim::Y => AxisKind::Value,
    });
    let options = defaults.resolve_axis(spec, kind);
    let (mut extent, other_coord) = coord_extent(rect, placement, grid.axis_offset);
    if kind.is_category() && options.boundary_gap {
        extent = apply_boundary_gap(extent, spec.data.len());
    }
    let axis = Axis::new(dim, AxisScale::for_kind(kind, &spec.data), extent);
    Axis2D::new(axis, kind, placement.position, other_coord, cartesian)
        .with_options(options.on_zero, options.split_number)
}

/// Points scales the conventional way on screen.
///
/// A horizontal axis at the bottom flips the vertical axis so values grow upward; a vertical axis
/// at the right flips the horizontal axis, mirroring the chart.
fn orient(cartesian: &mut Cartesian) {
    let horizontal = cartesian.horizontal_axis().dim();
    let vertical = horizontal.other();
    if cartesian.axis(horizontal).position() == AxisPosition::Bottom {
        cartesian.axis_mut(vertical).axis_mut().reverse();
    }
    if cartesian.axis(vertical).position() == AxisPosition::Right {
        cartesian.axis_mut(horizontal).axis_mut().reverse();
    }
}
