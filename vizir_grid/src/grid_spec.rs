// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative chart configuration consumed by [`Grid`](crate::Grid).

extern crate alloc;

use alloc::vec::Vec;

use peniko::Color;
use peniko::color::palette::css;

use crate::axis_spec::AxisSpec;
use crate::defaults::Defaults;
use crate::length::Length;
use crate::series::SeriesSpec;

/// Placement and styling of the plot rectangle.
///
/// `x`, `y`, `x2` and `y2` are offsets from the left, top, right and bottom viewport edges. An
/// explicit `width`/`height` takes precedence over `x2`/`y2`.
#[derive(Clone, Debug, PartialEq)]
pub struct GridSpec {
    /// Offset from the left edge.
    pub x: Length,
    /// Offset from the top edge.
    pub y: Length,
    /// Offset from the right edge.
    pub x2: Length,
    /// Offset from the bottom edge.
    pub y2: Length,
    /// Explicit width.
    pub width: Option<Length>,
    /// Explicit height.
    pub height: Option<Length>,
    /// Background fill.
    pub background: Color,
    /// Border width; `0` disables the border.
    pub border_width: f64,
    /// Border color.
    pub border_color: Color,
    /// Outward distance between axes that share one side.
    pub axis_offset: f64,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            x: Length::Px(80.0),
            y: Length::Px(60.0),
            x2: Length::Px(80.0),
            y2: Length::Px(60.0),
            width: None,
            height: None,
            background: css::TRANSPARENT,
            border_width: 1.0,
            border_color: Color::from_rgba8(0xcc, 0xcc, 0xcc, 0xff),
            axis_offset: 30.0,
        }
    }
}

impl GridSpec {
    /// Creates a grid spec with the default offsets and styling.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the four edge offsets (left, top, right, bottom).
    pub fn with_offsets(
        mut self,
        x: impl Into<Length>,
        y: impl Into<Length>,
        x2: impl Into<Length>,
        y2: impl Into<Length>,
    ) -> Self {
        self.x = x.into();
        self.y = y.into();
        self.x2 = x2.into();
        self.y2 = y2.into();
        self
    }

    /// Sets an explicit width.
    pub fn with_width(mut self, width: impl Into<Length>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Sets an explicit height.
    pub fn with_height(mut self, height: impl Into<Length>) -> Self {
        self.height = Some(height.into());
        self
    }

    /// Sets the background fill.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Sets the border width and color.
    pub fn with_border(mut self, border_width: f64, border_color: Color) -> Self {
        self.border_width = border_width;
        self.border_color = border_color;
        self
    }

    /// Sets the distance between axes stacked on one side.
    pub fn with_axis_offset(mut self, axis_offset: f64) -> Self {
        self.axis_offset = axis_offset;
        self
    }
}

/// A complete chart description: grid, axes, series and the defaults they resolve against.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartSpec {
    /// Plot rectangle configuration.
    pub grid: GridSpec,
    /// Configured x axes.
    pub x_axes: Vec<AxisSpec>,
    /// Configured y axes.
    pub y_axes: Vec<AxisSpec>,
    /// Series, in drawing order.
    pub series: Vec<SeriesSpec>,
    /// Type defaults for axes and series.
    pub defaults: Defaults,
}

impl ChartSpec {
    /// Creates an empty chart spec.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the grid configuration.
    pub fn with_grid(mut self, grid: GridSpec) -> Self {
        self.grid = grid;
        self
    }

    /// Appends an x axis.
    pub fn with_x_axis(mut self, axis: AxisSpec) -> Self {
        self.x_axes.push(axis);
        self
    }

    /// Appends a y axis.
    pub fn with_y_axis(mut self, axis: AxisSpec) -> Self {
        self.y_axes.push(axis);
        self
    }

    /// Appends a series.
    pub fn with_series(mut self, series: SeriesSpec) -> Self {
        self.series.push(series);
        self
    }

    /// Replaces the type defaults.
    pub fn with_defaults(mut self, defaults: Defaults) -> Self {
        self.defaults = defaults;
        self
    }
}
