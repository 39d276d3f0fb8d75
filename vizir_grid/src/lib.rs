// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cartesian grid layout for charts.
//!
//! Given a declarative [`ChartSpec`] (grid offsets, x axes, y axes and series) and a viewport
//! size, a [`Grid`] computes:
//! - **the plot rectangle**, from absolute or percentage offsets,
//! - **Cartesians**, one per (x axis, y axis) pair, with each axis placed on a screen side and
//!   oriented so values grow upward (or mirrored, for right-anchored axes),
//! - **axis extents**, fitted to the series drawn against each Cartesian, with stacked series
//!   accumulating signed running totals, and
//! - **a data-to-pixel mapping** for series renderers ([`Grid::data_to_coords`]).
//!
//! Drawing is out of scope: the plot background is described as a [`RectRequest`] and handed to
//! a caller-provided [`Surface`].
//!
//! ```
//! use kurbo::Size;
//! use vizir_grid::{AxisSpec, ChartSpec, ChartType, Grid, SeriesSpec};
//!
//! let spec = ChartSpec::new()
//!     .with_x_axis(AxisSpec::category(["Mon", "Tue", "Wed"]))
//!     .with_y_axis(AxisSpec::value())
//!     .with_series(SeriesSpec::new(ChartType::Bar, [1.0, 2.0, 3.0]));
//!
//! let mut grid = Grid::new(spec);
//! grid.refresh(Size::new(800.0, 600.0));
//! let points = grid
//!     .data_to_coords(&grid.spec().series[0].data, None, None)
//!     .unwrap();
//! assert_eq!(points.len(), 3);
//! ```

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod aggregate;
mod axis;
mod axis_spec;
mod cartesian;
mod defaults;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod grid;
mod grid_spec;
#[cfg(test)]
mod grid_tests;
mod layout;
mod length;
mod scale;
mod series;
mod stack;
mod surface;
mod time;

pub use aggregate::CoordData;
pub use axis::{Axis, Axis2D, AxisDim};
pub use axis_spec::{AxisKind, AxisPosition, AxisSpec};
pub use cartesian::{Cartesian, CartesianId};
pub use defaults::{
    AxisDefaults, Defaults, ResolvedAxisOptions, ResolvedSeriesOptions, SeriesDefaults,
    first_defined,
};
pub use error::GridError;
pub use grid::Grid;
pub use grid_spec::{ChartSpec, GridSpec};
pub use layout::MIN_GRID_EXTENT;
pub use length::{Length, sub_pixel_optimize};
pub use scale::{AxisScale, IntervalScale, OrdinalScale, Scale, ScaleKind};
pub use series::{ChartType, CoordinateSystem, DataItem, DataValue, SeriesSpec};
pub use stack::{StackAccumulator, StackBucket, StackKey};
pub use surface::{PLOT_BACKGROUND, RectRequest, StrokeStyle, Surface};
