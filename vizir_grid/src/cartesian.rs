// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cartesian coordinate systems.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use kurbo::Point;
use smallvec::SmallVec;

use crate::axis::{Axis2D, AxisDim};
use crate::scale::{Scale, ScaleKind};
use crate::series::DataValue;

/// Identifies a Cartesian by the indices of its x and y axis configs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CartesianId {
    /// Index into the x axis list.
    pub x_index: usize,
    /// Index into the y axis list.
    pub y_index: usize,
}

impl CartesianId {
    /// Creates an id for the `(x_index, y_index)` pair.
    pub const fn new(x_index: usize, y_index: usize) -> Self {
        Self { x_index, y_index }
    }
}

impl fmt::Display for CartesianId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}y{}", self.x_index, self.y_index)
    }
}

/// One 2D coordinate system: an x axis, a y axis and the series drawn against them.
#[derive(Clone, Debug, PartialEq)]
pub struct Cartesian {
    id: CartesianId,
    x: Axis2D,
    y: Axis2D,
    series: Vec<usize>,
}

impl Cartesian {
    pub(crate) fn new(id: CartesianId, x: Axis2D, y: Axis2D) -> Self {
        Self {
            id,
            x,
            y,
            series: Vec::new(),
        }
    }

    /// Returns the id.
    pub fn id(&self) -> CartesianId {
        self.id
    }

    /// Returns the x axis.
    pub fn x_axis(&self) -> &Axis2D {
        &self.x
    }

    /// Returns the y axis.
    pub fn y_axis(&self) -> &Axis2D {
        &self.y
    }

    /// Returns the axis for `dim`.
    pub fn axis(&self, dim: AxisDim) -> &Axis2D {
        match dim {
            AxisDim::X => &self.x,
            AxisDim::Y => &self.y,
        }
    }

    pub(crate) fn axis_mut(&mut self, dim: AxisDim) -> &mut Axis2D {
        match dim {
            AxisDim::X => &mut self.x,
            AxisDim::Y => &mut self.y,
        }
    }

    /// Returns the companion of the axis for `dim`.
    pub fn other_axis(&self, dim: AxisDim) -> &Axis2D {
        self.axis(dim.other())
    }

    /// Returns both axes, x first.
    pub fn axes(&self) -> [&Axis2D; 2] {
        [&self.x, &self.y]
    }

    /// Returns the axes whose scale is of `kind`, x first.
    pub fn axes_by_scale(&self, kind: ScaleKind) -> SmallVec<[&Axis2D; 2]> {
        self.axes()
            .into_iter()
            .filter(|axis| axis.scale().kind() == kind)
            .collect()
    }

    /// Returns the first category axis, if any.
    pub fn category_axis(&self) -> Option<&Axis2D> {
        self.axes_by_scale(ScaleKind::Ordinal).first().copied()
    }

    /// Returns the axis that runs left to right on screen.
    ///
    /// When neither or both axes sit on a horizontal side, the x axis is returned.
    pub fn horizontal_axis(&self) -> &Axis2D {
        if !self.x.is_horizontal() && self.y.is_horizontal() {
            &self.y
        } else {
            &self.x
        }
    }

    /// Returns the axis that runs top to bottom on screen.
    pub fn vertical_axis(&self) -> &Axis2D {
        self.other_axis(self.horizontal_axis().dim())
    }

    /// Returns the indices of the series drawn against this Cartesian, in input order.
    pub fn series(&self) -> &[usize] {
        &self.series
    }

    pub(crate) fn push_series(&mut self, series_index: usize) {
        self.series.push(series_index);
    }

    /// Moves the line of every `on_zero` axis onto the companion axis's zero.
    ///
    /// Axes whose companion is a category axis, or whose companion's extent does not contain
    /// zero, keep their grid edge.
    pub(crate) fn align_on_zero(&mut self) {
        for dim in [AxisDim::X, AxisDim::Y] {
            let axis = self.axis(dim);
            let other = self.other_axis(dim);
            let (min, max) = other.scale().extent();
            if axis.on_zero() && !other.is_category() && min <= 0.0 && 0.0 <= max {
                let zero = other.data_to_coord(0.0);
                self.axis_mut(dim).set_other_coord(zero);
            }
        }
    }

    /// Maps the data item at position `index` to a screen point.
    ///
    /// With a category axis, `index` places the item along it and the value goes through the
    /// companion axis; a pair contributes its component on the companion's dimension. Without
    /// one, a pair maps both components and a scalar cannot be placed.
    pub fn data_to_point(&self, index: usize, value: DataValue) -> Option<Point> {
        let value = value.finite()?;
        let (x_px, y_px) = match self.category_axis() {
            Some(category) => {
                let value_axis = self.other_axis(category.dim());
                let v = match value {
                    DataValue::Scalar(v) => v,
                    DataValue::Pair(a, b) => match value_axis.dim() {
                        AxisDim::X => a,
                        AxisDim::Y => b,
                    },
                    DataValue::Missing => return None,
                };
                let category_px = category.data_to_coord(index as f64);
                let value_px = value_axis.data_to_coord(v);
                match category.dim() {
                    AxisDim::X => (category_px, value_px),
                    AxisDim::Y => (value_px, category_px),
                }
            }
            None => match value {
                DataValue::Pair(a, b) => (self.x.data_to_coord(a), self.y.data_to_coord(b)),
                DataValue::Scalar(_) | DataValue::Missing => return None,
            },
        };

        // Physical x comes from whichever logical axis is horizontal.
        Some(if self.horizontal_axis().dim() == AxisDim::X {
            Point::new(x_px, y_px)
        } else {
            Point::new(y_px, x_px)
        })
    }
}
