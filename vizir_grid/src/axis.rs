// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axes of a Cartesian coordinate system.
//!
//! [`Axis`] is the base capability: a dimension, a scale and a pixel extent. [`Axis2D`] wraps an
//! [`Axis`] with everything that only makes sense inside a grid: kind, screen side, the
//! orthogonal coordinate its line sits on, and the id of the Cartesian that owns it. The
//! companion axis is looked up through that Cartesian, never stored.

use crate::axis_spec::{AxisKind, AxisPosition};
use crate::cartesian::CartesianId;
use crate::scale::{AxisScale, Scale, ScaleKind};

/// Logical dimension of an axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisDim {
    /// The x dimension (first component of pair data).
    X,
    /// The y dimension (second component of pair data).
    Y,
}

impl AxisDim {
    /// Returns the other dimension.
    pub fn other(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }
}

/// A scale stretched over a pixel extent.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    dim: AxisDim,
    scale: AxisScale,
    extent: (f64, f64),
}

impl Axis {
    /// Creates an axis over the pixel `extent`.
    pub fn new(dim: AxisDim, scale: AxisScale, extent: (f64, f64)) -> Self {
        Self { dim, scale, extent }
    }

    /// Returns the logical dimension.
    pub fn dim(&self) -> AxisDim {
        self.dim
    }

    /// Returns the scale.
    pub fn scale(&self) -> &AxisScale {
        &self.scale
    }

    pub(crate) fn scale_mut(&mut self) -> &mut AxisScale {
        &mut self.scale
    }

    /// Returns the pixel extent `(from, to)`.
    pub fn extent(&self) -> (f64, f64) {
        self.extent
    }

    /// Maps a data value to a pixel coordinate along this axis.
    pub fn data_to_coord(&self, value: f64) -> f64 {
        self.scale.data_to_coord(value, self.extent)
    }

    /// Flips the direction of the scale.
    pub fn reverse(&mut self) {
        self.scale.reverse();
    }
}

/// An axis placed inside a grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis2D {
    axis: Axis,
    kind: AxisKind,
    position: AxisPosition,
    other_coord: f64,
    on_zero: bool,
    split_number: usize,
    cartesian: CartesianId,
}

impl Axis2D {
    pub(crate) fn new(
        axis: Axis,
        kind: AxisKind,
        position: AxisPosition,
        other_coord: f64,
        cartesian: CartesianId,
    ) -> Self {
        Self {
            axis,
            kind,
            position,
            other_coord,
            on_zero: false,
            split_number: 5,
            cartesian,
        }
    }

    pub(crate) fn with_options(mut self, on_zero: bool, split_number: usize) -> Self {
        self.on_zero = on_zero;
        self.split_number = split_number;
        self
    }

    /// Returns the base axis.
    pub fn axis(&self) -> &Axis {
        &self.axis
    }

    pub(crate) fn axis_mut(&mut self) -> &mut Axis {
        &mut self.axis
    }

    /// Returns the logical dimension.
    pub fn dim(&self) -> AxisDim {
        self.axis.dim
    }

    /// Returns the axis kind.
    pub fn kind(&self) -> AxisKind {
        self.kind
    }

    /// Returns the screen side.
    pub fn position(&self) -> AxisPosition {
        self.position
    }

    /// Returns `true` if the axis runs left to right on screen.
    pub fn is_horizontal(&self) -> bool {
        self.position.is_horizontal()
    }

    /// Returns `true` if the axis is backed by an ordinal scale.
    pub fn is_category(&self) -> bool {
        self.axis.scale.kind() == ScaleKind::Ordinal
    }

    /// Returns the pixel coordinate, across the axis, that the axis line sits on.
    pub fn other_coord(&self) -> f64 {
        self.other_coord
    }

    pub(crate) fn set_other_coord(&mut self, other_coord: f64) {
        self.other_coord = other_coord;
    }

    /// Returns `true` if the axis line follows the companion axis's zero.
    pub fn on_zero(&self) -> bool {
        self.on_zero
    }

    /// Returns the split number used to round the scale extent.
    pub fn split_number(&self) -> usize {
        self.split_number
    }

    /// Returns the id of the Cartesian that owns this axis.
    pub fn cartesian(&self) -> CartesianId {
        self.cartesian
    }

    /// Returns the scale.
    pub fn scale(&self) -> &AxisScale {
        self.axis.scale()
    }

    /// Returns the pixel extent `(from, to)`.
    pub fn extent(&self) -> (f64, f64) {
        self.axis.extent()
    }

    /// Maps a data value to a pixel coordinate along this axis.
    pub fn data_to_coord(&self, value: f64) -> f64 {
        self.axis.data_to_coord(value)
    }
}
