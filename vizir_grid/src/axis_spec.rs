// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis configuration.
//!
//! An [`AxisSpec`] describes one configured x or y axis. Every optional field falls back to the
//! per-kind [`AxisDefaults`](crate::AxisDefaults) held by [`Defaults`](crate::Defaults).

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

/// Axis kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisKind {
    /// Discrete, ordered categories.
    Category,
    /// Continuous numeric values.
    Value,
    /// Continuous timestamps in seconds.
    Time,
    /// Logarithmic values (treated as a continuous axis during layout).
    Log,
}

impl AxisKind {
    /// Returns `true` for [`AxisKind::Category`].
    pub fn is_category(self) -> bool {
        self == Self::Category
    }
}

/// Screen side an axis is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisPosition {
    /// Above the grid rectangle.
    Top,
    /// Below the grid rectangle.
    Bottom,
    /// Left of the grid rectangle.
    Left,
    /// Right of the grid rectangle.
    Right,
}

impl AxisPosition {
    /// Returns `true` for `Top` and `Bottom`.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// Returns the side across the grid from this one.
    pub fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Configuration for a single x or y axis.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisSpec {
    /// Axis kind. Unset means category for x axes and value for y axes.
    pub kind: Option<AxisKind>,
    /// Screen side. Unset means the side is chosen during layout.
    pub position: Option<AxisPosition>,
    /// Category labels (used by category axes).
    pub data: Vec<String>,
    /// Whether category points sit at band centers instead of band edges.
    pub boundary_gap: Option<bool>,
    /// Whether the axis line is drawn through the companion axis's zero.
    pub on_zero: Option<bool>,
    /// Approximate number of intervals used when rounding the extent.
    pub split_number: Option<usize>,
}

impl AxisSpec {
    /// Creates an axis spec with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a category axis spec with the given labels.
    pub fn category<S: Into<String>>(labels: impl IntoIterator<Item = S>) -> Self {
        Self {
            kind: Some(AxisKind::Category),
            data: labels.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Creates a value axis spec.
    pub fn value() -> Self {
        Self {
            kind: Some(AxisKind::Value),
            ..Self::default()
        }
    }

    /// Sets the axis kind.
    pub fn with_kind(mut self, kind: AxisKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Pins the axis to a screen side.
    pub fn with_position(mut self, position: AxisPosition) -> Self {
        self.position = Some(position);
        self
    }

    /// Sets the boundary gap option.
    pub fn with_boundary_gap(mut self, boundary_gap: bool) -> Self {
        self.boundary_gap = Some(boundary_gap);
        self
    }

    /// Sets the zero-alignment option.
    pub fn with_on_zero(mut self, on_zero: bool) -> Self {
        self.on_zero = Some(on_zero);
        self
    }

    /// Sets the split number used when rounding the extent.
    pub fn with_split_number(mut self, split_number: usize) -> Self {
        self.split_number = Some(split_number);
        self
    }
}
