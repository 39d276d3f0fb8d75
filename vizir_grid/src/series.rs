// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Series configuration and data items.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

/// The chart type of a series.
///
/// Built-in types get Cartesian defaults from [`Defaults`](crate::Defaults); anything else can be
/// named through [`ChartType::Other`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ChartType {
    /// Line (and area) series.
    Line,
    /// Bar series.
    Bar,
    /// Scatter series.
    Scatter,
    /// Candlestick series.
    Candlestick,
    /// Pie series.
    Pie,
    /// Any other chart type, by name.
    Other(String),
}

/// Coordinate system a series is drawn in.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CoordinateSystem {
    /// The Cartesian grid.
    Cartesian,
    /// Any other coordinate system, by name. Such series are ignored by the grid.
    Other(String),
}

/// A resolved data value, after unwrapping records.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DataValue {
    /// The "missing value" sentinel.
    Missing,
    /// A single number.
    Scalar(f64),
    /// An `(x, y)` pair.
    Pair(f64, f64),
}

impl DataValue {
    /// Returns `None` for missing values and values with non-finite components.
    pub fn finite(self) -> Option<Self> {
        match self {
            Self::Missing => None,
            Self::Scalar(v) if v.is_finite() => Some(self),
            Self::Pair(a, b) if a.is_finite() && b.is_finite() => Some(self),
            Self::Scalar(_) | Self::Pair(..) => None,
        }
    }
}

/// A single series data element.
#[derive(Clone, Debug, PartialEq)]
pub enum DataItem {
    /// The "missing value" sentinel.
    Missing,
    /// A plain number.
    Scalar(f64),
    /// An `(x, y)` pair.
    Pair(f64, f64),
    /// An object carrying its value in a field, plus an optional label.
    Record {
        /// The value field.
        value: DataValue,
        /// Optional item label.
        name: Option<String>,
    },
}

impl DataItem {
    /// Extracts the value of this item, or `None` when it is missing or non-finite.
    pub fn value(&self) -> Option<DataValue> {
        let raw = match self {
            Self::Missing => DataValue::Missing,
            Self::Scalar(v) => DataValue::Scalar(*v),
            Self::Pair(a, b) => DataValue::Pair(*a, *b),
            Self::Record { value, .. } => *value,
        };
        raw.finite()
    }
}

impl From<f64> for DataItem {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<(f64, f64)> for DataItem {
    fn from((x, y): (f64, f64)) -> Self {
        Self::Pair(x, y)
    }
}

impl From<Option<f64>> for DataItem {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Missing, Self::Scalar)
    }
}

/// Configuration for one series.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesSpec {
    /// Chart type; selects the type defaults.
    pub chart_type: ChartType,
    /// Optional series name.
    pub name: Option<String>,
    /// Coordinate system. Unset means the chart type default.
    pub coordinate_system: Option<CoordinateSystem>,
    /// Index of the x axis. Unset means the chart type default (usually 0).
    pub x_axis_index: Option<usize>,
    /// Index of the y axis. Unset means the chart type default (usually 0).
    pub y_axis_index: Option<usize>,
    /// Stack group. Series of the same chart type, Cartesian and group accumulate.
    pub stack: Option<String>,
    /// Data items, indexed by data position.
    pub data: Vec<DataItem>,
}

impl SeriesSpec {
    /// Creates a series of the given chart type with the given data.
    pub fn new<T: Into<DataItem>>(chart_type: ChartType, data: impl IntoIterator<Item = T>) -> Self {
        Self {
            chart_type,
            name: None,
            coordinate_system: None,
            x_axis_index: None,
            y_axis_index: None,
            stack: None,
            data: data.into_iter().map(Into::into).collect(),
        }
    }

    /// Sets the series name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the coordinate system.
    pub fn with_coordinate_system(mut self, coordinate_system: CoordinateSystem) -> Self {
        self.coordinate_system = Some(coordinate_system);
        self
    }

    /// Selects the `(x, y)` axis pair this series is drawn against.
    pub fn with_axes(mut self, x_axis_index: usize, y_axis_index: usize) -> Self {
        self.x_axis_index = Some(x_axis_index);
        self.y_axis_index = Some(y_axis_index);
        self
    }

    /// Puts the series into a stack group.
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }
}
