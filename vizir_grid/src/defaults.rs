// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Type defaults for axes and series.
//!
//! Every optional configuration field resolves through the same order: the item's own value, then
//! the default for its type (axis kind or chart type), then the global default. [`Defaults`] is
//! handed to the grid as part of the [`ChartSpec`](crate::ChartSpec) and is never mutated by it.

use hashbrown::HashMap;

use crate::axis_spec::{AxisKind, AxisSpec};
use crate::series::{ChartType, CoordinateSystem, SeriesSpec};

/// Returns the first `Some` among `candidates`.
pub fn first_defined<T>(candidates: impl IntoIterator<Item = Option<T>>) -> Option<T> {
    candidates.into_iter().flatten().next()
}

/// Defaults for one axis kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AxisDefaults {
    /// Default for [`AxisSpec::boundary_gap`].
    pub boundary_gap: Option<bool>,
    /// Default for [`AxisSpec::on_zero`].
    pub on_zero: Option<bool>,
    /// Default for [`AxisSpec::split_number`].
    pub split_number: Option<usize>,
}

/// Defaults for one chart type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeriesDefaults {
    /// Default coordinate system.
    pub coordinate_system: Option<CoordinateSystem>,
    /// Default x axis index.
    pub x_axis_index: Option<usize>,
    /// Default y axis index.
    pub y_axis_index: Option<usize>,
}

/// Axis options after default resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedAxisOptions {
    /// Whether category points sit at band centers.
    pub boundary_gap: bool,
    /// Whether the axis line follows the companion axis's zero.
    pub on_zero: bool,
    /// Approximate number of intervals in the rounded extent.
    pub split_number: usize,
}

/// Series options after default resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedSeriesOptions {
    /// Coordinate system, or `None` when no default applies.
    pub coordinate_system: Option<CoordinateSystem>,
    /// X axis index.
    pub x_axis_index: usize,
    /// Y axis index.
    pub y_axis_index: usize,
}

/// Explicit default configuration for a chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Defaults {
    /// Defaults for category axes.
    pub category_axis: AxisDefaults,
    /// Defaults for value axes.
    pub value_axis: AxisDefaults,
    /// Defaults for time axes.
    pub time_axis: AxisDefaults,
    /// Defaults for log axes.
    pub log_axis: AxisDefaults,
    /// Global axis fallbacks.
    pub axis: ResolvedAxisOptions,
    /// Defaults per chart type.
    pub series: HashMap<ChartType, SeriesDefaults>,
    /// Global series fallbacks.
    pub series_fallback: SeriesDefaults,
}

impl Default for Defaults {
    fn default() -> Self {
        let cartesian = SeriesDefaults {
            coordinate_system: Some(CoordinateSystem::Cartesian),
            x_axis_index: Some(0),
            y_axis_index: Some(0),
        };
        let mut series = HashMap::new();
        for chart_type in [
            ChartType::Line,
            ChartType::Bar,
            ChartType::Scatter,
            ChartType::Candlestick,
        ] {
            series.insert(chart_type, cartesian.clone());
        }

        Self {
            category_axis: AxisDefaults {
                boundary_gap: Some(true),
                ..AxisDefaults::default()
            },
            value_axis: AxisDefaults::default(),
            time_axis: AxisDefaults::default(),
            log_axis: AxisDefaults::default(),
            axis: ResolvedAxisOptions {
                boundary_gap: false,
                on_zero: true,
                split_number: 5,
            },
            series,
            series_fallback: SeriesDefaults {
                coordinate_system: None,
                x_axis_index: Some(0),
                y_axis_index: Some(0),
            },
        }
    }
}

impl Defaults {
    /// Returns the defaults for an axis kind.
    pub fn axis_defaults(&self, kind: AxisKind) -> &AxisDefaults {
        match kind {
            AxisKind::Category => &self.category_axis,
            AxisKind::Value => &self.value_axis,
            AxisKind::Time => &self.time_axis,
            AxisKind::Log => &self.log_axis,
        }
    }

    /// Sets the defaults for a chart type.
    pub fn with_series_defaults(mut self, chart_type: ChartType, defaults: SeriesDefaults) -> Self {
        self.series.insert(chart_type, defaults);
        self
    }

    /// Resolves the options of `axis`, interpreted as an axis of `kind`.
    pub fn resolve_axis(&self, axis: &AxisSpec, kind: AxisKind) -> ResolvedAxisOptions {
        let kind_defaults = self.axis_defaults(kind);
        ResolvedAxisOptions {
            boundary_gap: first_defined([axis.boundary_gap, kind_defaults.boundary_gap])
                .unwrap_or(self.axis.boundary_gap),
            on_zero: first_defined([axis.on_zero, kind_defaults.on_zero])
                .unwrap_or(self.axis.on_zero),
            split_number: first_defined([axis.split_number, kind_defaults.split_number])
                .unwrap_or(self.axis.split_number),
        }
    }

    /// Resolves the coordinate system and axis indices of `series`.
    pub fn resolve_series(&self, series: &SeriesSpec) -> ResolvedSeriesOptions {
        let type_defaults = self.series.get(&series.chart_type);
        let fallback = &self.series_fallback;
        ResolvedSeriesOptions {
            coordinate_system: first_defined([
                series.coordinate_system.clone(),
                type_defaults.and_then(|d| d.coordinate_system.clone()),
                fallback.coordinate_system.clone(),
            ]),
            x_axis_index: first_defined([
                series.x_axis_index,
                type_defaults.and_then(|d| d.x_axis_index),
                fallback.x_axis_index,
            ])
            .unwrap_or(0),
            y_axis_index: first_defined([
                series.y_axis_index,
                type_defaults.and_then(|d| d.y_axis_index),
                fallback.y_axis_index,
            ])
            .unwrap_or(0),
        }
    }
}
