// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Series assignment and axis extent aggregation.

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::axis::AxisDim;
use crate::cartesian::{Cartesian, CartesianId};
use crate::defaults::Defaults;
use crate::scale::Scale;
use crate::series::{ChartType, CoordinateSystem, DataValue, SeriesSpec};
use crate::stack::{StackAccumulator, StackKey};

/// Values collected for the axes of one Cartesian, for one chart type.
#[derive(Clone, Debug, PartialEq)]
pub struct CoordData {
    /// The Cartesian the values belong to.
    pub cartesian: CartesianId,
    /// Values the x axis must cover.
    pub x: Vec<f64>,
    /// Values the y axis must cover.
    pub y: Vec<f64>,
}

impl CoordData {
    fn new(cartesian: CartesianId) -> Self {
        Self {
            cartesian,
            x: Vec::new(),
            y: Vec::new(),
        }
    }

    fn values_mut(&mut self, dim: AxisDim) -> &mut Vec<f64> {
        match dim {
            AxisDim::X => &mut self.x,
            AxisDim::Y => &mut self.y,
        }
    }
}

/// Assigns every Cartesian series to its coordinate system and collects axis values.
///
/// With a category axis, each value (or its running stack total) feeds the companion value
/// axis. Without one, both components of a pair feed their axes directly. Series naming an axis
/// pair that was not built are skipped.
pub(crate) fn collect(
    cartesians: &mut [Cartesian],
    index: &HashMap<CartesianId, usize>,
    series: &[SeriesSpec],
    defaults: &Defaults,
) -> Vec<CoordData> {
    let mut stacks = StackAccumulator::new();
    let mut collected: Vec<CoordData> = Vec::new();
    let mut slots: HashMap<(ChartType, CartesianId), usize> = HashMap::new();

    for (series_index, spec) in series.iter().enumerate() {
        let resolved = defaults.resolve_series(spec);
        if resolved.coordinate_system != Some(CoordinateSystem::Cartesian) {
            log::trace!("series {series_index} is not drawn on the grid");
            continue;
        }
        let id = CartesianId::new(resolved.x_axis_index, resolved.y_axis_index);
        let Some(&position) = index.get(&id) else {
            log::warn!("series {series_index} refers to missing coordinate system {id}; skipped");
            continue;
        };
        let cartesian = &mut cartesians[position];
        cartesian.push_series(series_index);

        let slot = *slots
            .entry((spec.chart_type.clone(), id))
            .or_insert_with(|| {
                collected.push(CoordData::new(id));
                collected.len() - 1
            });
        let data = &mut collected[slot];

        match cartesian.category_axis().map(|axis| axis.dim()) {
            Some(category_dim) => {
                let value_dim = category_dim.other();
                let key = spec.stack.as_ref().map(|stack| StackKey {
                    chart_type: spec.chart_type.clone(),
                    cartesian: id,
                    stack: stack.clone(),
                });
                for (i, item) in spec.data.iter().enumerate() {
                    let value = match item.value() {
                        Some(DataValue::Scalar(v)) => v,
                        Some(DataValue::Pair(a, b)) => match value_dim {
                            AxisDim::X => a,
                            AxisDim::Y => b,
                        },
                        Some(DataValue::Missing) | None => {
                            log::trace!("series {series_index}: missing value at {i}");
                            continue;
                        }
                    };
                    let value = match &key {
                        Some(key) => stacks.accumulate(key, i, value),
                        None => value,
                    };
                    data.values_mut(value_dim).push(value);
                }
            }
            None => {
                for (i, item) in spec.data.iter().enumerate() {
                    match item.value() {
                        Some(DataValue::Pair(a, b)) => {
                            data.x.push(a);
                            data.y.push(b);
                        }
                        _ => log::trace!("series {series_index}: no (x, y) pair at {i}"),
                    }
                }
            }
        }
    }

    collected
}

/// Fits the collected values into the axis scales, then rounds every scale.
pub(crate) fn apply_extents(
    cartesians: &mut [Cartesian],
    index: &HashMap<CartesianId, usize>,
    collected: &[CoordData],
) {
    for data in collected {
        let Some(&position) = index.get(&data.cartesian) else {
            continue;
        };
        let cartesian = &mut cartesians[position];
        for (dim, values) in [(AxisDim::X, &data.x), (AxisDim::Y, &data.y)] {
            if !values.is_empty() {
                cartesian
                    .axis_mut(dim)
                    .axis_mut()
                    .scale_mut()
                    .set_extent_from_data(values);
            }
        }
    }

    for cartesian in cartesians.iter_mut() {
        for dim in [AxisDim::X, AxisDim::Y] {
            let axis = cartesian.axis_mut(dim);
            let split_number = axis.split_number();
            axis.axis_mut().scale_mut().nice_extent(split_number);
        }
    }
}
