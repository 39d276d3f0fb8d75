// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Signed running sums for stacked series.
//!
//! Each stack group keeps two running totals per data position: one for non-negative values and
//! one for negative values. Stacking a value returns the total it lands on, which is what the
//! value axis must cover.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::cartesian::CartesianId;
use crate::series::ChartType;

/// Identity of a stack group: series only stack with series of the same chart type, drawn on
/// the same Cartesian, naming the same group.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StackKey {
    /// Chart type of the stacked series.
    pub chart_type: ChartType,
    /// Cartesian the series are drawn on.
    pub cartesian: CartesianId,
    /// Stack group name.
    pub stack: String,
}

/// Running totals of one stack group, indexed by data position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StackBucket {
    positive: Vec<f64>,
    negative: Vec<f64>,
}

impl StackBucket {
    /// Adds `value` at `index` and returns the new running total on its side.
    ///
    /// Values `>= 0` accumulate into the positive totals, everything else into the negative ones.
    pub fn accumulate(&mut self, index: usize, value: f64) -> f64 {
        let side = if value >= 0.0 {
            &mut self.positive
        } else {
            &mut self.negative
        };
        if side.len() <= index {
            side.resize(index + 1, 0.0);
        }
        side[index] += value;
        side[index]
    }
}

/// Stack state for one aggregation pass.
#[derive(Clone, Debug, Default)]
pub struct StackAccumulator {
    buckets: HashMap<StackKey, StackBucket>,
}

impl StackAccumulator {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stacks `value` at `index` in the group `key` and returns the running total.
    pub fn accumulate(&mut self, key: &StackKey, index: usize, value: f64) -> f64 {
        if let Some(bucket) = self.buckets.get_mut(key) {
            return bucket.accumulate(index, value);
        }
        self.buckets
            .entry(key.clone())
            .or_default()
            .accumulate(index, value)
    }
}
