// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scales owned by grid axes.
//!
//! A scale maps data values into the unit interval; the owning axis stretches that onto its
//! pixel extent. Two variants are used:
//! - [`OrdinalScale`] for category axes (data values are category indices), and
//! - [`IntervalScale`] for continuous axes, whose extent is collected from series data and then
//!   rounded outward to "nice" steps.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::axis_spec::AxisKind;
use crate::time::nice_time_step_seconds;

/// The broad family of a scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScaleKind {
    /// Discrete categories.
    Ordinal,
    /// Continuous numeric range.
    Interval,
}

/// The capability an axis needs from its scale.
pub trait Scale {
    /// Returns the scale family.
    fn kind(&self) -> ScaleKind;

    /// Returns the current data extent as `(min, max)`.
    fn extent(&self) -> (f64, f64);

    /// Maps `value` into `0..=1` (outside for values beyond the extent), honoring reversal.
    fn normalize(&self, value: f64) -> f64;

    /// Maps `value` onto the pixel `range`.
    fn data_to_coord(&self, value: f64, range: (f64, f64)) -> f64 {
        let (r0, r1) = range;
        r0 + self.normalize(value) * (r1 - r0)
    }

    /// Fits the extent to `values`. Non-finite values are ignored; an empty slice is a no-op.
    fn set_extent_from_data(&mut self, values: &[f64]);

    /// Rounds the extent outward to steps of roughly `span / split_number`.
    fn nice_extent(&mut self, split_number: usize);

    /// Flips the mapping direction.
    fn reverse(&mut self);

    /// Returns `true` if the mapping direction is flipped.
    fn is_reversed(&self) -> bool;
}

/// Returns the finite `(min, max)` of `values`, if any.
fn data_extent(values: &[f64]) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        if !v.is_finite() {
            continue;
        }
        min = min.min(v);
        max = max.max(v);
    }
    (min <= max).then_some((min, max))
}

fn unit(value: f64, (d0, d1): (f64, f64), reversed: bool, degenerate: f64) -> f64 {
    let denom = d1 - d0;
    let t = if denom == 0.0 {
        degenerate
    } else {
        (value - d0) / denom
    };
    if reversed { 1.0 - t } else { t }
}

/// A scale over an ordered list of categories.
///
/// Category `i` has data value `i`; the extent spans `[0, count - 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct OrdinalScale {
    categories: Vec<String>,
    extent: (f64, f64),
    reversed: bool,
}

impl OrdinalScale {
    /// Creates a scale over `categories`.
    pub fn new(categories: Vec<String>) -> Self {
        let last = categories.len().saturating_sub(1) as f64;
        Self {
            categories,
            extent: (0.0, last),
            reversed: false,
        }
    }

    /// Returns the category labels.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }
}

impl Scale for OrdinalScale {
    fn kind(&self) -> ScaleKind {
        ScaleKind::Ordinal
    }

    fn extent(&self) -> (f64, f64) {
        self.extent
    }

    fn normalize(&self, value: f64) -> f64 {
        // A single category sits in the middle of the axis.
        unit(value, self.extent, self.reversed, 0.5)
    }

    fn set_extent_from_data(&mut self, values: &[f64]) {
        if let Some((min, max)) = data_extent(values) {
            self.extent = (self.extent.0.min(min), self.extent.1.max(max));
        }
    }

    fn nice_extent(&mut self, _split_number: usize) {
        self.extent = (self.extent.0.floor(), self.extent.1.ceil());
    }

    fn reverse(&mut self) {
        self.reversed = !self.reversed;
    }

    fn is_reversed(&self) -> bool {
        self.reversed
    }
}

/// A continuous scale over a numeric range.
///
/// The extent starts at `[0, 1]`. The first call to [`Scale::set_extent_from_data`] replaces it;
/// later calls widen it, so every series drawn against the axis fits.
#[derive(Clone, Debug, PartialEq)]
pub struct IntervalScale {
    extent: (f64, f64),
    has_data: bool,
    time: bool,
    interval: f64,
    reversed: bool,
}

impl Default for IntervalScale {
    fn default() -> Self {
        Self::new()
    }
}

impl IntervalScale {
    /// Creates a numeric scale with the default `[0, 1]` extent.
    pub fn new() -> Self {
        Self {
            extent: (0.0, 1.0),
            has_data: false,
            time: false,
            interval: 0.0,
            reversed: false,
        }
    }

    /// Creates a scale whose nice steps follow clock units (values in seconds).
    pub fn time() -> Self {
        Self {
            time: true,
            ..Self::new()
        }
    }

    /// Returns the step chosen by the last [`Scale::nice_extent`], or `0.0` before it ran.
    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Returns `true` once data has been fitted into the extent.
    pub fn has_data(&self) -> bool {
        self.has_data
    }
}

impl Scale for IntervalScale {
    fn kind(&self) -> ScaleKind {
        ScaleKind::Interval
    }

    fn extent(&self) -> (f64, f64) {
        self.extent
    }

    fn normalize(&self, value: f64) -> f64 {
        unit(value, self.extent, self.reversed, 0.0)
    }

    fn set_extent_from_data(&mut self, values: &[f64]) {
        let Some((min, max)) = data_extent(values) else {
            return;
        };
        self.extent = if self.has_data {
            (self.extent.0.min(min), self.extent.1.max(max))
        } else {
            (min, max)
        };
        self.has_data = true;
    }

    fn nice_extent(&mut self, split_number: usize) {
        let (mut min, mut max) = self.extent;
        if min > max {
            core::mem::swap(&mut min, &mut max);
        }
        if max - min == 0.0 {
            if min == 0.0 {
                max = 1.0;
            } else {
                let pad = min.abs() / 2.0;
                min -= pad;
                max += pad;
            }
        }

        let raw = (max - min) / split_number.max(1) as f64;
        let step = if self.time {
            nice_time_step_seconds(raw)
        } else {
            nice_step(raw)
        };
        if step == 0.0 {
            self.extent = (min, max);
            return;
        }
        self.interval = step;
        self.extent = ((min / step).floor() * step, (max / step).ceil() * step);
    }

    fn reverse(&mut self) {
        self.reversed = !self.reversed;
    }

    fn is_reversed(&self) -> bool {
        self.reversed
    }
}

/// Snaps `step` to the nearest of 1, 2, 5 or 10 times a power of ten.
fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10_f64.powi(clamp_exponent(power));
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "the exponent is integral and clamped to the f64 range"
)]
fn clamp_exponent(power: f64) -> i32 {
    power.clamp(-300.0, 300.0) as i32
}

/// The scale of a grid axis.
#[derive(Clone, Debug, PartialEq)]
pub enum AxisScale {
    /// Category scale.
    Ordinal(OrdinalScale),
    /// Continuous scale.
    Interval(IntervalScale),
}

impl AxisScale {
    /// Creates a fresh scale for an axis of `kind`.
    ///
    /// Category axes get an ordinal scale seeded with `categories`; value, log and time axes get
    /// an interval scale, since their data is numeric. Time scales round to clock units.
    pub fn for_kind(kind: AxisKind, categories: &[String]) -> Self {
        match kind {
            AxisKind::Category => Self::Ordinal(OrdinalScale::new(categories.to_vec())),
            AxisKind::Time => Self::Interval(IntervalScale::time()),
            AxisKind::Value | AxisKind::Log => Self::Interval(IntervalScale::new()),
        }
    }

    fn inner(&self) -> &dyn Scale {
        match self {
            Self::Ordinal(s) => s,
            Self::Interval(s) => s,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Scale {
        match self {
            Self::Ordinal(s) => s,
            Self::Interval(s) => s,
        }
    }
}

impl Scale for AxisScale {
    fn kind(&self) -> ScaleKind {
        self.inner().kind()
    }

    fn extent(&self) -> (f64, f64) {
        self.inner().extent()
    }

    fn normalize(&self, value: f64) -> f64 {
        self.inner().normalize(value)
    }

    fn set_extent_from_data(&mut self, values: &[f64]) {
        self.inner_mut().set_extent_from_data(values);
    }

    fn nice_extent(&mut self, split_number: usize) {
        self.inner_mut().nice_extent(split_number);
    }

    fn reverse(&mut self) {
        self.inner_mut().reverse();
    }

    fn is_reversed(&self) -> bool {
        self.inner().is_reversed()
    }
}
