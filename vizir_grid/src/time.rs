// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time step selection for time axes.
//!
//! Time is modeled as a numeric value in **seconds**; steps snap to whole seconds, minutes,
//! hours and days instead of powers of ten.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 60.0 * MINUTE;
const DAY: f64 = 24.0 * HOUR;

/// Returns the smallest "nice" time step (in seconds) that is at least `step`.
///
/// Returns `0.0` for non-finite or non-positive input.
pub(crate) fn nice_time_step_seconds(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }

    const STEPS: &[f64] = &[
        1.0,
        2.0,
        5.0,
        10.0,
        15.0,
        30.0,
        MINUTE,
        2.0 * MINUTE,
        5.0 * MINUTE,
        10.0 * MINUTE,
        15.0 * MINUTE,
        30.0 * MINUTE,
        HOUR,
        2.0 * HOUR,
        3.0 * HOUR,
        6.0 * HOUR,
        12.0 * HOUR,
        DAY,
        2.0 * DAY,
        7.0 * DAY,
    ];

    for &s in STEPS {
        if s >= step {
            return s;
        }
    }
    // Past a week, round up to whole weeks.
    let weeks = (step / (7.0 * DAY)).ceil();
    weeks.max(1.0) * 7.0 * DAY
}
