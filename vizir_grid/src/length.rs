// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Absolute or viewport-relative lengths used by grid configuration.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// A length that is either absolute (pixels) or relative to a viewport dimension.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    /// An absolute length in pixels.
    Px(f64),
    /// A percentage (`0..=100`) of the viewport dimension it is resolved against.
    Percent(f64),
}

impl Length {
    /// Resolves this length against `total` (the viewport width or height).
    pub fn resolve(self, total: f64) -> f64 {
        match self {
            Self::Px(px) => px,
            Self::Percent(p) => p / 100.0 * total,
        }
    }
}

impl Default for Length {
    fn default() -> Self {
        Self::Px(0.0)
    }
}

impl From<f64> for Length {
    fn from(value: f64) -> Self {
        Self::Px(value)
    }
}

/// Snaps `position` so a stroke of `line_width` lands on whole device pixels.
///
/// Odd integer widths straddle a pixel boundary, so the position moves to the pixel center;
/// everything else rounds to the nearest pixel edge.
pub fn sub_pixel_optimize(position: f64, line_width: f64) -> f64 {
    if line_width % 2.0 == 1.0 {
        position.floor() + 0.5
    } else {
        position.round()
    }
}
