// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rendering-surface capability the grid draws its background through.
//!
//! The grid never rasterizes anything itself. It describes the plot background as a
//! [`RectRequest`] and hands it to a [`Surface`]; the demo implements one that writes SVG.

use kurbo::Rect;
use peniko::Brush;
use peniko::color::palette::css;

/// Z-index of the plot background. Renderers should sort requests by ascending z-index.
pub const PLOT_BACKGROUND: i32 = -100;

/// A paint + width pair for stroked outlines.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// A filled (and optionally outlined) rectangle to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct RectRequest {
    /// Rectangle in scene coordinates.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
    /// Outline, if any.
    pub stroke: Option<StrokeStyle>,
    /// Render order.
    pub z_index: i32,
}

/// Something that can draw rectangles.
pub trait Surface {
    /// Draws `request`.
    fn draw_rect(&mut self, request: &RectRequest);
}
