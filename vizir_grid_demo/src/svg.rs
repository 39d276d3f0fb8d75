// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG surface for `vizir_grid_demo`.

use kurbo::{Point, Rect, Size};
use peniko::Brush;
use vizir_grid::{RectRequest, Surface};

/// An SVG element waiting to be written, with its render order.
#[derive(Debug)]
struct Element {
    z_index: i32,
    markup: String,
}

#[derive(Debug)]
pub(crate) struct SvgSurface {
    size: Size,
    elements: Vec<Element>,
}

impl SvgSurface {
    pub(crate) fn new(size: Size) -> Self {
        Self {
            size,
            elements: Vec::new(),
        }
    }

    fn push(&mut self, z_index: i32, markup: String) {
        self.elements.push(Element { z_index, markup });
    }

    pub(crate) fn line(&mut self, from: Point, to: Point, brush: &Brush, width: f64, z_index: i32) {
        let mut out = format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
            from.x, from.y, to.x, to.y
        );
        write_paint_attr(&mut out, "stroke", brush);
        out.push_str(&format!(r#" stroke-width="{width}"/>"#));
        self.push(z_index, out);
    }

    pub(crate) fn circle(&mut self, center: Point, radius: f64, brush: &Brush, z_index: i32) {
        let mut out = format!(
            r#"<circle cx="{}" cy="{}" r="{radius}""#,
            center.x, center.y
        );
        write_paint_attr(&mut out, "fill", brush);
        out.push_str("/>");
        self.push(z_index, out);
    }

    /// Centered text at `pos`, for axis labels.
    pub(crate) fn label(&mut self, pos: Point, text: &str, brush: &Brush, z_index: i32) {
        let mut out = format!(
            r#"<text x="{}" y="{}" font-size="11" text-anchor="middle" dominant-baseline="middle""#,
            pos.x, pos.y
        );
        write_paint_attr(&mut out, "fill", brush);
        out.push('>');
        out.push_str(&escape_xml(text));
        out.push_str("</text>");
        self.push(z_index, out);
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
            w = self.size.width,
            h = self.size.height,
        ));
        out.push('\n');

        // Stable sort keeps insertion order within a z-index.
        let mut elements: Vec<&Element> = self.elements.iter().collect();
        elements.sort_by_key(|e| e.z_index);
        for element in elements {
            out.push_str(&element.markup);
            out.push('\n');
        }

        out.push_str("</svg>\n");
        out
    }
}

impl Surface for SvgSurface {
    fn draw_rect(&mut self, request: &RectRequest) {
        let r: Rect = request.rect;
        let mut out = format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}""#,
            r.x0,
            r.y0,
            r.width(),
            r.height(),
        );
        write_paint_attr(&mut out, "fill", &request.fill);
        if let Some(stroke) = &request.stroke {
            write_paint_attr(&mut out, "stroke", &stroke.brush);
            out.push_str(&format!(r#" stroke-width="{}""#, stroke.stroke_width));
        }
        out.push_str("/>");
        self.push(request.z_index, out);
    }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let paint = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (paint, opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
