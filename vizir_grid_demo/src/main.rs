// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid layout demos for `vizir_grid`.
//!
//! Each demo lays out a chart, draws the plot background, axis lines and one dot per data item,
//! and prints the SVG document to stdout. Layout diagnostics go to stderr.

mod svg;

use kurbo::{Point, Size};
use log::{LevelFilter, Metadata, Record};
use peniko::color::palette::css;
use peniko::{Brush, Color};
use vizir_grid::{
    Axis2D, AxisDim, AxisPosition, AxisScale, AxisSpec, Cartesian, ChartSpec, ChartType, Grid,
    GridError, GridSpec, SeriesSpec,
};

const VIEWPORT: Size = Size::new(640.0, 400.0);

const PALETTE: [Color; 4] = [css::STEEL_BLUE, css::DARK_ORANGE, css::SEA_GREEN, css::CRIMSON];

/// Z-index of data dots, above the plot background.
const POINTS: i32 = 20;
/// Z-index of axis lines.
const AXIS_LINES: i32 = 30;
/// Z-index of category labels.
const LABELS: i32 = 40;

/// Distance from an axis line to the center of its labels.
const LABEL_GAP: f64 = 14.0;

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn main() -> Result<(), GridError> {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Debug);
    }

    let demos = [
        ("stacked bars", stacked_bar_chart()),
        ("mirrored bars", mirrored_chart()),
        ("scatter on zero", scatter_chart()),
        ("three value axes", multi_axis_chart()),
    ];
    for (title, spec) in demos {
        println!("<!-- {title} -->");
        println!("{}", render(spec)?);
    }
    Ok(())
}

fn render(spec: ChartSpec) -> Result<String, GridError> {
    let mut grid = Grid::new(spec);
    grid.refresh(VIEWPORT);

    let mut surface = svg::SvgSurface::new(VIEWPORT);
    grid.draw_background(&mut surface)?;

    let axis_brush = Brush::Solid(css::DIM_GRAY);
    for axis in grid.axes() {
        let c = axis.other_coord();
        let (from, to) = if axis.is_horizontal() {
            (Point::new(grid.x(), c), Point::new(grid.x_end(), c))
        } else {
            (Point::new(c, grid.y()), Point::new(c, grid.y_end()))
        };
        surface.line(from, to, &axis_brush, 1.0, AXIS_LINES);
    }

    for cartesian in grid.all_cartesians() {
        for axis in labelled_axes(cartesian) {
            draw_category_labels(&mut surface, axis, &axis_brush);
        }
    }

    for cartesian in grid.all_cartesians() {
        let id = cartesian.id();
        for (series_index, series) in grid.cartesian_series(id)? {
            let brush = Brush::Solid(PALETTE[series_index % PALETTE.len()]);
            let points =
                grid.data_to_coords(&series.data, Some(id.x_index), Some(id.y_index))?;
            for point in points.into_iter().flatten() {
                surface.circle(point, 4.0, &brush, POINTS);
            }
        }
    }
    Ok(surface.to_svg_string())
}

/// Each axis config appears in several Cartesians; label it once, where its companion is the
/// first config of the other dimension.
fn labelled_axes(cartesian: &Cartesian) -> impl Iterator<Item = &Axis2D> {
    let id = cartesian.id();
    cartesian.axes().into_iter().filter(move |axis| match axis.dim() {
        AxisDim::X => id.y_index == 0,
        AxisDim::Y => id.x_index == 0,
    })
}

fn draw_category_labels(surface: &mut svg::SvgSurface, axis: &Axis2D, brush: &Brush) {
    let AxisScale::Ordinal(scale) = axis.scale() else {
        return;
    };
    let c = axis.other_coord();
    for (i, category) in scale.categories().iter().enumerate() {
        let along = axis.data_to_coord(i as f64);
        let pos = match axis.position() {
            AxisPosition::Bottom => Point::new(along, c + LABEL_GAP),
            AxisPosition::Top => Point::new(along, c - LABEL_GAP),
            AxisPosition::Left => Point::new(c - 2.0 * LABEL_GAP, along),
            AxisPosition::Right => Point::new(c + 2.0 * LABEL_GAP, along),
        };
        surface.label(pos, category, brush, LABELS);
    }
}

fn weekdays() -> AxisSpec {
    AxisSpec::category(["Mon", "Tue", "Wed", "Thu", "Fri"])
}

fn stacked_bar_chart() -> ChartSpec {
    ChartSpec::new()
        .with_grid(GridSpec::new().with_background(css::WHITE_SMOKE))
        .with_x_axis(weekdays())
        .with_y_axis(AxisSpec::value())
        .with_series(
            SeriesSpec::new(ChartType::Bar, [120.0, 132.0, 101.0, 134.0, 90.0])
                .with_name("email")
                .with_stack("total"),
        )
        .with_series(
            SeriesSpec::new(ChartType::Bar, [220.0, 182.0, 191.0, 234.0, 290.0])
                .with_name("ads")
                .with_stack("total"),
        )
        .with_series(
            SeriesSpec::new(ChartType::Bar, [-50.0, -20.0, -35.0, -10.0, -60.0])
                .with_name("refunds")
                .with_stack("total"),
        )
        .with_series(
            SeriesSpec::new(ChartType::Line, [320.0, 332.0, 301.0, 334.0, 390.0])
                .with_name("target"),
        )
}

fn mirrored_chart() -> ChartSpec {
    ChartSpec::new()
        .with_x_axis(AxisSpec::value())
        .with_y_axis(
            weekdays()
                .with_position(AxisPosition::Right)
                .with_on_zero(false),
        )
        .with_series(SeriesSpec::new(ChartType::Bar, [18.0, 23.0, 29.0, 10.0, 13.0]))
}

fn scatter_chart() -> ChartSpec {
    ChartSpec::new()
        .with_x_axis(AxisSpec::value())
        .with_y_axis(AxisSpec::value())
        .with_series(SeriesSpec::new(
            ChartType::Scatter,
            [(-8.0, 3.0), (-2.5, -6.0), (4.0, 7.5), (9.0, -1.0), (12.0, 11.0)],
        ))
}

fn multi_axis_chart() -> ChartSpec {
    ChartSpec::new()
        .with_grid(GridSpec::new().with_offsets(120.0, 60.0, 80.0, 60.0))
        .with_x_axis(weekdays())
        .with_y_axis(AxisSpec::value())
        .with_y_axis(AxisSpec::value())
        .with_y_axis(AxisSpec::value())
        .with_series(SeriesSpec::new(ChartType::Line, [2.0, 4.9, 7.0, 23.2, 25.6]).with_axes(0, 0))
        .with_series(SeriesSpec::new(ChartType::Line, [2.6, 5.9, 9.0, 26.4, 28.7]).with_axes(0, 1))
        .with_series(SeriesSpec::new(ChartType::Line, [2.0, 2.2, 3.3, 4.5, 6.3]).with_axes(0, 2))
}
