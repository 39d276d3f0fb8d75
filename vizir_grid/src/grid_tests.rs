// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::vec;
use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{Point, Rect, Size};
use peniko::color::palette::css;

use crate::aggregate;
use crate::{
    AxisDim, AxisKind, AxisPosition, AxisScale, AxisSpec, CartesianId, ChartSpec, ChartType,
    CoordData, CoordinateSystem, DataItem, DataValue, Defaults, Grid, GridError, GridSpec, Length,
    PLOT_BACKGROUND, RectRequest, Scale, ScaleKind, SeriesDefaults, SeriesSpec, Surface,
};

const VIEWPORT: Size = Size::new(800.0, 600.0);

fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() <= 1e-6,
        "{what}: expected {expected}, got {actual}"
    );
}

fn assert_point_close(actual: Point, expected: Point, what: &str) {
    assert_close(actual.x, expected.x, what);
    assert_close(actual.y, expected.y, what);
}

fn laid_out(spec: ChartSpec) -> Grid {
    let mut grid = Grid::new(spec);
    assert!(grid.refresh(VIEWPORT), "first refresh always runs");
    grid
}

fn days() -> AxisSpec {
    AxisSpec::category(["Mon", "Tue", "Wed"])
}

#[test]
fn default_grid_fills_viewport_minus_offsets() {
    let grid = laid_out(ChartSpec::new().with_x_axis(days()).with_y_axis(AxisSpec::value()));
    assert_eq!(grid.rect(), Rect::new(80.0, 60.0, 720.0, 540.0));
    assert_close(grid.width(), 640.0, "width");
    assert_close(grid.height(), 480.0, "height");
    assert_close(grid.x_end(), 720.0, "x end");
    assert_close(grid.y_end(), 540.0, "y end");
}

#[test]
fn width_without_explicit_value_is_what_remains() {
    let spec = ChartSpec::new().with_grid(
        GridSpec::new().with_offsets(Length::Percent(10.0), 20.0, 20.0, Length::Percent(5.0)),
    );
    let grid = laid_out(spec);
    assert_close(grid.x(), 80.0, "x is 10% of 800");
    assert_close(grid.width(), 800.0 - 80.0 - 20.0, "width");
    assert_close(grid.height(), 600.0 - 20.0 - 30.0, "height");
}

#[test]
fn category_boundary_gap_centers_points_in_bands() {
    let grid = laid_out(ChartSpec::new().with_x_axis(days()).with_y_axis(AxisSpec::value()));
    let x = grid.cartesian(0, 0).unwrap().x_axis();
    let (from, to) = x.extent();
    assert_close(from, 186.666_666_666, "extent start");
    assert_close(to, 613.333_333_333, "extent end");

    let band = 640.0 / 3.0;
    assert_close(x.data_to_coord(0.0), 80.0 + band / 2.0, "first band center");
    assert_close(x.data_to_coord(2.0), 720.0 - band / 2.0, "last band center");
}

#[test]
fn empty_category_list_skips_boundary_gap() {
    let grid = laid_out(
        ChartSpec::new()
            .with_x_axis(AxisSpec::new().with_kind(AxisKind::Category))
            .with_y_axis(AxisSpec::value()),
    );
    assert_eq!(grid.cartesian(0, 0).unwrap().x_axis().extent(), (80.0, 720.0));
}

#[test]
fn stacked_series_accumulate_into_value_extent() {
    let spec = ChartSpec::new()
        .with_x_axis(days())
        .with_y_axis(AxisSpec::value())
        .with_series(SeriesSpec::new(ChartType::Bar, [1.0, 2.0, 3.0]).with_stack("total"))
        .with_series(SeriesSpec::new(ChartType::Bar, [4.0, 5.0, 6.0]).with_stack("total"));
    let grid = laid_out(spec);
    let (min, max) = grid.cartesian(0, 0).unwrap().y_axis().scale().extent();
    assert!(min <= 1.0 && max >= 9.0, "extent {min}..{max} must cover the totals 5, 7, 9");
    assert_eq!((min, max), (0.0, 10.0), "rounded to steps of 2");
}

#[test]
fn negative_values_stack_downward() {
    let spec = ChartSpec::new()
        .with_x_axis(AxisSpec::category(["a", "b"]))
        .with_y_axis(AxisSpec::value())
        .with_series(SeriesSpec::new(ChartType::Bar, [3.0, -2.0]).with_stack("s"))
        .with_series(SeriesSpec::new(ChartType::Bar, [4.0, -5.0]).with_stack("s"));
    let grid = laid_out(spec);
    let extent = grid.cartesian(0, 0).unwrap().y_axis().scale().extent();
    assert_eq!(extent, (-8.0, 8.0), "totals 7 and -7 round out to -8..8");
}

#[test]
fn unstacked_chart_types_union_their_extents() {
    let spec = ChartSpec::new()
        .with_x_axis(AxisSpec::category(["a", "b"]))
        .with_y_axis(AxisSpec::value())
        .with_series(SeriesSpec::new(ChartType::Line, [1.0, 2.0]))
        .with_series(SeriesSpec::new(ChartType::Bar, [10.0, 20.0]));
    let grid = laid_out(spec);
    let extent = grid.cartesian(0, 0).unwrap().y_axis().scale().extent();
    assert_eq!(extent, (0.0, 20.0), "line and bar data both fit");
}

#[test]
fn stacks_are_scoped_to_chart_type() {
    let spec = ChartSpec::new()
        .with_x_axis(AxisSpec::category(["a"]))
        .with_y_axis(AxisSpec::value())
        .with_series(SeriesSpec::new(ChartType::Bar, [6.0]).with_stack("s"))
        .with_series(SeriesSpec::new(ChartType::Line, [6.0]).with_stack("s"));
    let grid = laid_out(spec);
    let (_, max) = grid.cartesian(0, 0).unwrap().y_axis().scale().extent();
    assert!(max < 12.0, "line values must not stack onto bars (max {max})");
}

#[test]
fn bottom_axis_makes_vertical_values_grow_upward() {
    let spec = ChartSpec::new()
        .with_x_axis(days())
        .with_y_axis(AxisSpec::value())
        .with_series(SeriesSpec::new(ChartType::Bar, [0.0, 5.0, 10.0]));
    let grid = laid_out(spec);
    let y = grid.cartesian(0, 0).unwrap().y_axis();
    assert!(y.scale().is_reversed(), "vertical axis is reversed");
    assert!(
        y.data_to_coord(10.0) < y.data_to_coord(5.0) && y.data_to_coord(5.0) < y.data_to_coord(0.0),
        "higher values map to smaller pixel y"
    );
}

#[test]
fn right_anchored_vertical_axis_mirrors_horizontal_axis() {
    let spec = ChartSpec::new()
        .with_x_axis(AxisSpec::value())
        .with_y_axis(
            AxisSpec::category(["a", "b", "c"])
                .with_position(AxisPosition::Right)
                .with_on_zero(false),
        )
        .with_series(SeriesSpec::new(ChartType::Bar, [1.0, 2.0, 3.0]));
    let grid = laid_out(spec);
    let cartesian = grid.cartesian(0, 0).unwrap();
    assert_eq!(cartesian.horizontal_axis().dim(), AxisDim::X);
    let x = cartesian.x_axis();
    assert!(
        x.data_to_coord(1.0) > x.data_to_coord(2.0) && x.data_to_coord(2.0) > x.data_to_coord(3.0),
        "horizontal values decrease left to right"
    );
    assert_close(cartesian.y_axis().other_coord(), 720.0, "y axis line on the right edge");
}

#[test]
fn on_zero_axis_follows_companion_zero() {
    let spec = ChartSpec::new()
        .with_x_axis(AxisSpec::value())
        .with_y_axis(AxisSpec::value())
        .with_series(SeriesSpec::new(
            ChartType::Scatter,
            [(-10.0, -10.0), (20.0, 20.0)],
        ));
    let grid = laid_out(spec);
    let cartesian = grid.cartesian(0, 0).unwrap();
    let (x, y) = (cartesian.x_axis(), cartesian.y_axis());
    assert_eq!(y.scale().extent(), (-10.0, 20.0));

    assert_close(y.other_coord(), x.data_to_coord(0.0), "y line sits on x = 0");
    assert!(
        (y.other_coord() - grid.x()).abs() > 1.0,
        "y line left the grid edge"
    );
    assert_close(x.other_coord(), y.data_to_coord(0.0), "x line sits on y = 0");
    assert_close(x.other_coord(), 380.0, "two thirds down the reversed y axis");
}

#[test]
fn on_zero_is_ignored_against_category_companion_or_when_disabled() {
    let spec = ChartSpec::new()
        .with_x_axis(days())
        .with_y_axis(AxisSpec::value())
        .with_series(SeriesSpec::new(ChartType::Line, [-5.0, 5.0, 10.0]));
    let grid = laid_out(spec);
    let cartesian = grid.cartesian(0, 0).unwrap();
    assert_close(cartesian.y_axis().other_coord(), 80.0, "y stays on the left edge");
    let zero = cartesian.y_axis().data_to_coord(0.0);
    assert_close(cartesian.x_axis().other_coord(), zero, "x follows y = 0");

    let spec = ChartSpec::new()
        .with_x_axis(days().with_on_zero(false))
        .with_y_axis(AxisSpec::value())
        .with_series(SeriesSpec::new(ChartType::Line, [-5.0, 5.0, 10.0]));
    let grid = laid_out(spec);
    assert_close(
        grid.cartesian(0, 0).unwrap().x_axis().other_coord(),
        540.0,
        "x stays on the bottom edge",
    );
}

#[test]
fn category_points_round_trip_through_both_axes() {
    let data = [1.0, 2.0, 3.0];
    let spec = ChartSpec::new()
        .with_x_axis(days())
        .with_y_axis(AxisSpec::value())
        .with_series(SeriesSpec::new(ChartType::Line, data));
    let grid = laid_out(spec);
    let cartesian = grid.cartesian(0, 0).unwrap();
    let items: Vec<DataItem> = data.iter().copied().map(DataItem::from).collect();
    let points = grid.data_to_coords(&items, None, None).unwrap();
    for (i, (point, value)) in points.iter().zip(data).enumerate() {
        let expected = Point::new(
            cartesian.x_axis().data_to_coord(i as f64),
            cartesian.y_axis().data_to_coord(value),
        );
        assert_point_close(point.unwrap(), expected, "category x, value y");
    }
}

#[test]
fn swapped_axes_still_report_screen_x_first() {
    let spec = ChartSpec::new()
        .with_x_axis(days().with_position(AxisPosition::Left))
        .with_y_axis(AxisSpec::value())
        .with_series(SeriesSpec::new(ChartType::Bar, [1.0, 2.0, 3.0]));
    let grid = laid_out(spec);
    let cartesian = grid.cartesian(0, 0).unwrap();
    assert_eq!(cartesian.y_axis().position(), AxisPosition::Bottom);
    assert_eq!(cartesian.horizontal_axis().dim(), AxisDim::Y);

    let item = DataItem::from(2.0);
    let point = grid
        .data_to_coord(&item, 1, cartesian.id())
        .unwrap()
        .unwrap();
    let expected = Point::new(
        cartesian.y_axis().data_to_coord(2.0),
        cartesian.x_axis().data_to_coord(1.0),
    );
    assert_point_close(point, expected, "value on screen x, category on screen y");
}

#[test]
fn value_value_mode_maps_pairs_and_skips_scalars() {
    let spec = ChartSpec::new()
        .with_x_axis(AxisSpec::value())
        .with_y_axis(AxisSpec::value())
        .with_series(SeriesSpec::new(ChartType::Scatter, [(0.0, 0.0), (10.0, 50.0)]));
    let grid = laid_out(spec);
    let cartesian = grid.cartesian(0, 0).unwrap();
    let items = vec![
        DataItem::Pair(10.0, 50.0),
        DataItem::Scalar(3.0),
        DataItem::Missing,
        DataItem::Pair(f64::NAN, 1.0),
    ];
    let points = grid.data_to_coords(&items, Some(0), Some(0)).unwrap();
    assert_eq!(points.len(), items.len(), "one entry per item");
    assert_point_close(
        points[0].unwrap(),
        Point::new(
            cartesian.x_axis().data_to_coord(10.0),
            cartesian.y_axis().data_to_coord(50.0),
        ),
        "pair maps x and y independently",
    );
    assert_eq!(&points[1..], &[None, None, None]);
}

#[test]
fn pairs_on_a_category_cartesian_use_the_value_component() {
    let spec = ChartSpec::new()
        .with_x_axis(days())
        .with_y_axis(AxisSpec::value())
        .with_series(SeriesSpec::new(ChartType::Line, [(0.0, 40.0), (1.0, 80.0)]));
    let grid = laid_out(spec);
    let extent = grid.cartesian(0, 0).unwrap().y_axis().scale().extent();
    assert!(extent.0 <= 40.0 && extent.1 >= 80.0, "y extent {extent:?}");
    assert!(extent.1 < 100.0, "x components must not feed the value axis");
}

#[test]
fn refresh_is_skipped_when_nothing_changed() {
    let spec = ChartSpec::new()
        .with_x_axis(days())
        .with_y_axis(AxisSpec::value())
        .with_series(SeriesSpec::new(ChartType::Bar, [1.0, 2.0, 3.0]).with_stack("s"));
    let mut grid = laid_out(spec.clone());
    let rect = grid.rect();
    let cartesians = grid.all_cartesians().to_vec();

    assert!(!grid.refresh(VIEWPORT), "same viewport, same spec");
    assert!(!grid.set_spec(spec), "identical spec is not a change");
    assert!(!grid.refresh(VIEWPORT), "still nothing to do");
    assert_eq!(grid.rect(), rect);
    assert_eq!(grid.all_cartesians(), cartesians.as_slice());

    assert!(grid.refresh(Size::new(1000.0, 600.0)), "viewport change relayouts");
    assert_close(grid.width(), 840.0, "new width");
}

#[test]
fn new_spec_triggers_relayout() {
    let mut grid = laid_out(ChartSpec::new().with_x_axis(days()).with_y_axis(AxisSpec::value()));
    let changed = ChartSpec::new()
        .with_grid(GridSpec::new().with_offsets(10.0, 10.0, 10.0, 10.0))
        .with_x_axis(days())
        .with_y_axis(AxisSpec::value());
    assert!(grid.set_spec(changed));
    assert!(grid.refresh(VIEWPORT));
    assert_eq!(grid.rect(), Rect::new(10.0, 10.0, 790.0, 590.0));
}

#[test]
fn every_axis_pair_gets_a_cartesian() {
    let spec = ChartSpec::new()
        .with_x_axis(days())
        .with_x_axis(AxisSpec::value())
        .with_y_axis(AxisSpec::value())
        .with_y_axis(AxisSpec::value());
    let grid = laid_out(spec);
    assert_eq!(grid.all_cartesians().len(), 4);
    assert_eq!(grid.axes().count(), 8);
    for cartesian in grid.all_cartesians() {
        for axis in cartesian.axes() {
            let other = grid.other_axis(axis).unwrap();
            assert_eq!(other.dim(), axis.dim().other());
            assert_eq!(other.cartesian(), cartesian.id());
            assert_eq!(grid.other_axis(other).unwrap(), axis, "companion is symmetric");
        }
    }
}

#[test]
fn axis_configs_keep_their_side_in_every_cartesian() {
    let spec = ChartSpec::new()
        .with_x_axis(days())
        .with_x_axis(days())
        .with_y_axis(AxisSpec::value())
        .with_y_axis(AxisSpec::value());
    let grid = laid_out(spec);
    for x_index in 0..2 {
        let c0 = grid.cartesian(x_index, 0).unwrap();
        let c1 = grid.cartesian(x_index, 1).unwrap();
        assert_eq!(c0.y_axis().position(), AxisPosition::Left);
        assert_eq!(c1.y_axis().position(), AxisPosition::Right);
    }
    assert_eq!(
        grid.cartesian(0, 0).unwrap().x_axis().position(),
        AxisPosition::Bottom
    );
    assert_eq!(
        grid.cartesian(1, 0).unwrap().x_axis().position(),
        AxisPosition::Top
    );
}

#[test]
fn third_axis_on_a_side_is_offset_outward() {
    let spec = ChartSpec::new()
        .with_x_axis(days())
        .with_y_axis(AxisSpec::value())
        .with_y_axis(AxisSpec::value())
        .with_y_axis(AxisSpec::value());
    let grid = laid_out(spec);
    let third = grid.cartesian(0, 2).unwrap().y_axis();
    assert_eq!(third.position(), AxisPosition::Left);
    assert_close(third.other_coord(), 80.0 - 30.0, "one axis offset left of the grid");
    assert_eq!(grid.bbox(), Rect::new(50.0, 60.0, 720.0, 540.0));
}

#[test]
fn series_on_missing_axis_pair_are_skipped() {
    let spec = ChartSpec::new()
        .with_x_axis(days())
        .with_y_axis(AxisSpec::value())
        .with_series(SeriesSpec::new(ChartType::Bar, [100.0]).with_axes(0, 5))
        .with_series(SeriesSpec::new(ChartType::Bar, [1.0, 2.0]));
    let grid = laid_out(spec);
    let cartesian = grid.cartesian(0, 0).unwrap();
    assert_eq!(cartesian.series(), &[1]);
    let series = grid.cartesian_series(cartesian.id()).unwrap();
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].0, 1);
    assert!(
        cartesian.y_axis().scale().extent().1 < 100.0,
        "skipped series does not feed extents"
    );
}

#[test]
fn unknown_axis_pair_is_an_error() {
    let grid = laid_out(ChartSpec::new().with_x_axis(days()).with_y_axis(AxisSpec::value()));
    assert_eq!(
        grid.cartesian(1, 0).unwrap_err(),
        GridError::UnknownCartesian {
            x_index: 1,
            y_index: 0
        }
    );
    assert!(matches!(
        grid.data_to_coords(&[DataItem::from(1.0)], None, Some(3)),
        Err(GridError::UnknownCartesian { y_index: 3, .. })
    ));
}

#[test]
fn queries_before_refresh_fail() {
    let grid = Grid::new(ChartSpec::new().with_x_axis(days()).with_y_axis(AxisSpec::value()));
    assert_eq!(grid.cartesian(0, 0).unwrap_err(), GridError::NotLaidOut);
    assert_eq!(grid.background_request().unwrap_err(), GridError::NotLaidOut);
    assert!(grid.all_cartesians().is_empty());
}

#[derive(Debug, Default)]
struct Recorder {
    requests: Vec<RectRequest>,
}

impl Surface for Recorder {
    fn draw_rect(&mut self, request: &RectRequest) {
        self.requests.push(request.clone());
    }
}

#[test]
fn background_origin_is_snapped_but_rect_is_not() {
    let spec = ChartSpec::new().with_grid(
        GridSpec::new()
            .with_offsets(80.3, 60.7, 80.0, 60.0)
            .with_background(css::WHITE),
    );
    let mut grid = Grid::new(spec);
    grid.refresh(VIEWPORT);
    assert_close(grid.x(), 80.3, "layout rect is not nudged");

    let mut surface = Recorder::default();
    grid.draw_background(&mut surface).unwrap();
    let request = &surface.requests[0];
    assert_close(request.rect.x0, 80.5, "odd border snaps to pixel center");
    assert_close(request.rect.y0, 60.5, "odd border snaps to pixel center");
    assert_close(request.rect.width(), grid.width(), "size is preserved");
    assert_eq!(request.z_index, PLOT_BACKGROUND);
    assert!(request.stroke.is_some(), "default border is drawn");

    let spec = ChartSpec::new().with_grid(GridSpec::new().with_border(0.0, css::BLACK));
    let mut grid = Grid::new(spec);
    grid.refresh(VIEWPORT);
    assert!(grid.background_request().unwrap().stroke.is_none(), "no border");
}

#[test]
fn defaults_resolve_item_then_type_then_global() {
    let mut defaults = Defaults::default();
    defaults.value_axis.on_zero = Some(false);
    let defaults = defaults.with_series_defaults(
        ChartType::Scatter,
        SeriesDefaults {
            coordinate_system: Some(CoordinateSystem::Other("polar".into())),
            ..SeriesDefaults::default()
        },
    );
    let spec = ChartSpec::new()
        .with_x_axis(days())
        .with_y_axis(AxisSpec::value())
        .with_y_axis(AxisSpec::value().with_on_zero(true))
        .with_series(SeriesSpec::new(ChartType::Scatter, [1.0]))
        .with_series(
            SeriesSpec::new(ChartType::Scatter, [2.0])
                .with_coordinate_system(CoordinateSystem::Cartesian),
        )
        .with_series(SeriesSpec::new(ChartType::Pie, [3.0]))
        .with_defaults(defaults);
    let grid = laid_out(spec);

    assert!(!grid.cartesian(0, 0).unwrap().y_axis().on_zero(), "type default");
    assert!(grid.cartesian(0, 1).unwrap().y_axis().on_zero(), "item value wins");
    assert!(grid.cartesian(0, 0).unwrap().x_axis().on_zero(), "global default");
    assert_eq!(
        grid.cartesian(0, 0).unwrap().series(),
        &[1],
        "only the scatter that opted back into the grid is assigned"
    );
}

#[test]
fn all_positive_values_keep_the_category_axis_on_the_grid_edge() {
    let spec = ChartSpec::new()
        .with_x_axis(days())
        .with_y_axis(AxisSpec::value())
        .with_series(SeriesSpec::new(ChartType::Bar, [100.0, 110.0, 120.0]));
    let grid = laid_out(spec);
    let cartesian = grid.cartesian(0, 0).unwrap();
    assert_eq!(cartesian.y_axis().scale().extent(), (100.0, 120.0));
    assert_close(
        cartesian.x_axis().other_coord(),
        grid.y_end(),
        "zero is off the y extent, so x stays at the bottom",
    );
    assert_eq!(grid.bbox(), grid.rect());
}

#[test]
fn all_negative_values_keep_the_category_axis_on_the_grid_edge() {
    let spec = ChartSpec::new()
        .with_x_axis(days())
        .with_y_axis(AxisSpec::value())
        .with_series(SeriesSpec::new(ChartType::Line, [-30.0, -25.0, -12.0]));
    let grid = laid_out(spec);
    let x = grid.cartesian(0, 0).unwrap().x_axis();
    assert_close(x.other_coord(), 540.0, "x stays at the bottom edge");
}

#[test]
fn time_and_log_axes_use_interval_scales() {
    let spec = ChartSpec::new()
        .with_x_axis(AxisSpec::new().with_kind(AxisKind::Time))
        .with_y_axis(AxisSpec::new().with_kind(AxisKind::Log))
        .with_series(SeriesSpec::new(ChartType::Scatter, [(0.0, 1.0), (290.0, 8.0)]));
    let grid = laid_out(spec);
    let cartesian = grid.cartesian(0, 0).unwrap();
    assert_eq!(cartesian.x_axis().scale().kind(), ScaleKind::Interval);
    assert_eq!(cartesian.y_axis().scale().kind(), ScaleKind::Interval);
    assert!(cartesian.category_axis().is_none(), "pairs map on both axes");

    let AxisScale::Interval(time) = cartesian.x_axis().scale() else {
        panic!("time axis has an interval scale");
    };
    assert_close(time.interval(), 60.0, "time steps snap to whole minutes");
    assert_eq!(time.extent(), (0.0, 300.0));
}

fn collected(spec: &ChartSpec) -> Vec<CoordData> {
    let grid = laid_out(spec.clone());
    let mut cartesians = grid.all_cartesians().to_vec();
    let index: HashMap<CartesianId, usize> = cartesians
        .iter()
        .enumerate()
        .map(|(i, c)| (c.id(), i))
        .collect();
    aggregate::collect(&mut cartesians, &index, &spec.series, &spec.defaults)
}

#[test]
fn missing_items_are_skipped_while_stacking() {
    let hole = DataItem::Record {
        value: DataValue::Missing,
        name: Some("hole".into()),
    };
    let spec = ChartSpec::new()
        .with_x_axis(days())
        .with_y_axis(AxisSpec::value())
        .with_series(
            SeriesSpec::new(
                ChartType::Bar,
                [DataItem::from(1.0), DataItem::Missing, DataItem::from(3.0)],
            )
            .with_stack("total"),
        )
        .with_series(SeriesSpec::new(ChartType::Bar, [4.0, 5.0, 6.0]).with_stack("total"))
        .with_series(
            SeriesSpec::new(
                ChartType::Bar,
                [DataItem::from(f64::NAN), hole, DataItem::Missing],
            )
            .with_stack("total"),
        );
    let data = collected(&spec);
    assert_eq!(data.len(), 1, "one chart type on one Cartesian");
    assert!(data[0].x.is_empty(), "category axis collects nothing");
    assert_eq!(data[0].y, vec![1.0, 3.0, 5.0, 5.0, 9.0]);

    let grid = laid_out(spec);
    assert_eq!(
        grid.cartesian(0, 0).unwrap().y_axis().scale().extent(),
        (0.0, 10.0)
    );
}

#[test]
fn all_missing_series_keeps_the_default_extent() {
    let spec = ChartSpec::new()
        .with_x_axis(days())
        .with_y_axis(AxisSpec::value())
        .with_series(SeriesSpec::new(
            ChartType::Line,
            [DataItem::Missing, DataItem::from(f64::NAN)],
        ));
    assert!(collected(&spec)[0].y.is_empty());

    let grid = laid_out(spec);
    let y = grid.cartesian(0, 0).unwrap().y_axis();
    let AxisScale::Interval(scale) = y.scale() else {
        panic!("value axis has an interval scale");
    };
    assert!(!scale.has_data());
    let (min, max) = scale.extent();
    assert_close(min, 0.0, "default min");
    assert_close(max, 1.0, "default max");
}

#[test]
fn empty_series_is_assigned_without_feeding_extents() {
    let spec = ChartSpec::new()
        .with_x_axis(days())
        .with_y_axis(AxisSpec::value())
        .with_series(SeriesSpec::new(ChartType::Bar, Vec::<f64>::new()));
    let data = collected(&spec);
    assert_eq!(data.len(), 1);
    assert!(data[0].x.is_empty() && data[0].y.is_empty());

    let grid = laid_out(spec);
    let cartesian = grid.cartesian(0, 0).unwrap();
    assert_eq!(cartesian.series(), &[0]);
    let (min, max) = cartesian.y_axis().scale().extent();
    assert_close(min, 0.0, "default min");
    assert_close(max, 1.0, "default max");
}
