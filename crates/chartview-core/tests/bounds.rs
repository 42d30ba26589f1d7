// File: crates/chartview-core/tests/bounds.rs
// Purpose: Validate aggregate value bounds, gutter arithmetic, projection guards,
// and the draw pass over mixed series.

use std::sync::Arc;

use chartview_core::{
    Chart, ChartError, Insets, Point, Projection, RectI32, Series, SeriesRenderer, SeriesStyle,
    ValueBounds,
};

struct NullRenderer;

impl SeriesRenderer<()> for NullRenderer {
    fn draw_point(&mut self, _: &mut (), _: Point, _: &SeriesStyle, _: &Projection) {}
}

/// Records the x of every drawn point into the target.
struct RecordingRenderer;

impl SeriesRenderer<Vec<f64>> for RecordingRenderer {
    fn draw_point(&mut self, target: &mut Vec<f64>, point: Point, _: &SeriesStyle, _: &Projection) {
        target.push(point.x);
    }
}

fn pts(v: &[(f64, f64)]) -> Vec<Point> {
    v.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn extend_pads_vertically_on_each_call() {
    let mut bounds = ValueBounds::empty();
    assert!(bounds.is_empty());

    bounds.extend(0.0, 0.0);
    assert!(!bounds.is_empty());
    assert_eq!(bounds.span_y(), 0.0);

    bounds.extend(1.0, 10.0);
    assert!(close(bounds.min_y(), -0.5));
    assert!(close(bounds.max_y(), 10.5));

    // An interior point still re-pads by 5% of the current height.
    bounds.extend(2.0, 5.0);
    assert!(close(bounds.min_y(), -1.05));
    assert!(close(bounds.max_y(), 11.05));
    assert_eq!(bounds.min_x(), 0.0);
    assert_eq!(bounds.max_x(), 2.0);
}

#[test]
fn aggregation_skips_empty_series() {
    let mut chart: Chart<()> = Chart::new();
    chart.add_series(Arc::new(Series::new()), Box::new(NullRenderer));
    chart.add_series(
        Arc::new(Series::with_points(pts(&[(0.0, 0.0), (10.0, 10.0)]))),
        Box::new(NullRenderer),
    );

    let bounds = chart.value_bounds();
    assert_eq!(bounds.min_x(), 0.0);
    assert_eq!(bounds.max_x(), 10.0);
    assert!(close(bounds.min_y(), -0.5));
    assert!(close(bounds.max_y(), 10.5));
}

#[test]
fn aggregation_covers_all_series() {
    let mut chart: Chart<()> = Chart::new();
    chart.add_series(
        Arc::new(Series::with_points(pts(&[(0.0, 0.0), (10.0, 10.0)]))),
        Box::new(NullRenderer),
    );
    chart.add_series(
        Arc::new(Series::with_points(pts(&[(5.0, -5.0), (20.0, 5.0)]))),
        Box::new(NullRenderer),
    );

    let bounds = chart.value_bounds();
    assert_eq!(bounds.min_x(), 0.0);
    assert_eq!(bounds.max_x(), 20.0);
    // min of mins / max of maxes, padded per extension.
    assert!(close(bounds.min_y(), -6.6275));
    assert!(close(bounds.max_y(), 12.1275));
}

#[test]
fn padding_keeps_series_extrema_off_the_edges() {
    let mut chart: Chart<()> = Chart::new();
    let series = Arc::new(Series::with_points(pts(&[(0.0, 1.0), (4.0, 9.0)])));
    chart.add_series(Arc::clone(&series), Box::new(NullRenderer));

    let bounds = chart.value_bounds();
    let range = series.range();
    assert!(bounds.min_y() < range.min_y());
    assert!(bounds.max_y() > range.max_y());
}

#[test]
fn clear_series_empties_the_bounds() {
    let mut chart: Chart<()> = Chart::new();
    chart.add_series(
        Arc::new(Series::with_points(pts(&[(0.0, 0.0), (1.0, 1.0)]))),
        Box::new(NullRenderer),
    );
    assert!(!chart.value_bounds().is_empty());

    chart.clear_series();
    assert_eq!(chart.series_count(), 0);
    assert!(chart.value_bounds().is_empty());
}

#[test]
fn grid_bounds_carves_out_gutters_and_line_width() {
    let mut chart: Chart<()> = Chart::new();
    chart.config.gutters = Insets::new(30, 20, 10, 40);
    chart.config.grid_line_width = 2;

    let grid = chart.grid_bounds(500, 400);
    assert_eq!(grid, RectI32::from_ltrb(31, 11, 478, 358));
}

#[test]
fn projection_maps_bounds_to_grid_edges() {
    let mut bounds = ValueBounds::empty();
    bounds.extend(0.0, 0.0);
    bounds.extend(10.0, 20.0); // y padded to -1..21

    let grid = RectI32::from_ltrb(0, 0, 100, 220);
    let proj = Projection::new(grid, &bounds).unwrap();

    assert_eq!(proj.scale_x(), 10.0);
    assert_eq!(proj.scale_y(), 10.0);
    assert_eq!(proj.x_to_px(0.0), 0.0);
    assert_eq!(proj.x_to_px(5.0), 50.0);
    assert_eq!(proj.x_to_px(10.0), 100.0);
    // Minimum value sits at the grid bottom; maximum at the top.
    assert_eq!(proj.y_to_px(-1.0), 220.0);
    assert_eq!(proj.y_to_px(21.0), 0.0);
    assert_eq!(proj.y_to_px(10.0), 110.0);
}

#[test]
fn projection_rejects_empty_and_degenerate_bounds() {
    let grid = RectI32::from_ltrb(0, 0, 100, 100);

    assert!(matches!(
        Projection::new(grid, &ValueBounds::empty()),
        Err(ChartError::EmptyRange)
    ));

    let mut flat_x = ValueBounds::empty();
    flat_x.extend(3.0, 0.0);
    flat_x.extend(3.0, 10.0);
    assert!(matches!(
        Projection::new(grid, &flat_x),
        Err(ChartError::ZeroValueExtent { axis: "x" })
    ));

    let mut flat_y = ValueBounds::empty();
    flat_y.extend(0.0, 5.0);
    flat_y.extend(10.0, 5.0);
    assert!(matches!(
        Projection::new(grid, &flat_y),
        Err(ChartError::ZeroValueExtent { axis: "y" })
    ));
}

#[test]
fn grid_layout_honors_per_axis_policies() {
    let mut chart: Chart<()> = Chart::new();
    chart.add_series(
        Arc::new(Series::with_points(pts(&[(0.0, 0.0), (10.0, 10.0)]))),
        Box::new(NullRenderer),
    );
    chart.config.grid_fixed_y_gap = 2.0;

    let layout = chart.grid_layout(RectI32::from_ltrb(0, 0, 100, 200)).unwrap();

    // X keeps the default fixed count of 5: five interior plus both bounds.
    assert_eq!(layout.x.marks.len(), 7);
    assert!(!layout.x.draw_edges);
    assert_eq!(layout.x.marks[0].px, 0.0);
    assert_eq!(layout.x.marks[6].px, 100.0);

    // Y runs fixed-gap over the padded bounds -0.5..10.5.
    assert!(layout.y.draw_edges);
    let values: Vec<f64> = layout.y.marks.iter().map(|m| m.value).collect();
    assert_eq!(values, vec![1.5, 3.5, 5.5, 7.5, 9.5]);
}

#[test]
fn draw_visits_points_in_x_order_per_series() {
    let mut chart: Chart<Vec<f64>> = Chart::new();
    let series = Arc::new(Series::new());
    series.add_point(Point::new(2.0, 1.0));
    series.add_point(Point::new(0.0, 2.0));
    series.add_point(Point::new(1.0, 3.0));
    chart.add_series(series, Box::new(RecordingRenderer));

    let mut drawn = Vec::new();
    chart.draw(&mut drawn, RectI32::from_ltrb(0, 0, 100, 100));
    assert_eq!(drawn, vec![0.0, 1.0, 2.0]);
}

#[test]
fn draw_with_no_data_is_a_noop() {
    let mut chart: Chart<Vec<f64>> = Chart::new();
    let mut drawn = Vec::new();
    chart.draw(&mut drawn, RectI32::from_ltrb(0, 0, 100, 100));
    assert!(drawn.is_empty());

    // A single point gives a zero extent; the pass is skipped, not a crash.
    chart.add_series(
        Arc::new(Series::with_points(pts(&[(1.0, 1.0)]))),
        Box::new(RecordingRenderer),
    );
    chart.draw(&mut drawn, RectI32::from_ltrb(0, 0, 100, 100));
    assert!(drawn.is_empty());
}
