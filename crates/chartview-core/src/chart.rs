// File: crates/chartview-core/src/chart.rs
// Summary: Chart aggregation, configuration surface, grid layout and draw pass.

use std::sync::Arc;

use log::{debug, warn};

use crate::error::ChartResult;
use crate::grid::{compute_ticks, GridPolicy, TickSet};
use crate::label::{LabelSource, PlacedLabel, Side};
use crate::render::SeriesRenderer;
use crate::scale::Projection;
use crate::series::Series;
use crate::theme::Theme;
use crate::types::{Color, Insets, RectI32};

/// Aggregate value rectangle over every series, with vertical padding so
/// rendered lines never touch the grid's top and bottom edges.
///
/// Emptiness is an explicit flag; extrema fields are only meaningful when
/// `is_empty()` is false.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueBounds {
    empty: bool,
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

impl ValueBounds {
    pub const fn empty() -> Self {
        Self { empty: true, min_x: 0.0, max_x: 0.0, min_y: 0.0, max_y: 0.0 }
    }

    /// Widen the box to include `(x, y)`, then pad vertically by 5% of the
    /// current height. The padding is applied on every extension.
    pub fn extend(&mut self, x: f64, y: f64) {
        if self.empty {
            self.empty = false;
            self.min_x = x;
            self.max_x = x;
            self.min_y = y;
            self.max_y = y;
        } else {
            if x < self.min_x { self.min_x = x; }
            if x > self.max_x { self.max_x = x; }
            if y < self.min_y { self.min_y = y; }
            if y > self.max_y { self.max_y = y; }
        }

        let y_padding = 0.05 * (self.max_y - self.min_y);
        self.min_y -= y_padding;
        self.max_y += y_padding;
    }

    pub fn is_empty(&self) -> bool { self.empty }
    pub fn min_x(&self) -> f64 { self.min_x }
    pub fn max_x(&self) -> f64 { self.max_x }
    pub fn min_y(&self) -> f64 { self.min_y }
    pub fn max_y(&self) -> f64 { self.max_y }

    pub fn span_x(&self) -> f64 {
        if self.empty { 0.0 } else { self.max_x - self.min_x }
    }

    pub fn span_y(&self) -> f64 {
        if self.empty { 0.0 } else { self.max_y - self.min_y }
    }
}

/// Host-settable configuration, consumed read-only by the draw pass.
/// A fixed gap > 0 takes precedence over the line count on that axis.
#[derive(Clone, Copy, Debug)]
pub struct ChartConfig {
    pub grid_line_color: Color,
    pub grid_line_width: i32,
    /// Count of vertical lines between the bounds (X axis ticks).
    pub grid_lines_horizontal: usize,
    /// Count of horizontal lines between the bounds (Y axis ticks).
    pub grid_lines_vertical: usize,
    pub grid_fixed_x_gap: f64,
    pub grid_fixed_y_gap: f64,
    pub label_text_color: Color,
    pub label_text_size: f32,
    /// Label gutter sizes reserved around the plotting area.
    pub gutters: Insets,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            grid_line_color: Color::BLACK,
            grid_line_width: 1,
            grid_lines_horizontal: 5,
            grid_lines_vertical: 5,
            grid_fixed_x_gap: -1.0, // disabled
            grid_fixed_y_gap: -1.0, // disabled
            label_text_color: Color::BLACK,
            label_text_size: 16.0,
            gutters: Insets::default(),
        }
    }
}

impl ChartConfig {
    /// Apply a theme's colors, leaving the layout settings untouched.
    pub fn themed(mut self, theme: &Theme) -> Self {
        self.grid_line_color = theme.grid_line;
        self.label_text_color = theme.label_text;
        self
    }

    pub fn x_policy(&self) -> GridPolicy {
        GridPolicy::resolve(self.grid_lines_horizontal, self.grid_fixed_x_gap)
    }

    pub fn y_policy(&self) -> GridPolicy {
        GridPolicy::resolve(self.grid_lines_vertical, self.grid_fixed_y_gap)
    }
}

/// One tick resolved to its pixel position along the axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickMark {
    pub value: f64,
    pub px: f32,
}

/// The drawable plan for one axis: labeled tick marks plus whether the
/// grid edges get enclosing lines of their own.
#[derive(Clone, Debug)]
pub struct AxisPlan {
    pub marks: Vec<TickMark>,
    pub draw_edges: bool,
}

/// Tick positions for both axes over a concrete plotting rectangle.
/// Recomputed per draw pass; not persisted.
#[derive(Clone, Debug)]
pub struct GridLayout {
    pub bounds: RectI32,
    pub x: AxisPlan,
    pub y: AxisPlan,
}

struct SeriesEntry<T: ?Sized> {
    data: Arc<Series>,
    renderer: Box<dyn SeriesRenderer<T>>,
}

/// The chart: a set of series with their renderers, the aggregate value
/// bounds, label sources per side, and the grid configuration.
///
/// `T` is the opaque render target handed through to the renderers (an
/// SVG surface, a raster canvas, ...). The chart itself never draws; it
/// computes layouts and runs the per-point draw loop.
pub struct Chart<T: ?Sized> {
    entries: Vec<SeriesEntry<T>>,
    pub config: ChartConfig,
    bounds: ValueBounds,
    left_labels: Option<Box<dyn LabelSource>>,
    top_labels: Option<Box<dyn LabelSource>>,
    right_labels: Option<Box<dyn LabelSource>>,
    bottom_labels: Option<Box<dyn LabelSource>>,
}

impl<T: ?Sized> Chart<T> {
    pub fn new() -> Self {
        Self::with_config(ChartConfig::default())
    }

    pub fn with_config(config: ChartConfig) -> Self {
        Self {
            entries: Vec::new(),
            config,
            bounds: ValueBounds::empty(),
            left_labels: None,
            top_labels: None,
            right_labels: None,
            bottom_labels: None,
        }
    }

    /// Add a series together with the renderer that draws its points.
    pub fn add_series(&mut self, data: Arc<Series>, renderer: Box<dyn SeriesRenderer<T>>) {
        self.entries.push(SeriesEntry { data, renderer });
        self.reset_range();
    }

    /// Remove all series from the chart.
    pub fn clear_series(&mut self) {
        self.entries.clear();
        self.reset_range();
    }

    pub fn series_count(&self) -> usize {
        self.entries.len()
    }

    pub fn set_label_source(&mut self, side: Side, source: Box<dyn LabelSource>) {
        match side {
            Side::Left => self.left_labels = Some(source),
            Side::Top => self.top_labels = Some(source),
            Side::Right => self.right_labels = Some(source),
            Side::Bottom => self.bottom_labels = Some(source),
        }
    }

    fn label_source(&self, side: Side) -> Option<&dyn LabelSource> {
        match side {
            Side::Left => self.left_labels.as_deref(),
            Side::Top => self.top_labels.as_deref(),
            Side::Right => self.right_labels.as_deref(),
            Side::Bottom => self.bottom_labels.as_deref(),
        }
    }

    /// Recompute the aggregate bounds from every series' current range.
    /// Empty series are skipped so they cannot distort the box.
    pub fn reset_range(&mut self) {
        let mut bounds = ValueBounds::empty();
        for entry in &self.entries {
            let range = entry.data.range();
            if range.is_empty() {
                continue;
            }
            bounds.extend(range.min_x(), range.min_y());
            bounds.extend(range.max_x(), range.max_y());
        }
        self.bounds = bounds;
        if bounds.is_empty() {
            debug!("new chart range: empty");
        } else {
            debug!(
                "new chart range: [{},{}][{},{}]",
                bounds.min_x, bounds.min_y, bounds.max_x, bounds.max_y
            );
        }
    }

    pub fn value_bounds(&self) -> ValueBounds {
        self.bounds
    }

    /// Pixel rectangle of the plotting area once the label gutters and the
    /// grid line width are carved out of `width` x `height`.
    pub fn grid_bounds(&self, width: i32, height: i32) -> RectI32 {
        let line = self.config.grid_line_width;
        let gutters = self.config.gutters;
        RectI32::from_ltrb(
            gutters.left as i32 + line - 1,
            gutters.top as i32 + line - 1,
            width - gutters.right as i32 - line,
            height - gutters.bottom as i32 - line,
        )
    }

    /// Compute the tick layout for both axes over the plotting rectangle.
    ///
    /// Fails on empty bounds, zero value extent, or an invalid fixed gap;
    /// callers that prefer to skip the grid should treat the error as
    /// "nothing to draw" (see `draw`).
    pub fn grid_layout(&self, grid: RectI32) -> ChartResult<GridLayout> {
        let proj = Projection::new(grid, &self.bounds)?;
        let x_ticks = compute_ticks(self.config.x_policy(), self.bounds.min_x, self.bounds.max_x)?;
        let y_ticks = compute_ticks(self.config.y_policy(), self.bounds.min_y, self.bounds.max_y)?;
        Ok(GridLayout {
            bounds: grid,
            x: axis_plan(&x_ticks, |v| proj.x_to_px(v)),
            y: axis_plan(&y_ticks, |v| proj.y_to_px(v)),
        })
    }

    /// Resolve the labels for one side against a computed layout, in tick
    /// order. `None` when no label source is configured for that side.
    /// Lines and labels consume the same ticks by construction.
    pub fn labels(&self, side: Side, layout: &GridLayout) -> Option<Vec<PlacedLabel>> {
        let source = self.label_source(side)?;
        let plan = if side.is_vertical() { &layout.y } else { &layout.x };
        Some(
            plan.marks
                .iter()
                .map(|mark| PlacedLabel {
                    value: mark.value,
                    px: mark.px,
                    text: source.label_for(mark.value),
                })
                .collect(),
        )
    }

    /// Run the per-point draw loop over every series.
    ///
    /// Each series' renderer receives its points in x order followed by the
    /// finish hook. Degenerate states (no data, zero value extent) skip the
    /// pass with a warning instead of failing the host's frame.
    pub fn draw(&mut self, target: &mut T, grid: RectI32) {
        let proj = match Projection::new(grid, &self.bounds) {
            Ok(proj) => proj,
            Err(err) => {
                warn!("skipping series draw pass: {err}");
                return;
            }
        };
        for entry in &mut self.entries {
            let SeriesEntry { data, renderer } = entry;
            let style = *data.style();
            data.for_each_point(|p| renderer.draw_point(target, p, &style, &proj));
            renderer.finish(target, &style);
        }
    }
}

impl<T: ?Sized> Default for Chart<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn axis_plan(ticks: &TickSet, to_px: impl Fn(f64) -> f32) -> AxisPlan {
    AxisPlan {
        marks: ticks
            .ticks
            .iter()
            .map(|&value| TickMark { value, px: to_px(value) })
            .collect(),
        draw_edges: ticks.draw_edges,
    }
}
