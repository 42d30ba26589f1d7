// File: crates/chartview-svg/src/lib.rs
// Summary: SVG renderer backend; per-kind series renderers and a full-frame pass.

use std::fmt::Write as _;

use log::warn;

use chartview_core::{
    Chart, ChartConfig, Color, GridLayout, Point, Projection, SeriesRenderer, SeriesStyle, Side,
};

/// Render target accumulating SVG elements into a string.
pub struct SvgSurface {
    width: i32,
    height: i32,
    body: String,
}

impl SvgSurface {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height, body: String::new() }
    }

    pub fn fill(&mut self, color: Color) {
        let _ = writeln!(
            self.body,
            r#"  <rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
            self.width,
            self.height,
            color.to_hex()
        );
    }

    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Color, width: f32) {
        let _ = writeln!(
            self.body,
            r#"  <line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{}" stroke-width="{width}"/>"#,
            color.to_hex()
        );
    }

    pub fn polyline(&mut self, points: &[(f32, f32)], color: Color, width: f32) {
        let mut coords = String::with_capacity(points.len() * 12);
        for &(x, y) in points {
            let _ = write!(coords, "{x},{y} ");
        }
        let _ = writeln!(
            self.body,
            r#"  <polyline points="{}" fill="none" stroke="{}" stroke-width="{width}"/>"#,
            coords.trim_end(),
            color.to_hex()
        );
    }

    pub fn circle(&mut self, cx: f32, cy: f32, r: f32, color: Color) {
        let _ = writeln!(
            self.body,
            r#"  <circle cx="{cx}" cy="{cy}" r="{r}" fill="{}"/>"#,
            color.to_hex()
        );
    }

    pub fn rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        let _ = writeln!(
            self.body,
            r#"  <rect x="{x}" y="{y}" width="{w}" height="{h}" fill="{}"/>"#,
            color.to_hex()
        );
    }

    pub fn text(&mut self, x: f32, y: f32, size: f32, color: Color, content: &str) {
        let _ = writeln!(
            self.body,
            r#"  <text x="{x}" y="{y}" font-size="{size}" fill="{}" text-anchor="middle">{}</text>"#,
            color.to_hex(),
            escape(content)
        );
    }

    /// Close the document and return the SVG string.
    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n{}</svg>\n",
            self.width, self.height, self.width, self.height, self.body
        )
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Line series: accumulates projected points and emits one polyline from
/// the finish hook.
#[derive(Default)]
pub struct LineRenderer {
    path: Vec<(f32, f32)>,
}

impl LineRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SeriesRenderer<SvgSurface> for LineRenderer {
    fn draw_point(&mut self, _target: &mut SvgSurface, point: Point, _style: &SeriesStyle, proj: &Projection) {
        self.path.push((proj.x_to_px(point.x), proj.y_to_px(point.y)));
    }

    fn finish(&mut self, target: &mut SvgSurface, style: &SeriesStyle) {
        if self.path.len() >= 2 {
            target.polyline(&self.path, style.color, style.stroke_width);
        }
        self.path.clear();
    }
}

/// Scatter series: one circle per point.
pub struct ScatterRenderer {
    pub radius: f32,
}

impl Default for ScatterRenderer {
    fn default() -> Self {
        Self { radius: 3.0 }
    }
}

impl SeriesRenderer<SvgSurface> for ScatterRenderer {
    fn draw_point(&mut self, target: &mut SvgSurface, point: Point, style: &SeriesStyle, proj: &Projection) {
        target.circle(proj.x_to_px(point.x), proj.y_to_px(point.y), self.radius, style.color);
    }
}

/// Bar series: one vertical bar per point, drawn from a baseline value.
pub struct BarRenderer {
    pub baseline: f64,
    pub bar_width: f32,
}

impl Default for BarRenderer {
    fn default() -> Self {
        Self { baseline: 0.0, bar_width: 4.0 }
    }
}

impl SeriesRenderer<SvgSurface> for BarRenderer {
    fn draw_point(&mut self, target: &mut SvgSurface, point: Point, style: &SeriesStyle, proj: &Projection) {
        let x = proj.x_to_px(point.x);
        let y0 = proj.y_to_px(self.baseline);
        let y1 = proj.y_to_px(point.y);
        let top = y0.min(y1);
        let height = (y0 - y1).abs().max(1.0);
        target.rect(x - self.bar_width * 0.5, top, self.bar_width, height, style.color);
    }
}

/// Render a complete frame: background, grid lines, labels, then every
/// series through its renderer. A grid that cannot be laid out (no data,
/// zero extent) is omitted rather than failing the frame.
pub fn render_svg(chart: &mut Chart<SvgSurface>, width: i32, height: i32, background: Color) -> String {
    let mut surface = SvgSurface::new(width, height);
    surface.fill(background);

    let grid = chart.grid_bounds(width, height);
    match chart.grid_layout(grid) {
        Ok(layout) => {
            let config = chart.config;
            draw_grid(&mut surface, &config, &layout);
            draw_labels(chart, &mut surface, &config, &layout);
        }
        Err(err) => warn!("grid omitted: {err}"),
    }

    chart.draw(&mut surface, grid);
    surface.finish()
}

fn draw_grid(surface: &mut SvgSurface, config: &ChartConfig, layout: &GridLayout) {
    let bounds = layout.bounds;
    let color = config.grid_line_color;
    let width = config.grid_line_width as f32;
    let (left, top) = (bounds.left as f32, bounds.top as f32);
    let (right, bottom) = (bounds.right as f32, bounds.bottom as f32);

    // Enclose the grid on both sides for neatness (fixed-gap axes).
    if layout.x.draw_edges {
        surface.line(left, top, left, bottom, color, width);
        surface.line(right, top, right, bottom, color, width);
    }
    if layout.y.draw_edges {
        surface.line(left, top, right, top, color, width);
        surface.line(left, bottom, right, bottom, color, width);
    }

    for mark in &layout.x.marks {
        surface.line(mark.px, top, mark.px, bottom, color, width);
    }
    for mark in &layout.y.marks {
        surface.line(left, mark.px, right, mark.px, color, width);
    }
}

fn draw_labels(
    chart: &Chart<SvgSurface>,
    surface: &mut SvgSurface,
    config: &ChartConfig,
    layout: &GridLayout,
) {
    let bounds = layout.bounds;
    let size = config.label_text_size;
    let color = config.label_text_color;
    let gutters = config.gutters;

    for side in [Side::Left, Side::Top, Side::Right, Side::Bottom] {
        let Some(labels) = chart.labels(side, layout) else {
            continue;
        };
        for label in labels {
            let (x, y) = match side {
                // Centered in the side gutter, nudged down so the text
                // sits on the grid line.
                Side::Left => (gutters.left as f32 * 0.5, label.px + size * 0.5),
                Side::Right => {
                    (bounds.right as f32 + gutters.right as f32 * 0.5, label.px + size * 0.5)
                }
                // Right at the top of the view / right below the grid.
                Side::Top => (label.px, size),
                Side::Bottom => (label.px, bounds.bottom as f32 + size),
            };
            surface.text(x, y, size, color, &label.text);
        }
    }
}
