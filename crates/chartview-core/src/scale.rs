// File: crates/chartview-core/src/scale.rs
// Summary: Affine value->pixel projection over the plotting rectangle.

use crate::chart::ValueBounds;
use crate::error::{ChartError, ChartResult};
use crate::types::RectI32;

/// Maps data values into drawing coordinates for one draw pass.
///
/// `scale_x`/`scale_y` are pixels per value unit on each axis. Construction
/// fails on empty bounds or a zero value extent rather than letting a
/// division by zero leak NaN or infinity into a draw call.
#[derive(Clone, Copy, Debug)]
pub struct Projection {
    grid: RectI32,
    min_x: f64,
    min_y: f64,
    scale_x: f32,
    scale_y: f32,
}

impl Projection {
    pub fn new(grid: RectI32, bounds: &ValueBounds) -> ChartResult<Self> {
        if bounds.is_empty() {
            return Err(ChartError::EmptyRange);
        }
        let span_x = bounds.span_x();
        let span_y = bounds.span_y();
        if span_x == 0.0 {
            return Err(ChartError::ZeroValueExtent { axis: "x" });
        }
        if span_y == 0.0 {
            return Err(ChartError::ZeroValueExtent { axis: "y" });
        }
        Ok(Self {
            grid,
            min_x: bounds.min_x(),
            min_y: bounds.min_y(),
            scale_x: grid.width() as f32 / span_x as f32,
            scale_y: grid.height() as f32 / span_y as f32,
        })
    }

    pub fn grid(&self) -> RectI32 { self.grid }
    pub fn scale_x(&self) -> f32 { self.scale_x }
    pub fn scale_y(&self) -> f32 { self.scale_y }

    /// Horizontal pixel for a value: origin at the grid's left edge.
    pub fn x_to_px(&self, x: f64) -> f32 {
        self.grid.left as f32 + self.scale_x * (x - self.min_x) as f32
    }

    /// Vertical pixel for a value. Screen y grows downward, so the minimum
    /// value maps to the grid's bottom edge and side labels read
    /// max-at-top.
    pub fn y_to_px(&self, y: f64) -> f32 {
        self.grid.bottom as f32 - self.scale_y * (y - self.min_y) as f32
    }
}
