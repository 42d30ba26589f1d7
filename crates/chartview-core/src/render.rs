// File: crates/chartview-core/src/render.rs
// Summary: Renderer capability trait for per-point series drawing.

use crate::scale::Projection;
use crate::series::{Point, SeriesStyle};

/// Draw capability for one series kind (line, scatter, bar, ...) over an
/// opaque render target `T`. Implementations live in backend crates and
/// are injected into the shared draw loop.
pub trait SeriesRenderer<T: ?Sized> {
    /// Called once per point in x-sorted order during a draw pass.
    ///
    /// The callback runs while the series lock is held; it must not call
    /// back into any mutating method of the series being drawn.
    fn draw_point(&mut self, target: &mut T, point: Point, style: &SeriesStyle, proj: &Projection);

    /// Called once after the final point of the series. Hook for renderers
    /// that accumulate geometry across points, e.g. a polyline.
    fn finish(&mut self, _target: &mut T, _style: &SeriesStyle) {}
}
