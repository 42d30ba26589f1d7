// File: crates/chartview-core/src/series.rs
// Summary: Series point collection with incremental min/max range tracking.

use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{debug, trace};

use crate::types::Color;

/// A single data sample. Ordering key is `x`; removal matches on the full
/// `(x, y)` pair. Duplicate x values are permitted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Min/max bounding box over a point collection.
///
/// Emptiness is an explicit flag; the extrema fields are only meaningful
/// when `is_empty()` is false. Aggregation code must skip empty ranges
/// instead of folding their fields into a bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesRange {
    empty: bool,
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

impl SeriesRange {
    pub const fn empty() -> Self {
        Self { empty: true, min_x: 0.0, max_x: 0.0, min_y: 0.0, max_y: 0.0 }
    }

    pub fn from_points(points: &[Point]) -> Self {
        let mut range = Self::empty();
        for &p in points {
            range.extend(p);
        }
        range
    }

    /// Grow the box to include `p`. Extending can never shrink the range,
    /// so this is the O(1) path used on insertion.
    pub fn extend(&mut self, p: Point) {
        if self.empty {
            self.empty = false;
            self.min_x = p.x;
            self.max_x = p.x;
            self.min_y = p.y;
            self.max_y = p.y;
            return;
        }
        if p.x < self.min_x { self.min_x = p.x; }
        if p.x > self.max_x { self.max_x = p.x; }
        if p.y < self.min_y { self.min_y = p.y; }
        if p.y > self.max_y { self.max_y = p.y; }
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

/// Visual style carried to the series renderer.
#[derive(Clone, Copy, Debug)]
pub struct SeriesStyle {
    pub color: Color,
    pub stroke_width: f32,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self { color: Color::BLACK, stroke_width: 1.0 }
    }
}

struct SeriesInner {
    // Kept sorted by x so the min/max x are always the first/last element.
    points: Vec<Point>,
    range: SeriesRange,
}

impl SeriesInner {
    fn find(&self, point: Point) -> Option<usize> {
        let start = self.points.partition_point(|q| q.x < point.x);
        self.points[start..]
            .iter()
            .take_while(|q| q.x == point.x)
            .position(|q| q.y == point.y)
            .map(|offset| start + offset)
    }

    fn recalculate(&mut self) {
        self.range = SeriesRange::from_points(&self.points);
        debug!(
            "recalculated series range over {} points: {:?}",
            self.points.len(),
            self.range
        );
    }
}

/// One data series: an x-sorted point collection plus its running range.
///
/// Points and range live under a single coarse lock, so a consumer reading
/// or iterating for a draw pass never observes a structurally torn
/// collection or a partially updated range, even while a producer thread
/// holding an `Arc<Series>` is appending. Mutation and iteration both take
/// `&self` for that reason.
pub struct Series {
    inner: Mutex<SeriesInner>,
    style: SeriesStyle,
}

impl Series {
    pub fn new() -> Self {
        Self::with_style(SeriesStyle::default())
    }

    pub fn with_style(style: SeriesStyle) -> Self {
        Self {
            inner: Mutex::new(SeriesInner { points: Vec::new(), range: SeriesRange::empty() }),
            style,
        }
    }

    pub fn with_points(points: Vec<Point>) -> Self {
        let series = Self::new();
        series.set_points(points);
        series
    }

    pub fn style(&self) -> &SeriesStyle {
        &self.style
    }

    fn lock(&self) -> MutexGuard<'_, SeriesInner> {
        // A panic while holding the lock leaves plain data behind; recover
        // the guard instead of propagating the poison.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the entire collection. Empty input is legal and resets the
    /// range to empty. Triggers a full O(n) range recomputation.
    pub fn set_points(&self, points: Vec<Point>) {
        let mut inner = self.lock();
        debug!("replacing series points ({} -> {})", inner.points.len(), points.len());
        inner.points = points;
        inner.points.sort_by(|a, b| a.x.total_cmp(&b.x));
        inner.recalculate();
    }

    /// Insert one point, keeping x order. The range is extended in O(1);
    /// ties on x land after existing equal-x points.
    pub fn add_point(&self, point: Point) {
        let mut inner = self.lock();
        let at = inner.points.partition_point(|q| q.x <= point.x);
        inner.points.insert(at, point);
        inner.range.extend(point);
        trace!("added point ({}, {}), {} total", point.x, point.y, inner.points.len());
    }

    /// Remove the point matching `point` exactly. Returns `false` when no
    /// such point exists.
    ///
    /// Cost warning: removing a point sitting at the current y minimum or
    /// maximum forces a full O(n) range recomputation, because any
    /// remaining point may be the new extremum. Removing an x-extremal
    /// point is cheap (the collection is x-sorted, so the new bound is the
    /// first/last element). Avoid frequent removal of y-extremal points.
    pub fn remove_point(&self, point: Point) -> bool {
        let mut inner = self.lock();
        let Some(at) = inner.find(point) else {
            trace!("remove_point: ({}, {}) not present", point.x, point.y);
            return false;
        };
        inner.points.remove(at);

        if inner.points.is_empty() {
            inner.range = SeriesRange::empty();
            return true;
        }

        // A removed y extremum can be inherited by any remaining point;
        // there is no cheaper correction than a rescan.
        if point.y == inner.range.min_y || point.y == inner.range.max_y {
            inner.recalculate();
            return true;
        }

        // X corrections condense in from the ends of the sorted collection.
        if point.x == inner.range.min_x {
            inner.range.min_x = inner.points[0].x;
        } else if point.x == inner.range.max_x {
            inner.range.max_x = inner.points[inner.points.len() - 1].x;
        }
        true
    }

    /// Reset the range and fold it back up from every point. Callers only
    /// need this after mutating points obtained through `points()` and fed
    /// back via `set_points`; the incremental operations keep the range
    /// consistent on their own.
    pub fn recalculate_range(&self) {
        self.lock().recalculate();
    }

    pub fn range(&self) -> SeriesRange {
        self.lock().range
    }

    pub fn len(&self) -> usize {
        self.lock().points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().points.is_empty()
    }

    /// Snapshot copy of the points in x order.
    pub fn points(&self) -> Vec<Point> {
        self.lock().points.clone()
    }

    /// Visit every point in x order while holding the series lock.
    ///
    /// The callback must not call back into any mutating method of the
    /// same series; the coarse lock makes that a deadlock, and the draw
    /// contract forbids it.
    pub fn for_each_point<F: FnMut(Point)>(&self, mut f: F) {
        let inner = self.lock();
        for &p in &inner.points {
            f(p);
        }
    }
}

impl Default for Series {
    fn default() -> Self {
        Self::new()
    }
}
