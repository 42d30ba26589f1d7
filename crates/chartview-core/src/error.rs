// File: crates/chartview-core/src/error.rs
// Summary: Error taxonomy for grid/scale computation.

use thiserror::Error;

/// Errors surfaced by grid planning and value->pixel mapping.
///
/// Empty series are deliberately not represented here: an empty range is a
/// well-defined state (see `SeriesRange::is_empty`) so that aggregation can
/// skip it. Likewise `Series::remove_point` reports a missing point by
/// returning `false` rather than failing.
#[derive(Debug, Error)]
pub enum ChartError {
    /// A fixed-gap policy was constructed or invoked with gap <= 0.
    /// Callers wanting even spacing must route to `GridPolicy::FixedCount`.
    #[error("fixed grid gap must be > 0 (got {0})")]
    InvalidGridGap(f64),

    /// The value extent along an axis is zero; the affine value->pixel map
    /// would divide by zero.
    #[error("value extent is zero on the {axis} axis")]
    ZeroValueExtent { axis: &'static str },

    /// A projection was requested over empty value bounds.
    #[error("value bounds are empty; nothing to project")]
    EmptyRange,
}

pub type ChartResult<T> = Result<T, ChartError>;
