// File: crates/chartview-core/src/lib.rs
// Summary: Core library entry point; exports the range-tracking and grid-planning API.

pub mod chart;
pub mod error;
pub mod grid;
pub mod label;
pub mod render;
pub mod scale;
pub mod series;
pub mod theme;
pub mod types;

pub use chart::{AxisPlan, Chart, ChartConfig, GridLayout, TickMark, ValueBounds};
pub use error::{ChartError, ChartResult};
pub use grid::{compute_ticks, GridPolicy, TickSet};
pub use label::{LabelSource, PlacedLabel, Side};
pub use render::SeriesRenderer;
pub use scale::Projection;
pub use series::{Point, Series, SeriesRange, SeriesStyle};
pub use theme::Theme;
pub use types::{Color, Insets, RectI32};
