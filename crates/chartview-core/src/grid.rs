// File: crates/chartview-core/src/grid.rs
// Summary: Grid tick planning under fixed-count and fixed-gap policies.

use log::debug;

use crate::error::{ChartError, ChartResult};

/// Rule selecting tick positions along one axis. Chosen independently per
/// axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GridPolicy {
    /// `FixedCount(n)`: n interior lines plus one at each bound, evenly
    /// spaced over the value range.
    FixedCount(usize),
    /// `FixedGap(g)`: lines at every value a whole number of gaps above
    /// the minimum, plus enclosing lines at both bounds. Requires g > 0.
    FixedGap(f64),
}

impl GridPolicy {
    /// Precedence rule of the configuration surface: a positive fixed gap
    /// overrides the line count (a disabled gap is conventionally -1).
    pub fn resolve(line_count: usize, fixed_gap: f64) -> Self {
        if fixed_gap > 0.0 {
            Self::FixedGap(fixed_gap)
        } else {
            Self::FixedCount(line_count)
        }
    }
}

/// The tick values for one axis, as computed by `compute_ticks`.
///
/// This is the single canonical tick computation: grid-line drawing and
/// label emission both consume the same `TickSet`, so labels can never
/// disagree with the lines they annotate.
#[derive(Clone, Debug, PartialEq)]
pub struct TickSet {
    /// Labeled tick values, ascending.
    pub ticks: Vec<f64>,
    /// The grid's value bounds on this axis.
    pub edges: (f64, f64),
    /// Whether the edges are drawn as enclosing lines in addition to the
    /// ticks (fixed-gap mode; under fixed count the bounds are ticks
    /// themselves).
    pub draw_edges: bool,
}

impl TickSet {
    /// Values at which a grid line is drawn: the enclosing edges (when the
    /// policy asks for them) plus every tick, without duplicates.
    pub fn line_values(&self) -> Vec<f64> {
        if !self.draw_edges {
            return self.ticks.clone();
        }
        let mut out = Vec::with_capacity(self.ticks.len() + 2);
        out.push(self.edges.0);
        for &tick in &self.ticks {
            if tick != self.edges.0 && tick != self.edges.1 {
                out.push(tick);
            }
        }
        out.push(self.edges.1);
        out
    }
}

/// Compute the tick values for one axis over `[min, max]`.
///
/// Fixed count n yields exactly n + 2 values inclusive of both bounds.
/// Fixed gap g yields every value `min + k*g` (k >= 1) up to `max`
/// inclusive, with the bounds always drawn as enclosing lines; g <= 0 is
/// rejected, callers wanting even spacing must route to fixed count.
pub fn compute_ticks(policy: GridPolicy, min: f64, max: f64) -> ChartResult<TickSet> {
    match policy {
        GridPolicy::FixedCount(lines) => {
            let step = (max - min) / (lines as f64 + 1.0);
            let mut values: Vec<f64> = (0..lines + 2).map(|i| min + step * i as f64).collect();
            if let Some(last) = values.last_mut() {
                // Pin the final tick to the bound; accumulated rounding
                // must not leave it epsilon short of max.
                *last = max;
            }
            debug!("fixed-count ticks ({} lines) over [{min}, {max}]: {values:?}", lines);
            Ok(TickSet { ticks: values, edges: (min, max), draw_edges: false })
        }
        GridPolicy::FixedGap(gap) => {
            if gap <= 0.0 {
                return Err(ChartError::InvalidGridGap(gap));
            }
            let mut values = Vec::new();
            let mut k = 1u64;
            loop {
                let tick = min + k as f64 * gap;
                if tick > max {
                    break;
                }
                values.push(tick);
                k += 1;
            }
            debug!("fixed-gap ticks between {min} and {max} in steps of {gap}: {values:?}");
            Ok(TickSet { ticks: values, edges: (min, max), draw_edges: true })
        }
    }
}
