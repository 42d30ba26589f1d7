// File: crates/demo/src/main.rs
// Summary: Demo loads an XY CSV and renders a line + scatter chart to SVG.

use anyhow::{Context, Result};
use chartview_core::{Chart, ChartConfig, Point, Series, SeriesStyle, Side, Theme};
use chartview_svg::{render_svg, LineRenderer, ScatterRenderer, SvgSurface};
use std::path::{Path, PathBuf};
use std::sync::Arc;

fn main() -> Result<()> {
    env_logger::init();

    let raw = std::env::args().nth(1).unwrap_or_else(|| "sample_xy.csv".to_string());
    let path = PathBuf::from(&raw);
    if !path.exists() {
        anyhow::bail!("file not found: {}", path.display());
    }
    println!("Using input file: {}", path.display());

    let points = load_xy_csv(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    println!("Loaded {} points", points.len());

    if points.is_empty() {
        anyhow::bail!("no points loaded; check headers/delimiter.");
    }

    let theme = Theme::dark();
    let mut chart: Chart<SvgSurface> =
        Chart::with_config(ChartConfig::default().themed(&theme));
    chart.config.gutters.left = 56;
    chart.config.gutters.bottom = 28;

    let line = Arc::new(Series::with_style(SeriesStyle {
        color: theme.series_line,
        stroke_width: 2.0,
    }));
    line.set_points(points.clone());
    chart.add_series(Arc::clone(&line), Box::new(LineRenderer::new()));

    // A sparse copy as scatter markers on top of the line.
    let markers = Arc::new(Series::with_style(SeriesStyle {
        color: theme.label_text,
        stroke_width: 1.0,
    }));
    markers.set_points(points.iter().step_by(10).copied().collect());
    chart.add_series(Arc::clone(&markers), Box::new(ScatterRenderer::default()));

    // Exercise the fixed-gap policy on Y; X keeps the default line count.
    let bounds = chart.value_bounds();
    chart.config.grid_fixed_y_gap = bounds.span_y() / 4.0;

    chart.set_label_source(Side::Left, Box::new(|v: f64| format!("{v:.1}")));
    chart.set_label_source(Side::Bottom, Box::new(|v: f64| format!("{v:.0}")));

    let svg = render_svg(&mut chart, 1024, 640, theme.background);

    let out = out_name(&path);
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&out, svg)?;
    println!("Wrote {}", out.display());

    Ok(())
}

/// Produce output file name like target/out/<stem>_chart.svg
fn out_name(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    PathBuf::from("target/out").join(format!("{stem}_chart.svg"))
}

/// Load an XY CSV into points. Accepts common x/y header spellings; when
/// no x column exists the row index is used.
fn load_xy_csv(path: &Path) -> Result<Vec<Point>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    println!("Headers: {:?}", headers);

    let idx = |names: &[&str]| -> Option<usize> {
        for (i, h) in headers.iter().enumerate() {
            for want in names {
                if h == want {
                    return Some(i);
                }
            }
        }
        None
    };

    let i_x = idx(&["x", "time", "t", "index", "date"]);
    let i_y = idx(&["y", "value", "v", "close", "price"]);

    if i_y.is_none() {
        println!("Warning: no y/value column found; using the second column.");
    }

    let mut out = Vec::new();
    let mut row_index = 0_f64;

    for rec in rdr.records() {
        let rec = rec?;
        let parse =
            |i: usize| -> Option<f64> { rec.get(i).and_then(|s| s.trim().parse::<f64>().ok()) };

        let x = match i_x.and_then(parse) {
            Some(x) => x,
            None => {
                let v = row_index;
                row_index += 1.0;
                v
            }
        };

        if let Some(y) = parse(i_y.unwrap_or(1)) {
            out.push(Point::new(x, y));
        }
    }
    Ok(out)
}
