// File: crates/linechart-examples/src/bin/dates.rs
// Summary: Date-mode chart: X ticks relabeled from a sequence of calendar days.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use linechart_core::date::daily_labels;
use linechart_core::{Chart, ChartConfig, SeriesSpec};
use linechart_examples::{init_tracing, out_path};

fn main() -> Result<()> {
    init_tracing();

    let start = NaiveDate::from_ymd_opt(2020, 1, 1).context("start date")?;
    let labels = daily_labels(start, 49, "%m-%d");
    let points = (1..50).map(|i| (i as f64, (i as f64).ln()));

    let config = ChartConfig::default()
        .with_title("ln(i) by day", "day", "ln(i)")
        .with_divisions(6, 10)
        .with_date_labels(labels);
    let chart = Chart::new(vec![SeriesSpec::new("ln", points)], config)?;

    let out = out_path("example_dates.png");
    chart.render_to_png(&out)?;
    println!("Wrote {}", out.display());

    // Data URI form, as an HTML <img src> would take it.
    let uri = chart.draw()?;
    tracing::info!(len = uri.len(), "encoded data uri");
    Ok(())
}
