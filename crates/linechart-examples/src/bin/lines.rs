// File: crates/linechart-examples/src/bin/lines.rs
// Summary: Single-series chart of ln(i) against log10(i), written to PNG.

use anyhow::Result;
use linechart_core::{Chart, ChartConfig, SeriesSpec};
use linechart_examples::{init_tracing, out_path};

fn main() -> Result<()> {
    init_tracing();

    let points: Vec<(f64, f64)> = (1..50).map(|i| ((i as f64).ln(), (i as f64).log10())).collect();
    let mut config = ChartConfig::default().with_title("ln(x)~log10(x)", "ln(x)", "log10(x)");
    config.padding.left = Some(100);

    let chart = Chart::new(vec![SeriesSpec::new("ln~log10", points)], config)?;
    tracing::info!(x = ?chart.x_range(), y = ?chart.y_range(), "normalized axes");

    let out = out_path("example_lines.png");
    chart.render_to_png(&out)?;
    println!("Wrote {}", out.display());
    Ok(())
}
