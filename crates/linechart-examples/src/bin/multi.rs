// File: crates/linechart-examples/src/bin/multi.rs
// Summary: Multi-series chart configured from JSON, with a legend and one color override.

use anyhow::Result;
use linechart_core::{Chart, ChartConfig, SeriesSpec};
use linechart_examples::{init_tracing, out_path};

const CONFIG: &str = r##"{
    "label": { "title": "log curves", "titleX": "i", "titleY": "f(i)", "divideX": 5 },
    "color": { "grid": "#dddddd" },
    "font": "14px Georgia, serif"
}"##;

fn main() -> Result<()> {
    init_tracing();

    let config: ChartConfig = serde_json::from_str(CONFIG)?;
    let curves: [(&str, fn(f64) -> f64); 4] = [
        ("ln(i)", f64::ln),
        ("log10(i)", f64::log10),
        ("log2(i)", f64::log2),
        ("sqrt(i)", f64::sqrt),
    ];
    let mut series: Vec<SeriesSpec> = curves
        .iter()
        .map(|&(name, f)| SeriesSpec::new(name, (1..50).map(|i| (i as f64, f(i as f64)))))
        .collect();
    if let Some(last) = series.last_mut() {
        last.line_color = Some("orange".into());
    }

    let chart = Chart::new(series, config)?;
    let out = out_path("example_multi.png");
    chart.render_to_png(&out)?;
    println!("Wrote {}", out.display());
    Ok(())
}
