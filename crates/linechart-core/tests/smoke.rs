// File: crates/linechart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test: data URI, PNG bytes, file output, idempotence.

use linechart_core::{strip_data_uri, Chart, ChartConfig, SeriesSpec, PNG_DATA_URI_PREFIX};

fn chart() -> Chart {
    let points = vec![(1.0, 0.2), (2.0, 0.4), (3.0, 0.9), (4.0, 0.16), (5.0, 0.25), (6.0, 0.36)];
    let config = ChartConfig::default().with_title("smoke", "x", "y");
    Chart::new(vec![SeriesSpec::new("smoke", points)], config).expect("chart")
}

#[test]
fn draw_returns_png_data_uri() {
    let uri = chart().draw().expect("draw");
    assert!(uri.starts_with(PNG_DATA_URI_PREFIX));
    let bytes = strip_data_uri(&uri).expect("decode");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode png");
    assert_eq!((img.width(), img.height()), (800, 600));
}

#[test]
fn draw_is_idempotent() {
    let c = chart();
    assert_eq!(c.draw().expect("first"), c.draw().expect("second"));
}

#[test]
fn render_to_png_writes_file() {
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    chart().render_to_png(&out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");
}

#[test]
fn strip_data_uri_rejects_other_strings() {
    assert!(strip_data_uri("not a uri").is_err());
    assert!(strip_data_uri("data:image/png;base64,@@@").is_err());
}
