// File: crates/linechart-core/tests/date_mode.rs
// Purpose: Date-mode X axis: raw ranges, tick-to-label mapping, and clamping.

use chrono::NaiveDate;
use linechart_core::date::{daily_labels, label_index};
use linechart_core::{AxisRange, Chart, ChartConfig, ChartError, FontSpec, PixelPoint, SeriesSpec, Surface, TextAlign};
use skia_safe::Color;

fn log_series(name: &str) -> SeriesSpec {
    SeriesSpec::new(name, (1..50).map(|i| (i as f64, (i as f64).ln())))
}

fn labels_49() -> Vec<String> {
    daily_labels(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(), 49, "%Y-%m-%d")
}

#[test]
fn daily_labels_are_consecutive_days() {
    let labels = labels_49();
    assert_eq!(labels.len(), 49);
    assert_eq!(labels[0], "2020-01-01");
    assert_eq!(labels[30], "2020-01-31");
    assert_eq!(labels[31], "2020-02-01");
    assert_eq!(labels[48], "2020-02-18");
}

#[test]
fn label_index_follows_floor_formula() {
    let got: Vec<usize> = (0..=6).map(|i| label_index(49, 6, i)).collect();
    assert_eq!(got, [0, 8, 16, 24, 32, 40, 48]);
}

#[test]
fn label_index_single_division_hits_both_ends() {
    assert_eq!(label_index(6, 1, 0), 0);
    assert_eq!(label_index(6, 1, 1), 5);
}

#[test]
fn label_index_clamps_short_sequences() {
    assert_eq!(label_index(3, 2, 2), 2);
    assert_eq!(label_index(3, 6, 6), 2);
    assert_eq!(label_index(1, 4, 3), 0);
}

#[test]
fn x_range_passes_through_in_date_mode() {
    let config = ChartConfig::default().with_divisions(6, 10).with_date_labels(labels_49());
    let chart = Chart::new(vec![log_series("ln")], config).expect("chart");
    assert_eq!(chart.x_range(), AxisRange { min: 1.0, max: 49.0, divisions: 6 });
    assert_eq!(chart.y_range(), AxisRange { min: 0.0, max: 4.0, divisions: 4 });
}

#[derive(Default)]
struct BottomLabels {
    baseline: f32,
    texts: Vec<String>,
}

impl Surface for BottomLabels {
    fn fill_rect(&mut self, _: i32, _: i32, _: i32, _: i32, _: Color) {}
    fn stroke_line(&mut self, _: PixelPoint, _: PixelPoint, _: Color) {}
    fn fill_circle(&mut self, _: PixelPoint, _: f32, _: Color) {}
    fn fill_text(&mut self, text: &str, at: (f32, f32), _: &FontSpec, _: Color, align: TextAlign) {
        if align == TextAlign::Center && at.1 == self.baseline {
            self.texts.push(text.to_string());
        }
    }
}

#[test]
fn bottom_ticks_are_relabeled_from_the_sequence() {
    let labels = labels_49();
    let config = ChartConfig::default().with_divisions(6, 10).with_date_labels(labels.clone());
    let chart = Chart::new(vec![log_series("ln"), log_series("ln again")], config).expect("chart");

    let mut surface = BottomLabels { baseline: 570.0, texts: Vec::new() };
    chart.draw_on(&mut surface);
    let expected: Vec<String> = [0, 8, 16, 24, 32, 40, 48].iter().map(|&i| labels[i].clone()).collect();
    assert_eq!(surface.texts, expected);
}

#[test]
fn short_label_sequence_clamps_instead_of_failing() {
    let config = ChartConfig::default().with_divisions(3, 10).with_date_labels(vec!["a".into(), "b".into()]);
    let chart = Chart::new(vec![log_series("ln")], config).expect("short sequences are allowed");

    let mut surface = BottomLabels { baseline: 570.0, texts: Vec::new() };
    chart.draw_on(&mut surface);
    assert_eq!(surface.texts, ["a", "a", "b", "b"]);
}

#[test]
fn date_mode_without_labels_is_rejected() {
    let mut config = ChartConfig::default();
    config.x_date_mode = true;
    let err = Chart::new(vec![log_series("ln")], config).unwrap_err();
    assert!(matches!(err, ChartError::Configuration(_)));

    let empty = ChartConfig::default().with_date_labels(Vec::new());
    assert!(matches!(Chart::new(vec![log_series("ln")], empty), Err(ChartError::Configuration(_))));
}
