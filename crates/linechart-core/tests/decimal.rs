// File: crates/linechart-core/tests/decimal.rs
// Purpose: Decimal-exact tick arithmetic and label formatting.

use approx::assert_relative_eq;
use linechart_core::decimal::{add, divide, format_decimal, format_float, label_scale, tick_values, to_decimal};
use linechart_core::grid::ticks;
use linechart_core::AxisRange;
use rust_decimal::Decimal;

#[test]
fn add_matches_decimal_arithmetic() {
    assert_eq!(add(0.1, 0.2), 0.3);
    assert_eq!(add(1.005, -0.005), 1.0);
    assert_eq!(add(0.7, 0.1), 0.8);
    assert_eq!(add(-0.3, 0.1), -0.2);
}

#[test]
fn divide_matches_decimal_arithmetic() {
    assert_eq!(divide(0.3, 0.1), 3.0);
    assert_eq!(divide(0.69, 10.0), 0.069);
    assert_eq!(divide(1.0, 4.0), 0.25);
}

#[test]
fn divide_by_zero_keeps_float_semantics() {
    assert!(divide(1.0, 0.0).is_infinite());
    assert!(divide(0.0, 0.0).is_nan());
}

#[test]
fn out_of_range_operands_fall_back_to_f64() {
    assert!(to_decimal(1e300).is_none());
    assert!(to_decimal(f64::NAN).is_none());
    assert_eq!(add(1e300, 1e300), 2e300);
}

#[test]
fn conversion_uses_shortest_text_form() {
    assert_eq!(to_decimal(0.1), Some(Decimal::new(1, 1)));
    assert_eq!(to_decimal(-12.5), Some(Decimal::new(-125, 1)));
}

#[test]
fn tick_values_step_in_decimal_space() {
    let values = tick_values(0.1, 0.9, 8).expect("fits");
    let labels: Vec<String> = values.into_iter().map(|d| format_decimal(d, 10)).collect();
    assert_eq!(labels, ["0.1", "0.2", "0.3", "0.4", "0.5", "0.6", "0.7", "0.8", "0.9"]);
}

#[test]
fn format_drops_trailing_zeros_and_negative_zero() {
    assert_eq!(format_decimal(Decimal::new(3000, 3), 10), "3");
    assert_eq!(format_decimal(Decimal::new(-0, 2), 10), "0");
    assert_eq!(format_decimal(Decimal::new(-25, 1), 10), "-2.5");
}

#[test]
fn grid_ticks_cover_every_division_boundary() {
    let t = ticks(&AxisRange { min: -10.0, max: 10.0, divisions: 2 });
    let labels: Vec<&str> = t.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, ["-10", "0", "10"]);
    assert_eq!(t.iter().map(|t| t.value).collect::<Vec<_>>(), [-10.0, 0.0, 10.0]);
    assert_eq!(t.iter().map(|t| t.index).collect::<Vec<_>>(), [0, 1, 2]);
}

#[test]
fn oversize_scale_is_not_silently_rounded() {
    assert!(to_decimal(1e-30).is_none());
    assert_eq!(add(1e-30, 1e-30), 2e-30);
}

#[test]
fn label_scale_follows_the_step_magnitude() {
    assert_eq!(label_scale(Decimal::new(5, 0)), 10);
    assert_eq!(label_scale(Decimal::new(1, 1)), 11);
    assert!(label_scale(Decimal::new(1, 12)) >= 22);
    assert_eq!(label_scale(Decimal::new(1, 27)), 28);
}

#[test]
fn small_magnitude_ticks_keep_distinct_labels() {
    // [1e-12, 9e-12] in ten divisions normalizes to [1e-12, 1e-11] in nine
    let t = ticks(&AxisRange { min: 1e-12, max: 1e-11, divisions: 9 });
    let labels: Vec<&str> = t.iter().map(|t| t.label.as_str()).collect();
    let expected: Vec<String> = (1..=9)
        .map(|i| format!("0.00000000000{i}"))
        .chain(["0.00000000001".to_string()])
        .collect();
    assert_eq!(labels, expected);
    for (i, tick) in t.iter().enumerate() {
        assert_relative_eq!(tick.value, (i as f64 + 1.0) * 1e-12, max_relative = 1e-12);
    }
}

#[test]
fn steps_finer_than_decimal_scale_use_the_float_path() {
    assert!(tick_values(0.0, 1e-28, 10).is_none());
    let t = ticks(&AxisRange { min: 0.0, max: 1e-29, divisions: 1 });
    let labels: Vec<&str> = t.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, ["0", "1e-29"]);
}

#[test]
fn huge_fallback_labels_use_exponent_notation() {
    let t = ticks(&AxisRange { min: 0.0, max: 4e30, divisions: 2 });
    let labels: Vec<&str> = t.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, ["0", "2e30", "4e30"]);
    assert_eq!(format_float(1.5e-7), "1.5e-7");
    assert_eq!(format_float(123.25), "123.25");
    assert_eq!(format_float(-0.0), "0");
}
