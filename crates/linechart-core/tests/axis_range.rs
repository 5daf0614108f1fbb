// File: crates/linechart-core/tests/axis_range.rs
// Purpose: Range normalizer scenarios and invariants over arbitrary extents.

use approx::assert_relative_eq;
use linechart_core::{normalize, AxisKind, AxisRange, ChartError};
use proptest::prelude::*;

#[test]
fn one_to_ten_snaps_to_unit_interval() {
    // interval 0.9 -> digit 0 -> fixed interval 1; max sits on a multiple so it
    // moves one full step up.
    let r = normalize(AxisKind::X, 1.0, 10.0, 10).expect("normalize");
    assert_eq!(r, AxisRange { min: 1.0, max: 11.0, divisions: 10 });
}

#[test]
fn division_count_is_recomputed() {
    // ln(49) ~ 3.89 over 10 requested divisions -> unit steps, 0..4
    let r = normalize(AxisKind::Y, 0.0, 49f64.ln(), 10).expect("normalize");
    assert_eq!(r.min, 0.0);
    assert_eq!(r.max, 4.0);
    assert_eq!(r.divisions, 4);
}

#[test]
fn negative_min_rounds_away_from_zero() {
    let r = normalize(AxisKind::Y, -3.5, 7.2, 10).expect("normalize");
    assert_eq!(r, AxisRange { min: -10.0, max: 10.0, divisions: 2 });
}

#[test]
fn negative_max_rounds_toward_zero() {
    let r = normalize(AxisKind::Y, -95.0, -12.0, 10).expect("normalize");
    assert_eq!(r.min, -100.0);
    assert_eq!(r.max, -10.0);
    assert_eq!(r.divisions, 9);
}

#[test]
fn sub_unit_bounds_carry_no_binary_noise() {
    let r = normalize(AxisKind::Y, 0.16, 0.85, 10).expect("normalize");
    assert_eq!(r.min, 0.1);
    assert_eq!(r.max, 0.9);
    assert_eq!(r.divisions, 8);
}

#[test]
fn zero_span_is_degenerate() {
    let err = normalize(AxisKind::Y, 2.5, 2.5, 10).unwrap_err();
    assert!(matches!(err, ChartError::DegenerateRange { axis: AxisKind::Y, value } if value == 2.5));
}

#[test]
fn zero_divisions_is_a_configuration_error() {
    assert!(matches!(normalize(AxisKind::X, 0.0, 1.0, 0), Err(ChartError::Configuration(_))));
}

#[test]
fn raw_range_passes_through() {
    let r = AxisRange::raw(1.0, 49.0, 6).expect("raw");
    assert_eq!(r, AxisRange { min: 1.0, max: 49.0, divisions: 6 });
    assert_relative_eq!(r.step(), 8.0);
}

proptest! {
    #[test]
    fn normalized_range_covers_data_on_power_of_ten_steps(
        min in -1.0e6f64..1.0e6,
        span in 1.0e-3f64..1.0e6,
        requested in 1u32..25,
    ) {
        let max = min + span;
        let r = normalize(AxisKind::Y, min, max, requested).expect("normalize");
        let tol = 1e-9 * min.abs().max(max.abs()).max(1.0);

        prop_assert!(r.divisions >= 1);
        prop_assert!(r.min <= min + tol, "min {} > {}", r.min, min);
        prop_assert!(r.max >= max - tol, "max {} < {}", r.max, max);

        let step = (r.max - r.min) / r.divisions as f64;
        let exponent = step.log10();
        prop_assert!((exponent - exponent.round()).abs() < 1e-4, "step {} is not a power of ten", step);
    }
}
