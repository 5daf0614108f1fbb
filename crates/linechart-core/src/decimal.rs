// File: crates/linechart-core/src/decimal.rs
// Summary: Decimal-exact add/divide for tick arithmetic, backed by rust_decimal.
// Notes:
// - Operands enter decimal space through their shortest round-trip text form, so
//   `0.1` is the decimal 0.1 and not the binary value nearest to it.
// - Values that do not fit a 96-bit mantissa with at most 28 fractional digits
//   fall back to plain f64 arithmetic. Results are then only as exact as f64.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Largest fractional scale a `Decimal` can hold.
const MAX_SCALE: u32 = 28;

/// Fractional digits kept past the leading digit of a tick step when printing labels.
pub const LABEL_MAX_SCALE: u32 = 10;

/// Convert `v` to the decimal its shortest textual form denotes.
/// Returns `None` for non-finite values or when the digits do not fit.
pub fn to_decimal(v: f64) -> Option<Decimal> {
    if !v.is_finite() {
        return None;
    }
    // f64's Display never uses exponent notation and prints the shortest digits
    // that round-trip, which is exactly the textual form we want.
    Decimal::from_str_exact(&v.to_string()).ok()
}

/// `a + b` without binary rounding noise: `add(0.1, 0.2) == 0.3`.
pub fn add(a: f64, b: f64) -> f64 {
    match (to_decimal(a), to_decimal(b)) {
        (Some(da), Some(db)) => da
            .checked_add(db)
            .and_then(|sum| sum.to_f64())
            .unwrap_or(a + b),
        _ => a + b,
    }
}

/// `a / b` computed on decimal operands. A zero divisor keeps f64 semantics.
pub fn divide(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        return a / b;
    }
    match (to_decimal(a), to_decimal(b)) {
        (Some(da), Some(db)) => da
            .checked_div(db)
            .and_then(|q| q.to_f64())
            .unwrap_or(a / b),
        _ => a / b,
    }
}

/// Label scale for ticks spaced `step` apart: `LABEL_MAX_SCALE` digits past the
/// step's leading digit, so small steps keep their significant digits.
pub fn label_scale(step: Decimal) -> u32 {
    let lead = step
        .abs()
        .to_f64()
        .filter(|s| *s > 0.0)
        .map(|s| (-s.log10().floor()).max(0.0) as u32)
        .unwrap_or(0);
    (LABEL_MAX_SCALE + lead).min(MAX_SCALE)
}

/// Render a decimal as a compact label rounded to `scale` fractional digits:
/// no trailing zeros, no `-0`.
pub fn format_decimal(d: Decimal, scale: u32) -> String {
    let d = d.round_dp(scale).normalize();
    if d.is_zero() {
        "0".to_string()
    } else {
        d.to_string()
    }
}

/// Shortest round-trip text of `v`, switching to exponent notation outside
/// `[1e-6, 1e21)` the way JavaScript numbers print.
pub fn format_float(v: f64) -> String {
    let a = v.abs();
    if v == 0.0 {
        "0".to_string()
    } else if a >= 1e21 || a < 1e-6 {
        format!("{v:e}")
    } else {
        v.to_string()
    }
}

/// Tick values `min + i * ((max - min) / divisions)` for `i` in `0..=divisions`,
/// computed entirely in decimal space. `None` when an operand does not fit or
/// the step is too fine for the 28-digit scale to land on `max`.
pub fn tick_values(min: f64, max: f64, divisions: u32) -> Option<Vec<Decimal>> {
    if divisions == 0 {
        return None;
    }
    let dmin = to_decimal(min)?;
    let dmax = to_decimal(max)?;
    let span = dmax.checked_sub(dmin)?;
    let step = span.checked_div(Decimal::from(divisions))?;
    let last = step.checked_mul(Decimal::from(divisions))?;
    let tolerance = step.abs().checked_div(Decimal::from(1000))?;
    if span.is_zero() != step.is_zero() || last.checked_sub(span)?.abs() > tolerance {
        return None;
    }
    (0..=divisions)
        .map(|i| step.checked_mul(Decimal::from(i)).and_then(|off| dmin.checked_add(off)))
        .collect()
}
