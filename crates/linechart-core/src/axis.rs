// File: crates/linechart-core/src/axis.rs
// Summary: Axis ranges and the "nice number" range normalizer.

use crate::error::{AxisKind, ChartError, ChartResult};

/// A resolved axis extent split into `divisions` equal intervals.
/// Contract: `min <= max` and `divisions >= 1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
    pub divisions: u32,
}

impl AxisRange {
    /// Pass-through range used by date-mode X: extents and division count unchanged.
    pub fn raw(min: f64, max: f64, divisions: u32) -> ChartResult<Self> {
        if divisions == 0 {
            return Err(ChartError::config("axis division count must be at least 1"));
        }
        if min > max {
            return Err(ChartError::config(format!("axis min {min} exceeds max {max}")));
        }
        Ok(Self { min, max, divisions })
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Width of one division in data units.
    pub fn step(&self) -> f64 {
        self.span() / self.divisions as f64
    }
}

/// Snap `[min, max]` outward to multiples of a power of ten chosen from the
/// requested division count, and recompute the division count that fits.
///
/// The returned `divisions` replaces `requested`; downstream ticking uses it.
pub fn normalize(axis: AxisKind, min: f64, max: f64, requested: u32) -> ChartResult<AxisRange> {
    if requested == 0 {
        return Err(ChartError::config(format!("{axis} axis division count must be at least 1")));
    }
    if min > max {
        return Err(ChartError::config(format!("{axis} axis min {min} exceeds max {max}")));
    }
    let interval = (max - min) / requested as f64;
    if !(interval > 0.0) || !interval.is_finite() {
        return Err(ChartError::DegenerateRange { axis, value: min });
    }

    let digit = interval.log10().floor() as i32 + 1;
    let fixed_interval = 10f64.powi(digit);

    // `%` keeps the dividend's sign, so negative extents need one extra step outward.
    let mut fixed_min = if min >= 0.0 {
        min - (min % fixed_interval)
    } else {
        min - (min % fixed_interval) - fixed_interval
    };
    let mut fixed_max = if max > 0.0 {
        max - (max % fixed_interval) + fixed_interval
    } else {
        max - (max % fixed_interval)
    };

    fixed_min = snap_to_digit(fixed_min, digit);
    fixed_max = snap_to_digit(fixed_max, digit);

    let divisions = ((fixed_max - fixed_min) / fixed_interval).round().max(1.0) as u32;
    tracing::debug!(%axis, min, max, requested, fixed_min, fixed_max, divisions, "normalized axis range");
    Ok(AxisRange { min: fixed_min, max: fixed_max, divisions })
}

/// Remove binary noise left by `%` (e.g. 0.30000000000000004 -> 0.3) by rounding
/// to the precision of `10^digit`. Only exact powers of ten are multiplied or
/// divided by, so the rounding itself adds no noise.
fn snap_to_digit(v: f64, digit: i32) -> f64 {
    let snapped = if digit >= 0 {
        let unit = 10f64.powi(digit);
        (v / unit).round() * unit
    } else {
        let mul = 10f64.powi(-digit);
        ((v + f64::EPSILON) * mul).round() / mul
    };
    if snapped == 0.0 { 0.0 } else { snapped }
}
