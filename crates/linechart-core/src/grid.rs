// File: crates/linechart-core/src/grid.rs
// Summary: Tick layout helpers: decimal-exact tick values and their labels.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::axis::AxisRange;
use crate::decimal;

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub index: u32,
    pub value: f64,
    pub label: String,
}

/// One tick per division boundary, `range.divisions + 1` in total.
pub fn ticks(range: &AxisRange) -> Vec<Tick> {
    if let Some(values) = decimal::tick_values(range.min, range.max, range.divisions) {
        let step = match values.as_slice() {
            [first, second, ..] => *second - *first,
            _ => Decimal::ZERO,
        };
        let scale = decimal::label_scale(step);
        return values
            .into_iter()
            .zip(0u32..)
            .map(|(d, index)| Tick {
                index,
                value: d.to_f64().unwrap_or(range.min),
                label: decimal::format_decimal(d, scale),
            })
            .collect();
    }

    // Operands too wide for decimal space: accumulate with the best-effort helper.
    let step = decimal::divide(decimal::add(range.max, -range.min), range.divisions as f64);
    let mut value = range.min;
    let mut out = Vec::with_capacity(range.divisions as usize + 1);
    for index in 0..=range.divisions {
        out.push(Tick { index, value, label: decimal::format_float(value) });
        value = decimal::add(value, step);
    }
    out
}
