// File: crates/linechart-core/src/date.rs
// Summary: Date-mode X labels: tick-to-label index mapping and a daily label generator.

use chrono::NaiveDate;

/// Index into a label sequence of length `len` for tick `tick` of `divisions`.
///
/// Ticks spread proportionally over the sequence (`floor(len / divisions * tick)`);
/// with a single division the two ticks hit the first and last label. Indices past
/// the end clamp to the last label.
pub fn label_index(len: usize, divisions: u32, tick: u32) -> usize {
    if len == 0 {
        return 0;
    }
    let idx = if divisions <= 1 {
        (len - 1).saturating_mul(tick as usize)
    } else {
        (len as f64 / divisions as f64 * tick as f64).floor() as usize
    };
    idx.min(len - 1)
}

/// `count` consecutive-day labels starting at `start`, rendered with `format`
/// (a chrono strftime pattern such as `%Y-%m-%d`).
pub fn daily_labels(start: NaiveDate, count: usize, format: &str) -> Vec<String> {
    start
        .iter_days()
        .take(count)
        .map(|d| d.format(format).to_string())
        .collect()
}
