// File: crates/linechart-core/src/extent.rs
// Summary: Raw data extents over every series, before any axis normalization.

use crate::series::Series;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataExtents {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl DataExtents {
    /// Min of mins and max of maxes across all series. `None` when there are no points.
    pub fn from_series(series: &[Series]) -> Option<Self> {
        let mut points = series.iter().flat_map(|s| s.points.iter());
        let first = points.next()?;
        let mut e = Self { x_min: first.x, x_max: first.x, y_min: first.y, y_max: first.y };
        for p in points {
            e.x_min = e.x_min.min(p.x);
            e.x_max = e.x_max.max(p.x);
            e.y_min = e.y_min.min(p.y);
            e.y_max = e.y_max.max(p.y);
        }
        Some(e)
    }
}
