// File: crates/linechart-core/src/scale.rs
// Summary: Affine data-to-pixel mapping over the data zone, snapped with ceil.

use crate::axis::AxisRange;
use crate::error::{AxisKind, ChartError, ChartResult};
use crate::geometry::PixelPoint;
use crate::layout::Layout;
use crate::series::Point;

/// Maps data coordinates into the data zone. Y is flipped: data grows up, rows grow down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateMapper {
    pub x: AxisRange,
    pub y: AxisRange,
    /// Pixels per data unit along X.
    pub width_interval: f64,
    /// Pixels per data unit along Y.
    pub height_interval: f64,
    padding_left: f64,
    padding_down: f64,
    canvas_height: f64,
}

impl CoordinateMapper {
    pub fn new(x: AxisRange, y: AxisRange, layout: &Layout) -> ChartResult<Self> {
        if x.span() <= 0.0 {
            return Err(ChartError::DegenerateRange { axis: AxisKind::X, value: x.min });
        }
        if y.span() <= 0.0 {
            return Err(ChartError::DegenerateRange { axis: AxisKind::Y, value: y.min });
        }
        Ok(Self {
            x,
            y,
            width_interval: layout.data.width() as f64 / x.span(),
            height_interval: layout.data.height() as f64 / y.span(),
            padding_left: layout.padding.left as f64,
            padding_down: layout.padding.down as f64,
            canvas_height: layout.size.height as f64,
        })
    }

    #[inline]
    pub fn x_to_px(&self, x: f64) -> i32 {
        (self.width_interval * (x - self.x.min) + self.padding_left).ceil() as i32
    }

    #[inline]
    pub fn y_to_px(&self, y: f64) -> i32 {
        (self.canvas_height - self.height_interval * (y - self.y.min) - self.padding_down).ceil() as i32
    }

    #[inline]
    pub fn to_pixel(&self, p: Point) -> PixelPoint {
        PixelPoint::new(self.x_to_px(p.x), self.y_to_px(p.y))
    }

    /// Inverse transform. Exact up to the ceil snapping of `to_pixel`, i.e. within
    /// one pixel's worth of data units per axis.
    pub fn from_pixel(&self, px: PixelPoint) -> Point {
        Point::new(
            self.x.min + (px.x as f64 - self.padding_left) / self.width_interval,
            self.y.min + (self.canvas_height - self.padding_down - px.y as f64) / self.height_interval,
        )
    }
}
