// File: crates/linechart-core/src/layout.rs
// Summary: Draw-zone geometry: canvas size, paddings, and the data zone they leave.
//
// ```text
// +---------+----------------- up (title) ---------------+--------------+
// |  left   |                                            |    right     |
// | (y axis)|                 data zone                  |   (legend)   |
// |         |                                            |              |
// +---------+---------------- down (x axis) -------------+--------------+
// ```

use crate::config::ResolvedConfig;
use crate::error::{ChartError, ChartResult};
use crate::geometry::{PixelPoint, RectI32};
use crate::types::{CanvasSize, Padding};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub size: CanvasSize,
    pub padding: Padding,
    /// Region where series geometry is plotted.
    pub data: RectI32,
}

impl Layout {
    pub fn new(config: &ResolvedConfig) -> ChartResult<Self> {
        let (size, padding) = (config.size, config.padding);
        if size.width == 0 || size.height == 0 || size.width > i32::MAX as u32 || size.height > i32::MAX as u32 {
            return Err(ChartError::config(format!("invalid canvas size {}x{}", size.width, size.height)));
        }
        if padding.hsum() >= size.width || padding.vsum() >= size.height {
            return Err(ChartError::config(format!(
                "padding {padding:?} leaves no data zone in a {}x{} canvas",
                size.width, size.height
            )));
        }
        let data = RectI32::from_ltrb(
            padding.left as i32,
            padding.up as i32,
            (size.width - padding.right) as i32,
            (size.height - padding.down) as i32,
        );
        tracing::debug!(?data, width = size.width, height = size.height, "computed chart layout");
        Ok(Self { size, padding, data })
    }

    pub fn width(&self) -> i32 {
        self.size.width as i32
    }

    pub fn height(&self) -> i32 {
        self.size.height as i32
    }

    /// Bottom-left corner of the data zone, where both axes meet.
    pub fn origin(&self) -> PixelPoint {
        PixelPoint::new(self.data.left, self.data.bottom)
    }
}
