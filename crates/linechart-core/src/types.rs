// File: crates/linechart-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings, divisions, markers).

/// Default surface width in pixels.
pub const WIDTH: u32 = 800;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 600;
/// Default inset on every side.
pub const PADDING: u32 = 50;
/// Right inset when a legend has to fit beside the data zone.
pub const LEGEND_PADDING: u32 = 150;
/// Requested divisions per axis before normalization.
pub const DIVISIONS: u32 = 10;
/// CSS-like font descriptor used for every label.
pub const FONT: &str = "15px Georgia";
/// Radius of the filled marker drawn at every data point.
pub const MARKER_RADIUS: f32 = 3.0;
/// Radius of the legend swatch.
pub const LEGEND_SWATCH_RADIUS: f32 = 5.0;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Padding {
    pub left: u32,
    pub right: u32,
    pub up: u32,
    pub down: u32,
}

impl Padding {
    pub const fn new(left: u32, right: u32, up: u32, down: u32) -> Self {
        Self { left, right, up, down }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left.saturating_add(self.right) }
    /// Total vertical inset (up + down).
    pub const fn vsum(&self) -> u32 { self.up.saturating_add(self.down) }
}

impl Default for Padding {
    fn default() -> Self {
        Self::new(PADDING, PADDING, PADDING, PADDING)
    }
}

/// Output raster dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT }
    }
}
