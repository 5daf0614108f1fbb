// File: crates/linechart-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart construction and rendering.

pub mod axis;
pub mod chart;
pub mod config;
pub mod date;
pub mod decimal;
pub mod error;
pub mod extent;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod scale;
pub mod series;
pub mod surface;
pub mod text;
pub mod theme;
pub mod types;

pub use axis::{normalize, AxisRange};
pub use chart::Chart;
pub use config::{ChartConfig, ResolvedConfig};
pub use error::{AxisKind, ChartError, ChartResult};
pub use geometry::PixelPoint;
pub use layout::Layout;
pub use scale::CoordinateMapper;
pub use series::{Point, Series, SeriesSpec};
pub use surface::{strip_data_uri, SkiaSurface, Surface, PNG_DATA_URI_PREFIX};
pub use text::{FontSpec, TextAlign};
pub use theme::{ColorSource, RandomColors, SeededColors};
