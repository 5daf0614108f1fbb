// File: crates/linechart-core/src/series.rs
// Summary: Series model (points, names) and per-series color resolution.
// Notes:
// - `SeriesSpec` is what callers hand in; `Series` is the validated, color-resolved
//   form the chart owns for its lifetime.

use serde::Deserialize;
use skia_safe as skia;

use crate::error::{ChartError, ChartResult};
use crate::theme::{self, ColorSource};

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Caller-side description of one series. Colors are optional overrides.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeriesSpec {
    pub name: String,
    pub points: Vec<Point>,
    pub line_color: Option<String>,
    pub point_color: Option<String>,
}

impl SeriesSpec {
    pub fn new(name: impl Into<String>, points: impl IntoIterator<Item = impl Into<Point>>) -> Self {
        Self {
            name: name.into(),
            points: points.into_iter().map(Into::into).collect(),
            line_color: None,
            point_color: None,
        }
    }

    pub fn with_line_color(mut self, color: impl Into<String>) -> Self {
        self.line_color = Some(color.into());
        self
    }

    pub fn with_point_color(mut self, color: impl Into<String>) -> Self {
        self.point_color = Some(color.into());
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: String,
    pub points: Vec<Point>,
    pub line_color: skia::Color,
    pub point_color: skia::Color,
}

impl Series {
    /// Validate `spec` and resolve its colors for position `index` of `count` series.
    ///
    /// A lone series gets the fixed black/gray pair. Otherwise indices below the
    /// palette length use the palette; later ones draw one color from `colors`
    /// and reuse it for the markers. Overrides win over either default.
    pub fn resolve(
        spec: SeriesSpec,
        index: usize,
        count: usize,
        colors: &mut dyn ColorSource,
    ) -> ChartResult<Self> {
        if spec.points.is_empty() {
            return Err(ChartError::config(format!("series {index} ({:?}) has no points", spec.name)));
        }
        if let Some(p) = spec.points.iter().find(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(ChartError::config(format!(
                "series {index} ({:?}) has a non-finite point ({}, {})",
                spec.name, p.x, p.y
            )));
        }

        let overridden_line = spec.line_color.as_deref().map(theme::parse_color).transpose()?;
        let overridden_point = spec.point_color.as_deref().map(theme::parse_color).transpose()?;

        let (line_color, default_point) = if count == 1 {
            (overridden_line.unwrap_or(theme::SINGLE_LINE), theme::SINGLE_POINT)
        } else if index < theme::LINE_PALETTE.len() {
            (overridden_line.unwrap_or(theme::LINE_PALETTE[index]), theme::POINT_PALETTE[index])
        } else {
            // Past the palette markers share the line color.
            let line = match overridden_line {
                Some(c) => c,
                None => colors.next_color(),
            };
            (line, line)
        };
        let point_color = overridden_point.unwrap_or(default_point);

        Ok(Self { name: spec.name, points: spec.points, line_color, point_color })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
