// File: crates/linechart-core/src/config.rs
// Summary: Caller-facing chart options and their fully-resolved, immutable form.
// Notes:
// - `ChartConfig` mirrors the option object callers already write (camelCase keys,
//   every field optional) and deserializes with serde.
// - `ResolvedConfig` has every default applied and every string parsed; the render
//   pipeline only ever reads this.

use serde::Deserialize;
use skia_safe as skia;

use crate::error::{ChartError, ChartResult};
use crate::text::FontSpec;
use crate::theme::{parse_color, ChartColors};
use crate::types::{self, CanvasSize, Padding};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartConfig {
    pub padding: PaddingConfig,
    pub size: SizeConfig,
    /// CSS-like descriptor, e.g. `"15px Georgia"`.
    pub font: Option<String>,
    pub color: ColorConfig,
    pub label: LabelConfig,
    /// Relabel X ticks from `x_date_label` instead of printing their values.
    pub x_date_mode: bool,
    pub x_date_label: Option<Vec<String>>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct PaddingConfig {
    pub left: Option<u32>,
    pub right: Option<u32>,
    pub up: Option<u32>,
    pub down: Option<u32>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SizeConfig {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorConfig {
    pub background: Option<String>,
    pub title: Option<String>,
    pub title_x: Option<String>,
    pub title_y: Option<String>,
    pub coordinate: Option<String>,
    pub grid: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LabelConfig {
    pub title: Option<String>,
    pub title_x: Option<String>,
    pub title_y: Option<String>,
    pub divide_x: Option<u32>,
    pub divide_y: Option<u32>,
}

impl ChartConfig {
    pub fn with_title(mut self, title: impl Into<String>, title_x: impl Into<String>, title_y: impl Into<String>) -> Self {
        self.label.title = Some(title.into());
        self.label.title_x = Some(title_x.into());
        self.label.title_y = Some(title_y.into());
        self
    }

    pub fn with_divisions(mut self, divide_x: u32, divide_y: u32) -> Self {
        self.label.divide_x = Some(divide_x);
        self.label.divide_y = Some(divide_y);
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = SizeConfig { width: Some(width), height: Some(height) };
        self
    }

    pub fn with_date_labels(mut self, labels: Vec<String>) -> Self {
        self.x_date_mode = true;
        self.x_date_label = Some(labels);
        self
    }
}

/// Chart and axis titles.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Titles {
    pub title: String,
    pub x: String,
    pub y: String,
}

/// Configuration with all defaults applied. Built once per chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedConfig {
    pub padding: Padding,
    pub size: CanvasSize,
    pub font: FontSpec,
    pub colors: ChartColors,
    pub titles: Titles,
    /// Requested divisions; the range normalizer may change these.
    pub divide_x: u32,
    pub divide_y: u32,
    /// Present exactly when X is in date mode.
    pub x_date_labels: Option<Vec<String>>,
}

impl ResolvedConfig {
    pub fn resolve(config: &ChartConfig, series_count: usize) -> ChartResult<Self> {
        let default_right = if series_count > 1 { types::LEGEND_PADDING } else { types::PADDING };
        let p = config.padding;
        let padding = Padding::new(
            p.left.unwrap_or(types::PADDING),
            p.right.unwrap_or(default_right),
            p.up.unwrap_or(types::PADDING),
            p.down.unwrap_or(types::PADDING),
        );
        let size = CanvasSize {
            width: config.size.width.unwrap_or(types::WIDTH),
            height: config.size.height.unwrap_or(types::HEIGHT),
        };
        let font: FontSpec = config.font.as_deref().unwrap_or(types::FONT).parse()?;

        let defaults = ChartColors::default();
        let c = &config.color;
        let colors = ChartColors {
            background: color_or(&c.background, defaults.background)?,
            title: color_or(&c.title, defaults.title)?,
            title_x: color_or(&c.title_x, defaults.title_x)?,
            title_y: color_or(&c.title_y, defaults.title_y)?,
            coordinate: color_or(&c.coordinate, defaults.coordinate)?,
            grid: color_or(&c.grid, defaults.grid)?,
        };

        let l = &config.label;
        let titles = Titles {
            title: l.title.clone().unwrap_or_default(),
            x: l.title_x.clone().unwrap_or_default(),
            y: l.title_y.clone().unwrap_or_default(),
        };
        let divide_x = l.divide_x.unwrap_or(types::DIVISIONS);
        let divide_y = l.divide_y.unwrap_or(types::DIVISIONS);
        if divide_x == 0 || divide_y == 0 {
            return Err(ChartError::config("division counts must be at least 1"));
        }

        let x_date_labels = if config.x_date_mode {
            match &config.x_date_label {
                Some(labels) if !labels.is_empty() => Some(labels.clone()),
                _ => return Err(ChartError::config("xDateMode requires a non-empty xDateLabel sequence")),
            }
        } else {
            None
        };

        Ok(Self { padding, size, font, colors, titles, divide_x, divide_y, x_date_labels })
    }

    pub fn is_date_mode(&self) -> bool {
        self.x_date_labels.is_some()
    }
}

fn color_or(value: &Option<String>, fallback: skia::Color) -> ChartResult<skia::Color> {
    match value.as_deref() {
        Some(c) => parse_color(c),
        None => Ok(fallback),
    }
}
