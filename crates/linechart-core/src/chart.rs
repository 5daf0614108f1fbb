// File: crates/linechart-core/src/chart.rs
// Summary: Chart construction and the ordered render pipeline, rasterized with Skia.

use crate::axis::{self, AxisRange};
use crate::config::{ChartConfig, ResolvedConfig};
use crate::date;
use crate::error::{AxisKind, ChartError, ChartResult};
use crate::extent::DataExtents;
use crate::geometry::PixelPoint;
use crate::grid::ticks;
use crate::layout::Layout;
use crate::scale::CoordinateMapper;
use crate::series::{Series, SeriesSpec};
use crate::surface::{SkiaSurface, Surface};
use crate::text::TextAlign;
use crate::theme::{ColorSource, RandomColors};
use crate::types::{LEGEND_SWATCH_RADIUS, MARKER_RADIUS};

/// Gap between the data zone's left edge and the right end of Y tick labels.
const Y_LABEL_GAP: i32 = 8;
/// Baseline offset of X tick labels below the data zone.
const X_LABEL_DROP: i32 = 20;
/// Horizontal gap between the data zone and the legend / X title.
const RIGHT_GUTTER: i32 = 20;
/// Vertical distance between legend rows.
const LEGEND_ROW: i32 = 25;

/// A line chart whose geometry is fixed at construction. Drawing is pure: every
/// `draw` call rasterizes onto a fresh surface and yields identical bytes.
#[derive(Clone, Debug)]
pub struct Chart {
    series: Vec<Series>,
    config: ResolvedConfig,
    layout: Layout,
    mapper: CoordinateMapper,
}

impl Chart {
    /// Build a chart, drawing colors for series past the palette at random.
    pub fn new(series: Vec<SeriesSpec>, config: ChartConfig) -> ChartResult<Self> {
        Self::with_color_source(series, config, &mut RandomColors::default())
    }

    /// Build a chart with an explicit source for out-of-palette series colors.
    pub fn with_color_source(
        specs: Vec<SeriesSpec>,
        config: ChartConfig,
        colors: &mut dyn ColorSource,
    ) -> ChartResult<Self> {
        if specs.is_empty() {
            return Err(ChartError::config("a chart needs at least one series"));
        }
        let count = specs.len();
        let series = specs
            .into_iter()
            .enumerate()
            .map(|(i, spec)| Series::resolve(spec, i, count, &mut *colors))
            .collect::<ChartResult<Vec<_>>>()?;

        let config = ResolvedConfig::resolve(&config, count)?;
        let layout = Layout::new(&config)?;
        let (x, y) = axis_ranges(&series, &config)?;
        let mapper = CoordinateMapper::new(x, y, &layout)?;

        if let Some(labels) = &config.x_date_labels {
            let longest = series.iter().map(Series::len).max().unwrap_or(0);
            if labels.len() < longest {
                tracing::warn!(
                    labels = labels.len(),
                    points = longest,
                    "date label sequence is shorter than the longest series; tick labels clamp to the last entry"
                );
            }
        }

        Ok(Self { series, config, layout, mapper })
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    pub fn x_range(&self) -> AxisRange {
        self.mapper.x
    }

    pub fn y_range(&self) -> AxisRange {
        self.mapper.y
    }

    /// Render and return a `data:image/png;base64,...` URI.
    pub fn draw(&self) -> ChartResult<String> {
        let mut surface = self.rasterize()?;
        surface.encode_data_uri()
    }

    /// Render to PNG bytes in memory.
    pub fn render_to_png_bytes(&self) -> ChartResult<Vec<u8>> {
        let mut surface = self.rasterize()?;
        surface.encode_png()
    }

    /// Render to a PNG file, creating parent directories as needed.
    pub fn render_to_png(&self, output_png_path: impl AsRef<std::path::Path>) -> ChartResult<()> {
        let bytes = self.render_to_png_bytes()?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Render to an RGBA8 buffer. Returns (pixels, width, height, row_stride).
    pub fn render_to_rgba8(&self) -> ChartResult<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.rasterize()?;
        let (px, w, h) = surface.read_rgba8()?;
        Ok((px, w, h, w as usize * 4))
    }

    fn rasterize(&self) -> ChartResult<SkiaSurface> {
        let mut surface = SkiaSurface::new(self.layout.width(), self.layout.height())?;
        self.draw_on(&mut surface);
        Ok(surface)
    }

    /// Issue every primitive of the chart, in paint order, onto `surface`.
    pub fn draw_on<S: Surface + ?Sized>(&self, surface: &mut S) {
        tracing::trace!(series = self.series.len(), "drawing chart");
        self.draw_background(surface);
        self.draw_lines(surface);
        self.draw_title(surface);
        self.draw_axes(surface);
        self.draw_left(surface);
        if self.series.len() > 1 {
            self.draw_legend(surface);
        }
        self.draw_bottom(surface);
    }

    fn draw_background<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_rect(0, 0, self.layout.width(), self.layout.height(), self.config.colors.background);
    }

    fn draw_lines<S: Surface + ?Sized>(&self, surface: &mut S) {
        for s in &self.series {
            let mut prev: Option<PixelPoint> = None;
            for &p in &s.points {
                let px = self.mapper.to_pixel(p);
                // Each segment is stroked before the marker at its end, so markers
                // sit on top of the segment leading into them.
                if let Some(from) = prev {
                    surface.stroke_line(from, px, s.line_color);
                }
                surface.fill_circle(px, MARKER_RADIUS, s.point_color);
                prev = Some(px);
            }
        }
    }

    fn draw_title<S: Surface + ?Sized>(&self, surface: &mut S) {
        let at = ((self.layout.width() / 2) as f32, (self.layout.padding.up / 2) as f32);
        let (font, color) = (&self.config.font, self.config.colors.title);
        surface.fill_text(&self.config.titles.title, at, font, color, TextAlign::Center);
    }

    fn draw_axes<S: Surface + ?Sized>(&self, surface: &mut S) {
        let zone = self.layout.data;
        let origin = self.layout.origin();
        let color = self.config.colors.coordinate;
        surface.stroke_line(origin, PixelPoint::new(zone.left, zone.top), color);
        surface.stroke_line(origin, PixelPoint::new(zone.right, zone.bottom), color);
    }

    fn draw_left<S: Surface + ?Sized>(&self, surface: &mut S) {
        let zone = self.layout.data;
        let colors = &self.config.colors;
        let font = &self.config.font;
        for tick in ticks(&self.mapper.y) {
            let y = self.mapper.y_to_px(tick.value);
            surface.stroke_line(PixelPoint::new(zone.left, y), PixelPoint::new(zone.right, y), colors.grid);
            let at = ((zone.left - Y_LABEL_GAP) as f32, y as f32);
            surface.fill_text(&tick.label, at, font, colors.title_y, TextAlign::Right);
        }
        let at = (zone.left as f32, self.layout.padding.up as f32 - 20.0);
        surface.fill_text(&self.config.titles.y, at, font, colors.title_y, TextAlign::Right);
    }

    fn draw_legend<S: Surface + ?Sized>(&self, surface: &mut S) {
        let x = self.layout.data.right + RIGHT_GUTTER;
        let top = self.layout.padding.up as i32 + 10;
        for (k, s) in self.series.iter().enumerate() {
            let y = top + LEGEND_ROW * k as i32;
            surface.fill_circle(PixelPoint::new(x, y), LEGEND_SWATCH_RADIUS, s.line_color);
            // Baseline nudged down so the name sits centered on the swatch.
            let at = ((x + 12) as f32, y as f32 + self.config.font.size * 0.35);
            surface.fill_text(&s.name, at, &self.config.font, self.config.colors.title, TextAlign::Left);
        }
    }

    fn draw_bottom<S: Surface + ?Sized>(&self, surface: &mut S) {
        let zone = self.layout.data;
        let colors = &self.config.colors;
        let font = &self.config.font;
        let range = self.mapper.x;
        for tick in ticks(&range) {
            let x = self.mapper.x_to_px(tick.value);
            surface.stroke_line(PixelPoint::new(x, zone.bottom), PixelPoint::new(x, zone.top), colors.grid);
            let text = match &self.config.x_date_labels {
                Some(labels) => labels[date::label_index(labels.len(), range.divisions, tick.index)].as_str(),
                None => tick.label.as_str(),
            };
            let at = (x as f32, (zone.bottom + X_LABEL_DROP) as f32);
            surface.fill_text(text, at, font, colors.title_x, TextAlign::Center);
        }
        let at = ((zone.right + RIGHT_GUTTER) as f32, zone.bottom as f32);
        surface.fill_text(&self.config.titles.x, at, font, colors.title_x, TextAlign::Center);
    }
}

/// X and Y ranges from the union of all series extents. Date-mode X keeps the raw
/// extents and the requested division count.
fn axis_ranges(series: &[Series], config: &ResolvedConfig) -> ChartResult<(AxisRange, AxisRange)> {
    let e = DataExtents::from_series(series)
        .ok_or_else(|| ChartError::config("a chart needs at least one point"))?;
    if e.x_max == e.x_min {
        return Err(ChartError::DegenerateRange { axis: AxisKind::X, value: e.x_min });
    }
    if e.y_max == e.y_min {
        return Err(ChartError::DegenerateRange { axis: AxisKind::Y, value: e.y_min });
    }
    let x = if config.is_date_mode() {
        AxisRange::raw(e.x_min, e.x_max, config.divide_x)?
    } else {
        axis::normalize(AxisKind::X, e.x_min, e.x_max, config.divide_x)?
    };
    let y = axis::normalize(AxisKind::Y, e.y_min, e.y_max, config.divide_y)?;
    Ok((x, y))
}
