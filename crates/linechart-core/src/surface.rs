// File: crates/linechart-core/src/surface.rs
// Summary: Immediate-mode drawing surface contract and its Skia CPU raster implementation.

use base64::Engine as _;
use skia_safe as skia;

use crate::error::{ChartError, ChartResult};
use crate::geometry::PixelPoint;
use crate::text::{FontSpec, TextAlign, TextShaper};

/// MIME prefix of the data URI returned by `Chart::draw`.
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// The primitives the render pipeline needs. Calls arrive in paint order.
pub trait Surface {
    fn fill_rect(&mut self, left: i32, top: i32, width: i32, height: i32, color: skia::Color);
    fn stroke_line(&mut self, from: PixelPoint, to: PixelPoint, color: skia::Color);
    fn fill_circle(&mut self, center: PixelPoint, radius: f32, color: skia::Color);
    /// `at.y` is the alphabetic baseline; `at.x` is interpreted per `align`.
    fn fill_text(&mut self, text: &str, at: (f32, f32), font: &FontSpec, color: skia::Color, align: TextAlign);
}

/// CPU raster surface; every chart draw gets a fresh one.
pub struct SkiaSurface {
    surface: skia::Surface,
    shaper: TextShaper,
}

impl SkiaSurface {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        let surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| ChartError::Surface(format!("failed to create {width}x{height} raster surface")))?;
        Ok(Self { surface, shaper: TextShaper::new() })
    }

    /// Snapshot the current pixels and encode them as PNG.
    pub fn encode_png(&mut self) -> ChartResult<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| ChartError::Surface("encode PNG failed".into()))?;
        Ok(data.as_bytes().to_vec())
    }

    /// PNG encoding wrapped in a `data:image/png;base64,` URI.
    pub fn encode_data_uri(&mut self) -> ChartResult<String> {
        let png = self.encode_png()?;
        Ok(format!("{PNG_DATA_URI_PREFIX}{}", base64::engine::general_purpose::STANDARD.encode(png)))
    }

    /// Raw RGBA8 pixels (row stride = width * 4).
    pub fn read_rgba8(&mut self) -> ChartResult<(Vec<u8>, i32, i32)> {
        let (w, h) = (self.surface.width(), self.surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !self.surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            return Err(ChartError::Surface("read_pixels failed".into()));
        }
        Ok((pixels, w, h))
    }
}

impl Surface for SkiaSurface {
    fn fill_rect(&mut self, left: i32, top: i32, width: i32, height: i32, color: skia::Color) {
        let mut paint = skia::Paint::default();
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(color);
        let rect = skia::Rect::from_xywh(left as f32, top as f32, width as f32, height as f32);
        self.surface.canvas().draw_rect(rect, &paint);
    }

    fn stroke_line(&mut self, from: PixelPoint, to: PixelPoint, color: skia::Color) {
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(1.0);
        stroke.set_color(color);
        let (a, b): ((f32, f32), (f32, f32)) = (from.into(), to.into());
        self.surface.canvas().draw_line(a, b, &stroke);
    }

    fn fill_circle(&mut self, center: PixelPoint, radius: f32, color: skia::Color) {
        let mut body = skia::Paint::default();
        body.set_anti_alias(true);
        body.set_style(skia::paint::Style::Fill);
        body.set_color(color);
        let c: (f32, f32) = center.into();
        self.surface.canvas().draw_circle(c, radius, &body);
    }

    fn fill_text(&mut self, text: &str, at: (f32, f32), font: &FontSpec, color: skia::Color, align: TextAlign) {
        let canvas = self.surface.canvas();
        self.shaper.draw(canvas, text, at, font, color, align);
    }
}

/// Strip the MIME prefix from a base64 data URI and decode the payload.
pub fn strip_data_uri(uri: &str) -> ChartResult<Vec<u8>> {
    let payload = match uri.split_once(";base64,") {
        Some((mime, payload)) if mime.starts_with("data:") => payload,
        _ => return Err(ChartError::config("expected a `data:<mime>;base64,` uri")),
    };
    Ok(base64::engine::general_purpose::STANDARD.decode(payload)?)
}
