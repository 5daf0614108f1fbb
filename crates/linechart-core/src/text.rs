// File: crates/linechart-core/src/text.rs
// Summary: CSS-like font descriptors and a Skia textlayout shaper with anchor alignment.

use std::str::FromStr;

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::error::{ChartError, ChartResult};

/// Families tried after the ones a descriptor names.
const FALLBACK_FAMILIES: [&str; 5] = ["Georgia", "Times New Roman", "DejaVu Serif", "DejaVu Sans", "serif"];

/// Horizontal anchoring of a text run relative to its x coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Parsed form of a descriptor such as `"15px Georgia"` or `"bold 12px 'Fira Sans', serif"`.
#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
    pub size: f32,
    pub families: Vec<String>,
    pub bold: bool,
    pub italic: bool,
}

impl FontSpec {
    pub fn style(&self) -> skia::FontStyle {
        match (self.bold, self.italic) {
            (true, true) => skia::FontStyle::bold_italic(),
            (true, false) => skia::FontStyle::bold(),
            (false, true) => skia::FontStyle::italic(),
            (false, false) => skia::FontStyle::normal(),
        }
    }
}

impl FromStr for FontSpec {
    type Err = ChartError;

    fn from_str(descriptor: &str) -> ChartResult<Self> {
        let invalid = |why: &str| ChartError::config(format!("invalid font {descriptor:?}: {why}"));
        let tokens: Vec<&str> = descriptor.split_whitespace().collect();
        let size_at = tokens
            .iter()
            .position(|t| t.ends_with("px"))
            .ok_or_else(|| invalid("missing pixel size"))?;
        let size: f32 = tokens[size_at]
            .trim_end_matches("px")
            .parse()
            .map_err(|_| invalid("pixel size is not a number"))?;
        if !(size > 0.0) || !size.is_finite() {
            return Err(invalid("pixel size must be positive"));
        }

        let (mut bold, mut italic) = (false, false);
        for modifier in &tokens[..size_at] {
            match modifier.to_ascii_lowercase().as_str() {
                "bold" | "bolder" => bold = true,
                "italic" | "oblique" => italic = true,
                "normal" | "lighter" => {}
                weight => match weight.parse::<u32>() {
                    Ok(w) => bold = w >= 600,
                    Err(_) => return Err(invalid("unknown style modifier")),
                },
            }
        }

        let families: Vec<String> = tokens[size_at + 1..]
            .join(" ")
            .split(',')
            .map(|f| f.trim().trim_matches(|c| c == '"' || c == '\'').to_string())
            .filter(|f| !f.is_empty())
            .collect();
        if families.is_empty() {
            return Err(invalid("missing font family"));
        }
        Ok(Self { size, families, bold, italic })
    }
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(font: &FontSpec, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(font.size);
        ts.set_color(color);
        ts.set_font_style(font.style());
        let families: Vec<&str> = font
            .families
            .iter()
            .map(String::as_str)
            .chain(FALLBACK_FAMILIES)
            .collect();
        ts.set_font_families(&families);
        ts
    }

    pub fn layout(&self, text: &str, font: &FontSpec, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(font, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `text` with its alphabetic baseline at `y`, anchored at `x` per `align`.
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        (x, y): (f32, f32),
        font: &FontSpec,
        color: skia::Color,
        align: TextAlign,
    ) {
        if text.is_empty() {
            return;
        }
        let p = self.layout(text, font, color);
        let width = p.longest_line();
        let left = match align {
            TextAlign::Left => x,
            TextAlign::Center => x - width / 2.0,
            TextAlign::Right => x - width,
        };
        // Paragraphs paint from their top-left corner.
        let top = y - p.alphabetic_baseline();
        p.paint(canvas, (left, top));
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
