// File: crates/linechart-core/src/theme.rs
// Summary: Chart chrome colors, the multi-series palette, and injectable color sources.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use skia_safe as skia;

use crate::error::{ChartError, ChartResult};

/// Line colors handed to series 0..8 of a multi-series chart.
pub const LINE_PALETTE: [skia::Color; 8] = [
    skia::Color::new(0xFF_54_70_C6),
    skia::Color::new(0xFF_91_CC_75),
    skia::Color::new(0xFF_FA_C8_58),
    skia::Color::new(0xFF_EE_66_66),
    skia::Color::new(0xFF_73_C0_DE),
    skia::Color::new(0xFF_3B_A2_72),
    skia::Color::new(0xFF_FC_84_52),
    skia::Color::new(0xFF_9A_60_B4),
];

/// Marker colors paired with `LINE_PALETTE`; a darker shade of the same hue.
pub const POINT_PALETTE: [skia::Color; 8] = [
    skia::Color::new(0xFF_2F_4B_9A),
    skia::Color::new(0xFF_5E_9A_44),
    skia::Color::new(0xFF_C8_96_1E),
    skia::Color::new(0xFF_B8_34_34),
    skia::Color::new(0xFF_3A_8C_AE),
    skia::Color::new(0xFF_1F_6E_48),
    skia::Color::new(0xFF_C8_58_28),
    skia::Color::new(0xFF_6A_36_84),
];

/// Colors of a lone series, which never uses the palette.
pub const SINGLE_LINE: skia::Color = skia::Color::new(0xFF_00_00_00);
pub const SINGLE_POINT: skia::Color = skia::Color::new(0xFF_80_80_80);

/// Colors of everything that is not series geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartColors {
    pub background: skia::Color,
    pub title: skia::Color,
    pub title_x: skia::Color,
    pub title_y: skia::Color,
    pub coordinate: skia::Color,
    pub grid: skia::Color,
}

impl Default for ChartColors {
    fn default() -> Self {
        Self {
            background: skia::Color::from_rgb(0xff, 0xff, 0xff),
            title: skia::Color::from_rgb(0x00, 0x00, 0x00),
            title_x: skia::Color::from_rgb(0x00, 0x00, 0x00),
            title_y: skia::Color::from_rgb(0x00, 0x00, 0x00),
            coordinate: skia::Color::from_rgb(0x00, 0x00, 0x00),
            grid: skia::Color::from_rgb(0x99, 0x99, 0x99),
        }
    }
}

/// Supplies colors for series past the end of the palette.
pub trait ColorSource {
    fn next_color(&mut self) -> skia::Color;
}

/// Deterministic source; the same seed yields the same colors.
#[derive(Clone, Debug)]
pub struct SeededColors {
    rng: StdRng,
}

impl SeededColors {
    pub fn new(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl ColorSource for SeededColors {
    fn next_color(&mut self) -> skia::Color {
        random_rgb(&mut self.rng)
    }
}

/// Unseeded source used by `Chart::new`, seeded from the OS.
#[derive(Clone, Debug)]
pub struct RandomColors {
    rng: StdRng,
}

impl Default for RandomColors {
    fn default() -> Self {
        Self { rng: StdRng::from_os_rng() }
    }
}

impl ColorSource for RandomColors {
    fn next_color(&mut self) -> skia::Color {
        random_rgb(&mut self.rng)
    }
}

fn random_rgb(rng: &mut impl Rng) -> skia::Color {
    let [r, g, b] = rng.random::<[u8; 3]>();
    skia::Color::from_rgb(r, g, b)
}

/// `#rrggbb`, lowercase; alpha is dropped.
pub fn to_hex(color: skia::Color) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

/// Parse `#rgb`, `#rrggbb`, `#rrggbbaa` or one of the basic CSS color names.
pub fn parse_color(input: &str) -> ChartResult<skia::Color> {
    let s = input.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| ChartError::config(format!("invalid color {input:?}")));
    }
    let named = match s.to_ascii_lowercase().as_str() {
        "black" => skia::Color::from_rgb(0x00, 0x00, 0x00),
        "white" => skia::Color::from_rgb(0xff, 0xff, 0xff),
        "gray" | "grey" => skia::Color::from_rgb(0x80, 0x80, 0x80),
        "silver" => skia::Color::from_rgb(0xc0, 0xc0, 0xc0),
        "red" => skia::Color::from_rgb(0xff, 0x00, 0x00),
        "green" => skia::Color::from_rgb(0x00, 0x80, 0x00),
        "blue" => skia::Color::from_rgb(0x00, 0x00, 0xff),
        "yellow" => skia::Color::from_rgb(0xff, 0xff, 0x00),
        "orange" => skia::Color::from_rgb(0xff, 0xa5, 0x00),
        "purple" => skia::Color::from_rgb(0x80, 0x00, 0x80),
        "transparent" => skia::Color::from_argb(0, 0, 0, 0),
        _ => return Err(ChartError::config(format!("invalid color {input:?}"))),
    };
    Ok(named)
}

fn parse_hex(hex: &str) -> Option<skia::Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 => {
            let nib = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
            Some(skia::Color::from_rgb(nib(0)?, nib(1)?, nib(2)?))
        }
        6 => Some(skia::Color::from_rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(skia::Color::from_argb(byte(6)?, byte(0)?, byte(2)?, byte(4)?)),
        _ => None,
    }
}
