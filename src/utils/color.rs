//! Color helpers for theme contrast detection

use once_cell::sync::Lazy;
use regex::Regex;

/// Perceived luminance below this value counts as a dark background
const DARK_LUMINANCE_THRESHOLD: f64 = 128.0;

static RGB_FUNCTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)^rgba?\(\s*([0-9.]+)\s*[,\s]\s*([0-9.]+)\s*[,\s]\s*([0-9.]+)",
        r"\s*(?:[,/]\s*([0-9.]+%?)\s*)?\)$"
    ))
    .expect("rgb pattern is valid")
});

/// An sRGB color with 8-bit channels and an opacity in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f64,
}

impl Rgba {
    /// Perceived luminance (ITU-R BT.601 weights), `0.0..=255.0`
    pub fn luminance(&self) -> f64 {
        0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b)
    }
}

/// Parse `#rgb`, `#rrggbb`, `rgb(r, g, b)` and `rgba(r, g, b, a)` colors.
pub fn parse_color(color: &str) -> Option<Rgba> {
    let color = color.trim();

    if let Some(hex) = color.strip_prefix('#') {
        return parse_hex(hex);
    }

    let caps = RGB_FUNCTION.captures(color)?;
    let channel = |i: usize| -> Option<u8> {
        let value: f64 = caps.get(i)?.as_str().parse().ok()?;
        Some(value.round().clamp(0.0, 255.0) as u8)
    };
    let alpha = match caps.get(4) {
        Some(m) => {
            let raw = m.as_str();
            match raw.strip_suffix('%') {
                Some(percent) => percent.parse::<f64>().ok()? / 100.0,
                None => raw.parse::<f64>().ok()?,
            }
        }
        None => 1.0,
    };

    Some(Rgba {
        r: channel(1)?,
        g: channel(2)?,
        b: channel(3)?,
        alpha: alpha.clamp(0.0, 1.0),
    })
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let (r, g, b) = match hex.len() {
        3 => {
            let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|d| d * 17);
            (digit(0)?, digit(1)?, digit(2)?)
        }
        6 => {
            let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            (pair(0)?, pair(2)?, pair(4)?)
        }
        _ => return None,
    };
    Some(Rgba { r, g, b, alpha: 1.0 })
}

/// Whether `color` is dark enough to need light foreground content.
///
/// Fully transparent and unparseable colors are treated as light, since the
/// page behind them is what the visitor actually sees.
pub fn is_dark(color: &str) -> bool {
    match parse_color(color) {
        Some(rgba) if rgba.alpha > 0.0 => rgba.luminance() < DARK_LUMINANCE_THRESHOLD,
        _ => false,
    }
}
