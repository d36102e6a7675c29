use plotters::style::RGBColor;

use crate::error::{DashboardError, Result};

/// Single-letter and basic color names accepted in style sheets.
const NAMED_COLORS: [(&str, RGBColor); 14] = [
    ("b", RGBColor(0, 0, 255)),
    ("g", RGBColor(0, 128, 0)),
    ("r", RGBColor(255, 0, 0)),
    ("c", RGBColor(0, 191, 191)),
    ("m", RGBColor(191, 0, 191)),
    ("y", RGBColor(191, 191, 0)),
    ("k", RGBColor(0, 0, 0)),
    ("w", RGBColor(255, 255, 255)),
    ("black", RGBColor(0, 0, 0)),
    ("white", RGBColor(255, 255, 255)),
    ("red", RGBColor(255, 0, 0)),
    ("green", RGBColor(0, 128, 0)),
    ("blue", RGBColor(0, 0, 255)),
    ("gray", RGBColor(128, 128, 128)),
];

/// Parse `#rgb`, `#rrggbb`, the same without `#`, or a basic color name.
pub fn parse_color(value: &str) -> Result<RGBColor> {
    let trimmed = value.trim().trim_matches(|c| c == '"' || c == '\'');
    let lower = trimmed.to_ascii_lowercase();

    if let Some((_, color)) = NAMED_COLORS.iter().find(|(name, _)| *name == lower) {
        return Ok(*color);
    }

    let hex = lower.strip_prefix('#').unwrap_or(&lower);
    if hex.chars().all(|c| c.is_ascii_hexdigit()) {
        let digit = |i: usize, width: usize| u8::from_str_radix(&hex[i..i + width], 16).ok();
        let rgb = match hex.len() {
            3 => digit(0, 1)
                .zip(digit(1, 1))
                .zip(digit(2, 1))
                .map(|((r, g), b)| RGBColor(r * 17, g * 17, b * 17)),
            6 => digit(0, 2)
                .zip(digit(2, 2))
                .zip(digit(4, 2))
                .map(|((r, g), b)| RGBColor(r, g, b)),
            _ => None,
        };
        if let Some(rgb) = rgb {
            return Ok(rgb);
        }
    }

    Err(DashboardError::InvalidColor(value.to_string()))
}

/// Render a color as `#rrggbb`.
pub fn to_hex(color: RGBColor) -> String {
    format!("#{:02x}{:02x}{:02x}", color.0, color.1, color.2)
}
