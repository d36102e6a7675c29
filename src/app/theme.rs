use egui::{Color32, Context, Visuals};
use plotters::style::RGBColor;

use crate::brand::UiPalette;

pub fn to_color32(color: RGBColor) -> Color32 {
    Color32::from_rgb(color.0, color.1, color.2)
}

/// Black or white, whichever reads better on `fill`.
pub fn contrast_text(fill: RGBColor) -> Color32 {
    let luma = 0.299 * fill.0 as f32 + 0.587 * fill.1 as f32 + 0.114 * fill.2 as f32;
    if luma > 150.0 {
        Color32::BLACK
    } else {
        Color32::WHITE
    }
}

/// Apply the brand colors to the egui visuals.
pub fn apply_brand_visuals(ctx: &Context, palette: &UiPalette) {
    let background = to_color32(palette.background);
    let primary = to_color32(palette.primary);

    let mut visuals = Visuals::light();
    visuals.panel_fill = background;
    visuals.window_fill = background;
    visuals.override_text_color = Some(to_color32(palette.foreground));
    visuals.hyperlink_color = primary;
    visuals.selection.bg_fill = primary.gamma_multiply(0.35);
    visuals.selection.stroke.color = primary;
    ctx.set_visuals(visuals);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contrast_text() {
        assert_eq!(contrast_text(RGBColor(0xee, 0xee, 0xee)), Color32::BLACK);
        assert_eq!(contrast_text(RGBColor(0x55, 0x1a, 0x8b)), Color32::WHITE);
    }
}
