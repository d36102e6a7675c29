use std::fmt::Write as _;

use super::BrandSpec;
use crate::error::{DashboardError, Result};

/// Third entry of the series color cycle, after the brand's violet and red.
pub const FALLBACK_CYCLE_COLOR: &str = "g";

/// Style sheet key of the series color cycle.
pub const CYCLE_KEY: &str = "axes.prop_cycle";

/// Flat chart style derived from a brand palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleConfig {
    pub axes_facecolor: String,
    pub axes_edgecolor: String,
    pub axes_labelcolor: String,
    pub axes_titlecolor: String,
    pub figure_facecolor: String,
    pub figure_edgecolor: String,
    pub text_color: String,
    pub xtick_color: String,
    pub ytick_color: String,
    /// Series colors in draw order, without a leading `#`
    pub color_cycle: Vec<String>,
}

/// Map the brand palette onto chart style properties.
///
/// Fails with [`DashboardError::MissingPaletteKey`] if any of `neutral`,
/// `black`, `violet` or `red` is absent.
pub fn translate(brand: &BrandSpec) -> Result<StyleConfig> {
    let role = |name: &str| -> Result<String> {
        brand
            .palette(name)
            .map(str::to_string)
            .ok_or_else(|| DashboardError::MissingPaletteKey(name.to_string()))
    };

    let neutral = role("neutral")?;
    let black = role("black")?;

    let color_cycle = [role("violet")?, role("red")?, FALLBACK_CYCLE_COLOR.to_string()]
        .into_iter()
        .map(|c| c.trim_start_matches('#').to_string())
        .collect();

    Ok(StyleConfig {
        axes_facecolor: neutral.clone(),
        axes_edgecolor: black.clone(),
        axes_labelcolor: black.clone(),
        axes_titlecolor: black.clone(),
        figure_facecolor: neutral,
        figure_edgecolor: black.clone(),
        text_color: black.clone(),
        xtick_color: black.clone(),
        ytick_color: black,
        color_cycle,
    })
}

impl StyleConfig {
    /// Scalar properties as (style sheet key, value), in sheet order.
    pub fn entries(&self) -> [(&'static str, &str); 9] {
        [
            ("axes.facecolor", self.axes_facecolor.as_str()),
            ("axes.edgecolor", self.axes_edgecolor.as_str()),
            ("axes.labelcolor", self.axes_labelcolor.as_str()),
            ("axes.titlecolor", self.axes_titlecolor.as_str()),
            ("figure.facecolor", self.figure_facecolor.as_str()),
            ("figure.edgecolor", self.figure_edgecolor.as_str()),
            ("text.color", self.text_color.as_str()),
            ("xtick.color", self.xtick_color.as_str()),
            ("ytick.color", self.ytick_color.as_str()),
        ]
    }

    /// Serialize as a style sheet: one `key: "value"` line per property, then
    /// the color cycle.
    pub fn to_stylesheet(&self) -> String {
        let mut out = String::new();
        for (key, value) in self.entries() {
            let _ = writeln!(out, "{key}: \"{value}\"");
        }
        let cycle = self
            .color_cycle
            .iter()
            .map(|c| format!("'{c}'"))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "{CYCLE_KEY}: cycler(color=[{cycle}])");
        out
    }
}
