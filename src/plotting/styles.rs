use log::warn;
use plotters::style::RGBColor;
use std::path::Path;

use crate::brand::color::parse_color;
use crate::brand::style::CYCLE_KEY;
use crate::error::{DashboardError, Result};

/// Chart colors, loaded from a style sheet.
///
/// Built once at startup and passed by reference into every render.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartTheme {
    pub axes_face: RGBColor,
    pub axes_edge: RGBColor,
    pub axes_label: RGBColor,
    pub axes_title: RGBColor,
    pub figure_face: RGBColor,
    pub figure_edge: RGBColor,
    pub text: RGBColor,
    pub xtick: RGBColor,
    pub ytick: RGBColor,
    pub grid: RGBColor,
    /// Series colors, reused in order when there are more series than colors
    pub color_cycle: Vec<RGBColor>,
}

impl Default for ChartTheme {
    fn default() -> Self {
        let black = RGBColor(0, 0, 0);
        let white = RGBColor(255, 255, 255);
        Self {
            axes_face: white,
            axes_edge: black,
            axes_label: black,
            axes_title: black,
            figure_face: white,
            figure_edge: white,
            text: black,
            xtick: black,
            ytick: black,
            grid: RGBColor(0xb0, 0xb0, 0xb0),
            color_cycle: vec![
                RGBColor(0x1f, 0x77, 0xb4),
                RGBColor(0xff, 0x7f, 0x0e),
                RGBColor(0x2c, 0xa0, 0x2c),
            ],
        }
    }
}

impl ChartTheme {
    /// Load a theme from a style sheet file.
    pub fn from_stylesheet_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_stylesheet(&text)
    }

    /// Parse a style sheet on top of the default theme.
    ///
    /// Blank lines and `#` comments are skipped; keys the chart does not use
    /// are ignored with a warning.
    pub fn from_stylesheet(text: &str) -> Result<Self> {
        let mut theme = Self::default();

        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let sheet_error = |message: String| DashboardError::StyleSheet {
                line: idx + 1,
                message,
            };

            let (key, value) = line
                .split_once(':')
                .ok_or_else(|| sheet_error("expected `key: value`".to_string()))?;
            let (key, value) = (key.trim(), value.trim());

            if key == CYCLE_KEY {
                theme.color_cycle = parse_cycler(value).map_err(sheet_error)?;
                continue;
            }

            let slot = match key {
                "axes.facecolor" => &mut theme.axes_face,
                "axes.edgecolor" => &mut theme.axes_edge,
                "axes.labelcolor" => &mut theme.axes_label,
                "axes.titlecolor" => &mut theme.axes_title,
                "figure.facecolor" => &mut theme.figure_face,
                "figure.edgecolor" => &mut theme.figure_edge,
                "text.color" => &mut theme.text,
                "xtick.color" => &mut theme.xtick,
                "ytick.color" => &mut theme.ytick,
                "grid.color" => &mut theme.grid,
                _ => {
                    warn!("Ignoring unsupported style sheet key `{}`", key);
                    continue;
                }
            };
            *slot = parse_color(value).map_err(|e| sheet_error(e.to_string()))?;
        }

        Ok(theme)
    }

    /// Color of the `index`-th series.
    pub fn series_color(&self, index: usize) -> RGBColor {
        if self.color_cycle.is_empty() {
            return self.text;
        }
        self.color_cycle[index % self.color_cycle.len()]
    }
}

/// Parse `cycler(color=['a', 'b'])` into colors.
fn parse_cycler(value: &str) -> std::result::Result<Vec<RGBColor>, String> {
    let inner = value
        .strip_prefix("cycler(")
        .and_then(|v| v.strip_suffix(')'))
        .ok_or_else(|| format!("expected `cycler(...)`, got `{value}`"))?;
    let list = inner
        .split_once('[')
        .and_then(|(_, rest)| rest.rsplit_once(']'))
        .map(|(list, _)| list)
        .ok_or_else(|| "expected a bracketed color list".to_string())?;

    let colors = list
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(|c| parse_color(c).map_err(|e| e.to_string()))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    if colors.is_empty() {
        return Err("color cycle is empty".to_string());
    }
    Ok(colors)
}

/// Chart layout configuration
#[derive(Debug, Clone)]
pub struct ChartStyle {
    pub width: u32,
    pub height: u32,
    pub line_width: u32,
    pub font_size: f64,
    pub margin: u32,
    pub label_area_size: u32,
    pub grid_alpha: f64,
    pub x_labels: usize,
    pub y_labels: usize,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            line_width: 2,
            font_size: 15.0,
            margin: 10,
            label_area_size: 50,
            grid_alpha: 0.6,
            x_labels: 8,
            y_labels: 8,
        }
    }
}
