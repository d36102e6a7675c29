use plotters::style::RGBColor;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use super::color::parse_color;
use crate::error::Result;

/// The subset of a `_brand.yml` file the dashboard understands.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BrandSpec {
    #[serde(default)]
    pub meta: Option<BrandMeta>,
    #[serde(default)]
    pub color: BrandColors,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BrandMeta {
    pub name: Option<BrandName>,
}

/// `meta.name` may be a plain string or a short/full pair.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BrandName {
    Plain(String),
    Detailed {
        short: Option<String>,
        full: Option<String>,
    },
}

/// The `color` section. Theme colors may name a palette role or be literal colors.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BrandColors {
    #[serde(default)]
    pub palette: HashMap<String, String>,
    pub foreground: Option<String>,
    pub background: Option<String>,
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub info: Option<String>,
}

impl BrandSpec {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let brand = Self::from_yaml_str(&text)?;
        log::info!(
            "Loaded brand {} with {} palette colors from {}",
            brand.display_name().unwrap_or("<unnamed>"),
            brand.color.palette.len(),
            path.display()
        );
        Ok(brand)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// A palette entry by role name.
    pub fn palette(&self, role: &str) -> Option<&str> {
        self.color.palette.get(role).map(String::as_str)
    }

    /// Resolve a theme color value: palette role names map to their palette
    /// entry, anything else is taken literally.
    pub fn resolve(&self, value: &str) -> String {
        self.palette(value).unwrap_or(value).to_string()
    }

    /// The brand's full name, falling back to the short one.
    pub fn display_name(&self) -> Option<&str> {
        match self.meta.as_ref()?.name.as_ref()? {
            BrandName::Plain(name) => Some(name.as_str()),
            BrandName::Detailed { short, full } => full.as_deref().or(short.as_deref()),
        }
    }
}

/// Colors for the window chrome and the three value boxes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiPalette {
    pub background: RGBColor,
    pub foreground: RGBColor,
    pub primary: RGBColor,
    pub secondary: RGBColor,
    pub info: RGBColor,
}

impl Default for UiPalette {
    fn default() -> Self {
        Self {
            background: RGBColor(255, 255, 255),
            foreground: RGBColor(33, 37, 41),
            primary: RGBColor(13, 110, 253),
            secondary: RGBColor(108, 117, 125),
            info: RGBColor(13, 202, 240),
        }
    }
}

impl UiPalette {
    /// Pick UI colors from the brand's theme colors, falling back to palette
    /// roles and then to the defaults.
    pub fn from_brand(brand: &BrandSpec) -> Result<Self> {
        let defaults = Self::default();
        let pick = |theme: &Option<String>, role: &str, default: RGBColor| -> Result<RGBColor> {
            let value = theme
                .as_deref()
                .map(|v| brand.resolve(v))
                .or_else(|| brand.palette(role).map(str::to_string));
            match value {
                Some(v) => parse_color(&v),
                None => Ok(default),
            }
        };

        let c = &brand.color;
        Ok(Self {
            background: pick(&c.background, "neutral", defaults.background)?,
            foreground: pick(&c.foreground, "black", defaults.foreground)?,
            primary: pick(&c.primary, "violet", defaults.primary)?,
            secondary: pick(&c.secondary, "red", defaults.secondary)?,
            info: pick(&c.info, "green", defaults.info)?,
        })
    }
}
