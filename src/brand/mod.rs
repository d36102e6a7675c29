//! # Brand Styling
//!
//! Turns a `_brand.yml` file into the colors used by charts and by the UI.
//!
//! The chart side goes through a style sheet: [`translate`] maps palette roles
//! onto style properties, and [`install`] hands the serialized sheet to the
//! chart theme loader through a temporary file that is removed afterwards.

pub mod color;
pub mod install;
pub mod spec;
pub mod style;

#[cfg(test)]
mod tests;

pub use color::parse_color;
pub use install::{install, install_in};
pub use spec::{BrandSpec, UiPalette};
pub use style::{translate, StyleConfig, FALLBACK_CYCLE_COLOR};

use std::path::Path;

use crate::error::Result;
use crate::plotting::ChartTheme;

/// Load a brand file and produce the chart theme in one step.
pub fn theme_from_brand_file<P: AsRef<Path>>(path: P) -> Result<(BrandSpec, ChartTheme)> {
    let brand = BrandSpec::from_path(path)?;
    let style = translate(&brand)?;
    let theme = install(&style)?;
    Ok((brand, theme))
}
