use log::debug;
use std::io::Write;
use std::path::Path;

use super::color::to_hex;
use super::StyleConfig;
use crate::error::{DashboardError, Result};
use crate::plotting::ChartTheme;

/// Hand a style configuration to the chart theme loader.
///
/// The style sheet is written to a uniquely named temporary file which is
/// deleted before this function returns, whether or not loading succeeded.
pub fn install(style: &StyleConfig) -> Result<ChartTheme> {
    install_in(&std::env::temp_dir(), style)
}

/// Same as [`install`], with the temporary file created inside `dir`.
pub fn install_in(dir: &Path, style: &StyleConfig) -> Result<ChartTheme> {
    let mut sheet = tempfile::Builder::new()
        .prefix("subdash-")
        .suffix(".mplstyle")
        .tempfile_in(dir)
        .map_err(DashboardError::Resource)?;

    sheet
        .write_all(style.to_stylesheet().as_bytes())
        .and_then(|_| sheet.flush())
        .map_err(DashboardError::Resource)?;

    debug!("Loading chart style sheet from {}", sheet.path().display());
    let theme = ChartTheme::from_stylesheet_file(sheet.path())?;
    debug!(
        "Chart theme: figure {} axes {} text {} with {} cycle colors",
        to_hex(theme.figure_face),
        to_hex(theme.axes_face),
        to_hex(theme.text),
        theme.color_cycle.len()
    );

    sheet.close().map_err(DashboardError::Resource)?;
    Ok(theme)
}
