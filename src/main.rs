//! Subscription Dashboard
//!
//! A GUI application for exploring subscription counts, styled from a brand file.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use eframe::egui;
use log::info;

use subdash::analysis::Dataset;
use subdash::app::theme::apply_brand_visuals;
use subdash::app::{Dashboard, DashboardApp};
use subdash::brand::{theme_from_brand_file, UiPalette};
use subdash::config::Config;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();

    let dataset = Dataset::from_path(&config.data)
        .with_context(|| format!("failed to load dataset {}", config.data.display()))?;
    let (brand, theme) = theme_from_brand_file(&config.brand)
        .with_context(|| format!("failed to apply brand {}", config.brand.display()))?;
    let palette = UiPalette::from_brand(&brand).context("invalid brand theme color")?;
    let params = config.initial_params(&dataset)?;

    let mut dashboard = Dashboard::new(dataset, theme, config.chart_style(), params)
        .with_palette(palette)
        .with_cache_size(config.cache_size);
    if let Some(name) = brand.display_name() {
        dashboard = dashboard.with_title(name);
    }

    if let Some(path) = &config.export {
        let summaries = dashboard
            .export_png(path)
            .with_context(|| format!("failed to export chart to {}", path.display()))?;
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    info!("Opening dashboard window");
    let title = dashboard.title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 800.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title(&title),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            apply_brand_visuals(&cc.egui_ctx, &palette);
            Ok(Box::new(DashboardApp::new(dashboard)) as Box<dyn eframe::App>)
        }),
    )
    .map_err(|e| anyhow!("error running dashboard: {e}"))
}
