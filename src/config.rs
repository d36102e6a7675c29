//! Command-line configuration.
//!
//! Paths can also come from the environment (`SUBDASH_DATA`, `SUBDASH_BRAND`).
//! Initial filter values default to the full span of the dataset.

use clap::Parser;
use std::path::PathBuf;

use crate::analysis::Dataset;
use crate::error::{DashboardError, Result};
use crate::plotting::ChartStyle;
use crate::types::{FilterParams, TypeSelection, YearMonth, ALL_TYPES};

#[derive(Debug, Clone, Parser)]
#[command(name = "subdash")]
#[command(about = "Explore total subscriptions, styled with a _brand.yml file")]
pub struct Config {
    /// CSV file with date, subscription_type and active_subscriptions columns
    #[arg(long, env = "SUBDASH_DATA", default_value = "data/subscriptions.csv")]
    pub data: PathBuf,

    /// Brand file providing the color palette
    #[arg(long, env = "SUBDASH_BRAND", default_value = "_brand.yml")]
    pub brand: PathBuf,

    /// Initially selected subscription type
    #[arg(long = "type", default_value = ALL_TYPES)]
    pub subscription_type: String,

    /// First month shown, as YYYY-MM (default: earliest month in the data)
    #[arg(long)]
    pub start: Option<YearMonth>,

    /// Last month shown, as YYYY-MM (default: latest month in the data)
    #[arg(long)]
    pub end: Option<YearMonth>,

    /// Chart width in pixels
    #[arg(long, default_value_t = 1000)]
    pub width: u32,

    /// Chart height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Number of rendered charts kept for quick switching between filters
    #[arg(long, default_value_t = 16)]
    pub cache_size: usize,

    /// Render the initial chart to this PNG and print the summaries instead of
    /// opening a window
    #[arg(long)]
    pub export: Option<PathBuf>,
}

impl Config {
    /// Resolve the filter values the dashboard opens with.
    pub fn initial_params(&self, dataset: &Dataset) -> Result<FilterParams> {
        let selection = TypeSelection::from_label(&self.subscription_type);
        if let TypeSelection::Only(name) = &selection {
            if !dataset.subscription_types().contains(name) {
                return Err(DashboardError::UnknownSubscriptionType(name.clone()));
            }
        }

        let bounds = dataset.date_bounds();
        let start = match (self.start, bounds) {
            (Some(start), _) => start,
            (None, Some((first, _))) => YearMonth::of(first),
            (None, None) => YearMonth::new(2020, 1)?,
        };
        let end = match (self.end, bounds) {
            (Some(end), _) => end,
            (None, Some((_, last))) => YearMonth::of(last),
            (None, None) => start,
        };

        Ok(FilterParams {
            subscription_type: selection,
            start,
            end,
        })
    }

    pub fn chart_style(&self) -> ChartStyle {
        ChartStyle {
            width: self.width.max(200),
            height: self.height.max(150),
            ..ChartStyle::default()
        }
    }
}
