//! # Subscription Dashboard Library
//!
//! `subdash` is a small interactive dashboard for exploring subscription
//! counts over time. It loads a CSV of `(date, subscription_type,
//! active_subscriptions)` readings, filters them by type and month range, and
//! draws one line per subscription type together with three summary values.
//! Chart and interface colors come from a `_brand.yml` file.
//!
//! ## Features
//!
//! - CSV loading with column lookup by name
//! - Type and inclusive month-range filtering, grouped by type
//! - Summary values over the full dataset
//! - Brand palette to chart style sheet translation
//! - Chart rendering with `plotters`, cached per filter selection
//! - An `egui` dashboard and a headless PNG export
//!
//! ## Example
//!
//! ```no_run
//! use subdash::analysis::Dataset;
//! use subdash::app::Dashboard;
//! use subdash::brand::theme_from_brand_file;
//! use subdash::config::Config;
//! use clap::Parser;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::parse_from(["subdash"]);
//! let dataset = Dataset::from_path(&config.data)?;
//! let (_brand, theme) = theme_from_brand_file(&config.brand)?;
//! let params = config.initial_params(&dataset)?;
//!
//! let mut dashboard = Dashboard::new(dataset, theme, config.chart_style(), params);
//! let summaries = dashboard.export_png("subscriptions.png")?;
//! println!("{} active subscriptions", summaries.current_subscriptions);
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod app;
pub mod brand;
pub mod config;
pub mod error;
pub mod plotting;
pub mod types;
pub mod utils;

// Re-export main types for convenience
pub use app::Dashboard;
pub use error::{DashboardError, Result};
pub use types::{FilterParams, Summaries, SubscriptionRecord, TypeSelection, YearMonth};
