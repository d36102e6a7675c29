use egui::TextureHandle;
use log::{debug, info};
use std::path::Path;
use std::sync::Arc;

use crate::analysis::{compute_summaries, filter_records, Dataset, FilteredView};
use crate::brand::UiPalette;
use crate::error::Result;
use crate::plotting::{render_chart, ChartPlan, ChartStyle, ChartTheme, PlotCache, RenderedChart};
use crate::types::{FilterParams, Summaries, ALL_TYPES};

/// Main dashboard state
pub struct Dashboard {
    dataset: Dataset,
    theme: ChartTheme,
    style: ChartStyle,
    params: FilterParams,
    summaries: Summaries,
    type_options: Vec<String>,
    year_options: Vec<i32>,
    cache: PlotCache,
    pub title: String,
    pub palette: UiPalette,
    pub chart_texture: Option<TextureHandle>,
    pub update_needed: bool,
    pub error_message: Option<String>,
}

impl Dashboard {
    /// Build the dashboard. Summaries are computed here, once.
    pub fn new(dataset: Dataset, theme: ChartTheme, style: ChartStyle, params: FilterParams) -> Self {
        let summaries = compute_summaries(&dataset);
        let mut type_options = vec![ALL_TYPES.to_string()];
        type_options.extend(dataset.subscription_types());
        let year_options = dataset.years();

        Self {
            dataset,
            theme,
            style,
            params,
            summaries,
            type_options,
            year_options,
            cache: PlotCache::default(),
            title: "Explore total subscriptions".to_string(),
            palette: UiPalette::default(),
            chart_texture: None,
            update_needed: true,
            error_message: None,
        }
    }

    pub fn with_palette(mut self, palette: UiPalette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_cache_size(mut self, capacity: usize) -> Self {
        self.cache = PlotCache::new(capacity);
        self
    }

    pub fn params(&self) -> &FilterParams {
        &self.params
    }

    pub fn summaries(&self) -> &Summaries {
        &self.summaries
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// "All" followed by every type in first-seen order.
    pub fn type_options(&self) -> &[String] {
        &self.type_options
    }

    pub fn year_options(&self) -> &[i32] {
        &self.year_options
    }

    /// Replace the filter parameters. Returns whether anything changed; a
    /// change schedules a re-render.
    pub fn set_params(&mut self, params: FilterParams) -> bool {
        if params == self.params {
            return false;
        }
        debug!(
            "Filter changed: type={} start={} end={}",
            params.subscription_type, params.start, params.end
        );
        self.params = params;
        self.update_needed = true;
        true
    }

    /// The records the chart currently shows.
    pub fn view(&self) -> FilteredView {
        filter_records(&self.dataset, &self.params)
    }

    pub fn plan(&self) -> ChartPlan {
        ChartPlan::new(
            &self.view(),
            &self.params,
            self.dataset.date_bounds(),
            &self.theme,
        )
    }

    /// Render the chart for the current parameters, reusing a cached bitmap
    /// when these parameters were rendered before.
    pub fn render(&mut self) -> Result<(Arc<RenderedChart>, Summaries)> {
        let chart = match self.cache.get(&self.params) {
            Some(chart) => {
                debug!("Chart cache hit for {:?}", self.params);
                chart
            }
            None => {
                let chart = Arc::new(render_chart(&self.plan(), &self.theme, &self.style)?);
                self.cache.put(self.params.clone(), Arc::clone(&chart));
                chart
            }
        };
        self.update_needed = false;
        Ok((chart, self.summaries.clone()))
    }

    /// Drop the stale chart and surface a failed render. The next filter
    /// change schedules another attempt.
    pub fn record_render_error(&mut self, message: impl Into<String>) {
        self.chart_texture = None;
        self.error_message = Some(message.into());
        self.update_needed = false;
    }

    /// Render the current view to a PNG file.
    pub fn export_png<P: AsRef<Path>>(&mut self, path: P) -> Result<Summaries> {
        let (chart, summaries) = self.render()?;
        chart.save_png(path.as_ref())?;
        info!(
            "Wrote chart with {} series to {}",
            chart.series_count,
            path.as_ref().display()
        );
        Ok(summaries)
    }
}
