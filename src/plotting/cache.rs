use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;

use super::RenderedChart;
use crate::types::FilterParams;

/// Recently rendered charts, keyed by the filter parameters that produced them.
///
/// The theme and dataset never change after startup, so the parameters alone
/// identify a chart.
pub struct PlotCache {
    charts: LruCache<FilterParams, Arc<RenderedChart>>,
}

impl PlotCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            charts: LruCache::new(capacity),
        }
    }

    pub fn get(&mut self, params: &FilterParams) -> Option<Arc<RenderedChart>> {
        self.charts.get(params).cloned()
    }

    pub fn put(&mut self, params: FilterParams, chart: Arc<RenderedChart>) {
        self.charts.put(params, chart);
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }
}

impl Default for PlotCache {
    fn default() -> Self {
        Self::new(16)
    }
}
