use chrono::NaiveDate;
use std::collections::HashMap;

use super::Dataset;
use crate::types::FilterParams;

/// All records of one subscription type inside the filtered range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesGroup {
    pub subscription_type: String,
    /// (date, active subscriptions) in dataset order
    pub points: Vec<(NaiveDate, u64)>,
}

/// The filtered and grouped subset of the dataset that the chart draws.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilteredView {
    /// One group per type, ordered by first appearance
    pub groups: Vec<SeriesGroup>,
}

impl FilteredView {
    /// Number of line series the chart will draw.
    pub fn series_count(&self) -> usize {
        self.groups.len()
    }

    /// Number of records across all groups.
    pub fn record_count(&self) -> usize {
        self.groups.iter().map(|g| g.points.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Largest count in the view, used for the y range.
    pub fn max_count(&self) -> Option<u64> {
        self.groups
            .iter()
            .flat_map(|g| g.points.iter().map(|(_, count)| *count))
            .max()
    }
}

/// Restrict the dataset to the selected type and inclusive month range, then
/// group by type.
///
/// An inverted range (`start` after `end`) matches nothing.
pub fn filter_records(dataset: &Dataset, params: &FilterParams) -> FilteredView {
    let start = params.start_date();
    let end = params.end_date();

    let mut groups: Vec<SeriesGroup> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    let retained = dataset
        .records()
        .iter()
        .filter(|r| params.subscription_type.matches(&r.subscription_type))
        .filter(|r| start <= r.date && r.date <= end);

    for record in retained {
        let slot = *index
            .entry(record.subscription_type.as_str())
            .or_insert_with(|| {
                groups.push(SeriesGroup {
                    subscription_type: record.subscription_type.clone(),
                    points: Vec::new(),
                });
                groups.len() - 1
            });
        groups[slot]
            .points
            .push((record.date, record.active_subscriptions));
    }

    FilteredView { groups }
}
